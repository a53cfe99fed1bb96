// Client-side behavior of the portfolio page, compiled to WebAssembly.
//
// The particle background (field, renderer, animator) is the core; the
// effects module holds the smaller scroll, pointer and keyboard behaviors.

use wasm_bindgen::prelude::*;
use web_sys::console;

// A macro to provide `println!(..)`-style syntax for `console.log` logging.
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    }
}

mod utils;

pub mod animator;
pub mod color;
pub mod config;
pub mod effects;
pub mod field;
pub mod page;
pub mod particle;
pub mod renderer;

pub use animator::Animator;
pub use color::Color;
pub use config::FieldConfig;
pub use field::{Link, ParticleField};
pub use particle::Particle;
pub use renderer::{CanvasRenderer, FrameSurface};

// Use `wee_alloc` as the global allocator when the feature is on.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Called once by the page script: panic hook, particle background, easter egg
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    utils::set_panic_hook();
    page::mount()
}

// Stops the background loop and removes the listeners installed by `initialize`
#[wasm_bindgen]
pub fn shutdown() {
    page::unmount();
}

#[wasm_bindgen]
pub fn mounted_particle_count() -> usize {
    page::particle_count()
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
