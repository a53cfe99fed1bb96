// Frame driver for the particle background. Owns the canvas, the field and
// the requestAnimationFrame / resize callbacks that keep it moving.

use crate::field::ParticleField;
use crate::renderer::CanvasRenderer;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

struct AnimationState {
    canvas: HtmlCanvasElement,
    renderer: CanvasRenderer,
    field: ParticleField<SmallRng>,
    frame_id: Option<i32>,
    running: bool,
}

impl AnimationState {
    fn render(&mut self) -> Result<(), JsValue> {
        #[cfg(feature = "profiling")]
        let _timer = crate::Timer::new("Animator::render");
        self.field.render_frame(&mut self.renderer)
    }

    fn fit_to_window(&mut self, window: &Window) -> Result<(), JsValue> {
        let (width, height) = window_size(window)?;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.field.resize(width as f64, height as f64);
        Ok(())
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[wasm_bindgen]
pub struct Animator {
    state: Rc<RefCell<AnimationState>>,
    frame_callback: FrameCallback,
    resize_callback: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl Animator {
    // Sizes the canvas to the window and seeds the field from entropy
    pub fn attach(canvas_id: &str) -> Result<Animator, JsValue> {
        Animator::with_rng(canvas_id, SmallRng::from_entropy())
    }

    // Deterministic variant, same seed gives the same particles
    pub fn attach_seeded(canvas_id: &str, seed: u32) -> Result<Animator, JsValue> {
        Animator::with_rng(canvas_id, SmallRng::seed_from_u64(seed as u64))
    }

    // Starts the requestAnimationFrame loop and the resize listener
    pub fn run(&mut self) -> Result<(), JsValue> {
        if self.state.borrow().running {
            return Ok(());
        }
        let window = window()?;

        let state = self.state.clone();
        let next_frame = self.frame_callback.clone();
        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut state = state.borrow_mut();
            state.frame_id = None;
            if !state.running {
                return;
            }
            if let Err(err) = state.render() {
                log!("particle frame failed: {:?}", err);
            }
            if let Some(callback) = next_frame.borrow().as_ref() {
                match request_animation_frame(callback) {
                    Ok(id) => state.frame_id = Some(id),
                    Err(err) => log!("could not schedule next frame: {:?}", err),
                }
            }
        }) as Box<dyn FnMut()>));

        let scheduled = match self.frame_callback.borrow().as_ref() {
            Some(callback) => request_animation_frame(callback),
            None => return Ok(()),
        };
        let id = match scheduled {
            Ok(id) => id,
            Err(err) => {
                self.frame_callback.borrow_mut().take();
                return Err(err);
            }
        };

        let state = self.state.clone();
        let resize_callback = Closure::wrap(Box::new(move || {
            let resized = web_sys::window()
                .ok_or_else(|| JsValue::from_str("no global window"))
                .and_then(|window| state.borrow_mut().fit_to_window(&window));
            if let Err(err) = resized {
                log!("particle resize failed: {:?}", err);
            }
        }) as Box<dyn FnMut()>);
        if let Err(err) =
            window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())
        {
            if let Err(cancel_err) = window.cancel_animation_frame(id) {
                log!("could not cancel frame {}: {:?}", id, cancel_err);
            }
            self.frame_callback.borrow_mut().take();
            return Err(err);
        }
        self.resize_callback = Some(resize_callback);

        let mut state = self.state.borrow_mut();
        state.frame_id = Some(id);
        state.running = true;
        Ok(())
    }

    // Cancels the pending frame and detaches the resize listener
    pub fn stop(&mut self) {
        let frame_id = {
            let mut state = self.state.borrow_mut();
            state.running = false;
            state.frame_id.take()
        };
        if let Some(window) = web_sys::window() {
            if let Some(id) = frame_id {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log!("could not cancel frame {}: {:?}", id, err);
                }
            }
            if let Some(callback) = self.resize_callback.as_ref() {
                if let Err(err) =
                    window.remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                {
                    log!("could not detach resize listener: {:?}", err);
                }
            }
        }
        self.resize_callback = None;
        // drops the closure and with it the self reference that kept the loop alive
        self.frame_callback.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    // Renders a single frame, for hosts that drive their own loop
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.state.borrow_mut().render()
    }

    // Re-seeds the particles for the current canvas size
    pub fn reinit(&mut self) {
        let mut state = self.state.borrow_mut();
        state.field.init();
        log!("particle field re-seeded with {} particles", state.field.len());
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().field.len()
    }

    pub fn width(&self) -> f64 {
        self.state.borrow().field.width()
    }

    pub fn height(&self) -> f64 {
        self.state.borrow().field.height()
    }
}

impl Animator {
    fn with_rng(canvas_id: &str, rng: SmallRng) -> Result<Animator, JsValue> {
        #[cfg(feature = "profiling")]
        let _timer = crate::Timer::new("Animator::attach");
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element '{}' is not a canvas", canvas_id)))?;

        let (width, height) = window_size(&window)?;
        canvas.set_width(width);
        canvas.set_height(height);
        let renderer = CanvasRenderer::new(&canvas)?;
        let field = ParticleField::new(width as f64, height as f64, rng);
        log!(
            "particle field {}x{} with {} particles",
            width,
            height,
            field.len()
        );

        Ok(Animator {
            state: Rc::new(RefCell::new(AnimationState {
                canvas,
                renderer,
                field,
                frame_id: None,
                running: false,
            })),
            frame_callback: Rc::new(RefCell::new(None)),
            resize_callback: None,
        })
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn window_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}
