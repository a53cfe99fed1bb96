// Page behaviors that run next to the particle background: navbar state,
// scroll tracking, reveal and counter timing, pointer effects and the
// konami easter egg. They share nothing with the particle field.
//
// Each type is plain state plus arithmetic, exported to JavaScript so the
// page script decides when to call it and applies the returned classes,
// styles and timers.

pub mod counter;
pub mod konami;
pub mod loading;
pub mod menu;
pub mod navbar;
pub mod pointer;
pub mod reveal;
pub mod scroll;
