//! Image carousel: pure state and geometry, plus the DOM bindings that feed
//! it. The Yew component lives in `components::carousel`.

pub mod bindings;
pub mod layout;
pub mod state;

pub use state::{CarouselState, Mode, Transition};
