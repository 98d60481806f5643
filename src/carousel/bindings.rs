//! Mode-specific input bindings on the carousel track.
//!
//! Desktop input arrives through the arrow buttons, which only get click
//! handlers while the view renders in Desktop mode. Mobile input needs raw
//! listeners on the track: touch gestures (with `touchmove` non-passive so
//! the page does not pan) and scroll.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, TouchEvent, TouchList};
use yew::Callback;

use super::state::Mode;
use crate::dom::Listener;

pub enum Bindings {
    /// Nothing attached yet, or the track element was missing.
    Unbound,
    Desktop,
    Mobile(MobileBindings),
}

impl Bindings {
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Bindings::Unbound => None,
            Bindings::Desktop => Some(Mode::Desktop),
            Bindings::Mobile(_) => Some(Mode::Mobile),
        }
    }
}

pub struct MobileBindings {
    _listeners: Vec<Listener>,
}

impl MobileBindings {
    /// `on_swipe` receives `(start_x, end_x)` of a finished touch.
    pub fn attach(track: &HtmlElement, on_swipe: Callback<(f64, f64)>, on_scroll: Callback<()>) -> Self {
        let touch_start: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
        let mut listeners = Vec::with_capacity(5);

        {
            let touch_start = touch_start.clone();
            listeners.extend(Listener::new(track, "touchstart", move |event| {
                if let Some(x) = first_touch_x(&event, TouchEvent::touches) {
                    touch_start.set(Some(x));
                }
            }));
        }
        {
            let touch_start = touch_start.clone();
            listeners.extend(Listener::non_passive(track, "touchmove", move |event| {
                if touch_start.get().is_some() {
                    event.prevent_default();
                }
            }));
        }
        {
            let touch_start = touch_start.clone();
            listeners.extend(Listener::new(track, "touchend", move |event| {
                let Some(start_x) = touch_start.take() else {
                    return;
                };
                if let Some(end_x) = first_touch_x(&event, TouchEvent::changed_touches) {
                    on_swipe.emit((start_x, end_x));
                }
            }));
        }
        listeners.extend(Listener::new(track, "touchcancel", move |_| {
            touch_start.set(None);
        }));
        listeners.extend(Listener::new(track, "scroll", move |_| on_scroll.emit(())));

        Self {
            _listeners: listeners,
        }
    }
}

fn first_touch_x(event: &Event, list: fn(&TouchEvent) -> TouchList) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    list(event).get(0).map(|touch| touch.client_x() as f64)
}
