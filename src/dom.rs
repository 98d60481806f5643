//! Small helpers over `web-sys` shared by the widgets.

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, AddEventListenerOptions, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::carousel::layout::Span;

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(_) => {
                debug!("could not listen for {}", event);
                None
            }
        }
    }

    /// Like `new`, but the handler may call `prevent_default` (touch events
    /// are passive by default in most browsers).
    pub fn non_passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(_) => {
                debug!("could not listen for {}", event);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Extent of `element` in viewport coordinates.
pub fn viewport_span(element: &HtmlElement) -> Span {
    let rect = element.get_bounding_client_rect();
    Span::new(rect.left(), rect.width())
}

/// Extent of `element` relative to its offset parent (the scroll track).
pub fn offset_span(element: &HtmlElement) -> Span {
    Span::new(element.offset_left() as f64, element.offset_width() as f64)
}

pub fn smooth_scroll_to(element: &HtmlElement, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_to_with_scroll_to_options(&options);
}

pub fn supports_scrollend(element: &HtmlElement) -> bool {
    js_sys::Reflect::has(element, &JsValue::from_str("onscrollend")).unwrap_or(false)
}

/// Drops focus from the element an event fired on, if it can hold focus.
pub fn blur_target(event: &Event) {
    if let Some(element) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
        let _ = element.blur();
    }
}

/// Waits for a programmatic scroll to finish. Dropping it stops waiting.
pub enum ScrollSettle {
    /// The browser reports `scrollend`.
    Event(Listener),
    /// No `scrollend` support, fall back to a fixed delay.
    Delay(Timeout),
}

impl ScrollSettle {
    /// Calls `on_settle` once scrolling `element` has come to rest. Returns
    /// `None` when `on_settle` already ran because nothing needed to wait.
    pub fn watch<F>(element: &HtmlElement, target_left: f64, delay_ms: u32, on_settle: F) -> Option<Self>
    where
        F: Fn() + Clone + 'static,
    {
        // The browser clamps to the scrollable range, so compare against that.
        let max_left = (element.scroll_width() - element.client_width()).max(0) as f64;
        let reachable = target_left.clamp(0.0, max_left);
        if (element.scroll_left() as f64 - reachable).abs() < 1.0 {
            on_settle();
            return None;
        }

        if supports_scrollend(element) {
            let on_scrollend = on_settle.clone();
            if let Some(listener) = Listener::new(element, "scrollend", move |_| on_scrollend()) {
                return Some(ScrollSettle::Event(listener));
            }
        }
        Some(ScrollSettle::Delay(Timeout::new(delay_ms, on_settle)))
    }
}
