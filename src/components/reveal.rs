use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::WidgetConfig;

/// Fires once, on the first intersecting observation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Watches one element and calls `on_reveal` the first time it scrolls into
/// view. Disconnects on drop. Without observer support the element is
/// revealed straight away.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe<F>(element: &Element, config: &WidgetConfig, on_reveal: F) -> Option<Self>
    where
        F: Fn() + Clone + 'static,
    {
        let mut latch = RevealLatch::default();
        let reveal = on_reveal.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if latch.observe(entry.is_intersecting()) {
                    reveal();
                    observer.unobserve(&entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(config.reveal_root_margin);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(_) => {
                debug!("IntersectionObserver unavailable, revealing immediately");
                on_reveal();
                None
            }
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Start from the hidden `scroll-animate` state before the reveal.
    #[prop_or_default]
    pub start_hidden: bool,
    #[prop_or_default]
    pub config: WidgetConfig,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let config = props.config;
        use_effect_with_deps(
            move |_| {
                let observer = match node.cast::<Element>() {
                    Some(element) => RevealObserver::observe(&element, &config, move || revealed.set(true)),
                    None => None,
                };
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                props.class.clone(),
                props.start_hidden.then_some("scroll-animate"),
                (*revealed).then_some("animate-in")
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
