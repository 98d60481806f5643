use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::carousel::bindings::{Bindings, MobileBindings};
use crate::carousel::layout::{self, Span};
use crate::carousel::{CarouselState, Mode, Transition};
use crate::config::WidgetConfig;
use crate::content::Slide;
use crate::debounce::Debouncer;
use crate::dom::{self, Listener, ScrollSettle};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or_default]
    pub config: WidgetConfig,
}

pub enum CarouselMsg {
    Next,
    Previous,
    Indicator(usize),
    ToggleDescription(usize),
    Swipe { start_x: f64, end_x: f64 },
    Scrolled,
    ScrollSettled,
    NavigationSettled,
    Resized,
    ResizeSettled,
}

pub struct Carousel {
    state: CarouselState,
    track: NodeRef,
    bindings: Bindings,
    resize_debounce: Debouncer,
    scroll_debounce: Debouncer,
    settle: Option<ScrollSettle>,
    _resize_listener: Option<Listener>,
}

fn overlays(slides: &[Slide]) -> Vec<bool> {
    slides.iter().map(|slide| slide.description.is_some()).collect()
}

impl Component for Carousel {
    type Message = CarouselMsg;
    type Properties = CarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config;
        let width = dom::viewport_width().unwrap_or(config.wide_breakpoint);
        let state = CarouselState::new(overlays(&ctx.props().slides), width, config);

        let resize_listener = web_sys::window().and_then(|window| {
            let link = ctx.link().clone();
            Listener::new(&window, "resize", move |_| link.send_message(CarouselMsg::Resized))
        });

        info!(
            "Carousel ready: {} slides, {:?} mode at {}px",
            state.item_count(),
            state.mode(),
            width
        );

        Self {
            state,
            track: NodeRef::default(),
            bindings: Bindings::Unbound,
            resize_debounce: Debouncer::new(config.resize_debounce_ms),
            scroll_debounce: Debouncer::new(config.scroll_debounce_ms),
            settle: None,
            _resize_listener: resize_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CarouselMsg::Next => {
                let target = self.state.next();
                self.navigate(ctx, target)
            }
            CarouselMsg::Previous => {
                let target = self.state.previous();
                self.navigate(ctx, target)
            }
            CarouselMsg::Indicator(index) => {
                let target = self.state.select_indicator(index);
                self.navigate(ctx, target)
            }
            CarouselMsg::Swipe { start_x, end_x } => {
                let target = self.state.swipe(start_x, end_x);
                self.navigate(ctx, target)
            }
            CarouselMsg::ToggleDescription(index) => self.state.toggle_description(index),
            CarouselMsg::Scrolled => {
                let link = ctx.link().clone();
                self.scroll_debounce
                    .schedule(move || link.send_message(CarouselMsg::ScrollSettled));
                false
            }
            CarouselMsg::ScrollSettled => self.sync_from_scroll(),
            CarouselMsg::NavigationSettled => {
                self.settle = None;
                self.state.refresh_indicators();
                true
            }
            CarouselMsg::Resized => {
                let link = ctx.link().clone();
                self.resize_debounce
                    .schedule(move || link.send_message(CarouselMsg::ResizeSettled));
                false
            }
            CarouselMsg::ResizeSettled => {
                let Some(width) = dom::viewport_width() else {
                    return false;
                };
                match self.state.resize(width) {
                    Transition::Entered(mode) => {
                        info!("Carousel switched to {:?} mode at {}px", mode, width);
                        self.bind_mode(ctx);
                    }
                    Transition::Relayout(Mode::Mobile) => {
                        self.sync_from_scroll();
                    }
                    Transition::Relayout(Mode::Desktop) => {}
                }
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().slides != old_props.slides || ctx.props().config != old_props.config {
            let width = self.state.viewport_width();
            self.state = CarouselState::new(overlays(&ctx.props().slides), width, ctx.props().config);
            self.bind_mode(ctx);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.bind_mode(ctx);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let desktop = self.state.mode() == Mode::Desktop;
        let arrow_style = if desktop { "display: block;" } else { "display: none;" };

        let on_previous = desktop.then(|| {
            link.callback(|e: MouseEvent| {
                dom::blur_target(&e);
                CarouselMsg::Previous
            })
        });
        let on_next = desktop.then(|| {
            link.callback(|e: MouseEvent| {
                dom::blur_target(&e);
                CarouselMsg::Next
            })
        });
        let blur_on_touch = Callback::from(|e: TouchEvent| dom::blur_target(&e));

        html! {
            <section class="carrossel-section">
                <style>{CAROUSEL_CSS}</style>
                <div class="carrossel-wrapper">
                    <button
                        id="leftArrow"
                        class="carrossel-btn arrow arrow-left"
                        aria-label="Previous"
                        style={arrow_style}
                        onclick={on_previous}
                        ontouchend={blur_on_touch.clone()}
                    >
                        {"‹"}
                    </button>
                    <div id="carrossel" class="carrossel" ref={self.track.clone()}>
                        { for ctx.props().slides.iter().enumerate().map(|(index, slide)| self.view_slide(ctx, index, slide)) }
                    </div>
                    <button
                        id="rightArrow"
                        class="carrossel-btn arrow arrow-right"
                        aria-label="Next"
                        style={arrow_style}
                        onclick={on_next}
                        ontouchend={blur_on_touch.clone()}
                    >
                        {"›"}
                    </button>
                </div>
                <div id="indicators" class="indicators">
                    { for (0..self.state.indicator_count()).map(|index| self.view_indicator(ctx, index, &blur_on_touch)) }
                </div>
            </section>
        }
    }
}

impl Carousel {
    fn view_slide(&self, ctx: &Context<Self>, index: usize, slide: &Slide) -> Html {
        let open = self.state.active_description() == Some(index);
        let on_image_click = ctx.link().callback(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            CarouselMsg::ToggleDescription(index)
        });

        html! {
            <div class={classes!("carrossel-item", open.then_some("active"))}>
                {
                    if let Some(src) = &slide.image {
                        html! {
                            <img
                                src={src.clone()}
                                alt={slide.alt.clone()}
                                style="cursor: pointer;"
                                onclick={on_image_click}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(description) = &slide.description {
                        html! {
                            <div class={classes!("overlay", open.then_some("active"), open.then_some("show"))}>
                                <h3>{&slide.title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn view_indicator(&self, ctx: &Context<Self>, index: usize, blur_on_touch: &Callback<TouchEvent>) -> Html {
        let active = index == self.state.active_indicator();
        let onclick = ctx.link().callback(move |e: MouseEvent| {
            dom::blur_target(&e);
            CarouselMsg::Indicator(index)
        });

        html! {
            <button
                class={classes!("carrossel-btn", "indicator", active.then_some("active"))}
                aria-label={format!("Slide {}", index + 1)}
                aria-current={if active { "true" } else { "false" }}
                onclick={onclick}
                ontouchend={blur_on_touch.clone()}
            ></button>
        }
    }

    fn track_element(&self) -> Option<HtmlElement> {
        let track = self.track.cast::<HtmlElement>();
        if track.is_none() {
            debug!("Carousel track not mounted, skipping");
        }
        track
    }

    fn slide_elements(track: &HtmlElement) -> Vec<HtmlElement> {
        let children = track.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    /// Attach the listeners of the current mode, dropping the other mode's.
    fn bind_mode(&mut self, ctx: &Context<Self>) {
        let mode = self.state.mode();
        if self.bindings.mode() == Some(mode) {
            return;
        }

        self.scroll_debounce.cancel();
        self.settle = None;
        self.bindings = match mode {
            Mode::Desktop => Bindings::Desktop,
            Mode::Mobile => match self.track_element() {
                Some(track) => {
                    let link = ctx.link();
                    Bindings::Mobile(MobileBindings::attach(
                        &track,
                        link.callback(|(start_x, end_x): (f64, f64)| CarouselMsg::Swipe { start_x, end_x }),
                        link.callback(|_: ()| CarouselMsg::Scrolled),
                    ))
                }
                None => Bindings::Unbound,
            },
        };
        debug!("Carousel bindings set for {:?} mode", mode);
    }

    /// Scroll the track to `target` and refresh the indicators once it settles.
    fn navigate(&mut self, ctx: &Context<Self>, target: Option<usize>) -> bool {
        let Some(index) = target else {
            return false;
        };
        debug!("Carousel navigating to slide {}", index);

        let Some(track) = self.track_element() else {
            self.state.refresh_indicators();
            return true;
        };

        let left = match self.state.mode() {
            Mode::Desktop => layout::desktop_offset(
                index,
                track.client_width() as f64,
                self.state.items_per_view(),
            ),
            Mode::Mobile => match Self::slide_elements(&track).get(index) {
                Some(item) => layout::centered_offset(dom::offset_span(item), track.offset_width() as f64),
                None => {
                    self.state.refresh_indicators();
                    return true;
                }
            },
        };

        dom::smooth_scroll_to(&track, left);
        let link = ctx.link().clone();
        self.settle = ScrollSettle::watch(
            &track,
            left,
            ctx.props().config.settle_delay_ms,
            move || link.send_message(CarouselMsg::NavigationSettled),
        );
        true
    }

    /// Adopt whichever slide sits closest to the middle of the track.
    fn sync_from_scroll(&mut self) -> bool {
        if self.state.mode() != Mode::Mobile {
            return false;
        }
        let Some(track) = self.track_element() else {
            return false;
        };

        let items: Vec<Span> = Self::slide_elements(&track)
            .iter()
            .map(dom::viewport_span)
            .collect();
        match layout::closest_to_center(dom::viewport_span(&track), &items) {
            Some(closest) => self.state.sync_from_scroll(closest),
            None => false,
        }
    }
}

const CAROUSEL_CSS: &str = r#"
    .carrossel-section {
        position: relative;
        padding: 3rem 0;
    }
    .carrossel-wrapper {
        position: relative;
        display: flex;
        align-items: center;
    }
    .carrossel {
        position: relative;
        display: flex;
        gap: 1rem;
        overflow-x: auto;
        scroll-snap-type: x mandatory;
        scrollbar-width: none;
        width: 100%;
    }
    .carrossel::-webkit-scrollbar {
        display: none;
    }
    .carrossel-item {
        position: relative;
        flex: 0 0 calc(100% / 3.2);
        scroll-snap-align: start;
    }
    .carrossel-item img {
        width: 100%;
        display: block;
        border-radius: 12px;
    }
    .carrossel-item .overlay {
        position: absolute;
        inset: 0;
        padding: 1.5rem;
        border-radius: 12px;
        background: rgba(0, 0, 0, 0.7);
        color: #fff;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
    }
    .carrossel-item .overlay.show {
        opacity: 1;
        pointer-events: auto;
    }
    .arrow {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        z-index: 2;
        border: none;
        border-radius: 50%;
        width: 44px;
        height: 44px;
        font-size: 1.8rem;
        background: rgba(255, 255, 255, 0.9);
        cursor: pointer;
    }
    .arrow-left { left: 0.5rem; }
    .arrow-right { right: 0.5rem; }
    .indicators {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
        margin-top: 1.5rem;
    }
    .indicator {
        width: 10px;
        height: 10px;
        padding: 0;
        border: none;
        border-radius: 50%;
        background: #ccc;
        cursor: pointer;
    }
    .indicator.active {
        background: #333;
    }
    @media (max-width: 1023px) {
        .carrossel-item { flex-basis: calc(100% / 2.5); }
    }
    @media (max-width: 768px) {
        .carrossel-item {
            flex-basis: calc(100% / 1.2);
            scroll-snap-align: center;
        }
    }
"#;
