use std::rc::Rc;

use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::content::FaqEntry;

/// Which question, if any, is expanded. At most one at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

pub enum AccordionAction {
    Toggle(usize),
    Close,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Returns false when the index is outside the list.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
        true
    }

    /// Returns false when nothing was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            AccordionAction::Toggle(index) => next.toggle(index),
            AccordionAction::Close => next.close(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = {
        let len = props.entries.len();
        use_reducer(move || Accordion::new(len))
    };

    // Escape closes whatever is open
    {
        let dispatcher = accordion.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(AccordionAction::Close);
            }
        });
    }

    html! {
        <section class="faq" id="faq">
            <style>{FAQ_CSS}</style>
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                {
                    for props.entries.iter().enumerate().map(|(index, entry)| {
                        let open = accordion.is_open(index);
                        let toggle = {
                            let dispatcher = accordion.dispatcher();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                dispatcher.dispatch(AccordionAction::Toggle(index));
                            })
                        };

                        html! {
                            <div class="faq-item">
                                <button class={classes!("faq-question", open.then_some("active"))} onclick={toggle}>
                                    <span class="question-text">{&entry.question}</span>
                                    <span class={classes!("faq-icon", open.then_some("rotated"))}>{"+"}</span>
                                </button>
                                <div class={classes!("faq-answer", open.then_some("active"))}>
                                    <p>{&entry.answer}</p>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </section>
    }
}

const FAQ_CSS: &str = r#"
    .faq {
        max-width: 800px;
        margin: 0 auto;
        padding: 4rem 1.5rem;
    }
    .faq-item {
        border-bottom: 1px solid rgba(0, 0, 0, 0.1);
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.2rem 0;
        background: none;
        border: none;
        font-size: 1.1rem;
        text-align: left;
        cursor: pointer;
    }
    .faq-question.active {
        font-weight: 600;
    }
    .faq-icon {
        font-size: 1.5rem;
        transition: transform 0.3s ease;
    }
    .faq-icon.rotated {
        transform: rotate(45deg);
    }
    .faq-answer {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.3s ease;
    }
    .faq-answer.active {
        max-height: 500px;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_another_closes_the_first() {
        let mut accordion = Accordion::new(3);
        assert!(accordion.toggle(0));
        assert!(accordion.toggle(2));
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion, Accordion::new(3));
    }

    #[test]
    fn escape_closes_open_item() {
        let mut accordion = Accordion::new(3);
        assert!(!accordion.close());
        accordion.toggle(1);
        assert!(accordion.close());
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(0);
        assert!(!accordion.toggle(5));
        assert!(accordion.is_open(0));
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let state = Rc::new(Accordion::new(2));
        let same = state.clone().reduce(AccordionAction::Close);
        assert!(Rc::ptr_eq(&state, &same));

        let opened = state.reduce(AccordionAction::Toggle(1));
        assert!(opened.is_open(1));
    }
}
