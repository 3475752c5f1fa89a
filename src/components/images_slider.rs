use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config;
use crate::utils::scheduler::{BrowserScheduler, ScopedTimer};

/// Current slide of a wrapping carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideDeck {
    len: usize,
    current: usize,
}

pub enum SlideAction {
    Next,
    Previous,
    /// The image list changed length.
    Resize(usize),
}

impl SlideDeck {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            current: (self.current + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let current = if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        };
        Self { current, ..self }
    }

    /// Keeps the current slide when it still exists, otherwise falls back
    /// to the first one.
    pub fn resized(self, len: usize) -> Self {
        let current = if self.current < len { self.current } else { 0 };
        Self { len, current }
    }
}

impl Reducible for SlideDeck {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            SlideAction::Next => self.next(),
            SlideAction::Previous => self.previous(),
            SlideAction::Resize(len) => self.resized(len),
        })
    }
}

fn slide_action_for_key(key: &str) -> Option<SlideAction> {
    match key {
        "ArrowRight" => Some(SlideAction::Next),
        "ArrowLeft" => Some(SlideAction::Previous),
        _ => None,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ImagesSliderProps {
    pub images: Vec<String>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub overlay: bool,
    #[prop_or(true)]
    pub autoplay: bool,
}

#[function_component]
pub fn ImagesSlider(props: &ImagesSliderProps) -> Html {
    let image_count = props.images.len();
    let deck = use_reducer(move || SlideDeck::new(image_count));

    {
        let dispatcher = deck.dispatcher();
        use_effect_with_deps(
            move |len: &usize| {
                dispatcher.dispatch(SlideAction::Resize(*len));
                || ()
            },
            image_count,
        );
    }

    // Autoplay
    {
        let dispatcher = deck.dispatcher();
        let autoplay = props.autoplay && image_count > 1;
        use_effect_with_deps(
            move |autoplay: &bool| {
                let mut timer = ScopedTimer::new(BrowserScheduler);
                if *autoplay {
                    timer.start_repeating(
                        config::HERO_AUTOPLAY_MS,
                        Box::new(move || dispatcher.dispatch(SlideAction::Next)),
                    );
                }
                move || {
                    timer.stop();
                }
            },
            autoplay,
        );
    }

    // Arrow keys
    {
        let dispatcher = deck.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                        if let Some(action) = slide_action_for_key(&event.key()) {
                            dispatcher.dispatch(action);
                        }
                    });
                    if let Err(e) = window.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Failed to register slider key listener: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let slider_css = r#"
        .images-slider {
            position: relative;
            display: flex;
            width: 100%;
            height: 95vh;
            align-items: center;
            justify-content: center;
            overflow: hidden;
        }
        .images-slider-image {
            position: absolute;
            inset: 0;
            height: 100%;
            width: 100%;
            object-fit: cover;
            object-position: center;
            opacity: 0;
            transform: scale(1.05);
            transition: opacity 0.5s ease, transform 0.5s ease;
        }
        .images-slider-image.active {
            opacity: 1;
            transform: scale(1);
        }
        .images-slider-overlay {
            position: absolute;
            inset: 0;
            z-index: 40;
            background: rgba(0, 0, 0, 0.6);
        }
        .images-slider-content {
            position: relative;
            z-index: 50;
            display: flex;
            justify-content: center;
            width: 100%;
        }
    "#;

    html! {
        <div class={classes!("images-slider", props.class.clone())} style="perspective: 1000px;">
            <style>{slider_css}</style>
            {
                props.images.iter().enumerate().map(|(index, src)| {
                    let class = classes!(
                        "images-slider-image",
                        (index == deck.current()).then_some("active")
                    );
                    html! {
                        <img key={src.clone()} src={src.clone()} {class} alt="" />
                    }
                }).collect::<Html>()
            }
            if props.overlay && image_count > 0 {
                <div class="images-slider-overlay"></div>
            }
            <div class="images-slider-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_the_last_slide() {
        let deck = SlideDeck::new(3).next().next();
        assert_eq!(deck.current(), 2);
        assert_eq!(deck.next().current(), 0);
    }

    #[test]
    fn previous_wraps_from_the_first_slide() {
        let deck = SlideDeck::new(5);
        assert_eq!(deck.previous().current(), 4);
        assert_eq!(deck.previous().previous().current(), 3);
    }

    #[test]
    fn empty_deck_stays_put() {
        let deck = SlideDeck::new(0);
        assert_eq!(deck.next().current(), 0);
        assert_eq!(deck.previous().current(), 0);
    }

    #[test]
    fn resizing_keeps_the_slide_in_range() {
        let deck = SlideDeck::new(5).previous();
        assert_eq!(deck.current(), 4);

        let shrunk = Rc::new(deck).reduce(SlideAction::Resize(2));
        assert_eq!(shrunk.current(), 0);
        assert_eq!(shrunk.next().next().current(), 0);

        let grown = SlideDeck::new(2).next().resized(6);
        assert_eq!(grown.current(), 1);
        assert_eq!(grown.previous().previous().current(), 5);
    }

    #[test]
    fn only_arrow_keys_move_the_slider() {
        assert!(matches!(slide_action_for_key("ArrowRight"), Some(SlideAction::Next)));
        assert!(matches!(slide_action_for_key("ArrowLeft"), Some(SlideAction::Previous)));
        assert!(slide_action_for_key("Enter").is_none());
    }
}
