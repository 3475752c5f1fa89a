use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::card_stack::CardStack;
use crate::components::images_slider::ImagesSlider;
use crate::components::moving_text::MovingText;
use crate::components::sticky_scroll::{ContentSection, StickyScroll};
use crate::components::style_picker::{ShoeStyle, StylePicker};
use crate::components::subscribe_form::SubscribeForm;
use crate::components::theme_toggle::{Theme, ThemeToggle};
use crate::components::toast::{ToastAction, ToastQueue, Toaster};
use crate::components::typewriter::{TypewriterText, Word};
use crate::config;

const HERO_IMAGES: [&str; 5] = [
    "/heros/_businessman.jpg",
    "/heros/_happy-couple.jpg",
    "/heros/_happy-run.jpg",
    "/heros/_happy-surf.jpg",
    "/heros/_happy-w-corgi.jpg",
];

fn hero_words() -> Vec<Word> {
    ["Your", "Sustainable", "Shoe", "Subscription"]
        .into_iter()
        .map(Word::new)
        .collect()
}

fn sticky_image(src: &'static str, alt: &'static str) -> Html {
    html! {
        <img
            {src}
            {alt}
            loading="lazy"
            style="width: 100%; height: 100%; object-fit: cover; object-position: center;"
        />
    }
}

fn story_sections() -> Vec<ContentSection> {
    let section = |title: &str, description: &str, image: Html| ContentSection {
        title: title.to_string(),
        description: description.to_string(),
        content: Some(image),
    };
    vec![
        section(
            "Eco-Friendly Shoes Every Month",
            "Receive a carefully curated selection of stylish and sustainable footwear right at your doorstep. Our team of fashion experts and sustainability advocates work tirelessly to bring you the latest eco-friendly shoe trends, ensuring that each month's delivery is as exciting and on-trend as the last.",
            sticky_image("/sticky-scroll/carbon-footprint.jpg", "carbon footprint"),
        ),
        section(
            "Reduce Your Carbon Footprint",
            "By subscribing to SoleSavvy, you're making a positive impact on the environment by supporting eco-conscious shoe brands that prioritize sustainability in their materials and manufacturing processes. Each pair of shoes you receive is an investment in a greener future, reducing your carbon footprint one step at a time.",
            sticky_image("/sticky-scroll/eco-shoe.jpg", "eco shoe"),
        ),
        section(
            "Flexible Subscription Plans",
            "Choose from various subscription plans that cater to your budget and footwear needs. Whether you're a fashion enthusiast or prefer a more casual style, we have options to suit every taste and preference.",
            sticky_image("/sticky-scroll/flexible-shoe.jpg", "flexibility"),
        ),
        section(
            "Hassle-Free Returns and Exchanges",
            "Return or exchange any shoes that don't fit well or aren't up to your expectations, free of charge. Our customer support team is always available to help you navigate the return process and find a replacement pair that meets your needs.",
            sticky_image("/sticky-scroll/green-delivery.jpg", "green delivery"),
        ),
        section(
            "Supporting a Greener Future",
            "Join the movement towards a more sustainable fashion industry and make a difference with every step you take. By subscribing to SoleSavvy, you're becoming part of a community dedicated to reducing waste, supporting ethical labor practices, and promoting eco-friendly footwear trends.",
            sticky_image("/sticky-scroll/green-energy.jpg", "green energy"),
        ),
    ]
}

fn scroll_into_view(target: &NodeRef) {
    let Some(element) = target.cast::<Element>() else {
        log::warn!("Scroll target is not mounted");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq, Clone)]
pub struct LandingProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component]
pub fn Landing(props: &LandingProps) -> Html {
    let selected_style = use_state(|| ShoeStyle::Business);
    let toasts = use_reducer(ToastQueue::default);
    let style_ref = use_node_ref();
    let sections = use_memo(|_| story_sections(), ());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_join_now = {
        let style_ref = style_ref.clone();
        Callback::from(move |_: MouseEvent| scroll_into_view(&style_ref))
    };

    let on_select_style = {
        let selected_style = selected_style.clone();
        Callback::from(move |style: ShoeStyle| {
            log::info!("Selected {} shoes", style.key());
            selected_style.set(style);
        })
    };

    let on_notify = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |message: String| dispatcher.dispatch(ToastAction::Push(message)))
    };

    let on_dismiss_toast = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let landing_css = r#"
        .landing-page {
            position: relative;
            display: flex;
            min-height: 100vh;
            margin-bottom: 60vh;
            flex-direction: column;
            align-items: flex-start;
            background: linear-gradient(to bottom, #C5E2D7, #F4F4BE);
            box-shadow: 0 25px 50px -12px #64748b;
            scroll-snap-type: y mandatory;
        }
        .dark .landing-page {
            background: linear-gradient(to bottom, #0C343D, #34495E);
        }
        .hero-content {
            display: flex;
            width: 50%;
            margin-top: 6rem;
            flex-direction: column;
            align-items: center;
            animation: hero-drop-in 0.6s ease;
        }
        @keyframes hero-drop-in {
            from { opacity: 0; transform: translateY(-80px); }
            to { opacity: 1; transform: translateY(0); }
        }
        .hero-title {
            padding: 1rem 0;
            font-size: 6rem;
            font-weight: 700;
            text-align: center;
            background: linear-gradient(to bottom, #7FCDBB, #965D3C);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .dark .hero-title {
            background: linear-gradient(to bottom, #0F487E, #1ABC9C);
            -webkit-background-clip: text;
        }
        .hero-words {
            align-self: flex-start;
            font-size: 3rem;
            font-weight: 700;
            color: #f0f9ff;
        }
        .join-now {
            position: relative;
            margin-top: 3.5rem;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            border: 1px solid rgba(14, 165, 233, 0.2);
            background: rgba(125, 211, 252, 0.1);
            backdrop-filter: blur(4px);
            color: white;
            letter-spacing: 0.1em;
            cursor: pointer;
        }
        .join-now i {
            margin-left: 0.5rem;
        }
        .section-divider {
            position: relative;
            height: 1.25rem;
            width: 100%;
            scroll-snap-align: start;
        }
        .section-divider-line {
            position: absolute;
            top: 0;
            left: 5rem;
            height: 1px;
            width: 75%;
            background: linear-gradient(to right, transparent, #6366f1, transparent);
        }
        .sticky-wrapper {
            width: 100%;
            margin-bottom: 5rem;
            padding: 1.25rem 0;
            scroll-snap-align: center;
        }
        .style-section {
            display: flex;
            width: 90%;
            align-self: center;
            justify-content: space-around;
            align-items: flex-start;
            margin: 1.25rem 0 4rem;
            padding: 1.5rem;
            border-radius: 0.75rem;
            background: rgba(148, 163, 184, 0.1);
            backdrop-filter: blur(24px);
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
            scroll-snap-align: center;
        }
        .style-copy {
            display: flex;
            width: 50%;
            flex-direction: column;
            padding-top: 2.5rem;
        }
        .style-copy h1 {
            padding-bottom: 2.5rem;
            font-size: 3rem;
            font-weight: 700;
        }
        .style-description {
            margin: 4rem 0;
            padding: 1rem 2rem;
            border-radius: 0.75rem;
            background: rgba(3, 105, 161, 0.75);
            font-weight: 300;
            line-height: 1.75rem;
            box-shadow: 0 4px 14px 0 rgba(0, 118, 255, 0.39);
            transition: transform 0.2s ease;
        }
        .style-description:hover {
            transform: scale(1.05);
        }
        .dark .style-copy h1,
        .dark .style-description,
        .dark .subscribe-section h2,
        .dark .subscribe-section p {
            color: #f0f9ff;
        }
        .subscribe-section {
            position: fixed;
            bottom: 0;
            z-index: -1;
            display: flex;
            height: 100vh;
            width: 100%;
            align-items: flex-end;
            background: #bae6fd;
        }
        .dark .subscribe-section {
            background: #047857;
        }
        .subscribe-content {
            display: flex;
            height: 60vh;
            width: 100%;
            flex-direction: column;
            align-items: center;
            justify-content: center;
        }
        .subscribe-content h2 {
            padding: 2.5rem 0;
            font-size: 3rem;
            font-weight: 700;
        }
        .subscribe-content p {
            margin-bottom: 2rem;
            font-size: 1.5rem;
            text-align: center;
        }
        @media (max-width: 768px) {
            .hero-content {
                width: 90%;
            }
            .hero-title {
                font-size: 2.5rem;
            }
            .hero-words {
                font-size: 1.25rem;
            }
            .style-section {
                flex-direction: column;
                align-items: center;
            }
            .style-copy {
                width: 100%;
            }
        }
    "#;

    let style = *selected_style;

    html! {
        <main class="landing-page" style="overscroll-behavior: none;">
            <style>{landing_css}</style>
            <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
            <ImagesSlider images={HERO_IMAGES.iter().map(|src| src.to_string()).collect::<Vec<_>>()}>
                <div class="hero-content">
                    <p class="hero-title">{"SoleSavvy"}</p>
                    <TypewriterText words={hero_words()} class={classes!("hero-words")} />
                    <button class="join-now" onclick={on_join_now}>
                        {"JOIN NOW"}
                        <i class="fa-solid fa-arrow-down"></i>
                    </button>
                </div>
            </ImagesSlider>

            <div class="section-divider">
                <div class="section-divider-line"></div>
            </div>
            <MovingText
                text="👞👟 Why do I need a sustainable shoe subscription? 🥾🩰"
                speed={config::MARQUEE_SPEED_MS}
            />
            <div class="sticky-wrapper">
                <StickyScroll content={(*sections).clone()} />
            </div>

            <div class="style-section">
                <CardStack key={style.key()} items={style.cards()} offset={15.0} />
                <div class="style-copy">
                    <h1>{"Choose your style:"}</h1>
                    <StylePicker selected={style} on_select={on_select_style} />
                    <div class="style-description" ref={style_ref}>
                        {style.description()}
                    </div>
                </div>
            </div>

            <div class="subscribe-section">
                <div class="subscribe-content">
                    <h2>{"Be the First to Sign Up!"}</h2>
                    <p>{"Subscribe to our newsletter and be the first to receive updates, exclusive offers, and more."}</p>
                    <SubscribeForm on_notify={on_notify} />
                </div>
            </div>
            <Toaster queue={(*toasts).clone()} on_dismiss={on_dismiss_toast} />
        </main>
    }
}
