use yew::prelude::*;

use crate::config;

/// Animation shorthand for one full pass of the marquee.
pub fn marquee_animation(speed_ms: u32) -> String {
    format!("animation: moving-text {}ms linear infinite;", speed_ms.max(1))
}

#[derive(Properties, PartialEq, Clone)]
pub struct MovingTextProps {
    pub text: AttrValue,
    #[prop_or(config::MARQUEE_SPEED_MS)]
    pub speed: u32,
}

/// The text is laid out twice so the second copy fills the gap while the
/// row slides from -50% to -100% and jumps back.
#[function_component]
pub fn MovingText(props: &MovingTextProps) -> Html {
    let marquee_css = r#"
        .moving-text {
            width: 100%;
            overflow: hidden;
        }
        .moving-text-row {
            display: flex;
            gap: 12rem;
            height: 3.5rem;
            white-space: nowrap;
            font-size: 3rem;
            font-weight: 700;
            color: #000;
        }
        .dark .moving-text-row {
            color: #f0f9ff;
        }
        @keyframes moving-text {
            from { transform: translate3d(-50%, 0, 0); }
            to { transform: translate3d(-100%, 0, 0); }
        }
    "#;

    html! {
        <div class="moving-text">
            <style>{marquee_css}</style>
            <div class="moving-text-row" style={marquee_animation(props.speed)}>
                <span>{props.text.clone()}</span>
                <span aria-hidden="true">{props.text.clone()}</span>
            </div>
        </div>
    }
}
