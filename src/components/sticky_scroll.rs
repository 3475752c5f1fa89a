use web_sys::HtmlElement;
use yew::prelude::*;

pub const DIMMED_OPACITY: f64 = 0.3;

pub const ACCENT_GRADIENTS: [&str; 3] = [
    "linear-gradient(to bottom right, #06b6d4, #10b981)",
    "linear-gradient(to bottom right, #ec4899, #6366f1)",
    "linear-gradient(to bottom right, #f97316, #eab308)",
];

#[derive(Clone, PartialEq)]
pub struct ContentSection {
    pub title: String,
    pub description: String,
    pub content: Option<Html>,
}

/// Breakpoint owned by section `index` out of `section_count`.
pub fn breakpoint(index: usize, section_count: usize) -> f64 {
    index as f64 / section_count as f64
}

/// Index of the section whose breakpoint is closest to `progress`.
///
/// Sections are scanned in order and a later one only wins on a strictly
/// smaller distance, so ties go to the lower index. `None` when there are
/// no sections.
pub fn nearest_breakpoint(progress: f64, section_count: usize) -> Option<usize> {
    if section_count == 0 {
        return None;
    }
    let mut best = 0;
    let mut best_distance = (progress - breakpoint(0, section_count)).abs();
    for index in 1..section_count {
        let distance = (progress - breakpoint(index, section_count)).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    Some(best)
}

/// The stored index can outlive a longer section list; pin it to the last
/// section that still exists.
pub fn clamp_active(active: usize, section_count: usize) -> Option<usize> {
    section_count.checked_sub(1).map(|last| active.min(last))
}

pub fn accent_index(active: usize, accent_count: usize) -> Option<usize> {
    (accent_count > 0).then(|| active % accent_count)
}

pub fn section_opacity(index: usize, active: usize) -> f64 {
    if index == active {
        1.0
    } else {
        DIMMED_OPACITY
    }
}

/// How far a container is scrolled, in [0, 1]. A container that cannot
/// scroll reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

#[derive(Properties, PartialEq, Clone)]
pub struct StickyScrollProps {
    pub content: Vec<ContentSection>,
    #[prop_or_default]
    pub content_class: Classes,
}

#[function_component]
pub fn StickyScroll(props: &StickyScrollProps) -> Html {
    let active = use_state_eq(|| 0usize);
    let container = use_node_ref();

    let Some(current) = clamp_active(*active, props.content.len()) else {
        return html! {};
    };

    let onscroll = {
        let active = active.clone();
        let container = container.clone();
        let section_count = props.content.len();
        Callback::from(move |_: Event| {
            let Some(element) = container.cast::<HtmlElement>() else {
                log::warn!("sticky scroll container is not mounted");
                return;
            };
            let progress = scroll_progress(
                f64::from(element.scroll_top()),
                f64::from(element.scroll_height()),
                f64::from(element.client_height()),
            );
            if let Some(index) = nearest_breakpoint(progress, section_count) {
                active.set(index);
            }
        })
    };

    let sticky_css = r#"
        .sticky-scroll {
            position: relative;
            display: flex;
            justify-content: center;
            gap: 2.5rem;
            height: 30rem;
            overflow-y: auto;
            border-radius: 0.375rem;
            padding: 2.5rem;
        }
        .sticky-scroll-text {
            max-width: 42rem;
            padding: 0 1rem;
            scroll-snap-type: y mandatory;
        }
        .sticky-scroll-item {
            margin: 5rem 0;
            scroll-snap-align: start;
        }
        .sticky-scroll-item h2,
        .sticky-scroll-item p {
            transition: opacity 0.4s ease;
        }
        .sticky-scroll-item h2 {
            font-size: 1.5rem;
            font-weight: 700;
        }
        .sticky-scroll-item p {
            margin-top: 2.5rem;
            max-width: 24rem;
            font-size: 1.125rem;
        }
        .dark .sticky-scroll-item h2 {
            color: #e0f2fe;
        }
        .dark .sticky-scroll-item p {
            color: #bae6fd;
        }
        .sticky-scroll-spacer {
            height: 10rem;
        }
        .sticky-scroll-accent {
            position: sticky;
            top: 2.5rem;
            width: 40%;
            height: 100%;
            overflow: hidden;
            border-radius: 0.375rem;
            background: #fff;
            transition: background 0.4s ease;
        }
        @media (max-width: 1024px) {
            .sticky-scroll-accent {
                display: none;
            }
        }
    "#;

    let accent = accent_index(current, ACCENT_GRADIENTS.len())
        .map(|index| ACCENT_GRADIENTS[index])
        .unwrap_or("none");

    html! {
        <div class="sticky-scroll" ref={container} {onscroll}>
            <style>{sticky_css}</style>
            <div class="sticky-scroll-text">
                {
                    props.content.iter().enumerate().map(|(index, section)| {
                        let style = format!("opacity: {};", section_opacity(index, current));
                        html! {
                            <div key={format!("{}{}", section.title, index)} class="sticky-scroll-item">
                                <h2 style={style.clone()}>{&section.title}</h2>
                                <p style={style}>{&section.description}</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
                <div class="sticky-scroll-spacer" />
            </div>
            <div
                class={classes!("sticky-scroll-accent", props.content_class.clone())}
                style={format!("background: {};", accent)}
            >
                {
                    props.content.get(current)
                        .and_then(|section| section.content.clone())
                        .unwrap_or_default()
                }
            </div>
        </div>
    }
}
