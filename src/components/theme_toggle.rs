use yew::prelude::*;

/// Page-wide display mode. Owned by the app root and handed down as a prop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class put on the root element; `.dark` selectors key off it.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn ThemeToggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    // Shows the mode a click switches to.
    let (icon, label) = match props.theme {
        Theme::Light => ("fa-solid fa-moon", "Switch to dark mode"),
        Theme::Dark => ("fa-solid fa-sun", "Switch to light mode"),
    };

    html! {
        <button
            class="theme-toggle"
            aria-label={label}
            style="position: absolute; top: 0.5rem; right: 0.5rem; z-index: 60; padding: 0.5rem 0.75rem; border-radius: 0.375rem; border: 1px solid rgba(255, 255, 255, 0.4); background: transparent; color: white; cursor: pointer;"
            {onclick}
        >
            <i class={icon}></i>
        </button>
    }
}
