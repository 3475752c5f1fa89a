pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

use yew::prelude::*;
use yew_router::prelude::*;

use components::theme_toggle::Theme;
use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, theme: Theme, on_toggle_theme: Callback<()>) -> Html {
    match routes {
        Route::Home => html! { <Landing theme={theme} on_toggle_theme={on_toggle_theme} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    let theme = use_state(Theme::default);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            log::info!("Theme switched to {}", next.class_name());
            theme.set(next);
        })
    };

    let current = *theme;
    html! {
        <div class={current.class_name()}>
            <BrowserRouter>
                <Switch<Route> render={move |routes: Route| switch(routes, current, on_toggle_theme.clone())} />
            </BrowserRouter>
        </div>
    }
}
