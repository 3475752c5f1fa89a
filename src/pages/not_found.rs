use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div style="display: flex; min-height: 100vh; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; background: linear-gradient(to bottom, #C5E2D7, #F4F4BE);">
            <h1 style="font-size: 3rem; font-weight: 700;">{"This page wandered off"}</h1>
            <Link<Route> to={Route::Home} classes="forward-link">
                <button style="padding: 0.75rem 1.5rem; border-radius: 9999px; border: none; background: #0369a1; color: white; cursor: pointer;">
                    {"Back to SoleSavvy"}
                </button>
            </Link<Route>>
        </div>
    }
}
