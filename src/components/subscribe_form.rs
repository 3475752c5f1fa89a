use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::email::{subscription_message, EmailAddress};

#[derive(Properties, PartialEq, Clone)]
pub struct SubscribeFormProps {
    /// Receives the toast text for each submission.
    pub on_notify: Callback<String>,
}

#[function_component]
pub fn SubscribeForm(props: &SubscribeFormProps) -> Html {
    let email = use_state(String::new);
    let is_valid = EmailAddress::parse(&email).is_ok();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = subscription_message(&email);
            log::info!("Newsletter form submitted");
            on_notify.emit(message);
        })
    };

    let form_css = r#"
        .subscribe-form {
            display: flex;
            align-items: center;
            justify-content: center;
            margin: 4rem 0;
        }
        .subscribe-form input {
            height: 50px;
            width: 20rem;
            padding: 0.5rem 1rem;
            border: 1px solid #d1d5db;
            border-radius: 0.375rem 0 0 0.375rem;
            outline: none;
        }
        .subscribe-form input.invalid {
            border-color: #f87171;
        }
        .subscribe-form button {
            height: 50px;
            padding: 0.5rem 1rem;
            border: none;
            border-radius: 0 0.375rem 0.375rem 0;
            background: #3b82f6;
            color: #fff;
            cursor: pointer;
        }
        .subscribe-form button:hover {
            background: #2563eb;
        }
    "#;

    html! {
        <form class="subscribe-form" {onsubmit}>
            <style>{form_css}</style>
            <input
                type="email"
                placeholder="Enter your email..."
                class={classes!((!email.is_empty() && !is_valid).then_some("invalid"))}
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit">{"Subscribe"}</button>
        </form>
    }
}
