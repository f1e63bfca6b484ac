//! Registration page for new student or teacher accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::Api;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;

/// Validated form values, trimmed where whitespace is never meaningful.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistrationInput {
    username: String,
    name: String,
    surname: String,
    email: String,
    password: String,
}

fn validate_registration_input(
    username: &str,
    name: &str,
    surname: &str,
    email: &str,
    password: &str,
) -> Result<RegistrationInput, &'static str> {
    let input = RegistrationInput {
        username: username.trim().to_owned(),
        name: name.trim().to_owned(),
        surname: surname.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
    };
    if input.username.is_empty()
        || input.name.is_empty()
        || input.surname.is_empty()
        || input.email.is_empty()
        || input.password.is_empty()
    {
        return Err("Please fill in all fields.");
    }
    Ok(input)
}

#[cfg(any(test, feature = "hydrate"))]
fn register_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Validation => "Please enter a valid email and password (minimum 6 characters)",
        ApiError::Conflict => "Email already exists",
        _ => "An error occurred. Please try again later.",
    }
}

/// Registration form. On success the browser navigates to the login view;
/// on failure an inline message is shown.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("student".to_owned());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_registration_input(
            &username.get(),
            &name.get(),
            &surname.get(),
            &email.get(),
            &password.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let role_value = role.get();
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api
                .register(
                    &input.username,
                    &input.name,
                    &input.surname,
                    &input.email,
                    &input.password,
                    &role_value,
                )
                .await;
            match result {
                Ok(_) => navigate("/login", NavigateOptions::default()),
                Err(err) => {
                    error.set(register_error_message(&err).to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let RegistrationInput { username, name, surname, email, password } = input;
            let _ = (api, navigate, username, name, surname, email, password, role_value);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create account"</h1>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Surname"
                        prop:value=move || surname.get()
                        on:input=move |ev| surname.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password (minimum 6 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="register-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="student">"Student"</option>
                        <option value="teacher">"Teacher"</option>
                    </select>
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="register-message register-message--error">{move || error.get()}</p>
                </Show>
                <p class="register-card__alt">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
