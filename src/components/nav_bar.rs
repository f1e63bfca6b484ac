//! Top navigation bar for authenticated views.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::{Session, logout};

/// Brand link plus a logout action. Only rendered on guarded pages.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(&session, navigate.clone());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/courses">
                "Study Platform"
            </a>
            <button class="nav-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
