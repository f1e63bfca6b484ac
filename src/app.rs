//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::Api;
use crate::pages::{
    course_detail::CourseDetailPage, course_list::CourseListPage, login::LoginPage,
    register::RegisterPage,
};
use crate::session::Session;
use crate::session::guard::RequireAuth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session once for the application lifetime and the API client
/// over it, so every request issued anywhere in the tree passes through the
/// same authorization stage. Both are provided via context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let api = Api::new(session.clone());
    provide_context(session);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/study-client.css"/>
        <Title text="Study Platform"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("courses")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <CourseListPage/>
                            </RequireAuth>
                        }
                    }
                />

                <Route
                    path=(StaticSegment("courses"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <CourseDetailPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
