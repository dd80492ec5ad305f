//! Root application component with routing and shared state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::confirm_modal::{ConfirmController, ConfirmModal};
use crate::components::toaster::Toaster;
use crate::pages::{overview::OverviewPage, surcharges::SurchargesPage};
use crate::state::notifications::NotificationsState;
use crate::state::surcharges::SurchargesState;

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
/// Owns the one `ConfirmController` for the app and hands it to the pages
/// that need to request confirmations. The modal and the toast stack are
/// rendered once here, outside the routed content.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notifications = RwSignal::new(NotificationsState::default());
    let surcharges = RwSignal::new(SurchargesState::default());
    let confirm = ConfirmController::new(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/surcharge-admin.css"/>
        <Title text="Surcharge Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <OverviewPage surcharges/> }/>
                <Route path=StaticSegment("admin") view=move || view! { <OverviewPage surcharges/> }/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("surcharges"))
                    view=move || view! { <SurchargesPage surcharges notifications confirm/> }
                />
            </Routes>
        </Router>

        <ConfirmModal controller=confirm/>
        <Toaster notifications/>
    }
}
