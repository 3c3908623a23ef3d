//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RequireSession;
use crate::pages::card_detail::CardDetailPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::rewards::RewardsPage;
use crate::state::session::SessionManager;

/// Root application component.
///
/// Provides the session contexts, restores the persisted session once on
/// startup, and sets up client-side routing. Protected routes are wrapped in
/// [`RequireSession`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // One mutation capability, many read-only observers.
    let session = SessionManager::new();
    provide_context(session);
    provide_context(session.reader());

    // Restore the persisted session exactly once per process.
    Effect::new(move || session.initialize());

    view! {
        <Stylesheet id="ordinal" href="/ordinal.css"/>
        <Title text="Ordinal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RequireSession>
                                <DashboardPage/>
                            </RequireSession>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("cards"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <RequireSession>
                                <CardDetailPage/>
                            </RequireSession>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("cards"), ParamSegment("id"), StaticSegment("rewards"))
                    view=|| {
                        view! {
                            <RequireSession>
                                <RewardsPage/>
                            </RequireSession>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
