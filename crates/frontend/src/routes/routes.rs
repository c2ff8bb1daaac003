use crate::dashboards::ReportsPage;
use crate::shared::components::ScrollToTopButton;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::restricted_access::RestrictedAccessPage;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=ReportsPage />
                    <Route path=StaticSegment("reportes") view=ReportsPage />
                    <Route path=StaticSegment("error403") view=RestrictedAccessPage />
                </Routes>
            </main>
            // Кнопка "наверх" общая для всех страниц
            <ScrollToTopButton />
        </Router>
    }
}
