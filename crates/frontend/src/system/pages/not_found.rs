use crate::shared::components::GoBackButton;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página no encontrada"</p>
            <GoBackButton label="Volver".to_string() />
        </div>
    }
}
