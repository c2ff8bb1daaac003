use crate::shared::navigation::history_back;
use leptos::prelude::*;

/// Страница "доступ запрещён" (403): статичный текст и кнопка возврата
#[component]
pub fn RestrictedAccessPage() -> impl IntoView {
    view! {
        <div class="restricted-access">
            <h1 class="restricted-access__title">
                "¡Ups! Parece que has intentado acceder a una página restringida"
            </h1>
            <h2 class="restricted-access__subtitle">
                "Por favor, verifica tus permisos o contacta con soporte"
            </h2>
            <div class="restricted-access__icons" aria-hidden="true">
                <div class="restricted-access__pool">"🏊‍♂️"</div>
                // мигающий крестик поверх иконки бассейна
                <div class="restricted-access__cross">"❌"</div>
            </div>
            <button class="restricted-access__back" on:click=move |_| history_back()>
                "Volver a página anterior"
            </button>
        </div>
    }
}
