//! ReportCard - карточка Thaw с заголовком и бейджем для виджетов отчётов
//!
//! Анимация появления `card-appear` определена в `layout.css`.
//!
//! ```ignore
//! <ReportCard title="❌ Cancelaciones" badge="Cancelado" delay_ms=80>
//!     <CancellationReport metrics=metrics />
//! </ReportCard>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn ReportCard(
    #[prop(into)]
    title: String,
    /// Короткая метка справа от заголовка
    #[prop(optional, into)]
    badge: MaybeProp<String>,
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style class="report-card">
            <div class="report-card__header">
                <span class="report-card__title">{title}</span>
                {move || badge.get().map(|text| view! {
                    <span class="report-card__badge">{text}</span>
                })}
            </div>
            {children()}
        </Card>
    }
}
