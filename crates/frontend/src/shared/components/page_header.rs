use super::go_back_button::GoBackButton;
use leptos::prelude::*;

/// Шапка страницы отчёта: кнопка "назад", эмодзи-заголовок, подзаголовок
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Показать кнопку возврата по истории браузера слева от заголовка
    #[prop(optional)]
    with_back: bool,
) -> impl IntoView {
    view! {
        <header class="page-header">
            {with_back.then(|| view! { <GoBackButton /> })}
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|text| view! {
                    <p class="page-header__subtitle">{text}</p>
                })}
            </div>
        </header>
    }
}
