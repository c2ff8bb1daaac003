use crate::shared::icons::icon;
use crate::shared::navigation::history_back;
use leptos::prelude::*;
use thaw::*;

/// Кнопка "назад" по истории браузера. Без подписи показывается только стрелка.
#[component]
pub fn GoBackButton(
    #[prop(optional, into)]
    label: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <Button
            class="go-back-button"
            appearance=ButtonAppearance::Secondary
            on_click=move |_| history_back()
        >
            {icon("arrow-left")}
            {move || label.get().map(|text| view! { <span>{text}</span> })}
        </Button>
    }
}
