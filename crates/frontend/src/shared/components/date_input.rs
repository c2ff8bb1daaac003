use chrono::NaiveDate;
use leptos::prelude::*;

/// Формат значения `<input type="date">`
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Поле даты с подписью и нативным календарём браузера.
/// Пустое или нераспознанное значение не передаётся в `on_change`.
#[component]
pub fn DateInput(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<NaiveDate>,
    on_change: impl Fn(NaiveDate) + 'static,
) -> impl IntoView {
    let text = Signal::derive(move || value.get().format(INPUT_FORMAT).to_string());

    view! {
        <label class="date-input">
            <span class="date-input__label">{label}</span>
            <input
                type="date"
                class="date-input__field"
                prop:value=text
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    match NaiveDate::parse_from_str(&raw, INPUT_FORMAT) {
                        Ok(date) => on_change(date),
                        Err(_) => log::debug!("DateInput: ignoring value '{}'", raw),
                    }
                }
            />
        </label>
    }
}
