use crate::shared::icons::icon;
use leptos::prelude::*;

/// Показывается вместо значения, пока данных нет
pub const MISSING_VALUE: &str = "—";

/// Текст значения ячейки: само значение или прочерк
pub fn display_value(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Направление стрелки под значением
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatArrow {
    Up,
    Down,
}

/// Подпись + крупное значение, опционально стрелка изменения
#[component]
pub fn StatCard(
    /// Подпись над значением
    #[prop(into)]
    label: String,
    /// Уже отформатированное значение (None = данных нет)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Стрелка и текст изменения, например (Up, "12.5%")
    #[prop(optional, into)]
    change: Signal<Option<(StatArrow, String)>>,
    /// CSS-модификатор цвета значения: "blue", "teal", ...
    #[prop(optional)]
    accent: Option<&'static str>,
) -> impl IntoView {
    let value_class = match accent {
        Some(accent) => format!("stat-card__value stat-card__value--{}", accent),
        None => "stat-card__value".to_string(),
    };

    let formatted = move || display_value(value.get());

    let change_view = move || {
        change.get().map(|(arrow, text)| {
            let (icon_name, cls) = match arrow {
                StatArrow::Up => ("trending-up", "stat-card__change stat-card__change--up"),
                StatArrow::Down => ("trending-down", "stat-card__change stat-card__change--down"),
            };
            view! {
                <span class=cls>
                    {icon(icon_name)}
                    {text}
                </span>
            }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class=value_class>{formatted}</div>
            {change_view}
        </div>
    }
}
