use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
}

#[component]
pub fn ChartLegend(#[prop(into)] items: Signal<Vec<LegendItem>>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|item| {
                        let swatch = format!("background: {};", item.color);
                        view! {
                            <li class="chart-legend__item">
                                <span class="chart-legend__swatch" style=swatch></span>
                                <span class="chart-legend__label">{item.label}</span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
