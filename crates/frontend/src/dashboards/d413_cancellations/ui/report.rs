use crate::shared::components::table::format_raw_percent;
use crate::shared::components::StatCard;
use contracts::dashboards::d413_cancellations::dto::CancellationMetrics;
use leptos::prelude::*;

/// Значения трёх ячеек: всего заказов, отменено, процент отмен.
/// `None`, пока метрики не загружены.
pub fn metric_values(metrics: Option<&CancellationMetrics>) -> [Option<String>; 3] {
    match metrics {
        Some(m) => [
            Some(m.total_orders.to_string()),
            Some(m.cancelled_orders.to_string()),
            Some(format_raw_percent(m.cancelled_percent)),
        ],
        None => [None, None, None],
    }
}

/// Три показателя отмен; пока метрик нет, вместо значений выводится прочерк
#[component]
pub fn CancellationReport(
    #[prop(into)]
    metrics: Signal<Option<CancellationMetrics>>,
) -> impl IntoView {
    let values = Memo::new(move |_| metrics.with(|m| metric_values(m.as_ref())));
    let cell = move |index: usize| Signal::derive(move || values.with(|v| v[index].clone()));

    view! {
        <div class="report report--cancellations">
            <h3 class="report__title">"❌ Cancelaciones"</h3>
            <div class="report__stats">
                <StatCard label="Total Pedidos" value=cell(0) />
                <StatCard label="Pedidos Cancelados" value=cell(1) accent="red" />
                <StatCard label="Porcentaje Cancelados" value=cell(2) accent="red" />
            </div>
        </div>
    }
}
