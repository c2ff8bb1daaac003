use crate::shared::chart::{BarChart, BarFill, BarSeries};
use crate::shared::components::table::{format_change, format_grouped};
use crate::shared::components::{StatArrow, StatCard};
use contracts::dashboards::d412_sales_by_period::dto::SalesPeriodRecord;
use contracts::dashboards::d412_sales_by_period::summary::{SalesSummary, Trend};
use leptos::prelude::*;

const SALES_COLOR: &str = "#4299E1";
const ORDERS_COLOR: &str = "#38B2AC";

/// Две серии: сумма продаж и количество заказов по периодам
pub fn sales_series(records: &[SalesPeriodRecord]) -> Vec<BarSeries> {
    vec![
        BarSeries {
            label: "Total Ventas".to_string(),
            fill: BarFill::Solid(SALES_COLOR.to_string()),
            stroke: None,
            values: records.iter().map(|r| r.total_sales).collect(),
        },
        BarSeries {
            label: "Pedidos".to_string(),
            fill: BarFill::Solid(ORDERS_COLOR.to_string()),
            stroke: None,
            values: records.iter().map(|r| r.order_count as f64).collect(),
        },
    ]
}

#[component]
pub fn SalesReport(
    #[prop(into)]
    records: Signal<Vec<SalesPeriodRecord>>,
) -> impl IntoView {
    let summary = Memo::new(move |_| records.with(|records| SalesSummary::from_records(records)));

    let total_sales =
        Signal::derive(move || Some(format!("${}", format_grouped(summary.get().total_sales))));
    let total_orders = Signal::derive(move || Some(summary.get().total_orders.to_string()));
    let change = Signal::derive(move || {
        summary.get().trend().map(|(trend, value)| {
            let arrow = match trend {
                Trend::Increase => StatArrow::Up,
                Trend::Decrease => StatArrow::Down,
            };
            (arrow, format_change(value))
        })
    });

    let categories =
        Signal::derive(move || records.with(|r| r.iter().map(|p| p.period.clone()).collect()));
    let series = Signal::derive(move || records.with(|r| sales_series(r)));

    view! {
        <div class="report report--sales">
            <h3 class="report__title">"📈 Reporte de Ventas"</h3>
            <div class="report__stats">
                <StatCard label="Total Ventas" value=total_sales change=change accent="blue" />
                <StatCard label="Total Pedidos" value=total_orders accent="teal" />
            </div>
            {move || {
                if records.with(Vec::is_empty) {
                    view! {
                        <div class="report__empty">
                            <p class="report__empty-title">"No hay datos disponibles"</p>
                            <p class="report__empty-hint">"Selecciona un rango de fechas diferente"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <BarChart categories=categories series=series /> }.into_any()
                }
            }}
        </div>
    }
}
