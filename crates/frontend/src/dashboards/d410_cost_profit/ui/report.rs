use super::view_model::build_rows;
use crate::shared::components::table::TableCellNumeric;
use contracts::dashboards::d410_cost_profit::dto::CostProfitRecord;
use contracts::shared::ReportError;
use leptos::prelude::*;
use thaw::*;

/// Таблица "Costos vs Ganancias"
#[component]
pub fn CostProfitReport(
    #[prop(into)]
    records: Signal<Vec<CostProfitRecord>>,
    /// Вызывается, если среди записей есть некорректная
    #[prop(optional)]
    on_invalid: Option<Callback<ReportError>>,
) -> impl IntoView {
    let rows = Memo::new(move |_| records.with(|records| build_rows(records)));

    Effect::new(move |_| {
        if let Err(err) = rows.get() {
            log::error!("CostProfitReport: {}", err);
            if let Some(callback) = on_invalid {
                callback.run(err);
            }
        }
    });

    view! {
        <div class="report report--cost-profit">
            <h3 class="report__title">"Costos vs Ganancias"</h3>
            {move || match rows.get() {
                Err(err) => view! {
                    <div class="report__error">{err.to_string()}</div>
                }.into_any(),
                Ok(rows) => view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Producto"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Costo Total"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Ganancia Total"</TableHeaderCell>
                                <TableHeaderCell class="text-right">"Margen (%)"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <TableRow attr:data-product-id=row.product_id.to_string()>
                                            <TableCell>{row.name}</TableCell>
                                            <TableCellNumeric text=row.total_cost />
                                            <TableCellNumeric text=row.total_profit />
                                            <TableCellNumeric text=row.profit_margin />
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                }.into_any(),
            }}
        </div>
    }
}
