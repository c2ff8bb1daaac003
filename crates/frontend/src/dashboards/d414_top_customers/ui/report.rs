use crate::shared::chart::{BarChart, BarFill, BarSeries};
use contracts::dashboards::d414_top_customers::dto::TopCustomer;
use contracts::shared::palette::{bar_border_color, bar_color, BAR_PALETTE};
use leptos::prelude::*;
use thaw::Spinner;

/// Одна серия "Compras", цвет столбца по кругу из палитры
pub fn purchases_series(customers: &[TopCustomer]) -> BarSeries {
    BarSeries {
        label: "Compras".to_string(),
        fill: BarFill::PerCategory(
            (0..BAR_PALETTE.len()).map(|i| bar_color(i).to_string()).collect(),
        ),
        stroke: Some(BarFill::PerCategory(
            (0..BAR_PALETTE.len())
                .map(|i| bar_border_color(i).to_string())
                .collect(),
        )),
        values: customers.iter().map(|c| c.purchases as f64).collect(),
    }
}

#[component]
pub fn TopCustomersReport(
    #[prop(into)]
    customers: Signal<Vec<TopCustomer>>,
) -> impl IntoView {
    let categories =
        Signal::derive(move || customers.with(|c| c.iter().map(|c| c.name.clone()).collect()));
    let series = Signal::derive(move || customers.with(|c| vec![purchases_series(c)]));

    view! {
        <div class="report report--top-customers">
            <h3 class="report__title">"👥 Usuarios Más Activos"</h3>
            {move || {
                if customers.with(Vec::is_empty) {
                    view! {
                        <div class="report__loading">
                            <Spinner />
                            <span>"Cargando datos..."</span>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_cycle_over_customers() {
        let customers: Vec<TopCustomer> = (0..7)
            .map(|i| TopCustomer {
                name: format!("C{}", i),
                purchases: 10 - i,
            })
            .collect();
        let series = purchases_series(&customers);

        assert_eq!(series.values.len(), 7);
        assert_eq!(series.values[0], 10.0);
        assert_eq!(series.fill.color_at(0), bar_color(0));
        assert_eq!(series.fill.color_at(5), bar_color(0));
        assert_eq!(series.fill.color_at(6), bar_color(1));
        assert_eq!(
            series.stroke.as_ref().map(|s| s.color_at(6)),
            Some(bar_border_color(1))
        );
    }
}
