use crate::shared::chart::{LineChart, LineSeries};
use contracts::dashboards::d411_seasonality::chart::{MonthSeries, SeasonalChartData};
use contracts::dashboards::d411_seasonality::dto::SeasonalRecord;
use leptos::prelude::*;

/// Линия на каждый месяц, одна категория оси X на товар
pub fn to_line_series(series: Vec<MonthSeries>) -> Vec<LineSeries> {
    series
        .into_iter()
        .map(|s| LineSeries {
            key: s.month,
            label: s.label,
            color: s.color.to_string(),
            values: s.values,
        })
        .collect()
}

/// "Estacionalidad de Productos" - линейный график продаж по месяцам
#[component]
pub fn SeasonalityReport(
    #[prop(into)]
    records: Signal<Vec<SeasonalRecord>>,
) -> impl IntoView {
    let chart = Memo::new(move |_| records.with(|records| SeasonalChartData::from_records(records)));

    let categories = Signal::derive(move || chart.with(SeasonalChartData::categories));
    let series = Signal::derive(move || chart.with(|data| to_line_series(data.series())));

    view! {
        <div class="report report--seasonality">
            <h3 class="report__title">"Estacionalidad de Productos"</h3>
            <LineChart categories=categories series=series />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::palette::month_color;
    use std::collections::BTreeMap;

    fn record(name: &str, sales: &[(&str, f64)]) -> SeasonalRecord {
        SeasonalRecord {
            product_name: name.to_string(),
            sales_by_month: Some(
                sales
                    .iter()
                    .map(|(month, value)| (month.to_string(), Some(*value)))
                    .collect::<BTreeMap<_, _>>(),
            ),
        }
    }

    #[test]
    fn test_line_per_month_with_zero_fill() {
        let data = SeasonalChartData::from_records(&[
            record("A", &[("01", 5.0)]),
            record("B", &[("02", 3.0)]),
        ]);
        let lines = to_line_series(data.series());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].key, "01");
        assert_eq!(lines[0].label, "Ventas 01");
        assert_eq!(lines[0].values, vec![5.0, 0.0]);
        assert_eq!(lines[1].values, vec![0.0, 3.0]);
        assert_eq!(lines[1].color, month_color("02"));
    }

    #[test]
    fn test_empty_records() {
        let data = SeasonalChartData::from_records(&[]);
        assert!(to_line_series(data.series()).is_empty());
    }
}
