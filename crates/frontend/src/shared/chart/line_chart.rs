//! Линейный график: одна ломаная на серию, категории по оси X
//!
//! ```ignore
//! <LineChart
//!     categories=Signal::derive(move || chart.get().categories())
//!     series=Signal::derive(move || series.get())
//! />
//! ```

use super::legend::{ChartLegend, LegendItem};
use super::scale::{axis_max, axis_ticks, polyline_points, tick_label, ChartArea};
use leptos::prelude::*;

const CHART_WIDTH: f64 = 640.0;
const Y_INTERVALS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub key: String,
    pub label: String,
    pub color: String,
    /// Значение для каждой категории, в порядке категорий
    pub values: Vec<f64>,
}

#[component]
pub fn LineChart(
    /// Подписи оси X
    #[prop(into)]
    categories: Signal<Vec<String>>,
    #[prop(into)]
    series: Signal<Vec<LineSeries>>,
    /// Высота viewBox; ширина растягивается по контейнеру
    #[prop(optional, default = 300.0)]
    height: f64,
) -> impl IntoView {
    let area = ChartArea::new(CHART_WIDTH, height);
    let view_box = format!("0 0 {} {}", CHART_WIDTH, height);

    let legend_items = Signal::derive(move || {
        series
            .get()
            .into_iter()
            .map(|s| LegendItem {
                label: s.label,
                color: s.color,
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="chart chart--line">
            <svg viewBox=view_box width="100%" role="img">
                {move || {
                    let categories = categories.get();
                    let series = series.get();
                    let max = axis_max(series.iter().flat_map(|s| s.values.iter().copied()));
                    let count = categories.len();

                    let grid = axis_ticks(max, Y_INTERVALS)
                        .into_iter()
                        .map(|tick| {
                            let y = format!("{:.1}", area.value_y(tick, max));
                            view! {
                                <line
                                    class="chart__grid-line"
                                    x1=format!("{:.1}", area.margin_left)
                                    x2=format!("{:.1}", area.width - area.margin_right)
                                    y1=y.clone()
                                    y2=y.clone()
                                    stroke="#e2e8f0"
                                />
                                <text
                                    class="chart__tick"
                                    x=format!("{:.1}", area.margin_left - 8.0)
                                    y=y
                                    text-anchor="end"
                                    dominant-baseline="middle"
                                    font-size="11"
                                    fill="#4a5568"
                                >
                                    {tick_label(tick)}
                                </text>
                            }
                        })
                        .collect_view();

                    let labels = categories
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            view! {
                                <text
                                    class="chart__category"
                                    x=format!("{:.1}", area.category_x(i, count))
                                    y=format!("{:.1}", area.baseline_y() + 18.0)
                                    text-anchor="middle"
                                    font-size="11"
                                    fill="#4a5568"
                                >
                                    {label}
                                </text>
                            }
                        })
                        .collect_view();

                    let lines = series
                        .into_iter()
                        .map(|s| {
                            let points = polyline_points(&area, &s.values, max);
                            let dots = s
                                .values
                                .iter()
                                .enumerate()
                                .map(|(i, value)| {
                                    view! {
                                        <circle
                                            cx=format!("{:.1}", area.category_x(i, s.values.len()))
                                            cy=format!("{:.1}", area.value_y(*value, max))
                                            r="3"
                                            fill=s.color.clone()
                                        />
                                    }
                                })
                                .collect_view();
                            view! {
                                <g class="chart__series" data-series=s.key.clone()>
                                    <polyline
                                        points=points
                                        fill="none"
                                        stroke=s.color.clone()
                                        stroke-width="2"
                                    />
                                    {dots}
                                </g>
                            }
                        })
                        .collect_view();

                    view! {
                        <g class="chart__grid">{grid}</g>
                        <g class="chart__x-axis">{labels}</g>
                        {lines}
                    }
                }}
            </svg>
            <ChartLegend items=legend_items />
        </div>
    }
}
