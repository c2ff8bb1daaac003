//! Столбчатый график с группировкой серий по категориям

use super::legend::{ChartLegend, LegendItem};
use super::scale::{axis_max, axis_ticks, tick_label, ChartArea};
use leptos::prelude::*;

const CHART_WIDTH: f64 = 640.0;
const Y_INTERVALS: usize = 4;

/// Заливка столбцов серии
#[derive(Debug, Clone, PartialEq)]
pub enum BarFill {
    Solid(String),
    /// Свой цвет для каждой категории, список повторяется по кругу
    PerCategory(Vec<String>),
}

impl BarFill {
    pub fn color_at(&self, index: usize) -> &str {
        match self {
            BarFill::Solid(color) => color,
            BarFill::PerCategory(colors) => colors
                .get(index % colors.len().max(1))
                .map(String::as_str)
                .unwrap_or("currentColor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: String,
    pub fill: BarFill,
    /// Обводка столбцов, `None` = без обводки
    pub stroke: Option<BarFill>,
    pub values: Vec<f64>,
}

#[component]
pub fn BarChart(
    #[prop(into)]
    categories: Signal<Vec<String>>,
    #[prop(into)]
    series: Signal<Vec<BarSeries>>,
    #[prop(optional, default = 300.0)]
    height: f64,
) -> impl IntoView {
    let area = ChartArea::new(CHART_WIDTH, height);
    let view_box = format!("0 0 {} {}", CHART_WIDTH, height);

    let legend_items = Signal::derive(move || {
        series
            .get()
            .iter()
            .map(|s| LegendItem {
                label: s.label.clone(),
                color: s.fill.color_at(0).to_string(),
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="chart chart--bar">
            <svg viewBox=view_box width="100%" role="img">
                {move || {
                    let categories = categories.get();
                    let series = series.get();
                    let max = axis_max(series.iter().flat_map(|s| s.values.iter().copied()));
                    let count = categories.len();
                    let series_count = series.len();

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
                                    stroke-dasharray="3 3"
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

                    let bars = series
                        .iter()
                        .enumerate()
                        .flat_map(|(series_index, s)| {
                            s.values.iter().enumerate().map(move |(i, value)| {
                                let rect = area.bar_rect(i, count, series_index, series_count, *value, max);
                                view! {
                                    <rect
                                        class="chart__bar"
                                        x=format!("{:.1}", rect.x)
                                        y=format!("{:.1}", rect.y)
                                        width=format!("{:.1}", rect.width)
                                        height=format!("{:.1}", rect.height)
                                        rx="4"
                                        fill=s.fill.color_at(i).to_string()
                                        stroke=s.stroke.as_ref().map(|stroke| stroke.color_at(i).to_string())
                                        stroke-width="1"
                                    />
                                }
                            })
                        })
                        .collect_view();

                    view! {
                        <g class="chart__grid">{grid}</g>
                        <g class="chart__x-axis">{labels}</g>
                        <g class="chart__bars">{bars}</g>
                    }
                }}
            </svg>
            <ChartLegend items=legend_items />
        </div>
    }
}
