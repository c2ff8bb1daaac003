//! SVG-графики для отчётов: линейный и столбчатый

pub mod bar_chart;
pub mod legend;
pub mod line_chart;
pub mod scale;

pub use bar_chart::{BarChart, BarFill, BarSeries};
pub use legend::{ChartLegend, LegendItem};
pub use line_chart::{LineChart, LineSeries};
