//! Геометрия SVG-графиков: область построения, шкала Y, координаты точек и столбцов

/// Размер SVG (viewBox) и отступы под подписи осей
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl ChartArea {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_left: 56.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 40.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Y базовой линии (значение 0)
    pub fn baseline_y(&self) -> f64 {
        self.margin_top + self.plot_height()
    }

    pub fn category_width(&self, count: usize) -> f64 {
        self.plot_width() / count.max(1) as f64
    }

    /// Центр категории `index` из `count`
    pub fn category_x(&self, index: usize, count: usize) -> f64 {
        self.margin_left + self.category_width(count) * (index as f64 + 0.5)
    }

    /// Y для значения; отрицательные значения прижимаются к базовой линии
    pub fn value_y(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 {
            (value / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.margin_top + self.plot_height() * (1.0 - ratio)
    }

    /// Столбец `series_index` из `series_count` внутри категории `index`.
    /// Группа столбцов занимает 80% ширины категории.
    pub fn bar_rect(
        &self,
        index: usize,
        count: usize,
        series_index: usize,
        series_count: usize,
        value: f64,
        max: f64,
    ) -> BarRect {
        let group_width = self.category_width(count);
        let bar_width = group_width * 0.8 / series_count.max(1) as f64;
        let x = self.margin_left
            + group_width * index as f64
            + group_width * 0.1
            + bar_width * series_index as f64;
        let y = self.value_y(value, max);
        BarRect {
            x,
            y,
            width: bar_width,
            height: self.baseline_y() - y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Верх шкалы Y: максимум, округлённый вверх до 1/2/5 x 10^n. Не меньше 1.
pub fn axis_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    if max <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

/// Деления шкалы от 0 до `max` включительно
pub fn axis_ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|i| max * i as f64 / intervals as f64)
        .collect()
}

/// Атрибут `points` для `<polyline>`
pub fn polyline_points(area: &ChartArea, values: &[f64], max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            format!(
                "{:.1},{:.1}",
                area.category_x(i, values.len()),
                area.value_y(*value, max)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Подпись деления оси: без дробной части для целых значений
pub fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
