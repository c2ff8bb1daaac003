//! Палитры цветов для графиков отчётов
//!
//! Цвет линии выбирается детерминированно по ключу серии, поэтому
//! при повторном рендере с теми же данными цвета не меняются.

/// Палитра для линейных графиков (серии по месяцам)
pub const LINE_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Заливка столбцов в графике самых активных покупателей
pub const BAR_PALETTE: [&str; 5] = [
    "rgba(75, 192, 192, 0.7)",
    "rgba(54, 162, 235, 0.7)",
    "rgba(255, 206, 86, 0.7)",
    "rgba(231, 76, 60, 0.7)",
    "rgba(155, 89, 182, 0.7)",
];

/// Обводка столбцов, индексы совпадают с [`BAR_PALETTE`]
pub const BAR_BORDER_PALETTE: [&str; 5] = [
    "rgba(75, 192, 192, 1)",
    "rgba(54, 162, 235, 1)",
    "rgba(255, 206, 86, 1)",
    "rgba(231, 76, 60, 1)",
    "rgba(155, 89, 182, 1)",
];

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-битный FNV-1a. Не зависит от версии компилятора и платформы,
/// в отличие от `DefaultHasher`.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Цвет линии для ключа месяца (например "2024-01")
pub fn month_color(month_key: &str) -> &'static str {
    let index = fnv1a_32(month_key.as_bytes()) as usize % LINE_PALETTE.len();
    LINE_PALETTE[index]
}

/// Цвет столбца по его позиции (палитра повторяется по кругу)
pub fn bar_color(index: usize) -> &'static str {
    BAR_PALETTE[index % BAR_PALETTE.len()]
}

pub fn bar_border_color(index: usize) -> &'static str {
    BAR_BORDER_PALETTE[index % BAR_BORDER_PALETTE.len()]
}
