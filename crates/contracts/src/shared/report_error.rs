use chrono::NaiveDate;
use thiserror::Error;

/// Ошибки подготовки данных отчётов перед отображением
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Числовое поле записи отсутствует или не является конечным числом.
    /// `index` - позиция записи во входной последовательности.
    #[error("Registro {index} mal formado: el campo `{field}` falta o no es numérico")]
    MalformedRecord { index: usize, field: &'static str },

    #[error("La fecha de inicio ({from}) no puede ser posterior a la fecha final ({to})")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
}
