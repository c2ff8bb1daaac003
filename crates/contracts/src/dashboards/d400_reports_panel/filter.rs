use crate::shared::ReportError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Гранулярность отчёта по продажам
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodKind {
    #[serde(rename = "diario")]
    Daily,
    #[serde(rename = "semanal")]
    Weekly,
    #[default]
    #[serde(rename = "mensual")]
    Monthly,
}

impl PeriodKind {
    pub const ALL: [PeriodKind; 3] = [PeriodKind::Daily, PeriodKind::Weekly, PeriodKind::Monthly];

    /// Код для API и для `<select>`
    pub fn code(&self) -> &'static str {
        match self {
            PeriodKind::Daily => "diario",
            PeriodKind::Weekly => "semanal",
            PeriodKind::Monthly => "mensual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodKind::Daily => "Diario",
            PeriodKind::Weekly => "Semanal",
            PeriodKind::Monthly => "Mensual",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

/// Фильтр панели отчётов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    pub period_kind: PeriodKind,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Параметры запроса продаж по периодам
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesQuery {
    pub tipo_periodo: PeriodKind,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
}

/// Параметры запроса отмен: окно в месяцах
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CancellationsQuery {
    pub meses: u32,
}

/// Параметры запроса сезонности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonalityQuery {
    pub anio: i32,
}

impl ReportFilter {
    /// Окно отчёта по отменам
    pub const CANCELLATION_WINDOW_MONTHS: u32 = 3;

    /// Начало периода по умолчанию
    pub const DEFAULT_DATE_FROM: (i32, u32, u32) = (2024, 1, 1);

    /// Месячная разбивка с 2024-01-01 по `today`
    pub fn with_defaults(today: NaiveDate) -> Self {
        let (year, month, day) = Self::DEFAULT_DATE_FROM;
        Self {
            period_kind: PeriodKind::default(),
            date_from: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today),
            date_to: today,
        }
    }

    /// Дата начала не может быть позже даты окончания (равные даты допустимы)
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.date_from > self.date_to {
            return Err(ReportError::InvalidDateRange {
                from: self.date_from,
                to: self.date_to,
            });
        }
        Ok(())
    }

    pub fn sales_query(&self) -> SalesQuery {
        SalesQuery {
            tipo_periodo: self.period_kind,
            fecha_inicio: self.date_from,
            fecha_fin: self.date_to,
        }
    }

    pub fn cancellations_query(&self) -> CancellationsQuery {
        CancellationsQuery {
            meses: Self::CANCELLATION_WINDOW_MONTHS,
        }
    }

    /// Сезонность строится за год даты окончания
    pub fn seasonality_query(&self) -> SeasonalityQuery {
        SeasonalityQuery {
            anio: self.date_to.year(),
        }
    }
}
