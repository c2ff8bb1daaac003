use crate::shared::api_utils::{fetch_json, with_query};
use contracts::dashboards::d400_reports_panel::filter::ReportFilter;
use contracts::dashboards::d410_cost_profit::dto::CostProfitRecord;
use contracts::dashboards::d411_seasonality::dto::SeasonalRecord;
use contracts::dashboards::d412_sales_by_period::dto::SalesPeriodRecord;
use contracts::dashboards::d413_cancellations::dto::CancellationMetrics;
use contracts::dashboards::d414_top_customers::dto::TopCustomer;

const API_BASE: &str = "/api/reportes";

/// Продажи по периодам в границах фильтра
pub async fn get_sales(filter: &ReportFilter) -> Result<Vec<SalesPeriodRecord>, String> {
    let url = with_query(&format!("{}/ventas", API_BASE), &filter.sales_query())?;
    fetch_json(&url).await
}

/// Метрики отмен за последние месяцы
pub async fn get_cancellations(filter: &ReportFilter) -> Result<CancellationMetrics, String> {
    let url = with_query(
        &format!("{}/cancelaciones", API_BASE),
        &filter.cancellations_query(),
    )?;
    fetch_json(&url).await
}

pub async fn get_seasonality(filter: &ReportFilter) -> Result<Vec<SeasonalRecord>, String> {
    let url = with_query(
        &format!("{}/estacionalidad", API_BASE),
        &filter.seasonality_query(),
    )?;
    fetch_json(&url).await
}

pub async fn get_cost_profit() -> Result<Vec<CostProfitRecord>, String> {
    fetch_json(&format!("{}/costos-ganancias", API_BASE)).await
}

pub async fn get_top_customers() -> Result<Vec<TopCustomer>, String> {
    fetch_json(&format!("{}/usuarios-activos", API_BASE)).await
}

/// Данные всех виджетов панели
#[derive(Debug, Clone, Default)]
pub struct ReportsBundle {
    pub sales: Vec<SalesPeriodRecord>,
    pub cancellations: Option<CancellationMetrics>,
    pub seasonality: Vec<SeasonalRecord>,
    pub cost_profit: Vec<CostProfitRecord>,
    pub top_customers: Vec<TopCustomer>,
}

/// Загрузить все отчёты. Первая ошибка прерывает загрузку.
pub async fn load_all(filter: &ReportFilter) -> Result<ReportsBundle, String> {
    Ok(ReportsBundle {
        sales: get_sales(filter).await?,
        cancellations: Some(get_cancellations(filter).await?),
        seasonality: get_seasonality(filter).await?,
        cost_profit: get_cost_profit().await?,
        top_customers: get_top_customers().await?,
    })
}
