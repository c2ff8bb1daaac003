use super::notice::{
    dismiss, Notice, NoticeKind, LOAD_FAILED_TEXT, LOAD_SUCCESS_TEXT, NOTICE_TIMEOUT_MS,
};
use crate::dashboards::d400_reports_panel::api::{self, ReportsBundle};
use crate::dashboards::d410_cost_profit::ui::CostProfitReport;
use crate::dashboards::d411_seasonality::ui::SeasonalityReport;
use crate::dashboards::d412_sales_by_period::ui::SalesReport;
use crate::dashboards::d413_cancellations::ui::CancellationReport;
use crate::dashboards::d414_top_customers::ui::TopCustomersReport;
use crate::shared::components::{DateInput, PageHeader, ReportCard};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::dashboards::d400_reports_panel::filter::{PeriodKind, ReportFilter};
use contracts::shared::ReportError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Панель отчётов: фильтр периода и пять виджетов
#[component]
pub fn ReportsPage() -> impl IntoView {
    let filter = RwSignal::new(ReportFilter::with_defaults(Utc::now().date_naive()));
    let (bundle, set_bundle) = signal(ReportsBundle::default());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);
    let notice_seq = StoredValue::new(0u32);

    let show_notice = move |kind: NoticeKind, text: String| {
        let id = notice_seq.get_value().wrapping_add(1);
        notice_seq.set_value(id);
        set_notice.set(Some(Notice::new(id, kind, text)));

        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            set_notice.update(|current| dismiss(current, id));
        });
    };

    let load = move || {
        let current = filter.get_untracked();
        if let Err(err) = current.validate() {
            log::warn!("ReportsPage: {}", err);
            show_notice(NoticeKind::Error, err.to_string());
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::load_all(&current).await {
                Ok(data) => {
                    log::debug!(
                        "ReportsPage: loaded {} sales periods, {} products",
                        data.sales.len(),
                        data.cost_profit.len()
                    );
                    set_bundle.set(data);
                    show_notice(NoticeKind::Success, LOAD_SUCCESS_TEXT.to_string());
                }
                Err(err) => {
                    log::error!("Failed to load reports: {}", err);
                    show_notice(NoticeKind::Error, LOAD_FAILED_TEXT.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    // Первая загрузка при монтировании
    Effect::new(move |_| load());

    let on_invalid = Callback::new(move |err: ReportError| {
        show_notice(NoticeKind::Error, err.to_string());
    });

    let sales = Signal::derive(move || bundle.with(|b| b.sales.clone()));
    let cancellations = Signal::derive(move || bundle.with(|b| b.cancellations.clone()));
    let seasonality = Signal::derive(move || bundle.with(|b| b.seasonality.clone()));
    let cost_profit = Signal::derive(move || bundle.with(|b| b.cost_profit.clone()));
    let top_customers = Signal::derive(move || bundle.with(|b| b.top_customers.clone()));

    view! {
        <div class="reports-page">
            <PageHeader
                title="📊 Panel de Reportes"
                subtitle="Visualiza y analiza el rendimiento de tu negocio".to_string()
                with_back=true
            />

            {move || notice.get().map(|n| {
                let intent = match n.kind {
                    NoticeKind::Success => MessageBarIntent::Success,
                    NoticeKind::Error => MessageBarIntent::Error,
                };
                view! {
                    <div class="reports-page__notice">
                        <MessageBar intent=intent>{n.text}</MessageBar>
                    </div>
                }
            })}

            <div class="reports-page__filter">
                <div class="reports-page__filter-title">
                    <span>"📅 Filtros de Búsqueda"</span>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || filter.with(|f| f.period_kind.code())}
                    </Badge>
                </div>
                <label class="form__group">
                    <span class="form__label">"Tipo de Período"</span>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            if let Some(kind) = PeriodKind::from_code(&event_target_value(&ev)) {
                                filter.update(|f| f.period_kind = kind);
                            }
                        }
                    >
                        {PeriodKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.code()
                                        selected=move || filter.with(|f| f.period_kind == kind)
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <DateInput
                    label="Fecha Inicio"
                    value=Signal::derive(move || filter.with(|f| f.date_from))
                    on_change=move |date| filter.update(|f| f.date_from = date)
                />
                <DateInput
                    label="Fecha Fin"
                    value=Signal::derive(move || filter.with(|f| f.date_to))
                    on_change=move |date| filter.update(|f| f.date_to = date)
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=loading
                    on_click=move |_| load()
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar Reportes" }}
                </Button>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="reports-page__loading">
                            <Spinner size=SpinnerSize::ExtraLarge />
                            <p class="reports-page__loading-title">"Cargando reportes..."</p>
                            <p class="reports-page__loading-hint">"Esto puede tomar unos segundos"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="reports-page__grid">
                            <ReportCard title="Ventas" badge="Ventas" delay_ms=0>
                                <SalesReport records=sales />
                            </ReportCard>
                            <ReportCard title="Cancelaciones" badge="Cancelado" delay_ms=80>
                                <CancellationReport metrics=cancellations />
                            </ReportCard>
                            <ReportCard title="Estacionalidad" delay_ms=160>
                                <SeasonalityReport records=seasonality />
                            </ReportCard>
                            <ReportCard title="Costos y Ganancias" delay_ms=240>
                                <CostProfitReport records=cost_profit on_invalid=on_invalid />
                            </ReportCard>
                            <ReportCard title="Usuarios Activos" delay_ms=320>
                                <TopCustomersReport customers=top_customers />
                            </ReportCard>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
