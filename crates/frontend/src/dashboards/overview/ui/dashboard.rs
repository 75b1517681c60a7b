use crate::dashboards::overview::metrics::{compute_metrics, recent_inspections, DashboardMetrics};
use crate::domain::batches::api::fetch_batches;
use crate::domain::inspections::api::fetch_inspections;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_datetime, today};
use crate::system::auth::context::{current_token, use_auth};
use contracts::domain::batch::Batch;
use contracts::domain::inspection::Inspection;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сводный дашборд: счётчики по партиям и проверкам плюс лента
/// последних проверок. Пересчитывается от текущих снимков списков.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (batches, set_batches) = signal(Vec::<Batch>::new());
    let (inspections, set_inspections) = signal(Vec::<Inspection>::new());

    // Именованные шаги загрузки с изоляцией сбоев: упавший шаг
    // оставляет свой список прежним, остальные шаги и пересчёт
    // дашборда всё равно выполняются.
    let load = move || {
        let Some(token) = current_token(&auth_state) else {
            return;
        };
        spawn_local(async move {
            match fetch_batches(&token).await {
                Ok(v) => set_batches.set(v),
                Err(e) => log::error!("Ошибка загрузки партий: {e}"),
            }
            match fetch_inspections(&token).await {
                Ok(v) => set_inspections.set(v),
                Err(e) => log::error!("Ошибка загрузки результатов контроля: {e}"),
            }
        });
    };

    load();

    let metrics = Memo::new(move |_| -> DashboardMetrics {
        let today = today().unwrap_or_default();
        compute_metrics(&batches.get(), &inspections.get(), today)
    });

    let recent = move || recent_inspections(&inspections.get(), 5);

    view! {
        <div class="section">
            <div class="section__header">
                <h2>"Дашборд"</h2>
            </div>

            <div class="stat-cards">
                <StatCard
                    label="Всего партий".to_string()
                    icon_name="box".to_string()
                    value=Signal::derive(move || metrics.get().total_batches.to_string())
                />
                <StatCard
                    label="Проверок сегодня".to_string()
                    icon_name="clipboard".to_string()
                    value=Signal::derive(move || metrics.get().inspections_today.to_string())
                />
                <StatCard
                    label="Найдено дефектов".to_string()
                    icon_name="alert".to_string()
                    value=Signal::derive(move || metrics.get().total_defects.to_string())
                />
                <StatCard
                    label="Процент брака".to_string()
                    icon_name="percent".to_string()
                    value=Signal::derive(move || {
                        format!("{:.1}%", metrics.get().defect_rate_percent)
                    })
                />
            </div>

            <div class="recent-inspections">
                <h3>"Последние проверки"</h3>
                {move || recent()
                    .into_iter()
                    .map(|inspection| {
                        let flagged = inspection.is_defect_detected;
                        view! {
                            <div class="recent-inspection-item">
                                <strong>
                                    {format!("Партия {}", inspection.batch_number())}
                                </strong>
                                <span>{format_datetime(inspection.inspection_time)}</span>
                                <span class=if flagged { "verdict-fail" } else { "verdict-pass" }>
                                    {if flagged { "Дефекты найдены" } else { "Без дефектов" }}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
