use crate::domain::inspections::api::fetch_inspections;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::context::{current_token, use_auth};
use contracts::domain::inspection::Inspection;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Журнал результатов контроля качества. На этой поверхности раздел
/// только для чтения: создание и правка проверок не реализованы.
#[component]
pub fn InspectionsList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (inspections, set_inspections) = signal(Vec::<Inspection>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        let Some(token) = current_token(&auth_state) else {
            return;
        };
        spawn_local(async move {
            match fetch_inspections(&token).await {
                Ok(v) => {
                    set_inspections.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Ошибка загрузки результатов контроля: {e}");
                    set_error.set(Some(format!("Ошибка загрузки результатов контроля: {e}")));
                }
            }
        });
    };

    let not_implemented = move |_| {
        log::warn!("Редактирование результатов контроля не реализовано");
    };

    load();

    view! {
        <div class="section">
            <div class="section__header">
                <h2>"Результаты контроля"</h2>
                <div class="section__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Обновить"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Партия"</th>
                            <th class="table__header-cell">"Время проверки"</th>
                            <th class="table__header-cell">"Вердикт"</th>
                            <th class="table__header-cell">"Статус"</th>
                            <th class="table__header-cell">"Дефекты"</th>
                            <th class="table__header-cell">"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || inspections.get()
                            .into_iter()
                            .map(|inspection| {
                                let verdict = inspection.overall_verdict;
                                let status = inspection.status;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{inspection.id}</td>
                                        <td class="table__cell">{inspection.batch_number()}</td>
                                        <td class="table__cell">
                                            {format_datetime(inspection.inspection_time)}
                                        </td>
                                        <td class="table__cell">
                                            <span class=verdict.css_class()>
                                                {verdict.as_str()}
                                            </span>
                                        </td>
                                        <td class="table__cell">
                                            <span class=status.css_class()>{status.as_str()}</span>
                                        </td>
                                        <td class="table__cell">
                                            {format!("{} дефект(ов)", inspection.defect_count)}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="btn-action btn-view"
                                                title="Просмотр"
                                                on:click=not_implemented
                                            >
                                                {icon("eye")}
                                            </button>
                                            <button
                                                class="btn-action btn-edit"
                                                title="Редактировать"
                                                on:click=not_implemented
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="btn-action btn-delete"
                                                title="Удалить"
                                                on:click=not_implemented
                                            >
                                                {icon("trash")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
