pub mod state;

use self::state::{filter_by_status, quality_stars, search_by_number};
use crate::domain::batches::api::{delete_batch, fetch_batches};
use crate::domain::batches::ui::details::BatchEditor;
use crate::domain::product_types::api::fetch_product_types;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::context::{current_token, use_auth};
use contracts::domain::batch::{Batch, BatchStatus};
use contracts::domain::product_type::ProductType;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn BatchesList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (batches, set_batches) = signal(Vec::<Batch>::new());
    let (product_types, set_product_types) = signal(Vec::<ProductType>::new());
    let (status_filter, set_status_filter) = signal(Option::<BatchStatus>::None);
    let (search, set_search) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    // None — окно закрыто; Some(None) — создание; Some(Some(id)) — правка
    let (editor, set_editor) = signal(Option::<Option<i64>>::None);

    // Последовательная перезагрузка раздела: справочник, затем партии.
    // Без токена — no-op. Сбой одного шага не прерывает остальные.
    let load = move || {
        let Some(token) = current_token(&auth_state) else {
            return;
        };
        spawn_local(async move {
            match fetch_product_types(&token).await {
                Ok(v) => set_product_types.set(v),
                Err(e) => log::error!("Ошибка загрузки типов продукции: {e}"),
            }
            match fetch_batches(&token).await {
                Ok(v) => {
                    set_batches.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Ошибка загрузки партий: {e}");
                    set_error.set(Some(format!("Ошибка загрузки партий: {e}")));
                }
            }
        });
    };

    // Производное представление: фильтр по статусу, затем поиск по номеру
    let visible = move || {
        let filtered = filter_by_status(&batches.get(), status_filter.get());
        search_by_number(&filtered, &search.get())
    };

    let handle_view = move |id: i64| {
        let Some(batch) = batches.get().into_iter().find(|b| b.id == id) else {
            return;
        };
        let details = format!(
            "Детали партии:\nНомер: {}\nТип продукции: {}\nДата производства: {}\nСтатус: {}\nПечь: {}\nВес: {}\nДлина: {}",
            batch.batch_number,
            batch.product_type_name(),
            format_date(batch.production_date),
            batch.status,
            batch.furnace_number.clone().unwrap_or_else(|| "Не указана".into()),
            batch
                .total_weight_kg
                .map(|w| format!("{w} кг"))
                .unwrap_or_else(|| "Не указан".into()),
            batch
                .total_length_m
                .map(|l| format!("{l} м"))
                .unwrap_or_else(|| "Не указана".into()),
        );
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(&details);
        }
    };

    let handle_delete = move |id: i64| {
        let Some(batch) = batches.get().into_iter().find(|b| b.id == id) else {
            return;
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Вы уверены, что хотите удалить партию \"{}\"?",
                    batch.batch_number
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = current_token(&auth_state) else {
            return;
        };
        spawn_local(async move {
            match delete_batch(id, &token).await {
                Ok(()) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Партия удалена");
                    }
                    load();
                }
                Err(e) => {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&format!("Ошибка при удалении партии: {e}"));
                    }
                }
            }
        });
    };

    let open_editor = move |target: Option<i64>| set_editor.set(Some(target));

    load();

    view! {
        <div class="section">
            <div class="section__header">
                <h2>"Производственные партии"</h2>
                <div class="section__actions">
                    <button class="button button--primary" on:click=move |_| open_editor(None)>
                        {icon("plus")}
                        "Добавить партию"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Обновить"
                    </button>
                </div>
            </div>

            <div class="section__filters">
                <input
                    type="text"
                    class="filter-search"
                    placeholder="Поиск по номеру партии..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="filter-status"
                    on:change=move |ev| {
                        set_status_filter.set(BatchStatus::parse(&event_target_value(&ev)))
                    }
                >
                    <option value="" selected=move || status_filter.get().is_none()>
                        "Все статусы"
                    </option>
                    {BatchStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Номер партии"</th>
                            <th class="table__header-cell">"Тип продукции"</th>
                            <th class="table__header-cell">"Дата производства"</th>
                            <th class="table__header-cell">"Статус"</th>
                            <th class="table__header-cell">"Оценка"</th>
                            <th class="table__header-cell">"Действия"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible()
                            .into_iter()
                            .map(|batch| {
                                let id = batch.id;
                                let status = batch.status;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{batch.batch_number.clone()}</td>
                                        <td class="table__cell">{batch.product_type_name()}</td>
                                        <td class="table__cell">
                                            {format_date(batch.production_date)}
                                        </td>
                                        <td class="table__cell">
                                            <span class=status.css_class()>{status.as_str()}</span>
                                        </td>
                                        <td class="table__cell">
                                            {quality_stars(batch.quality_rating)}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="btn-action btn-view"
                                                title="Просмотр"
                                                on:click=move |_| handle_view(id)
                                            >
                                                {icon("eye")}
                                            </button>
                                            <button
                                                class="btn-action btn-edit"
                                                title="Редактировать"
                                                on:click=move |_| open_editor(Some(id))
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="btn-action btn-delete"
                                                title="Удалить"
                                                on:click=move |_| handle_delete(id)
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

            {move || editor.get().map(|target| {
                let batch = target.and_then(|id| batches.get().into_iter().find(|b| b.id == id));
                view! {
                    <BatchEditor
                        batch=batch
                        product_types=product_types.get()
                        on_saved=Callback::new(move |_| {
                            set_editor.set(None);
                            load();
                        })
                        on_cancel=Callback::new(move |_| set_editor.set(None))
                    />
                }
            })}
        </div>
    }
}
