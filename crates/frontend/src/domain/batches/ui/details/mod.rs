pub mod view_model;

use self::view_model::BatchEditorViewModel;
use crate::shared::components::modal::Modal;
use crate::system::auth::context::{current_token, use_auth};
use chrono::NaiveDate;
use contracts::domain::batch::{Batch, BatchStatus};
use contracts::domain::product_type::ProductType;
use leptos::prelude::*;

/// Модальная форма создания/редактирования партии.
/// В режиме правки черновик предзаполнен из кэшированной партии,
/// повторная загрузка с бэкенда не выполняется.
#[component]
pub fn BatchEditor(
    /// Кэшированная партия для режима правки; `None` — создание
    batch: Option<Batch>,
    /// Справочник для выпадающего списка типов продукции
    product_types: Vec<ProductType>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let vm = BatchEditorViewModel::new(batch.as_ref());

    let title = if vm.is_edit_mode() {
        "Редактировать партию"
    } else {
        "Добавить партию"
    };

    let handle_save = move |_| {
        vm.save_command(current_token(&auth_state), on_saved);
    };

    view! {
        <Modal title=title.to_string() on_close=on_cancel>
            {move || vm.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <div class="form-group">
                <label>"Номер партии *"</label>
                <input
                    type="text"
                    prop:value=move || vm.draft.get().batch_number
                    on:input=move |ev| {
                        vm.draft.update(|d| d.batch_number = event_target_value(&ev))
                    }
                />
            </div>

            <div class="form-group">
                <label>"Тип продукции *"</label>
                <select
                    prop:value=move || {
                        vm.draft
                            .get()
                            .product_type_id
                            .map(|id| id.to_string())
                            .unwrap_or_default()
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| d.product_type_id = value.parse().ok());
                    }
                >
                    <option value="">"Выберите тип продукции"</option>
                    {product_types
                        .iter()
                        .map(|pt| {
                            view! {
                                <option value=pt.id.to_string()>{pt.option_label()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label>"Дата производства *"</label>
                <input
                    type="date"
                    prop:value=move || {
                        vm.draft
                            .get()
                            .production_date
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| {
                            d.production_date =
                                NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
                        });
                    }
                />
            </div>

            <div class="form-group">
                <label>"Номер печи"</label>
                <input
                    type="text"
                    prop:value=move || vm.draft.get().furnace_number.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| {
                            d.furnace_number =
                                if value.trim().is_empty() { None } else { Some(value) };
                        });
                    }
                />
            </div>

            <div class="form-group">
                <label>"Общий вес, кг"</label>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    prop:value=move || {
                        vm.draft
                            .get()
                            .total_weight_kg
                            .map(|w| w.to_string())
                            .unwrap_or_default()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| d.total_weight_kg = value.trim().parse().ok());
                    }
                />
            </div>

            <div class="form-group">
                <label>"Общая длина, м"</label>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    prop:value=move || {
                        vm.draft
                            .get()
                            .total_length_m
                            .map(|l| l.to_string())
                            .unwrap_or_default()
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| d.total_length_m = value.trim().parse().ok());
                    }
                />
            </div>

            <div class="form-group">
                <label>"Статус"</label>
                <select
                    prop:value=move || vm.draft.get().status.as_str()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.draft.update(|d| {
                            d.status = BatchStatus::parse(&value).unwrap_or_default()
                        });
                    }
                >
                    {BatchStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="modal-actions">
                <button class="button button--primary" on:click=handle_save>
                    "Сохранить"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Отмена"
                </button>
            </div>
        </Modal>
    }
}
