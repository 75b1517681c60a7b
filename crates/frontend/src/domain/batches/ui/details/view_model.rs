use contracts::domain::batch::{Batch, BatchDraft};
use leptos::prelude::*;

use crate::domain::batches::api::{create_batch, update_batch};

/// ViewModel модальной формы партии
#[derive(Clone, Copy)]
pub struct BatchEditorViewModel {
    pub draft: RwSignal<BatchDraft>,
    pub error: RwSignal<Option<String>>,
}

impl BatchEditorViewModel {
    /// Создание — пустой черновик; правка — черновик из кэшированной партии
    pub fn new(batch: Option<&Batch>) -> Self {
        let draft = match batch {
            Some(b) => BatchDraft::from_batch(b),
            None => BatchDraft::default(),
        };
        Self {
            draft: RwSignal::new(draft),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.draft.get_untracked().is_edit_mode()
    }

    /// Сохранение: валидация до любого сетевого запроса, затем
    /// PUT (правка) или POST (создание). Без токена — no-op.
    pub fn save_command(&self, token: Option<String>, on_saved: Callback<()>) {
        let current = self.draft.get();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }
        let Some(token) = token else {
            return;
        };

        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = match current.id {
                Some(id) => update_batch(id, &current, &token).await,
                None => create_batch(&current, &token).await,
            };
            match result {
                Ok(()) => {
                    let msg = if current.id.is_some() {
                        "Партия обновлена"
                    } else {
                        "Партия создана"
                    };
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(msg);
                    }
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
