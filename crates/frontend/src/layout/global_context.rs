use leptos::prelude::*;

/// Разделы приложения, переключаемые кнопками навигации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSection {
    Dashboard,
    Batches,
    Inspections,
}

/// Глобальное состояние навигации, доступное через context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_section: RwSignal<AppSection>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_section: RwSignal::new(AppSection::Dashboard),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
