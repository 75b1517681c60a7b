use crate::layout::global_context::{use_app_context, AppSection};
use crate::system::auth::guard::RequireAdmin;
use leptos::prelude::*;

const SECTIONS: [(AppSection, &str); 3] = [
    (AppSection::Dashboard, "Дашборд"),
    (AppSection::Batches, "Партии"),
    (AppSection::Inspections, "Контроль качества"),
];

/// Панель навигации. Переключение раздела перемонтирует его компонент,
/// и тот заново загружает свой список с бэкенда.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="navbar">
            {SECTIONS
                .into_iter()
                .map(|(section, label)| {
                    view! {
                        <button
                            class="navbar__button"
                            class:active=move || ctx.active_section.get() == section
                            on:click=move |_| ctx.active_section.set(section)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
            <RequireAdmin>
                <button
                    class="navbar__button navbar__button--admin"
                    on:click=|_| {
                        log::warn!("Раздел администрирования не реализован");
                    }
                >
                    "Администрирование"
                </button>
            </RequireAdmin>
        </nav>
    }
}
