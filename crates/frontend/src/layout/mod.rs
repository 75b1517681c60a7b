pub mod global_context;
pub mod header;
pub mod navbar;

use crate::dashboards::overview::ui::dashboard::OverviewDashboard;
use crate::domain::batches::ui::list::BatchesList;
use crate::domain::inspections::ui::list::InspectionsList;
use self::global_context::{use_app_context, AppSection};
use self::header::Header;
use self::navbar::Navbar;
use leptos::prelude::*;

/// Каркас приложения для авторизованного пользователя:
/// шапка, навигация и активный раздел.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Header />
        <Navbar />
        <main class="content">
            {move || match ctx.active_section.get() {
                AppSection::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                AppSection::Batches => view! { <BatchesList /> }.into_any(),
                AppSection::Inspections => view! { <InspectionsList /> }.into_any(),
            }}
        </main>
    }
}
