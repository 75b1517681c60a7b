use crate::layout::global_context::{use_app_context, AppSection};
use crate::system::auth::context::use_auth;
use crate::system::auth::{do_logout, storage};
use crate::system::health::{check_health, ApiHealth};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Индикатор доступности API: один запрос `GET /api/health` при монтировании
#[component]
fn ApiStatus() -> impl IntoView {
    let (health, set_health) = signal(ApiHealth::Unknown);

    Effect::new(move |_| {
        spawn_local(async move {
            set_health.set(check_health().await);
        });
    });

    view! {
        <span class="api-status">
            "API: "
            {move || match health.get() {
                ApiHealth::Unknown => view! { <span>"…"</span> }.into_any(),
                ApiHealth::Online => {
                    view! { <span class="status-online">"Подключен"</span> }.into_any()
                }
                ApiHealth::Offline => {
                    view! { <span class="status-offline">"Не подключен"</span> }.into_any()
                }
            }}
        </span>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let ctx = use_app_context();

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        storage::clear_token();
        do_logout(set_auth_state);
        // После выхода видна только страница входа; по возвращении
        // пользователь начинает с дашборда.
        ctx.active_section.set(AppSection::Dashboard);
    };

    view! {
        <header class="header">
            <h1 class="header__title">"Система контроля качества"</h1>
            <div class="header__status">
                <ApiStatus />
            </div>
            <div class="header__user">
                <span class="header__username">{username}</span>
                <button class="button button--secondary" on:click=handle_logout>
                    "Выйти"
                </button>
            </div>
        </header>
    }
}
