use leptos::prelude::*;

use super::context::use_auth;

/// Показывает содержимое только администратору.
///
/// Это исключительно видимость UI: роль взята из claims токена без
/// проверки подписи, реальную авторизацию выполняет бэкенд.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user
                    .as_ref()
                    .map(|u| u.is_admin())
                    .unwrap_or(false)
            }
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}
