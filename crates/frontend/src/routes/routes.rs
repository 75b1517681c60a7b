use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Пока сессия не установлена, показывается только страница входа.
/// Разделы с данными монтируются лишь после успешного декодирования токена,
/// поэтому разлогин автоматически оставляет все кэши пустыми.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}
