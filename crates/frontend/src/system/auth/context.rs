use contracts::system::auth::{decode_claims, ClaimsError};
use leptos::prelude::*;

use super::storage;

/// Пользователь текущей сессии, восстановленный из claims токена.
/// Роль используется только для видимости UI, не для авторизации.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub username: String,
    pub user_id: i64,
    pub role: Option<String>,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

/// Построить состояние сессии из токена: декодируем claims без проверки
/// подписи. Любой дефект токена означает разлогин.
pub fn establish_session(token: String) -> Result<AuthState, ClaimsError> {
    let claims = decode_claims(&token)?;
    Ok(AuthState {
        token: Some(token),
        user: Some(SessionUser {
            username: claims.sub,
            user_id: claims.user_id,
            role: claims.role,
        }),
    })
}

/// Сбросить сессию (токен к этому моменту уже удалён из localStorage)
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.set(AuthState::default());
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore session from localStorage on mount
    Effect::new(move |_| {
        if let Some(token) = storage::get_token() {
            match establish_session(token) {
                Ok(state) => set_auth_state.set(state),
                Err(e) => {
                    // Токен не декодируется: удаляем его и остаёмся разлогиненными
                    log::warn!("Ошибка декодирования токена: {e}");
                    storage::clear_token();
                    set_auth_state.set(AuthState::default());
                }
            }
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: current bearer token, if any. Data loaders treat `None` as a
/// no-op rather than an error.
pub fn current_token(auth_state: &ReadSignal<AuthState>) -> Option<String> {
    auth_state.get_untracked().token
}
