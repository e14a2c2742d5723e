use crate::api::UserResponse;
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

const CURRENT_USER_KEY: &str = "current_user";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
}

#[cfg(target_arch = "wasm32")]
fn load_stored_user() -> Option<UserResponse> {
    match crate::utils::storage::read_json::<UserResponse>(CURRENT_USER_KEY) {
        Ok(user) => user,
        Err(err) => {
            log::warn!("Discarding stored session: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_stored_user() -> Option<UserResponse> {
    log::debug!("no browser storage; `{}` not read", CURRENT_USER_KEY);
    None
}

fn create_auth_context() -> AuthContext {
    create_signal(AuthState {
        user: load_stored_user(),
    })
}

/// Publishes the signed-in user persisted by the login flow.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.map(|u| u.role == "admin").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            assert!(state.get().user.is_none());
        });
    }

    #[test]
    fn use_auth_reads_provided_context() {
        with_runtime(|| {
            provide_context(create_signal(AuthState {
                user: Some(admin_user()),
            }));
            let (state, _) = use_auth();
            assert_eq!(state.get().user.map(|u| u.role), Some("admin".to_string()));
        });
    }

    #[test]
    fn only_admin_role_counts_as_admin() {
        assert!(is_admin_user(Some(&admin_user())));
        assert!(!is_admin_user(Some(&regular_user())));
        assert!(!is_admin_user(None));

        let shouty = UserResponse {
            role: "ADMIN".into(),
            ..admin_user()
        };
        assert!(!is_admin_user(Some(&shouty)));
    }
}
