use crate::layout::global_context::AppGlobalContext;
use contracts::shared::navigation::Page;
use leptos::prelude::*;

/// Session of the signed-in admin. Any credentials are accepted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub email: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

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

/// Helper: Perform login and open the dashboard
pub fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    ctx: AppGlobalContext,
    email: String,
) {
    let email = email.trim().to_string();
    log::info!(
        "Signed in as {}",
        if email.is_empty() { "<anonymous>" } else { email.as_str() }
    );
    set_auth_state.set(AuthState { email: Some(email) });
    ctx.navigate(Page::Dashboard);
}

/// Helper: Perform logout and return to the login screen
pub fn do_logout(set_auth_state: WriteSignal<AuthState>, ctx: AppGlobalContext) {
    log::info!("Signed out");
    set_auth_state.set(AuthState::default());
    ctx.navigate(Page::Login);
}
