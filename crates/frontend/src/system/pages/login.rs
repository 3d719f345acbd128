use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_global_context();
    let (_, set_auth_state) = use_auth();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let is_small = move || ctx.is_small_device();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Credentials are not checked
        set_password.set(String::new());
        do_login(set_auth_state, ctx, email.get_untracked());
    };

    view! {
        <div class="login-container" class:login-container--small=is_small>
            <div class="login-box" class:login-box--small=is_small>
                <h2 class="login-box__title">"Admin Portal"</h2>
                <h3 class="login-box__subtitle">"Login to Continue"</h3>

                <form on:submit=on_submit>
                    <input
                        type="email"
                        class="login-box__input"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="login-box__input"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <a
                        href="#"
                        class="login-box__forgot"
                        on:click=|ev: leptos::ev::MouseEvent| ev.prevent_default()
                    >
                        "Forgot Password?"
                    </a>

                    <button type="submit" class="button button--primary login-box__submit">
                        "Log In"
                    </button>
                </form>

                <div class="login-box__divider">"or"</div>

                <div class="login-box__google">
                    <span>"Sign in with Google"</span>
                </div>
            </div>
        </div>
    }
}
