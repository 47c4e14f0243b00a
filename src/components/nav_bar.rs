//! Site navigation: theme toggle plus member/guest button groups.

use leptos::prelude::*;

use crate::app::Services;
use crate::state::auth::AuthState;
use crate::util::theme::Theme;

fn group_class(visible: bool) -> &'static str {
    if visible { "site-nav__group flex" } else { "site-nav__group hidden" }
}

/// Navigation island. Resolves the session once on mount.
#[component]
pub fn NavBar(services: Services) -> impl IntoView {
    let auth = RwSignal::new(AuthState::loading());
    let theme = RwSignal::new(services.current_theme());

    #[cfg(feature = "csr")]
    {
        let session = services.session.clone();
        leptos::task::spawn_local(async move {
            let state = crate::pages::home::load_auth_state(&session).await;
            auth.set(state);
        });
    }

    let on_theme = {
        let services = services.clone();
        move |_| theme.set(services.toggle_theme())
    };
    let on_login = {
        let services = services.clone();
        move |_| services.go_to_login()
    };
    let on_register = {
        let services = services.clone();
        move |_| services.go_to_register()
    };
    let on_logout = move |_| services.logout();

    view! {
        <nav class="site-nav">
            <button id="theme-toggle" class="btn site-nav__theme" on:click=on_theme title="Toggle theme">
                {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
            </button>
            <div id="auth-nav-buttons" class=move || group_class(auth.with(AuthState::show_member_nav))>
                <span id="username-display" class="site-nav__username">
                    {move || auth.with(AuthState::greeting).unwrap_or_default()}
                </span>
                <button id="logout-btn" class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </div>
            <div id="guest-nav-buttons" class=move || group_class(auth.with(AuthState::show_guest_nav))>
                <button id="login-btn" class="btn" on:click=on_login>
                    "Login"
                </button>
                <button id="register-btn" class="btn btn--primary" on:click=on_register>
                    "Register"
                </button>
            </div>
        </nav>
    }
}
