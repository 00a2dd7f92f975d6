use yew::prelude::*;

use crate::services::AuthService;
use crate::viewmodels::{GuardState, GuardView, SessionGuard};

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub auth: AuthService,
    pub navigate: Callback<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Monta `children` solo con sesión válida. Un chequeo por montaje.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let guard_state = use_state_eq(|| GuardState::Checking);

    {
        let guard_state = guard_state.clone();
        let guard = SessionGuard::new(props.auth.clone());
        use_effect_with((), move |_| {
            let lifetime = guard.lifetime();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(state) = guard.check().await {
                    guard_state.set(state);
                }
            });
            move || lifetime.cancel()
        });
    }

    let view = SessionGuard::new(props.auth.clone()).view(*guard_state);

    {
        let navigate = props.navigate.clone();
        let guard = SessionGuard::new(props.auth.clone());
        let navigator = props.auth.api().platform().navigator.clone();
        use_effect_with(view.clone(), move |view| {
            if let GuardView::Redirect { to } = view {
                guard.remember_redirect(&navigator.current_path());
                log::info!("↪️ Redirigiendo a {}", to);
                navigate.emit(to.clone());
            }
            || ()
        });
    }

    match view {
        GuardView::Loading => html! {
            <div class="console-loading">{ "Loading..." }</div>
        },
        GuardView::Protected => html! { <>{ props.children.clone() }</> },
        GuardView::Redirect { .. } => html! {},
    }
}
