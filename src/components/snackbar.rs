use yew::prelude::*;

use crate::hooks::use_selector;
use crate::models::SnackBarKind;
use crate::state::{snack_bar, Store};

#[derive(Properties, PartialEq)]
pub struct SnackBarProps {
    pub store: Store,
}

/// Última notificación del system slice
#[function_component(SnackBar)]
pub fn snack_bar_view(props: &SnackBarProps) -> Html {
    let snack = use_selector(&props.store, snack_bar);

    if snack.is_empty() {
        return html! {};
    }

    let kind_class = match snack.kind {
        SnackBarKind::Message => "snackbar-message",
        SnackBarKind::Error => "snackbar-error",
    };

    html! {
        <div class={classes!("snackbar", kind_class)} role="status">
            <span class="snackbar-text">{ snack.message.clone() }</span>
            if !snack.detailed_error_msg.is_empty() {
                <span class="snackbar-detail">{ snack.detailed_error_msg.clone() }</span>
            }
        </div>
    }
}
