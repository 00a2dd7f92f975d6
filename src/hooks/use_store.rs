use std::rc::Rc;

use yew::prelude::*;

use crate::state::{RootState, Store};

/// Valor derivado del store; re-renderiza solo cuando cambia
#[hook]
pub fn use_selector<T, F>(store: &Store, selector: F) -> T
where
    T: Clone + PartialEq + 'static,
    F: Fn(&RootState) -> T + 'static,
{
    let selector = Rc::new(selector);
    let value = {
        let store = store.clone();
        let selector = selector.clone();
        use_state_eq(move || store.select(|state| (*selector)(state)))
    };

    {
        let value = value.clone();
        use_effect_with(store.clone(), move |store| {
            let id = store.subscribe(move |state| value.set((*selector)(state)));
            let store = store.clone();
            move || store.unsubscribe(id)
        });
    }

    (*value).clone()
}
