// ============================================================================
// STORE - Estado raíz con Rc<RefCell> + subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::console_slice::{self, ConsoleAction, ConsoleState};
use super::system_slice::{self, SystemAction, SystemState};
use super::theme_slice::{self, ThemeAction, ThemeState};
use crate::platform::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootState {
    pub theme: ThemeState,
    pub system: SystemState,
    pub console: ConsoleState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Theme(ThemeAction),
    System(SystemAction),
    Console(ConsoleAction),
}

impl From<ThemeAction> for Action {
    fn from(action: ThemeAction) -> Self {
        Action::Theme(action)
    }
}

impl From<SystemAction> for Action {
    fn from(action: SystemAction) -> Self {
        Action::System(action)
    }
}

impl From<ConsoleAction> for Action {
    fn from(action: ConsoleAction) -> Self {
        Action::Console(action)
    }
}

/// Cada acción llega solo a su slice
fn reduce(state: &RootState, action: &Action, storage: &dyn KeyValueStore) -> RootState {
    match action {
        Action::Theme(action) => RootState {
            theme: theme_slice::reduce(&state.theme, action),
            ..state.clone()
        },
        Action::System(action) => RootState {
            system: system_slice::reduce(&state.system, action, storage),
            ..state.clone()
        },
        Action::Console(action) => RootState {
            console: console_slice::reduce(&state.console, action),
            ..state.clone()
        },
    }
}

pub type SubscriptionId = usize;

type Subscriber = Rc<dyn Fn(&RootState)>;

/// Store compartido. Los clones apuntan al mismo estado.
#[derive(Clone)]
pub struct Store {
    state: Rc<RefCell<RootState>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Subscriber)>>>,
    next_id: Rc<Cell<SubscriptionId>>,
    storage: Rc<dyn KeyValueStore>,
}

impl Store {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let state = RootState {
            theme: ThemeState::default(),
            system: SystemState::init(storage.as_ref()),
            console: ConsoleState::default(),
        };

        Self {
            state: Rc::new(RefCell::new(state)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
            storage,
        }
    }

    /// Aplica la acción y notifica a los subscribers con el estado nuevo
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        log::debug!("🔄 [STORE] {:?}", action);

        let snapshot = {
            let mut state = self.state.borrow_mut();
            let next = reduce(&state, &action, self.storage.as_ref());
            *state = next;
            state.clone()
        };

        // Copia de la lista: un subscriber puede (des)suscribirse o despachar
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    pub fn state(&self) -> RootState {
        self.state.borrow().clone()
    }

    pub fn select<T>(&self, selector: impl Fn(&RootState) -> T) -> T {
        selector(&self.state.borrow())
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&RootState) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    pub fn ptr_eq(&self, other: &Store) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
