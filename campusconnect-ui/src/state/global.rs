//! Global Application State
//!
//! The portal owns all application state in a `RefCell`. Components read it
//! through [`GlobalState::with`], which also subscribes them to a revision
//! signal the portal bumps after every change.

use campusconnect::{ApiClient, AppState, Portal, SessionStore};
use leptos::*;
use std::future::Future;
use std::rc::Rc;

use crate::api::{get_api_base, GlooTransport, LocalStore};

pub type WebPortal = Portal<GlooTransport, LocalStore>;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    pub portal: Rc<WebPortal>,
    /// Bumped by the portal's observer after each state change
    revision: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let api = ApiClient::new(GlooTransport, get_api_base());
    let portal = Rc::new(Portal::new(api, SessionStore::new(LocalStore)));

    let revision = create_rw_signal(0u64);
    portal.set_observer(Rc::new(move || revision.update(|r| *r += 1)));

    let state = GlobalState { portal, revision };
    provide_context(state.clone());
    state
}

pub fn use_global() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Read the application state, re-running the caller on changes
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.revision.track();
        f(&self.portal.state())
    }

    /// Run a portal handler in the background
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<WebPortal>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(f(Rc::clone(&self.portal)));
    }
}
