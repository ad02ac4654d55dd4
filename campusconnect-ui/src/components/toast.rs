//! Toast Notification Component
//!
//! Renders the portal's toast queue. Each toast dismisses itself after
//! three seconds.

use campusconnect::ToastKind;
use leptos::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::state::use_global;

const TOAST_TIMEOUT_MS: u32 = 3000;

/// Ids of toasts with a dismiss timer running
#[derive(Clone, Default)]
struct Schedule(Rc<RefCell<HashSet<u64>>>);

impl Schedule {
    /// True the first time an id is seen while it has no timer
    fn claim(&self, id: u64) -> bool {
        self.0.borrow_mut().insert(id)
    }

    fn release(&self, id: u64) {
        self.0.borrow_mut().remove(&id);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global();
    let scheduled = Schedule::default();

    let timers = state.clone();
    create_effect(move |_| {
        let ids: Vec<u64> = timers.with(|s| s.toasts.iter().map(|t| t.id).collect());
        for id in ids {
            if scheduled.claim(id) {
                let portal = Rc::clone(&timers.portal);
                let pending = scheduled.clone();
                gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
                    pending.release(id);
                    portal.dismiss_toast(id);
                })
                .forget();
            }
        }
    });

    view! {
        <div class="fixed bottom-6 right-6 z-50 space-y-2">
            {move || {
                state.with(|s| s.toasts.clone()).into_iter().map(|toast| {
                    let (icon, bg_class) = match toast.kind {
                        ToastKind::Success => ("fa-check-circle", "bg-green-600"),
                        ToastKind::Error => ("fa-exclamation-circle", "bg-red-600"),
                    };
                    view! {
                        <div class=format!(
                            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
                            bg_class
                        )>
                            <i class=format!("fas {}", icon) />
                            <span class="text-sm font-medium">{toast.message}</span>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fired_timers_are_forgotten() {
        let schedule = Schedule::default();
        assert!(schedule.claim(1));
        assert!(!schedule.claim(1));
        assert!(schedule.claim(2));

        schedule.clone().release(1);
        schedule.release(2);
        assert_eq!(schedule.len(), 0);
    }
}
