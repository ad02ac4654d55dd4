//! Loading Component
//!
//! Spinners and the loading/error wrapper for cached panels.

use campusconnect::Loadable;
use leptos::*;

/// Full-panel loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Render a cached panel: spinner while loading, the error inline on
/// failure, `ready` once the data is there.
pub fn render_loadable<T, V: IntoView>(loadable: Loadable<T>, ready: impl FnOnce(T) -> V) -> View {
    match loadable {
        Loadable::Idle | Loadable::Loading => view! { <Loading /> }.into_view(),
        Loadable::Failed(message) => view! {
            <div class="text-red-500 py-6 text-center">
                <i class="fas fa-triangle-exclamation mr-2" />
                {message}
            </div>
        }
        .into_view(),
        Loadable::Ready(value) => ready(value).into_view(),
    }
}
