//! App Root Component
//!
//! Provides global state, restores the session and switches pages on the
//! router's current view.

use campusconnect::{Theme, View};
use leptos::*;

use crate::components::{Nav, Toast};
use crate::pages::*;
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    state.spawn(|p| async move {
        p.start().await;
    });

    let theme = state.clone();
    let shell = state.clone();
    let current = create_memo(move |_| shell.with(|s| s.view()));

    view! {
        <div class=move || if theme.with(|s| s.theme) == Theme::Dark { "dark" } else { "" }>
            <div class="min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-white">
                {move || match current.get() {
                    View::Login => view! { <Login /> }.into_view(),
                    View::Signup => view! { <Signup /> }.into_view(),
                    screen => view! {
                        <div class="flex min-h-screen">
                            <Nav />
                            <main class="flex-1 p-8 overflow-y-auto">
                                <h1 class="text-3xl font-bold mb-6">{screen.title()}</h1>
                                {page(screen)}
                            </main>
                        </div>
                    }
                    .into_view(),
                }}

                <Toast />
            </div>
        </div>
    }
}

fn page(view: View) -> leptos::View {
    match view {
        View::Dashboard => view! { <Dashboard /> }.into_view(),
        View::Profile => view! { <Profile /> }.into_view(),
        View::PublicProfile(_) => view! { <PublicProfile /> }.into_view(),
        View::Feed => view! { <Feed /> }.into_view(),
        View::Events => view! { <Events /> }.into_view(),
        View::Chat => view! { <Chat /> }.into_view(),
        View::SkillGap => view! { <SkillGap /> }.into_view(),
        View::Attendance => view! { <Attendance /> }.into_view(),
        View::AdminDashboard => view! { <AdminDashboard /> }.into_view(),
        View::AdminUsers => view! { <AdminUsers /> }.into_view(),
        View::AdminFlagged => view! { <AdminFlagged /> }.into_view(),
        View::AdminAttendance => view! { <AdminAttendance /> }.into_view(),
        View::AdminEvents => view! { <AdminEvents /> }.into_view(),
        View::Login | View::Signup => ().into_view(),
    }
}
