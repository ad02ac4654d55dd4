//! Navigation Component
//!
//! Sidebar with the role's views, theme switch and logout.

use campusconnect::{Theme, View};
use leptos::*;

use crate::components::Avatar;
use crate::state::use_global;

fn icon(view: View) -> &'static str {
    match view {
        View::Dashboard => "fa-house",
        View::Profile => "fa-user",
        View::Feed => "fa-newspaper",
        View::Events => "fa-calendar",
        View::Chat => "fa-comments",
        View::SkillGap => "fa-chart-simple",
        View::Attendance => "fa-clipboard-check",
        View::AdminDashboard => "fa-chart-line",
        View::AdminUsers => "fa-users",
        View::AdminFlagged => "fa-user-secret",
        View::AdminAttendance => "fa-user-clock",
        View::AdminEvents => "fa-calendar-xmark",
        _ => "fa-circle",
    }
}

/// Navigation sidebar component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global();

    let links = state.clone();
    let header = state.clone();
    let theme = state.clone();
    let theme_label = state.clone();
    let logout = state.clone();

    view! {
        <nav class="w-64 shrink-0 bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 flex flex-col">
            <div class="flex items-center space-x-3 px-6 h-16">
                <i class="fas fa-graduation-cap text-2xl text-blue-600" />
                <span class="text-xl font-bold">"CampusConnect"</span>
            </div>

            {move || header.with(|s| s.session.user().cloned()).map(|user| view! {
                <div class="flex items-center space-x-3 px-6 py-4">
                    <Avatar photo=user.profile_photo.clone() size=40 />
                    <div>
                        <div class="font-medium">{user.name.clone()}</div>
                        <div class="text-xs text-gray-500">
                            {if user.is_admin { "Administrator" } else { "Student" }}
                        </div>
                    </div>
                </div>
            })}

            <div class="flex-1 px-3 space-y-1">
                {move || {
                    let (items, current) = links.with(|s| {
                        let items: &[View] = if s.session.is_admin() {
                            &View::ADMIN_NAV
                        } else {
                            &View::STUDENT_NAV
                        };
                        (items.to_vec(), s.view().nav_key())
                    });
                    items.into_iter().map(|view| {
                        let active = view.nav_key() == current;
                        let portal = links.clone();
                        view! {
                            <button
                                on:click=move |_| portal.spawn(move |p| async move {
                                    p.navigate(view).await;
                                })
                                class=if active {
                                    "w-full flex items-center space-x-3 px-4 py-2 rounded-lg bg-blue-600 text-white"
                                } else {
                                    "w-full flex items-center space-x-3 px-4 py-2 rounded-lg \
                                     text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                                }
                            >
                                <i class=format!("fas {} w-5", icon(view)) />
                                <span>{view.title()}</span>
                            </button>
                        }
                    }).collect_view()
                }}
            </div>

            <div class="px-3 py-4 space-y-1 border-t border-gray-200 dark:border-gray-700">
                <button
                    on:click=move |_| theme.portal.toggle_theme()
                    class="w-full flex items-center space-x-3 px-4 py-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                >
                    {move || if theme_label.with(|s| s.theme) == Theme::Dark {
                        view! { <i class="fas fa-sun w-5" /><span>"Light mode"</span> }.into_view()
                    } else {
                        view! { <i class="fas fa-moon w-5" /><span>"Dark mode"</span> }.into_view()
                    }}
                </button>
                <button
                    on:click=move |_| logout.spawn(|p| async move { p.logout().await })
                    class="w-full flex items-center space-x-3 px-4 py-2 rounded-lg text-red-500 hover:bg-gray-100 dark:hover:bg-gray-700"
                >
                    <i class="fas fa-right-from-bracket w-5" />
                    <span>"Logout"</span>
                </button>
            </div>
        </nav>
    }
}
