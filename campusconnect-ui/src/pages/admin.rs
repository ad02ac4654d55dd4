//! Admin console: platform stats, user moderation, anomaly scan,
//! attendance reports and event moderation

use campusconnect::views;
use leptos::*;

use crate::api::trigger_download;
use crate::components::{
    render_loadable, tone_badge, tone_text, Avatar, InlineLoading, BUTTON, BUTTON_DANGER, INPUT, PANEL,
};
use crate::state::use_global;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn prompt(message: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.prompt_with_message(message).ok())
        .flatten()
}

#[component]
fn StatCard(#[prop(into)] label: String, value: u64, icon: &'static str, #[prop(into)] accent: String) -> impl IntoView {
    view! {
        <div class=PANEL>
            <div class="flex items-center justify-between">
                <div>
                    <div class="text-sm text-gray-500">{label}</div>
                    <div class="text-3xl font-bold">{value}</div>
                </div>
                <i class=format!("fas {} text-3xl {}", icon, accent) />
            </div>
        </div>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_global();
    let stats = create_memo(move |_| state.with(|s| s.cache.admin_stats.clone()));

    view! {
        {move || render_loadable(stats.get(), |stats| view! {
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                <StatCard label="Total Users" value=stats.total_users icon="fa-users" accent="text-blue-500" />
                <StatCard label="Events" value=stats.total_events icon="fa-calendar" accent="text-purple-500" />
                <StatCard label="Messages" value=stats.total_messages icon="fa-comments" accent="text-green-500" />
                <StatCard label="Flagged Accounts" value=stats.fake_accounts icon="fa-user-secret" accent="text-red-500" />
            </div>
        })}
    }
}

#[component]
pub fn AdminUsers() -> impl IntoView {
    let state = use_global();
    let rows_state = state.clone();
    let rows = create_memo(move |_| rows_state.with(|s| (s.cache.users.clone(), s.user_filter.clone())));
    let filter_state = state.clone();

    view! {
        <div class="space-y-6">
            <input
                type="text"
                placeholder="Search by name or email"
                class=INPUT
                prop:value=move || rows.with(|(_, filter)| filter.clone())
                on:input=move |ev| filter_state.portal.filter_users(&event_target_value(&ev))
            />
            <section class=PANEL>
                {move || {
                    let state = state.clone();
                    let (users, filter) = rows.get();
                    render_loadable(users, move |users| view! {
                        <table class="w-full text-left">
                            <thead class="text-sm text-gray-500">
                                <tr>
                                    <th class="py-2">"User"</th>
                                    <th>"Email"</th>
                                    <th>"Trust"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {views::filter_users(&users, &filter).into_iter().map(|user| {
                                    let (suspend, delete, warn) = (state.clone(), state.clone(), state.clone());
                                    let id = user.id;
                                    let name = user.name.clone();
                                    let warn_name = user.name.clone();
                                    let trust_class = if views::is_low_trust(user.trust_score) {
                                        "text-red-500 font-bold"
                                    } else {
                                        ""
                                    };
                                    view! {
                                        <tr class="border-t border-gray-200 dark:border-gray-700">
                                            <td class="py-3">
                                                <div class="flex items-center gap-3">
                                                    <Avatar photo=user.profile_photo.clone() size=32 />
                                                    <span class="font-medium">{user.name.clone()}</span>
                                                    {user.is_admin.then(|| view! {
                                                        <span class="text-xs px-2 py-0.5 rounded bg-blue-100 text-blue-700">"Admin"</span>
                                                    })}
                                                </div>
                                            </td>
                                            <td class="text-sm">{user.email.clone()}</td>
                                            <td class=trust_class>{user.trust_score}</td>
                                            <td>
                                                {if user.is_suspended {
                                                    view! { <span class="text-red-500">"Suspended"</span> }
                                                } else {
                                                    view! { <span class="text-green-500">"Active"</span> }
                                                }}
                                            </td>
                                            <td class="space-x-2 whitespace-nowrap">
                                                <button
                                                    class="px-3 py-1 bg-yellow-600 hover:bg-yellow-700 text-white rounded-lg text-sm"
                                                    on:click=move |_| suspend.spawn(move |p| async move {
                                                        p.toggle_suspend(id).await;
                                                    })
                                                >
                                                    {if user.is_suspended { "Unsuspend" } else { "Suspend" }}
                                                </button>
                                                <button
                                                    class="px-3 py-1 bg-gray-600 hover:bg-gray-700 text-white rounded-lg text-sm"
                                                    on:click=move |_| {
                                                        let Some(message) = prompt(&format!("Warning for {}", warn_name)) else {
                                                            return;
                                                        };
                                                        warn.spawn(move |p| async move {
                                                            p.send_warning(id, &message).await;
                                                        })
                                                    }
                                                >
                                                    "Warn"
                                                </button>
                                                <button
                                                    class=BUTTON_DANGER
                                                    on:click=move |_| {
                                                        let name = name.clone();
                                                        delete.spawn(move |p| async move {
                                                            p.delete_user(id, &name, confirm).await;
                                                        })
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    })
                }}
            </section>
        </div>
    }
}

#[component]
pub fn AdminFlagged() -> impl IntoView {
    let state = use_global();
    let view_state = state.clone();
    let snapshot = create_memo(move |_| view_state.with(|s| (s.cache.users.clone(), s.scanning)));
    let scanning = move || snapshot.with(|(_, scanning)| *scanning);
    let scan_state = state.clone();

    view! {
        <div class="space-y-6">
            <button
                class=BUTTON
                disabled=scanning
                on:click=move |_| scan_state.spawn(|p| async move {
                    p.run_anomaly_scan().await;
                })
            >
                {move || if scanning() {
                    view! { <InlineLoading /> " Scanning..." }.into_view()
                } else {
                    view! { <i class="fas fa-robot mr-2" /> "Run Anomaly Scan" }.into_view()
                }}
            </button>
            <section class=PANEL>
                {move || {
                    let state = state.clone();
                    render_loadable(snapshot.get().0, move |users| {
                        let flagged = views::flagged_users(&users);
                        if flagged.is_empty() {
                            return view! { <p class="text-gray-500">"No suspicious accounts detected."</p> }.into_view();
                        }
                        flagged.into_iter().map(|user| {
                            let suspend = state.clone();
                            let id = user.id;
                            view! {
                                <div class="flex items-center justify-between border-b border-gray-200 dark:border-gray-700 py-3">
                                    <div class="flex items-center gap-3">
                                        <Avatar photo=user.profile_photo.clone() size=32 />
                                        <div>
                                            <div class="font-medium">{user.name.clone()}</div>
                                            <div class="text-sm text-gray-500">{user.email.clone()}</div>
                                        </div>
                                    </div>
                                    <div class="flex items-center gap-4">
                                        <span class=tone_text(views::trust_tone(user.trust_score))>
                                            {format!("Trust {}", user.trust_score)}
                                        </span>
                                        <button
                                            class="px-3 py-1 bg-yellow-600 hover:bg-yellow-700 text-white rounded-lg text-sm"
                                            on:click=move |_| suspend.spawn(move |p| async move {
                                                p.toggle_suspend(id).await;
                                            })
                                        >
                                            {if user.is_suspended { "Unsuspend" } else { "Suspend" }}
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    })
                }}
            </section>
        </div>
    }
}

#[component]
pub fn AdminAttendance() -> impl IntoView {
    let state = use_global();
    let rows_state = state.clone();
    let rows = create_memo(move |_| rows_state.with(|s| s.cache.low_attendance.clone()));
    let export_state = state.clone();
    let train_state = state.clone();

    let on_export = move |_| {
        if let Some(download) = export_state.portal.export_attendance_csv() {
            if let Err(e) = trigger_download(&download) {
                web_sys::console::error_1(&format!("CSV download failed: {}", e).into());
            }
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex gap-3">
                <button class=BUTTON on:click=on_export>
                    <i class="fas fa-file-csv mr-2" />
                    "Export CSV"
                </button>
                <button
                    class=BUTTON
                    on:click=move |_| train_state.spawn(|p| async move {
                        p.train_attendance_model().await;
                    })
                >
                    <i class="fas fa-gears mr-2" />
                    "Train Model"
                </button>
            </div>
            <section class=PANEL>
                {move || {
                    let state = state.clone();
                    render_loadable(rows.get(), move |rows| {
                        if rows.is_empty() {
                            return view! { <p class="text-gray-500">"No students below the attendance threshold."</p> }.into_view();
                        }
                        view! {
                            <table class="w-full text-left">
                                <thead class="text-sm text-gray-500">
                                    <tr>
                                        <th class="py-2">"Student"</th>
                                        <th>"Attendance"</th>
                                        <th>"Risk"</th>
                                        <th>"Action"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|row| {
                                        let warn = state.clone();
                                        let (id, name) = (row.user_id, row.name.clone());
                                        view! {
                                            <tr class="border-t border-gray-200 dark:border-gray-700">
                                                <td class="py-3">{row.name}</td>
                                                <td class=tone_text(views::low_attendance_tone(row.overall_attendance))>
                                                    {format!("{}%", views::format_percent(row.overall_attendance))}
                                                </td>
                                                <td>
                                                    <span class=format!("text-xs px-2 py-1 rounded {}", tone_badge(views::low_attendance_tone(row.overall_attendance)))>
                                                        {row.status}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="px-3 py-1 border border-gray-400 rounded-lg text-sm"
                                                        on:click=move |_| {
                                                            let Some(message) = prompt(&format!("Warning for {}", name)) else {
                                                                return;
                                                            };
                                                            warn.spawn(move |p| async move {
                                                                p.send_warning(id, &message).await;
                                                            })
                                                        }
                                                    >
                                                        "Warn Student"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_view()
                    })
                }}
            </section>
        </div>
    }
}

#[component]
pub fn AdminEvents() -> impl IntoView {
    let state = use_global();
    let events_state = state.clone();
    let events = create_memo(move |_| events_state.with(|s| s.cache.events.clone()));

    view! {
        <section class=PANEL>
            {move || {
                let state = state.clone();
                render_loadable(events.get(), move |events| {
                    if events.is_empty() {
                        return view! { <p class="text-gray-500">"No events on the platform."</p> }.into_view();
                    }
                    events.into_iter().map(|event| {
                        let remove = state.clone();
                        let (id, title) = (event.id, event.title.clone());
                        view! {
                            <div class="flex items-center justify-between border-b border-gray-200 dark:border-gray-700 py-3">
                                <div>
                                    <div class="font-medium">{event.title.clone()}</div>
                                    <div class="text-sm text-gray-500">
                                        {format!("{} | {} | {} going",
                                            event.date,
                                            event.creator_name.clone().unwrap_or_else(|| "Unknown".to_string()),
                                            event.participants)}
                                    </div>
                                </div>
                                <button
                                    class=BUTTON_DANGER
                                    on:click=move |_| {
                                        let title = title.clone();
                                        remove.spawn(move |p| async move {
                                            p.delete_event(id, &title, confirm).await;
                                        })
                                    }
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    }).collect_view()
                })
            }}
        </section>
    }
}
