//! Attendance tracker with risk predictions

use campusconnect::views;
use leptos::*;

use crate::components::{render_loadable, tone_badge, BUTTON, PANEL};
use crate::state::use_global;

#[component]
pub fn Attendance() -> impl IntoView {
    let state = use_global();
    let rows_state = state.clone();
    let rows = create_memo(move |_| {
        rows_state.with(|s| (s.cache.attendance.clone(), s.cache.predictions.clone()))
    });
    let predict_state = state.clone();

    view! {
        <div class="space-y-6">
            <button
                class=BUTTON
                on:click=move |_| predict_state.spawn(|p| async move {
                    p.predict_attendance_risk().await;
                })
            >
                <i class="fas fa-brain mr-2" />
                "Predict Risk"
            </button>

            <section class=PANEL>
                {move || {
                    let state = state.clone();
                    let (attendance, predictions) = rows.get();
                    render_loadable(attendance, move |rows| {
                        if rows.is_empty() {
                            return view! { <p class="text-gray-500">"No attendance recorded yet."</p> }.into_view();
                        }
                        view! {
                            <table class="w-full text-left">
                                <thead class="text-sm text-gray-500">
                                    <tr>
                                        <th class="py-2">"Subject"</th>
                                        <th>"Attendance"</th>
                                        <th>"Classes"</th>
                                        <th>"Can Skip"</th>
                                        <th>"Status"</th>
                                        <th>"Prediction"</th>
                                        <th>"Mark"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|row| {
                                        let present = state.clone();
                                        let absent = state.clone();
                                        let subject_id = row.subject_id;
                                        let badge = predictions.get(&subject_id).map(views::prediction_badge);
                                        view! {
                                            <tr class="border-t border-gray-200 dark:border-gray-700">
                                                <td class="py-3 font-medium">{row.subject.clone()}</td>
                                                <td>{format!("{}%", views::format_percent(row.attendance_percentage))}</td>
                                                <td>{format!("{}/{}", row.classes_attended, row.total_classes)}</td>
                                                <td>{views::allowed_skips(row.can_bunk_more)}</td>
                                                <td>
                                                    <span class=format!("text-xs px-2 py-1 rounded {}", tone_badge(views::status_tone(&row.status)))>
                                                        {row.status.clone()}
                                                    </span>
                                                </td>
                                                <td>
                                                    {badge.map(|badge| view! {
                                                        <span
                                                            class=format!("text-xs px-2 py-1 rounded {}", tone_badge(badge.tone))
                                                            title=badge.recommendation.clone()
                                                        >
                                                            <i class=format!("fas {} mr-1", badge.icon) />
                                                            {badge.label.clone()}
                                                        </span>
                                                    })}
                                                </td>
                                                <td class="space-x-2">
                                                    <button
                                                        class="text-green-600"
                                                        title="Present"
                                                        on:click=move |_| present.spawn(move |p| async move {
                                                            p.mark_attendance(subject_id, true).await;
                                                        })
                                                    >
                                                        <i class="fas fa-check" />
                                                    </button>
                                                    <button
                                                        class="text-red-600"
                                                        title="Absent"
                                                        on:click=move |_| absent.spawn(move |p| async move {
                                                            p.mark_attendance(subject_id, false).await;
                                                        })
                                                    >
                                                        <i class="fas fa-xmark" />
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
