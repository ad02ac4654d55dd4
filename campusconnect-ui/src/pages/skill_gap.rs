//! Skill gap analyzer

use campusconnect::views;
use leptos::*;

use crate::components::{render_loadable, tone_text, BUTTON, PANEL};
use crate::state::use_global;

#[component]
fn Report() -> impl IntoView {
    let state = use_global();
    let panel = create_memo(move |_| state.with(|s| s.skill_gap.clone()));

    view! {
        {move || panel.get().map(|panel| view! {
            <section class=PANEL>
                <h2 class="text-xl font-semibold mb-4">{format!("Analysis: {}", panel.project_name)}</h2>
                {render_loadable(panel.report, |report| view! {
                    <div class="space-y-4">
                        <div class=format!("text-4xl font-bold {}", tone_text(views::match_tone(report.match_score)))>
                            {format!("{}% match", report.match_score)}
                        </div>
                        {if report.missing_skills.is_empty() {
                            view! { <p class="text-green-500">"You have every required skill!"</p> }.into_view()
                        } else {
                            view! {
                                <div>
                                    <div class="text-sm text-gray-500 mb-2">"Missing skills"</div>
                                    <div class="flex flex-wrap gap-2">
                                        {report.missing_skills.into_iter().map(|skill| view! {
                                            <span class="text-xs px-2 py-1 rounded bg-red-100 text-red-700">{skill}</span>
                                        }).collect_view()}
                                    </div>
                                </div>
                            }.into_view()
                        }}
                        <ul class="list-disc pl-6 space-y-1">
                            {report.recommended_courses.into_iter().map(|course| view! {
                                <li>{course}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                })}
            </section>
        })}
    }
}

#[component]
pub fn SkillGap() -> impl IntoView {
    let state = use_global();
    let projects_state = state.clone();
    let projects = create_memo(move |_| projects_state.with(|s| s.cache.projects.clone()));

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <section class=format!("{} space-y-4", PANEL)>
                <h2 class="text-xl font-semibold">"Projects"</h2>
                {move || {
                    let state = state.clone();
                    render_loadable(projects.get(), move |projects| {
                        projects.into_iter().map(|project| {
                            let analyze = state.clone();
                            let (id, name) = (project.id, project.project_name.clone());
                            view! {
                                <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4">
                                    <div class="font-medium">{project.project_name.clone()}</div>
                                    {project.description.clone().map(|d| view! {
                                        <p class="text-sm text-gray-500 mt-1">{d}</p>
                                    })}
                                    <p class="text-sm mt-2">{views::join_list(&project.required_skills)}</p>
                                    <button
                                        class=format!("{} mt-3", BUTTON)
                                        on:click=move |_| {
                                            let name = name.clone();
                                            analyze.spawn(move |p| async move {
                                                p.analyze_skill_gap(id, &name).await;
                                            })
                                        }
                                    >
                                        "Analyze"
                                    </button>
                                </div>
                            }
                        }).collect_view()
                    })
                }}
            </section>
            <Report />
        </div>
    }
}
