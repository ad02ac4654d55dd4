//! Student dashboard: stat cards, trust ring and recommendations

use campusconnect::views::{self, DashboardCards};
use leptos::*;

use crate::components::{render_loadable, tone_text, Avatar, PANEL};
use crate::state::use_global;

/// Circular gauge for the trust score
#[component]
fn TrustRing(score: i64) -> impl IntoView {
    let (filled, rest) = views::trust_ring(score);
    let tone = tone_text(views::trust_tone(score));

    view! {
        <svg viewBox="0 0 36 36" class=format!("w-24 h-24 {}", tone)>
            <circle cx="18" cy="18" r="15.9155" fill="none" stroke="currentColor"
                stroke-opacity="0.15" stroke-width="3" />
            <circle cx="18" cy="18" r="15.9155" fill="none" stroke="currentColor"
                stroke-width="3" stroke-linecap="round" transform="rotate(-90 18 18)"
                stroke-dasharray=format!("{} {}", filled, rest) />
            <text x="18" y="21" text-anchor="middle" class="text-[8px] font-bold" fill="currentColor">
                {score}
            </text>
        </svg>
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, value: usize, icon: &'static str) -> impl IntoView {
    view! {
        <div class=PANEL>
            <div class="flex items-center justify-between">
                <div>
                    <div class="text-sm text-gray-500">{label}</div>
                    <div class="text-3xl font-bold">{value}</div>
                </div>
                <i class=format!("fas {} text-3xl text-blue-500", icon) />
            </div>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global();
    let cards_state = state.clone();
    let cards = create_memo(move |_| {
        cards_state.with(|s| s.session.user().map(DashboardCards::for_user))
    });
    let recs_state = state.clone();
    let recommendations = create_memo(move |_| recs_state.with(|s| s.cache.recommendations.clone()));

    view! {
        <div class="space-y-8">
            {move || cards.get().map(|cards| view! {
                <p class="text-gray-500">{format!("Welcome back, {}!", cards.first_name)}</p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <StatCard label="Skills" value=cards.skills_count icon="fa-code" />
                    <StatCard label="Interests" value=cards.interests_count icon="fa-heart" />
                    <div class=PANEL>
                        <div class="flex items-center justify-between">
                            <div class="text-sm text-gray-500">"Trust Score"</div>
                            <TrustRing score=cards.trust_score />
                        </div>
                    </div>
                </div>
            })}

            <section class=PANEL>
                <h2 class="text-xl font-semibold mb-4">"Recommended Connections"</h2>
                {move || {
                    let open = state.clone();
                    render_loadable(recommendations.get(), move |recs| {
                        if recs.is_empty() {
                            return view! {
                                <p class="text-gray-500">"No recommendations yet. Add skills to your profile."</p>
                            }.into_view();
                        }
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {recs.into_iter().map(|rec| {
                                    let open = open.clone();
                                    let id = rec.user.id;
                                    view! {
                                        <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4">
                                            <div class="flex items-center space-x-3">
                                                <Avatar photo=rec.user.profile_photo.clone() size=48 />
                                                <div>
                                                    <div class="font-medium">{rec.user.name.clone()}</div>
                                                    <span class="text-xs px-2 py-1 rounded bg-blue-100 text-blue-700">
                                                        {format!("{}% Match", views::format_percent(rec.similarity_score))}
                                                    </span>
                                                </div>
                                            </div>
                                            <p class="text-sm text-gray-500 mt-2">{views::join_list(&rec.user.skills)}</p>
                                            <button
                                                class="mt-3 text-sm text-blue-600"
                                                on:click=move |_| open.spawn(move |p| async move {
                                                    p.open_profile(id).await;
                                                })
                                            >
                                                "View Profile"
                                            </button>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    })
                }}
            </section>
        </div>
    }
}
