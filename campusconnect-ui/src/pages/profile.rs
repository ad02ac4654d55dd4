//! Own profile editor and other students' public profiles

use campusconnect::views;
use leptos::*;

use crate::api::{read_attachment, selected_file};
use crate::components::{render_loadable, tone_text, Avatar, BUTTON, INPUT, PANEL};
use crate::state::use_global;

fn chips(items: Vec<String>, class: &'static str) -> impl IntoView {
    items
        .into_iter()
        .map(|item| view! { <span class=format!("text-xs px-2 py-1 rounded {}", class)>{item}</span> })
        .collect_view()
}

#[component]
pub fn Profile() -> impl IntoView {
    let state = use_global();
    let user = state.with(|s| s.session.user().cloned());
    let Some(user) = user else {
        return ().into_view();
    };

    let (skills, set_skills) = create_signal(views::join_list(&user.skills));
    let (interests, set_interests) = create_signal(views::join_list(&user.interests));
    let (saving, set_saving) = create_signal(false);

    let save_state = state.clone();
    let on_save = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);
        let (skills, interests) = (skills.get(), interests.get());
        save_state.spawn(move |p| async move {
            p.update_profile(&skills, &interests).await;
            set_saving.set(false);
        });
    };

    let upload_state = state.clone();
    let on_photo = move |ev: ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        upload_state.spawn(move |p| async move {
            match read_attachment(file).await {
                Ok(photo) => {
                    p.upload_photo(photo).await;
                }
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    };

    let photo_state = state.clone();
    let photo = move || photo_state.with(|s| s.session.user().and_then(|u| u.profile_photo.clone()));

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <section class=PANEL>
                <div class="flex flex-col items-center text-center space-y-3">
                    {move || view! { <Avatar photo=photo() size=150 /> }}
                    <label class="text-sm text-blue-600 cursor-pointer">
                        <i class="fas fa-camera mr-1" />
                        "Change photo"
                        <input type="file" accept="image/*" class="hidden" on:change=on_photo />
                    </label>
                    <div class="text-xl font-semibold">{user.name.clone()}</div>
                    <div class="text-gray-500">{user.email.clone()}</div>
                    <div class="text-sm text-gray-500">
                        {user.branch.clone().unwrap_or_default()} " " {user.year.clone().unwrap_or_default()}
                    </div>
                </div>
            </section>

            <section class=format!("{} lg:col-span-2", PANEL)>
                <h2 class="text-xl font-semibold mb-4">"Skills & Interests"</h2>
                <form on:submit=on_save class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-500 mb-2">"Skills (comma-separated)"</label>
                        <input
                            type="text"
                            class=INPUT
                            prop:value=move || skills.get()
                            on:input=move |ev| set_skills.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-500 mb-2">"Interests (comma-separated)"</label>
                        <input
                            type="text"
                            class=INPUT
                            prop:value=move || interests.get()
                            on:input=move |ev| set_interests.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class=BUTTON disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                    </button>
                </form>
            </section>
        </div>
    }
    .into_view()
}

#[component]
pub fn PublicProfile() -> impl IntoView {
    let state = use_global();
    let profile = create_memo(move |_| state.with(|s| s.cache.public_profile.clone()));

    view! {
        <section class=PANEL>
            {move || render_loadable(profile.get(), |profile| view! {
                <div class="flex items-start space-x-6">
                    <Avatar photo=profile.profile_photo.clone() size=120 />
                    <div class="space-y-3">
                        <div class="text-2xl font-semibold">{profile.name.clone()}</div>
                        <div class="text-gray-500">
                            {profile.branch.clone().unwrap_or_default()} " " {profile.year.clone().unwrap_or_default()}
                        </div>
                        {profile.bio.clone().map(|bio| view! { <p>{bio}</p> })}
                        <div class="flex space-x-6 text-sm">
                            <span class=tone_text(views::trust_tone(profile.trust_score))>
                                {format!("Trust {}", profile.trust_score)}
                            </span>
                            <span>{format!("{} events", profile.events_created)}</span>
                            <span>{format!("{} posts", profile.posts_count)}</span>
                        </div>
                        <div class="flex flex-wrap gap-2">
                            {chips(profile.skills.clone(), "bg-blue-100 text-blue-700")}
                        </div>
                        <div class="flex flex-wrap gap-2">
                            {chips(profile.interests.clone(), "bg-purple-100 text-purple-700")}
                        </div>
                    </div>
                </div>
            })}
        </section>
    }
}
