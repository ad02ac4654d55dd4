//! Events: create and join

use campusconnect::models::NewEvent;
use campusconnect::views;
use leptos::*;

use crate::components::{render_loadable, BUTTON, INPUT, PANEL};
use crate::state::use_global;

#[component]
fn NewEventForm() -> impl IntoView {
    let state = use_global();
    let form = create_rw_signal(NewEvent::default());
    let (open, set_open) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let event = form.get();
        state.spawn(move |p| async move {
            if p.create_event(&event).await {
                form.set(NewEvent::default());
                set_open.set(false);
            }
        });
    };

    view! {
        <div>
            <button class=BUTTON on:click=move |_| set_open.update(|o| *o = !*o)>
                <i class="fas fa-plus mr-2" />
                "Create Event"
            </button>
            <form
                on:submit=on_submit
                class=move || if open.get() { format!("{} mt-4 space-y-3", PANEL) } else { "hidden".to_string() }
            >
                <input type="text" placeholder="Title" required=true class=INPUT
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev)) />
                <input type="date" required=true class=INPUT
                    prop:value=move || form.with(|f| f.date.clone())
                    on:input=move |ev| form.update(|f| f.date = event_target_value(&ev)) />
                <textarea rows="3" placeholder="Description" class=INPUT
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev)) />
                <input type="text" placeholder="Tags (comma-separated)" class=INPUT
                    prop:value=move || form.with(|f| f.tags.clone())
                    on:input=move |ev| form.update(|f| f.tags = event_target_value(&ev)) />
                <button type="submit" class=BUTTON>"Publish"</button>
            </form>
        </div>
    }
}

#[component]
pub fn Events() -> impl IntoView {
    let state = use_global();
    let events_state = state.clone();
    let events = create_memo(move |_| events_state.with(|s| s.cache.events.clone()));

    view! {
        <div class="space-y-6">
            <NewEventForm />
            {move || {
                let state = state.clone();
                render_loadable(events.get(), move |events| {
                    if events.is_empty() {
                        return view! { <p class="text-gray-500">"No upcoming events."</p> }.into_view();
                    }
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {events.into_iter().map(|event| {
                                let join = state.clone();
                                let id = event.id;
                                view! {
                                    <div class=PANEL>
                                        <div class="text-sm text-blue-600">
                                            <i class="fas fa-calendar mr-1" />
                                            {event.date.clone()}
                                        </div>
                                        <h3 class="text-lg font-semibold mt-1">{event.title.clone()}</h3>
                                        <p class="text-gray-500 text-sm mt-2">{event.description.clone()}</p>
                                        <div class="flex flex-wrap gap-2 mt-3">
                                            {views::event_tags(event.tags.as_deref()).into_iter().map(|tag| view! {
                                                <span class="text-xs px-2 py-1 rounded bg-gray-100 dark:bg-gray-700">{tag}</span>
                                            }).collect_view()}
                                        </div>
                                        <div class="flex items-center justify-between mt-4">
                                            <span class="text-sm text-gray-500">
                                                {format!("{} going", event.participants)}
                                            </span>
                                            <button class=BUTTON on:click=move |_| join.spawn(move |p| async move {
                                                p.join_event(id).await;
                                            })>
                                                "Join"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_view()
                })
            }}
        </div>
    }
}
