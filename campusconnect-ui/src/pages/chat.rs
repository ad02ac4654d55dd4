//! Direct messages: conversation list and the open thread

use campusconnect::{views, ChatPeer, Loadable, SendStatus};
use leptos::*;

use crate::components::{render_loadable, Avatar, Loading, BUTTON, INPUT, PANEL};
use crate::state::use_global;

#[component]
fn ConversationList() -> impl IntoView {
    let state = use_global();
    let list_state = state.clone();
    let chats = create_memo(move |_| {
        list_state.with(|s| match &s.cache.chats {
            Loadable::Ready(chats) => Loadable::Ready(
                views::filter_chats(chats, &s.chat_filter).into_iter().cloned().collect::<Vec<_>>(),
            ),
            other => other.clone(),
        })
    });
    let active_state = state.clone();
    let active = create_memo(move |_| active_state.with(|s| s.chat.as_ref().map(|t| t.peer.id)));

    let filter_state = state.clone();

    view! {
        <aside class=format!("{} w-80 shrink-0 space-y-3", PANEL)>
            <input
                type="search"
                placeholder="Search conversations"
                class=INPUT
                on:input=move |ev| filter_state.portal.filter_chats(&event_target_value(&ev))
            />
            {move || {
                let state = state.clone();
                render_loadable(chats.get(), move |chats| {
                    if chats.is_empty() {
                        return view! { <p class="text-gray-500 text-sm">"No conversations."</p> }.into_view();
                    }
                    chats.into_iter().map(|chat| {
                        let open = state.clone();
                        let peer = ChatPeer {
                            id: chat.other_user_id,
                            name: chat.other_user_name.clone(),
                            photo: chat.other_user_photo.clone(),
                        };
                        let peer_id = peer.id;
                        view! {
                            <button
                                class=move || if active.get() == Some(peer_id) {
                                    "w-full flex items-center space-x-3 p-2 rounded-lg bg-blue-50 dark:bg-gray-700"
                                } else {
                                    "w-full flex items-center space-x-3 p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-700"
                                }
                                on:click=move |_| {
                                    let peer = peer.clone();
                                    open.spawn(move |p| async move { p.select_peer(peer).await })
                                }
                            >
                                <Avatar photo=chat.other_user_photo.clone() size=40 />
                                <div class="flex-1 text-left min-w-0">
                                    <div class="flex justify-between">
                                        <span class=if chat.is_unread { "font-bold" } else { "font-medium" }>
                                            {chat.other_user_name.clone()}
                                        </span>
                                        <span class="text-xs text-gray-500">{views::short_time(&chat.timestamp)}</span>
                                    </div>
                                    <div class="text-sm text-gray-500 truncate">{chat.latest_message.clone()}</div>
                                </div>
                            </button>
                        }
                    }).collect_view()
                })
            }}
        </aside>
    }
}

#[component]
fn Thread() -> impl IntoView {
    let state = use_global();
    let (draft, set_draft) = create_signal(String::new());

    let thread_state = state.clone();
    let thread = create_memo(move |_| {
        thread_state.with(|s| {
            let me = s.session.user().map(|u| u.id).unwrap_or_default();
            s.chat.as_ref().map(|t| (t.peer.clone(), t.history.is_loading(), t.history.error().map(str::to_string), t.entries(me)))
        })
    });

    let send_state = state.clone();
    let on_send = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        set_draft.set(String::new());
        send_state.spawn(move |p| async move {
            p.send_message(&text).await;
        });
    };

    view! {
        <section class=format!("{} flex-1 flex flex-col min-h-[60vh]", PANEL)>
            {move || match thread.get() {
                None => view! {
                    <div class="flex-1 flex items-center justify-center text-gray-500">
                        "Select a conversation"
                    </div>
                }.into_view(),
                Some((peer, loading, error, entries)) => {
                    let retry_state = state.clone();
                    view! {
                        <header class="flex items-center space-x-3 pb-3 border-b border-gray-200 dark:border-gray-700">
                            <Avatar photo=peer.photo.clone() size=40 />
                            <span class="font-medium">{peer.name.clone()}</span>
                        </header>
                        <div class="flex-1 overflow-y-auto py-4 space-y-2">
                            {loading.then(|| view! { <Loading /> })}
                            {error.map(|e| view! { <p class="text-red-500 text-sm">{e}</p> })}
                            {entries.into_iter().map(|entry| {
                                let retry = retry_state.clone();
                                let failed = entry.pending.as_ref().and_then(|(id, status)| match status {
                                    SendStatus::Failed(_) => Some(*id),
                                    _ => None,
                                });
                                view! {
                                    <div class=if entry.mine { "flex justify-end" } else { "flex justify-start" }>
                                        <div class=if entry.mine {
                                            "max-w-md px-4 py-2 rounded-2xl bg-blue-600 text-white"
                                        } else {
                                            "max-w-md px-4 py-2 rounded-2xl bg-gray-100 dark:bg-gray-700"
                                        }>
                                            <div>{entry.content.clone()}</div>
                                            <div class="text-xs opacity-70 mt-1">
                                                {if entry.pending.is_some() {
                                                    entry.timestamp.clone()
                                                } else {
                                                    views::short_time(&entry.timestamp)
                                                }}
                                                {failed.map(|local_id| view! {
                                                    <button
                                                        class="ml-2 underline"
                                                        on:click=move |_| retry.spawn(move |p| async move {
                                                            p.retry_message(local_id).await;
                                                        })
                                                    >
                                                        "Retry"
                                                    </button>
                                                })}
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
            <form on:submit=on_send class="flex space-x-2 pt-3">
                <input
                    type="text"
                    placeholder="Type a message..."
                    class=INPUT
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class=BUTTON>
                    <i class="fas fa-paper-plane" />
                </button>
            </form>
        </section>
    }
}

#[component]
pub fn Chat() -> impl IntoView {
    view! {
        <div class="flex space-x-6">
            <ConversationList />
            <Thread />
        </div>
    }
}
