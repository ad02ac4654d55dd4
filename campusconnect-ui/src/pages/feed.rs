//! Campus feed: composer, posts, likes and comments

use campusconnect::models::{Attachment, Post};
use campusconnect::views;
use chrono::Utc;
use leptos::*;

use crate::api::{read_attachment, selected_file};
use crate::components::{render_loadable, Avatar, BUTTON, INPUT, PANEL};
use crate::state::{use_global, GlobalState};

#[component]
fn Composer() -> impl IntoView {
    let state = use_global();
    let (content, set_content) = create_signal(String::new());
    let image = create_rw_signal(None::<Attachment>);
    let (posting, set_posting) = create_signal(false);

    let on_image = move |ev: ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        spawn_local(async move {
            match read_attachment(file).await {
                Ok(attachment) => image.set(Some(attachment)),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        let attachment = image.get();
        set_posting.set(true);
        state.spawn(move |p| async move {
            if p.create_post(&text, attachment).await {
                set_content.set(String::new());
                image.set(None);
            }
            set_posting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class=format!("{} space-y-3", PANEL)>
            <textarea
                rows="3"
                placeholder="Share something with campus..."
                class=INPUT
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            />
            <div class="flex items-center justify-between">
                <label class="text-sm text-blue-600 cursor-pointer">
                    <i class="fas fa-image mr-1" />
                    {move || image.with(|i| i.as_ref().map(|a| a.file_name.clone()))
                        .unwrap_or_else(|| "Add image".to_string())}
                    <input type="file" accept="image/*" class="hidden" on:change=on_image />
                </label>
                <button type="submit" class=BUTTON disabled=move || posting.get()>"Post"</button>
            </div>
        </form>
    }
}

fn post_card(state: GlobalState, post: Post) -> impl IntoView {
    let (comment, set_comment) = create_signal(String::new());
    let post_id = post.id;
    let image = post.image_url.as_deref().map(|url| state.portal.api().asset_url(url));

    let like_state = state.clone();
    let comment_state = state.clone();
    let on_comment = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = comment.get();
        comment_state.spawn(move |p| async move {
            p.comment_post(post_id, &text).await;
        });
    };

    view! {
        <article class=PANEL>
            <header class="flex items-center space-x-3 mb-3">
                <Avatar photo=post.author_photo.clone() size=40 />
                <div>
                    <div class="font-medium">{post.author_name.clone()}</div>
                    <div class="text-xs text-gray-500">{views::time_ago(&post.created_at, Utc::now())}</div>
                </div>
            </header>
            <p class="whitespace-pre-wrap">{post.content.clone()}</p>
            {image.map(|src| view! { <img src=src class="mt-3 rounded-lg max-h-96" /> })}

            <div class="flex items-center space-x-6 mt-4 text-sm">
                <button
                    class=if post.user_has_liked { "text-red-500" } else { "text-gray-500" }
                    on:click=move |_| like_state.spawn(move |p| async move {
                        p.like_post(post_id).await;
                    })
                >
                    <i class=if post.user_has_liked { "fas fa-heart mr-1" } else { "far fa-heart mr-1" } />
                    {post.likes_count}
                </button>
                <span class="text-gray-500">
                    <i class="far fa-comment mr-1" />
                    {post.comments_count}
                </span>
            </div>

            <div class="mt-4 space-y-2">
                {post.comments_data.into_iter().map(|c| view! {
                    <div class="text-sm">
                        <span class="font-medium">{c.author_name}</span>
                        " "
                        {c.content}
                    </div>
                }).collect_view()}
                <form on:submit=on_comment class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Write a comment..."
                        class=INPUT
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    />
                    <button type="submit" class=BUTTON>"Send"</button>
                </form>
            </div>
        </article>
    }
}

#[component]
pub fn Feed() -> impl IntoView {
    let state = use_global();
    let feed_state = state.clone();
    let feed = create_memo(move |_| feed_state.with(|s| s.cache.feed.clone()));

    view! {
        <div class="max-w-2xl space-y-6">
            <Composer />
            {move || {
                let state = state.clone();
                render_loadable(feed.get(), move |posts| {
                    if posts.is_empty() {
                        return view! { <p class="text-gray-500">"No posts yet. Be the first!"</p> }.into_view();
                    }
                    posts
                        .into_iter()
                        .map(|post| post_card(state.clone(), post))
                        .collect_view()
                })
            }}
        </div>
    }
}
