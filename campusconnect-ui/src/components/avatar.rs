//! Profile photo with placeholder fallback

use leptos::*;

use crate::state::use_global;

#[component]
pub fn Avatar(
    #[prop(into)]
    photo: Option<String>,
    #[prop(default = 40)]
    size: u32,
) -> impl IntoView {
    let state = use_global();
    let src = state.portal.api().photo_url(photo.as_deref(), size);

    view! {
        <img
            src=src
            alt="avatar"
            class="rounded-full object-cover"
            style=format!("width: {0}px; height: {0}px;", size)
        />
    }
}
