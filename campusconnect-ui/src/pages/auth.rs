//! Login and signup forms

use campusconnect::models::SignupRequest;
use campusconnect::View;
use leptos::*;

use crate::components::{BUTTON, INPUT};
use crate::state::use_global;

#[component]
fn AuthCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-2xl shadow-lg p-8">
                <div class="flex items-center justify-center space-x-3 mb-6">
                    <i class="fas fa-graduation-cap text-3xl text-blue-600" />
                    <span class="text-2xl font-bold">"CampusConnect"</span>
                </div>
                <h2 class="text-xl font-semibold text-center mb-6">{title}</h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn Login() -> impl IntoView {
    let state = use_global();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);

    let submit_state = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_busy.set(true);
        let (email, password) = (email.get(), password.get());
        submit_state.spawn(move |p| async move {
            p.login(&email, &password).await;
            set_busy.set(false);
        });
    };

    view! {
        <AuthCard title="Welcome back">
            <form on:submit=on_submit class="space-y-4">
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    class=INPUT
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    class=INPUT
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" class=format!("w-full {}", BUTTON) disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
            <p class="text-center text-sm text-gray-500 mt-6">
                "New here? "
                <a
                    href="#"
                    class="text-blue-600"
                    on:click=move |ev| {
                        ev.prevent_default();
                        state.spawn(|p| async move { p.navigate(View::Signup).await; });
                    }
                >
                    "Create an account"
                </a>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn Signup() -> impl IntoView {
    let state = use_global();
    let form = create_rw_signal(SignupRequest::default());
    let (busy, set_busy) = create_signal(false);

    let submit_state = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_busy.set(true);
        let request = form.get();
        submit_state.spawn(move |p| async move {
            p.signup(&request).await;
            set_busy.set(false);
        });
    };

    let field = move |placeholder: &'static str,
                      kind: &'static str,
                      get: fn(&SignupRequest) -> String,
                      set: fn(&mut SignupRequest, String)| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                class=INPUT
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <AuthCard title="Join your campus network">
            <form on:submit=on_submit class="space-y-4">
                {field("Full name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                <div class="grid grid-cols-2 gap-4">
                    {field("Branch (e.g. CSE)", "text", |f| f.branch.clone(), |f, v| f.branch = v)}
                    {field("Year", "text", |f| f.year.clone(), |f, v| f.year = v)}
                </div>
                <button type="submit" class=format!("w-full {}", BUTTON) disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="text-center text-sm text-gray-500 mt-6">
                "Already registered? "
                <a
                    href="#"
                    class="text-blue-600"
                    on:click=move |ev| {
                        ev.prevent_default();
                        state.spawn(|p| async move { p.navigate(View::Login).await; });
                    }
                >
                    "Login"
                </a>
            </p>
        </AuthCard>
    }
}
