use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::admin::forms::LoginForm;
use crate::components::form_field::Field;
use crate::context::{use_auth, use_toaster};
use crate::error::ApiError;
use crate::toast::Toast;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let form = create_rw_signal(LoginForm::default());
    let (pending, set_pending) = create_signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let (email, password) = match form.with_untracked(LoginForm::validate) {
            Ok(credentials) => credentials,
            Err(err) => {
                toaster.push(Toast::error("Login failed").with_description(err.to_string()));
                return;
            }
        };
        set_pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(email, password).await {
                Ok(user) if user.is_superuser => {
                    toaster.push(
                        Toast::success("Login successful!")
                            .with_description("Welcome to the admin dashboard."),
                    );
                    navigate("/admin", Default::default());
                }
                Ok(user) => {
                    toaster.push(
                        Toast::success("Login successful!")
                            .with_description(format!("Welcome back, {}.", user.email)),
                    );
                    navigate("/", Default::default());
                }
                Err(err) => {
                    let description = match err {
                        ApiError::Unauthorized(_) => {
                            "Invalid email or password. Please try again.".to_string()
                        }
                        other => other.user_message(),
                    };
                    toaster.push(Toast::error("Login failed").with_description(description));
                }
            }
            set_pending.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{ "Welcome Back" }</h1>
                <p class="auth-subtitle">{ "Sign in to your account" }</p>
                <form class="auth-form" on:submit=submit>
                    <Field
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=move |value| form.update(|f| f.email = value)
                    />
                    <Field
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=move |value| form.update(|f| f.password = value)
                    />
                    <button type="submit" class="btn-primary btn-full" disabled=move || pending.get()>
                        { move || if pending.get() { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>
                <p class="auth-link">{ "Don't have an account? " }<a href="/register">{ "Sign up" }</a></p>
            </div>
        </div>
    }
}
