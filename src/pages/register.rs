use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;

use crate::admin::forms::RegisterForm;
use crate::components::form_field::Field;
use crate::context::{use_auth, use_toaster};
use crate::toast::Toast;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let form = create_rw_signal(RegisterForm::default());
    let (pending, set_pending) = create_signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let registration = match form.with_untracked(RegisterForm::to_registration) {
            Ok(registration) => registration,
            Err(err) => {
                toaster.push(Toast::error("Error").with_description(err.to_string()));
                return;
            }
        };
        set_pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.register(registration).await {
                Ok(_) => {
                    toaster.push(
                        Toast::success("Success!")
                            .with_description("Your account has been created successfully"),
                    );
                    navigate("/", Default::default());
                }
                Err(err) => {
                    toaster.push(Toast::error("Registration Error").with_description(err.user_message()));
                }
            }
            set_pending.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{ "Create Account" }</h1>
                <form class="auth-form" on:submit=submit>
                    <div class="field-row">
                        <Field
                            label="First Name"
                            value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                            on_input=move |value| form.update(|f| f.first_name = value)
                        />
                        <Field
                            label="Last Name"
                            value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                            on_input=move |value| form.update(|f| f.last_name = value)
                        />
                    </div>
                    <Field
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=move |value| form.update(|f| f.email = value)
                    />
                    <Field
                        label="Password"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=move |value| form.update(|f| f.password = value)
                    />
                    <Field
                        label="Confirm Password"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=move |value| form.update(|f| f.confirm_password = value)
                    />
                    <button type="submit" class="btn-primary btn-full" disabled=move || pending.get()>
                        { move || if pending.get() { "Creating account..." } else { "Sign Up" } }
                    </button>
                </form>
                <p class="auth-link">{ "Already have an account? " }<a href="/login">{ "Sign in" }</a></p>
            </div>
        </div>
    }
}
