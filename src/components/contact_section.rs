use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;

use crate::admin::forms::ContactForm;
use crate::context::{use_api, use_toaster};
use crate::toast::Toast;

#[component]
pub fn ContactSection() -> impl IntoView {
    let api = use_api();
    let toaster = use_toaster();
    let form = create_rw_signal(ContactForm::default());
    let (sending, set_sending) = create_signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let message = match form.get_untracked().to_message() {
            Ok(message) => message,
            Err(err) => {
                toaster.push(Toast::error("Error").with_description(err.to_string()));
                return;
            }
        };
        set_sending.set(true);
        let contact = api.contact.clone();
        spawn_local(async move {
            match contact.send_message(&message).await {
                Ok(_) => {
                    toaster.push(
                        Toast::success("Message Sent!")
                            .with_description("Thank you for contacting us. We'll get back to you soon!"),
                    );
                    form.try_set(ContactForm::default());
                }
                Err(err) => {
                    error!("[CONTACT] Failed to send message: {}", err);
                    toaster.push(
                        Toast::error("Error")
                            .with_description("There was an error sending your message. Please try again later."),
                    );
                }
            }
            set_sending.try_set(false);
        });
    };

    view! {
        <section class="contact-section">
            <h2 class="section-title">{ "Get in Touch" }</h2>
            <form class="contact-form" on:submit=handle_submit>
                <input
                    type="text"
                    placeholder="Your Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |e| form.update(|f| f.name = event_target_value(&e))
                />
                <input
                    type="email"
                    placeholder="Your Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |e| form.update(|f| f.email = event_target_value(&e))
                />
                <input
                    type="text"
                    placeholder="Subject"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |e| form.update(|f| f.subject = event_target_value(&e))
                />
                <textarea
                    placeholder="Your Message"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |e| form.update(|f| f.message = event_target_value(&e))
                />
                <button type="submit" class="btn-primary" disabled=move || sending.get()>
                    { move || if sending.get() { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        </section>
    }
}
