use leptos::*;

use crate::components::contact_section::ContactSection;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <header class="page-header">
                <h1>{ "Contact Us" }</h1>
                <p>{ "Questions, custom orders or catering? Send us a note." }</p>
            </header>
            <div class="contact-details">
                <p>{ "Open Tuesday to Saturday, 7am to 6pm." }</p>
            </div>
            <ContactSection />
        </div>
    }
}
