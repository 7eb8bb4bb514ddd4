use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>{ "404" }</h1>
            <p>{ "Oops! This page has been eaten." }</p>
            <a href="/" class="btn-primary">{ "Return Home" }</a>
        </div>
    }
}
