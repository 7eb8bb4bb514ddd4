use leptos::*;

use crate::context::{use_toaster, ToastEntry};

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.entries()
                key=|entry| entry.id
                children=move |ToastEntry { id, toast }| {
                    let class = if toast.is_error() { "toast toast-destructive" } else { "toast" };
                    view! {
                        <div class=class role="status">
                            <strong>{ toast.title }</strong>
                            { toast.description.map(|text| view! { <p>{ text }</p> }) }
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>{ "×" }</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
