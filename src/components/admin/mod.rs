pub mod admin_user_management;
pub mod blog_management;
pub mod product_management;

use leptos::*;

use crate::admin::{CrudPanel, PanelRecord, Submission};
use crate::context::Toaster;
use crate::error::ApiError;

/// `None` while a request is already running or nothing is open.
pub fn begin_submit<T: PanelRecord + 'static>(panel: RwSignal<CrudPanel<T>>) -> Option<Submission<T>> {
    panel.try_update(CrudPanel::begin_submit).flatten()
}

pub fn finish_save<T: PanelRecord + 'static>(
    panel: RwSignal<CrudPanel<T>>,
    toaster: Toaster,
    result: Result<T, ApiError>,
) {
    if let Some(Some(toast)) = panel.try_update(|panel| panel.finish_save(result)) {
        toaster.push(toast);
    }
}

pub fn finish_delete<T: PanelRecord + 'static>(
    panel: RwSignal<CrudPanel<T>>,
    toaster: Toaster,
    result: Result<(), ApiError>,
) {
    if let Some(Some(toast)) = panel.try_update(|panel| panel.finish_delete(result)) {
        toaster.push(toast);
    }
}

pub fn finish_load<T: PanelRecord + 'static>(
    panel: RwSignal<CrudPanel<T>>,
    toaster: Toaster,
    result: Result<Vec<T>, ApiError>,
) {
    if let Some(Some(toast)) = panel.try_update(|panel| panel.loaded(result)) {
        toaster.push(toast);
    }
}

/// Overlay dialog; closing is ignored while the panel is submitting.
#[component]
pub fn Modal(
    title: &'static str,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <header class="modal-header">
                    <h3>{ title }</h3>
                    <button class="modal-close" on:click=move |_| on_close.call(())>{ "×" }</button>
                </header>
                { children() }
            </div>
        </div>
    }
}

/// Confirmation body shared by every delete dialog.
#[component]
pub fn ConfirmDelete(
    message: String,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <p>{ message }</p>
        <div class="modal-actions">
            <button class="btn-secondary" on:click=move |_| on_cancel.call(())>{ "Cancel" }</button>
            <button
                class="btn-danger"
                disabled=move || submitting.get()
                on:click=move |_| on_confirm.call(())
            >
                { move || if submitting.get() { "Deleting..." } else { "Delete" } }
            </button>
        </div>
    }
}
