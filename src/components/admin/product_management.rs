use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::*;

use super::{begin_submit, finish_delete, finish_load, finish_save, ConfirmDelete, Modal};
use crate::admin::forms::ProductForm;
use crate::admin::{CrudPanel, DialogMode, Row};
use crate::components::form_field::{Field, TextAreaField};
use crate::context::{use_api, use_toaster};
use crate::models::{Category, Product, ProductQuery};
use crate::toast::Toast;

#[component]
pub fn ProductManagement() -> impl IntoView {
    let toaster = use_toaster();
    let products_api = store_value(use_api().products);
    let panel = create_rw_signal(CrudPanel::<Product>::new());
    let categories = create_rw_signal(Vec::<Category>::new());
    let form = create_rw_signal(ProductForm::default());

    create_effect(move |_| {
        let products = products_api.get_value();
        spawn_local(async move {
            let query = ProductQuery::default();
            let (category_list, result) =
                futures::join!(products.categories(), products.list(&query));
            match category_list {
                Ok(list) => {
                    categories.try_set(list);
                }
                Err(err) => warn!("[ADMIN] Failed to load categories: {}", err),
            }
            finish_load(panel, toaster, result);
        });
    });

    let open_add = move |_| {
        form.set(ProductForm::default());
        panel.update(|panel| {
            panel.open_add();
        });
    };

    let close = move || {
        panel.update(|panel| {
            panel.close();
        });
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match form.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                toaster.push(Toast::error("Validation Error").with_description(err.to_string()));
                return;
            }
        };
        let Some(submission) = begin_submit(panel) else {
            return;
        };
        let products = products_api.get_value();
        spawn_local(async move {
            let result = match &submission.target {
                Some(target) => products.update(&target.lookup_key(), &payload).await,
                None => products.create(&payload).await,
            };
            finish_save(panel, toaster, result);
        });
    };

    let confirm_delete = move || {
        let Some(submission) = begin_submit(panel) else {
            return;
        };
        let key = submission
            .target
            .as_ref()
            .map(Product::lookup_key)
            .unwrap_or_default();
        let products = products_api.get_value();
        spawn_local(async move {
            let result = products.delete(&key).await;
            finish_delete(panel, toaster, result);
        });
    };

    let category_name = move |product: &Product| -> String {
        if let Some(name) = product.category.as_ref().and_then(|category| category.name()) {
            return name.to_string();
        }
        let id = product.category_id();
        categories.with(|list| {
            list.iter()
                .find(|category| Some(category.id) == id)
                .map(|category| category.name.clone())
                .unwrap_or_else(|| "Uncategorized".to_string())
        })
    };

    let submitting = Signal::derive(move || panel.with(CrudPanel::is_submitting));
    let editing = move || panel.with(|panel| panel.is_open(DialogMode::Edit));

    view! {
        <section class="admin-panel">
            <header class="admin-panel-header">
                <h2>{ "Products" }</h2>
                <button class="btn-primary" on:click=open_add>{ "Add Product" }</button>
            </header>

            <Show
                when=move || !panel.with(CrudPanel::is_loading)
                fallback=|| view! { <p class="loading">{ "Loading products..." }</p> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{ "Name" }</th>
                            <th>{ "Category" }</th>
                            <th>{ "Price" }</th>
                            <th>{ "Featured" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || panel.with(CrudPanel::rows)
                            key=|row| row.key
                            children=move |Row { item: product, .. }| {
                                let for_edit = product.clone();
                                let for_delete = product.clone();
                                view! {
                                    <tr>
                                        <td>{ product.name.clone() }</td>
                                        <td>{ category_name(&product) }</td>
                                        <td>{ product.price.to_string() }</td>
                                        <td>{ if product.is_featured { "Yes" } else { "No" } }</td>
                                        <td class="actions">
                                            <button on:click=move |_| {
                                                form.set(ProductForm::from_product(&for_edit));
                                                panel.update(|panel| {
                                                    panel.open_edit(for_edit.clone());
                                                });
                                            }>{ "Edit" }</button>
                                            <button class="danger" on:click=move |_| {
                                                panel.update(|panel| {
                                                    panel.open_delete(for_delete.clone());
                                                });
                                            }>{ "Delete" }</button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show when=move || panel.with(|panel| panel.is_open(DialogMode::Add) || panel.is_open(DialogMode::Edit))>
                <Modal
                    title=if editing() { "Edit Product" } else { "Add Product" }
                    on_close=move |_| close()
                >
                    <form class="admin-form" on:submit=submit>
                        <Field
                            label="Name"
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=move |value| form.update(|f| f.name = value)
                        />
                        <TextAreaField
                            label="Description"
                            value=Signal::derive(move || form.with(|f| f.description.clone()))
                            on_input=move |value| form.update(|f| f.description = value)
                        />
                        <Field
                            label="Price"
                            placeholder="3.50"
                            value=Signal::derive(move || form.with(|f| f.price.clone()))
                            on_input=move |value| form.update(|f| f.price = value)
                        />
                        <Field
                            label="Image URL"
                            input_type="url"
                            value=Signal::derive(move || form.with(|f| f.image.clone()))
                            on_input=move |value| form.update(|f| f.image = value)
                        />
                        <label class="field">
                            <span class="field-label">{ "Category" }</span>
                            <select
                                prop:value=move || form.with(|f| f.category.clone())
                                on:change=move |e| form.update(|f| f.category = event_target_value(&e))
                            >
                                <option value="">{ "No category" }</option>
                                { move || categories.get().into_iter().map(|category| view! {
                                    <option value=category.id.to_string()>{ category.name }</option>
                                }).collect::<Vec<_>>() }
                            </select>
                        </label>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_featured)
                                on:change=move |e| form.update(|f| f.is_featured = event_target_checked(&e))
                            />
                            { "Featured" }
                        </label>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.is_available)
                                on:change=move |e| form.update(|f| f.is_available = event_target_checked(&e))
                            />
                            { "Available" }
                        </label>
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>{ "Cancel" }</button>
                            <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                                { move || if submitting.get() { "Saving..." } else { "Save" } }
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>

            <Show when=move || panel.with(|panel| panel.is_open(DialogMode::Delete))>
                <Modal title="Delete Product" on_close=move |_| close()>
                    <ConfirmDelete
                        message=panel.with_untracked(|panel| {
                            let name = panel.dialog().target().map(|p| p.name.clone()).unwrap_or_default();
                            format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", name)
                        })
                        submitting=submitting
                        on_confirm=move |_| confirm_delete()
                        on_cancel=move |_| close()
                    />
                </Modal>
            </Show>
        </section>
    }
}
