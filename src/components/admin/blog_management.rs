use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::*;

use super::{begin_submit, finish_delete, finish_load, finish_save, ConfirmDelete, Modal};
use crate::admin::forms::BlogForm;
use crate::admin::{CrudPanel, DialogMode, Row};
use crate::components::form_field::{Field, TextAreaField};
use crate::context::{use_api, use_toaster};
use crate::models::BlogPost;
use crate::toast::Toast;

#[component]
pub fn BlogManagement() -> impl IntoView {
    let toaster = use_toaster();
    let blog_api = store_value(use_api().blog);
    let panel = create_rw_signal(CrudPanel::<BlogPost>::new());
    let form = create_rw_signal(BlogForm::default());

    create_effect(move |_| {
        let blog = blog_api.get_value();
        spawn_local(async move {
            let result = blog.list().await;
            finish_load(panel, toaster, result);
        });
    });

    let close = move || {
        panel.update(|panel| {
            panel.close();
        });
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let editing = panel.with_untracked(|panel| panel.is_open(DialogMode::Edit));
        let checked = form.with_untracked(|form| {
            if editing {
                form.to_update_payload()
            } else {
                form.to_create_payload(Utc::now())
            }
        });
        let payload = match checked {
            Ok(payload) => payload,
            Err(err) => {
                toaster.push(Toast::error("Validation Error").with_description(err.to_string()));
                return;
            }
        };
        let Some(submission) = begin_submit(panel) else {
            return;
        };
        let blog = blog_api.get_value();
        spawn_local(async move {
            let result = match &submission.target {
                Some(target) => blog.update(&target.lookup_key(), &payload).await,
                None => blog.create(&payload).await,
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
            .map(BlogPost::lookup_key)
            .unwrap_or_default();
        let blog = blog_api.get_value();
        spawn_local(async move {
            let result = blog.delete(&key).await;
            finish_delete(panel, toaster, result);
        });
    };

    let submitting = Signal::derive(move || panel.with(CrudPanel::is_submitting));

    view! {
        <section class="admin-panel">
            <header class="admin-panel-header">
                <h2>{ "Blog Articles" }</h2>
                <button class="btn-primary" on:click=move |_| {
                    form.set(BlogForm::default());
                    panel.update(|panel| {
                        panel.open_add();
                    });
                }>{ "New Article" }</button>
            </header>

            <Show
                when=move || !panel.with(CrudPanel::is_loading)
                fallback=|| view! { <p class="loading">{ "Loading articles..." }</p> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{ "Title" }</th>
                            <th>{ "Author" }</th>
                            <th>{ "Published" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || panel.with(CrudPanel::rows)
                            key=|row| row.key
                            children=move |Row { item: post, .. }| {
                                let for_edit = post.clone();
                                let for_delete = post.clone();
                                view! {
                                    <tr>
                                        <td>{ post.title.clone() }</td>
                                        <td>{ post.author_name() }</td>
                                        <td>{ post.published_label() }</td>
                                        <td class="actions">
                                            <button on:click=move |_| {
                                                form.set(BlogForm::from_post(&for_edit));
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
                    title=if panel.with_untracked(|panel| panel.is_open(DialogMode::Edit)) { "Edit Article" } else { "New Article" }
                    on_close=move |_| close()
                >
                    <form class="admin-form" on:submit=submit>
                        <Field
                            label="Title"
                            value=Signal::derive(move || form.with(|f| f.title.clone()))
                            on_input=move |value| form.update(|f| f.title = value)
                        />
                        <TextAreaField
                            label="Excerpt"
                            rows=2
                            value=Signal::derive(move || form.with(|f| f.excerpt.clone()))
                            on_input=move |value| form.update(|f| f.excerpt = value)
                        />
                        <TextAreaField
                            label="Content"
                            rows=10
                            value=Signal::derive(move || form.with(|f| f.content.clone()))
                            on_input=move |value| form.update(|f| f.content = value)
                        />
                        <Field
                            label="Image URL"
                            input_type="url"
                            value=Signal::derive(move || form.with(|f| f.image.clone()))
                            on_input=move |value| form.update(|f| f.image = value)
                        />
                        <Field
                            label="Author"
                            value=Signal::derive(move || form.with(|f| f.author.clone()))
                            on_input=move |value| form.update(|f| f.author = value)
                        />
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
                <Modal title="Delete Article" on_close=move |_| close()>
                    <ConfirmDelete
                        message=panel.with_untracked(|panel| {
                            let title = panel.dialog().target().map(|post| post.title.clone()).unwrap_or_default();
                            format!("Are you sure you want to delete \"{}\"?", title)
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
