use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::*;

use super::{begin_submit, finish_delete, finish_load, finish_save, ConfirmDelete, Modal};
use crate::admin::forms::AdminUserForm;
use crate::admin::{admin_users, registered_admin, CrudPanel, DialogMode};
use crate::api::AuthApi;
use crate::components::form_field::Field;
use crate::context::{use_api, use_toaster};
use crate::error::ApiError;
use crate::models::User;
use crate::toast::Toast;

/// Staff accounts from `/auth/users/`; when that is unavailable, just the current admin.
async fn load_admins(auth: &AuthApi) -> Result<Vec<User>, ApiError> {
    match auth.users().await {
        Ok(users) => Ok(admin_users(users)),
        Err(err) => {
            warn!("[ADMIN] User listing unavailable, showing current profile: {}", err);
            auth.profile().await.map(|user| vec![user])
        }
    }
}

#[component]
pub fn AdminUserManagement() -> impl IntoView {
    let toaster = use_toaster();
    let auth_api = store_value(use_api().auth);
    let panel = create_rw_signal(CrudPanel::<User>::new());
    let form = create_rw_signal(AdminUserForm::default());

    create_effect(move |_| {
        let auth = auth_api.get_value();
        spawn_local(async move {
            let result = load_admins(&auth).await;
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
        let registration = match form.with_untracked(AdminUserForm::to_registration) {
            Ok(registration) => registration,
            Err(err) => {
                toaster.push(Toast::error("Validation Error").with_description(err.to_string()));
                return;
            }
        };
        if begin_submit(panel).is_none() {
            return;
        }
        let auth = auth_api.get_value();
        spawn_local(async move {
            let result = match auth.register(&registration).await {
                Ok(registered) => match registered_admin(registered) {
                    Some(user) => Ok(user),
                    None => {
                        warn!("[ADMIN] Registration returned no id; reloading admin users");
                        if let Some(Some(toast)) =
                            panel.try_update(CrudPanel::finish_save_needs_reload)
                        {
                            toaster.push(toast);
                        }
                        form.try_set(AdminUserForm::default());
                        let reloaded = load_admins(&auth).await;
                        finish_load(panel, toaster, reloaded);
                        return;
                    }
                },
                Err(err) => Err(err),
            };
            let created = result.is_ok();
            finish_save(panel, toaster, result);
            if created {
                form.try_set(AdminUserForm::default());
            }
        });
    };

    let confirm_delete = move || {
        let Some(submission) = begin_submit(panel) else {
            return;
        };
        let id = submission.target.as_ref().map(|user| user.id).unwrap_or_default();
        let auth = auth_api.get_value();
        spawn_local(async move {
            let result = auth.delete_user(id).await;
            finish_delete(panel, toaster, result);
        });
    };

    let submitting = Signal::derive(move || panel.with(CrudPanel::is_submitting));

    view! {
        <section class="admin-panel">
            <header class="admin-panel-header">
                <h2>{ "Admin Users" }</h2>
                <button class="btn-primary" on:click=move |_| {
                    form.set(AdminUserForm::default());
                    panel.update(|panel| {
                        panel.open_add();
                    });
                }>{ "Add Admin User" }</button>
            </header>

            <Show
                when=move || !panel.with(CrudPanel::is_loading)
                fallback=|| view! { <p class="loading">{ "Loading admin users..." }</p> }
            >
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{ "Email" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "Role" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || panel.with(|panel| panel.items().to_vec())
                            key=|user| user.id
                            children=move |user| {
                                let for_delete = user.clone();
                                view! {
                                    <tr>
                                        <td>{ user.email.clone() }</td>
                                        <td>{ user.full_name() }</td>
                                        <td>{ user.role_label() }</td>
                                        <td class="actions">
                                            <button class="danger" on:click=move |_| {
                                                panel.update(|panel| {
                                                    panel.open_delete(for_delete.clone());
                                                });
                                            }>{ "Remove" }</button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show when=move || panel.with(|panel| panel.is_open(DialogMode::Add))>
                <Modal title="Add Admin User" on_close=move |_| close()>
                    <form class="admin-form" on:submit=submit>
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
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| close()>{ "Cancel" }</button>
                            <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                                { move || if submitting.get() { "Creating..." } else { "Create" } }
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>

            <Show when=move || panel.with(|panel| panel.is_open(DialogMode::Delete))>
                <Modal title="Remove Admin User" on_close=move |_| close()>
                    <ConfirmDelete
                        message=panel.with_untracked(|panel| {
                            let email = panel.dialog().target().map(|user| user.email.clone()).unwrap_or_default();
                            format!("Remove admin access for {}?", email)
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
