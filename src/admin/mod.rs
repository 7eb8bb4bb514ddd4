//! Admin CRUD panels: one list plus one dialog per panel.
//! The dialog moves `Closed -> Open -> Submitting -> Closed`; a failed write
//! drops back to `Open` so the form can be retried.
pub mod forms;

use std::collections::HashMap;

use leptos::logging::{error, log, warn};

use crate::error::ApiError;
use crate::models::{BlogPost, Product, RegisteredUser, User};
use crate::toast::Toast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<T> {
    Closed,
    Open { mode: DialogMode, target: Option<T> },
    Submitting { mode: DialogMode, target: Option<T> },
}

impl<T> DialogState<T> {
    pub fn mode(&self) -> Option<DialogMode> {
        match self {
            DialogState::Closed => None,
            DialogState::Open { mode, .. } | DialogState::Submitting { mode, .. } => Some(*mode),
        }
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            DialogState::Closed => None,
            DialogState::Open { target, .. } | DialogState::Submitting { target, .. } => {
                target.as_ref()
            }
        }
    }
}

/// Where a newly created record lands in the local list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Append,
    Prepend,
}

pub struct PanelMessages {
    pub load_failed: &'static str,
    pub created: &'static str,
    pub create_failed: &'static str,
    pub updated: &'static str,
    pub update_failed: &'static str,
    pub deleted: &'static str,
    pub delete_failed: &'static str,
}

pub trait PanelRecord: Clone {
    fn record_id(&self) -> i64;

    fn placement() -> Placement {
        Placement::Append
    }

    fn messages() -> &'static PanelMessages;

    /// A more specific failure text than the panel default, if the error warrants one.
    fn describe_failure(_mode: DialogMode, _err: &ApiError) -> Option<String> {
        None
    }
}

static PRODUCT_MESSAGES: PanelMessages = PanelMessages {
    load_failed: "Failed to load products and categories",
    created: "Product added successfully",
    create_failed: "Failed to add product",
    updated: "Product updated successfully",
    update_failed: "Failed to update product",
    deleted: "Product deleted successfully",
    delete_failed: "Failed to delete product",
};

static BLOG_MESSAGES: PanelMessages = PanelMessages {
    load_failed: "Failed to load blog articles",
    created: "Article created successfully",
    create_failed: "Failed to create blog article",
    updated: "Article updated successfully",
    update_failed: "Failed to update blog article",
    deleted: "Article deleted successfully",
    delete_failed: "Failed to delete blog article",
};

static ADMIN_USER_MESSAGES: PanelMessages = PanelMessages {
    load_failed: "Failed to load admin users",
    created: "Admin user created successfully",
    create_failed: "Failed to add admin user",
    updated: "Admin user updated successfully",
    update_failed: "Failed to update admin user",
    deleted: "Admin user removed successfully",
    delete_failed: "Failed to delete admin user",
};

impl PanelRecord for Product {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn messages() -> &'static PanelMessages {
        &PRODUCT_MESSAGES
    }
}

impl PanelRecord for BlogPost {
    fn record_id(&self) -> i64 {
        self.id
    }

    // newest article first
    fn placement() -> Placement {
        Placement::Prepend
    }

    fn messages() -> &'static PanelMessages {
        &BLOG_MESSAGES
    }
}

impl PanelRecord for User {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn messages() -> &'static PanelMessages {
        &ADMIN_USER_MESSAGES
    }

    fn describe_failure(mode: DialogMode, err: &ApiError) -> Option<String> {
        match (mode, err) {
            (DialogMode::Add, ApiError::Validation { fields, .. }) if fields.contains_key("email") => {
                Some("This email is already registered as an admin user".to_string())
            }
            _ => None,
        }
    }
}

/// What a submit is acting on, handed to the caller that performs the request.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<T> {
    pub mode: DialogMode,
    pub target: Option<T>,
}

/// A list entry with a render key that changes whenever the entry is edited,
/// even when the backend leaves timestamps empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub key: (i64, u32),
    pub item: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrudPanel<T> {
    items: Vec<T>,
    loading: bool,
    dialog: DialogState<T>,
    edits: HashMap<i64, u32>,
}

impl<T: PanelRecord> Default for CrudPanel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PanelRecord> CrudPanel<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            dialog: DialogState::Closed,
            edits: HashMap::new(),
        }
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            loading: false,
            dialog: DialogState::Closed,
            edits: HashMap::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn rows(&self) -> Vec<Row<T>> {
        self.items
            .iter()
            .map(|item| {
                let id = item.record_id();
                Row {
                    key: (id, self.edits.get(&id).copied().unwrap_or(0)),
                    item: item.clone(),
                }
            })
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dialog(&self) -> &DialogState<T> {
        &self.dialog
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.dialog, DialogState::Submitting { .. })
    }

    pub fn is_open(&self, mode: DialogMode) -> bool {
        self.dialog.mode() == Some(mode)
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// A failed load keeps whatever was already listed.
    pub fn loaded(&mut self, result: Result<Vec<T>, ApiError>) -> Option<Toast> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(err) => {
                error!("[ADMIN] {}: {}", T::messages().load_failed, err);
                Some(Toast::error("Error").with_description(T::messages().load_failed))
            }
        }
    }

    fn open(&mut self, mode: DialogMode, target: Option<T>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.dialog = DialogState::Open { mode, target };
        true
    }

    pub fn open_add(&mut self) -> bool {
        self.open(DialogMode::Add, None)
    }

    pub fn open_edit(&mut self, item: T) -> bool {
        self.open(DialogMode::Edit, Some(item))
    }

    pub fn open_delete(&mut self, item: T) -> bool {
        self.open(DialogMode::Delete, Some(item))
    }

    /// Refused while a request is in flight.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.dialog = DialogState::Closed;
        true
    }

    /// Moves an open dialog to `Submitting`. `None` means there is nothing to submit
    /// or a submit is already running.
    pub fn begin_submit(&mut self) -> Option<Submission<T>> {
        match std::mem::replace(&mut self.dialog, DialogState::Closed) {
            DialogState::Open { mode, target } => {
                if mode != DialogMode::Add && target.is_none() {
                    warn!("[ADMIN] {:?} submitted without a target", mode);
                    self.dialog = DialogState::Open { mode, target };
                    return None;
                }
                self.dialog = DialogState::Submitting {
                    mode,
                    target: target.clone(),
                };
                Some(Submission { mode, target })
            }
            other => {
                self.dialog = other;
                None
            }
        }
    }

    fn take_submission(&mut self) -> Option<(DialogMode, Option<T>)> {
        match std::mem::replace(&mut self.dialog, DialogState::Closed) {
            DialogState::Submitting { mode, target } => Some((mode, target)),
            other => {
                warn!("[ADMIN] Result arrived with no submit in flight");
                self.dialog = other;
                None
            }
        }
    }

    fn failure(mode: DialogMode, err: &ApiError, fallback: &'static str) -> Toast {
        error!("[ADMIN] {}: {}", fallback, err);
        let description = T::describe_failure(mode, err).unwrap_or_else(|| fallback.to_string());
        Toast::error("Error").with_description(description)
    }

    /// Applies the result of a create or update.
    pub fn finish_save(&mut self, result: Result<T, ApiError>) -> Option<Toast> {
        let (mode, target) = self.take_submission()?;
        let messages = T::messages();
        let (ok_message, failed_message) = match mode {
            DialogMode::Edit => (messages.updated, messages.update_failed),
            _ => (messages.created, messages.create_failed),
        };

        match result {
            Ok(saved) => {
                match mode {
                    DialogMode::Edit => {
                        let id = target.as_ref().map(T::record_id).unwrap_or(saved.record_id());
                        *self.edits.entry(id).or_insert(0) += 1;
                        match self.items.iter_mut().find(|item| item.record_id() == id) {
                            Some(slot) => *slot = saved,
                            None => self.items.push(saved),
                        }
                    }
                    _ => match T::placement() {
                        Placement::Append => self.items.push(saved),
                        Placement::Prepend => self.items.insert(0, saved),
                    },
                }
                log!("[ADMIN] {}", ok_message);
                Some(Toast::success("Success").with_description(ok_message))
            }
            Err(err) => {
                let toast = Self::failure(mode, &err, failed_message);
                self.dialog = DialogState::Open { mode, target };
                Some(toast)
            }
        }
    }

    /// A create that succeeded but returned no usable record. Closes the dialog
    /// and marks the list for a reload instead of splicing.
    pub fn finish_save_needs_reload(&mut self) -> Option<Toast> {
        let (mode, _) = self.take_submission()?;
        let messages = T::messages();
        let ok_message = match mode {
            DialogMode::Edit => messages.updated,
            _ => messages.created,
        };
        self.loading = true;
        log!("[ADMIN] {}; reloading list", ok_message);
        Some(Toast::success("Success").with_description(ok_message))
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Option<Toast> {
        let (mode, target) = self.take_submission()?;
        let messages = T::messages();
        match result {
            Ok(()) => {
                if let Some(id) = target.as_ref().map(T::record_id) {
                    self.items.retain(|item| item.record_id() != id);
                }
                log!("[ADMIN] {}", messages.deleted);
                Some(Toast::success("Success").with_description(messages.deleted))
            }
            Err(err) => {
                let toast = Self::failure(mode, &err, messages.delete_failed);
                self.dialog = DialogState::Open { mode, target };
                Some(toast)
            }
        }
    }
}

/// The new account as a list row, or `None` when the backend left out its id.
pub fn registered_admin(registered: RegisteredUser) -> Option<User> {
    registered.id?;
    let mut user = User::from(registered);
    user.is_staff = true;
    Some(user)
}

/// Staff and superusers only.
pub fn admin_users(users: Vec<User>) -> Vec<User> {
    users
        .into_iter()
        .filter(|user| user.is_staff || user.is_superuser)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            slug: None,
            name: name.to_string(),
            description: String::new(),
            price: Price::from_cents(350),
            image: None,
            image_url: None,
            category: None,
            is_featured: false,
            is_available: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut panel: CrudPanel<Product> = CrudPanel::with_items(vec![]);
        assert!(panel.open_add());
        assert!(panel.begin_submit().is_some());
        assert!(panel.begin_submit().is_none());
        assert!(!panel.close());
        assert!(!panel.open_add());
    }

    #[test]
    fn failed_edit_reopens_with_same_target() {
        let mut panel = CrudPanel::with_items(vec![product(1, "Vanilla Delight")]);
        panel.open_edit(product(1, "Vanilla Delight"));
        panel.begin_submit();
        let toast = panel.finish_save(Err(ApiError::Network("offline".into())));
        assert_eq!(toast.and_then(|toast| toast.description), Some("Failed to update product".into()));
        assert_eq!(panel.dialog().mode(), Some(DialogMode::Edit));
        assert_eq!(panel.dialog().target().map(|p| p.id), Some(1));
        assert_eq!(panel.items()[0].name, "Vanilla Delight");
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut panel = CrudPanel::with_items(vec![product(1, "A"), product(2, "B")]);
        panel.open_edit(product(2, "B"));
        panel.begin_submit();
        panel.finish_save(Ok(product(2, "B2")));
        let names: Vec<_> = panel.items().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B2"]);
        assert_eq!(panel.dialog(), &DialogState::Closed);
    }

    #[test]
    fn delete_filters_by_id() {
        let mut panel = CrudPanel::with_items(vec![product(1, "A"), product(2, "B")]);
        panel.open_delete(product(1, "A"));
        panel.begin_submit();
        let toast = panel.finish_delete(Ok(()));
        assert!(toast.map(|toast| !toast.is_error()).unwrap_or(false));
        assert_eq!(panel.items().len(), 1);
        assert_eq!(panel.items()[0].id, 2);
    }

    #[test]
    fn result_without_submit_is_ignored() {
        let mut panel = CrudPanel::with_items(vec![product(1, "A")]);
        assert!(panel.finish_save(Ok(product(9, "Z"))).is_none());
        assert_eq!(panel.items().len(), 1);
    }

    #[test]
    fn record_less_create_closes_and_waits_for_reload() {
        let mut panel: CrudPanel<User> = CrudPanel::with_items(vec![]);
        panel.open_add();
        panel.begin_submit();
        let toast = panel.finish_save_needs_reload().unwrap();
        assert_eq!(toast.description.as_deref(), Some("Admin user created successfully"));
        assert!(panel.items().is_empty());
        assert!(panel.is_loading());
        assert_eq!(panel.dialog(), &DialogState::Closed);
        assert!(panel.finish_save_needs_reload().is_none());
    }

    #[test]
    fn registered_admin_needs_an_id() {
        let without_id = RegisteredUser {
            id: None,
            email: "new@cupcakery.test".into(),
            first_name: "Admin".into(),
            last_name: "User".into(),
        };
        assert!(registered_admin(without_id.clone()).is_none());
        let with_id = RegisteredUser {
            id: Some(7),
            ..without_id
        };
        let user = registered_admin(with_id).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.is_staff);
    }

    #[test]
    fn edited_row_gets_a_fresh_key() {
        let mut panel = CrudPanel::with_items(vec![product(1, "A"), product(2, "B")]);
        let before: Vec<_> = panel.rows().into_iter().map(|row| row.key).collect();
        assert_eq!(before, vec![(1, 0), (2, 0)]);

        panel.open_edit(product(2, "B"));
        panel.begin_submit();
        panel.finish_save(Ok(product(2, "B2")));

        let rows = panel.rows();
        assert_eq!(rows[0].key, (1, 0));
        assert_eq!(rows[1].key, (2, 1));
        assert_eq!(rows[1].item.name, "B2");
    }
}
