//! App-wide context: the API handle, the signed-in user and the toast queue.
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::catalog::Catalog;
use crate::error::ApiError;
use crate::models::{Registration, User, UserPatch};
use crate::session::Session;
use crate::toast::Toast;

#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME_MS: u32 = 5_000;

pub fn provide_api(api: Api) {
    provide_context(api);
}

pub fn use_api() -> Api {
    expect_context::<Api>()
}

pub fn use_catalog() -> Catalog {
    Catalog::new(&use_api())
}

/// Reactive view over [`Session`]. Copy so it can move into any handler.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Session>,
    pub user: RwSignal<Option<User>>,
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .with(|user| user.as_ref().map(|user| user.is_superuser).unwrap_or(false))
    }

    fn sync(&self, session: &Session) {
        self.user.try_set(session.user());
    }

    pub async fn login(self, email: String, password: String) -> Result<User, ApiError> {
        let session = self.session();
        let result = session.login(&email, &password).await;
        self.sync(&session);
        result
    }

    pub async fn register(self, registration: Registration) -> Result<User, ApiError> {
        let session = self.session();
        let result = session.register(&registration).await;
        self.sync(&session);
        result
    }

    pub fn logout(&self) {
        let session = self.session();
        session.logout();
        self.sync(&session);
    }

    pub fn update_user(&self, patch: &UserPatch) {
        let session = self.session();
        session.update_user(patch);
        self.sync(&session);
    }
}

/// Creates the session, mirrors 401s into the user signal and restores a stored
/// token once the app is running in the browser.
pub fn provide_auth(api: &Api) -> AuthContext {
    let session = Session::new(api.auth.clone());
    let user = create_rw_signal(session.user());
    let loading = create_rw_signal(true);

    api.client.add_unauthorized_hook(move || {
        user.try_set(None);
    });

    let auth = AuthContext {
        session: store_value(session),
        user,
        loading,
    };
    provide_context(auth);

    // effects never run during SSR, so storage is only read in the browser
    create_effect(move |_| {
        let session = auth.session();
        spawn_local(async move {
            let restored = session.restore().await;
            if let Some(user) = &restored {
                log!("[SESSION] Welcome back {}", user.email);
            }
            auth.user.try_set(restored);
            auth.loading.try_set(false);
        });
    });

    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn entries(&self) -> Vec<ToastEntry> {
        self.entries.get()
    }

    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.entries.try_update(|entries| entries.push(ToastEntry { id, toast }));
        self.expire(id);
    }

    pub fn dismiss(&self, id: u64) {
        self.entries
            .try_update(|entries| entries.retain(|entry| entry.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn expire(&self, id: u64) {
        let toaster = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toaster.dismiss(id);
        });
    }

    // no timers on the server; SSR toasts never outlive the render
    #[cfg(not(target_arch = "wasm32"))]
    fn expire(&self, _id: u64) {}
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        entries: create_rw_signal(Vec::new()),
        next_id: store_value(0),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}
