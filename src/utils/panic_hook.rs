use std::panic;

use leptos::logging::{error, log};

/// Chains onto the existing hook and adds context for reactive-owner panics,
/// which in this app almost always mean a request finished after its page unmounted.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            error!("[PANIC] Reactive owner already disposed: {}", message);
            log!("[PANIC] A signal was touched after its component unmounted.");
            log!("[PANIC] Updates made after an await should go through try_update/try_set.");
        }
    }));
}

pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
