use std::panic;
use leptos::logging::log;

/// Installs `console_error_panic_hook` and adds a hint for owner disposal
/// panics, which usually mean an async completion outlived its page.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
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

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. This usually happens when:");
            log!("[PANIC] 1. A listings fetch finished after its page was left");
            log!("[PANIC] 2. A menu listener fired after the navigation bar was unmounted");
        }
    }));
}

/// Call once when the client bundle starts.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
