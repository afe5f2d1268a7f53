use leptos::Owner;

/// Runs `f` under `owner` if it is still alive.
///
/// Async completions capture the owner of the component that started them;
/// once that component is gone they are logged and skipped instead of
/// writing to disposed signals.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => leptos::try_with_owner(owner, f)
            .map_err(|err| {
                leptos::logging::log!("[OWNER] Skipping {}: {:?}", log_context, err);
            })
            .ok(),
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
            None
        }
    }
}
