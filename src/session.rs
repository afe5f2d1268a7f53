use leptos::*;

use crate::models::user::User;

/// Who is signed in, shared by the root component through the context.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<User>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
        }
    }

    pub fn user(&self) -> Signal<Option<User>> {
        self.user.into()
    }

    pub fn sign_in(&self, user: User) {
        logging::log!("[SESSION] Signed in as {}", user.email);
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        logging::log!("[SESSION] Signed out");
        self.user.set(None);
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_session() -> Session {
    let session = Session::new();
    provide_context(session);
    session
}

/// The session of the surrounding app, or a signed-out one when rendered
/// outside of it.
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| {
        logging::warn!("[SESSION] No session in context, using a signed-out one");
        Session::new()
    })
}
