use std::cell::RefCell;

use foodiecircle::auth::IdentityProvider;
use foodiecircle::error::AppError;
use foodiecircle::models::SessionUser;
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

/// In-memory identity provider. `restore` resolves after `restore_delay_ms`
/// so tests can observe the loading state.
pub struct MockIdentity {
    pub session: RefCell<Option<SessionUser>>,
    pub restore_delay_ms: u32,
}

impl MockIdentity {
    pub fn signed_in(email: &str) -> Self {
        Self {
            session: RefCell::new(Some(mock_user(email))),
            restore_delay_ms: 0,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: RefCell::new(None),
            restore_delay_ms: 0,
        }
    }
}

pub fn mock_user(email: &str) -> SessionUser {
    SessionUser {
        uid: "mock-uid".to_string(),
        display_name: Some("Mock Foodie".to_string()),
        email: email.to_string(),
        photo_url: None,
    }
}

impl IdentityProvider for MockIdentity {
    fn sign_up(&self, email: String, _password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
        async move {
            let user = mock_user(&email);
            *self.session.borrow_mut() = Some(user.clone());
            Ok(user)
        }
        .boxed_local()
    }

    fn sign_in(&self, email: String, _password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
        self.sign_up(email, String::new())
    }

    fn update_profile(
        &self,
        display_name: String,
        photo_url: String,
    ) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
        async move {
            let mut session = self.session.borrow_mut();
            let user = session.as_mut().ok_or(AppError::NotSignedIn)?;
            user.display_name = Some(display_name);
            user.photo_url = Some(photo_url);
            Ok::<_, AppError>(user.clone())
        }
        .boxed_local()
    }

    fn sign_out(&self) -> LocalBoxFuture<'_, Result<(), AppError>> {
        async move {
            *self.session.borrow_mut() = None;
            Ok(())
        }
        .boxed_local()
    }

    fn restore(&self) -> LocalBoxFuture<'_, Result<Option<SessionUser>, AppError>> {
        async move {
            if self.restore_delay_ms > 0 {
                TimeoutFuture::new(self.restore_delay_ms).await;
            }
            Ok(self.session.borrow().clone())
        }
        .boxed_local()
    }
}
