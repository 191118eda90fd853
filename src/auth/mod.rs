//! Session handling. The identity provider owns accounts and tokens; this
//! module only mirrors the current user into signals the views can read.

pub mod firebase;

use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::logging::{error, log};
use leptos::*;

use crate::error::AppError;
use crate::models::SessionUser;

pub use firebase::FirebaseIdentity;

pub trait IdentityProvider {
    fn sign_up(&self, email: String, password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>>;

    fn sign_in(&self, email: String, password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>>;

    /// Sets display name and photo of the signed-in account.
    fn update_profile(
        &self,
        display_name: String,
        photo_url: String,
    ) -> LocalBoxFuture<'_, Result<SessionUser, AppError>>;

    fn sign_out(&self) -> LocalBoxFuture<'_, Result<(), AppError>>;

    /// Loads a previously persisted session, if any is still valid.
    fn restore(&self) -> LocalBoxFuture<'_, Result<Option<SessionUser>, AppError>>;
}

#[derive(Clone)]
pub struct AuthContext {
    user: RwSignal<Option<SessionUser>>,
    loading: RwSignal<bool>,
    provider: Rc<dyn IdentityProvider>,
}

impl AuthContext {
    /// Starts in the loading state until [`AuthContext::observe`] resolves.
    pub fn new(provider: Rc<dyn IdentityProvider>) -> Self {
        Self {
            user: create_rw_signal(None),
            loading: create_rw_signal(true),
            provider,
        }
    }

    pub fn user(&self) -> Signal<Option<SessionUser>> {
        self.user.into()
    }

    pub fn loading(&self) -> Signal<bool> {
        self.loading.into()
    }

    pub fn email(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.email.clone()))
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub async fn observe(&self) {
        let user = match self.provider.restore().await {
            Ok(user) => {
                log!("[AUTH] session restored: {}", user.is_some());
                user
            }
            Err(err) => {
                error!("[AUTH] could not restore session: {}", err);
                None
            }
        };
        batch(|| {
            self.user.set(user);
            self.loading.set(false);
        });
    }

    pub async fn create_user(&self, email: String, password: String) -> Result<SessionUser, AppError> {
        self.track(self.provider.sign_up(email, password), |user| Some(user.clone()))
            .await
    }

    pub async fn sign_in(&self, email: String, password: String) -> Result<SessionUser, AppError> {
        self.track(self.provider.sign_in(email, password), |user| Some(user.clone()))
            .await
    }

    pub async fn update_user_profile(&self, display_name: String, photo_url: String) -> Result<(), AppError> {
        if !self.user.with_untracked(Option::is_some) {
            return Err(AppError::NotSignedIn);
        }
        let user = self.provider.update_profile(display_name, photo_url).await?;
        self.user.set(Some(user));
        Ok(())
    }

    pub async fn log_out(&self) -> Result<(), AppError> {
        self.track(self.provider.sign_out(), |_| None).await
    }

    /// Holds `loading` for the duration of `op`. On success the new user is
    /// published in the same batch that clears `loading`, so no observer sees
    /// the old user once loading ends.
    async fn track<T>(
        &self,
        op: impl Future<Output = Result<T, AppError>>,
        signed_in_as: impl FnOnce(&T) -> Option<SessionUser>,
    ) -> Result<T, AppError> {
        self.loading.set(true);
        let result = op.await;
        batch(|| {
            if let Ok(value) = &result {
                self.user.set(signed_in_as(value));
            }
            self.loading.set(false);
        });
        if let Err(err) = &result {
            error!("[AUTH] {}", err);
        }
        result
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{guard_decision, GuardDecision};
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeProvider {
        stored: RefCell<Option<SessionUser>>,
        password: &'static str,
    }

    fn user(email: &str) -> SessionUser {
        SessionUser {
            uid: "uid-1".into(),
            display_name: None,
            email: email.into(),
            photo_url: None,
        }
    }

    impl IdentityProvider for FakeProvider {
        fn sign_up(&self, email: String, _password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
            async move {
                let user = user(&email);
                *self.stored.borrow_mut() = Some(user.clone());
                Ok(user)
            }
            .boxed_local()
        }

        fn sign_in(&self, email: String, password: String) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
            async move {
                if password == self.password {
                    Ok(user(&email))
                } else {
                    Err(AppError::Auth("Incorrect email or password.".into()))
                }
            }
            .boxed_local()
        }

        fn update_profile(
            &self,
            display_name: String,
            photo_url: String,
        ) -> LocalBoxFuture<'_, Result<SessionUser, AppError>> {
            async move {
                let mut stored = self.stored.borrow_mut();
                let user = stored.as_mut().ok_or(AppError::NotSignedIn)?;
                user.display_name = Some(display_name);
                user.photo_url = Some(photo_url);
                Ok::<_, AppError>(user.clone())
            }
            .boxed_local()
        }

        fn sign_out(&self) -> LocalBoxFuture<'_, Result<(), AppError>> {
            async move {
                *self.stored.borrow_mut() = None;
                Ok(())
            }
            .boxed_local()
        }

        fn restore(&self) -> LocalBoxFuture<'_, Result<Option<SessionUser>, AppError>> {
            async move { Ok(self.stored.borrow().clone()) }.boxed_local()
        }
    }

    #[test]
    fn observe_ends_loading_with_restored_user() {
        let runtime = create_runtime();
        let provider = FakeProvider {
            stored: RefCell::new(Some(user("saved@example.com"))),
            password: "Secret1",
        };
        let auth = AuthContext::new(Rc::new(provider));
        assert!(auth.loading().get_untracked());

        block_on(auth.observe());
        assert!(!auth.loading().get_untracked());
        assert_eq!(auth.email().as_deref(), Some("saved@example.com"));
        runtime.dispose();
    }

    #[test]
    fn observe_without_session_leaves_user_empty() {
        let runtime = create_runtime();
        let auth = AuthContext::new(Rc::new(FakeProvider::default()));
        block_on(auth.observe());
        assert!(!auth.loading().get_untracked());
        assert!(!auth.is_signed_in());
        runtime.dispose();
    }

    #[test]
    fn failed_sign_in_resets_loading() {
        let runtime = create_runtime();
        let auth = AuthContext::new(Rc::new(FakeProvider { password: "Secret1", ..Default::default() }));
        block_on(auth.observe());

        let result = block_on(auth.sign_in("a@example.com".into(), "wrong".into()));
        assert_eq!(result, Err(AppError::Auth("Incorrect email or password.".into())));
        assert!(!auth.loading().get_untracked());
        assert!(!auth.is_signed_in());

        block_on(auth.sign_in("a@example.com".into(), "Secret1".into())).unwrap();
        assert!(auth.is_signed_in());
        runtime.dispose();
    }

    #[test]
    fn register_flow_sets_profile_and_log_out_clears() {
        let runtime = create_runtime();
        let auth = AuthContext::new(Rc::new(FakeProvider::default()));
        block_on(auth.observe());

        assert_eq!(
            block_on(auth.update_user_profile("Rumi".into(), "https://img.test/r.png".into())),
            Err(AppError::NotSignedIn)
        );

        block_on(auth.create_user("rumi@example.com".into(), "Foodie1".into())).unwrap();
        block_on(auth.update_user_profile("Rumi".into(), "https://img.test/r.png".into())).unwrap();
        let current = auth.user().get_untracked().unwrap();
        assert_eq!(current.display_name.as_deref(), Some("Rumi"));

        block_on(auth.log_out()).unwrap();
        assert!(!auth.is_signed_in());
        assert!(!auth.loading().get_untracked());
        runtime.dispose();
    }

    #[test]
    fn guard_never_allows_between_log_out_and_redirect() {
        let runtime = create_runtime();
        let auth = AuthContext::new(Rc::new(FakeProvider { password: "Secret1", ..Default::default() }));
        block_on(auth.observe());
        block_on(auth.sign_in("a@example.com".into(), "Secret1".into())).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let auth = auth.clone();
            let seen = seen.clone();
            create_isomorphic_effect(move |_| {
                let decision = guard_decision(auth.loading().get(), auth.is_signed_in(), "/my-reviews");
                seen.borrow_mut().push(decision);
            });
        }

        block_on(auth.log_out()).unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![
                GuardDecision::Allow,
                GuardDecision::Wait,
                GuardDecision::Redirect("/login?from=%2Fmy-reviews".into()),
            ]
        );
        runtime.dispose();
    }

    #[test]
    fn sign_in_publishes_user_when_loading_ends() {
        let runtime = create_runtime();
        let auth = AuthContext::new(Rc::new(FakeProvider { password: "Secret1", ..Default::default() }));
        block_on(auth.observe());

        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let auth = auth.clone();
            let seen = seen.clone();
            create_isomorphic_effect(move |_| {
                seen.borrow_mut().push((auth.loading().get(), auth.is_signed_in()));
            });
        }

        block_on(auth.sign_in("a@example.com".into(), "Secret1".into())).unwrap();
        assert_eq!(*seen.borrow(), vec![(false, false), (true, false), (false, true)]);
        runtime.dispose();
    }
}
