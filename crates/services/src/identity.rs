use quiz_core::model::UserId;

/// Capability exposed by the identity provider.
///
/// The attempt route requires the path's user identifier to match the
/// current user; everything else about authentication stays behind
/// this seam.
pub trait Identity: Send + Sync {
    /// The signed-in user, if any.
    fn current_user_id(&self) -> Option<UserId>;

    fn is_authenticated(&self) -> bool {
        self.current_user_id().is_some()
    }
}

/// Fixed identity for the desktop shell, taken from configuration.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    user_id: Option<UserId>,
}

impl StaticIdentity {
    #[must_use]
    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { user_id: None }
    }
}

impl Identity for StaticIdentity {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}
