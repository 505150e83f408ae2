use crate::models::UserId;

/// `SecurityContext` carries the identity of the caller of a settings operation.
///
/// An anonymous context has no subject; every settings operation rejects it
/// with `SettingsError::Unauthenticated`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityContext {
    subject_id: Option<UserId>,
}

impl SecurityContext {
    /// Create a context with no authenticated subject.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a context for an authenticated user.
    #[must_use]
    pub fn for_subject(subject_id: UserId) -> Self {
        Self {
            subject_id: Some(subject_id),
        }
    }

    /// Get the authenticated subject, if any.
    #[must_use]
    pub fn subject_id(&self) -> Option<&UserId> {
        self.subject_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_context_has_no_subject() {
        let ctx = SecurityContext::anonymous();
        assert!(ctx.subject_id().is_none());
    }

    #[test]
    fn subject_context_exposes_user_id() {
        let user = UserId::parse("u1").unwrap();
        let ctx = SecurityContext::for_subject(user.clone());
        assert_eq!(ctx.subject_id(), Some(&user));
    }
}
