//! Authorization guard
//!
//! Resolves a session to a user and requires the `admin` role. Runs before
//! any other collaborator call of a request.
//!
//! A failed role lookup and a missing role produce the same
//! [`GuardError::PermissionDenied`]; only the internal log tells them apart.

use backoffice_core::effects::{IdentityEffects, SessionEffects};
use backoffice_core::{RoleName, SessionId, UserId};
use tracing::{error, warn, Span};

use crate::errors::GuardError;

/// Administrator who passed the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedUser {
    pub user_id: UserId,
    pub session_id: SessionId,
}

/// Authorize `session_id` as an administrator.
///
/// Records `session_id` and `user_id` on the current span when that span
/// declares those fields.
pub async fn authorize<E>(effects: &E, session_id: &SessionId) -> Result<AuthorizedUser, GuardError>
where
    E: SessionEffects + IdentityEffects + ?Sized,
{
    let span = Span::current();
    span.record("session_id", tracing::field::display(session_id));

    if session_id.is_empty() {
        warn!("Missing session cookie");
        return Err(GuardError::InvalidSession);
    }

    let user_id = match effects.resolve_user(session_id).await {
        Ok(user_id) if user_id.is_valid() => user_id,
        Ok(_) => {
            warn!("Session does not resolve to a user");
            return Err(GuardError::InvalidSession);
        }
        Err(err) => {
            warn!(error = %err, "Session resolution failed");
            return Err(GuardError::InvalidSession);
        }
    };
    span.record("user_id", user_id.0);

    let role = RoleName::admin();
    match effects.has_role(user_id, &role).await {
        Ok(true) => Ok(AuthorizedUser {
            user_id,
            session_id: session_id.clone(),
        }),
        Ok(false) => {
            error!(role = %role, "User is not Admin");
            Err(GuardError::PermissionDenied)
        }
        Err(err) => {
            error!(role = %role, error = %err, "UserHasRole failed");
            Err(GuardError::PermissionDenied)
        }
    }
}
