use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use spinner_shared::Masked;

use crate::CoreResult;

/// A user as asserted by the external identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: Option<Masked<String>>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Verifies bearer tokens issued by the identity provider. We never mint
/// tokens ourselves.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fails with `CoreError::IdentityError` for malformed, expired or
    /// foreign tokens.
    async fn verify(&self, token: &str) -> CoreResult<UserIdentity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_debug_hides_email() {
        let identity = UserIdentity {
            user_id: "user-1".into(),
            email: Some(Masked::new("ana@example.com".into())),
            display_name: Some("Ana".into()),
            avatar_url: None,
        };

        let debug = format!("{:?}", identity);
        assert!(!debug.contains("ana@example.com"));

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["email"], "ana@example.com");
    }
}
