use crate::domain::ports::Authenticator;
use async_trait::async_trait;

/// Grants access to anyone who presents the one configured secret.
///
/// This is a gate, not a credential system: there are no users, and the
/// secret is compared as plain text.
#[derive(Clone)]
pub struct SharedSecretAuthenticator {
    secret: String,
}

impl SharedSecretAuthenticator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

#[async_trait]
impl Authenticator for SharedSecretAuthenticator {
    async fn authenticate(&self, credential: &str) -> bool {
        !credential.is_empty() && credential == self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_secret() {
        let gate = SharedSecretAuthenticator::new("festival");
        assert!(gate.authenticate("festival").await);
        assert!(!gate.authenticate("Festival").await);
        assert!(!gate.authenticate("festival ").await);
        assert!(!gate.authenticate("").await);
    }

    #[tokio::test]
    async fn test_empty_secret_admits_nobody() {
        let gate = SharedSecretAuthenticator::new("");
        assert!(!gate.authenticate("").await);
    }
}
