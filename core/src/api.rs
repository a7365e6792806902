use crate::{Context, HeaderSet, Result, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Gateways only need one credential per process: an asymmetric key pair plus the key id
/// the gateway assigned to it at registration time. Providers return `Ok(None)` when
/// their source simply has nothing to offer so that they can be chained.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to compute the authentication headers.
///
/// Signing is pure CPU work: it never suspends and never touches the network.
/// Implementations must either return the complete header set or an error, never
/// a partially signed one.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Compute the authentication headers for the request.
    fn sign_request(&self, req: &SigningRequest, cred: &Self::Credential) -> Result<HeaderSet>;
}
