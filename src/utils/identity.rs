//! Pseudo-identities derived from client addresses.
//!
//! An identity is a name-based UUID (version 3, MD5) of the client address,
//! namespaced by the deployment's public host. It keeps raw addresses out of
//! the generator input while staying stable per address.
//!
//! MD5 name-based UUIDs can be reversed by enumerating the address space, so
//! this is not an anonymisation scheme.

use uuid::Uuid;

/// Derives stable identities for one deployment.
#[derive(Debug, Clone)]
pub struct IdentityDeriver {
    namespace: Uuid,
}

impl IdentityDeriver {
    /// Builds a deriver whose namespace is the v3 UUID of `public_host` in the
    /// DNS namespace.
    pub fn new(public_host: &str) -> Self {
        Self {
            namespace: Uuid::new_v3(&Uuid::NAMESPACE_DNS, public_host.as_bytes()),
        }
    }

    /// Returns the hyphenated lowercase identity for `client_address`.
    pub fn derive(&self, client_address: &str) -> String {
        Uuid::new_v3(&self.namespace, client_address.as_bytes())
            .hyphenated()
            .to_string()
    }
}
