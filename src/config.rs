//! Runtime registry policy.

use soroban_sdk::contracttype;

/// Policy switches for the registry, kept in instance storage.
///
/// Registry operations work without `init`; they then use
/// [`RegistryConfig::default_policy`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Uploads from addresses without a user record fail with `NotRegistered`.
    pub require_registration: bool,

    /// `register` on an existing record overwrites it instead of failing
    /// with `AlreadyRegistered`.
    pub allow_reregister: bool,
}

impl RegistryConfig {
    pub fn default_policy() -> Self {
        Self {
            require_registration: true,
            allow_reregister: true,
        }
    }
}
