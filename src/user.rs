//! User record and editable user fields.

use soroban_sdk::{contracttype, Address, Env, String, Symbol};

/// Identity record stored for each registered address.
///
/// A record whose `name` is empty is the registry's notion of
/// "not registered"; `login` hands one back for unknown addresses.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    /// Address that owns this record.
    pub owner: Address,

    /// Display name.
    pub name: String,

    /// Avatar or profile page URL.
    pub profile_url: String,

    /// Ledger sequence of the first registration (0 if never registered).
    pub created_at: u64,

    /// Ledger sequence of the last write (0 if never registered).
    pub updated_at: u64,
}

impl User {
    /// Create a freshly registered user.
    pub fn new(owner: Address, name: String, profile_url: String, created_at: u64) -> Self {
        Self {
            owner,
            name,
            profile_url,
            created_at,
            updated_at: created_at,
        }
    }

    /// The zero-value record returned for addresses with no registration.
    pub fn unregistered(env: &Env, owner: Address) -> Self {
        Self {
            owner,
            name: String::from_str(env, ""),
            profile_url: String::from_str(env, ""),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Check whether this record represents a registered user.
    pub fn is_registered(&self) -> bool {
        self.name.len() > 0
    }

    /// Replace a single field.
    pub fn apply(&mut self, field: UserField, value: String) {
        match field {
            UserField::Name => self.name = value,
            UserField::ProfileUrl => self.profile_url = value,
        }
    }
}

/// User fields that can be edited after registration.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UserField {
    Name,
    ProfileUrl,
}

impl UserField {
    /// Resolve a field by its external name.
    ///
    /// Accepts `name`, `profileUrl` and `profile_url`.
    pub fn from_symbol(env: &Env, field: &Symbol) -> Option<Self> {
        if *field == Symbol::new(env, field_names::NAME) {
            Some(UserField::Name)
        } else if *field == Symbol::new(env, field_names::PROFILE_URL)
            || *field == Symbol::new(env, field_names::PROFILE_URL_SNAKE)
        {
            Some(UserField::ProfileUrl)
        } else {
            None
        }
    }
}

/// External names of the editable user fields.
pub mod field_names {
    pub const NAME: &str = "name";

    pub const PROFILE_URL: &str = "profileUrl";

    /// Snake-case alias of [`PROFILE_URL`].
    pub const PROFILE_URL_SNAKE: &str = "profile_url";
}
