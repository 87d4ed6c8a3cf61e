//! # Soroban Dhub
//!
//! Per-account user and file metadata registry for the Soroban blockchain.
//!
//! Each address can register an identity (a name and a profile URL) and keep
//! an ordered list of file metadata records. Features include:
//!
//! - Identity registration and per-field editing
//! - File upload with per-owner, 1-based, monotonically assigned ids
//! - Positional file lookup and selective title/description edits
//! - A `file_uploaded` event for off-chain indexers
//! - Admin-controlled registration policy
//!
//! Every entry point acts only on the records of the authorizing `caller`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Register an identity
//! client.register(&name, &profile_url, &caller);
//!
//! // Upload and list files
//! let file = client.upload_file(&file, &caller);
//! let files = client.get_files_by_user(&caller);
//!
//! // Change only the title of the first file
//! client.edit_file(&0, &Some(new_title), &None, &caller);
//! ```

#![no_std]

mod config;
mod events;
mod file;
mod storage;
mod user;
mod validation;

pub use config::RegistryConfig;
pub use file::File;
pub use storage::DataKey;
pub use user::{field_names, User, UserField};
pub use validation::{validate_name, MAX_NAME_LENGTH};

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, Address, BytesN, Env, String,
    Symbol, Vec,
};

use crate::events::*;

/// Error codes for the registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not authorized for this operation.
    NotAuthorized = 3,
    /// Caller has no user record.
    NotRegistered = 4,
    /// Caller already has a user record and re-registration is disabled.
    AlreadyRegistered = 5,
    /// Position is outside the caller's file list.
    IndexOutOfRange = 6,
    /// Unknown user field name.
    InvalidField = 7,
    /// Name is empty, blank or too long.
    InvalidName = 8,
}

#[contract]
pub struct DhubContract;

#[contractimpl]
impl DhubContract {
    // ========== Initialization ==========

    /// Initialize the contract with an admin address.
    ///
    /// Only needed for administration; registry operations work on an
    /// uninitialized contract with the default policy.
    pub fn init(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::Config, &RegistryConfig::default_policy());

        log!(&env, "registry initialized", admin);
    }

    /// Get the admin address.
    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized))
    }

    /// Get the active registry policy.
    pub fn config(env: Env) -> RegistryConfig {
        storage::load_config(&env)
    }

    /// Replace the registry policy (admin only).
    pub fn set_config(env: Env, config: RegistryConfig, caller: Address) {
        Self::require_admin(&env, &caller);

        env.storage().instance().set(&DataKey::Config, &config);

        log!(
            &env,
            "registry config updated",
            config.require_registration,
            config.allow_reregister
        );
    }

    // ========== Users ==========

    /// Register the caller, or overwrite their existing record.
    ///
    /// # Arguments
    /// * `name` - Display name (1-64 bytes, not blank)
    /// * `profile_url` - Avatar or profile page URL
    /// * `caller` - Address being registered
    ///
    /// # Returns
    /// The stored user record
    ///
    /// # Panics
    /// - If the name is empty, blank or too long
    /// - If the caller is registered and re-registration is disabled
    pub fn register(env: Env, name: String, profile_url: String, caller: Address) -> User {
        caller.require_auth();

        if !validation::validate_name(&name) {
            panic_with_error!(&env, RegistryError::InvalidName);
        }

        let now = env.ledger().sequence() as u64;

        let user = match storage::load_user(&env, &caller) {
            Some(mut existing) => {
                if !storage::load_config(&env).allow_reregister {
                    panic_with_error!(&env, RegistryError::AlreadyRegistered);
                }
                existing.name = name;
                existing.profile_url = profile_url;
                existing.updated_at = now;
                existing
            }
            None => {
                storage::increment_user_count(&env);
                User::new(caller.clone(), name, profile_url, now)
            }
        };

        storage::save_user(&env, &user);

        log!(&env, "user registered", caller);

        user
    }

    /// Get the caller's user record.
    ///
    /// Unregistered callers get a record with an empty name and profile URL.
    pub fn login(env: Env, caller: Address) -> User {
        caller.require_auth();

        storage::load_user(&env, &caller).unwrap_or_else(|| User::unregistered(&env, caller))
    }

    /// Replace one field of the caller's user record.
    pub fn edit_user(env: Env, field: UserField, value: String, caller: Address) -> User {
        caller.require_auth();

        Self::edit_user_internal(&env, &caller, field, value)
    }

    /// Replace one field of the caller's user record, naming the field.
    ///
    /// Recognized names are `name`, `profileUrl` and `profile_url`.
    pub fn edit_user_field(env: Env, field: Symbol, value: String, caller: Address) -> User {
        caller.require_auth();

        let field = UserField::from_symbol(&env, &field)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::InvalidField));

        Self::edit_user_internal(&env, &caller, field, value)
    }

    /// Get the number of registered addresses.
    pub fn user_count(env: Env) -> u64 {
        storage::user_count(&env)
    }

    // ========== Files ==========

    /// Append a file to the caller's list.
    ///
    /// The `id` carried by `file` is ignored; the registry assigns the next
    /// id for the caller, starting at 1.
    ///
    /// # Panics
    /// - If registration is required and the caller is not registered
    pub fn upload_file(env: Env, file: File, caller: Address) -> File {
        caller.require_auth();

        let registered =
            storage::load_user(&env, &caller).is_some_and(|user| user.is_registered());
        if storage::load_config(&env).require_registration && !registered {
            panic_with_error!(&env, RegistryError::NotRegistered);
        }

        let id = storage::file_count(&env, &caller) + 1;
        let file = file.with_id(id);

        let position = storage::append_file(&env, &caller, &file);

        emit_file_uploaded(&env, &caller, &file);

        log!(&env, "file uploaded", caller, id, position);

        file
    }

    /// Get all of the caller's files in upload order.
    pub fn get_files_by_user(env: Env, caller: Address) -> Vec<File> {
        caller.require_auth();

        let mut files = Vec::new(&env);
        for position in 0..storage::file_count(&env, &caller) {
            files.push_back(Self::file_at(&env, &caller, position));
        }

        files
    }

    /// Get the caller's file at a 0-based position.
    pub fn get_file_by_position(env: Env, position: u32, caller: Address) -> File {
        caller.require_auth();

        Self::file_at(&env, &caller, position)
    }

    /// Edit the title and/or description of the caller's file at `position`.
    ///
    /// `None` leaves the corresponding field unchanged. The url, upload date,
    /// size and id are never modified.
    pub fn edit_file(
        env: Env,
        position: u32,
        new_title: Option<String>,
        new_description: Option<String>,
        caller: Address,
    ) -> File {
        caller.require_auth();

        let mut file = Self::file_at(&env, &caller, position);
        file.edit(new_title, new_description);

        storage::save_file(&env, &caller, position, &file);

        log!(&env, "file edited", caller, file.id);

        file
    }

    /// Get the number of files the caller has uploaded.
    pub fn file_count(env: Env, caller: Address) -> u32 {
        caller.require_auth();

        storage::file_count(&env, &caller)
    }

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized));

        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ========== Internal Helpers ==========

    fn require_admin(env: &Env, caller: &Address) {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized));

        if *caller != admin {
            panic_with_error!(env, RegistryError::NotAuthorized);
        }

        caller.require_auth();
    }

    fn edit_user_internal(env: &Env, caller: &Address, field: UserField, value: String) -> User {
        let mut user = storage::load_user(env, caller)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotRegistered));

        if field == UserField::Name && !validation::validate_name(&value) {
            panic_with_error!(env, RegistryError::InvalidName);
        }

        user.apply(field, value);
        user.updated_at = env.ledger().sequence() as u64;

        storage::save_user(env, &user);

        log!(env, "user edited", caller);

        user
    }

    fn file_at(env: &Env, owner: &Address, position: u32) -> File {
        if position >= storage::file_count(env, owner) {
            panic_with_error!(env, RegistryError::IndexOutOfRange);
        }

        storage::load_file(env, owner, position)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::IndexOutOfRange))
    }
}
