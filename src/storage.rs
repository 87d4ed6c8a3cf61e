//! Storage keys and typed accessors for the registry.

use soroban_sdk::{contracttype, Address, Env};

use crate::config::RegistryConfig;
use crate::file::File;
use crate::user::User;

/// Storage keys for the registry contract.
///
/// Per-address entries live in persistent storage; contract-wide
/// settings and counters live in instance storage.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Contract administrator address.
    Admin,

    /// Registry policy ([`RegistryConfig`]).
    Config,

    /// Number of distinct registered addresses.
    UserCount,

    /// Maps Address to User.
    User(Address),

    /// Number of files uploaded by an address.
    FileCount(Address),

    /// Maps (Address, position) to File.
    File(Address, u32),
}

/// Time-to-live for registry data in ledger entries.
pub const RECORD_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 2592000; // ~150 days

fn extend(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

pub fn load_config(env: &Env) -> RegistryConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(RegistryConfig::default_policy)
}

pub fn load_user(env: &Env, owner: &Address) -> Option<User> {
    env.storage()
        .persistent()
        .get(&DataKey::User(owner.clone()))
}

pub fn save_user(env: &Env, user: &User) {
    let key = DataKey::User(user.owner.clone());
    env.storage().persistent().set(&key, user);
    extend(env, &key);
}

pub fn user_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::UserCount)
        .unwrap_or(0)
}

pub fn increment_user_count(env: &Env) {
    let count = user_count(env);
    env.storage()
        .instance()
        .set(&DataKey::UserCount, &(count + 1));
}

pub fn file_count(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::FileCount(owner.clone()))
        .unwrap_or(0)
}

pub fn load_file(env: &Env, owner: &Address, position: u32) -> Option<File> {
    env.storage()
        .persistent()
        .get(&DataKey::File(owner.clone(), position))
}

pub fn save_file(env: &Env, owner: &Address, position: u32, file: &File) {
    let key = DataKey::File(owner.clone(), position);
    env.storage().persistent().set(&key, file);
    extend(env, &key);
}

/// Append `file` to the end of `owner`'s list and return its position.
pub fn append_file(env: &Env, owner: &Address, file: &File) -> u32 {
    let position = file_count(env, owner);
    save_file(env, owner, position, file);

    let count_key = DataKey::FileCount(owner.clone());
    env.storage().persistent().set(&count_key, &(position + 1));
    extend(env, &count_key);

    position
}
