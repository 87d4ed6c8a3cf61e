//! Event emission helpers for the registry contract.

use soroban_sdk::{Address, Env, Symbol};

use crate::file::File;

/// Emit an event when a file is uploaded.
///
/// Topics: `("file_uploaded", owner)`. Data: `(id, file)`.
pub fn emit_file_uploaded(env: &Env, owner: &Address, file: &File) {
    let topics = (Symbol::new(env, "file_uploaded"), owner.clone());
    env.events().publish(topics, (file.id, file.clone()));
}
