//! Name validation logic.
//!
//! An empty name is how the registry marks an address as unregistered,
//! so registered names must carry at least one non-whitespace byte.
//! Names are capped at [`MAX_NAME_LENGTH`] bytes.

use soroban_sdk::String;

/// Maximum name length in bytes.
pub const MAX_NAME_LENGTH: u32 = 64;

/// Validate a user name.
///
/// Returns true if the name is 1-64 bytes long and not all ASCII whitespace.
pub fn validate_name(name: &String) -> bool {
    let len = name.len();
    if len == 0 || len > MAX_NAME_LENGTH {
        return false;
    }

    let mut buf = [0u8; MAX_NAME_LENGTH as usize];
    let buf = &mut buf[..len as usize];
    name.copy_into_slice(buf);

    buf.iter().any(|b| !b.is_ascii_whitespace())
}
