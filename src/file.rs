//! File metadata records.

use soroban_sdk::{contracttype, String};

/// Metadata for a single uploaded file.
///
/// Files live in an ordered per-owner list. `id` is assigned by the
/// registry on upload and is distinct from the file's position in the
/// list.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct File {
    /// 1-based id, unique within the owner's list. Ignored on upload.
    pub id: u32,

    /// Location of the file content.
    pub url: String,

    pub title: String,

    pub description: String,

    /// Upload date as supplied by the uploader. Immutable.
    pub upload_date: String,

    /// Size in bytes. Immutable.
    pub size: u64,
}

impl File {
    /// Return a copy of this file carrying the registry-assigned id.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Apply a selective edit. `None` leaves the field untouched.
    pub fn edit(&mut self, title: Option<String>, description: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    fn sample(env: &Env) -> File {
        File {
            id: 99,
            url: String::from_str(env, "someurl"),
            title: String::from_str(env, "Pic"),
            description: String::from_str(env, "desc"),
            upload_date: String::from_str(env, "2026-10-18"),
            size: 1000,
        }
    }

    #[test]
    fn test_with_id_overrides_caller_id() {
        let env = Env::default();
        let file = sample(&env).with_id(1);
        assert_eq!(file.id, 1);
        assert_eq!(file.title, String::from_str(&env, "Pic"));
    }

    #[test]
    fn test_edit_title_only() {
        let env = Env::default();
        let mut file = sample(&env);

        file.edit(Some(String::from_str(&env, "New title")), None);

        assert_eq!(file.title, String::from_str(&env, "New title"));
        assert_eq!(file.description, String::from_str(&env, "desc"));
        assert_eq!(file.url, String::from_str(&env, "someurl"));
        assert_eq!(file.size, 1000);
    }

    #[test]
    fn test_edit_nothing() {
        let env = Env::default();
        let mut file = sample(&env);
        file.edit(None, None);
        assert_eq!(file, sample(&env));
    }

    #[test]
    fn test_edit_can_clear_description() {
        let env = Env::default();
        let mut file = sample(&env);
        file.edit(None, Some(String::from_str(&env, "")));
        assert_eq!(file.description, String::from_str(&env, ""));
        assert_eq!(file.title, String::from_str(&env, "Pic"));
    }
}
