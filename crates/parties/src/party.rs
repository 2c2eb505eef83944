use serde::{Deserialize, Serialize};

use billforge_core::ValueObject;

/// The party that creates and owns an invoice.
///
/// Immutable once constructed; both fields default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    name: String,
    /// Avatar reference, usually a URL.
    avatar: String,
}

impl Party {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}

impl ValueObject for Party {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_party_has_empty_fields() {
        let party = Party::default();
        assert_eq!(party.name(), "");
        assert_eq!(party.avatar(), "");
    }

    #[test]
    fn parties_compare_by_value() {
        let a = Party::new("Ada", "https://example.com/ada.png");
        let b = Party::new("Ada".to_string(), "https://example.com/ada.png".to_string());
        assert_eq!(a, b);
        assert_ne!(a, Party::new("Ada", ""));
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let party = Party::new("Ada", "a.png");
        let json = serde_json::to_value(&party).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ada", "avatar": "a.png" }));
    }
}
