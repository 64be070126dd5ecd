//! Field catalogs shared by listings, filters and the shell.
//!
//! Variant names double as the values stored in the search index, so filter
//! clauses and decoded hits agree without a mapping table. Parsing accepts the
//! index value in any ASCII case; display labels live in the strum message.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ItemType {
    Furniture,
    Electronics,
    Books,
    Kitchen,
    Clothing,
    Decor,
    Other,
}

impl ItemType {
    /// Value written into filter clauses and stored in the index.
    pub fn as_index_value(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        self.as_index_value()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    EnumMessage,
)]
#[strum(ascii_case_insensitive)]
pub enum Condition {
    #[strum(message = "Like new")]
    Excellent,
    #[strum(message = "Gently used")]
    Good,
    #[strum(message = "Well loved")]
    Fair,
}

impl Condition {
    pub fn as_index_value(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.as_index_value())
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Condition::Excellent => "✨",
            Condition::Good => "👍",
            Condition::Fair => "👌",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    EnumMessage,
)]
#[strum(ascii_case_insensitive)]
pub enum Location {
    #[strum(message = "Cary Quad - East")]
    CaryQuadEast,
    #[strum(message = "Wiley Hall")]
    WileyHall,
    #[strum(message = "Harrison Hall")]
    HarrisonHall,
    #[strum(message = "Earhart Hall")]
    EarhartHall,
    #[strum(message = "Hillenbrand Hall")]
    HillenbrandHall,
    #[strum(message = "Third Street Suites")]
    ThirdStreetSuites,
}

impl Location {
    pub fn as_index_value(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.as_index_value())
    }
}

/// Icon attached to a listing card.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Emoji {
    Couch,
    Laptop,
    Book,
    Pan,
    Shirt,
    Lamp,
}

impl Emoji {
    pub fn glyph(self) -> &'static str {
        match self {
            Emoji::Couch => "🛋️",
            Emoji::Laptop => "💻",
            Emoji::Book => "📚",
            Emoji::Pan => "🍳",
            Emoji::Shirt => "👕",
            Emoji::Lamp => "💡",
        }
    }
}

/// Discriminator sent with credentials to `/authenticate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountAction {
    Login,
    Signup,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn account_action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AccountAction::Signup).unwrap(),
            "\"signup\""
        );
        assert_eq!(AccountAction::Login.as_ref(), "login");
    }

    #[test]
    fn index_values_match_serde_names() {
        for location in Location::iter() {
            let encoded = serde_json::to_string(&location).unwrap();
            assert_eq!(encoded, format!("\"{}\"", location.as_index_value()));
        }
        for item_type in ItemType::iter() {
            let encoded = serde_json::to_string(&item_type).unwrap();
            assert_eq!(encoded, format!("\"{}\"", item_type.as_index_value()));
        }
        for condition in Condition::iter() {
            let encoded = serde_json::to_string(&condition).unwrap();
            assert_eq!(encoded, format!("\"{}\"", condition.as_index_value()));
        }
    }

    #[test]
    fn parsing_ignores_ascii_case() {
        assert_eq!(Location::from_str("caryquadeast"), Ok(Location::CaryQuadEast));
        assert_eq!(Condition::from_str("GOOD"), Ok(Condition::Good));
        assert_eq!(Emoji::from_str("pan"), Ok(Emoji::Pan));
        assert!(ItemType::from_str("spaceship").is_err());
    }

    #[test]
    fn labels_come_from_messages() {
        assert_eq!(Location::CaryQuadEast.label(), "Cary Quad - East");
        assert_eq!(Condition::Excellent.label(), "Like new");
        assert_eq!(ItemType::Books.label(), "Books");
        assert!(Location::iter().all(|location| location.get_message().is_some()));
    }
}
