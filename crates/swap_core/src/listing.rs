use serde::Serialize;

use crate::auth::ValidationError;
use crate::catalog::{Condition, Emoji, ItemType, Location};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1_000;

/// A new listing as posted to `/product` by a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingDraft {
    pub item_type: ItemType,
    pub condition: Condition,
    pub title: String,
    pub description: String,
    pub location: Location,
    pub emoji: Emoji,
}

impl ListingDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::ListingFieldTooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::ListingFieldTooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }
        Ok(())
    }
}
