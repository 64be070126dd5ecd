use serde::{Deserialize, Serialize};

use crate::catalog::{Condition, Emoji, ItemType, Location};

/// Number of hits exposed to preview consumers.
pub const PREVIEW_LEN: usize = 3;

pub const FIELD_ITEM_TYPE: &str = "item_type";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_CONDITION: &str = "condition";

/// A listing as stored in the search index. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "product_id")]
    pub id: String,
    pub item_type: ItemType,
    pub title: String,
    pub condition: Condition,
    pub location: Location,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: Option<Emoji>,
}

/// One page of ranked hits plus the engine's estimate of all matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    pub hits: Vec<Item>,
    pub total_hits: u64,
}

/// What the engine is asked for: free text plus conjoined equality clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub filter: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultView {
    /// Leading hits only, for teaser panels.
    Preview,
    /// Every hit of the current page.
    Browse,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    query: String,
    item_type: Option<ItemType>,
    location: Option<Location>,
    condition: Option<Condition>,
    page: SearchPage,
}

impl QueryState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn item_type(&self) -> Option<ItemType> {
        self.item_type
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub fn total_hits(&self) -> u64 {
        self.page.total_hits
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_item_type_filter(&mut self, item_type: Option<ItemType>) {
        self.item_type = item_type;
    }

    pub fn set_location_filter(&mut self, location: Option<Location>) {
        self.location = location;
    }

    pub fn set_condition_filter(&mut self, condition: Option<Condition>) {
        self.condition = condition;
    }

    /// Clauses in declaration order: item type, location, condition.
    pub fn filter_expression(&self) -> Vec<String> {
        let clauses = [
            self.item_type.map(|v| (FIELD_ITEM_TYPE, v.as_index_value())),
            self.location.map(|v| (FIELD_LOCATION, v.as_index_value())),
            self.condition.map(|v| (FIELD_CONDITION, v.as_index_value())),
        ];
        clauses
            .into_iter()
            .flatten()
            .map(|(field, value)| format!("{field} = {value}"))
            .collect()
    }

    pub fn search_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            filter: self.filter_expression(),
        }
    }

    /// Replaces hits and total together. The total never reports fewer
    /// matches than the hits actually held.
    pub fn apply_page(&mut self, page: SearchPage) {
        let floor = page.hits.len() as u64;
        self.page = SearchPage {
            total_hits: page.total_hits.max(floor),
            hits: page.hits,
        };
    }

    pub fn results(&self, view: ResultView) -> &[Item] {
        let hits = self.page.hits.as_slice();
        match view {
            ResultView::Preview => &hits[..hits.len().min(PREVIEW_LEN)],
            ResultView::Browse => hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: usize) -> Item {
        Item {
            id: format!("item-{n}"),
            item_type: ItemType::Books,
            title: format!("Textbook {n}"),
            condition: Condition::Good,
            location: Location::WileyHall,
            description: String::new(),
            emoji: Some(Emoji::Book),
        }
    }

    #[test]
    fn no_filters_no_clauses() {
        assert!(QueryState::default().filter_expression().is_empty());
    }

    #[test]
    fn clauses_follow_declaration_order_not_setting_order() {
        let mut state = QueryState::default();
        state.set_condition_filter(Some(Condition::Good));
        state.set_item_type_filter(Some(ItemType::Books));
        assert_eq!(
            state.filter_expression(),
            vec!["item_type = Books".to_string(), "condition = Good".to_string()]
        );

        state.set_location_filter(Some(Location::HarrisonHall));
        assert_eq!(
            state.filter_expression(),
            vec![
                "item_type = Books".to_string(),
                "location = HarrisonHall".to_string(),
                "condition = Good".to_string(),
            ]
        );

        state.set_item_type_filter(None);
        assert_eq!(state.filter_expression().len(), 2);
    }

    #[test]
    fn projections_share_one_list() {
        let mut state = QueryState::default();
        state.apply_page(SearchPage {
            hits: (0..10).map(item).collect(),
            total_hits: 42,
        });

        let preview = state.results(ResultView::Preview);
        assert_eq!(preview.len(), 3);
        assert_eq!(preview[0].id, "item-0");
        assert_eq!(preview[2].id, "item-2");
        assert_eq!(state.results(ResultView::Browse).len(), 10);
        assert_eq!(state.total_hits(), 42);
    }

    #[test]
    fn preview_of_short_list_is_whole_list() {
        let mut state = QueryState::default();
        state.apply_page(SearchPage {
            hits: vec![item(0)],
            total_hits: 1,
        });
        assert_eq!(state.results(ResultView::Preview).len(), 1);
    }

    #[test]
    fn total_is_clamped_to_hit_count() {
        let mut state = QueryState::default();
        state.apply_page(SearchPage {
            hits: (0..4).map(item).collect(),
            total_hits: 2,
        });
        assert_eq!(state.total_hits(), 4);
    }

    #[test]
    fn item_decodes_index_document() {
        let json = r#"{
            "product_id": "b7c1",
            "item_type": "Furniture",
            "title": "Desk",
            "condition": "Fair",
            "location": "ThirdStreetSuites",
            "emoji": "Couch"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "b7c1");
        assert_eq!(item.location, Location::ThirdStreetSuites);
        assert_eq!(item.description, "");
        assert_eq!(item.emoji, Some(Emoji::Couch));
    }
}
