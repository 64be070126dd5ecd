use pretty_assertions::assert_eq;
use swap_core::{
    update, AppState, AuthStage, Condition, Effect, Item, ItemType, Location, Msg, ResultView,
    SearchPage, SearchRequest,
};

fn hits(count: usize) -> Vec<Item> {
    (0..count)
        .map(|n| Item {
            id: format!("id-{n}"),
            item_type: ItemType::Kitchen,
            title: format!("Pan {n}"),
            condition: Condition::Fair,
            location: Location::HillenbrandHall,
            description: String::new(),
            emoji: None,
        })
        .collect()
}

fn request_search(state: AppState) -> (AppState, u64, SearchRequest) {
    let (state, effects) = update(state, Msg::SearchRequested, 0);
    match effects.as_slice() {
        [Effect::Search {
            request_id,
            request,
        }] => (state, *request_id, request.clone()),
        other => panic!("expected a single search effect, got {other:?}"),
    }
}

#[test]
fn search_without_filters_sends_no_clauses() {
    let (state, _) = update(AppState::new(0), Msg::QueryChanged("lamp".to_string()), 0);
    let (_state, _, request) = request_search(state);
    assert_eq!(
        request,
        SearchRequest {
            query: "lamp".to_string(),
            filter: Vec::new(),
        }
    );
}

#[test]
fn filters_are_emitted_in_declaration_order() {
    let state = AppState::new(0);
    let (state, _) = update(state, Msg::ConditionFilterChanged(Some(Condition::Good)), 0);
    let (state, _) = update(state, Msg::ItemTypeFilterChanged(Some(ItemType::Books)), 0);
    let (_state, _, request) = request_search(state);
    assert_eq!(
        request.filter,
        vec!["item_type = Books".to_string(), "condition = Good".to_string()]
    );
}

#[test]
fn cleared_filter_drops_its_clause() {
    let state = AppState::new(0);
    let (state, _) = update(
        state,
        Msg::LocationFilterChanged(Some(Location::CaryQuadEast)),
        0,
    );
    let (state, _) = update(state, Msg::LocationFilterChanged(None), 0);
    let (_state, _, request) = request_search(state);
    assert!(request.filter.is_empty());
}

#[test]
fn completed_search_replaces_results_atomically() {
    let (state, request_id, _) = request_search(AppState::new(0));
    let (mut state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            page: SearchPage {
                hits: hits(10),
                total_hits: 57,
            },
        },
        0,
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(view.hit_count, 10);
    assert_eq!(view.total_hits, 57);
    let preview: Vec<_> = state
        .results(ResultView::Preview)
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(preview, vec!["id-0", "id-1", "id-2"]);
    assert_eq!(state.results(ResultView::Browse).len(), 10);
}

#[test]
fn superseded_search_does_not_overwrite_newer_results() {
    let (state, older, _) = request_search(AppState::new(0));
    let (state, newer, _) = request_search(state);

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: newer,
            page: SearchPage {
                hits: hits(2),
                total_hits: 2,
            },
        },
        0,
    );
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: older,
            page: SearchPage {
                hits: hits(9),
                total_hits: 9,
            },
        },
        0,
    );
    assert_eq!(state.view().hit_count, 2);
    assert_eq!(state.view().total_hits, 2);
}

#[test]
fn search_is_independent_of_auth_and_limiter() {
    // Searching right after construction is not throttled and needs no session.
    let state = AppState::new(1_000);
    let (state, effects) = update(state, Msg::SearchRequested, 1_001);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.stage(), AuthStage::Anonymous);
    assert_eq!(state.limiter().last_attempt_at(), 1_000);
}
