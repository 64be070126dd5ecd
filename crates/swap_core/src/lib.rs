//! BoilerSwap core: pure auth/search state machine and view-model helpers.
mod auth;
mod catalog;
mod effect;
mod limiter;
mod listing;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use auth::{
    validate_code, validate_credentials, validate_email, validate_new_password, validate_signup,
    Account, AuthStage, SessionStatus, TokenPayload, ValidationError, CODE_LEN,
    INSTITUTION_DOMAIN, MAX_EMAIL_LEN, MAX_PASSWORD_LEN,
};
pub use catalog::{AccountAction, Condition, Emoji, ItemType, Location};
pub use effect::{Destination, Effect, Endpoint, RequestBody};
pub use limiter::{Millis, RateLimiter, LONG_WINDOW_MS, SHORT_WINDOW_MS};
pub use listing::{ListingDraft, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
pub use msg::Msg;
pub use query::{
    Item, QueryState, ResultView, SearchPage, SearchRequest, FIELD_CONDITION, FIELD_ITEM_TYPE,
    FIELD_LOCATION, PREVIEW_LEN,
};
pub use state::{AppState, PendingRequest, RequestId};
pub use update::update;
pub use view_model::AppViewModel;
