use crate::{Condition, ItemType, ListingDraft, Location, RequestId, SearchPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the login form.
    LoginSubmitted { email: String, password: String },
    /// User submitted the signup form.
    SignupSubmitted {
        email: String,
        password: String,
        confirm_password: String,
    },
    /// User asked for a password recovery code.
    ForgotSubmitted { email: String },
    /// User entered the code mailed after login/signup.
    LoginCodeSubmitted { code: String },
    /// User entered the code mailed after a recovery request.
    ForgotCodeSubmitted { code: String },
    /// User chose a new password after recovery.
    NewPasswordSubmitted { password: String },
    /// User clicked Sign out.
    SignOutClicked,
    /// Signed-in user posted a new listing.
    ListingSubmitted(ListingDraft),
    /// Backend answered a request issued through `Effect::Post`/`Effect::Delete`.
    /// `Err` carries a human-readable reason for logging.
    BackendResponded {
        request_id: RequestId,
        result: Result<(), String>,
    },
    /// User edited the search box.
    QueryChanged(String),
    ItemTypeFilterChanged(Option<ItemType>),
    LocationFilterChanged(Option<Location>),
    ConditionFilterChanged(Option<Condition>),
    /// User asked to run the current query.
    SearchRequested,
    /// Search engine answered a request issued through `Effect::Search`.
    SearchCompleted {
        request_id: RequestId,
        page: SearchPage,
    },
}
