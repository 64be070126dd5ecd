use swap_logging::{swap_debug, swap_info, swap_warn};

use crate::auth::{
    validate_code, validate_credentials, validate_email, validate_new_password, validate_signup,
};
use crate::limiter::Millis;
use crate::state::PendingRequest;
use crate::{
    Account, AccountAction, AppState, AuthStage, Destination, Effect, Endpoint, Msg, RequestBody,
    TokenPayload, ValidationError,
};

/// Pure update function: applies a message to state and returns any effects.
///
/// `now` is only consulted by the rate limiter.
pub fn update(mut state: AppState, msg: Msg, now: Millis) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoginSubmitted { email, password } => {
            if !admit(&state, now, "login", AuthStage::Anonymous) {
                return (state, Vec::new());
            }
            if let Err(err) = validate_credentials(&email, &password) {
                return rejected(state, "Login", err);
            }
            let account = Account {
                email,
                password,
                action: AccountAction::Login,
            };
            vec![post(
                &mut state,
                now,
                PendingRequest::Login,
                Endpoint::Authenticate,
                RequestBody::Credentials(account),
            )]
        }
        Msg::SignupSubmitted {
            email,
            password,
            confirm_password,
        } => {
            if !admit(&state, now, "signup", AuthStage::Anonymous) {
                return (state, Vec::new());
            }
            if let Err(err) = validate_signup(&email, &password, &confirm_password) {
                return rejected(state, "Signup", err);
            }
            let account = Account {
                email,
                password,
                action: AccountAction::Signup,
            };
            vec![post(
                &mut state,
                now,
                PendingRequest::Signup,
                Endpoint::Authenticate,
                RequestBody::Credentials(account),
            )]
        }
        Msg::ForgotSubmitted { email } => {
            if is_throttled(&state, now, "forgot") {
                return (state, Vec::new());
            }
            if let Err(err) = validate_email(&email) {
                return rejected(state, "Recovery", err);
            }
            vec![post(
                &mut state,
                now,
                PendingRequest::Forgot,
                Endpoint::Forgot,
                RequestBody::Token(TokenPayload { token: email }),
            )]
        }
        Msg::LoginCodeSubmitted { code } => {
            if !admit(&state, now, "verify", AuthStage::AwaitingLoginVerification) {
                return (state, Vec::new());
            }
            if let Err(err) = validate_code(&code) {
                return rejected(state, "Verification", err);
            }
            vec![post(
                &mut state,
                now,
                PendingRequest::VerifyLogin,
                Endpoint::Verify,
                RequestBody::Token(TokenPayload { token: code }),
            )]
        }
        Msg::ForgotCodeSubmitted { code } => {
            if !admit(
                &state,
                now,
                "verify_forgot",
                AuthStage::AwaitingForgotVerification,
            ) {
                return (state, Vec::new());
            }
            if let Err(err) = validate_code(&code) {
                return rejected(state, "Verification", err);
            }
            vec![post(
                &mut state,
                now,
                PendingRequest::VerifyForgot,
                Endpoint::Verify,
                RequestBody::Token(TokenPayload { token: code }),
            )]
        }
        Msg::NewPasswordSubmitted { password } => {
            if !admit(&state, now, "update", AuthStage::AwaitingPasswordUpdate) {
                return (state, Vec::new());
            }
            if let Err(err) = validate_new_password(&password) {
                return rejected(state, "Password update", err);
            }
            vec![post(
                &mut state,
                now,
                PendingRequest::UpdatePassword,
                Endpoint::Verify,
                RequestBody::Token(TokenPayload { token: password }),
            )]
        }
        Msg::SignOutClicked => {
            if !admit(&state, now, "signout", AuthStage::SignedIn) {
                return (state, Vec::new());
            }
            state.record_attempt(now);
            let request_id = state.begin_request(PendingRequest::SignOut);
            vec![Effect::Delete {
                request_id,
                endpoint: Endpoint::Delete,
            }]
        }
        Msg::ListingSubmitted(draft) => {
            if state.limiter().is_long_blocked(now) {
                swap_debug!("listing ignored: rate limited");
                return (state, Vec::new());
            }
            if state.stage() != AuthStage::SignedIn {
                swap_debug!("listing ignored: not signed in");
                return (state, Vec::new());
            }
            if let Err(err) = draft.validate() {
                return rejected(state, "Listing", err);
            }
            vec![post(
                &mut state,
                now,
                PendingRequest::SubmitListing,
                Endpoint::Product,
                RequestBody::Listing(draft),
            )]
        }
        Msg::BackendResponded { request_id, result } => {
            let Some(kind) = state.finish_request(request_id) else {
                swap_debug!("dropping stale response for request {}", request_id);
                return (state, Vec::new());
            };
            match result {
                Ok(()) => complete(&mut state, kind),
                Err(reason) => {
                    swap_warn!("{:?} failed: {}", kind, reason);
                    Vec::new()
                }
            }
        }
        Msg::QueryChanged(query) => {
            state.query_mut().set_query(query);
            Vec::new()
        }
        Msg::ItemTypeFilterChanged(item_type) => {
            state.query_mut().set_item_type_filter(item_type);
            Vec::new()
        }
        Msg::LocationFilterChanged(location) => {
            state.query_mut().set_location_filter(location);
            Vec::new()
        }
        Msg::ConditionFilterChanged(condition) => {
            state.query_mut().set_condition_filter(condition);
            Vec::new()
        }
        Msg::SearchRequested => {
            let request = state.query().search_request();
            let request_id = state.begin_search();
            vec![Effect::Search {
                request_id,
                request,
            }]
        }
        Msg::SearchCompleted { request_id, page } => {
            if !state.finish_search(request_id, page) {
                swap_debug!("dropping superseded search {}", request_id);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn is_throttled(state: &AppState, now: Millis, action: &str) -> bool {
    let blocked = state.limiter().is_short_blocked(now);
    if blocked {
        swap_debug!("{} ignored: rate limited", action);
    }
    blocked
}

/// Limiter first, then the stage precondition. Both fail silently.
fn admit(state: &AppState, now: Millis, action: &str, required: AuthStage) -> bool {
    if is_throttled(state, now, action) {
        return false;
    }
    if state.stage() != required {
        swap_debug!("{} ignored in stage {:?}", action, state.stage());
        return false;
    }
    true
}

fn rejected(state: AppState, action: &str, err: ValidationError) -> (AppState, Vec<Effect>) {
    swap_warn!("{} failed: {}", action, err);
    (state, Vec::new())
}

/// Records the attempt before the request leaves, so a hung call still holds the cooldown.
fn post(
    state: &mut AppState,
    now: Millis,
    kind: PendingRequest,
    endpoint: Endpoint,
    body: RequestBody,
) -> Effect {
    state.record_attempt(now);
    let request_id = state.begin_request(kind);
    swap_info!("{:?} request {} -> {}", kind, request_id, endpoint.path());
    Effect::Post {
        request_id,
        endpoint,
        body,
    }
}

fn complete(state: &mut AppState, kind: PendingRequest) -> Vec<Effect> {
    let (stage, destination) = match kind {
        PendingRequest::Login | PendingRequest::Signup => (
            Some(AuthStage::AwaitingLoginVerification),
            Some(Destination::CodeEntry),
        ),
        PendingRequest::Forgot => (
            Some(AuthStage::AwaitingForgotVerification),
            Some(Destination::ForgotVerify),
        ),
        PendingRequest::VerifyLogin | PendingRequest::UpdatePassword => {
            (Some(AuthStage::SignedIn), Some(Destination::Browse))
        }
        PendingRequest::VerifyForgot => (
            Some(AuthStage::AwaitingPasswordUpdate),
            Some(Destination::UpdatePassword),
        ),
        PendingRequest::SignOut => (Some(AuthStage::Anonymous), None),
        PendingRequest::SubmitListing => (None, Some(Destination::Browse)),
    };
    if let Some(stage) = stage {
        swap_info!("{:?} succeeded, stage {:?} -> {:?}", kind, state.stage(), stage);
        state.set_stage(stage);
    }
    destination.map(Effect::Navigate).into_iter().collect()
}
