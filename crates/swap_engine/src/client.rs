use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use swap_core::{
    update, AppState, AppViewModel, AuthStage, Condition, Destination, Effect, Item, ItemType,
    ListingDraft, Location, Msg, RequestId, ResultView, SessionStatus,
};
use swap_logging::{swap_debug, swap_info, swap_warn};

use crate::backend::{Backend, ReqwestBackend};
use crate::clock::{Clock, SystemClock};
use crate::search::{MeiliSearchClient, SearchEngine};
use crate::settings::ClientSettings;
use crate::types::{BackendError, SearchError};

/// Router collaborator that performs view transitions.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}

#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Owns the session state and executes the effects `update` asks for.
///
/// The state lock is only held around `update`; it is released before any
/// request is awaited, so several operations may be in flight at once and the
/// limiter plus request ids decide what sticks.
pub struct MarketClient {
    state: Mutex<AppState>,
    backend: Arc<dyn Backend>,
    search: Arc<dyn SearchEngine>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    search_index: String,
}

impl MarketClient {
    pub fn new(
        backend: Arc<dyn Backend>,
        search: Arc<dyn SearchEngine>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
        search_index: impl Into<String>,
    ) -> Self {
        let state = AppState::new(clock.now_millis());
        Self {
            state: Mutex::new(state),
            backend,
            search,
            navigator,
            clock,
            search_index: search_index.into(),
        }
    }

    /// Wires the reqwest backend, Meilisearch and the system clock from settings.
    pub fn from_settings(
        settings: &ClientSettings,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientBuildError> {
        let backend = Arc::new(ReqwestBackend::new(settings)?);
        let search = Arc::new(MeiliSearchClient::new(settings)?);
        Ok(Self::new(
            backend,
            search,
            navigator,
            Arc::new(SystemClock),
            settings.search_index.clone(),
        ))
    }

    pub async fn login(&self, email: &str, password: &str) {
        let effects = self.dispatch(Msg::LoginSubmitted {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.settle("login", effects).await;
    }

    pub async fn signup(&self, email: &str, password: &str, confirm_password: &str) {
        let effects = self.dispatch(Msg::SignupSubmitted {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        });
        self.settle("signup", effects).await;
    }

    pub async fn forgot(&self, email: &str) {
        let effects = self.dispatch(Msg::ForgotSubmitted {
            email: email.to_string(),
        });
        self.settle("forgot", effects).await;
    }

    pub async fn verify(&self, code: &str) {
        let effects = self.dispatch(Msg::LoginCodeSubmitted {
            code: code.to_string(),
        });
        self.settle("verify", effects).await;
    }

    pub async fn verify_forgot(&self, code: &str) {
        let effects = self.dispatch(Msg::ForgotCodeSubmitted {
            code: code.to_string(),
        });
        self.settle("verify_forgot", effects).await;
    }

    pub async fn update_password(&self, new_password: &str) {
        let effects = self.dispatch(Msg::NewPasswordSubmitted {
            password: new_password.to_string(),
        });
        self.settle("update", effects).await;
    }

    /// Unlike the other auth operations, a failed sign-out is returned to the caller.
    pub async fn sign_out(&self) -> Result<(), BackendError> {
        let effects = self.dispatch(Msg::SignOutClicked);
        self.drive(effects).await
    }

    pub async fn submit_listing(&self, draft: ListingDraft) {
        let effects = self.dispatch(Msg::ListingSubmitted(draft));
        self.settle("listing", effects).await;
    }

    pub fn set_query(&self, query: &str) {
        self.dispatch(Msg::QueryChanged(query.to_string()));
    }

    pub fn set_item_type_filter(&self, item_type: Option<ItemType>) {
        self.dispatch(Msg::ItemTypeFilterChanged(item_type));
    }

    pub fn set_location_filter(&self, location: Option<Location>) {
        self.dispatch(Msg::LocationFilterChanged(location));
    }

    pub fn set_condition_filter(&self, condition: Option<Condition>) {
        self.dispatch(Msg::ConditionFilterChanged(condition));
    }

    /// Runs the current query. Engine failures are returned untouched and
    /// leave the previous results in place.
    pub async fn run_search(&self) -> Result<(), SearchError> {
        for effect in self.dispatch(Msg::SearchRequested) {
            match effect {
                Effect::Search {
                    request_id,
                    request,
                } => {
                    let page = self
                        .search
                        .search(&self.search_index, &request.query, &request.filter)
                        .await?;
                    swap_info!(
                        "search {} returned {} of {} hit(s)",
                        request_id,
                        page.hits.len(),
                        page.total_hits
                    );
                    self.dispatch(Msg::SearchCompleted { request_id, page });
                }
                other => swap_warn!("unexpected effect from search: {:?}", other),
            }
        }
        Ok(())
    }

    pub fn results(&self, view: ResultView) -> Vec<Item> {
        self.lock().results(view).to_vec()
    }

    pub fn preview(&self) -> Vec<Item> {
        self.results(ResultView::Preview)
    }

    pub fn browse(&self) -> Vec<Item> {
        self.results(ResultView::Browse)
    }

    pub fn stage(&self) -> AuthStage {
        self.lock().stage()
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status()
    }

    pub fn view(&self) -> AppViewModel {
        self.lock().view()
    }

    /// Returns whether the view changed since the last call.
    pub fn consume_dirty(&self) -> bool {
        self.lock().consume_dirty()
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        let now = self.clock.now_millis();
        let mut guard = self.lock();
        let state = std::mem::take(&mut *guard);
        let (state, effects) = update(state, msg, now);
        *guard = state;
        effects
    }

    /// Auth failures were already logged by `update`; the caller only sees the new state.
    async fn settle(&self, action: &str, effects: Vec<Effect>) {
        if let Err(err) = self.drive(effects).await {
            swap_debug!("{} settled with {}", action, err);
        }
    }

    /// Executes effects in order, feeding each backend answer back through `update`.
    /// Returns the last transport/HTTP failure, if any.
    async fn drive(&self, effects: Vec<Effect>) -> Result<(), BackendError> {
        let mut queue: VecDeque<Effect> = effects.into();
        let mut failure = None;
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Post {
                    request_id,
                    endpoint,
                    body,
                } => {
                    let result = self.backend.post(endpoint.path(), &body).await;
                    queue.extend(self.respond(request_id, result, &mut failure));
                }
                Effect::Delete {
                    request_id,
                    endpoint,
                } => {
                    let result = self.backend.delete(endpoint.path()).await;
                    queue.extend(self.respond(request_id, result, &mut failure));
                }
                Effect::Navigate(destination) => {
                    swap_info!("navigating to {}", destination.path());
                    self.navigator.navigate(destination);
                }
                Effect::Search { request_id, .. } => {
                    swap_warn!("search {} requested outside run_search", request_id);
                }
            }
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn respond(
        &self,
        request_id: RequestId,
        result: Result<(), BackendError>,
        failure: &mut Option<BackendError>,
    ) -> Vec<Effect> {
        let msg = Msg::BackendResponded {
            request_id,
            result: result.as_ref().map(|_| ()).map_err(ToString::to_string),
        };
        if let Err(err) = result {
            *failure = Some(err);
        }
        self.dispatch(msg)
    }
}
