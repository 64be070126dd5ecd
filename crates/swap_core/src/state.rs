use crate::limiter::{Millis, RateLimiter};
use crate::query::{QueryState, ResultView, SearchPage};
use crate::view_model::AppViewModel;
use crate::{AuthStage, Item, SessionStatus};

/// Sequence number attached to every outbound request.
pub type RequestId = u64;

/// Backend request awaiting an answer; decides what a success means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRequest {
    Login,
    Signup,
    Forgot,
    VerifyLogin,
    VerifyForgot,
    UpdatePassword,
    SignOut,
    SubmitListing,
}

/// Everything the client keeps in memory for one session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    stage: AuthStage,
    limiter: RateLimiter,
    query: QueryState,
    pending: Option<(RequestId, PendingRequest)>,
    pending_search: Option<RequestId>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    /// Construction counts as an attempt, so the first action must wait out the short window.
    pub fn new(now: Millis) -> Self {
        Self {
            limiter: RateLimiter::new(now),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            stage: self.stage,
            status: self.stage.status(),
            query: self.query.query().to_string(),
            item_type: self.query.item_type(),
            location: self.query.location(),
            condition: self.query.condition(),
            hit_count: self.query.results(ResultView::Browse).len(),
            total_hits: self.query.total_hits(),
            awaiting_response: self.pending.is_some(),
            dirty: self.dirty,
        }
    }

    pub fn stage(&self) -> AuthStage {
        self.stage
    }

    pub fn status(&self) -> SessionStatus {
        self.stage.status()
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn results(&self, view: ResultView) -> &[Item] {
        self.query.results(view)
    }

    pub fn pending(&self) -> Option<(RequestId, PendingRequest)> {
        self.pending
    }

    /// Returns whether the view changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn query_mut(&mut self) -> &mut QueryState {
        self.dirty = true;
        &mut self.query
    }

    pub(crate) fn record_attempt(&mut self, now: Millis) {
        self.limiter.record_attempt(now);
    }

    pub(crate) fn set_stage(&mut self, stage: AuthStage) {
        if self.stage != stage {
            self.stage = stage;
            self.dirty = true;
        }
    }

    /// Replaces any outstanding backend request; its answer will be ignored.
    pub(crate) fn begin_request(&mut self, kind: PendingRequest) -> RequestId {
        let request_id = self.next_request_id();
        self.pending = Some((request_id, kind));
        self.dirty = true;
        request_id
    }

    /// Takes the outstanding request if `request_id` is the latest one issued.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> Option<PendingRequest> {
        match self.pending {
            Some((pending_id, kind)) if pending_id == request_id => {
                self.pending = None;
                self.dirty = true;
                Some(kind)
            }
            _ => None,
        }
    }

    pub(crate) fn begin_search(&mut self) -> RequestId {
        let request_id = self.next_request_id();
        self.pending_search = Some(request_id);
        request_id
    }

    /// Applies a page only when it answers the most recent search.
    pub(crate) fn finish_search(&mut self, request_id: RequestId, page: SearchPage) -> bool {
        if self.pending_search != Some(request_id) {
            return false;
        }
        self.pending_search = None;
        self.query_mut().apply_page(page);
        true
    }

    fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }
}
