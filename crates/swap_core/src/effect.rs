use serde::Serialize;

use crate::{Account, ListingDraft, RequestId, SearchRequest, TokenPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Credentialed JSON POST to the backend.
    Post {
        request_id: RequestId,
        endpoint: Endpoint,
        body: RequestBody,
    },
    /// Credentialed DELETE without a body.
    Delete {
        request_id: RequestId,
        endpoint: Endpoint,
    },
    Search {
        request_id: RequestId,
        request: SearchRequest,
    },
    /// Ask the router collaborator to show another view.
    Navigate(Destination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Authenticate,
    Forgot,
    Verify,
    Delete,
    Product,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Authenticate => "/authenticate",
            Endpoint::Forgot => "/forgot",
            Endpoint::Verify => "/verify",
            Endpoint::Delete => "/delete",
            Endpoint::Product => "/product",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Credentials(Account),
    Token(TokenPayload),
    Listing(ListingDraft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    CodeEntry,
    ForgotVerify,
    UpdatePassword,
    Browse,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::CodeEntry => "/auth/verify",
            Destination::ForgotVerify => "/auth/verify/forget",
            Destination::UpdatePassword => "/auth/verify/update",
            Destination::Browse => "/browse",
        }
    }
}
