//! BoilerSwap engine: backend/search IO and effect execution.
mod backend;
mod client;
mod clock;
mod search;
mod settings;
mod types;

pub use backend::{Backend, ReqwestBackend};
pub use client::{ClientBuildError, MarketClient, Navigator};
pub use clock::{Clock, SystemClock};
pub use search::{MeiliSearchClient, SearchEngine};
pub use settings::{
    ClientSettings, SettingsError, ENV_API_TOKEN, ENV_BACKEND_URL, ENV_MEILI_INDEX, ENV_MEILI_KEY,
    ENV_MEILI_URL, ENV_REQUEST_TIMEOUT_MS,
};
pub use types::{BackendError, SearchError};
