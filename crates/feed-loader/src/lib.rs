//! Feed Loader
//!
//! Scroll-triggered incremental pagination for server-rendered feeds.
//!
//! Layers:
//! - item / card / template: feed records and how they render
//! - config / endpoint: per-feed settings and request URLs
//! - scroll / throttle: when to check for more
//! - host: traits the page (or a test) implements
//! - loader: the `IncrementalFeedLoader` tying it together

mod card;
mod config;
mod endpoint;
mod error;
mod host;
mod item;
mod loader;
mod scroll;
mod template;
mod throttle;


pub use card::Card;
pub use config::{
    FeedConfig, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_THRESHOLD_PX,
    DEFAULT_THROTTLE_MS,
};
pub use endpoint::{request_url, CursorParam};
pub use error::{FeedError, FeedResult};
pub use host::{FeedContainer, FeedSource, Host, LocalTask};
pub use item::{decode_page, decode_page_str, FeedItem};
pub use loader::{IncrementalFeedLoader, LoadOutcome};
pub use scroll::ScrollMetrics;
pub use template::{ActivityCard, CardTemplate, TemplateKind, TrendCard};
pub use throttle::ThrottleGate;
