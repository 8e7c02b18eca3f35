//! Host Seams
//!
//! The loader reaches the page only through these traits: the browser
//! binding implements them with `web-sys`, tests with in-memory fakes.

use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use crate::card::Card;
use crate::error::FeedResult;
use crate::item::FeedItem;
use crate::scroll::ScrollMetrics;

/// A future run on the local (single-threaded) executor
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Viewport, timers and task spawning
pub trait Host {
    /// Current document/viewport geometry
    fn metrics(&self) -> ScrollMetrics;

    /// Run `callback` once after `delay`
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);

    /// Future that completes after `delay`
    fn sleep(&self, delay: Duration) -> LocalTask;

    fn spawn_local(&self, task: LocalTask);
}

/// The element holding the rendered cards
pub trait FeedContainer {
    /// Attribute `name` of the last card, if there is a card and it has the attribute
    fn last_card_attribute(&self, name: &str) -> Option<String>;

    fn card_count(&self) -> usize;

    /// Append a page of cards after the current last card.
    /// On error no card of the page is attached.
    fn append_page(&self, cards: &[Card]) -> FeedResult<()>;
}

/// Fetches one page of items
#[async_trait(?Send)]
pub trait FeedSource {
    /// GET `url` and decode the body. End of feed decodes to an empty page.
    async fn fetch_page(&self, url: &str) -> FeedResult<Vec<FeedItem>>;
}
