//! Incremental Feed Loader
//!
//! Appends the next page of cards whenever the reader scrolls near the
//! bottom. The container is the only pagination state: every request is
//! keyed by the cursor on the last card currently rendered.

use log::{debug, error, info, warn};
use std::cell::Cell;
use std::future::{poll_fn, Future};
use std::pin::pin;
use std::rc::Rc;
use std::task::Poll;
use crate::card::Card;
use crate::config::FeedConfig;
use crate::endpoint::request_url;
use crate::error::{FeedError, FeedResult};
use crate::host::{FeedContainer, FeedSource, Host};
use crate::item::FeedItem;
use crate::template::CardTemplate;
use crate::throttle::ThrottleGate;

/// What a single `load_more` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The container has no card with a cursor yet; no request made
    NoCursor,
    /// Another load is still pending; no request made
    InFlight,
    /// The endpoint returned an empty page
    EndOfFeed,
    /// This many cards were appended
    Appended(usize),
}

/// Clears the in-flight flag on every exit path
struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Resolve `task`, or `None` if `deadline` completes first
async fn within<T>(
    task: impl Future<Output = T>,
    deadline: impl Future<Output = ()>,
) -> Option<T> {
    let mut task = pin!(task);
    let mut deadline = pin!(deadline);
    poll_fn(|cx| {
        if let Poll::Ready(value) = task.as_mut().poll(cx) {
            return Poll::Ready(Some(value));
        }
        if deadline.as_mut().poll(cx).is_ready() {
            return Poll::Ready(None);
        }
        Poll::Pending
    })
    .await
}

pub struct IncrementalFeedLoader<C, S, H> {
    config: FeedConfig,
    template: Box<dyn CardTemplate>,
    container: C,
    source: S,
    host: H,
    gate: ThrottleGate,
    in_flight: Cell<bool>,
}

impl<C, S, H> IncrementalFeedLoader<C, S, H>
where
    C: FeedContainer,
    S: FeedSource,
    H: Host,
{
    /// Create a loader using the template named in `config`
    pub fn new(config: FeedConfig, container: C, source: S, host: H) -> FeedResult<Self> {
        config.validate()?;
        let template = config.template.template();
        Ok(Self {
            config,
            template,
            container,
            source,
            host,
            gate: ThrottleGate::new(),
            in_flight: Cell::new(false),
        })
    }

    /// Replace the configured template with a custom one
    pub fn with_template(mut self, template: impl CardTemplate + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// True while a bottom check is scheduled
    pub fn is_check_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// True while a page request is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight.get()
    }

    pub fn is_near_bottom(&self) -> bool {
        self.host.metrics().is_near_bottom(self.config.threshold_px)
    }

    /// Render an item and stamp its cursor so the next page can be requested from it
    pub fn build_card(&self, item: &FeedItem) -> FeedResult<Card> {
        let cursor = item.require(&self.config.cursor_field)?;
        let mut card = self.template.render(item)?;
        card.set_attr(self.config.cursor_attribute.as_str(), cursor);
        Ok(card)
    }

    /// Fetch the page after the last card and append it.
    ///
    /// Loads are serialised: a call made while another is pending returns
    /// [`LoadOutcome::InFlight`] without reading the cursor. A request that
    /// outlives `request_timeout_ms` is dropped and reported as a network
    /// error, so a stalled connection never blocks later loads.
    pub async fn load_more(&self) -> FeedResult<LoadOutcome> {
        if self.in_flight.replace(true) {
            debug!("Load already in flight, skipping");
            return Ok(LoadOutcome::InFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let cursor = self
            .container
            .last_card_attribute(&self.config.cursor_attribute)
            .filter(|c| !c.is_empty());
        let Some(cursor) = cursor else {
            info!("No cards in #{} yet, nothing to page from", self.config.container_id);
            return Ok(LoadOutcome::NoCursor);
        };

        let url = request_url(&self.config.endpoint, self.config.cursor_param, &cursor)?;
        debug!("Requesting {}", url);
        let fetch = self.source.fetch_page(&url);
        let deadline = self.host.sleep(self.config.request_timeout());
        let items = within(fetch, deadline).await.ok_or_else(|| {
            FeedError::Network(format!(
                "{} timed out after {} ms",
                url, self.config.request_timeout_ms
            ))
        })??;

        if items.is_empty() {
            info!("All items loaded for #{}", self.config.container_id);
            return Ok(LoadOutcome::EndOfFeed);
        }

        // Render the whole page first so a bad item appends nothing
        let cards = items
            .iter()
            .map(|item| self.build_card(item))
            .collect::<FeedResult<Vec<_>>>()?;
        self.container.append_page(&cards)?;

        info!(
            "Appended {} cards to #{} ({} total)",
            cards.len(),
            self.config.container_id,
            self.container.card_count()
        );
        Ok(LoadOutcome::Appended(cards.len()))
    }
}

impl<C, S, H> IncrementalFeedLoader<C, S, H>
where
    C: FeedContainer + 'static,
    S: FeedSource + 'static,
    H: Host + 'static,
{
    /// Scroll event handler.
    ///
    /// Schedules one bottom check per throttle window; returns whether this
    /// event scheduled it. Proximity is evaluated when the timer fires.
    pub fn on_scroll(self: &Rc<Self>) -> bool {
        if !self.gate.try_arm() {
            return false;
        }

        let loader = Rc::clone(self);
        self.host.set_timeout(
            self.config.throttle_delay(),
            Box::new(move || {
                loader.gate.release();
                if loader.is_near_bottom() {
                    loader.spawn_load();
                }
            }),
        );
        true
    }

    /// Run `load_more` on the host executor, logging the result
    pub fn spawn_load(self: &Rc<Self>) {
        let loader = Rc::clone(self);
        self.host.spawn_local(Box::pin(async move {
            match loader.load_more().await {
                Ok(LoadOutcome::InFlight) => {
                    warn!("Reached bottom while a page is still loading")
                }
                Ok(outcome) => debug!("Load finished: {:?}", outcome),
                Err(e) => error!(
                    "Failed to load more items for #{}: {}",
                    loader.config.container_id, e
                ),
            }
        }));
    }
}
