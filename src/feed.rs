//! Feed Wiring
//!
//! Connects a configured loader to the page's scroll events.

use feed_loader::{FeedConfig, FeedError, FeedResult, IncrementalFeedLoader};
use log::{debug, info};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};
use crate::dom::DomContainer;
use crate::fetch::FetchSource;
use crate::host::BrowserHost;

pub type BrowserLoader = IncrementalFeedLoader<DomContainer, FetchSource, BrowserHost>;

/// Attach a loader if the page has the feed's container
pub fn attach(
    window: &Window,
    document: &Document,
    config: FeedConfig,
) -> FeedResult<Option<Rc<BrowserLoader>>> {
    let Some(container) = DomContainer::find(document, &config) else {
        debug!("No #{} on this page, skipping", config.container_id);
        return Ok(None);
    };

    let container_id = config.container_id.clone();
    let loader = Rc::new(IncrementalFeedLoader::new(
        config,
        container,
        FetchSource::new(window.clone()),
        BrowserHost::new(window.clone(), document.clone()),
    )?);
    bind_scroll(window, Rc::clone(&loader))?;

    info!("Infinite scroll attached to #{}", container_id);
    Ok(Some(loader))
}

/// Route window scroll events to the loader for the rest of the page view
fn bind_scroll(window: &Window, loader: Rc<BrowserLoader>) -> FeedResult<()> {
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        loader.on_scroll();
    });

    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(|e| FeedError::Dom(format!("{:?}", e)))?;
    on_scroll.forget();
    Ok(())
}
