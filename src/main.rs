//! Trend Feed Frontend Entry Point
//!
//! Adds infinite scroll to the blog's server-rendered feed pages.

mod dom;
mod feed;
mod fetch;
mod host;
mod logger;
mod page;

use log::{error, warn, LevelFilter};
use page::PageConfig;

fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let page = page::read(&window);
    let debug = matches!(&page, Ok(Some(p)) if p.debug);
    logger::init(if debug { LevelFilter::Debug } else { LevelFilter::Info });

    let page = match page {
        Ok(Some(page)) => page,
        Ok(None) => PageConfig::default(),
        Err(e) => {
            warn!("Ignoring FEED_CONFIG: {}", e);
            PageConfig::default()
        }
    };

    for config in page.feeds {
        let container_id = config.container_id.clone();
        if let Err(e) = feed::attach(&window, &document, config) {
            error!("Failed to attach feed #{}: {}", container_id, e);
        }
    }
}
