//! Browser Host
//!
//! Viewport metrics from `window`/`document`, timers from `gloo-timers`,
//! tasks on the wasm-bindgen executor.

use feed_loader::{Host, LocalTask, ScrollMetrics};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use web_sys::{Document, Window};

pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Host for BrowserHost {
    fn metrics(&self) -> ScrollMetrics {
        let root = self.document.document_element();
        let scroll_height = root.as_ref().map(|e| e.scroll_height() as f64).unwrap_or(0.0);
        // Older engines report 0 from window and the real value on the root element
        let scroll_y = self
            .window
            .scroll_y()
            .ok()
            .filter(|y| *y > 0.0)
            .or_else(|| root.as_ref().map(|e| e.scroll_top() as f64))
            .unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .filter(|h| *h > 0.0)
            .or_else(|| root.as_ref().map(|e| e.client_height() as f64))
            .unwrap_or(0.0);

        ScrollMetrics::new(scroll_height, scroll_y, viewport_height)
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        Timeout::new(millis(delay), callback).forget();
    }

    fn sleep(&self, delay: Duration) -> LocalTask {
        Box::pin(TimeoutFuture::new(millis(delay)))
    }

    fn spawn_local(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
