//! Fetch Source
//!
//! Page requests through `window.fetch`.

use async_trait::async_trait;
use feed_loader::{decode_page_str, FeedError, FeedItem, FeedResult, FeedSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

pub struct FetchSource {
    window: Window,
}

impl FetchSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

#[async_trait(?Send)]
impl FeedSource for FetchSource {
    async fn fetch_page(&self, url: &str) -> FeedResult<Vec<FeedItem>> {
        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(url, &init).map_err(network_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(network_error)?;

        let response = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| FeedError::Network("fetch did not resolve to a Response".to_string()))?;
        if !response.ok() {
            return Err(FeedError::Http { status: response.status() });
        }

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        decode_page_str(&text.as_string().unwrap_or_default())
    }
}

fn network_error(err: JsValue) -> FeedError {
    FeedError::Network(format!("{:?}", err))
}
