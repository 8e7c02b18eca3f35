//! Page Configuration
//!
//! Pages may set `window.FEED_CONFIG` before the module loads, as one feed
//! object, an array of feeds, or `{ debug, feeds }`. Without it, or when
//! `feeds` is omitted, both built-in feeds are tried.

use feed_loader::{FeedConfig, FeedError, FeedResult};
use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "FEED_CONFIG";

/// Only `debug` and `feeds` are accepted, so a lone feed object never
/// parses as a page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "builtin_feeds")]
    pub feeds: Vec<FeedConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            debug: false,
            feeds: builtin_feeds(),
        }
    }
}

fn builtin_feeds() -> Vec<FeedConfig> {
    vec![FeedConfig::trends(), FeedConfig::activity()]
}

/// Accepted shapes of `window.FEED_CONFIG`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPageConfig {
    Page(PageConfig),
    Feeds(Vec<FeedConfig>),
    Feed(FeedConfig),
}

impl From<RawPageConfig> for PageConfig {
    fn from(raw: RawPageConfig) -> Self {
        match raw {
            RawPageConfig::Page(page) => page,
            RawPageConfig::Feeds(feeds) => PageConfig { debug: false, feeds },
            RawPageConfig::Feed(feed) => PageConfig { debug: false, feeds: vec![feed] },
        }
    }
}

/// Read `window.FEED_CONFIG`; `Ok(None)` when the page does not set it
pub fn read(window: &web_sys::Window) -> FeedResult<Option<PageConfig>> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| FeedError::Config(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let raw: RawPageConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| FeedError::Config(e.to_string()))?;
    Ok(Some(raw.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_loader::{CursorParam, TemplateKind};

    fn parse(json: &str) -> PageConfig {
        serde_json::from_str::<RawPageConfig>(json).unwrap().into()
    }

    #[test]
    fn test_default_tries_both_feeds() {
        let page = PageConfig::default();
        assert_eq!(page.feeds, vec![FeedConfig::trends(), FeedConfig::activity()]);
    }

    #[test]
    fn test_single_feed_object() {
        let page = parse(r#"{"containerId": "feed", "cursorParam": "before"}"#);
        assert!(!page.debug);
        assert_eq!(page.feeds.len(), 1);
        assert_eq!(page.feeds[0].container_id, "feed");
        assert_eq!(page.feeds[0].cursor_param, CursorParam::Before);
    }

    #[test]
    fn test_feed_array() {
        let page = parse(r#"[{"template": "activity"}, {}]"#);
        assert_eq!(page.feeds.len(), 2);
        assert_eq!(page.feeds[0].template, TemplateKind::Activity);
        assert_eq!(page.feeds[1], FeedConfig::trends());
    }

    #[test]
    fn test_debug_only_keeps_builtin_feeds() {
        let page = parse(r#"{"debug": true}"#);
        assert!(page.debug);
        assert_eq!(page.feeds, PageConfig::default().feeds);

        assert_eq!(parse("{}"), PageConfig::default());
    }

    #[test]
    fn test_page_object_with_debug() {
        let page = parse(r#"{"debug": true, "feeds": [{"thresholdPx": 120}]}"#);
        assert!(page.debug);
        assert_eq!(page.feeds[0].threshold_px, 120.0);
    }
}
