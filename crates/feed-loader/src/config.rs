//! Feed Configuration
//!
//! Everything that differs between call sites: where the cards live, how
//! the cursor is read back, which endpoint to page, and how cards look.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::endpoint::CursorParam;
use crate::error::{FeedError, FeedResult};
use crate::template::TemplateKind;

/// Distance from the bottom, in pixels, below which the page counts as near the bottom
pub const DEFAULT_THRESHOLD_PX: f64 = 50.0;

/// Minimum time between two bottom checks
pub const DEFAULT_THROTTLE_MS: u32 = 1000;

/// How long a page request may take before it is abandoned
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

pub const DEFAULT_ENDPOINT: &str = "/trend";

/// One feed on one page.
///
/// Deserialises from camelCase keys; omitted keys fall back to the
/// trends preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    /// Id of the element holding the cards
    pub container_id: String,
    /// Selector matching cards inside the container
    pub card_selector: String,
    /// Attribute carrying the cursor on each card
    pub cursor_attribute: String,
    /// Item field copied into the cursor attribute
    pub cursor_field: String,
    pub endpoint: String,
    pub cursor_param: CursorParam,
    pub template: TemplateKind,
    pub threshold_px: f64,
    pub throttle_ms: u32,
    pub request_timeout_ms: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::trends()
    }
}

impl FeedConfig {
    /// Project trends: numeric ids, paged with `start_id`
    pub fn trends() -> Self {
        Self {
            container_id: "trends-container".to_string(),
            card_selector: ".card".to_string(),
            cursor_attribute: "data-trendid".to_string(),
            cursor_field: "id".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cursor_param: CursorParam::StartId,
            template: TemplateKind::Trend,
            threshold_px: DEFAULT_THRESHOLD_PX,
            throttle_ms: DEFAULT_THROTTLE_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    /// Home page activity: dates, paged with `before`
    pub fn activity() -> Self {
        Self {
            container_id: "trend-container".to_string(),
            card_selector: ".card-item".to_string(),
            cursor_attribute: "data-date".to_string(),
            cursor_field: "date".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cursor_param: CursorParam::Before,
            template: TemplateKind::Activity,
            threshold_px: DEFAULT_THRESHOLD_PX,
            throttle_ms: DEFAULT_THROTTLE_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }

    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.throttle_ms))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.request_timeout_ms))
    }

    pub fn validate(&self) -> FeedResult<()> {
        let required = [
            ("containerId", &self.container_id),
            ("cardSelector", &self.card_selector),
            ("cursorAttribute", &self.cursor_attribute),
            ("cursorField", &self.cursor_field),
            ("endpoint", &self.endpoint),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(FeedError::Config(format!("{} must not be empty", name)));
        }
        if !self.threshold_px.is_finite() || self.threshold_px <= 0.0 {
            return Err(FeedError::Config(format!(
                "thresholdPx must be a positive number, got {}",
                self.threshold_px
            )));
        }
        if self.throttle_ms == 0 {
            return Err(FeedError::Config("throttleMs must be greater than zero".to_string()));
        }
        if self.request_timeout_ms == 0 {
            return Err(FeedError::Config(
                "requestTimeoutMs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
