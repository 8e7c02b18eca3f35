//! Card Templates
//!
//! Field-to-markup mappings for the two blog feeds, plus support for
//! caller-supplied closures. Templates only describe markup; the loader
//! stamps the cursor attribute afterwards.

use serde::{Deserialize, Serialize};
use crate::card::Card;
use crate::error::FeedResult;
use crate::item::FeedItem;

/// Renders one feed item into a card
pub trait CardTemplate {
    fn render(&self, item: &FeedItem) -> FeedResult<Card>;
}

impl<F> CardTemplate for F
where
    F: Fn(&FeedItem) -> FeedResult<Card>,
{
    fn render(&self, item: &FeedItem) -> FeedResult<Card> {
        self(item)
    }
}

/// Built-in templates selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Project trend card: `{id, title, body, time, project}`
    #[default]
    Trend,
    /// Repository activity card: `{date, author, repo_name, summary, body}`
    Activity,
}

impl TemplateKind {
    pub fn template(&self) -> Box<dyn CardTemplate> {
        match self {
            TemplateKind::Trend => Box::new(TrendCard),
            TemplateKind::Activity => Box::new(ActivityCard),
        }
    }
}

/// Card used on the trends page
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendCard;

impl CardTemplate for TrendCard {
    fn render(&self, item: &FeedItem) -> FeedResult<Card> {
        let footer = format!(
            "{} 发布在 {}",
            item.text_or_empty("time"),
            item.text_or_empty("project")
        );

        Ok(Card::new("div")
            .class("card mb-3")
            .child(
                Card::new("div")
                    .class("card-body")
                    .child(Card::new("h4").class("card-title").text(item.text_or_empty("title")))
                    .child(Card::new("div").class("card-text").text(item.text_or_empty("body"))),
            )
            .child(Card::new("div").class("card-footer text-muted").text(footer)))
    }
}

/// Card used on the home page activity feed
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityCard;

impl CardTemplate for ActivityCard {
    fn render(&self, item: &FeedItem) -> FeedResult<Card> {
        let header = format!(
            "{} {} 发布在 {}",
            item.text_or_empty("date"),
            item.text_or_empty("author"),
            item.text_or_empty("repo_name")
        );

        Ok(Card::new("div")
            .class("card mb-3 card-item")
            .child(
                Card::new("div")
                    .class("card-header font-italic")
                    .child(Card::new("small").text(header)),
            )
            .child(
                Card::new("div")
                    .class("card-body")
                    .child(Card::new("h5").class("card-title").text(item.text_or_empty("summary")))
                    .child(Card::new("p").class("card-text").text(item.text_or_empty("body"))),
            ))
    }
}
