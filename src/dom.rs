//! DOM Container
//!
//! Card container backed by a live element. The rendered cards are the
//! pagination state, so every read goes back to the DOM.

use feed_loader::{Card, FeedConfig, FeedContainer, FeedError, FeedResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList};

pub struct DomContainer {
    document: Document,
    element: Element,
    card_selector: String,
}

impl DomContainer {
    /// Locate the container for a feed; `None` when the page does not have one
    pub fn find(document: &Document, config: &FeedConfig) -> Option<Self> {
        let element = document.get_element_by_id(&config.container_id)?;
        Some(Self {
            document: document.clone(),
            element,
            card_selector: config.card_selector.clone(),
        })
    }

    fn cards(&self) -> Option<NodeList> {
        self.element.query_selector_all(&self.card_selector).ok()
    }
}

impl FeedContainer for DomContainer {
    fn last_card_attribute(&self, name: &str) -> Option<String> {
        let cards = self.cards()?;
        let last = cards.item(cards.length().checked_sub(1)?)?;
        last.dyn_into::<Element>().ok()?.get_attribute(name)
    }

    fn card_count(&self) -> usize {
        self.cards().map(|cards| cards.length() as usize).unwrap_or(0)
    }

    fn append_page(&self, cards: &[Card]) -> FeedResult<()> {
        // Build off-document, then attach the whole page in one insertion
        let page = self.document.create_document_fragment();
        for card in cards {
            page.append_child(&*render(&self.document, card)?).map_err(dom_error)?;
        }
        self.element.append_child(&page).map_err(dom_error)?;
        Ok(())
    }
}

/// Build real elements from a card tree. Text goes in as text content.
pub fn render(document: &Document, card: &Card) -> FeedResult<Element> {
    let element = document.create_element(&card.tag).map_err(dom_error)?;
    if !card.classes.is_empty() {
        element.set_attribute("class", &card.class_name()).map_err(dom_error)?;
    }
    for (name, value) in &card.attributes {
        element.set_attribute(name, value).map_err(dom_error)?;
    }
    if let Some(text) = &card.text {
        element.set_text_content(Some(text));
    }
    for child in &card.children {
        element.append_child(&*render(document, child)?).map_err(dom_error)?;
    }
    Ok(element)
}

fn dom_error(err: JsValue) -> FeedError {
    FeedError::Dom(format!("{:?}", err))
}
