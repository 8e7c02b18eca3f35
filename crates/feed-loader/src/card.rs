//! Card Nodes
//!
//! Host-independent element tree for one rendered feed item. The browser
//! binding turns it into real DOM; tests inspect it directly.

/// An element with classes, attributes, optional text and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    /// Set as text content, never parsed as markup
    pub text: Option<String>,
    pub children: Vec<Card>,
}

impl Card {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add space-separated classes
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Card) -> Self {
        self.children.push(child);
        self
    }

    /// Set or replace an attribute
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Classes joined for a `class` attribute
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Depth-first search for the first descendant (or self) with a class
    pub fn find_by_class(&self, class: &str) -> Option<&Card> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let card = Card::new("div")
            .class("card  mb-3")
            .attr("data-trendid", "7")
            .child(Card::new("h4").class("card-title").text("Hello"));

        assert_eq!(card.class_name(), "card mb-3");
        assert_eq!(card.get_attr("data-trendid"), Some("7"));
        assert_eq!(card.find_by_class("card-title").and_then(|c| c.text.as_deref()), Some("Hello"));
        assert!(card.find_by_class("card-footer").is_none());
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut card = Card::new("div").attr("data-date", "old");
        card.set_attr("data-date", "new");
        assert_eq!(card.attributes.len(), 1);
        assert_eq!(card.get_attr("data-date"), Some("new"));
    }
}
