//! Extraction of result records from raw response bodies.
//!
//! [`Markup`] and [`Node`] wrap `scraper` with a deliberately small surface:
//! select containers by a marker, then reach into them with guarded
//! accessors that return `None` instead of panicking on missing nodes.

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;
use crate::ResultRecord;

/// Converts a fetched body into records. Pure and synchronous.
pub trait Extractor: Send + Sync {
    /// Extracts records in document order.
    fn extract(&self, body: &str) -> Result<Vec<ResultRecord>, ParseError>;
}

/// Compiles a CSS selector.
pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Pattern(format!("{}: {:?}", css, e)))
}

/// A parsed HTML document.
pub struct Markup {
    document: Html,
}

impl Markup {
    /// Parses a full HTML document. Never fails; malformed markup is repaired.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Iterates over every element matching `marker`, in document order.
    pub fn select<'a>(&'a self, marker: &'a Selector) -> impl Iterator<Item = Node<'a>> + 'a {
        self.document.select(marker).map(Node::from)
    }
}

/// An element inside a [`Markup`] document.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Node<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Node<'a> {
    /// Returns the `index`-th descendant matching `selector`, if any.
    pub fn nth(&self, selector: &Selector, index: usize) -> Option<Node<'a>> {
        self.element.select(selector).nth(index).map(Node::from)
    }

    /// Returns the first descendant matching `selector`, if any.
    pub fn first(&self, selector: &Selector) -> Option<Node<'a>> {
        self.nth(selector, 0)
    }

    /// Returns the last descendant matching `selector`, if any.
    pub fn last(&self, selector: &Selector) -> Option<Node<'a>> {
        self.element.select(selector).last().map(Node::from)
    }

    /// Returns the element's text content, trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}
