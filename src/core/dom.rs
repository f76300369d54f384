// src/core/dom.rs
//! Read-only document tree contract.
//!
//! The selector never touches html5ever types directly. Everything it needs
//! from a page is expressed by [`DocNode`]: tag names, attributes, ordered
//! element children, and text. [`HtmlNode`] is the production implementation
//! over `markup5ever_rcdom`; tests can plug in any other tree.

use html5ever::{parse_document, tendril::TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::sanitize::normalize_ws;

pub trait DocNode: Clone {
    /// Lowercase element name; empty for the document root.
    fn tag_name(&self) -> &str;

    fn attr(&self, name: &str) -> Option<String>;

    /// Element children in document order (text and comments skipped).
    fn elements(&self) -> Vec<Self>;

    /// Concatenated descendant text, as-is.
    fn raw_text(&self) -> String;

    /// Descendant text with whitespace collapsed and trimmed.
    fn text(&self) -> String {
        normalize_ws(&self.raw_text())
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }

    /// `tag` with optional `class`, e.g. `h4.card-title`.
    fn is(&self, tag: &str, class: Option<&str>) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag) && class.is_none_or(|c| self.has_class(c))
    }

    /// First node in pre-order (self included) matching `pred`.
    fn find<P>(&self, mut pred: P) -> Option<Self>
    where
        P: FnMut(&Self) -> bool,
    {
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            if pred(&node) {
                return Some(node);
            }
            // reversed so the leftmost child is visited next
            stack.extend(node.elements().into_iter().rev());
        }
        None
    }

    /// Every node in pre-order (self included).
    fn preorder(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            stack.extend(node.elements().into_iter().rev());
            out.push(node);
        }
        out
    }
}

/// A parsed HTML page. Owns the tree; nodes are cheap `Rc` handles into it.
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    pub fn root(&self) -> HtmlNode {
        HtmlNode(self.dom.document.clone())
    }
}

/// Parse a full HTML page (html5ever is lenient: any input yields a tree).
pub fn parse_html(html: &str) -> HtmlDocument {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    HtmlDocument { dom }
}

#[derive(Clone, Debug)]
pub struct HtmlNode(Handle);

impl DocNode for HtmlNode {
    fn tag_name(&self) -> &str {
        match &self.0.data {
            NodeData::Element { name, .. } => &*name.local,
            _ => "",
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        match &self.0.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|a| &*a.name.local == name)
                .map(|a| a.value.to_string()),
            _ => None,
        }
    }

    fn elements(&self) -> Vec<Self> {
        self.0
            .children
            .borrow()
            .iter()
            .filter(|c| matches!(c.data, NodeData::Element { .. }))
            .map(|c| HtmlNode(c.clone()))
            .collect()
    }

    fn raw_text(&self) -> String {
        fn walk(node: &Handle, out: &mut String) {
            if let NodeData::Text { contents } = &node.data {
                out.push_str(&contents.borrow());
            }
            for child in node.children.borrow().iter() {
                walk(child, out);
            }
        }
        let mut out = s!();
        walk(&self.0, &mut out);
        out
    }
}
