//! Inline styles, content slots and the `Node` tree panels are built from.

use crate::geometry::Dimensions;

/// Format a length in px. Whole numbers print without a fraction.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Format a duration in ms.
#[must_use]
pub fn ms(value: f64) -> String {
    format!("{value}ms")
}

/// Ordered inline style declarations.
///
/// Setting a property twice replaces the earlier value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    decls: Vec<(&'static str, String)>,
}

impl Style {
    /// Empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Builder shorthand for a px length.
    #[must_use]
    pub fn with_px(self, property: &'static str, value: f64) -> Self {
        self.with(property, px(value))
    }

    /// Set or replace one declaration.
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((property, value)),
        }
    }

    /// Value of a property, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Whether no declarations are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl From<&Dimensions> for Style {
    fn from(dims: &Dimensions) -> Self {
        Self::new()
            .with_px("width", dims.width)
            .with_px("height", dims.height)
            .with_px("left", dims.left)
            .with_px("top", dims.top)
    }
}

/// Host-owned content a node refers to instead of embedding markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// What the closed element shows.
    Initial,
    /// What the open element shows.
    Final,
}

/// A child of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Nested element.
    Node(Node),
    /// A copy of host content.
    Slot(Slot),
}

/// A `div` with classes, inline style and children.
///
/// Built with chained calls and handed to the surface, which turns it into
/// real elements. Content never passes through markup strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Class list, in order.
    pub classes: Vec<&'static str>,
    /// Inline style.
    pub style: Style,
    /// Children, in order.
    pub children: Vec<Child>,
}

impl Node {
    /// Empty `div`.
    #[must_use]
    pub fn div() -> Self {
        Self::default()
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    /// Replace the inline style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn child(mut self, node: Self) -> Self {
        self.children.push(Child::Node(node));
        self
    }

    /// Append a child element if present.
    #[must_use]
    pub fn maybe_child(self, node: Option<Self>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// Append host content.
    #[must_use]
    pub fn slot(mut self, slot: Slot) -> Self {
        self.children.push(Child::Slot(slot));
        self
    }

    /// Whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Direct child elements, skipping slots.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|c| match c {
            Child::Node(n) => Some(n),
            Child::Slot(_) => None,
        })
    }

    /// First direct child element carrying `class`.
    #[must_use]
    pub fn find_child(&self, class: &str) -> Option<&Self> {
        self.child_nodes().find(|n| n.has_class(class))
    }

    /// Slots anywhere below this node, depth first.
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        let mut out = Vec::new();
        self.collect_slots(&mut out);
        out
    }

    fn collect_slots(&self, out: &mut Vec<Slot>) {
        for child in &self.children {
            match child {
                Child::Node(n) => n.collect_slots(out),
                Child::Slot(s) => out.push(*s),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formatting_drops_whole_fractions() {
        assert_eq!(px(100.0), "100px");
        assert_eq!(px(-12.5), "-12.5px");
        assert_eq!(ms(225.0), "225ms");
    }

    #[test]
    fn style_replaces_in_place() {
        let mut style = Style::new().with("opacity", "0").with_px("width", 10.0);
        style.set("opacity", "0.5");
        assert_eq!(style.get("opacity"), Some("0.5"));
        let decls: Vec<_> = style.iter().collect();
        assert_eq!(decls, vec![("opacity", "0.5"), ("width", "10px")]);
    }

    #[test]
    fn dimensions_become_positioned_style() {
        let style = Style::from(&Dimensions {
            width: 200.0,
            height: 100.0,
            left: -100.0,
            top: 0.0,
        });
        assert_eq!(style.get("width"), Some("200px"));
        assert_eq!(style.get("left"), Some("-100px"));
        assert_eq!(style.get("top"), Some("0px"));
    }

    #[test]
    fn builder_nests_and_finds() {
        let node = Node::div()
            .class("uc-part")
            .child(Node::div().class("uc-front").slot(Slot::Initial))
            .child(Node::div().class("uc-back"));
        assert!(node.has_class("uc-part"));
        assert_eq!(node.child_nodes().count(), 2);
        assert!(node.find_child("uc-back").is_some());
        assert_eq!(node.slots(), vec![Slot::Initial]);
    }
}
