// SPDX-License-Identifier: MPL-2.0
//! In-memory display tree that toasts are attached to.
//!
//! A [`Document`] owns named [`Container`]s, and each container owns its
//! [`Element`]s for their whole lifetime. The notifier only keeps the
//! element id inside its pending timers.

use std::collections::HashMap;

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    /// Creates a new unique element ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single visual node: a class list, plain text and an optional opacity style.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    class_name: String,
    text: String,
    opacity: Option<f32>,
}

impl Element {
    /// Creates an element with a fresh id and no opacity style.
    ///
    /// `text` is kept verbatim; it is never interpreted as markup.
    pub fn new(class_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            class_name: class_name.into(),
            text: text.into(),
            opacity: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Space-separated class list.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns whether `class` is one of the element's classes.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The opacity style, `None` until something sets it.
    #[must_use]
    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    /// Opacity actually used for rendering.
    #[must_use]
    pub fn effective_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }
}

/// Ordered list of elements; new children go last.
#[derive(Debug, Clone, Default)]
pub struct Container {
    children: Vec<Element>,
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element` as the last child and returns its id.
    pub fn append(&mut self, element: Element) -> ElementId {
        let id = element.id();
        self.children.push(element);
        id
    }

    /// Detaches the element. Returns `true` if it was a child.
    pub fn remove(&mut self, id: ElementId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.children.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Sets the opacity style of a child. Returns `true` if it was found.
    pub fn set_opacity(&mut self, id: ElementId, opacity: f32) -> bool {
        match self.children.iter_mut().find(|e| e.id() == id) {
            Some(element) => {
                element.opacity = Some(opacity);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.children.iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.children.iter().position(|e| e.id() == id)
    }

    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Set of containers addressable by identifier.
#[derive(Debug, Clone, Default)]
pub struct Document {
    containers: HashMap<String, Container>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document holding one empty container named `id`.
    #[must_use]
    pub fn with_container(id: impl Into<String>) -> Self {
        let mut document = Self::new();
        document.insert_container(id);
        document
    }

    /// Registers an empty container, replacing any existing one with that id.
    pub fn insert_container(&mut self, id: impl Into<String>) -> &mut Container {
        let slot = self.containers.entry(id.into()).or_default();
        *slot = Container::new();
        slot
    }

    /// Removes a container together with all of its children.
    pub fn remove_container(&mut self, id: &str) -> Option<Container> {
        self.containers.remove(id)
    }

    #[must_use]
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    /// Returns whether the element is attached anywhere in the document.
    #[must_use]
    pub fn contains_element(&self, id: ElementId) -> bool {
        self.containers.values().any(|c| c.get(id).is_some())
    }
}
