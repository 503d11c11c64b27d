//! Minimal element tree used for drag-start hit targets.
//!
//! Only the two things the resolver needs are modelled: an element's class
//! attribute and its parent.

use std::rc::Rc;

/// An element reported as a drag target.
///
/// Cloning is cheap; parents are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    class_name: String,
    parent: Option<Rc<Element>>,
}

impl Element {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            parent: None,
        }
    }

    /// Create a child of `parent` with the given class attribute.
    pub fn child_of(parent: &Rc<Element>, class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            parent: Some(Rc::clone(parent)),
        }
    }

    pub fn parent(&self) -> Option<&Element> {
        self.parent.as_deref()
    }
}

/// Trimmed class attribute of an element.
#[inline]
pub fn get_class_name(element: &Element) -> &str {
    element.class_name.trim()
}

/// Whether the element's class list contains `class`.
pub fn has_class(element: &Element, class: &str) -> bool {
    get_class_name(element).split_whitespace().any(|c| c == class)
}
