use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("DOM operation failed: {0}")]
pub struct DomError(pub String);

/// The tree of page elements.
///
/// All methods take `&self` because the page is shared with the browser
/// and mutated through handles.
pub trait Document {
    type Node: Clone + PartialEq + fmt::Debug;

    /// All elements with the given class name in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// The first descendant of `node` with the given class name.
    fn first_descendant_by_class(&self, node: &Self::Node, class: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), DomError>;

    fn set_inner_html(&self, node: &Self::Node, html: &str) -> Result<(), DomError>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    fn remove_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Inserts `child` before `reference` or at the end if there is no reference.
    fn insert_before(
        &self,
        parent: &Self::Node,
        child: &Self::Node,
        reference: Option<&Self::Node>,
    ) -> Result<(), DomError>;
}
