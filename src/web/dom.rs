use carsort_core::dom::{Document, DomError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCollection, Node};

use super::js_error_message;

/// The page document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

fn nodes(collection: &HtmlCollection) -> Vec<Node> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .map(Node::from)
        .collect()
}

fn as_element<'n>(node: &'n Node) -> Result<&'n Element, DomError> {
    node.dyn_ref::<Element>()
        .ok_or_else(|| DomError(format!("{:?} is not an element", node.node_name())))
}

fn dom_error(err: &JsValue) -> DomError {
    DomError(js_error_message(err))
}

impl Document for WebDocument {
    type Node = Node;

    fn elements_by_class(&self, class: &str) -> Vec<Node> {
        nodes(&self.document.get_elements_by_class_name(class))
    }

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.document.get_element_by_id(id).map(Node::from)
    }

    fn first_descendant_by_class(&self, node: &Node, class: &str) -> Option<Node> {
        node.dyn_ref::<Element>()?
            .get_elements_by_class_name(class)
            .item(0)
            .map(Node::from)
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.dyn_ref::<Element>()?.get_attribute(name)
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) -> Result<(), DomError> {
        as_element(node)?
            .set_attribute(name, value)
            .map_err(|err| dom_error(&err))
    }

    fn set_inner_html(&self, node: &Node, html: &str) -> Result<(), DomError> {
        as_element(node)?.set_inner_html(html);
        Ok(())
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn next_sibling(&self, node: &Node) -> Option<Node> {
        node.next_sibling()
    }

    fn remove_child(&self, parent: &Node, child: &Node) -> Result<(), DomError> {
        parent
            .remove_child(child)
            .map(|_| ())
            .map_err(|err| dom_error(&err))
    }

    fn insert_before(
        &self,
        parent: &Node,
        child: &Node,
        reference: Option<&Node>,
    ) -> Result<(), DomError> {
        parent
            .insert_before(child, reference)
            .map(|_| ())
            .map_err(|err| dom_error(&err))
    }
}
