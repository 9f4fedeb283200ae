use super::{prelude::*, Ranking};

/// Moves the car elements into the ranked order.
pub fn reconcile_list<D: Document>(doc: &D, ranking: &Ranking<D::Node>) -> Result<()> {
    if !ranking.should_reorder {
        return Ok(());
    }
    let nodes: Vec<_> = ranking.ordered.iter().map(|c| &c.car.node).collect();
    reorder_nodes(doc, &nodes)
}

/// Puts `nodes` next to each other in the given order.
///
/// Each node is removed from wherever it is and inserted after its
/// predecessor. The first node is inserted after the second one, which
/// keeps it inside the list. This works without a wrapping element, so
/// the list may share its parent with unrelated siblings that are never moved.
pub fn reorder_nodes<D: Document>(doc: &D, nodes: &[&D::Node]) -> Result<()> {
    if nodes.len() < 2 {
        return Ok(());
    }
    for (i, node) in nodes.iter().enumerate() {
        let anchor = if i == 0 { nodes[1] } else { nodes[i - 1] };
        let anchor_parent = doc.parent(anchor).ok_or(Error::MissingParent)?;
        let parent = doc.parent(node).ok_or(Error::MissingParent)?;
        doc.remove_child(&parent, node)?;
        // evaluated after the removal: the anchor may have been followed by the node
        let reference = doc.next_sibling(anchor);
        doc.insert_before(&anchor_parent, node, reference.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::{builders::PageBuilder, MockDocument, MockElement, ROOT};

    #[test]
    fn reorder_interleaved_with_unrelated_siblings() {
        let doc = MockDocument::default();
        let header = doc.append(ROOT, MockElement::new("h1").id("header"));
        let c = doc.append(ROOT, MockElement::new("p").id("C"));
        let a = doc.append(ROOT, MockElement::new("p").id("A"));
        let b = doc.append(ROOT, MockElement::new("p").id("B"));
        let footer = doc.append(ROOT, MockElement::new("footer").id("footer"));

        reorder_nodes(&doc, &[&a, &b, &c]).unwrap();

        assert_eq!(doc.child_ids(ROOT), vec!["header", "A", "B", "C", "footer"]);
        assert_eq!(doc.children(ROOT).first(), Some(&header));
        assert_eq!(doc.children(ROOT).last(), Some(&footer));
    }

    #[test]
    fn reorder_reversed_list() {
        let page = PageBuilder::default()
            .car("a", "0,0")
            .car("b", "0,0")
            .car("c", "0,0")
            .car("d", "0,0")
            .finish();
        let nodes = ["d", "c", "b", "a"].map(|id| page.car(id));
        reorder_nodes(&page.doc, &nodes.iter().collect::<Vec<_>>()).unwrap();
        assert_eq!(page.order(), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn keep_already_sorted_list() {
        let page = PageBuilder::default()
            .item("intro")
            .car("a", "0,0")
            .car("b", "0,0")
            .item("outro")
            .finish();
        let nodes = ["a", "b"].map(|id| page.car(id));
        reorder_nodes(&page.doc, &nodes.iter().collect::<Vec<_>>()).unwrap();
        assert_eq!(page.order(), vec!["intro", "a", "b", "outro"]);
    }

    #[test]
    fn separated_cars_are_joined() {
        let page = PageBuilder::default()
            .car("c", "0,0")
            .item("ad")
            .car("a", "0,0")
            .car("b", "0,0")
            .finish();
        let nodes = ["a", "b", "c"].map(|id| page.car(id));
        reorder_nodes(&page.doc, &nodes.iter().collect::<Vec<_>>()).unwrap();
        assert_eq!(page.order(), vec!["ad", "a", "b", "c"]);
    }

    #[test]
    fn cars_in_different_parents() {
        let doc = MockDocument::default();
        let first = doc.append(ROOT, MockElement::new("ul").id("first"));
        let second = doc.append(ROOT, MockElement::new("ul").id("second"));
        let a = doc.append(first, MockElement::new("li").id("a"));
        let b = doc.append(second, MockElement::new("li").id("b"));
        let c = doc.append(second, MockElement::new("li").id("c"));

        reorder_nodes(&doc, &[&c, &a, &b]).unwrap();

        // the list ends up where the nearest car was inserted first
        assert_eq!(doc.child_ids(first), vec!["c", "a", "b"]);
        assert!(doc.child_ids(second).is_empty());
    }

    #[test]
    fn single_node_is_never_moved() {
        let doc = MockDocument::default();
        let a = doc.append(ROOT, MockElement::new("p").id("a"));
        doc.append(ROOT, MockElement::new("p").id("x"));
        reorder_nodes(&doc, &[&a]).unwrap();
        assert_eq!(doc.child_ids(ROOT), vec!["a", "x"]);
        assert_eq!(doc.mutations(), 0);
    }

    #[test]
    fn detached_node() {
        let doc = MockDocument::default();
        let a = doc.append(ROOT, MockElement::new("p").id("a"));
        let detached = doc.create(MockElement::new("p").id("b"));
        let err = reorder_nodes(&doc, &[&detached, &a]).unwrap_err();
        assert!(matches!(err, Error::MissingParent));
    }

    #[test]
    fn detached_anchor_leaves_node_in_place() {
        let doc = MockDocument::default();
        let a = doc.append(ROOT, MockElement::new("p").id("a"));
        let detached = doc.create(MockElement::new("p").id("b"));
        let err = reorder_nodes(&doc, &[&a, &detached]).unwrap_err();
        assert!(matches!(err, Error::MissingParent));
        assert_eq!(doc.child_ids(ROOT), vec!["a"]);
        assert_eq!(doc.mutations(), 0);
    }
}
