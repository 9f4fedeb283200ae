
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use geojson::Feature;

use crate::{
    dom::{Document, DomError},
    entities::{
        geo::{GeoPoint, MapBbox, EARTH_RADIUS_KM},
        home_area::LegendEntry,
    },
    gateways::{
        geolocation::{GeolocationGateway, LocationError, PositionOptions},
        map::{MapError, MapWidget},
        overview_map::OverviewMapGateway,
    },
};

/// A position `km` north of `0,0`.
pub fn km_north_of_null_island(km: f64) -> GeoPoint {
    GeoPoint::from_lat_lng_deg((km / EARTH_RADIUS_KM).to_degrees(), 0.0)
}

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
pub struct MockElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub inner_html: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl MockElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.into());
        self
    }
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.into());
        self
    }
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
    pub fn inner_html(mut self, html: &str) -> Self {
        self.inner_html = html.into();
        self
    }
}

/// An in-memory element tree with a `body` root.
#[derive(Debug)]
pub struct MockDocument {
    elements: RefCell<Vec<MockElement>>,
    mutations: Cell<usize>,
}

impl Default for MockDocument {
    fn default() -> Self {
        Self {
            elements: RefCell::new(vec![MockElement::new("body")]),
            mutations: Cell::new(0),
        }
    }
}

impl MockDocument {
    /// Creates a detached element.
    pub fn create(&self, element: MockElement) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        elements.push(element);
        elements.len() - 1
    }

    /// Test setup, not counted as mutation.
    pub fn append(&self, parent: NodeId, element: MockElement) -> NodeId {
        let node = self.create(element);
        let mut elements = self.elements.borrow_mut();
        elements[node].parent = Some(parent);
        elements[parent].children.push(node);
        node
    }

    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.elements.borrow()[parent].children.clone()
    }

    /// The ids of the children, or their tag names if they have no id.
    pub fn child_ids(&self, parent: NodeId) -> Vec<String> {
        let elements = self.elements.borrow();
        elements[parent]
            .children
            .iter()
            .map(|&c| elements[c].id.clone().unwrap_or_else(|| elements[c].tag.clone()))
            .collect()
    }

    pub fn inner_html_of(&self, node: NodeId) -> String {
        self.elements.borrow()[node].inner_html.clone()
    }

    /// Number of modifications through the [`Document`] interface.
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    fn mutated(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let elements = self.elements.borrow();
        let mut found = vec![];
        let mut stack: Vec<_> = elements[node].children.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            found.push(n);
            stack.extend(elements[n].children.iter().rev());
        }
        found
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.elements.borrow()[node].classes.iter().any(|c| c == class)
    }
}

impl Document for MockDocument {
    type Node = NodeId;

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(ROOT)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let elements = self.elements.borrow();
        self.descendants(ROOT)
            .into_iter()
            .find(|n| elements[*n].id.as_deref() == Some(id))
    }

    fn first_descendant_by_class(&self, node: &NodeId, class: &str) -> Option<NodeId> {
        self.descendants(*node)
            .into_iter()
            .find(|n| self.has_class(*n, class))
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements.borrow()[*node].attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.mutated();
        self.elements.borrow_mut()[*node]
            .attributes
            .insert(name.into(), value.into());
        Ok(())
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) -> Result<(), DomError> {
        self.mutated();
        self.elements.borrow_mut()[*node].inner_html = html.into();
        Ok(())
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.elements.borrow()[*node].parent
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let elements = self.elements.borrow();
        let parent = elements[*node].parent?;
        let siblings = &elements[parent].children;
        let pos = siblings.iter().position(|n| n == node)?;
        siblings.get(pos + 1).copied()
    }

    fn remove_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        self.mutated();
        let mut elements = self.elements.borrow_mut();
        let pos = elements[*parent]
            .children
            .iter()
            .position(|n| n == child)
            .ok_or_else(|| DomError(format!("{child} is not a child of {parent}")))?;
        elements[*parent].children.remove(pos);
        elements[*child].parent = None;
        Ok(())
    }

    fn insert_before(
        &self,
        parent: &NodeId,
        child: &NodeId,
        reference: Option<&NodeId>,
    ) -> Result<(), DomError> {
        self.mutated();
        let mut elements = self.elements.borrow_mut();
        if elements[*child].parent.is_some() {
            return Err(DomError(format!("{child} is still attached")));
        }
        let pos = match reference {
            Some(reference) => elements[*parent]
                .children
                .iter()
                .position(|n| n == reference)
                .ok_or_else(|| DomError(format!("{reference} is not a child of {parent}")))?,
            None => elements[*parent].children.len(),
        };
        elements[*parent].children.insert(pos, *child);
        elements[*child].parent = Some(*parent);
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockGeolocation {
    result: Result<GeoPoint, LocationError>,
    requests: Cell<usize>,
    last_options: Cell<Option<PositionOptions>>,
}

impl MockGeolocation {
    pub fn at(pos: GeoPoint) -> Self {
        Self::new(Ok(pos))
    }
    pub fn failing(err: LocationError) -> Self {
        Self::new(Err(err))
    }
    fn new(result: Result<GeoPoint, LocationError>) -> Self {
        Self {
            result,
            requests: Cell::new(0),
            last_options: Cell::new(None),
        }
    }
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
    pub fn last_options(&self) -> Option<PositionOptions> {
        self.last_options.get()
    }
}

impl GeolocationGateway for MockGeolocation {
    async fn current_position(&self, options: &PositionOptions) -> Result<GeoPoint, LocationError> {
        self.requests.set(self.requests.get() + 1);
        self.last_options.set(Some(*options));
        self.result.clone()
    }
}

#[derive(Debug, Default)]
pub struct MockOverviewMap {
    marked: RefCell<Vec<GeoPoint>>,
}

impl MockOverviewMap {
    pub fn marked(&self) -> Vec<GeoPoint> {
        self.marked.borrow().clone()
    }
}

impl OverviewMapGateway for MockOverviewMap {
    fn mark_user_position(&self, pos: GeoPoint) -> Result<(), DomError> {
        self.marked.borrow_mut().push(pos);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockMap {
    features: RefCell<Vec<Feature>>,
    bounds: RefCell<Vec<MapBbox>>,
    legend: Option<RefCell<Vec<LegendEntry>>>,
}

impl MockMap {
    pub fn with_legend() -> Self {
        Self {
            legend: Some(RefCell::default()),
            ..Default::default()
        }
    }
    pub fn features(&self) -> Vec<Feature> {
        self.features.borrow().clone()
    }
    pub fn bounds(&self) -> Vec<MapBbox> {
        self.bounds.borrow().clone()
    }
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.legend
            .as_ref()
            .map(|l| l.borrow().clone())
            .unwrap_or_default()
    }
}

impl MapWidget for MockMap {
    fn add_geo_json(&self, feature: &Feature) -> Result<(), MapError> {
        self.features.borrow_mut().push(feature.clone());
        Ok(())
    }

    fn fit_bounds(&self, bbox: &MapBbox) -> Result<(), MapError> {
        self.bounds.borrow_mut().push(*bbox);
        Ok(())
    }

    fn has_legend(&self) -> bool {
        self.legend.is_some()
    }

    fn append_legend_entry(&self, entry: &LegendEntry) -> Result<(), MapError> {
        let legend = self
            .legend
            .as_ref()
            .ok_or_else(|| MapError("no legend".into()))?;
        legend.borrow_mut().push(entry.clone());
        Ok(())
    }
}
