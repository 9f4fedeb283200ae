use crate::{
    dom::{Document, DomError},
    entities::geo::GeoPoint,
};

pub const DEFAULT_OVERVIEW_MAP_ID: &str = "multimap";

pub trait OverviewMapGateway {
    fn mark_user_position(&self, pos: GeoPoint) -> Result<(), DomError>;
}

/// A static map image whose URL accepts additional `markers` parameters.
#[derive(Debug)]
pub struct StaticMapImage<'a, D> {
    doc: &'a D,
    id: String,
}

impl<'a, D> StaticMapImage<'a, D> {
    pub fn new(doc: &'a D, id: impl Into<String>) -> Self {
        Self { doc, id: id.into() }
    }
}

impl<D: Document> OverviewMapGateway for StaticMapImage<'_, D> {
    fn mark_user_position(&self, pos: GeoPoint) -> Result<(), DomError> {
        let Some(img) = self.doc.element_by_id(&self.id) else {
            log::debug!("No overview map '{}' found", self.id);
            return Ok(());
        };
        let src = self.doc.attribute(&img, "src").unwrap_or_default();
        let src = format!("{src}&markers=color:blue|size:small|{pos}");
        self.doc.set_attribute(&img, "src", &src)
    }
}
