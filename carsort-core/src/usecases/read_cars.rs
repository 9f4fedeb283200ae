use super::prelude::*;
use crate::entities::template::Template;

/// Class and attribute names of the car list markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub item_class: String,
    /// Serialized `"lat,lng"`.
    pub location_attr: String,
    pub label_class: String,
    pub template_attr: String,
    pub minutes_template_attr: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            item_class: "sort".into(),
            location_attr: "data-loc".into(),
            label_class: "distance".into(),
            template_attr: "data-template".into(),
            minutes_template_attr: "data-template-minutes".into(),
        }
    }
}

/// Reads all cars of the page in document order.
///
/// A malformed location is not an error: the car ends up
/// with an unknown location and is never considered nearby.
pub fn read_cars<D: Document>(doc: &D, selectors: &Selectors) -> Result<Vec<Car<D::Node>>> {
    doc.elements_by_class(&selectors.item_class)
        .into_iter()
        .map(|node| read_car(doc, node, selectors))
        .collect()
}

fn read_car<D: Document>(doc: &D, node: D::Node, selectors: &Selectors) -> Result<Car<D::Node>> {
    let Selectors {
        location_attr,
        label_class,
        template_attr,
        minutes_template_attr,
        ..
    } = selectors;

    let loc = doc
        .attribute(&node, location_attr)
        .ok_or_else(|| Error::MissingAttribute(location_attr.clone()))?;
    let location = match loc.parse::<GeoPoint>() {
        Ok(pos) => Some(pos),
        Err(err) => {
            log::warn!("Invalid car location '{loc}': {err}");
            None
        }
    };

    let label = doc
        .first_descendant_by_class(&node, label_class)
        .ok_or_else(|| Error::MissingLabel(label_class.clone()))?;
    let distance = doc
        .attribute(&label, template_attr)
        .map(Template::from)
        .ok_or_else(|| Error::MissingAttribute(template_attr.clone()))?;
    let minutes = doc.attribute(&label, minutes_template_attr).map(Template::from);

    Ok(Car {
        location,
        node,
        label: DistanceLabel {
            node: label,
            templates: DistanceTemplates { distance, minutes },
        },
    })
}
