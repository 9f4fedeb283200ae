use super::{prelude::*, RankedCar, Ranking};

/// Writes the distance of each car into its label.
///
/// Labels of cars with an unknown distance are left as they are.
/// Returns the number of updated labels.
pub fn annotate_distances<D: Document>(doc: &D, ranking: &Ranking<D::Node>) -> Result<usize> {
    let mut count = 0;
    for RankedCar {
        car,
        distance_km,
        walk_time,
    } in &ranking.ordered
    {
        let Some(distance_km) = distance_km else {
            continue;
        };
        let html = car.label.templates.render(*distance_km, *walk_time);
        doc.set_inner_html(&car.label.node, &html)?;
        count += 1;
    }
    Ok(count)
}
