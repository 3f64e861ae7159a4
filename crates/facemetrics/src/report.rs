//! Results text for a computed polygon.
//!
//! Mirrors what the presentation collaborator shows the user: every value at
//! 4 decimals with the unit's label and power suffix. Input values are in
//! inches (the base unit); the chosen unit only rescales the output.

use crate::section::PolygonProperties;
use crate::units::LinearUnit;

/// Render the properties block in the given unit.
pub fn format_properties(props: &PolygonProperties, unit: LinearUnit) -> String {
    let u = unit.label();
    let c = props.centroid;
    format!(
        "Face properties (in current model units):\n\n\
         Centroid = [{:.4},{:.4},{:.4}] (x,y,z {u} from origin)\n\
         Area = {:.4} {u}^2\n\
         Perimeter = {:.4} {u}\n\
         Ix = {:.4} {u}^4\n\
         Iy = {:.4} {u}^4\n\
         Ixy = {:.4} {u}^4\n\
         rx = {:.4} {u}\n\
         ry = {:.4} {u}",
        unit.length_from_inches(c.x),
        unit.length_from_inches(c.y),
        unit.length_from_inches(c.z),
        unit.area_from_inches(props.area),
        unit.length_from_inches(props.perimeter),
        unit.moment_from_inches(props.ix),
        unit.moment_from_inches(props.iy),
        unit.moment_from_inches(props.ixy),
        unit.length_from_inches(props.rx),
        unit.length_from_inches(props.ry),
    )
}
