//! Linear units and conversion factors.
//!
//! The base unit is the inch (host-editor convention); every unit carries its
//! factor-to-inches, and area/moment conversions raise that factor to the
//! matching power. Callers pass the active unit explicitly — there is no
//! string sniffing of formatted values.

/// Linear display units supported by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinearUnit {
    Inch,
    Foot,
    Meter,
    Centimeter,
    Millimeter,
}

impl LinearUnit {
    /// Inches per one of this unit.
    #[inline]
    pub fn factor_to_inches(self) -> f64 {
        match self {
            LinearUnit::Inch => 1.0,
            LinearUnit::Foot => 12.0,
            LinearUnit::Meter => 100.0 / 2.54,
            LinearUnit::Centimeter => 1.0 / 2.54,
            LinearUnit::Millimeter => 1.0 / 25.4,
        }
    }

    /// Short label for formatted output.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            LinearUnit::Inch => "in",
            LinearUnit::Foot => "ft",
            LinearUnit::Meter => "m",
            LinearUnit::Centimeter => "cm",
            LinearUnit::Millimeter => "mm",
        }
    }

    /// Convert a length measured in inches into this unit.
    #[inline]
    pub fn length_from_inches(self, value: f64) -> f64 {
        value / self.factor_to_inches()
    }

    /// Convert an area measured in square inches into this unit.
    #[inline]
    pub fn area_from_inches(self, value: f64) -> f64 {
        value / self.factor_to_inches().powi(2)
    }

    /// Convert a second moment measured in inches^4 into this unit.
    #[inline]
    pub fn moment_from_inches(self, value: f64) -> f64 {
        value / self.factor_to_inches().powi(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn factor_table_matches_definitions() {
        assert_relative_eq!(LinearUnit::Inch.factor_to_inches(), 1.0);
        assert_relative_eq!(LinearUnit::Foot.factor_to_inches(), 12.0);
        assert_relative_eq!(LinearUnit::Meter.factor_to_inches(), 39.37007874015748);
        assert_relative_eq!(LinearUnit::Millimeter.factor_to_inches(), 1.0 / 25.4);
    }

    #[test]
    fn powers_track_dimension() {
        // 1 ft^2 = 144 in^2, 1 ft^4 = 20736 in^4.
        assert_relative_eq!(LinearUnit::Foot.length_from_inches(12.0), 1.0);
        assert_relative_eq!(LinearUnit::Foot.area_from_inches(144.0), 1.0);
        assert_relative_eq!(LinearUnit::Foot.moment_from_inches(20736.0), 1.0);
    }

    #[test]
    fn metric_round_trips() {
        // 1 in = 2.54 cm = 25.4 mm.
        assert_relative_eq!(LinearUnit::Centimeter.length_from_inches(1.0), 2.54);
        assert_relative_eq!(LinearUnit::Millimeter.length_from_inches(1.0), 25.4);
        assert_relative_eq!(LinearUnit::Meter.length_from_inches(39.37007874015748), 1.0);
    }
}
