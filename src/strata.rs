//! Soil strata classification for clickable tunnel geometry.
//!
//! Strata cubes carry a surface material whose name encodes the simulated
//! soil layer. Engines commonly decorate instanced material names with a
//! suffix such as `" (Instance)"`, so lookups only consider the text before
//! the first space.

use serde::Serialize;

use crate::STRATA_OBJECT_PREFIX;

/// Soil stratum identified from a surface material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrataType {
    /// `Material_1`
    MiscellaneousFill,
    /// `Material_2`
    PlainFill,
    /// `Material_3`
    SiltyClay,
    /// `Material_4`
    Silt,
    /// `Material_5`
    ArgillaceousSilt,
    /// `Material_6`
    FineSand,
    /// `Material_7`
    SiltySand,
    /// `Material_8`
    GravellySand,
    /// Any material outside the known table.
    Unknown,
}

impl StrataType {
    /// Every known stratum, in material order.
    pub const KNOWN: [Self; 8] = [
        Self::MiscellaneousFill,
        Self::PlainFill,
        Self::SiltyClay,
        Self::Silt,
        Self::ArgillaceousSilt,
        Self::FineSand,
        Self::SiltySand,
        Self::GravellySand,
    ];

    /// Classifies a surface material name.
    ///
    /// Anything after the first space is ignored. Unrecognised, empty or
    /// malformed names yield [`StrataType::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tunnelview::strata::StrataType;
    ///
    /// assert_eq!(
    ///     StrataType::from_material_name("Material_3 (Instance)"),
    ///     StrataType::SiltyClay
    /// );
    /// assert_eq!(StrataType::from_material_name(""), StrataType::Unknown);
    /// ```
    #[must_use]
    pub fn from_material_name(material: &str) -> Self {
        let base = material.split(' ').next().unwrap_or_default();
        match base {
            "Material_1" => Self::MiscellaneousFill,
            "Material_2" => Self::PlainFill,
            "Material_3" => Self::SiltyClay,
            "Material_4" => Self::Silt,
            "Material_5" => Self::ArgillaceousSilt,
            "Material_6" => Self::FineSand,
            "Material_7" => Self::SiltySand,
            "Material_8" => Self::GravellySand,
            _ => Self::Unknown,
        }
    }

    /// Human-readable description shown on the floating label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MiscellaneousFill => "Miscellaneous fill",
            Self::PlainFill => "Plain fill",
            Self::SiltyClay => "Silty clay",
            Self::Silt => "Silt",
            Self::ArgillaceousSilt => "Argillaceous silt",
            Self::FineSand => "Fine sand",
            Self::SiltySand => "Silty sand",
            Self::GravellySand => "Gravelly sand",
            Self::Unknown => "Unknown material",
        }
    }
}

/// Returns `true` when an object name marks clickable strata geometry.
#[must_use]
pub fn is_strata_object(name: &str) -> bool {
    name.starts_with(STRATA_OBJECT_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Material_1", "Miscellaneous fill")]
    #[case("Material_2", "Plain fill")]
    #[case("Material_3", "Silty clay")]
    #[case("Material_4", "Silt")]
    #[case("Material_5", "Argillaceous silt")]
    #[case("Material_6", "Fine sand")]
    #[case("Material_7", "Silty sand")]
    #[case("Material_8", "Gravelly sand")]
    fn known_materials_map_to_table(#[case] material: &str, #[case] expected: &str) {
        assert_eq!(StrataType::from_material_name(material).label(), expected);
    }

    #[rstest]
    #[case::instance_suffix("Material_6 (Instance)", StrataType::FineSand)]
    #[case::double_space("Material_8  extra", StrataType::GravellySand)]
    fn suffix_after_first_space_is_ignored(#[case] material: &str, #[case] expected: StrataType) {
        assert_eq!(StrataType::from_material_name(material), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::leading_space(" Material_1")]
    #[case::out_of_range("Material_9")]
    #[case::wrong_case("material_1")]
    #[case::no_separator("Material_1(Instance)")]
    #[case::stone("Granite")]
    fn everything_else_is_unknown(#[case] material: &str) {
        let strata = StrataType::from_material_name(material);
        assert_eq!(strata, StrataType::Unknown);
        assert_eq!(strata.label(), "Unknown material");
    }

    #[test]
    fn known_table_has_distinct_labels() {
        let mut labels: Vec<_> = StrataType::KNOWN.iter().map(|s| s.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), StrataType::KNOWN.len());
    }

    #[rstest]
    #[case("BaseCube", true)]
    #[case("BaseCube (12)", true)]
    #[case("basecube", false)]
    #[case("TutorialsButton", false)]
    #[case("", false)]
    fn strata_prefix_detection(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_strata_object(name), expected);
    }
}
