use std::fmt::Display;

/// Which of the optional Z (elevation) and M (measure) ordinates a
/// geometry's coordinates carry.
///
/// Dimensionality is reported per geometry by the
/// [`Extractor`](crate::Extractor); members of a geometry collection may
/// each report their own, independently of the collection's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// Whether coordinates of this dimensionality carry a Z ordinate.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether coordinates of this dimensionality carry an M ordinate.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn size() {
        assert_eq!(Dimension::XY.size(), 2);
        assert_eq!(Dimension::XYZ.size(), 3);
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
    }

    #[test]
    fn ordinate_flags() {
        assert!(!Dimension::XY.has_z());
        assert!(!Dimension::XY.has_m());
        assert!(Dimension::XYZ.has_z());
        assert!(!Dimension::XYZ.has_m());
        assert!(!Dimension::XYM.has_z());
        assert!(Dimension::XYM.has_m());
        assert!(Dimension::XYZM.has_z());
        assert!(Dimension::XYZM.has_m());
    }
}
