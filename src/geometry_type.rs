use std::fmt::Display;

/// The seven standard geometry kinds representable in WKT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// A single position.
    Point,
    /// An ordered sequence of positions.
    LineString,
    /// An ordered set of rings, the first exterior, the rest holes.
    Polygon,
    /// A set of points.
    MultiPoint,
    /// A set of line strings.
    MultiLineString,
    /// A set of polygons.
    MultiPolygon,
    /// A heterogeneous set of geometries.
    GeometryCollection,
}

impl GeometryType {
    /// The WKT tag for this kind, in its canonical mixed case.
    pub fn tag(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
