use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::geometry_type::GeometryType;

/// Read access to the structure of an arbitrary geometry representation.
///
/// The [`Generator`](crate::Generator) never inspects geometry values
/// directly; everything it knows about a geometry it learns through an
/// implementation of this trait. Implement it once per concrete geometry
/// family, with [`Geometry`](Extractor::Geometry) as a cheap handle to a
/// node of that family (see [`GeoExtractor`](crate::GeoExtractor) for an
/// implementation over [`geo`] types).
///
/// Child lookups return the children in output order. Any `Err` raised
/// by any method surfaces from
/// [`Generator::generate`](crate::Generator::generate) wrapped as
/// [`WktError::Generation`](crate::WktError::Generation); generation is
/// not retried and no partial output is produced.
pub trait Extractor {
    /// A node of the geometry family this extractor understands.
    type Geometry;

    /// The error raised when a lookup fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The kind of the given geometry.
    fn extract_type(&self, geometry: &Self::Geometry) -> Result<GeometryType, Self::Error>;

    /// Which optional ordinates the geometry's coordinates carry.
    fn extract_dimension(&self, geometry: &Self::Geometry) -> Result<Dimension, Self::Error>;

    /// The spatial reference identifier of the geometry, if it has one.
    fn extract_srid(&self, geometry: &Self::Geometry) -> Result<Option<i32>, Self::Error>;

    /// The coordinates of a point, or `None` when the point is empty.
    fn extract_coordinates_from_point(
        &self,
        point: &Self::Geometry,
    ) -> Result<Option<Coord>, Self::Error>;

    /// The ordered points of a line string.
    fn extract_points_from_line_string(
        &self,
        line_string: &Self::Geometry,
    ) -> Result<Vec<Self::Geometry>, Self::Error>;

    /// The ordered rings of a polygon, exterior first.
    fn extract_line_strings_from_polygon(
        &self,
        polygon: &Self::Geometry,
    ) -> Result<Vec<Self::Geometry>, Self::Error>;

    /// The ordered points of a multi point.
    fn extract_points_from_multi_point(
        &self,
        multi_point: &Self::Geometry,
    ) -> Result<Vec<Self::Geometry>, Self::Error>;

    /// The ordered line strings of a multi line string.
    fn extract_line_strings_from_multi_line_string(
        &self,
        multi_line_string: &Self::Geometry,
    ) -> Result<Vec<Self::Geometry>, Self::Error>;

    /// The ordered polygons of a multi polygon.
    fn extract_polygons_from_multi_polygon(
        &self,
        multi_polygon: &Self::Geometry,
    ) -> Result<Vec<Self::Geometry>, Self::Error>;

    /// The ordered members of a geometry collection.
    fn extract_geometries_from_collection(
        &self,
        collection: &Self::Geometry,
    ) -> Result<Vec<Self::Geometry>, Self::Error>;
}
