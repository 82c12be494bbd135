//! An [`Extractor`] over the `geo` geometry types.

use geo::{Geometry, Polygon};
use thiserror::Error;

use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::extractor::Extractor;
use crate::geometry_type::GeometryType;

/// Extracts WKT structure from [`geo::Geometry`] values.
///
/// The `geo` types are strictly two-dimensional, so the reported
/// dimensionality is always [`Dimension::XY`] and no SRID is attached.
/// `Line`, `Rect` and `Triangle` have no WKT tag of their own and are
/// exposed as a two-point line string and single-ring polygons
/// respectively.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoExtractor;

/// Error raised when a child lookup is invoked on the wrong geometry
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("incorrect geometry type for operation: expected {expected}")]
pub struct IncorrectGeometryType {
    /// The kind of geometry the lookup expected to receive.
    pub expected: GeometryType,
}

fn rings(polygon: &Polygon<f64>) -> Vec<Geometry<f64>> {
    let mut rings = Vec::with_capacity(1 + polygon.interiors().len());
    if !polygon.exterior().0.is_empty() {
        rings.push(Geometry::LineString(polygon.exterior().clone()));
    }
    rings.extend(
        polygon
            .interiors()
            .iter()
            .cloned()
            .map(Geometry::LineString),
    );
    rings
}

impl Extractor for GeoExtractor {
    type Geometry = Geometry<f64>;
    type Error = IncorrectGeometryType;

    fn extract_type(&self, geometry: &Geometry<f64>) -> Result<GeometryType, Self::Error> {
        Ok(match geometry {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Line(_) | Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
                GeometryType::Polygon
            }
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        })
    }

    fn extract_dimension(&self, _geometry: &Geometry<f64>) -> Result<Dimension, Self::Error> {
        Ok(Dimension::XY)
    }

    fn extract_srid(&self, _geometry: &Geometry<f64>) -> Result<Option<i32>, Self::Error> {
        Ok(None)
    }

    fn extract_coordinates_from_point(
        &self,
        point: &Geometry<f64>,
    ) -> Result<Option<Coord>, Self::Error> {
        match point {
            Geometry::Point(point) => Ok(Some(Coord::xy(point.x(), point.y()))),
            _ => Err(IncorrectGeometryType {
                expected: GeometryType::Point,
            }),
        }
    }

    fn extract_points_from_line_string(
        &self,
        line_string: &Geometry<f64>,
    ) -> Result<Vec<Geometry<f64>>, Self::Error> {
        match line_string {
            Geometry::LineString(line_string) => {
                Ok(line_string.points().map(Geometry::Point).collect())
            }
            Geometry::Line(line) => Ok(vec![
                Geometry::Point(line.start_point()),
                Geometry::Point(line.end_point()),
            ]),
            _ => Err(IncorrectGeometryType {
                expected: GeometryType::LineString,
            }),
        }
    }

    fn extract_line_strings_from_polygon(
        &self,
        polygon: &Geometry<f64>,
    ) -> Result<Vec<Geometry<f64>>, Self::Error> {
        match polygon {
            Geometry::Polygon(polygon) => Ok(rings(polygon)),
            Geometry::Rect(rect) => Ok(rings(&rect.to_polygon())),
            Geometry::Triangle(triangle) => Ok(rings(&triangle.to_polygon())),
            _ => Err(IncorrectGeometryType {
                expected: GeometryType::Polygon,
            }),
        }
    }

    fn extract_points_from_multi_point(
        &self,
        multi_point: &Geometry<f64>,
    ) -> Result<Vec<Geometry<f64>>, Self::Error> {
        match multi_point {
            Geometry::MultiPoint(multi_point) => {
                Ok(multi_point.0.iter().copied().map(Geometry::Point).collect())
            }
            _ => Err(IncorrectGeometryType {
                expected: GeometryType::MultiPoint,
            }),
        }
    }

    fn extract_line_strings_from_multi_line_string(
        &self,
        multi_line_string: &Geometry<f64>,
    ) -> Result<Vec<Geometry<f64>>, Self::Error> {
        match multi_line_string {
            Geometry::MultiLineString(multi_line_string) => Ok(multi_line_string
                .0
                .iter()
                .cloned()
                .map(Geometry::LineString)
                .collect()),
            _ => Err(IncorrectGeometryType {
                expected: GeometryType::MultiLineString,
            }),
        }
    }

    fn extract_polygons_from_multi_polygon(
        &self,
        multi_polygon: &Geometry<f64>,
    ) -> Result<Vec<Geometry<f64>>, Self::Error> {
        match multi_polygon {
            Geometry::MultiPolygon(multi_polygon) => Ok(multi_polygon
                .0
                .iter()
                .cloned()
                .map(Geometry::Polygon)
                .collect()),
            _ => Err(IncorrectGeometryType {
                expected: GeometryType::MultiPolygon,
            }),
        }
    }

    fn extract_geometries_from_collection(
        &self,
        collection: &Geometry<f64>,
    ) -> Result<Vec<Geometry<f64>>, Self::Error> {
        match collection {
            Geometry::GeometryCollection(collection) => Ok(collection.0.clone()),
            _ => Err(IncorrectGeometryType {
                expected: GeometryType::GeometryCollection,
            }),
        }
    }
}
