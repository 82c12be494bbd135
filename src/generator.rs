use crate::coord::Coord;
use crate::dimension::Dimension;
use crate::error::{WktError, WktResult};
use crate::extractor::Extractor;
use crate::geometry_type::GeometryType;
use crate::options::{Dialect, GeneratorOptions};

const EMPTY: &str = "EMPTY";

/// Dialect-aware WKT generator over a pluggable [`Extractor`].
///
/// A generator is immutable after construction; concurrent
/// [`generate`](Generator::generate) calls are safe whenever the
/// extractor is safe for concurrent reads. Recursion depth equals the
/// nesting depth of the input geometry and is the caller's
/// responsibility to bound.
#[derive(Debug, Clone)]
pub struct Generator<E> {
    extractor: E,
    options: GeneratorOptions,
}

impl<E: Extractor> Generator<E> {
    /// Creates a generator with default options.
    pub fn new(extractor: E) -> Self {
        Self::with_options(extractor, GeneratorOptions::default())
    }

    /// Creates a generator with the given options.
    ///
    /// `emit_srid` is only meaningful under [`Dialect::Ewkt`] and is
    /// stored as `false` for every other dialect.
    pub fn with_options(extractor: E, mut options: GeneratorOptions) -> Self {
        options.emit_srid = options.emit_srid && options.dialect == Dialect::Ewkt;
        Generator { extractor, options }
    }

    /// The resolved options this generator was built with.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Renders the given geometry as WKT.
    ///
    /// Identical geometry content and options always produce identical
    /// output. Any error raised by the extractor surfaces as
    /// [`WktError::Generation`]; no partial output is returned.
    pub fn generate(&self, geometry: &E::Geometry) -> WktResult<String> {
        let wkt = self
            .encode_top_level(geometry)
            .map_err(|err| WktError::Generation(Box::new(err)))?;

        // The fold covers the SRID prefix as well.
        Ok(self.options.case.apply(wkt))
    }

    fn encode_top_level(&self, geometry: &E::Geometry) -> Result<String, E::Error> {
        let mut out = String::new();

        if self.options.emit_srid {
            if let Some(srid) = self.extractor.extract_srid(geometry)? {
                out.push_str(&format!("SRID={srid};"));
            }
        }

        let dimension = self.extractor.extract_dimension(geometry)?;
        out.push_str(&self.encode_geometry(geometry, dimension)?);
        Ok(out)
    }

    /// Encodes one geometry as `TAG [marker] (body | EMPTY)`.
    fn encode_geometry(
        &self,
        geometry: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        let geometry_type = self.extractor.extract_type(geometry)?;
        let body = self.encode_body(geometry_type, geometry, dimension)?;

        let mut out = String::with_capacity(geometry_type.tag().len() + body.len() + 4);
        out.push_str(geometry_type.tag());

        if self.options.dialect == Dialect::Wkt12 {
            let marker = match dimension {
                Dimension::XYZM => Some(" ZM "),
                Dimension::XYM => Some(" M "),
                Dimension::XYZ => Some(" Z "),
                Dimension::XY => None,
            };
            if let Some(marker) = marker {
                out.push_str(marker);
                out.push_str(&body);
                return Ok(out);
            }
        }

        if self.options.dialect == Dialect::Ewkt && dimension == Dimension::XYM {
            out.push('M');
        }

        if body == EMPTY {
            out.push(' ');
        }

        out.push_str(&body);
        Ok(out)
    }

    fn encode_body(
        &self,
        geometry_type: GeometryType,
        geometry: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        match geometry_type {
            GeometryType::Point => self.encode_point(geometry, dimension),
            GeometryType::LineString => self.encode_line_string(geometry, dimension),
            GeometryType::Polygon => self.encode_polygon(geometry, dimension),
            GeometryType::MultiPoint => self.encode_multi_point(geometry, dimension),
            GeometryType::MultiLineString => self.encode_multi_line_string(geometry, dimension),
            GeometryType::MultiPolygon => self.encode_multi_polygon(geometry, dimension),
            GeometryType::GeometryCollection => self.encode_geometry_collection(geometry),
        }
    }

    fn encode_point(
        &self,
        point: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        match self.extractor.extract_coordinates_from_point(point)? {
            Some(coord) => Ok(format!("({})", self.format_coord(Some(&coord), dimension))),
            None => Ok(EMPTY.to_string()),
        }
    }

    fn encode_line_string(
        &self,
        line_string: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        let points = self.extractor.extract_points_from_line_string(line_string)?;

        let mut parts = Vec::with_capacity(points.len());
        for point in &points {
            let coord = self.extractor.extract_coordinates_from_point(point)?;
            parts.push(self.format_coord(coord.as_ref(), dimension));
        }

        Ok(join_or_empty(parts))
    }

    fn encode_polygon(
        &self,
        polygon: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        let rings = self.extractor.extract_line_strings_from_polygon(polygon)?;

        let mut parts = Vec::with_capacity(rings.len());
        for ring in &rings {
            parts.push(self.encode_line_string(ring, dimension)?);
        }

        Ok(join_or_empty(parts))
    }

    fn encode_multi_point(
        &self,
        multi_point: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        let points = self.extractor.extract_points_from_multi_point(multi_point)?;

        let mut parts = Vec::with_capacity(points.len());
        for point in &points {
            parts.push(self.encode_point(point, dimension)?);
        }

        Ok(join_or_empty(parts))
    }

    fn encode_multi_line_string(
        &self,
        multi_line_string: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        let line_strings = self
            .extractor
            .extract_line_strings_from_multi_line_string(multi_line_string)?;

        let mut parts = Vec::with_capacity(line_strings.len());
        for line_string in &line_strings {
            parts.push(self.encode_line_string(line_string, dimension)?);
        }

        Ok(join_or_empty(parts))
    }

    fn encode_multi_polygon(
        &self,
        multi_polygon: &E::Geometry,
        dimension: Dimension,
    ) -> Result<String, E::Error> {
        let polygons = self
            .extractor
            .extract_polygons_from_multi_polygon(multi_polygon)?;

        let mut parts = Vec::with_capacity(polygons.len());
        for polygon in &polygons {
            parts.push(self.encode_polygon(polygon, dimension)?);
        }

        Ok(join_or_empty(parts))
    }

    fn encode_geometry_collection(
        &self,
        collection: &E::Geometry,
    ) -> Result<String, E::Error> {
        let geometries = self
            .extractor
            .extract_geometries_from_collection(collection)?;

        let mut parts = Vec::with_capacity(geometries.len());
        for geometry in &geometries {
            // Members carry their own dimensionality, independent of the
            // collection's.
            let dimension = self.extractor.extract_dimension(geometry)?;
            parts.push(self.encode_geometry(geometry, dimension)?);
        }

        Ok(join_or_empty(parts))
    }

    /// Renders `X Y [Z] [M]` at the configured precision, substituting
    /// `0` for any ordinate the extractor did not supply.
    fn format_coord(&self, coord: Option<&Coord>, dimension: Dimension) -> String {
        let precision = self.options.float_precision;

        let x = coord.map_or(0.0, |c| c.x);
        let y = coord.map_or(0.0, |c| c.y);
        let mut out = format!("{x:.precision$} {y:.precision$}");

        if self.options.dialect != Dialect::Wkt11Strict {
            if dimension.has_z() {
                let z = coord.and_then(|c| c.z).unwrap_or(0.0);
                out.push(' ');
                out.push_str(&format!("{z:.precision$}"));
            }
            if dimension.has_m() {
                let m = coord.and_then(|c| c.m).unwrap_or(0.0);
                out.push(' ');
                out.push_str(&format!("{m:.precision$}"));
            }
        }

        out
    }
}

fn join_or_empty(parts: Vec<String>) -> String {
    if parts.is_empty() {
        EMPTY.to_string()
    } else {
        format!("({})", parts.join(", "))
    }
}
