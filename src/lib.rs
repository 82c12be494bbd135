//! Dialect-aware generation of [Well-Known Text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry)
//! from arbitrary geometry representations.
//!
//! The generator never owns a geometry model of its own: everything it
//! knows about a geometry it learns through the [`Extractor`] capability
//! trait, implemented once per concrete geometry family. Four dialects
//! are supported ([`Dialect`]): SFS 1.1 with and without Z/M values,
//! SFS 1.2 with `Z`/`M`/`ZM` markers, and PostGIS-style EWKT with an
//! optional `SRID=<id>;` prefix.
//!
//! ## Example
//!
//! ```
//! use geo::point;
//! use wkt_writer::{GeneratorOptions, GeoExtractor, Generator};
//!
//! // A ready-made extractor for the `geo` types ships with the crate.
//! let generator = Generator::new(GeoExtractor);
//! let wkt = generator.generate(&point!(x: 30.0, y: 10.0).into()).unwrap();
//! assert_eq!(wkt, "Point(30.000000 10.000000)");
//!
//! // Options can also be resolved from string key/value pairs, e.g. out
//! // of a configuration file.
//! let options = GeneratorOptions::from_pairs([
//!     ("dialect", "wkt11_strict"),
//!     ("case", "uppercase"),
//!     ("float_precision", "0"),
//! ]).unwrap();
//! let generator = Generator::with_options(GeoExtractor, options);
//! let wkt = generator.generate(&point!(x: 30.0, y: 10.0).into()).unwrap();
//! assert_eq!(wkt, "POINT(30 10)");
//! ```

#![warn(missing_docs)]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

mod coord;
mod dimension;
mod error;
mod extractor;
mod geo;
mod generator;
mod geometry_type;
mod options;

pub use self::geo::{GeoExtractor, IncorrectGeometryType};
pub use coord::Coord;
pub use dimension::Dimension;
pub use error::{WktError, WktResult};
pub use extractor::Extractor;
pub use generator::Generator;
pub use geometry_type::GeometryType;
pub use options::{CaseTransform, Dialect, GeneratorOptions};
