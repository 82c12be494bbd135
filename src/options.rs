use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{WktError, WktResult};

/// A named variant of WKT/EWKT governing dimension-marker placement and
/// Z/M support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// SFS 1.1 WKT (no Z or M markers in the tags) but with Z and/or M
    /// values added in if they are present.
    #[default]
    Wkt11,

    /// SFS 1.1 WKT with Z and M dropped from the output (since WKT
    /// strictly does not support the Z or M dimensions).
    Wkt11Strict,

    /// SFS 1.2 WKT with Z, M and ZM markers in a separate token.
    Wkt12,

    /// PostGIS EWKT extension with M marker appended to tag names if M
    /// but not Z is present.
    Ewkt,
}

impl Dialect {
    fn as_str(&self) -> &'static str {
        match self {
            Dialect::Wkt11 => "wkt11",
            Dialect::Wkt11Strict => "wkt11_strict",
            Dialect::Wkt12 => "wkt12",
            Dialect::Ewkt => "ewkt",
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wkt11" => Ok(Dialect::Wkt11),
            "wkt11_strict" => Ok(Dialect::Wkt11Strict),
            "wkt12" => Ok(Dialect::Wkt12),
            "ewkt" => Ok(Dialect::Ewkt),
            _ => Err(WktError::InvalidOption {
                name: "dialect",
                value: s.to_string(),
                expected: "one of wkt11, wkt11_strict, wkt12, ewkt",
            }),
        }
    }
}

/// Case folding applied to the finished output string, identifier prefix
/// included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseTransform {
    /// Leave the output as generated (mixed-case tags).
    #[default]
    #[serde(rename = "none")]
    None,

    /// Change all letters in the output to UPPER CASE.
    #[serde(rename = "uppercase")]
    Upper,

    /// Change all letters to lower case.
    #[serde(rename = "lowercase")]
    Lower,
}

impl CaseTransform {
    pub(crate) fn apply(&self, wkt: String) -> String {
        match self {
            CaseTransform::None => wkt,
            CaseTransform::Upper => wkt.to_uppercase(),
            CaseTransform::Lower => wkt.to_lowercase(),
        }
    }
}

impl FromStr for CaseTransform {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CaseTransform::None),
            "uppercase" => Ok(CaseTransform::Upper),
            "lowercase" => Ok(CaseTransform::Lower),
            _ => Err(WktError::InvalidOption {
                name: "case",
                value: s.to_string(),
                expected: "one of uppercase, lowercase, none",
            }),
        }
    }
}

/// Construction-time options for a [`Generator`](crate::Generator).
///
/// Resolved once when the generator is built and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// The output dialect.
    pub dialect: Dialect,

    /// Prefix the output with `SRID=<id>;` when the extractor reports an
    /// identifier. Only honored under [`Dialect::Ewkt`]; silently treated
    /// as `false` for every other dialect.
    pub emit_srid: bool,

    /// Case folding applied to the finished string.
    pub case: CaseTransform,

    /// Fractional digits used for every rendered ordinate.
    pub float_precision: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            dialect: Dialect::default(),
            emit_srid: false,
            case: CaseTransform::default(),
            float_precision: 6,
        }
    }
}

impl GeneratorOptions {
    /// Resolves options from string key/value pairs.
    ///
    /// Recognized keys are `dialect`, `emit_srid`, `case` and
    /// `float_precision`; absent keys keep their defaults and
    /// unrecognized keys are ignored. An unrecognized *value* for a
    /// recognized key fails with [`WktError::InvalidOption`].
    pub fn from_pairs<'a, I>(pairs: I) -> WktResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = GeneratorOptions::default();

        for (key, value) in pairs {
            match key {
                "dialect" => options.dialect = value.parse()?,
                "case" => options.case = value.parse()?,
                "emit_srid" => {
                    options.emit_srid = match value {
                        "true" | "1" => true,
                        "false" | "0" => false,
                        _ => {
                            return Err(WktError::InvalidOption {
                                name: "emit_srid",
                                value: value.to_string(),
                                expected: "one of true, false, 1, 0",
                            });
                        }
                    }
                }
                "float_precision" => {
                    options.float_precision =
                        value.parse().map_err(|_| WktError::InvalidOption {
                            name: "float_precision",
                            value: value.to_string(),
                            expected: "a non-negative integer",
                        })?
                }
                _ => {}
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.dialect, Dialect::Wkt11);
        assert!(!options.emit_srid);
        assert_eq!(options.case, CaseTransform::None);
        assert_eq!(options.float_precision, 6);
    }

    #[test]
    fn from_pairs_full_set() {
        let options = GeneratorOptions::from_pairs([
            ("dialect", "ewkt"),
            ("emit_srid", "true"),
            ("case", "uppercase"),
            ("float_precision", "2"),
        ])
        .unwrap();

        assert_eq!(options.dialect, Dialect::Ewkt);
        assert!(options.emit_srid);
        assert_eq!(options.case, CaseTransform::Upper);
        assert_eq!(options.float_precision, 2);
    }

    #[test]
    fn from_pairs_ignores_unrecognized_keys() {
        let options =
            GeneratorOptions::from_pairs([("banana", "yes"), ("dialect", "wkt12")]).unwrap();
        assert_eq!(options.dialect, Dialect::Wkt12);
    }

    #[test]
    fn from_pairs_accepts_numeric_booleans() {
        let options = GeneratorOptions::from_pairs([("emit_srid", "1")]).unwrap();
        assert!(options.emit_srid);

        let options = GeneratorOptions::from_pairs([("emit_srid", "0")]).unwrap();
        assert!(!options.emit_srid);
    }

    #[test]
    fn from_pairs_rejects_unknown_dialect() {
        let err = GeneratorOptions::from_pairs([("dialect", "foo")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for option dialect: \"foo\" (expected one of wkt11, wkt11_strict, wkt12, ewkt)"
        );
    }

    #[test]
    fn from_pairs_rejects_unknown_case() {
        let err = GeneratorOptions::from_pairs([("case", "shouting")]).unwrap_err();
        assert!(matches!(
            err,
            WktError::InvalidOption { name: "case", .. }
        ));
    }

    #[test]
    fn from_pairs_rejects_non_numeric_precision() {
        let err = GeneratorOptions::from_pairs([("float_precision", "many")]).unwrap_err();
        assert!(matches!(
            err,
            WktError::InvalidOption {
                name: "float_precision",
                ..
            }
        ));
    }

    #[test]
    fn dialect_round_trips_through_from_str() {
        for dialect in [
            Dialect::Wkt11,
            Dialect::Wkt11Strict,
            Dialect::Wkt12,
            Dialect::Ewkt,
        ] {
            assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn deserializes_from_a_json_option_map() {
        let options: GeneratorOptions = serde_json::from_str(
            r#"{"dialect": "wkt11_strict", "case": "lowercase", "float_precision": 3}"#,
        )
        .unwrap();

        assert_eq!(options.dialect, Dialect::Wkt11Strict);
        assert!(!options.emit_srid);
        assert_eq!(options.case, CaseTransform::Lower);
        assert_eq!(options.float_precision, 3);
    }
}
