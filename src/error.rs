//! Defines [`WktError`], representing all errors returned by this crate.

use std::error::Error;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WktError {
    /// An option was given a value outside its accepted set.
    ///
    /// Raised while resolving options, never while generating.
    #[error("invalid value for option {name}: {value:?} (expected {expected})")]
    InvalidOption {
        /// Name of the offending option.
        name: &'static str,
        /// The rejected value, verbatim.
        value: String,
        /// The accepted value set, human-readable.
        expected: &'static str,
    },

    /// A geometry could not be generated.
    ///
    /// Wraps whatever error the [`Extractor`](crate::Extractor) raised;
    /// the original cause is available through [`Error::source`].
    #[error("Generation failed: {0}")]
    Generation(#[source] Box<dyn Error + Send + Sync>),
}

/// Crate-specific result type.
pub type WktResult<T> = std::result::Result<T, WktError>;

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Error)]
    #[error("lookup failed")]
    struct Lookup;

    #[test]
    fn invalid_option_names_the_option_and_the_accepted_set() {
        let err = WktError::InvalidOption {
            name: "dialect",
            value: "foo".to_string(),
            expected: "one of wkt11, wkt11_strict, wkt12, ewkt",
        };
        assert_eq!(
            err.to_string(),
            "invalid value for option dialect: \"foo\" (expected one of wkt11, wkt11_strict, wkt12, ewkt)"
        );
    }

    #[test]
    fn generation_keeps_the_cause_as_source() {
        let err = WktError::Generation(Box::new(Lookup));
        assert_eq!(err.to_string(), "Generation failed: lookup failed");
        assert_eq!(err.source().unwrap().to_string(), "lookup failed");
    }
}
