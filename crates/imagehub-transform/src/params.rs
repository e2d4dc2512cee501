//! Parsing of `key=value` parameter lists.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::error::TransformationError;

/// Largest output side accepted, in pixels.
pub const MAX_DIMENSION: u32 = 10_000;

/// Largest output area accepted, in pixels.
pub const MAX_PIXELS: u64 = 50_000_000;

/// Fails if a `width` x `height` output would exceed [`MAX_DIMENSION`] or
/// [`MAX_PIXELS`].
pub fn check_output_size(
    transformation: &'static str,
    width: u32,
    height: u32,
) -> Result<(), TransformationError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(TransformationError::invalid(
            transformation,
            format!("output {width}x{height} exceeds {MAX_DIMENSION} pixels per side"),
        ));
    }
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(TransformationError::invalid(
            transformation,
            format!("output {width}x{height} exceeds {MAX_PIXELS} pixels"),
        ));
    }
    Ok(())
}

/// Raw parameters of one fragment, consumed key by key.
///
/// Transformations take the keys they know; [`Params::finish`] rejects
/// whatever is left so typos do not pass silently.
#[derive(Debug)]
pub struct Params<'a> {
    transformation: &'static str,
    values: BTreeMap<&'a str, &'a str>,
}

impl<'a> Params<'a> {
    /// Parses `k1=v1,k2=v2`. An empty string yields no parameters.
    pub fn parse(transformation: &'static str, raw: &'a str) -> Result<Self, TransformationError> {
        let mut values = BTreeMap::new();
        for pair in raw.split(',').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                TransformationError::invalid(transformation, format!("expected key=value, got '{pair}'"))
            })?;
            let key = key.trim();
            if values.insert(key, value.trim()).is_some() {
                return Err(TransformationError::invalid(
                    transformation,
                    format!("duplicate parameter '{key}'"),
                ));
            }
        }
        Ok(Self {
            transformation,
            values,
        })
    }

    /// Removes and returns a raw value.
    pub fn take(&mut self, key: &str) -> Option<&'a str> {
        self.values.remove(key)
    }

    /// Takes an integer parameter.
    pub fn take_i64(&mut self, key: &str) -> Result<Option<i64>, TransformationError> {
        self.take(key)
            .map(|raw| {
                raw.parse::<i64>().map_err(|_| {
                    TransformationError::invalid(
                        self.transformation,
                        format!("'{key}' must be an integer, got '{raw}'"),
                    )
                })
            })
            .transpose()
    }

    /// Takes a non-negative integer parameter.
    pub fn take_u32(&mut self, key: &str) -> Result<Option<u32>, TransformationError> {
        self.take(key)
            .map(|raw| {
                raw.parse::<u32>().map_err(|_| {
                    TransformationError::invalid(
                        self.transformation,
                        format!("'{key}' must be a non-negative integer, got '{raw}'"),
                    )
                })
            })
            .transpose()
    }

    /// Takes a pixel size in `1..=MAX_DIMENSION`.
    pub fn take_dimension(&mut self, key: &str) -> Result<Option<u32>, TransformationError> {
        match self.take_u32(key)? {
            Some(0) => Err(TransformationError::invalid(
                self.transformation,
                format!("'{key}' must be greater than zero"),
            )),
            Some(value) if value > MAX_DIMENSION => Err(TransformationError::invalid(
                self.transformation,
                format!("'{key}' must be at most {MAX_DIMENSION}, got {value}"),
            )),
            other => Ok(other),
        }
    }

    /// Takes a colour parameter.
    pub fn take_color(&mut self, key: &str) -> Result<Option<Color>, TransformationError> {
        self.take(key)
            .map(|raw| {
                Color::parse(raw).ok_or_else(|| {
                    TransformationError::invalid(
                        self.transformation,
                        format!("'{key}' must be a hex colour, got '{raw}'"),
                    )
                })
            })
            .transpose()
    }

    /// Fails on any parameter not taken.
    pub fn finish(self) -> Result<(), TransformationError> {
        match self.values.keys().next() {
            Some(key) => Err(TransformationError::invalid(
                self.transformation,
                format!("unknown parameter '{key}'"),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_typed_values() {
        let mut params = Params::parse("border", "width=2,color=fff").unwrap();
        assert_eq!(params.take_u32("width").unwrap(), Some(2));
        assert_eq!(params.take_u32("height").unwrap(), None);
        assert_eq!(params.take_color("color").unwrap(), Color::parse("ffffff"));
        assert!(params.finish().is_ok());
    }

    #[test]
    fn test_leftover_and_duplicate_keys_fail() {
        let params = Params::parse("resize", "widht=10").unwrap();
        assert!(params.finish().is_err());
        assert!(Params::parse("resize", "width=1,width=2").is_err());
        assert!(Params::parse("resize", "width").is_err());
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let mut params = Params::parse("resize", "width=0").unwrap();
        assert!(params.take_dimension("width").is_err());
    }

    #[test]
    fn test_oversized_dimension_is_rejected() {
        let mut params = Params::parse("resize", "width=10000,height=4294967295").unwrap();
        assert_eq!(params.take_dimension("width").unwrap(), Some(MAX_DIMENSION));
        let err = params.take_dimension("height").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_output_size_limits() {
        assert!(check_output_size("resize", MAX_DIMENSION, 10).is_ok());
        assert!(check_output_size("resize", MAX_DIMENSION + 1, 1).is_err());
        assert!(check_output_size("resize", MAX_DIMENSION, MAX_DIMENSION).is_err());
    }
}
