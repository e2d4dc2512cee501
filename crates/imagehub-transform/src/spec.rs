//! Canonical description of a transformation.

use std::fmt;

/// A transformation name together with its canonical parameters.
///
/// Parameters keep the fixed order the transformation declares, so the
/// rendered fragment does not depend on how the caller ordered them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransformationSpec {
    name: &'static str,
    params: Vec<(&'static str, String)>,
}

impl TransformationSpec {
    /// A spec without parameters.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
        }
    }

    /// Appends a parameter.
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Appends a parameter when present.
    pub fn param_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// The transformation name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parameters in canonical order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Renders `name:k1=v1,k2=v2`, or `name` alone without parameters.
    pub fn fragment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TransformationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { ':' } else { ',' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}
