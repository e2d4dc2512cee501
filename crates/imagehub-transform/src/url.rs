//! Image URLs carrying transformation fragments.

use std::fmt;

/// An image address plus the transformation fragments applied to it.
///
/// Fragments render as repeated `t[]` query parameters in the order they
/// were appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUrl {
    base: String,
    fragments: Vec<String>,
}

impl ImageUrl {
    /// Creates a URL for `base` with no transformations.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            fragments: Vec::new(),
        }
    }

    /// Appends a transformation fragment.
    pub fn append(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.fragments.push(fragment.into());
        self
    }

    /// The appended fragments.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Fragments joined by `;`, usable as a cache key suffix.
    pub fn descriptor(&self) -> String {
        self.fragments.join(";")
    }

    /// Drops all fragments.
    pub fn reset(&mut self) {
        self.fragments.clear();
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        let mut sep = if self.base.contains('?') { '&' } else { '?' };
        for fragment in &self.fragments {
            write!(f, "{sep}t[]={fragment}")?;
            sep = '&';
        }
        Ok(())
    }
}
