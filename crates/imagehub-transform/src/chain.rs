//! Ordered lists of transformations parsed from `t[]` fragments.

use imagehub_core::types::image::Image;

use crate::contract::Transformation;
use crate::error::TransformationError;
use crate::params::Params;
use crate::transformations::{
    Border, Crop, FlipHorizontally, FlipVertically, Resize, Rotate, Thumbnail,
};
use crate::url::ImageUrl;

/// Names accepted by [`parse_fragment`].
pub const TRANSFORMATIONS: &[&str] = &[
    Border::NAME,
    Crop::NAME,
    FlipHorizontally::NAME,
    FlipVertically::NAME,
    Resize::NAME,
    Rotate::NAME,
    Thumbnail::NAME,
];

/// Parses one `name[:k=v,...]` fragment into a transformation.
pub fn parse_fragment(fragment: &str) -> Result<Box<dyn Transformation>, TransformationError> {
    let fragment = fragment.trim();
    let (name, raw) = fragment.split_once(':').unwrap_or((fragment, ""));
    if name.is_empty() {
        return Err(TransformationError::MalformedFragment(fragment.to_string()));
    }

    Ok(match name {
        Border::NAME => Box::new(Border::from_params(Params::parse(Border::NAME, raw)?)?),
        Crop::NAME => Box::new(Crop::from_params(Params::parse(Crop::NAME, raw)?)?),
        Resize::NAME => Box::new(Resize::from_params(Params::parse(Resize::NAME, raw)?)?),
        Rotate::NAME => Box::new(Rotate::from_params(Params::parse(Rotate::NAME, raw)?)?),
        Thumbnail::NAME => Box::new(Thumbnail::from_params(Params::parse(Thumbnail::NAME, raw)?)?),
        FlipHorizontally::NAME => {
            Params::parse(FlipHorizontally::NAME, raw)?.finish()?;
            Box::new(FlipHorizontally)
        }
        FlipVertically::NAME => {
            Params::parse(FlipVertically::NAME, raw)?.finish()?;
            Box::new(FlipVertically)
        }
        other => return Err(TransformationError::UnknownTransformation(other.to_string())),
    })
}

/// Transformations applied one after another.
#[derive(Debug, Default)]
pub struct TransformationChain {
    items: Vec<Box<dyn Transformation>>,
}

impl TransformationChain {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every fragment; the first invalid one fails the whole chain.
    pub fn parse<S: AsRef<str>>(fragments: &[S]) -> Result<Self, TransformationError> {
        let items = fragments
            .iter()
            .map(|f| parse_fragment(f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    /// Appends a transformation.
    pub fn push(&mut self, transformation: Box<dyn Transformation>) -> &mut Self {
        self.items.push(transformation);
        self
    }

    /// Number of transformations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the chain has no transformations.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies every transformation to `image`, in order.
    pub fn apply_to_image(&self, image: &mut Image) -> Result<(), TransformationError> {
        self.items.iter().try_for_each(|t| t.apply_to_image(image))
    }

    /// Appends every descriptor fragment to `url`, in order.
    pub fn apply_to_url(&self, url: &mut ImageUrl) {
        for transformation in &self.items {
            transformation.apply_to_url(url);
        }
    }

    /// Canonical descriptor of the whole chain.
    pub fn descriptor(&self) -> String {
        let mut url = ImageUrl::default();
        self.apply_to_url(&mut url);
        url.descriptor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformations::fixtures;

    #[test]
    fn test_parses_known_fragments() {
        let chain = TransformationChain::parse(&[
            "thumbnail:width=40,height=40,fit=outbound",
            "flipHorizontally",
            "rotate:angle=90",
        ])
        .unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.descriptor(),
            "thumbnail:width=40,height=40,fit=outbound;flipHorizontally;rotate:angle=90,bg=000000"
        );
    }

    #[test]
    fn test_unknown_and_malformed_fragments_fail() {
        assert!(matches!(
            parse_fragment("sepia:amount=3"),
            Err(TransformationError::UnknownTransformation(name)) if name == "sepia"
        ));
        assert!(matches!(
            parse_fragment(":width=1"),
            Err(TransformationError::MalformedFragment(_))
        ));
        assert!(parse_fragment("flipVertically:x=1").is_err());
    }

    #[test]
    fn test_oversized_fragments_fail_before_decoding() {
        let err = TransformationChain::parse(&["resize:width=4294967295,height=4294967295"]).unwrap_err();
        assert!(err.is_validation());
        assert!(TransformationChain::parse(&["thumbnail:width=20000"]).is_err());
    }

    #[test]
    fn test_equal_descriptors_give_equal_output() {
        let a = TransformationChain::parse(&["rotate:angle=-270,bg=FFF", "resize:height=5,width=10"]).unwrap();
        let b = TransformationChain::parse(&["rotate:bg=ffffff,angle=90", "resize:width=10,height=5"]).unwrap();
        assert_eq!(a.descriptor(), b.descriptor());

        let mut first = fixtures::png(12, 8);
        let mut second = first.clone();
        a.apply_to_image(&mut first).unwrap();
        b.apply_to_image(&mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!((first.width, first.height), (10, 5));
    }

    #[test]
    fn test_every_listed_name_parses() {
        for name in TRANSFORMATIONS {
            let fragment = match *name {
                "crop" => "crop:width=1,height=1".to_string(),
                "resize" => "resize:width=1".to_string(),
                "rotate" => "rotate:angle=0".to_string(),
                other => other.to_string(),
            };
            assert_eq!(parse_fragment(&fragment).unwrap().name(), *name);
        }
    }
}
