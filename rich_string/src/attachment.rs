// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::kurbo::Size;

/// An image to embed inline in text.
///
/// Only the identity and the intrinsic size are carried. Decoding and drawing the pixels is left
/// to the platform layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    name: Arc<str>,
    size: Size,
}

impl Image {
    /// Creates an image descriptor.
    pub fn new(name: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The name identifying this image to the platform.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The intrinsic size of the image.
    pub fn size(&self) -> Size {
        self.size
    }
}

/// Looks up named images provided by the platform (symbol sets, icon themes, ...).
pub trait ImageProvider {
    /// Returns the image registered under `name`, if there is one.
    fn system_image(&self, name: &str) -> Option<Image>;
}

/// An embedded non-text object.
///
/// In flattened text an attachment occupies a single U+FFFC OBJECT REPLACEMENT CHARACTER, styled
/// with the attachment itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    image: Image,
}

impl Attachment {
    /// Creates an attachment showing `image`.
    pub fn new(image: Image) -> Self {
        Self { image }
    }

    /// Creates an attachment for the platform image called `name`.
    ///
    /// Returns `None` if `provider` has no image by that name.
    pub fn from_system_name<P>(name: &str, provider: &P) -> Option<Self>
    where
        P: ImageProvider + ?Sized,
    {
        provider.system_image(name).map(Self::new)
    }

    /// The attached image.
    pub fn image(&self) -> &Image {
        &self.image
    }
}
