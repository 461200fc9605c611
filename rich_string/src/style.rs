// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload types carried by style directives.

use alloc::sync::Arc;

/// A line pattern for underline and strikethrough decorations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// A single thin line.
    Single,
    /// A single thick line.
    Thick,
    /// Two thin lines.
    Double,
    /// A dotted line.
    PatternDot,
    /// A dashed line.
    PatternDash,
    /// Alternating dashes and dots.
    PatternDashDot,
    /// Alternating dashes and pairs of dots.
    PatternDashDotDot,
    /// Only draw the line under words, skipping whitespace.
    ByWord,
}

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Slant of a font face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// An upright face.
    #[default]
    Normal,
    /// A face designed as italic.
    Italic,
    /// An artificially slanted upright face.
    Oblique,
}

/// A font request: family, point size, weight and slant.
///
/// This is a description only. Matching it against installed fonts is the job of the platform
/// layer consuming the rendered attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: Arc<str>,
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Family name used by [`Font::system`].
    pub const SYSTEM_FAMILY: &'static str = "system-ui";

    /// Creates a font request for `family` at `size` points.
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Creates a request for the platform's user interface font at `size` points.
    pub fn system(size: f32) -> Self {
        Self::new(Self::SYSTEM_FAMILY, size)
    }

    /// Returns this font with `weight`.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Returns this font with `style`.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// The family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The slant.
    pub fn style(&self) -> FontStyle {
        self.style
    }
}
