// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt::Debug;

use peniko::Color;

use crate::{Font, LineStyle, RichString};

/// A modifier defined by what it does to arbitrary content.
///
/// The body may only apply modifiers to `content`. Materialization runs it once against empty
/// content and reads the applied chain back out of the result, so a body that adds, drops or
/// replaces content is a construction bug and panics.
///
/// ```
/// use peniko::color::palette::css;
/// use rich_string::{ComposedModifier, RichString};
///
/// #[derive(Debug)]
/// struct Highlight;
///
/// impl ComposedModifier for Highlight {
///     fn body(&self, content: RichString) -> RichString {
///         content
///             .foreground_color(css::WHITE)
///             .background_color(css::RED)
///     }
/// }
/// ```
pub trait ComposedModifier: Debug + Send + Sync {
    /// Applies this modifier's directives to `content`.
    fn body(&self, content: RichString) -> RichString;
}

/// An abstract style modifier.
///
/// Primitive directives map one-to-one onto [`Modifier`](crate::Modifier) cases. Composed
/// modifiers are expanded by [`materialize`](crate::materialize).
#[derive(Clone, Debug, Default)]
pub enum RichModifier {
    /// The no-op modifier.
    #[default]
    Empty,
    /// Fill behind the glyphs.
    BackgroundColor(Color),
    /// Vertical offset from the baseline, in points.
    BaselineOffset(f64),
    /// Font request.
    Font(Font),
    /// Glyph color.
    ForegroundColor(Color),
    /// Extra spacing after each character, in points.
    Kern(f64),
    /// Link target.
    Link(Arc<str>),
    /// Strikethrough line pattern.
    StrikethroughStyle(LineStyle),
    /// Underline color.
    UnderlineColor(Color),
    /// Underline line pattern.
    UnderlineStyle(LineStyle),
    /// The first modifier, then the second.
    Combined(Box<RichModifier>, Box<RichModifier>),
    /// A user-defined modifier with a body.
    Composed(Arc<dyn ComposedModifier>),
}

impl RichModifier {
    /// Wraps a user-defined modifier.
    pub fn composed(modifier: impl ComposedModifier + 'static) -> Self {
        Self::Composed(Arc::new(modifier))
    }

    /// Returns a modifier applying `self` and then `other`.
    #[must_use]
    pub fn concat(self, other: impl Into<Self>) -> Self {
        Self::Combined(Box::new(self), Box::new(other.into()))
    }
}
