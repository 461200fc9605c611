// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute maps produced from canonical modifiers.

use alloc::sync::Arc;

use attributed_text::Merge;
use peniko::Color;

use crate::{Font, Image, LineStyle, Modifier, RenderOptions};

const ATTRIBUTE_KEY_COUNT: usize = 10;

/// Identifies one styling attribute of rendered text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// The embedded object of an attachment character.
    Attachment,
    /// Fill behind the glyphs.
    BackgroundColor,
    /// Vertical offset from the baseline, in points.
    BaselineOffset,
    /// Font request.
    Font,
    /// Glyph color.
    ForegroundColor,
    /// Extra spacing after each character, in points.
    Kern,
    /// Link target.
    Link,
    /// Strikethrough line pattern.
    StrikethroughStyle,
    /// Underline color.
    UnderlineColor,
    /// Underline line pattern.
    UnderlineStyle,
}

impl AttributeKey {
    /// Every key, in slot order.
    pub const ALL: [Self; ATTRIBUTE_KEY_COUNT] = [
        Self::Attachment,
        Self::BackgroundColor,
        Self::BaselineOffset,
        Self::Font,
        Self::ForegroundColor,
        Self::Kern,
        Self::Link,
        Self::StrikethroughStyle,
        Self::UnderlineColor,
        Self::UnderlineStyle,
    ];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Attachment => 0,
            Self::BackgroundColor => 1,
            Self::BaselineOffset => 2,
            Self::Font => 3,
            Self::ForegroundColor => 4,
            Self::Kern => 5,
            Self::Link => 6,
            Self::StrikethroughStyle => 7,
            Self::UnderlineColor => 8,
            Self::UnderlineStyle => 9,
        }
    }
}

/// The value of one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// An embedded image.
    Attachment(Image),
    /// A color.
    Color(Color),
    /// A length in points.
    Number(f64),
    /// A font request.
    Font(Font),
    /// A URL.
    Link(Arc<str>),
    /// A decoration line pattern.
    LineStyle(LineStyle),
}

/// A map from [`AttributeKey`] to [`AttributeValue`], holding at most one value per key.
///
/// Merging lets the incoming map overwrite every key it sets, which is how overlapping
/// spans resolve in rendered text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    slots: [Option<AttributeValue>; ATTRIBUTE_KEY_COUNT],
}

impl Attributes {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.slots[key.index()].as_ref()
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: AttributeKey, value: AttributeValue) -> Option<AttributeValue> {
        self.slots[key.index()].replace(value)
    }

    /// Returns this map with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes and returns the value for `key`.
    pub fn remove(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.slots[key.index()].take()
    }

    /// The number of keys with a value.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no key has a value.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over the set keys in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> + '_ {
        AttributeKey::ALL
            .into_iter()
            .zip(&self.slots)
            .filter_map(|(key, slot)| Some((key, slot.as_ref()?)))
    }

    /// The attached image.
    pub fn attachment(&self) -> Option<&Image> {
        match self.get(AttributeKey::Attachment)? {
            AttributeValue::Attachment(image) => Some(image),
            _ => None,
        }
    }

    /// The background color.
    pub fn background_color(&self) -> Option<Color> {
        self.color(AttributeKey::BackgroundColor)
    }

    /// The baseline offset.
    pub fn baseline_offset(&self) -> Option<f64> {
        self.number(AttributeKey::BaselineOffset)
    }

    /// The font request.
    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::Font)? {
            AttributeValue::Font(font) => Some(font),
            _ => None,
        }
    }

    /// The foreground color.
    pub fn foreground_color(&self) -> Option<Color> {
        self.color(AttributeKey::ForegroundColor)
    }

    /// The kerning.
    pub fn kern(&self) -> Option<f64> {
        self.number(AttributeKey::Kern)
    }

    /// The link target.
    pub fn link(&self) -> Option<&str> {
        match self.get(AttributeKey::Link)? {
            AttributeValue::Link(url) => Some(url.as_ref()),
            _ => None,
        }
    }

    /// The strikethrough pattern.
    pub fn strikethrough_style(&self) -> Option<LineStyle> {
        self.line_style(AttributeKey::StrikethroughStyle)
    }

    /// The underline color.
    pub fn underline_color(&self) -> Option<Color> {
        self.color(AttributeKey::UnderlineColor)
    }

    /// The underline pattern.
    pub fn underline_style(&self) -> Option<LineStyle> {
        self.line_style(AttributeKey::UnderlineStyle)
    }

    fn color(&self, key: AttributeKey) -> Option<Color> {
        match self.get(key)? {
            AttributeValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    fn number(&self, key: AttributeKey) -> Option<f64> {
        match self.get(key)? {
            AttributeValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    fn line_style(&self, key: AttributeKey) -> Option<LineStyle> {
        match self.get(key)? {
            AttributeValue::LineStyle(style) => Some(*style),
            _ => None,
        }
    }
}

impl Merge for Attributes {
    fn merge(&mut self, other: &Self) {
        for (slot, incoming) in self.slots.iter_mut().zip(&other.slots) {
            if let Some(value) = incoming {
                *slot = Some(value.clone());
            }
        }
    }
}

impl Modifier {
    /// Converts this modifier into an attribute map.
    ///
    /// [`Modifier::Combined`] is flattened left to right, so the second operand overwrites the
    /// first on shared keys. Directives the target does not support, as described by `options`,
    /// contribute nothing.
    pub fn attributes(&self, options: RenderOptions) -> Attributes {
        let mut attributes = Attributes::new();
        self.write_attributes(options, &mut attributes);
        attributes
    }

    fn write_attributes(&self, options: RenderOptions, attributes: &mut Attributes) {
        let (key, value) = match self {
            Self::Empty => return,
            Self::Combined(first, second) => {
                first.write_attributes(options, attributes);
                second.write_attributes(options, attributes);
                return;
            }
            Self::Attachment(image) => (
                AttributeKey::Attachment,
                AttributeValue::Attachment(image.clone()),
            ),
            Self::BackgroundColor(color) => {
                (AttributeKey::BackgroundColor, AttributeValue::Color(*color))
            }
            Self::BaselineOffset(offset) => (
                AttributeKey::BaselineOffset,
                AttributeValue::Number(*offset),
            ),
            Self::Font(font) => (AttributeKey::Font, AttributeValue::Font(font.clone())),
            Self::ForegroundColor(color) => {
                (AttributeKey::ForegroundColor, AttributeValue::Color(*color))
            }
            Self::Kern(value) => (AttributeKey::Kern, AttributeValue::Number(*value)),
            Self::Link(url) => (AttributeKey::Link, AttributeValue::Link(url.clone())),
            Self::StrikethroughStyle(style) => (
                AttributeKey::StrikethroughStyle,
                AttributeValue::LineStyle(*style),
            ),
            Self::UnderlineColor(color) => {
                (AttributeKey::UnderlineColor, AttributeValue::Color(*color))
            }
            Self::UnderlineStyle(style) => (
                AttributeKey::UnderlineStyle,
                AttributeValue::LineStyle(*style),
            ),
        };
        if options.supports(key) {
            attributes.insert(key, value);
        } else {
            tracing::debug!(?key, "target does not support attribute, dropping it");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeKey, AttributeValue, Attributes};
    use crate::{Image, LineStyle, Modifier, RenderOptions};
    use alloc::boxed::Box;
    use attributed_text::Merge;
    use peniko::color::palette::css;
    use peniko::kurbo::Size;

    fn combined(first: Modifier, second: Modifier) -> Modifier {
        Modifier::Combined(Box::new(first), Box::new(second))
    }

    #[test]
    fn empty_modifier_has_no_attributes() {
        assert!(Modifier::Empty.attributes(RenderOptions::default()).is_empty());
    }

    #[test]
    fn combined_second_overwrites_first() {
        let modifier = combined(
            combined(Modifier::Kern(1.0), Modifier::ForegroundColor(css::RED)),
            Modifier::Kern(2.0),
        );
        let attributes = modifier.attributes(RenderOptions::default());
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.kern(), Some(2.0));
        assert_eq!(attributes.foreground_color(), Some(css::RED));
    }

    #[test]
    fn combined_with_empty_matches_operand() {
        let kern = Modifier::Kern(8.0);
        let options = RenderOptions::default();
        assert_eq!(
            combined(Modifier::Empty, kern.clone()).attributes(options),
            kern.attributes(options)
        );
    }

    #[test]
    fn unsupported_directives_are_dropped() {
        let modifier = combined(
            Modifier::Attachment(Image::new("star", Size::new(16.0, 16.0))),
            combined(Modifier::Link("https://example.com".into()), Modifier::Kern(1.0)),
        );
        let options = RenderOptions::default().attachments(false).links(false);
        let attributes = modifier.attributes(options);
        assert_eq!(attributes.attachment(), None);
        assert_eq!(attributes.link(), None);
        assert_eq!(attributes.kern(), Some(1.0));
    }

    #[test]
    fn merge_overwrites_only_set_keys() {
        let mut base = Attributes::new()
            .with(AttributeKey::Kern, AttributeValue::Number(1.0))
            .with(
                AttributeKey::UnderlineStyle,
                AttributeValue::LineStyle(LineStyle::Single),
            );
        let overlay = Attributes::new().with(AttributeKey::Kern, AttributeValue::Number(4.0));
        base.merge(&overlay);
        assert_eq!(base.kern(), Some(4.0));
        assert_eq!(base.underline_style(), Some(LineStyle::Single));
    }

    #[test]
    fn iterates_in_slot_order() {
        let attributes = Attributes::new()
            .with(AttributeKey::UnderlineColor, AttributeValue::Color(css::BLUE))
            .with(AttributeKey::BackgroundColor, AttributeValue::Color(css::GREEN));
        let keys: alloc::vec::Vec<_> = attributes.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            [AttributeKey::BackgroundColor, AttributeKey::UnderlineColor]
        );
    }

    #[test]
    fn typed_getters_ignore_mismatched_values() {
        let mut attributes = Attributes::new();
        attributes.insert(AttributeKey::Kern, AttributeValue::Color(css::RED));
        assert_eq!(attributes.kern(), None);
        assert_eq!(
            attributes.remove(AttributeKey::Kern),
            Some(AttributeValue::Color(css::RED))
        );
        assert!(attributes.is_empty());
    }
}
