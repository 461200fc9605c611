// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering canonical content to output targets.

use alloc::string::String;

use attributed_text::AttributedText;

use crate::{AttributeKey, Attributes, Content, ModifierMap};

/// Capabilities of a render target.
///
/// Directives needing a disabled capability contribute no attributes. The default enables
/// everything.
///
/// ```
/// use rich_string::{AttributeKey, RenderOptions};
///
/// let options = RenderOptions::new().links(false);
/// assert!(options.supports(AttributeKey::Kern));
/// assert!(!options.supports(AttributeKey::Link));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    attachments: bool,
    links: bool,
}

impl RenderOptions {
    /// Options for a target supporting every directive.
    pub const fn new() -> Self {
        Self {
            attachments: true,
            links: true,
        }
    }

    /// Sets whether the target can show embedded objects.
    #[must_use]
    pub const fn attachments(mut self, enabled: bool) -> Self {
        self.attachments = enabled;
        self
    }

    /// Sets whether the target can follow links.
    #[must_use]
    pub const fn links(mut self, enabled: bool) -> Self {
        self.links = enabled;
        self
    }

    /// Returns `true` if the target can represent `key`.
    pub const fn supports(self, key: AttributeKey) -> bool {
        match key {
            AttributeKey::Attachment => self.attachments,
            AttributeKey::Link => self.links,
            _ => true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns canonical content into some output representation.
pub trait Renderer {
    /// The rendered result.
    type Output;

    /// Renders `content`.
    fn render(&self, content: &Content) -> Self::Output;
}

/// Renders to [`AttributedText`] with one [`Attributes`] span per modifier.
///
/// Spans are applied in the order [`ModifierMap`] records them, so where spans overlap the
/// modifier applied last wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttributedTextRenderer {
    options: RenderOptions,
}

impl AttributedTextRenderer {
    /// Creates a renderer for a target with `options`.
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The target's capabilities.
    pub const fn options(self) -> RenderOptions {
        self.options
    }
}

impl Renderer for AttributedTextRenderer {
    type Output = AttributedText<Attributes>;

    fn render(&self, content: &Content) -> Self::Output {
        let (text, ranged_modifiers) = ModifierMap::reduce(content).into_parts();
        let mut rendered = AttributedText::with_capacity(text, ranged_modifiers.len());
        for ranged in ranged_modifiers {
            let range = rendered
                .range(ranged.range)
                .expect("reduced ranges lie on character boundaries within the reduced text");
            rendered.apply_span(range, ranged.modifier.attributes(self.options));
        }
        rendered
    }
}

/// Renders to the flattened text, dropping all styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    type Output = String;

    fn render(&self, content: &Content) -> Self::Output {
        content.plain_text()
    }
}
