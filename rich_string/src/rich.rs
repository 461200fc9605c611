// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Debug;

use attributed_text::AttributedText;
use peniko::Color;

use crate::render::{AttributedTextRenderer, Renderer};
use crate::{Attachment, Attributes, Content, Font, Format, LineStyle, RichModifier};

/// Rich content defined in terms of other rich content.
///
/// ```
/// use rich_string::{Component, RichString};
///
/// #[derive(Debug)]
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn body(&self) -> RichString {
///         RichString::concat(["Hello, ".into(), RichString::from(self.name.as_str()).kern(2.0)])
///     }
/// }
///
/// let greeting = RichString::component(Greeting { name: "Ferris".into() });
/// assert_eq!(greeting.materialize().plain_text(), "Hello, Ferris");
/// ```
pub trait Component: Debug + Send + Sync {
    /// Returns the content this component stands for.
    fn body(&self) -> RichString;
}

/// Abstract rich content, as produced by a builder.
///
/// Every case except [`RichString::Component`] has a direct canonical form. Turn a value into
/// its canonical [`Content`] with [`RichString::materialize`], or straight into attributed text
/// with [`RichString::render`].
#[derive(Clone, Debug, Default)]
pub enum RichString {
    /// No content.
    #[default]
    Empty,
    /// A literal run of text.
    Text(String),
    /// An embedded object.
    Attachment(Attachment),
    /// Children concatenated in order.
    Concatenate(Vec<RichString>),
    /// The branch a conditional took.
    Conditional(Box<Conditional>),
    /// A template with placeholder arguments.
    Format(Format),
    /// Content with a modifier applied.
    Modified(Box<RichString>, RichModifier),
    /// A user-defined value with a body.
    Component(Arc<dyn Component>),
}

/// The branch taken by a conditional in a builder.
///
/// Only the taken branch is ever constructed.
#[derive(Clone, Debug)]
pub enum Conditional {
    /// The condition held.
    First(RichString),
    /// The condition did not hold.
    Second(RichString),
}

impl Conditional {
    /// The content of whichever branch was taken.
    pub fn taken(&self) -> &RichString {
        match self {
            Self::First(content) | Self::Second(content) => content,
        }
    }
}

/// Content that styles its children as one unit.
///
/// ```
/// use rich_string::{Group, RichString};
///
/// let group = RichString::from(Group::new(RichString::concat(["a", "b"]))).kern(8.0);
/// assert_eq!(group.materialize().plain_text(), "ab");
/// ```
#[derive(Clone, Debug)]
pub struct Group {
    content: RichString,
}

impl Group {
    /// Groups `content`.
    pub fn new(content: impl Into<RichString>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Component for Group {
    fn body(&self) -> RichString {
        self.content.clone()
    }
}

impl RichString {
    /// Creates a text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Concatenates `items` in order.
    pub fn concat<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Concatenate(items.into_iter().map(Into::into).collect())
    }

    /// Concatenates `items` with `separator` between each adjacent pair.
    pub fn join<I>(items: I, separator: impl Into<Self>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        let separator = separator.into();
        let mut children = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                children.push(separator.clone());
            }
            children.push(item.into());
        }
        Self::Concatenate(children)
    }

    /// Builds only the branch selected by `condition`.
    pub fn either<F, S>(condition: bool, first: F, second: S) -> Self
    where
        F: FnOnce() -> Self,
        S: FnOnce() -> Self,
    {
        let taken = if condition {
            Conditional::First(first())
        } else {
            Conditional::Second(second())
        };
        Self::Conditional(Box::new(taken))
    }

    /// Content that is present only when `content` is `Some`.
    pub fn optional(content: Option<impl Into<Self>>) -> Self {
        let taken = match content {
            Some(content) => Conditional::First(content.into()),
            None => Conditional::Second(Self::Empty),
        };
        Self::Conditional(Box::new(taken))
    }

    /// Wraps a user-defined component.
    pub fn component(component: impl Component + 'static) -> Self {
        Self::Component(Arc::new(component))
    }

    /// Applies `modifier` to this content.
    #[must_use]
    pub fn modifier(self, modifier: impl Into<RichModifier>) -> Self {
        Self::Modified(Box::new(self), modifier.into())
    }

    /// Sets the background color.
    #[must_use]
    pub fn background_color(self, color: Color) -> Self {
        self.modifier(RichModifier::BackgroundColor(color))
    }

    /// Offsets the text from the baseline by `offset` points.
    #[must_use]
    pub fn baseline_offset(self, offset: f64) -> Self {
        self.modifier(RichModifier::BaselineOffset(offset))
    }

    /// Sets the font.
    #[must_use]
    pub fn font(self, font: Font) -> Self {
        self.modifier(RichModifier::Font(font))
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn foreground_color(self, color: Color) -> Self {
        self.modifier(RichModifier::ForegroundColor(color))
    }

    /// Adds `value` points of spacing after each character.
    #[must_use]
    pub fn kern(self, value: f64) -> Self {
        self.modifier(RichModifier::Kern(value))
    }

    /// Links the text to `url`.
    #[must_use]
    pub fn link(self, url: impl Into<Arc<str>>) -> Self {
        self.modifier(RichModifier::Link(url.into()))
    }

    /// Strikes the text through with `style`.
    #[must_use]
    pub fn strikethrough_style(self, style: LineStyle) -> Self {
        self.modifier(RichModifier::StrikethroughStyle(style))
    }

    /// Sets the underline color.
    #[must_use]
    pub fn underline_color(self, color: Color) -> Self {
        self.modifier(RichModifier::UnderlineColor(color))
    }

    /// Underlines the text with `style`.
    #[must_use]
    pub fn underline_style(self, style: LineStyle) -> Self {
        self.modifier(RichModifier::UnderlineStyle(style))
    }

    /// Converts this value to its canonical form.
    pub fn materialize(&self) -> Content {
        crate::materialize(self)
    }

    /// Renders this value to attributed text with default options.
    pub fn render(&self) -> AttributedText<Attributes> {
        self.render_with(&AttributedTextRenderer::default())
    }

    /// Renders this value with `renderer`.
    pub fn render_with<R: Renderer + ?Sized>(&self, renderer: &R) -> R::Output {
        renderer.render(&self.materialize())
    }
}

impl From<&str> for RichString {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for RichString {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Attachment> for RichString {
    fn from(attachment: Attachment) -> Self {
        Self::Attachment(attachment)
    }
}

impl From<Format> for RichString {
    fn from(format: Format) -> Self {
        Self::Format(format)
    }
}

impl From<Group> for RichString {
    fn from(group: Group) -> Self {
        Self::component(group)
    }
}

impl From<Conditional> for RichString {
    fn from(conditional: Conditional) -> Self {
        Self::Conditional(Box::new(conditional))
    }
}

impl<T: Into<Self>> FromIterator<T> for RichString {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::concat(iter)
    }
}
