// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from the abstract tree to canonical [`Content`] and [`Modifier`] nodes.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::format::{Piece, Pieces};
use crate::{ComposedModifier, Content, Format, Modifier, RichModifier, RichString};

/// Stands in for a template placeholder with no matching argument.
const MISSING_ARGUMENT: &str = "(null)";

/// Modifiers applied by a composed modifier, innermost first.
type Chain = SmallVec<[Modifier; 4]>;

/// Converts abstract content into its canonical form.
///
/// Components are expanded through their bodies and only the taken branch of a conditional is
/// visited. The result depends only on the shape of `content`, not on how it was built.
pub fn materialize(content: &RichString) -> Content {
    match content {
        RichString::Empty => Content::Empty,
        RichString::Text(text) => Content::Text(text.clone()),
        RichString::Attachment(attachment) => Content::modified(
            Content::Placeholder,
            Modifier::Attachment(attachment.image().clone()),
        ),
        RichString::Concatenate(children) => {
            Content::Sequence(children.iter().map(materialize).collect())
        }
        RichString::Conditional(conditional) => materialize(conditional.taken()),
        RichString::Format(format) => materialize_format(format),
        RichString::Modified(inner, modifier) => materialize_modified(inner, modifier),
        RichString::Component(component) => materialize(&component.body()),
    }
}

/// Converts an abstract modifier into its canonical form.
///
/// A composed modifier becomes the left-folded [`Modifier::Combined`] of the modifiers its body
/// applies, in application order.
pub fn materialize_modifier(modifier: &RichModifier) -> Modifier {
    match modifier {
        RichModifier::Empty => Modifier::Empty,
        RichModifier::BackgroundColor(color) => Modifier::BackgroundColor(*color),
        RichModifier::BaselineOffset(offset) => Modifier::BaselineOffset(*offset),
        RichModifier::Font(font) => Modifier::Font(font.clone()),
        RichModifier::ForegroundColor(color) => Modifier::ForegroundColor(*color),
        RichModifier::Kern(value) => Modifier::Kern(*value),
        RichModifier::Link(url) => Modifier::Link(url.clone()),
        RichModifier::StrikethroughStyle(style) => Modifier::StrikethroughStyle(*style),
        RichModifier::UnderlineColor(color) => Modifier::UnderlineColor(*color),
        RichModifier::UnderlineStyle(style) => Modifier::UnderlineStyle(*style),
        RichModifier::Combined(first, second) => {
            Modifier::combined(materialize_modifier(first), materialize_modifier(second))
        }
        RichModifier::Composed(composed) => extract_chain(&**composed)
            .into_iter()
            .fold(Modifier::Empty, Modifier::combined),
    }
}

fn materialize_modified(inner: &RichString, modifier: &RichModifier) -> Content {
    let content = materialize(inner);
    match modifier {
        RichModifier::Composed(composed) => extract_chain(&**composed)
            .into_iter()
            .fold(content, Content::modified),
        primitive => Content::modified(content, materialize_modifier(primitive)),
    }
}

/// Runs the body of `composed` against empty content and peels off the modifiers it applied.
///
/// # Panics
///
/// Panics if the body adds content of its own.
fn extract_chain(composed: &dyn ComposedModifier) -> Chain {
    let mut chain = Chain::new();
    let mut node = materialize(&composed.body(RichString::Empty));
    let core = loop {
        match node {
            Content::Modified(inner, modifier) => {
                chain.push(modifier);
                node = *inner;
            }
            other => break other,
        }
    };
    assert!(
        core == Content::Empty,
        "composed modifier {composed:?} must only apply modifiers, but its body produced {core:?}"
    );
    chain.reverse();
    tracing::trace!(
        modifier = ?composed,
        len = chain.len(),
        "extracted composed modifier chain"
    );
    chain
}

fn materialize_format(format: &Format) -> Content {
    let args = format.args();
    let mut next = 0;
    let mut children = Vec::new();
    for piece in Pieces::new(format.template()) {
        let child = match piece {
            Piece::Literal(text) => Content::Text(String::from(text)),
            Piece::Argument(explicit) => {
                let index = match explicit {
                    Some(position) => position.checked_sub(1),
                    None => {
                        next += 1;
                        Some(next - 1)
                    }
                };
                match index.and_then(|index| args.get(index)) {
                    Some(arg) => materialize(arg),
                    None => {
                        tracing::debug!(
                            template = format.template(),
                            args = args.len(),
                            "format placeholder has no argument"
                        );
                        Content::Text(String::from(MISSING_ARGUMENT))
                    }
                }
            }
        };
        children.push(child);
    }
    Content::Sequence(children)
}
