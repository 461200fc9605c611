// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composable rich strings, reduced to [`attributed_text`].
//!
//! Rich content is described as a tree: text, attachments, concatenations, format templates and
//! user-defined [`Component`]s, styled by modifiers. Rendering goes through three stages:
//!
//! - [`materialize`] expands the abstract [`RichString`] into a canonical [`Content`] tree whose
//!   modifiers are canonical [`Modifier`]s.
//! - [`ModifierMap::reduce`] flattens that tree into one text buffer plus a list of modifiers
//!   over byte ranges.
//! - A [`Renderer`] turns the reduced form into its output. [`AttributedTextRenderer`] produces
//!   [`AttributedText`] with one [`Attributes`] span per modifier.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text. An attachment occupies one U+FFFC OBJECT
//! REPLACEMENT CHARACTER, which is three bytes long.
//!
//! ## Overlaps
//!
//! Modifiers are recorded innermost first, and rendered spans resolve last writer wins. The
//! modifier applied last to a piece of content therefore decides every attribute it sets.
//!
//! ## Example
//!
//! ```
//! use peniko::color::palette::css;
//! use rich_string::{Format, RichString};
//!
//! let name = RichString::from("World").kern(8.0).foreground_color(css::RED);
//! let greeting = RichString::from(Format::new("Hello %@!!!", [name]));
//!
//! let text = greeting.render();
//! assert_eq!(text.as_str(), "Hello World!!!");
//!
//! let runs: Vec<_> = text.resolved_runs_coalesced().collect();
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[1].range, 6..11);
//! assert_eq!(runs[1].attributes.kern(), Some(8.0));
//! assert_eq!(runs[1].attributes.foreground_color(), Some(css::RED));
//! assert!(runs[2].attributes.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Forwarded to [`peniko`].
//! - `libm`: Float math for `no_std` builds, forwarded to [`peniko`].
//!
//! Diagnostics are emitted through [`tracing`] at `trace` and `debug` level. No subscriber is
//! installed.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub use attributed_text;
pub use peniko;

mod attachment;
mod attributes;
mod format;
mod materialize;
mod modifier;
mod output;
mod reduce;
mod render;
mod rich;
mod style;


pub use attributed_text::AttributedText;

pub use crate::attachment::{Attachment, Image, ImageProvider};
pub use crate::attributes::{AttributeKey, AttributeValue, Attributes};
pub use crate::format::Format;
pub use crate::materialize::{materialize, materialize_modifier};
pub use crate::modifier::{ComposedModifier, RichModifier};
pub use crate::output::{Content, Modifier};
pub use crate::reduce::{ModifierMap, RangedModifier};
pub use crate::render::{AttributedTextRenderer, PlainTextRenderer, RenderOptions, Renderer};
pub use crate::rich::{Component, Conditional, Group, RichString};
pub use crate::style::{Font, FontStyle, FontWeight, LineStyle};
