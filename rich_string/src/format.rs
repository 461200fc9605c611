// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::RichString;

/// Rich content built from a template with `%@` placeholders.
///
/// `%@` takes the next argument in order. `%N$@` takes argument `N`, counting from 1, and does
/// not advance the implicit position. Placeholders without a matching argument render as
/// `(null)`.
///
/// ```
/// use rich_string::{Format, RichString};
///
/// let greeting = Format::new("Hello %@!", ["World"]);
/// assert_eq!(RichString::from(greeting).materialize().plain_text(), "Hello World!");
/// ```
#[derive(Clone, Debug)]
pub struct Format {
    template: String,
    args: Vec<RichString>,
}

impl Format {
    /// Creates a format from a template and its arguments.
    pub fn new<I>(template: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RichString>,
    {
        Self {
            template: template.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The arguments, in order.
    pub fn args(&self) -> &[RichString] {
        &self.args
    }
}

/// A piece of a split template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    /// Literal text between placeholders. Never empty.
    Literal(&'a str),
    /// A placeholder, with its explicit 1-based index if one was written.
    Argument(Option<usize>),
}

/// Splits a template into literal runs and placeholders.
#[derive(Clone, Debug)]
pub(crate) struct Pieces<'a> {
    rest: &'a str,
}

impl<'a> Pieces<'a> {
    pub(crate) fn new(template: &'a str) -> Self {
        Self { rest: template }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let mut search = 0;
        while let Some(offset) = self.rest[search..].find('%') {
            let at = search + offset;
            if let Some((index, len)) = parse_specifier(&self.rest[at..]) {
                if at > 0 {
                    let (literal, rest) = self.rest.split_at(at);
                    self.rest = rest;
                    return Some(Piece::Literal(literal));
                }
                self.rest = &self.rest[len..];
                return Some(Piece::Argument(index));
            }
            search = at + 1;
        }
        let literal = core::mem::take(&mut self.rest);
        Some(Piece::Literal(literal))
    }
}

/// Parses `%@` or `%N$@` at the start of `s`, returning the explicit index and byte length.
fn parse_specifier(s: &str) -> Option<(Option<usize>, usize)> {
    let rest = s.strip_prefix('%')?;
    if rest.starts_with('@') {
        return Some((None, 2));
    }
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !rest[digits..].starts_with("$@") {
        return None;
    }
    // An index too large to represent can never name an argument; 0 falls back the same way.
    let index = rest[..digits].parse().unwrap_or(0);
    Some((Some(index), 1 + digits + 2))
}
