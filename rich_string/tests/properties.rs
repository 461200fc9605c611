// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of reduction and rendering over randomly generated canonical trees.

use proptest::prelude::*;
use rich_string::{AttributedTextRenderer, Content, LineStyle, Modifier, ModifierMap, Renderer};

fn modifier() -> impl Strategy<Value = Modifier> {
    prop_oneof![
        Just(Modifier::Empty),
        (-16i32..16).prop_map(|value| Modifier::Kern(f64::from(value))),
        (-8i32..8).prop_map(|value| Modifier::BaselineOffset(f64::from(value))),
        Just(Modifier::UnderlineStyle(LineStyle::Single)),
        Just(Modifier::StrikethroughStyle(LineStyle::ByWord)),
    ]
}

fn content() -> impl Strategy<Value = Content> {
    let leaf = prop_oneof![
        Just(Content::Empty),
        Just(Content::Placeholder),
        "[a-z é€]{0,6}".prop_map(Content::Text),
    ];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            (inner.clone(), modifier())
                .prop_map(|(content, modifier)| Content::modified(content, modifier)),
            proptest::collection::vec(inner, 0..4).prop_map(Content::Sequence),
        ]
    })
}

/// Concatenates leaf contributions in order.
fn leaf_text(content: &Content, out: &mut String) {
    match content {
        Content::Empty => {}
        Content::Text(text) => out.push_str(text),
        Content::Placeholder => out.push('\u{FFFC}'),
        Content::Modified(inner, _) => leaf_text(inner, out),
        Content::Sequence(children) => {
            for child in children {
                leaf_text(child, out);
            }
        }
    }
}

fn modified_count(content: &Content) -> usize {
    match content {
        Content::Modified(inner, _) => 1 + modified_count(inner),
        Content::Sequence(children) => children.iter().map(modified_count).sum(),
        _ => 0,
    }
}

/// For every byte, the kerning of the outermost kern modifier enclosing it.
fn expected_kern(content: &Content, outer: Option<f64>, out: &mut Vec<Option<f64>>) {
    match content {
        Content::Text(text) => out.extend(core::iter::repeat_n(outer, text.len())),
        Content::Placeholder => out.extend(core::iter::repeat_n(outer, 3)),
        Content::Modified(inner, Modifier::Kern(value)) => {
            expected_kern(inner, outer.or(Some(*value)), out);
        }
        Content::Modified(inner, _) => expected_kern(inner, outer, out),
        Content::Sequence(children) => {
            for child in children {
                expected_kern(child, outer, out);
            }
        }
        _ => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reduced_text_is_leaf_concatenation(content in content()) {
        let mut expected = String::new();
        leaf_text(&content, &mut expected);
        let map = ModifierMap::reduce(&content);
        prop_assert_eq!(map.text(), expected.as_str());
        prop_assert_eq!(content.plain_text(), expected);
    }

    #[test]
    fn ranges_stay_within_text(content in content()) {
        let map = ModifierMap::reduce(&content);
        let len = map.text().len();
        prop_assert_eq!(map.ranged_modifiers().len(), modified_count(&content));
        for ranged in map.ranged_modifiers() {
            let range = ranged.range.clone();
            prop_assert!(range.start <= range.end && range.end <= len, "{:?} in {}", range, len);
            prop_assert!(map.text().is_char_boundary(range.start));
            prop_assert!(map.text().is_char_boundary(range.end));
        }
    }

    #[test]
    fn outermost_kern_wins(content in content()) {
        let mut expected = Vec::new();
        expected_kern(&content, None, &mut expected);
        let rendered = AttributedTextRenderer::default().render(&content);
        prop_assert_eq!(expected.len(), rendered.len());
        for (index, kern) in expected.into_iter().enumerate() {
            if rendered.as_str().is_char_boundary(index) {
                prop_assert_eq!(rendered.attributes_at(index).kern(), kern, "byte {}", index);
            }
        }
    }

    #[test]
    fn resolved_runs_tile_the_text(content in content()) {
        let rendered = AttributedTextRenderer::default().render(&content);
        let mut end = 0;
        for run in rendered.resolved_runs() {
            prop_assert_eq!(run.range.start, end);
            prop_assert!(run.range.start < run.range.end);
            end = run.range.end;
        }
        prop_assert_eq!(end, rendered.len());
    }
}
