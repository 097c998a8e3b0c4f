//! Property-based tests for identifier stripping.
//!
//! Filler text is drawn from characters that can never be part of an
//! identifier, so removing one identifier cannot form a new one.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use guidstrip_core::GuidPattern;
use guidstrip_core::NoopReporter;
use guidstrip_core::SanitizeReport;
use guidstrip_core::content::sanitize_markup;
use guidstrip_core::rename::sanitize_names;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn guid() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}"
}

fn filler() -> impl Strategy<Value = String> {
    "[g-zG-Z_ .<>/=\"]{0,12}"
}

/// Interleaves filler pieces with identifiers, returning the full text and
/// the text with identifiers (and, for names, their optional dash) removed.
fn interleave(pieces: &[(String, String, bool)], tail: &str, name: bool) -> (String, String) {
    let mut full = String::new();
    let mut expected = String::new();
    for (text, id, dash) in pieces {
        full.push_str(text);
        expected.push_str(text);
        if *dash {
            full.push('-');
            if !name {
                expected.push('-');
            }
        }
        full.push_str(id);
    }
    full.push_str(tail);
    expected.push_str(tail);
    (full, expected)
}

proptest! {
    /// Identifiers and their leading dash disappear from names; everything
    /// else stays in order.
    #[test]
    fn prop_name_keeps_other_characters(
        pieces in prop::collection::vec((filler(), guid(), any::<bool>()), 0..4),
        tail in filler(),
    ) {
        let patterns = GuidPattern::new().unwrap();
        let (name, expected) = interleave(&pieces, &tail, true);

        let (stripped, removed) = patterns.strip_name(&name);

        prop_assert_eq!(&*stripped, expected.as_str());
        prop_assert_eq!(removed, pieces.len());
    }

    /// Content stripping removes identifiers only, never a preceding dash.
    #[test]
    fn prop_content_keeps_other_characters(
        pieces in prop::collection::vec((filler(), guid(), any::<bool>()), 0..6),
        tail in filler(),
    ) {
        let patterns = GuidPattern::new().unwrap();
        let (text, expected) = interleave(&pieces, &tail, false);

        let (stripped, removed) = patterns.strip_content(&text);

        prop_assert_eq!(&*stripped, expected.as_str());
        prop_assert_eq!(removed, pieces.len());
    }

    /// A second pass over stripped text removes nothing.
    #[test]
    fn prop_stripping_is_idempotent(
        pieces in prop::collection::vec((filler(), guid(), any::<bool>()), 0..4),
        tail in filler(),
    ) {
        let patterns = GuidPattern::new().unwrap();
        let (text, _) = interleave(&pieces, &tail, false);

        let (once, _) = patterns.strip_content(&text);
        let (twice, removed) = patterns.strip_content(&once);
        prop_assert_eq!(removed, 0);
        prop_assert_eq!(&*once, &*twice);

        let (once, _) = patterns.strip_name(&text);
        let (_, removed) = patterns.strip_name(&once);
        prop_assert_eq!(removed, 0);
    }

    /// Text without identifiers is borrowed back unchanged.
    #[test]
    fn prop_clean_text_untouched(text in "[g-zG-Z0-9_ .]{0,64}") {
        let patterns = GuidPattern::new().unwrap();
        let (stripped, removed) = patterns.strip_content(&text);
        prop_assert_eq!(removed, 0);
        prop_assert_eq!(&*stripped, text.as_str());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Running both sanitizers twice over a tree changes nothing the second
    /// time.
    #[test]
    fn prop_sanitizers_idempotent_on_disk(
        stems in prop::collection::btree_set("[g-z]{1,8}", 1..5),
        id in guid(),
    ) {
        let temp = TempDir::new().unwrap();
        for stem in &stems {
            fs::write(
                temp.path().join(format!("{stem}-{id}.xml")),
                format!("<Id>{id}</Id>"),
            )
            .unwrap();
        }
        let patterns = GuidPattern::new().unwrap();

        let mut first = SanitizeReport::new();
        sanitize_names(temp.path(), &patterns, &mut first, &mut NoopReporter).unwrap();
        sanitize_markup(temp.path(), &patterns, ".xml", &mut first, &mut NoopReporter).unwrap();
        prop_assert_eq!(first.files_renamed, stems.len());
        prop_assert_eq!(first.markup_files_rewritten, stems.len());

        let mut second = SanitizeReport::new();
        sanitize_names(temp.path(), &patterns, &mut second, &mut NoopReporter).unwrap();
        sanitize_markup(temp.path(), &patterns, ".xml", &mut second, &mut NoopReporter).unwrap();
        prop_assert_eq!(second.files_renamed, 0);
        prop_assert_eq!(second.markup_files_rewritten, 0);
        prop_assert_eq!(second.identifiers_removed(), 0);

        for stem in &stems {
            let body = fs::read_to_string(temp.path().join(format!("{stem}.xml"))).unwrap();
            prop_assert_eq!(body, "<Id></Id>");
        }
    }
}
