//! Idempotence and convergence properties of header synchronization

use pathmark_content::header::find_header;
use pathmark_content::{CommentStyle, Document, HeaderSpec, synchronize};
use proptest::prelude::*;

fn apply(text: &str, file_type: &str, path: &str) -> String {
    let doc = Document::new(text, file_type);
    let spec = HeaderSpec::new(CommentStyle::resolve(file_type), "Path", path);
    match synchronize(&doc, &spec).unwrap().to_edit(&doc) {
        Some(edit) => edit.apply(doc.text()),
        None => text.to_string(),
    }
}

fn file_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["python", "rust", "html", "css", "sql", "unknown-lang-xyz"])
}

fn body() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(String::new()),
            Just("   ".to_string()),
            Just("#!/usr/bin/env sh".to_string()),
            "[a-z =(){};]{1,20}",
        ],
        0..16,
    )
    .prop_flat_map(|lines| {
        prop::bool::ANY.prop_map(move |crlf| lines.join(if crlf { "\r\n" } else { "\n" }))
    })
}

fn rel_path() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.[a-z]{1,4}"
}

proptest! {
    #[test]
    fn synchronizing_twice_changes_nothing(text in body(), ft in file_type(), path in rel_path()) {
        let once = apply(&text, ft, &path);
        let twice = apply(&once, ft, &path);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn synchronized_document_records_path(text in body(), ft in file_type(), path in rel_path()) {
        let once = apply(&text, ft, &path);
        let doc = Document::new(once, ft);
        let spec = HeaderSpec::new(CommentStyle::resolve(ft), "Path", "other");
        let found = find_header(&doc, &spec).unwrap();
        prop_assert_eq!(found.map(|m| m.captured_path), Some(path));
    }

    #[test]
    fn moving_converges_to_single_header(
        text in body(),
        ft in file_type(),
        first in rel_path(),
        second in rel_path(),
    ) {
        let direct = apply(&text, ft, &second);
        let via_first = apply(&apply(&text, ft, &first), ft, &second);
        prop_assert_eq!(direct, via_first);
    }
}
