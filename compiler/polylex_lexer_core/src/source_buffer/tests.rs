use super::*;
use pretty_assertions::assert_eq;

#[test]
fn clean_source_has_no_issues() {
    let buf = SourceBuffer::new("int x = 1;\n");
    assert!(buf.encoding_issues().is_empty());
    assert_eq!(buf.len(), 11);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_str(), "int x = 1;\n");
}

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert!(buf.cursor().is_eof());
}

#[test]
fn interior_nulls_are_reported() {
    let buf = SourceBuffer::new("a\0b\0");
    assert_eq!(
        buf.encoding_issues(),
        &[
            EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: 1,
                len: 1,
            },
            EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: 3,
                len: 1,
            },
        ]
    );
}

#[test]
fn leading_bom_is_not_an_issue() {
    let buf = SourceBuffer::new("\u{FEFF}x");
    assert!(buf.has_leading_bom());
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn stray_bom_is_reported() {
    let buf = SourceBuffer::new("\u{FEFF}x\u{FEFF}\0");
    assert_eq!(
        buf.encoding_issues(),
        &[
            EncodingIssue {
                kind: EncodingIssueKind::StrayBom,
                pos: 4,
                len: 3,
            },
            EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: 7,
                len: 1,
            },
        ]
    );
}
