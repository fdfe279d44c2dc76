use super::*;
use crate::classify::classify;
use polylex_lexer_core::{scan, LineCounter, SourceBuffer};
use polylex_rules::global;
use pretty_assertions::assert_eq;

struct Tracked<'a> {
    events: Vec<(StructureError, &'a str)>,
    regions: Vec<(FrameKind, &'a str, u32)>,
    unclosed: Vec<FrameKind>,
}

fn track<'a>(source: &'a str, lang: &str, generics: bool) -> Tracked<'a> {
    let rules = match global().lookup(lang) {
        Ok(rules) => rules,
        Err(err) => panic!("{err}"),
    };
    let buf = SourceBuffer::new(source);
    let mut tracker = NestingTracker::new(rules, generics, true);
    let mut lines = LineCounter::new();
    let mut offset = 0u32;
    let mut previous: Option<Token<'a>> = None;
    let mut events = Vec::new();
    for raw in scan(&buf, rules) {
        let end = offset + raw.len;
        let text = &source[offset as usize..end as usize];
        let start_pos = lines.position();
        let end_pos = lines.advance(text);
        let span = SourceSpan::new(source, polylex_ir::Span::new(offset, end), start_pos, end_pos);
        let kind = classify(&span, raw.tag, previous.as_ref(), rules);
        let token = Token::new(span, kind, Some(rules.id()));
        if let Some(event) = tracker.observe(&token, raw.tag, rules) {
            events.push((event.error, event.at.text()));
        }
        previous = Some(token);
        offset = end;
    }
    let (regions, unclosed) = tracker.finish();
    Tracked {
        events,
        regions: regions
            .iter()
            .map(|r| (r.kind, r.full_span().text(), r.depth))
            .collect(),
        unclosed: unclosed.iter().map(|f| f.kind).collect(),
    }
}

#[test]
fn balanced_delimiters_record_regions() {
    let t = track("f(a[0]) { }", "c", false);
    assert_eq!(t.events, vec![]);
    assert_eq!(t.unclosed, vec![]);
    assert_eq!(
        t.regions,
        vec![
            (FrameKind::Bracket, "[0]", 1),
            (FrameKind::Paren, "(a[0])", 0),
            (FrameKind::Brace, "{ }", 0),
        ]
    );
}

#[test]
fn mismatched_closer_does_not_pop() {
    let t = track("{ ( } )", "java", false);
    assert_eq!(
        t.events,
        vec![(
            StructureError::MismatchedCloser {
                expected: FrameKind::Paren,
                found: FrameKind::Brace,
                opened_at: polylex_ir::Span::new(2, 3),
            },
            "}"
        )]
    );
    // `)` then closes the paren, leaving the brace open.
    assert_eq!(t.unclosed, vec![FrameKind::Brace]);
    assert_eq!(t.regions, vec![(FrameKind::Paren, "( } )", 1)]);
}

#[test]
fn unmatched_closer_on_empty_stack() {
    let t = track("a ) b", "python", false);
    assert_eq!(
        t.events,
        vec![(
            StructureError::UnmatchedCloser {
                found: FrameKind::Paren
            },
            ")"
        )]
    );
    assert_eq!(t.unclosed, vec![]);
}

#[test]
fn unterminated_literals_stay_open() {
    let t = track("x = \"abc", "java", false);
    assert_eq!(t.unclosed, vec![FrameKind::StringLiteral]);
    assert_eq!(t.events, vec![]);

    let t = track("/* open", "c", false);
    assert_eq!(t.unclosed, vec![FrameKind::BlockComment]);
}

#[test]
fn closers_skip_unterminated_literal_frames() {
    let t = track("{ 'ab\n}", "java", false);
    assert_eq!(t.events, vec![]);
    assert_eq!(t.unclosed, vec![FrameKind::StringLiteral]);
}

#[test]
fn terminated_literals_and_comments_are_regions() {
    let t = track("\"s\" /* c */", "c", false);
    assert_eq!(
        t.regions,
        vec![
            (FrameKind::StringLiteral, "\"s\"", 0),
            (FrameKind::BlockComment, "/* c */", 0),
        ]
    );
}

#[test]
fn generic_run_closes_with_shift_operator() {
    let t = track("Map<String, List<Integer>> m;", "java", true);
    assert_eq!(t.events, vec![]);
    assert_eq!(
        t.regions,
        vec![
            (FrameKind::Generic, "<Integer>>", 1),
            (FrameKind::Generic, "<String, List<Integer>>", 0),
        ]
    );
}

#[test]
fn comparison_abandons_generic_run() {
    let t = track("if (i < n) { i++; }", "java", true);
    assert!(t.regions.iter().all(|(kind, _, _)| *kind != FrameKind::Generic));
    assert_eq!(t.unclosed, vec![]);
    assert_eq!(t.events, vec![]);
}

#[test]
fn generic_with_wildcards_and_arrays() {
    let t = track("List<? extends Number[]> xs;", "java", true);
    let generics: Vec<&str> = t
        .regions
        .iter()
        .filter(|(kind, _, _)| *kind == FrameKind::Generic)
        .map(|(_, text, _)| *text)
        .collect();
    assert_eq!(generics, vec!["<? extends Number[]>"]);
}

#[test]
fn too_many_closers_abandon_run() {
    let t = track("a < b >> c", "java", true);
    assert!(t.regions.iter().all(|(kind, _, _)| *kind != FrameKind::Generic));
}

#[test]
fn generics_only_where_enabled() {
    let t = track("List<T> x", "java", false);
    assert_eq!(t.regions, vec![]);
    // C has no generics even when tracking is requested.
    let t = track("a<b> c", "c", true);
    assert_eq!(t.regions, vec![]);
}

#[test]
fn regions_can_be_disabled() {
    let rules = match global().lookup("c") {
        Ok(rules) => rules,
        Err(err) => panic!("{err}"),
    };
    let tracker = NestingTracker::new(rules, false, false);
    assert_eq!(tracker.depth(), 0);
    assert!(tracker.open_frames().is_empty());
    let (regions, unclosed) = tracker.finish();
    assert!(regions.is_empty());
    assert!(unclosed.is_empty());
}
