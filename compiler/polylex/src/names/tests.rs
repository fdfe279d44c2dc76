use super::*;
use crate::tokenize;
use pretty_assertions::assert_eq;

fn words(ident: &str) -> Vec<String> {
    split_soft_words(ident)
}

#[test]
fn camel_and_pascal_case() {
    assert_eq!(words("getUserName"), vec!["get", "user", "name"]);
    assert_eq!(words("ArrayList"), vec!["array", "list"]);
}

#[test]
fn acronyms() {
    assert_eq!(words("HTTPServer"), vec!["http", "server"]);
    assert_eq!(words("parseXML"), vec!["parse", "xml"]);
    assert_eq!(words("URL"), vec!["url"]);
}

#[test]
fn separators_and_underscores() {
    assert_eq!(words("__init__"), vec!["init"]);
    assert_eq!(words("MAX_BUFFER_SIZE"), vec!["max", "buffer", "size"]);
    assert_eq!(words("string-join"), vec!["string", "join"]);
    assert_eq!(words("empty?"), vec!["empty"]);
    assert_eq!(words("_"), Vec::<String>::new());
}

#[test]
fn digit_boundaries() {
    assert_eq!(words("utf8Decode"), vec!["utf", "8", "decode"]);
    assert_eq!(words("parseHTTPResponse2"), vec!["parse", "http", "response", "2"]);
}

#[test]
fn non_ascii_letters() {
    assert_eq!(words("größeBerechnen"), vec!["größe", "berechnen"]);
}

#[test]
fn identifier_names_skip_keywords_and_annotations() {
    let Ok(file) = tokenize("@Override public int getSize() { return mSize; }", "java") else {
        panic!("java is builtin");
    };
    assert_eq!(identifier_names(file.tokens()), vec!["getSize", "mSize"]);
}

#[test]
fn frequencies_and_probabilities() {
    let mut freq = WordFrequencies::new();
    freq.add_identifier("getSize");
    freq.add_identifier("setSize");
    freq.add_identifier("size");
    assert_eq!(freq.total(), 5);
    assert_eq!(freq.len(), 3);
    assert_eq!(freq.count("size"), 3);
    assert_eq!(freq.count("missing"), 0);
    assert_eq!(freq.ranked(), vec![("size", 3), ("get", 1), ("set", 1)]);
    assert!((freq.probability("size") - 0.6).abs() < 1e-9);
    let probabilities = freq.probabilities();
    let total: f64 = probabilities.iter().map(|(_, p)| p).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn empty_frequencies() {
    let freq = WordFrequencies::new();
    assert!(freq.is_empty());
    assert_eq!(freq.probability("x"), 0.0);
    assert!(freq.ranked().is_empty());
}

#[test]
fn merge_adds_counts() {
    let mut a = WordFrequencies::new();
    a.add_identifier("readFile");
    let mut b = WordFrequencies::new();
    b.add_identifier("writeFile");
    a.merge(&b);
    assert_eq!(a.count("file"), 2);
    assert_eq!(a.total(), 4);
    assert_eq!(a.ranked()[0], ("file", 2));
}

#[test]
fn add_tokens_counts_identifiers() {
    let Ok(file) = tokenize("def read_file(path): return open(path)", "python") else {
        panic!("python is builtin");
    };
    let mut freq = WordFrequencies::new();
    freq.add_tokens(file.tokens());
    assert_eq!(freq.count("path"), 2);
    assert_eq!(freq.count("read"), 1);
    assert_eq!(freq.count("def"), 0);
}
