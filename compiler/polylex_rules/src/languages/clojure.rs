use crate::{LanguageRules, LanguageRulesBuilder, QuoteRule};

pub(crate) fn rules() -> LanguageRulesBuilder {
    LanguageRules::builder("clojure")
        .name("Clojure")
        .aliases(["clj"])
        .extensions(["clj", "cljs", "cljc", "edn"])
        // Symbols may use most punctuation; `:` starts a keyword literal.
        .ident_start_also(b"*+!-_?<>=/.&%:")
        .ident_continue_also(b"'#$")
        .keywords([
            "def", "defn", "defn-", "defmacro", "defmulti", "defmethod", "defprotocol",
            "defrecord", "deftype", "defonce", "fn", "fn*", "let", "letfn", "loop", "recur",
            "if", "if-not", "if-let", "when", "when-not", "when-let", "cond", "condp", "case",
            "do", "doseq", "dotimes", "quote", "var", "throw", "try", "catch", "finally",
            "new", "set!", "ns", "import", "require", "nil", "true", "false",
        ])
        .operators(["'", "`", "~", "~@", "^", "@", "#", "#'", "#_"])
        .punctuation([","])
        .line_comment(";")
        .quote(QuoteRule::string("\"").multiline())
        .quote(QuoteRule::prefixed_string("#", "\"").multiline())
        .quote(QuoteRule::prefixed_char("\\"))
}
