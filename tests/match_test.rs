/// This file contains match tests for single rules to verify the correctness of the default
/// expressions, the built-in detectors and the offset handling.
use tapspan::{MatchEngine, MatchFilter, PatternRule, PatternSource, Span};

/// Test data for the match tests.
/// The test data consists of a rule, an input string and the expected matches as tuples of text,
/// UTF-16 start and UTF-16 end.
#[derive(Debug)]
struct TestData {
    rule: PatternRule,
    input: &'static str,
    expected: &'static [(&'static str, usize, usize)],
}

// A macro to easily create a TestData struct for a rule with an explicit expression.
macro_rules! td {
    ($ctor:ident, $pattern:expr, $input:expr, $expected:expr) => {
        TestData {
            rule: PatternRule::$ctor(PatternSource::Pattern($pattern.to_string())),
            input: $input,
            expected: $expected,
        }
    };
}

// A macro to create a TestData struct for a rule with the system default.
macro_rules! ts {
    ($ctor:ident, $input:expr, $expected:expr) => {
        TestData {
            rule: PatternRule::$ctor(PatternSource::System),
            input: $input,
            expected: $expected,
        }
    };
}

// A macro to create a TestData struct for a custom rule.
macro_rules! tc {
    ($pattern:expr, $input:expr, $expected:expr) => {
        TestData {
            rule: PatternRule::custom($pattern),
            input: $input,
            expected: $expected,
        }
    };
}

fn test_data() -> Vec<TestData> {
    vec![
        // -----------------------------------------------------------------------------------------
        // Topics
        // -----------------------------------------------------------------------------------------
        ts!(topic, "", &[]),
        ts!(topic, "#a#", &[("#a#", 0, 3)]),
        ts!(topic, "x #a#b_1 y", &[("#a#b_1", 2, 8)]),
        ts!(topic, "x#a#", &[]),
        ts!(topic, "\t#tab#", &[("#tab#", 1, 6)]),
        // The topic expression is greedy up to the last '#'.
        ts!(topic, "#a# and #b#", &[("#a# and #b#", 0, 11)]),
        ts!(topic, "\u{1F600} #\u{8bdd}\u{9898}#", &[("#\u{8bdd}\u{9898}#", 3, 7)]),
        td!(topic, r"#\w+", "#a #b", &[("#a", 0, 2), ("#b", 3, 5)]),
        // -----------------------------------------------------------------------------------------
        // Mentions
        // -----------------------------------------------------------------------------------------
        ts!(mention, "@bob", &[("@bob", 0, 4)]),
        ts!(mention, "hi @bob, @alice", &[("@bob", 3, 7), ("@alice", 9, 15)]),
        ts!(mention, "end.@x", &[("@x", 4, 6)]),
        ts!(mention, "mail@example.com", &[]),
        ts!(mention, "@\u{00e9}mile", &[("@\u{00e9}mile", 0, 6)]),
        // -----------------------------------------------------------------------------------------
        // Urls
        // -----------------------------------------------------------------------------------------
        ts!(
            url,
            "read https://docs.rs/regex, then www.example.org.",
            &[("https://docs.rs/regex", 5, 26), ("www.example.org", 33, 48)]
        ),
        ts!(url, "nothing to see", &[]),
        ts!(url, "(see https://example.com)", &[("https://example.com", 5, 24)]),
        ts!(
            url,
            "\u{770b}https://example.com\u{4f60}\u{597d}",
            &[("https://example.com", 1, 20)]
        ),
        td!(url, r"https?://\S+", "a http://x.y b", &[("http://x.y", 2, 12)]),
        // -----------------------------------------------------------------------------------------
        // Phone numbers
        // -----------------------------------------------------------------------------------------
        ts!(phone_number, "call 13345678910", &[("13345678910", 5, 16)]),
        ts!(phone_number, "(555) 123-4567", &[("(555) 123-4567", 0, 14)]),
        // Numbers inside longer digit runs are no phone numbers.
        ts!(phone_number, "id 8613345678910 x", &[]),
        ts!(phone_number, "order 12345678901234", &[]),
        ts!(phone_number, "1334567891012", &[]),
        td!(phone_number, r"\d{11}", "13345678910", &[("13345678910", 0, 11)]),
        // -----------------------------------------------------------------------------------------
        // Custom expressions
        // -----------------------------------------------------------------------------------------
        tc!("ab", "ab ab", &[("ab", 0, 2), ("ab", 3, 5)]),
        tc!("^ab", "ab ab", &[("ab", 0, 2)]),
        tc!(r"x(?P<span>\d+)", "x12 y x3", &[("12", 1, 3), ("3", 7, 8)]),
        tc!("\u{1F600}+", "a\u{1F600}\u{1F600}b", &[("\u{1F600}\u{1F600}", 1, 5)]),
        tc!("(unclosed", "(unclosed", &[]),
    ]
}

#[test]
fn match_test() {
    let _ = env_logger::builder().is_test(true).try_init();
    let engine = MatchEngine::builder().private_cache().build().unwrap();

    for (index, data) in test_data().iter().enumerate() {
        let matches = engine
            .match_rule(&data.rule, data.input, &MatchFilter::new())
            .unwrap();
        let found: Vec<(&str, usize, usize)> = matches
            .iter()
            .map(|ma| (ma.text(), ma.start(), ma.end()))
            .collect();
        assert_eq!(
            found, data.expected,
            "#{}: rule {} on input '{}'",
            index, data.rule, data.input.escape_default()
        );
        for ma in &matches {
            assert_eq!(
                tapspan::substring(data.input, ma.span()),
                Some(ma.text()),
                "#{}: span {} does not address '{}'",
                index,
                ma.span(),
                ma.text()
            );
            assert_eq!(&data.input[ma.byte_span().range()], ma.text());
        }
    }
}

#[test]
fn match_details_hold_the_whole_hit() {
    let engine = MatchEngine::builder().private_cache().build().unwrap();
    let matches = engine
        .match_rule(
            &PatternRule::mention(PatternSource::System),
            "hi @bob",
            &MatchFilter::new(),
        )
        .unwrap();
    let details = matches[0].details().unwrap();
    assert_eq!(details.whole(), Some(Span::new(2, 7)));
    assert_eq!(matches[0].span(), Span::new(3, 7));
}
