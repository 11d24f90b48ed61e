use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix of a question line ("question").
pub const QUESTION_MARKER: &str = "དྲི་བ།";
/// Prefix of an answer line ("answer").
pub const ANSWER_MARKER: &str = "ལན།";

/// `<marker><digits>.<optional whitespace><text>`; `\d` is Unicode-aware, so
/// Tibetan digits (༡, ༢, …) number a question as well as ASCII ones.
static NUMBERED_QUESTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{}(\d+)\.\s*(.+)", regex::escape(QUESTION_MARKER)))
        .expect("numbered question pattern is valid")
});

/// A question line split into its optional number and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionLine {
    pub number: Option<String>,
    pub text: String,
}

/// Split a trimmed question line. Lines that do not carry a `<digits>.`
/// prefix degrade to "whole remainder, no number".
pub fn split_question(line: &str) -> QuestionLine {
    match NUMBERED_QUESTION.captures(line) {
        Some(caps) => QuestionLine {
            number: Some(caps[1].to_string()),
            text: caps[2].to_string(),
        },
        None => QuestionLine {
            number: None,
            text: strip_marker(line, QUESTION_MARKER),
        },
    }
}

/// Remove every occurrence of `marker` from `line` and trim what is left.
pub fn strip_marker(line: &str, marker: &str) -> String {
    line.replace(marker, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_question() {
        let q = split_question("དྲི་བ།12. What is X?");
        assert_eq!(q.number.as_deref(), Some("12"));
        assert_eq!(q.text, "What is X?");
    }

    #[test]
    fn test_number_without_space() {
        let q = split_question("དྲི་བ།3.རླུང་ནད།");
        assert_eq!(q.number.as_deref(), Some("3"));
        assert_eq!(q.text, "རླུང་ནད།");
    }

    #[test]
    fn test_tibetan_digits() {
        let q = split_question("དྲི་བ།༡༢. མཁྲིས་པ།");
        assert_eq!(q.number.as_deref(), Some("༡༢"));
        assert_eq!(q.text, "མཁྲིས་པ།");
    }

    #[test]
    fn test_unnumbered_question_keeps_remainder() {
        let q = split_question("དྲི་བ། བད་ཀན་གྱི་ནད་རྟགས་གང་ཡིན།");
        assert_eq!(q.number, None);
        assert_eq!(q.text, "བད་ཀན་གྱི་ནད་རྟགས་གང་ཡིན།");
    }

    #[test]
    fn test_number_with_no_text_is_unnumbered() {
        let q = split_question("དྲི་བ།7.");
        assert_eq!(q.number, None);
        assert_eq!(q.text, "7.");
    }

    #[test]
    fn test_strip_marker_removes_every_occurrence() {
        assert_eq!(strip_marker("ལན། a ལན།b ", ANSWER_MARKER), "a b");
        assert_eq!(strip_marker("ལན།", ANSWER_MARKER), "");
    }
}
