use lazy_static::lazy_static;
use regex::Regex;

use super::CharFilter;

/// Characters replaced by the punctuation filter. Apostrophes, letters and
/// digits are never in this list.
pub const DENIED_CHARACTERS: &str = concat!(
    "\n\t\r",
    ".,!?;:\"()[]{}/<>\\|",
    "@#$%^&*+-=_~`",
    "«»",
    "§¶†‡•·",
);

lazy_static! {
    static ref DENIED_RUN: Regex = {
        let class: String = DENIED_CHARACTERS
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Regex::new(&format!(r"[{class}\s]+")).expect("denied character class is valid")
    };
}

/// A char filter that turns runs of punctuation and whitespace into a
/// single space and trims both ends of the text.
///
/// Apostrophes survive so contractions and possessives stay intact.
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    /// Create a new punctuation char filter.
    pub fn new() -> Self {
        PunctuationCharFilter
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in DENIED_RUN.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);

            // Leading and trailing runs are trimmed rather than collapsed.
            if m.start() != 0 && m.end() != input.len() {
                output.push(' ');
            }

            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
