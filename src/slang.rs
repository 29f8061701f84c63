// src/slang.rs
//! Gen-Z restyling of replies, applied at the HTTP edge when a client opts in.

/// Lowercased token -> replacement phrase.
const SLANG_TABLE: &[(&str, &str)] = &[
    ("hello", "yo fam"),
    ("friend", "bestie"),
    ("good", "bussin"),
    ("great", "fire"),
    ("cool", "lit"),
    ("really", "lowkey"),
    ("amazing", "slay"),
    ("sad", "in my feels"),
];

fn lookup(token: &str) -> Option<&'static str> {
    let lowered = token.to_lowercase();
    SLANG_TABLE
        .iter()
        .find(|(word, _)| *word == lowered)
        .map(|(_, phrase)| *phrase)
}

/// Replace every whitespace-delimited token found in the table.
///
/// Tokens are matched case-insensitively and whole: `"Hello,"` keeps its comma and
/// therefore does not match. The output is rejoined with single spaces, so runs of
/// whitespace and newlines in the input collapse.
pub fn genz_transform(text: &str) -> String {
    text.split_whitespace()
        .map(|token| lookup(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_tokens_case_insensitively() {
        assert_eq!(genz_transform("Hello my FRIEND"), "yo fam my bestie");
    }

    #[test]
    fn keeps_unknown_tokens_verbatim() {
        assert_eq!(genz_transform("Breathe In slowly"), "Breathe In slowly");
    }

    #[test]
    fn punctuation_blocks_a_match() {
        assert_eq!(genz_transform("hello, friend."), "hello, friend.");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(genz_transform("  that   is\n\tgood "), "that is bussin");
        assert_eq!(genz_transform(""), "");
    }

    #[test]
    fn idempotent_without_dictionary_words() {
        let text = "take  a deep\nbreath";
        let once = genz_transform(text);
        assert_eq!(genz_transform(&once), once);
    }
}
