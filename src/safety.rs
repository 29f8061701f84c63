// src/safety.rs
//! Crisis keyword screening.

/// Substrings that short-circuit a chat turn to the hotline reply.
/// Plain substring matching: "die" also fires on "died laughing".
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it",
    "self harm",
    "die",
    "worthless",
];

pub const CRISIS_RESPONSE: &str = "It sounds like you are going through something really painful, and you don't have to face it alone. Please reach out right now: call or text 988 (Suicide & Crisis Lifeline, US), or contact your local emergency number. If you are outside the US, findahelpline.com lists free, confidential support near you.";

pub fn is_crisis(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CRISIS_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
