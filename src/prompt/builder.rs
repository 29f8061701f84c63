use crate::memory::types::ConversationEntry;
use crate::persona::prompts::{BASE_INSTRUCTION, JOURNALING_CLAUSE};
use crate::persona::{Persona, Tone};

/// Cue the model completes as the therapist's next line.
pub const REPLY_CUE: &str = "Therapist:";

/// Builds the therapist system instruction from the client's preferences
pub fn build_system_instruction(gender: &str, persona: &str, journaling: bool) -> String {
    let mut prompt = String::new();

    // 1. Core therapist instruction
    prompt.push_str(BASE_INSTRUCTION);
    prompt.push(' ');

    // 2. Tone
    prompt.push_str(Tone::for_gender(gender).instruction());
    prompt.push(' ');

    // 3. Response style
    prompt.push_str(Persona::from_name(persona).instruction());

    // 4. Optional journaling nudge
    if journaling {
        prompt.push(' ');
        prompt.push_str(JOURNALING_CLAUSE);
    }

    prompt
}

/// Full completion prompt: instruction, recent lines, the new message, then the reply cue.
pub fn build_prompt(system: &str, history: &[ConversationEntry], message: &str) -> String {
    let mut prompt = String::with_capacity(system.len() + message.len() + 64);
    prompt.push_str(system);
    prompt.push_str("\n\n");

    for entry in history {
        prompt.push_str(&entry.to_string());
        prompt.push('\n');
    }

    prompt.push_str(&ConversationEntry::user(message).to_string());
    prompt.push('\n');
    prompt.push_str(REPLY_CUE);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::prompts::{
        CALM_STYLE, CBT_STYLE, FEMALE_TONE, MALE_TONE, MINDFULNESS_STYLE, MOTIVATIONAL_STYLE,
    };

    #[test]
    fn instruction_composes_tone_and_style() {
        let prompt = build_system_instruction("male", "cbt", false);
        assert!(prompt.starts_with(BASE_INSTRUCTION));
        assert!(prompt.contains(MALE_TONE));
        assert!(prompt.contains(CBT_STYLE));
        assert!(!prompt.contains(JOURNALING_CLAUSE));
    }

    #[test]
    fn unknown_values_fall_back() {
        let prompt = build_system_instruction("robot", "zen-master", false);
        assert!(prompt.contains(FEMALE_TONE));
        assert!(prompt.contains(CALM_STYLE));
    }

    #[test]
    fn journaling_clause_is_appended_last() {
        let prompt = build_system_instruction("female", "mindfulness", true);
        assert!(prompt.contains(MINDFULNESS_STYLE));
        assert!(prompt.ends_with(JOURNALING_CLAUSE));
    }

    #[test]
    fn instruction_is_deterministic() {
        assert_eq!(
            build_system_instruction("female", "motivational", true),
            build_system_instruction("female", "motivational", true)
        );
        assert!(build_system_instruction("female", "motivational", true).contains(MOTIVATIONAL_STYLE));
    }

    #[test]
    fn prompt_ends_with_reply_cue() {
        let history = vec![
            ConversationEntry::user("I can't sleep"),
            ConversationEntry::therapist("That sounds exhausting."),
        ];
        let prompt = build_prompt("SYSTEM", &history, "still awake");

        assert_eq!(
            prompt,
            "SYSTEM\n\nUser: I can't sleep\nTherapist: That sounds exhausting.\nUser: still awake\nTherapist:"
        );
    }

    #[test]
    fn prompt_without_history() {
        let prompt = build_prompt("SYSTEM", &[], "hi");
        assert_eq!(prompt, "SYSTEM\n\nUser: hi\nTherapist:");
    }
}
