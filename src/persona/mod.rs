// src/persona/mod.rs
// Response styles and tone selection for the therapist prompt.

pub mod prompts;

use prompts::{
    CALM_STYLE, CBT_STYLE, FEMALE_TONE, MALE_TONE, MINDFULNESS_STYLE, MOTIVATIONAL_STYLE,
};

/// Named response style chosen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    #[default]
    Calm,
    Motivational,
    Cbt,
    Mindfulness,
}

impl Persona {
    /// Lenient parse: anything unrecognized is the calm default.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "motivational" => Persona::Motivational,
            "cbt" => Persona::Cbt,
            "mindfulness" => Persona::Mindfulness,
            _ => Persona::Calm,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::Calm => CALM_STYLE,
            Persona::Motivational => MOTIVATIONAL_STYLE,
            Persona::Cbt => CBT_STYLE,
            Persona::Mindfulness => MINDFULNESS_STYLE,
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Persona::Calm => "calm",
                Persona::Motivational => "motivational",
                Persona::Cbt => "cbt",
                Persona::Mindfulness => "mindfulness",
            }
        )
    }
}

/// Voice of the therapist. Only "male" selects the direct tone; every other
/// value, including unknown ones, gets the nurturing tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Direct,
    #[default]
    Nurturing,
}

impl Tone {
    pub fn for_gender(gender: &str) -> Self {
        if gender.trim().eq_ignore_ascii_case("male") {
            Tone::Direct
        } else {
            Tone::Nurturing
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Tone::Direct => MALE_TONE,
            Tone::Nurturing => FEMALE_TONE,
        }
    }
}
