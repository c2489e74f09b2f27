//! Mood context: how the listener says they feel.
//!
//! Moods come from a fixed vocabulary. Nothing here infers a mood; input is
//! matched against canonical names and a small alias table.

use crate::error::ContextError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Focus,
    Relaxed,
    Energetic,
    Melancholic,
    Peaceful,
}

const ALL_MOODS: [Mood; 8] = [
    Mood::Happy,
    Mood::Sad,
    Mood::Excited,
    Mood::Focus,
    Mood::Relaxed,
    Mood::Energetic,
    Mood::Melancholic,
    Mood::Peaceful,
];

impl Mood {
    pub fn all() -> &'static [Mood] {
        &ALL_MOODS
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Focus => "focus",
            Mood::Relaxed => "relaxed",
            Mood::Energetic => "energetic",
            Mood::Melancholic => "melancholic",
            Mood::Peaceful => "peaceful",
        }
    }

    /// Alternate spellings accepted by [`Mood::from_str`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &["upbeat", "cheerful"],
            Mood::Sad => &["down", "blue"],
            Mood::Excited => &["hyped"],
            Mood::Focus => &["focused", "study", "work"],
            Mood::Relaxed => &["chill"],
            Mood::Energetic => &["workout", "pumped"],
            Mood::Melancholic => &["nostalgic"],
            Mood::Peaceful => &["calm"],
        }
    }

    /// Descriptive keywords for display.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &["bright", "uplifting", "major key"],
            Mood::Sad => &["slow", "minor key", "introspective"],
            Mood::Excited => &["fast", "driving", "anthemic"],
            Mood::Focus => &["steady", "instrumental", "minimal"],
            Mood::Relaxed => &["laid-back", "warm", "mellow"],
            Mood::Energetic => &["high tempo", "punchy", "percussive"],
            Mood::Melancholic => &["wistful", "bittersweet", "atmospheric"],
            Mood::Peaceful => &["ambient", "soft", "spacious"],
        }
    }

    fn matches(&self, input: &str) -> bool {
        self.as_str() == input || self.aliases().iter().any(|alias| *alias == input)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ALL_MOODS
            .iter()
            .copied()
            .find(|mood| mood.matches(&normalized))
            .ok_or_else(|| ContextError::UnknownMood {
                input: s.to_string(),
                expected: ALL_MOODS
                    .iter()
                    .map(Mood::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// The mood a listening session is declared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodContext {
    mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input: Option<String>,
}

impl MoodContext {
    pub fn new(mood: Mood) -> Self {
        Self { mood, input: None }
    }

    /// Parse free-form user input, keeping the original text.
    pub fn parse(input: &str) -> Result<Self, ContextError> {
        let mood = input.parse::<Mood>()?;
        Ok(Self {
            mood,
            input: Some(input.trim().to_string()),
        })
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.mood.keywords()
    }

    pub fn describe(&self) -> String {
        format!("{} ({})", self.mood, self.keywords().join(", "))
    }
}

impl From<Mood> for MoodContext {
    fn from(mood: Mood) -> Self {
        Self::new(mood)
    }
}

impl fmt::Display for MoodContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
