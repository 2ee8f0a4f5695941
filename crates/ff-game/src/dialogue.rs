use std::borrow::Cow;

use crate::ports::{Audio, Presenter};

/// Speaker label of the player character.
pub const LISA: &str = "Lisa 🧚";

/// One line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// What is said.
    pub text: Cow<'static, str>,
    /// Who says it. Empty for narration.
    pub speaker: &'static str,
    /// Key of a recorded clip, if there is one.
    pub audio_key: Option<&'static str>,
}

impl Line {
    /// A static line without a recorded clip.
    pub const fn new(text: &'static str, speaker: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            speaker,
            audio_key: None,
        }
    }

    /// A static line with a recorded clip.
    pub const fn voiced(text: &'static str, speaker: &'static str, key: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            speaker,
            audio_key: Some(key),
        }
    }

    /// A line built at runtime.
    pub fn formatted(text: String, speaker: &'static str) -> Self {
        Self {
            text: Cow::Owned(text),
            speaker,
            audio_key: None,
        }
    }
}

/// Story shown before the game starts.
pub const INTRO: [&str; 4] = [
    "This is Lisa. She is a fairy! 🧚",
    "Lisa lives in a cute home in the magic forest. 🌲✨",
    "Her forest friends need help!",
    "Can you help them? 💜",
];

/// First lines of a brand new game.
pub static WAKE_UP: [Line; 3] = [
    Line::new("Good morning! ☀️", LISA),
    Line::new("Time to brush my teeth! 🪥", LISA),
    Line::new("Then I can check the mail! 📬", LISA),
];

/// Said on every new morning after a night.
pub static GOOD_MORNING: [Line; 1] = [Line::new("Good morning! ☀️", LISA)];

/// Said when evening falls.
pub static EVENING: [Line; 2] = [
    Line::new("It is getting late! 🌅", LISA),
    Line::new("I need to go home and sleep! 🏠", LISA),
];

/// Said when the last quest is complete.
pub static FINALE: [Line; 3] = [
    Line::new("You did it! All quests done! 🎉🎉🎉", LISA),
    Line::new("Thank you for helping everyone!", LISA),
    Line::new("You are the best fairy! 🧚✨💜", ""),
];

/// Play lines one at a time, each spoken and shown until the player advances.
/// Narration still playing when a line is dismissed is cut off.
pub fn play(audio: &mut dyn Audio, presenter: &mut dyn Presenter, lines: &[Line]) {
    for line in lines {
        audio.speak(&line.text, line.audio_key);
        presenter.show_line(line);
        if audio.is_speaking() {
            audio.stop();
        }
    }
}
