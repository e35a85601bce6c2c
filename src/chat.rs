use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "Romy",
        }
    }
}

/// One line of conversation from the chat collaborator. The rest of the
/// app never interprets the text; it only displays it.
#[derive(Clone, Debug)]
pub struct Utterance {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl Utterance {
    pub fn user(text: &str) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.to_owned(),
            at: Utc::now(),
        }
    }

    pub fn assistant(text: &str) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.to_owned(),
            at: Utc::now(),
        }
    }
}

/// Canned conversation standing in for the external voice widget.
const SCRIPT: [&str; 5] = [
    "Hi! I'm Romy. I'll help you find local communities that match what you love doing.",
    "Tell me about the things you spend your free time on, or tap one of the topics below.",
    "Photography, cooking, a bit of yoga... that's a lovely mix. Anything more niche?",
    "Got it. I've added what we talked about to your interest graph.",
    "When you're ready, finish the conversation and have a look at your profile.",
];

const SCRIPT_LINE_DELAY: Duration = Duration::from_millis(2600);

/// Topics the assistant floats during the conversation. Mock data, like
/// everything else behind the widget boundary.
pub const SUGGESTED_TOPICS: [&str; 6] = [
    "Photography",
    "Cooking",
    "Yoga",
    "Bouldering",
    "Board Games",
    "Urban Sketching",
];

/// Plays the script on a background thread. Dropping the receiver ends the
/// playback; there is nothing to join or cancel.
pub fn spawn_scripted_assistant() -> Receiver<Utterance> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for line in SCRIPT {
            thread::sleep(SCRIPT_LINE_DELAY);
            if tx.send(Utterance::assistant(line)).is_err() {
                break;
            }
        }
    });

    rx
}
