//! Bridge for sourcing actions from human participants.
//!
//! Runtime users plug in [`HumanInput`] implementations so human-controlled
//! participants can be played from a terminal, a scripted fixture, or any
//! other front end. AI participants never go through this bridge.
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, PoisonError};

use wargame_core::{ActionResponse, Participant};

/// Trait for asking a human participant for their reply to a turn.
///
/// Different implementations can handle:
/// - Terminal input (stdin/stdout)
/// - Scripted/replayed answers
/// - Testing fixtures
pub trait HumanInput: Send {
    /// Shows `message` to the human behind `participant` and returns their
    /// raw reply (one line, without the trailing newline).
    fn prompt(&mut self, participant: &Participant, message: &str) -> io::Result<String>;
}

/// Interprets a human reply.
///
/// A JSON object in the [`wargame_core::ActionShape`] format is parsed as-is;
/// anything else becomes the `action` text with no rationale or targets.
pub fn parse_human_reply(reply: &str) -> ActionResponse {
    let reply = reply.trim();
    serde_json::from_str(reply).unwrap_or_else(|_| ActionResponse::new(reply))
}

/// Reads replies from standard input.
#[derive(Debug, Default)]
pub struct StdinInput;

impl HumanInput for StdinInput {
    fn prompt(&mut self, participant: &Participant, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "[{}] {}", participant.label(), message)?;
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

/// Answers prompts from a fixed queue, recording every prompt it was shown.
///
/// Clones share the queue and the record, so a clone kept outside the umpire
/// can inspect what the installed copy was asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    state: Arc<Mutex<ScriptedInputState>>,
}

#[derive(Debug, Default)]
struct ScriptedInputState {
    replies: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = ScriptedInputState {
            replies: replies.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .prompts
            .clone()
    }
}

impl HumanInput for ScriptedInput {
    fn prompt(&mut self, _participant: &Participant, message: &str) -> io::Result<String> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.prompts.push(message.to_owned());
        state.replies.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}
