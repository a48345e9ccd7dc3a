//! Bookkeeping for the bounded produce → validate → reformulate loop.
//!
//! Every action-producing path (umpire ruling, human reply, AI participant,
//! and an agent's own in-character loop) shares the same shape: ask with the
//! base prompt, and after each rejection ask again with a notice prepended,
//! until a candidate is accepted or the budget runs out. [`RetryBudget`]
//! owns the attempt counter and the current prompt; callers drive the loop
//! inline.
//!
//! ```
//! use wargame_core::RetryBudget;
//!
//! let mut budget = RetryBudget::new(3, "Scenario: hold the bridge");
//! let mut accepted = None;
//! while let Some(prompt) = budget.next_prompt() {
//!     if prompt.starts_with("Rejected") {
//!         accepted = Some(budget.attempt());
//!         break;
//!     }
//!     budget.reject("Rejected.");
//! }
//! assert_eq!(accepted, Some(2));
//! ```

/// Attempt counter and prompt state for one retry loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryBudget {
    max_attempts: u32,
    attempt: u32,
    base: String,
    prompt: String,
}

impl RetryBudget {
    /// Creates a budget of `max_attempts` (at least one) starting from `base`.
    pub fn new(max_attempts: u32, base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            max_attempts: max_attempts.max(1),
            attempt: 0,
            prompt: base.clone(),
            base,
        }
    }

    /// Starts the next attempt and returns its prompt, or `None` once the
    /// budget is exhausted.
    pub fn next_prompt(&mut self) -> Option<&str> {
        if self.attempt >= self.max_attempts {
            return None;
        }
        self.attempt += 1;
        Some(&self.prompt)
    }

    /// Records a rejection of the current attempt; the next prompt becomes
    /// `notice` followed by the base prompt.
    pub fn reject(&mut self, notice: &str) {
        self.prompt = format!("{notice} {}", self.base);
    }

    /// Attempts started so far (1-based once the loop is running).
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}
