//! Interactive confirmation of ambiguous merge steps.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// The question asked after a conflict's context lines.
pub const QUESTION: &str = "[Y]es [N]o [A]ll: ";

/// Shown when an answer cannot be understood.
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Category of a confirmation. An "all" answer applies per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// Overwriting a target value that differs from both the edit and the base.
    Edit,
    /// Removing a key the base locale does not have.
    Delete,
}

impl ConflictKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::Edit => "edit",
            ConflictKind::Delete => "delete",
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed answer to a confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    All,
}

impl Answer {
    /// Parses an answer, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Answer::Yes),
            "n" | "no" => Some(Answer::No),
            "a" | "all" => Some(Answer::All),
            _ => None,
        }
    }
}

/// Line-based user interaction used by [`ConflictResolver`].
///
/// This keeps the core library free of direct stdin/stdout access.
pub trait Prompt {
    /// Displays context lines.
    fn show(&mut self, lines: &[String]);

    /// Asks a question and blocks for one line of input.
    ///
    /// Returns `None` when input is closed.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn show(&mut self, lines: &[String]) {
        (**self).show(lines)
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        (**self).ask(question)
    }
}

/// Resolves confirmations one at a time.
///
/// Holds the per-run set of kinds the user approved with "all". A "no"
/// answer yields [`Error::Cancelled`]; closed input yields
/// [`Error::InputClosed`].
pub struct ConflictResolver<P> {
    prompt: P,
    no_confirm: bool,
    auto_approved: HashSet<ConflictKind>,
}

impl<P: Prompt> ConflictResolver<P> {
    pub fn new(prompt: P) -> Self {
        Self {
            prompt,
            no_confirm: false,
            auto_approved: HashSet::new(),
        }
    }

    /// Approves every confirmation without prompting.
    pub fn with_no_confirm(mut self, no_confirm: bool) -> Self {
        self.no_confirm = no_confirm;
        self
    }

    pub fn is_auto_approved(&self, kind: ConflictKind) -> bool {
        self.no_confirm || self.auto_approved.contains(&kind)
    }

    /// Forgets every "all" answer given so far.
    pub fn reset(&mut self) {
        self.auto_approved.clear();
    }

    pub fn into_prompt(self) -> P {
        self.prompt
    }

    /// Asks for confirmation, returning `Ok(())` when approved.
    pub fn confirm(&mut self, kind: ConflictKind, context: &[String]) -> Result<()> {
        if self.is_auto_approved(kind) {
            debug!(%kind, "confirmation auto-approved");
            return Ok(());
        }

        self.prompt.show(context);
        loop {
            let Some(input) = self.prompt.ask(QUESTION)? else {
                debug!(%kind, "input closed while confirming");
                return Err(Error::InputClosed { kind });
            };
            match Answer::parse(&input) {
                Some(Answer::Yes) => return Ok(()),
                Some(Answer::No) => return Err(Error::Cancelled { kind }),
                Some(Answer::All) => {
                    debug!(%kind, "approving remaining confirmations of this kind");
                    self.auto_approved.insert(kind);
                    return Ok(());
                }
                None => self.prompt.show(&[INVALID_INPUT.to_string()]),
            }
        }
    }
}
