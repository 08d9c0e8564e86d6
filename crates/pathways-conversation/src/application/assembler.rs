//! Response assembler: folds a turn into log entries.

use crate::domain::entries::{BotEntry, DetailItem, EnrichedItem, LogEntry, PathItem, TimelineItem, UserEntry};

/// A turn's content after illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichedOutput {
    /// Illustrated career paths.
    Paths(Vec<EnrichedItem<PathItem>>),
    /// A detailed answer.
    Detail(DetailItem),
    /// Illustrated timeline milestones.
    Timeline(Vec<EnrichedItem<TimelineItem>>),
}

impl EnrichedOutput {
    /// Number of bot entries the output produces.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Paths(items) => items.len(),
            Self::Detail(_) => 1,
            Self::Timeline(items) => items.len(),
        }
    }

    /// Whether the output produces no bot entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The entries a turn appends: the user's entry first, then the bot entries
/// in the order the content was generated.
#[must_use]
pub fn assemble(user: UserEntry, output: EnrichedOutput) -> Vec<LogEntry> {
    let mut entries = Vec::with_capacity(output.len() + 1);
    entries.push(LogEntry::User(user));

    match output {
        EnrichedOutput::Paths(items) => {
            entries.extend(items.into_iter().map(|i| LogEntry::Bot(BotEntry::Path(i))));
        }
        EnrichedOutput::Detail(detail) => entries.push(LogEntry::Bot(BotEntry::Detail(detail))),
        EnrichedOutput::Timeline(items) => {
            entries.extend(items.into_iter().map(|i| LogEntry::Bot(BotEntry::Timeline(i))));
        }
    }

    entries
}
