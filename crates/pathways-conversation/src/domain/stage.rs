//! Conversation stages and the transition table between them.

/// The kind of content requested from the text collaborator for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Alternative "what if" career paths.
    Paths,
    /// An in-depth answer about one profession.
    Detail,
    /// A step-by-step career timeline.
    Timeline,
}

impl StageKind {
    /// Whether the items produced for this kind are illustrated.
    #[must_use]
    pub fn requires_images(self) -> bool {
        matches!(self, Self::Paths | Self::Timeline)
    }

    /// Short name used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paths => "paths",
            Self::Detail => "detail",
            Self::Timeline => "timeline",
        }
    }
}

/// Where a conversation is in its scripted progression.
///
/// The stage names the last completed turn. A new session starts in
/// `Initial`; every completed turn moves it exactly one step forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// No turn has completed yet.
    #[default]
    Initial,
    /// Alternative paths have been offered.
    PathsOffered,
    /// A detailed answer has been given.
    DetailGiven,
    /// A timeline has been drawn.
    TimelineDrawn,
    /// Open-ended follow-ups; holds how many have completed.
    FollowUp(u32),
}

/// What a turn started from a given stage asks for, and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The content requested for the turn.
    pub request: StageKind,
    /// The stage reached once the turn completes.
    pub next: Stage,
}

impl Stage {
    /// The transition taken by the next turn.
    ///
    /// Once the timeline has been drawn every further turn is an open-ended
    /// detail request.
    #[must_use]
    pub fn transition(self) -> Transition {
        let (request, next) = match self {
            Self::Initial => (StageKind::Paths, Self::PathsOffered),
            Self::PathsOffered => (StageKind::Detail, Self::DetailGiven),
            Self::DetailGiven => (StageKind::Timeline, Self::TimelineDrawn),
            Self::TimelineDrawn => (StageKind::Detail, Self::FollowUp(1)),
            Self::FollowUp(n) => (StageKind::Detail, Self::FollowUp(n.saturating_add(1))),
        };
        Transition { request, next }
    }

    /// Number of turns completed to reach this stage.
    #[must_use]
    pub fn index(self) -> u32 {
        match self {
            Self::Initial => 0,
            Self::PathsOffered => 1,
            Self::DetailGiven => 2,
            Self::TimelineDrawn => 3,
            Self::FollowUp(n) => n.saturating_add(3),
        }
    }

    /// Stable name for the presentation layer.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::PathsOffered => "paths_offered",
            Self::DetailGiven => "detail_given",
            Self::TimelineDrawn => "timeline_drawn",
            Self::FollowUp(_) => "follow_up",
        }
    }
}
