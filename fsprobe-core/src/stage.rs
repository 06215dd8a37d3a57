/// States of a probe run, in the order they are visited.
///
/// Any stage except [`Stage::Done`] may instead end the run with a [`ProbeError`](crate::ProbeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Opening,
    Stating,
    Reading,
    Checking,
    Closing,
    Done,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Opening,
        Stage::Stating,
        Stage::Reading,
        Stage::Checking,
        Stage::Closing,
        Stage::Done,
    ];

    /// The progress message logged when entering this stage.
    pub fn progress_message(self) -> &'static str {
        match self {
            Stage::Opening => "opening",
            Stage::Stating => "stating",
            Stage::Reading => "reading",
            Stage::Checking => "checking",
            Stage::Closing => "closing",
            Stage::Done => "ok.",
        }
    }

    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Opening => Some(Stage::Stating),
            Stage::Stating => Some(Stage::Reading),
            Stage::Reading => Some(Stage::Checking),
            Stage::Checking => Some(Stage::Closing),
            Stage::Closing => Some(Stage::Done),
            Stage::Done => None,
        }
    }
}
