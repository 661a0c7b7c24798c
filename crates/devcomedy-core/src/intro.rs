//! Fake-crash boot sequence shown before the page.

use std::time::Duration;

pub const INTRO_STEPS: [&str; 5] = [
    "🚀 Booting up comedy.exe...",
    "ERROR 404: My Motivation Not Found 😱",
    "💥 Server not functioning...",
    "🔍 Searching for caffeine...",
    "☕ Just kidding... I run on coffee and chaos!",
];

const STEP_DELAY: Duration = Duration::from_millis(1200);
const ERROR_STEP_DELAY: Duration = Duration::from_millis(2000);
const FINISH_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Step(usize),
    /// Last step stays on screen a little longer
    Finishing,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroSequence {
    phase: Phase,
}

impl Default for IntroSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroSequence {
    pub fn new() -> Self {
        Self {
            phase: Phase::Step(0),
        }
    }

    /// A sequence that is already over (`--skip-intro`).
    pub fn finished() -> Self {
        Self { phase: Phase::Done }
    }

    /// Text on screen, `None` once done.
    pub fn text(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Step(i) => Some(INTRO_STEPS[i]),
            Phase::Finishing => Some(INTRO_STEPS[INTRO_STEPS.len() - 1]),
            Phase::Done => None,
        }
    }

    /// Index of the visible step.
    pub fn step(&self) -> usize {
        match self.phase {
            Phase::Step(i) => i,
            Phase::Finishing | Phase::Done => INTRO_STEPS.len() - 1,
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step() == INTRO_STEPS.len() - 1
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// How long to wait before the next [`advance`](Self::advance).
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            Phase::Step(1) => Some(ERROR_STEP_DELAY),
            Phase::Step(_) => Some(STEP_DELAY),
            Phase::Finishing => Some(FINISH_DELAY),
            Phase::Done => None,
        }
    }

    pub fn advance(&mut self) {
        self.phase = match self.phase {
            Phase::Step(i) if i + 1 < INTRO_STEPS.len() => Phase::Step(i + 1),
            Phase::Step(_) => Phase::Finishing,
            Phase::Finishing | Phase::Done => Phase::Done,
        };
    }

    /// Escape or the skip button.
    pub fn skip(&mut self) {
        tracing::debug!(step = self.step(), "Intro skipped");
        self.phase = Phase::Done;
    }
}
