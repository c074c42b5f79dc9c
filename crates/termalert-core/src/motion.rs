//! Entrance animation sequencing
//!
//! The alert's scale-bounce entrance is an explicit list of [`ScaleStep`]s
//! executed strictly in order by a [`ScaleSequence`]: shrink, overshoot,
//! settle. A step begins only when its predecessor has run to completion,
//! so a late tick stretches the timeline instead of skipping a phase. Time
//! is passed in by the caller, which keeps the sequencer deterministic under
//! test.

use std::time::{Duration, Instant};

/// Scale factor the card shrinks to at the start of the entrance.
pub const ENTRANCE_SHRINK: f32 = 0.10;

/// Overshoot scale factor before settling.
pub const ENTRANCE_OVERSHOOT: f32 = 1.15;

/// Final resting scale factor.
pub const ENTRANCE_SETTLE: f32 = 1.0;

/// Duration of each entrance phase.
pub const ENTRANCE_PHASE: Duration = Duration::from_millis(150);

/// One animation step: interpolate the scale to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep {
    pub target: f32,
    pub duration: Duration,
}

impl ScaleStep {
    pub fn new(target: f32, duration: Duration) -> Self {
        Self { target, duration }
    }
}

/// Executes an ordered list of scale steps, one at a time.
#[derive(Debug, Clone)]
pub struct ScaleSequence {
    steps: Vec<ScaleStep>,
    /// Index of the active step; equals `steps.len()` once settled.
    current: usize,
    /// When the active step began.
    step_started: Instant,
    /// Scale at the start of the active step.
    from: f32,
    complete_seen: bool,
}

impl ScaleSequence {
    pub fn new(start_scale: f32, steps: Vec<ScaleStep>, now: Instant) -> Self {
        let complete = steps.is_empty();
        Self {
            steps,
            current: 0,
            step_started: now,
            from: start_scale,
            complete_seen: complete,
        }
    }

    /// The three-phase entrance: shrink to 0.10, overshoot to 1.15, settle
    /// at 1.0, each over [`ENTRANCE_PHASE`].
    pub fn entrance(now: Instant) -> Self {
        Self::new(
            ENTRANCE_SETTLE,
            vec![
                ScaleStep::new(ENTRANCE_SHRINK, ENTRANCE_PHASE),
                ScaleStep::new(ENTRANCE_OVERSHOOT, ENTRANCE_PHASE),
                ScaleStep::new(ENTRANCE_SETTLE, ENTRANCE_PHASE),
            ],
            now,
        )
    }

    /// Advance the sequence, starting the next step if the active one has
    /// completed. At most one step hand-off happens per call: the hand-off
    /// *is* the completion signal, and the successor's clock starts at the
    /// moment it is observed.
    pub fn advance(&mut self, now: Instant) {
        let Some(step) = self.steps.get(self.current) else {
            return;
        };
        if now.duration_since(self.step_started) >= step.duration {
            self.from = step.target;
            self.current += 1;
            self.step_started = now;
        }
    }

    /// Current scale factor, interpolated within the active step.
    pub fn scale_at(&self, now: Instant) -> f32 {
        let Some(step) = self.steps.get(self.current) else {
            return self.from;
        };
        let elapsed = now.duration_since(self.step_started);
        if elapsed >= step.duration {
            return step.target;
        }
        let t = elapsed.as_secs_f32() / step.duration.as_secs_f32();
        lerp(self.from, step.target, t)
    }

    /// Zero-based index of the active step, `None` once settled.
    pub fn current_phase(&self) -> Option<usize> {
        (self.current < self.steps.len()).then_some(self.current)
    }

    pub fn phase_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    /// True once every step has run to completion. Never reverts.
    pub fn is_complete(&self) -> bool {
        self.current >= self.steps.len()
    }

    /// One-shot completion signal: true on the first call after the final
    /// step settles, false forever after.
    pub fn just_completed(&mut self) -> bool {
        if self.is_complete() && !self.complete_seen {
            self.complete_seen = true;
            return true;
        }
        false
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
