//! Guided tour progress.
//!
//! ```text
//!            start                 skip / complete
//! inactive ─────────▶ active(k) ─────────────────▶ inactive
//!                      │  ▲
//!               next   │  │ previous
//!                      ▼  │
//!                    active(k±1)
//! ```
//!
//! The tour content (and so the number of steps) belongs to the view. The
//! record puts no upper bound on `current_step`; the view calls `complete`
//! instead of `next` on its last step.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Onboarding {
    pub is_active: bool,
    pub current_step: u32,
    /// Append-only log of steps left forward or completed.
    pub completed_steps: Vec<u32>,
    pub skipped: bool,
}

impl Onboarding {
    /// Restart from step 0. The completed log is kept.
    pub fn start(&mut self) {
        self.is_active = true;
        self.current_step = 0;
        self.skipped = false;
    }

    /// Advance one step and record the step just left, unless it is already
    /// in the log.
    pub fn next(&mut self) {
        let left = self.current_step;
        self.current_step = self.current_step.saturating_add(1);
        if !self.completed_steps.contains(&left) {
            self.completed_steps.push(left);
        }
    }

    pub fn previous(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    pub fn skip(&mut self) {
        self.is_active = false;
        self.skipped = true;
    }

    /// Finish the tour. The final step is always appended, even when the
    /// log already holds it.
    pub fn complete(&mut self) {
        self.is_active = false;
        self.completed_steps.push(self.current_step);
    }

    pub fn is_step_completed(&self, step: u32) -> bool {
        self.completed_steps.contains(&step)
    }
}
