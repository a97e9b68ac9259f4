//! Countdown timer state machine behind the Temporizer widget.
//!
//! [`Countdown`] holds the total seconds left plus the running, finished,
//! edit-mode and warning-played flags. Hours, minutes and seconds are always
//! derived from the total. Scheduling the one-second tick is left to the
//! caller; the countdown only reacts to [`Countdown::tick`].

use log::{debug, info};
use std::fmt;
use std::rc::Rc;

pub mod config;
pub mod cue;
pub mod display;
pub mod edit;
pub mod store;

use config::{INITIAL_SECONDS, WARNING_AT_SECONDS};
use cue::WarningCue;
use display::{page_title, ClockFace, ControlState, DigitPair, DisplayMode};
use edit::{parse_pair, Cell, EditBuffers, EditError, PendingEdit, TimePart};

/// Result of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; the tick was stale and changed nothing.
    Ignored,
    /// One second was counted down.
    Counted { remaining: u32 },
    /// One second was counted down and the warning cue was played.
    Warned { remaining: u32 },
    /// The countdown reached zero.
    Finished,
}

/// Countdown state: total seconds left plus the run, finish and edit flags.
#[derive(Clone)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    running: bool,
    finished: bool,
    editing: bool,
    warning_played: bool,
    buffers: EditBuffers,
    cue: Rc<dyn WarningCue>,
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("initial", &self.initial)
            .field("remaining", &self.remaining)
            .field("running", &self.running)
            .field("finished", &self.finished)
            .field("editing", &self.editing)
            .field("warning_played", &self.warning_played)
            .finish_non_exhaustive()
    }
}

impl Countdown {
    /// Countdown starting from [`INITIAL_SECONDS`].
    pub fn new(cue: Rc<dyn WarningCue>) -> Self {
        Self::with_initial(INITIAL_SECONDS, cue)
    }

    /// Countdown whose start and reset value is `initial` seconds.
    pub fn with_initial(initial: u32, cue: Rc<dyn WarningCue>) -> Self {
        Self {
            initial,
            remaining: initial,
            running: false,
            finished: false,
            editing: false,
            warning_played: false,
            buffers: EditBuffers::from_total(initial),
            cue,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn hours(&self) -> u32 {
        TimePart::Hours.of(self.remaining)
    }

    pub fn minutes(&self) -> u32 {
        TimePart::Minutes.of(self.remaining)
    }

    pub fn seconds(&self) -> u32 {
        TimePart::Seconds.of(self.remaining)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn warning_played(&self) -> bool {
        self.warning_played
    }

    /// Begin or resume counting down. Returns whether anything changed.
    pub fn start(&mut self) -> bool {
        if self.finished || self.editing || self.running {
            return false;
        }

        if self.remaining == 0 {
            self.finish();
            return true;
        }

        self.running = true;
        info!("Countdown started with {}s left", self.remaining);
        self.warn_if_due();
        true
    }

    pub fn pause(&mut self) {
        if self.running {
            debug!("Countdown paused with {}s left", self.remaining);
        }
        self.running = false;
    }

    /// Stop, clear the finished state and go back to the initial value.
    pub fn reset(&mut self) {
        self.running = false;
        self.finished = false;
        self.editing = false;
        self.warning_played = false;
        self.remaining = self.initial;
        self.buffers = EditBuffers::from_total(self.initial);
        debug!("Countdown reset to {}s", self.initial);
    }

    /// Enter edit mode (pausing first) or leave it.
    pub fn toggle_edit(&mut self) {
        if self.finished {
            return;
        }
        self.pause();
        if self.editing {
            self.confirm_edit();
        } else {
            self.editing = true;
            self.buffers = EditBuffers::from_total(self.remaining);
            debug!("Edit mode entered at {}s", self.remaining);
        }
    }

    /// Leave edit mode, re-deriving every cell from the total.
    pub fn confirm_edit(&mut self) {
        self.editing = false;
        self.buffers = EditBuffers::from_total(self.remaining);
        debug!("Edit mode left at {}s", self.remaining);
    }

    /// Replace one time part with the number formed by `left` and `right`.
    ///
    /// On error nothing changes. On success the new total is returned.
    pub fn edit_digit_pair(
        &mut self,
        part: TimePart,
        left: &str,
        right: &str,
    ) -> Result<u32, EditError> {
        if self.finished {
            return Err(EditError::Finished);
        }
        self.sync_buffers_unless_editing();
        let value = parse_pair(left, right)?;
        let total = self.buffers.total_with(part, value)?;

        self.remaining = total;
        // An edited value starts a new run.
        self.warning_played = false;
        self.buffers.set(
            part,
            PendingEdit {
                left: left.to_string(),
                right: right.to_string(),
            },
        );
        debug!("{:?} set to {}, total now {}s", part, value, total);
        Ok(total)
    }

    /// Write one cell of `part` and commit the resulting pair.
    pub fn edit_cell(&mut self, part: TimePart, cell: Cell, text: &str) -> Result<u32, EditError> {
        self.sync_buffers_unless_editing();
        let pending = self.buffers.get(part).with_cell(cell, text);
        self.edit_digit_pair(part, &pending.left, &pending.right)
    }

    /// Total that writing `text` into one cell of `part` would produce,
    /// without applying it.
    pub fn check_cell(&self, part: TimePart, cell: Cell, text: &str) -> Result<u32, EditError> {
        if self.finished {
            return Err(EditError::Finished);
        }
        let synced;
        let buffers = if self.editing {
            &self.buffers
        } else {
            synced = EditBuffers::from_total(self.remaining);
            &synced
        };
        let pending = buffers.get(part).with_cell(cell, text);
        let value = parse_pair(&pending.left, &pending.right)?;
        buffers.total_with(part, value)
    }

    /// Count down one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining == 0 {
            return TickOutcome::Ignored;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.finish();
            TickOutcome::Finished
        } else if self.warn_if_due() {
            TickOutcome::Warned {
                remaining: self.remaining,
            }
        } else {
            TickOutcome::Counted {
                remaining: self.remaining,
            }
        }
    }

    /// Snapshot of everything the view renders.
    pub fn face(&self) -> ClockFace {
        let mode = DisplayMode::resolve(self.remaining, self.running, self.finished);
        let pair = |part: TimePart| {
            if self.editing {
                DigitPair::from(self.buffers.get(part))
            } else {
                DigitPair::from_value(part.of(self.remaining))
            }
        };

        ClockFace {
            mode,
            hours: pair(TimePart::Hours),
            minutes: pair(TimePart::Minutes),
            seconds: pair(TimePart::Seconds),
            last_seconds: self.seconds(),
            title: page_title(mode, self.remaining),
            controls: ControlState::resolve(mode, self.running, self.editing),
        }
    }

    // Buffers are only maintained in edit mode; ticks leave them behind.
    fn sync_buffers_unless_editing(&mut self) {
        if !self.editing {
            self.buffers = EditBuffers::from_total(self.remaining);
        }
    }

    fn warn_if_due(&mut self) -> bool {
        if self.remaining != WARNING_AT_SECONDS || self.warning_played {
            return false;
        }
        self.warning_played = true;
        self.cue.play();
        true
    }

    fn finish(&mut self) {
        self.finished = true;
        self.running = false;
        self.warning_played = false;
        info!("Countdown finished");
    }
}
