//! Yew reducer wrapping [`Countdown`], so every widget event goes through
//! one update path.

use crate::edit::{Cell, TimePart};
use crate::{Countdown, TickOutcome};
use log::debug;
use std::rc::Rc;
use yew::prelude::*;

/// Every event the widget can receive.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerAction {
    Start,
    Pause,
    Reset,
    ToggleEdit,
    ConfirmEdit,
    EditCell {
        part: TimePart,
        cell: Cell,
        text: String,
    },
    Tick,
}

impl Reducible for Countdown {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TimerAction::Start => {
                if !next.start() {
                    return self;
                }
            }
            TimerAction::Pause => next.pause(),
            TimerAction::Reset => next.reset(),
            TimerAction::ToggleEdit => next.toggle_edit(),
            TimerAction::ConfirmEdit => next.confirm_edit(),
            TimerAction::EditCell { part, cell, text } => {
                if let Err(err) = next.edit_cell(part, cell, &text) {
                    debug!("Rejected {:?} edit: {}", part, err);
                    return self;
                }
            }
            TimerAction::Tick => {
                if next.tick() == TickOutcome::Ignored {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}
