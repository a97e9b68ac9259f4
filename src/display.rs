//! Display rules: digit cells, display modes, page title and control state.

use crate::config::{FINISHED_TITLE, SECOND_PLURAL, SECOND_SINGULAR, WARNING_AT_SECONDS};
use crate::edit::{PendingEdit, TimePart};

/// Zero-pad `value` to two digits and split it into its two characters.
///
/// Values above 99 cannot occur for hours (edits are capped at 99:59:59) and
/// never for minutes or seconds, so they are clamped rather than widened.
pub fn two_digit_cells(value: u32) -> (char, char) {
    let v = value.min(99);
    let tens = char::from_digit(v / 10, 10).unwrap_or('0');
    let units = char::from_digit(v % 10, 10).unwrap_or('0');
    (tens, units)
}

/// Format a total number of seconds as `HH:MM:SS`.
pub fn format_clock(total: u32) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        TimePart::Hours.of(total),
        TimePart::Minutes.of(total),
        TimePart::Seconds.of(total)
    )
}

/// Singular or plural word for a seconds count.
pub fn seconds_word(count: u32) -> &'static str {
    if count == 1 {
        SECOND_SINGULAR
    } else {
        SECOND_PLURAL
    }
}

/// Bare seconds count with its unit, e.g. `1 segundo`, `7 segundos`.
pub fn last_seconds_text(count: u32) -> String {
    format!("{} {}", count, seconds_word(count))
}

/// What the widget is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Full `HH:MM:SS` digit row.
    Clock,
    /// Running with ten seconds or less left: only the bare count is shown.
    LastSeconds,
    /// The countdown reached zero.
    Finished,
}

impl DisplayMode {
    pub fn resolve(remaining: u32, running: bool, finished: bool) -> Self {
        if finished {
            DisplayMode::Finished
        } else if running && remaining > 0 && remaining <= WARNING_AT_SECONDS {
            DisplayMode::LastSeconds
        } else {
            DisplayMode::Clock
        }
    }
}

/// Document title for the given mode.
pub fn page_title(mode: DisplayMode, remaining: u32) -> String {
    match mode {
        DisplayMode::Finished => FINISHED_TITLE.to_string(),
        DisplayMode::LastSeconds => last_seconds_text(TimePart::Seconds.of(remaining)),
        DisplayMode::Clock => format_clock(remaining),
    }
}

/// Which controls are visible or enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub start_disabled: bool,
    pub pause_disabled: bool,
    /// Start, Pause and the edit toggle; gone once finished.
    pub show_run_buttons: bool,
    /// The whole row holding edit toggle, reset, pause and start.
    pub show_control_row: bool,
    pub show_confirm_edit: bool,
    pub cells_readonly: bool,
    pub show_logo: bool,
}

impl ControlState {
    pub fn resolve(mode: DisplayMode, running: bool, editing: bool) -> Self {
        let finished = mode == DisplayMode::Finished;
        let last_seconds = mode == DisplayMode::LastSeconds;
        Self {
            start_disabled: running,
            pause_disabled: !running,
            show_run_buttons: !finished,
            show_control_row: !editing && !last_seconds,
            show_confirm_edit: editing,
            cells_readonly: !editing,
            show_logo: !finished && !last_seconds,
        }
    }
}

/// Text of the two cells of one time part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitPair {
    pub left: String,
    pub right: String,
}

impl DigitPair {
    pub fn from_value(value: u32) -> Self {
        let (left, right) = two_digit_cells(value);
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl From<&PendingEdit> for DigitPair {
    fn from(edit: &PendingEdit) -> Self {
        Self {
            left: edit.left.clone(),
            right: edit.right.clone(),
        }
    }
}

/// Everything the view needs to render one frame of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub mode: DisplayMode,
    pub hours: DigitPair,
    pub minutes: DigitPair,
    pub seconds: DigitPair,
    /// Seconds count for the last-seconds display.
    pub last_seconds: u32,
    pub title: String,
    pub controls: ControlState,
}

impl ClockFace {
    pub fn pair(&self, part: TimePart) -> &DigitPair {
        match part {
            TimePart::Hours => &self.hours,
            TimePart::Minutes => &self.minutes,
            TimePart::Seconds => &self.seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_zero_padded() {
        assert_eq!(two_digit_cells(0), ('0', '0'));
        assert_eq!(two_digit_cells(7), ('0', '7'));
        assert_eq!(two_digit_cells(42), ('4', '2'));
        assert_eq!(two_digit_cells(150), ('9', '9'));
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(15), "00:00:15");
        assert_eq!(format_clock(3630), "01:00:30");
        assert_eq!(format_clock(359_999), "99:59:59");
    }

    #[test]
    fn seconds_word_choice() {
        assert_eq!(seconds_word(1), "segundo");
        assert_eq!(seconds_word(0), "segundos");
        assert_eq!(seconds_word(2), "segundos");
        assert_eq!(last_seconds_text(1), "1 segundo");
        assert_eq!(last_seconds_text(10), "10 segundos");
    }

    #[test]
    fn mode_resolution() {
        assert_eq!(DisplayMode::resolve(15, false, false), DisplayMode::Clock);
        assert_eq!(DisplayMode::resolve(15, true, false), DisplayMode::Clock);
        assert_eq!(DisplayMode::resolve(11, true, false), DisplayMode::Clock);
        assert_eq!(DisplayMode::resolve(10, true, false), DisplayMode::LastSeconds);
        assert_eq!(DisplayMode::resolve(1, true, false), DisplayMode::LastSeconds);
        // paused inside the last ten seconds shows the clock again
        assert_eq!(DisplayMode::resolve(5, false, false), DisplayMode::Clock);
        assert_eq!(DisplayMode::resolve(0, false, true), DisplayMode::Finished);
    }

    #[test]
    fn titles_follow_mode() {
        assert_eq!(page_title(DisplayMode::Clock, 75), "00:01:15");
        assert_eq!(page_title(DisplayMode::LastSeconds, 1), "1 segundo");
        assert_eq!(page_title(DisplayMode::LastSeconds, 9), "9 segundos");
        assert_eq!(page_title(DisplayMode::Finished, 0), "FINALIZOU SEU TEMPORIZER!");
    }

    #[test]
    fn controls_while_idle() {
        let c = ControlState::resolve(DisplayMode::Clock, false, false);
        assert!(!c.start_disabled);
        assert!(c.pause_disabled);
        assert!(c.show_run_buttons);
        assert!(c.show_control_row);
        assert!(!c.show_confirm_edit);
        assert!(c.cells_readonly);
        assert!(c.show_logo);
    }

    #[test]
    fn controls_while_running_and_editing() {
        let running = ControlState::resolve(DisplayMode::Clock, true, false);
        assert!(running.start_disabled);
        assert!(!running.pause_disabled);

        let editing = ControlState::resolve(DisplayMode::Clock, false, true);
        assert!(!editing.show_control_row);
        assert!(editing.show_confirm_edit);
        assert!(!editing.cells_readonly);
    }

    #[test]
    fn controls_in_last_seconds_and_finished() {
        let last = ControlState::resolve(DisplayMode::LastSeconds, true, false);
        assert!(!last.show_control_row);
        assert!(!last.show_logo);

        let done = ControlState::resolve(DisplayMode::Finished, false, false);
        assert!(!done.show_run_buttons);
        assert!(done.show_control_row);
        assert!(!done.show_logo);
    }
}
