//! Digit editing: time parts, cell validation and pending-edit buffers.
//!
//! Each time part is shown as two single-character cells. While the widget is
//! in edit mode the text typed into those cells lives in a [`PendingEdit`]
//! buffer; a pair is committed to the countdown only when both cells hold
//! digits (or nothing at all).

use crate::config::MAX_TOTAL_SECONDS;
use crate::display::two_digit_cells;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// ASCII only: `\d` would also accept other Unicode digit classes.
static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]*$").unwrap());

/// One of the three editable components of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePart {
    Hours,
    Minutes,
    Seconds,
}

impl TimePart {
    pub const ALL: [TimePart; 3] = [TimePart::Hours, TimePart::Minutes, TimePart::Seconds];

    /// Seconds represented by one unit of this part.
    pub fn weight(self) -> u32 {
        match self {
            TimePart::Hours => 3600,
            TimePart::Minutes => 60,
            TimePart::Seconds => 1,
        }
    }

    /// Derive this part's value from a total number of seconds.
    pub fn of(self, total: u32) -> u32 {
        match self {
            TimePart::Hours => total / 3600,
            TimePart::Minutes => (total / 60) % 60,
            TimePart::Seconds => total % 60,
        }
    }

    /// Label used for the input `aria-label`s.
    pub fn label(self) -> &'static str {
        match self {
            TimePart::Hours => "horas",
            TimePart::Minutes => "minutos",
            TimePart::Seconds => "segundos",
        }
    }
}

/// Which of the two cells of a part is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Left,
    Right,
}

/// Reasons a digit edit is rejected. The countdown state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// A cell contained something other than ASCII digits.
    NonNumeric(String),
    /// The pair, or the resulting total, does not fit the display.
    OutOfRange(String),
    /// The countdown has finished and must be reset first.
    Finished,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::NonNumeric(text) => write!(f, "Digit cell is not numeric: {:?}", text),
            EditError::OutOfRange(what) => write!(
                f,
                "Value out of range: {} (maximum is {} seconds)",
                what, MAX_TOTAL_SECONDS
            ),
            EditError::Finished => write!(f, "Countdown has finished; reset before editing"),
        }
    }
}

impl std::error::Error for EditError {}

/// True when `text` is empty or made only of ASCII digits.
pub fn is_digits(text: &str) -> bool {
    DIGITS_REGEX.is_match(text)
}

/// Read a cell pair as one decimal number. Empty text counts as zero.
pub fn parse_pair(left: &str, right: &str) -> Result<u32, EditError> {
    for cell in [left, right] {
        if !is_digits(cell) {
            return Err(EditError::NonNumeric(cell.to_string()));
        }
    }

    let joined = format!("{}{}", left, right);
    if joined.is_empty() {
        return Ok(0);
    }
    joined
        .parse::<u32>()
        .map_err(|_| EditError::OutOfRange(joined.clone()))
}

/// Total seconds for the given hours, minutes and seconds, provided it
/// fits the display.
pub fn checked_total(hours: u32, minutes: u32, seconds: u32) -> Result<u32, EditError> {
    let sum = u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
    u32::try_from(sum)
        .ok()
        .filter(|&t| t <= MAX_TOTAL_SECONDS)
        .ok_or_else(|| EditError::OutOfRange(format!("{} seconds", sum)))
}

/// Text currently held by the two cells of one time part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub left: String,
    pub right: String,
}

impl PendingEdit {
    pub fn from_value(value: u32) -> Self {
        let (left, right) = two_digit_cells(value);
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Copy of this buffer with one cell replaced.
    pub fn with_cell(&self, cell: Cell, text: &str) -> Self {
        let mut next = self.clone();
        match cell {
            Cell::Left => next.left = text.to_string(),
            Cell::Right => next.right = text.to_string(),
        }
        next
    }
}

/// One pending-edit buffer per time part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffers {
    hours: PendingEdit,
    minutes: PendingEdit,
    seconds: PendingEdit,
}

impl EditBuffers {
    pub fn from_total(total: u32) -> Self {
        Self {
            hours: PendingEdit::from_value(TimePart::Hours.of(total)),
            minutes: PendingEdit::from_value(TimePart::Minutes.of(total)),
            seconds: PendingEdit::from_value(TimePart::Seconds.of(total)),
        }
    }

    pub fn get(&self, part: TimePart) -> &PendingEdit {
        match part {
            TimePart::Hours => &self.hours,
            TimePart::Minutes => &self.minutes,
            TimePart::Seconds => &self.seconds,
        }
    }

    fn get_mut(&mut self, part: TimePart) -> &mut PendingEdit {
        match part {
            TimePart::Hours => &mut self.hours,
            TimePart::Minutes => &mut self.minutes,
            TimePart::Seconds => &mut self.seconds,
        }
    }

    /// Total seconds if `part` held `value` and the other two parts kept
    /// their buffered text.
    pub fn total_with(&self, part: TimePart, value: u32) -> Result<u32, EditError> {
        let mut values = [0u32; 3];
        for (slot, p) in values.iter_mut().zip(TimePart::ALL) {
            *slot = if p == part {
                value
            } else {
                let buffered = self.get(p);
                parse_pair(&buffered.left, &buffered.right)?
            };
        }
        let [hours, minutes, seconds] = values;
        checked_total(hours, minutes, seconds)
    }

    /// Store the accepted text for `part`.
    pub fn set(&mut self, part: TimePart, edit: PendingEdit) {
        *self.get_mut(part) = edit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_accept_empty_and_ascii_only() {
        assert!(is_digits(""));
        assert!(is_digits("0"));
        assert!(is_digits("42"));
        assert!(!is_digits("a"));
        assert!(!is_digits("4a"));
        assert!(!is_digits(" 4"));
        assert!(!is_digits("-1"));
        // Arabic-Indic three
        assert!(!is_digits("\u{0663}"));
    }

    #[test]
    fn parse_pair_joins_cells() {
        assert_eq!(parse_pair("0", "1"), Ok(1));
        assert_eq!(parse_pair("4", "5"), Ok(45));
        assert_eq!(parse_pair("", "7"), Ok(7));
        assert_eq!(parse_pair("7", ""), Ok(7));
        assert_eq!(parse_pair("", ""), Ok(0));
    }

    #[test]
    fn parse_pair_rejects_letters_in_either_cell() {
        assert_eq!(parse_pair("x", "1"), Err(EditError::NonNumeric("x".into())));
        assert_eq!(parse_pair("1", "?"), Err(EditError::NonNumeric("?".into())));
    }

    #[test]
    fn parse_pair_rejects_overflowing_text() {
        let long = "9".repeat(12);
        assert!(matches!(parse_pair(&long, "9"), Err(EditError::OutOfRange(_))));
    }

    #[test]
    fn checked_total_sums_the_parts() {
        assert_eq!(checked_total(1, 0, 30), Ok(3630));
        assert_eq!(checked_total(0, 75, 0), Ok(4500));
        assert_eq!(checked_total(99, 59, 59), Ok(359_999));
        assert!(matches!(checked_total(99, 60, 0), Err(EditError::OutOfRange(_))));
        assert!(matches!(
            checked_total(u32::MAX, 0, 0),
            Err(EditError::OutOfRange(_))
        ));
    }

    #[test]
    fn buffers_follow_the_total() {
        let buffers = EditBuffers::from_total(3723);
        assert_eq!(buffers.get(TimePart::Hours), &PendingEdit::from_value(1));
        assert_eq!(buffers.get(TimePart::Minutes).left, "0");
        assert_eq!(buffers.get(TimePart::Minutes).right, "2");
        assert_eq!(buffers.get(TimePart::Seconds).right, "3");
    }

    #[test]
    fn total_with_keeps_the_other_buffers() {
        // 00:00:30 with hours set to 1
        let buffers = EditBuffers::from_total(30);
        assert_eq!(buffers.total_with(TimePart::Hours, 1), Ok(3630));
        // 01:02:03 with minutes set to 45
        let buffers = EditBuffers::from_total(3723);
        assert_eq!(buffers.total_with(TimePart::Minutes, 45), Ok(3600 + 45 * 60 + 3));
        assert_eq!(buffers.total_with(TimePart::Seconds, 0), Ok(3720));
    }

    #[test]
    fn total_with_reads_typed_text() {
        let mut buffers = EditBuffers::from_total(15);
        let typed = buffers.get(TimePart::Minutes).with_cell(Cell::Left, "7");
        buffers.set(TimePart::Minutes, typed.clone());
        assert_eq!(buffers.get(TimePart::Minutes), &typed);
        // minutes buffer now reads "70"
        assert_eq!(buffers.total_with(TimePart::Seconds, 15), Ok(70 * 60 + 15));
        assert_eq!(buffers.total_with(TimePart::Minutes, 75), Ok(75 * 60 + 15));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = EditError::NonNumeric("a".into());
        assert_eq!(err.to_string(), "Digit cell is not numeric: \"a\"");
        let err = EditError::OutOfRange("360000 seconds".into());
        assert!(err.to_string().starts_with("Value out of range: 360000 seconds"));
    }
}
