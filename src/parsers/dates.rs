//! Date helpers for git's default date format (`Mon Jan 2 15:04:05 2006 -0700`)

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::models::Field;

/// Shortest text that can hold a complete git date
const MIN_DATE_LEN: usize = 24;

/// Length of the trailing ` -0700` offset
const OFFSET_SUFFIX_LEN: usize = 6;

const DATE_FORMAT: &str = "%b %d %H:%M:%S %Y %z";

/// Epoch values derived from one date line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEpochs {
    /// Wall-clock time of the date, shifted by the reference timezone's offset
    pub epoch: i64,
    /// True UTC instant, or `Null` when the date was not recorded in UTC
    pub epoch_utc: Field<i64>,
}

/// Parse a git date honouring its embedded offset
pub fn parse_git_date(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.len() < MIN_DATE_LEN {
        return None;
    }

    let (weekday, rest) = text.split_once(char::is_whitespace)?;
    // The weekday must be a day name but is not checked against the date
    weekday.parse::<Weekday>().ok()?;

    let rest = rest.split_whitespace().collect::<Vec<_>>().join(" ");
    DateTime::parse_from_str(&rest, DATE_FORMAT).ok()
}

/// Parse a git date after replacing its offset with `+0000`
pub fn parse_git_date_as_utc(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.len() < MIN_DATE_LEN {
        return None;
    }

    let wall_clock = text.get(..text.len() - OFFSET_SUFFIX_LEN)?;
    parse_git_date(&format!("{} +0000", wall_clock))
}

/// Derive the local and UTC epochs of a git date.
///
/// The local epoch reads the date's wall-clock time as if it were in `reference_tz`,
/// using that zone's offset at the commit instant rather than the offset written in
/// the date. Returns `None` unless both parses succeed.
pub fn derive_epochs(text: &str, reference_tz: Tz) -> Option<DateEpochs> {
    let with_offset = parse_git_date(text)?;
    let as_utc = parse_git_date_as_utc(text)?;

    let reference_offset =
        reference_tz.offset_from_utc_datetime(&with_offset.naive_utc()).fix().local_minus_utc();
    let epoch = as_utc.timestamp() - i64::from(reference_offset);

    let epoch_utc = if with_offset.timestamp() == as_utc.timestamp() {
        Field::Value(with_offset.timestamp())
    } else {
        Field::Null
    };

    Some(DateEpochs { epoch, epoch_utc })
}
