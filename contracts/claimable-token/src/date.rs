//! ASCII-packed passport dates.
//!
//! The machine readable zone of a travel document carries dates as six
//! ASCII digits `YYMMDD`, and the identity circuit consumes them in exactly
//! that form: the six bytes packed big-endian into an integer, for example
//! `"241209"` as `0x323431323039`. Two-digit years cover 2000 through 2099.
//!
//! Host tooling uses [`encode_date`] when preparing circuit inputs; the
//! contract itself only decodes and converts to unix time for window checks.

use crate::ClaimError;

/// A civil date within the two-digit-year window 2000-2099.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CalendarDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

const SECONDS_PER_DAY: u64 = 86_400;

/// Packs a date into its six-ASCII-digit form.
pub fn encode_date(date: &CalendarDate) -> u64 {
    let yy = date.year % 100;
    let digits = [
        (yy / 10) as u8,
        (yy % 10) as u8,
        date.month / 10,
        date.month % 10,
        date.day / 10,
        date.day % 10,
    ];

    digits
        .iter()
        .fold(0u64, |acc, d| (acc << 8) | u64::from(d + b'0'))
}

/// Unpacks a six-ASCII-digit date, validating every byte and the calendar
/// ranges (including leap-year February).
pub fn decode_date(encoded: u64) -> Result<CalendarDate, ClaimError> {
    let bytes = encoded.to_be_bytes();
    if bytes[0] != 0 || bytes[1] != 0 {
        return Err(ClaimError::MalformedClaimDate);
    }

    let mut digits = [0u8; 6];
    for (digit, byte) in digits.iter_mut().zip(&bytes[2..]) {
        if !byte.is_ascii_digit() {
            return Err(ClaimError::MalformedClaimDate);
        }
        *digit = byte - b'0';
    }

    let year = 2000 + u16::from(digits[0]) * 10 + u16::from(digits[1]);
    let month = digits[2] * 10 + digits[3];
    let day = digits[4] * 10 + digits[5];

    if month < 1 || month > 12 || day < 1 || day > days_in_month(year, month) {
        return Err(ClaimError::MalformedClaimDate);
    }

    Ok(CalendarDate { year, month, day })
}

/// Midnight UTC of the given date as a unix timestamp.
pub fn date_to_unix(date: &CalendarDate) -> u64 {
    let days = days_from_civil(
        i64::from(date.year),
        i64::from(date.month),
        i64::from(date.day),
    );

    // The calendar starts at 2000-01-01, always after the epoch
    (days as u64) * SECONDS_PER_DAY
}

/// Truncates a unix timestamp to midnight UTC of its day.
pub fn start_of_day(timestamp: u64) -> u64 {
    timestamp - timestamp % SECONDS_PER_DAY
}

// Days since 1970-01-01 for a civil date, via the era decomposition of the
// proleptic Gregorian calendar.
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y / 400;
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

    era * 146_097 + doe - 719_468
}

fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
