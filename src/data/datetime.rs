//! Spreadsheet date-serial decoding.
//!
//! Serials count days from the 1899-12-30 epoch, so serial 1 is
//! 1899-12-31. This is the Sheets-compatible epoch and sidesteps the
//! fictitious 1900-02-29 some spreadsheet engines carry.

/// Decode a cell's text as a date serial.
///
/// Empty or non-numeric text renders as empty; otherwise the parsed value
/// goes through [`decode_serial`].
pub fn decode_cell(text: &str) -> String {
    match text.trim().parse::<f64>() {
        Ok(serial) => decode_serial(serial),
        Err(_) => String::new(),
    }
}

/// Largest decodable serial: 9999-12-31, the conventional spreadsheet
/// date ceiling.
const MAX_SERIAL: f64 = 2_958_465.0;

/// Decode a date serial into `YYYY-MM-DD`.
///
/// Zero renders as empty text: a genuine serial 0 is indistinguishable
/// from "no value", an accepted limitation. Negative, non-finite and
/// beyond-ceiling serials render empty too. Fractional serials are
/// truncated to whole days. The arithmetic is pure proleptic-Gregorian
/// day counting; no timezone is involved.
pub fn decode_serial(serial: f64) -> String {
    if !serial.is_finite() || serial <= 0.0 {
        return String::new();
    }
    let days = serial.floor() as i64;
    if days > MAX_SERIAL as i64 {
        return String::new();
    }
    let (year, month, day) = civil_from_days(days);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Civil date for a day count where day 0 is 1899-12-30.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    if days == 0 {
        return (1899, 12, 30);
    }
    if days == 1 {
        return (1899, 12, 31);
    }

    // Shift so day 1 is 1900-01-01, then walk years and months.
    let mut remaining = days - 1;
    let mut year = 1900i32;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining <= days_in_year {
            break;
        }
        remaining -= days_in_year;
        year += 1;
    }

    let month_lengths: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 0usize;
    while month < 11 && remaining > month_lengths[month] {
        remaining -= month_lengths[month];
        month += 1;
    }
    (year, month as u32 + 1, remaining as u32)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
