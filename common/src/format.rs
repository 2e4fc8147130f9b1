//! Display formatting for amounts and dates, plus the inverse date
//! parse used when sorting reads values back out of rendered cells.
//!
//! Both formats are fixed: amounts are `<whole>.<fraction>` with a two
//! digit fraction, dates are `YYYY-MM-DD HH:MM`. The table sort works
//! on the displayed strings, so the comparators in [`crate::compare`]
//! depend on these functions producing exactly these shapes.

/// Normalizes a raw amount string to `<whole>.<fraction>`.
///
/// A missing or empty whole part becomes `"0"`, a missing fraction
/// becomes `"00"` and a single-digit fraction gets a trailing zero.
/// No rounding: the input is assumed to carry at most two fraction
/// digits. Idempotent on already-normalized strings.
pub fn amount_to_display(raw: &str) -> String {
    let mut parts = raw.splitn(2, '.');
    let whole = match parts.next() {
        None | Some("") => "0",
        Some(whole) => whole,
    };
    let fraction = match parts.next() {
        None => "00".to_string(),
        Some(fraction) if fraction.len() == 1 => format!("{fraction}0"),
        Some(fraction) => fraction.to_string(),
    };
    format!("{whole}.{fraction}")
}

/// Calendar date and wall-clock time down to the minute.
///
/// The derived `Ord` compares fields in declaration order, which is
/// significance order, so it matches chronological order directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateParts {
    pub year: i32,
    /// 1-12, unlike the 0-based month the JS `Date` API hands out.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Formats a date as `YYYY-MM-DD HH:MM`, zero-padded.
pub fn date_to_display(date: DateParts) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        date.year, date.month, date.day, date.hour, date.minute
    )
}

/// Parses a `YYYY-MM-DD HH:MM` string back into its parts.
///
/// Inverse of [`date_to_display`]: splits on the space, then on `-`
/// and `:`. Returns `None` when the string does not have that exact
/// shape.
pub fn display_to_date(display: &str) -> Option<DateParts> {
    let (date_part, time_part) = display.split_once(' ')?;
    let mut date_fields = date_part.splitn(3, '-');
    let year = date_fields.next()?.parse().ok()?;
    let month = date_fields.next()?.parse().ok()?;
    let day = date_fields.next()?.parse().ok()?;
    let (hour, minute) = time_part.split_once(':')?;
    Some(DateParts {
        year,
        month,
        day,
        hour: hour.parse().ok()?,
        minute: minute.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_amounts_to_two_fraction_digits() {
        assert_eq!(amount_to_display("10"), "10.00");
        assert_eq!(amount_to_display("10.5"), "10.50");
        assert_eq!(amount_to_display("10.50"), "10.50");
        assert_eq!(amount_to_display(".5"), "0.50");
        assert_eq!(amount_to_display("-2.1"), "-2.10");
    }

    #[test]
    fn amount_to_display_is_idempotent() {
        for raw in ["10", "10.5", ".5", "0.00", "-2", "1234.99"] {
            let once = amount_to_display(raw);
            assert_eq!(amount_to_display(&once), once, "raw input {raw:?}");
        }
    }

    #[test]
    fn formats_dates_zero_padded() {
        let date = DateParts { year: 2021, month: 3, day: 5, hour: 9, minute: 7 };
        assert_eq!(date_to_display(date), "2021-03-05 09:07");
    }

    #[test]
    fn date_display_round_trips() {
        let date = DateParts { year: 2021, month: 12, day: 31, hour: 23, minute: 59 };
        assert_eq!(display_to_date(&date_to_display(date)), Some(date));
    }

    #[test]
    fn rejects_malformed_date_strings() {
        assert_eq!(display_to_date("2021-03-05"), None);
        assert_eq!(display_to_date("2021-03 05 09:07"), None);
        assert_eq!(display_to_date("not a date at all"), None);
    }

    #[test]
    fn date_ordering_is_chronological() {
        let earlier = display_to_date("2021-01-01 09:00").unwrap();
        let later = display_to_date("2021-01-02 10:00").unwrap();
        assert!(earlier < later);
        let same_day = display_to_date("2021-01-01 09:01").unwrap();
        assert!(earlier < same_day);
    }
}
