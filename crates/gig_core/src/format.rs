//! Display strings for amounts, timestamps and the booking flow.

use chrono::NaiveDateTime;
use gig_logging::gig_warn;

const WIRE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const BOOK_BUTTON_EMPTY_LABEL: &str = "Выберите подработки";
pub const BOOKING_TITLE: &str = "Ураа! Деняк насыпали!";

/// Title and body shown after the user books the selected postings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub title: String,
    pub message: String,
}

/// Converts a rouble amount to whole kopecks, rounding half away from zero.
pub fn to_kopecks(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Formats a kopeck count as roubles with up to two fraction digits.
///
/// Trailing zero digits are dropped, so `140000` renders as `"1400"` and
/// `151110` as `"1511.1"`.
pub fn kopecks_label(kopecks: i64) -> String {
    let sign = if kopecks < 0 { "-" } else { "" };
    let abs = kopecks.unsigned_abs();
    let (whole, cents) = (abs / 100, abs % 100);
    match cents {
        0 => format!("{sign}{whole}"),
        c if c % 10 == 0 => format!("{sign}{whole}.{}", c / 10),
        c => format!("{sign}{whole}.{c:02}"),
    }
}

/// Formats an amount, dropping a fractional part that is exactly zero.
///
/// `1400.0` renders as `"1400"`, `1511.11` as `"1511.11"`.
pub fn rounded_price(amount: f64) -> String {
    kopecks_label(to_kopecks(amount))
}

pub fn salary_label(salary: f64) -> String {
    format!("{} ₽", rounded_price(salary))
}

fn parse_posted_at(posted_at: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(posted_at, WIRE_TIMESTAMP_FORMAT) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            gig_warn!("Malformed posting timestamp {:?}: {}", posted_at, err);
            None
        }
    }
}

/// `dd.MM` of the UTC timestamp, or empty when malformed.
pub fn posted_date_label(posted_at: &str) -> String {
    parse_posted_at(posted_at)
        .map(|at| at.format("%d.%m").to_string())
        .unwrap_or_default()
}

/// `HH:mm` of the UTC timestamp, or empty when malformed.
pub fn posted_time_label(posted_at: &str) -> String {
    parse_posted_at(posted_at)
        .map(|at| at.format("%H:%M").to_string())
        .unwrap_or_default()
}

fn postings_noun(count: usize) -> &'static str {
    if (11..=14).contains(&(count % 100)) {
        return "подработок";
    }
    match count % 10 {
        1 => "подработку",
        2..=4 => "подработки",
        _ => "подработок",
    }
}

pub fn book_button_label(count: usize) -> String {
    if count == 0 {
        BOOK_BUTTON_EMPTY_LABEL.to_string()
    } else {
        format!("Забронировать {} {}", count, postings_noun(count))
    }
}

pub fn booking_summary(total_kopecks: i64) -> BookingSummary {
    BookingSummary {
        title: BOOKING_TITLE.to_string(),
        message: format!("Вы заработали {} рублей =)", kopecks_label(total_kopecks)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_amount_drops_fraction() {
        assert_eq!(rounded_price(1400.0), "1400");
        assert_eq!(rounded_price(0.0), "0");
    }

    #[test]
    fn fractional_amount_kept_verbatim() {
        assert_eq!(rounded_price(1511.11), "1511.11");
        assert_eq!(rounded_price(0.01), "0.01");
        assert_eq!(rounded_price(5555.55), "5555.55");
        assert_eq!(rounded_price(1511.1), "1511.1");
    }

    #[test]
    fn large_amount_never_uses_exponent() {
        assert_eq!(rounded_price(1e16), "10000000000000000");
        assert_eq!(kopecks_label(100_000_000_000_000_001), "1000000000000000000.01");
    }

    #[test]
    fn kopecks_round_to_nearest() {
        assert_eq!(to_kopecks(111.11), 11_111);
        assert_eq!(to_kopecks(0.005), 1);
        assert_eq!(kopecks_label(-150), "-1.5");
    }

    #[test]
    fn salary_label_appends_currency() {
        assert_eq!(salary_label(500.0), "500 ₽");
    }

    #[test]
    fn timestamp_split_into_date_and_time() {
        assert_eq!(posted_date_label("2023-11-05T23:05:43Z"), "05.11");
        assert_eq!(posted_time_label("2023-11-05T23:05:43Z"), "23:05");
    }

    #[test]
    fn malformed_timestamp_renders_empty() {
        assert_eq!(posted_date_label("yesterday"), "");
        assert_eq!(posted_time_label("2023-11-05 23:05"), "");
    }

    #[test]
    fn book_label_follows_plural_forms() {
        assert_eq!(book_button_label(0), "Выберите подработки");
        assert_eq!(book_button_label(1), "Забронировать 1 подработку");
        assert_eq!(book_button_label(3), "Забронировать 3 подработки");
        assert_eq!(book_button_label(5), "Забронировать 5 подработок");
        assert_eq!(book_button_label(12), "Забронировать 12 подработок");
        assert_eq!(book_button_label(21), "Забронировать 21 подработку");
        assert_eq!(book_button_label(114), "Забронировать 114 подработок");
    }

    #[test]
    fn booking_message_uses_rounded_total() {
        let summary = booking_summary(140_000);
        assert_eq!(summary.title, BOOKING_TITLE);
        assert_eq!(summary.message, "Вы заработали 1400 рублей =)");
    }
}
