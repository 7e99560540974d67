//! Display Formatting
//!
//! Helper functions the views derive their presentation from.

use crate::models::User;
use chrono::{DateTime, FixedOffset};

/// Cutoff applied to test descriptions on the services cards
const DESCRIPTION_LIMIT: usize = 100;

/// Hard cutoff at 100 characters, ellipsis appended only when truncated.
/// The cut is by character count, not word boundary.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let cut: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{}...", cut)
    } else {
        description.to_string()
    }
}

/// Thousands-separated price, fraction shown only when present. Rounded to
/// cents up front so a fraction that rounds to a whole carries into the
/// integer part.
pub fn format_price(price: f64) -> String {
    let negative = price < 0.0;
    let cents = (price.abs() * 100.0).round() as u64;
    let int_part = cents / 100;
    let fract = cents % 100;

    let digits = int_part.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if fract > 0 {
        out.push_str(&format!(".{:02}", fract));
    }
    out
}

/// Locale-style date (`M/D/YYYY`) from an RFC 3339 timestamp. Unparseable
/// input is shown as-is rather than hidden.
pub fn format_date(timestamp: &str) -> String {
    match DateTime::<FixedOffset>::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%-m/%-d/%Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Sort users by creation timestamp, newest first. Users with unparseable
/// timestamps sink to the end.
pub fn sort_users_newest_first(users: &mut [User]) {
    users.sort_by(|a, b| {
        let ta = DateTime::<FixedOffset>::parse_from_rfc3339(&a.created_at).ok();
        let tb = DateTime::<FixedOffset>::parse_from_rfc3339(&b.created_at).ok();
        tb.cmp(&ta)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: &str, created_at: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role: "customer".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn short_description_is_verbatim() {
        let text = "a".repeat(100);
        assert_eq!(truncate_description(&text), text);
        assert_eq!(truncate_description(""), "");
    }

    #[test]
    fn long_description_is_cut_to_100_plus_ellipsis() {
        let text = "b".repeat(101);
        let shown = truncate_description(&text);
        assert_eq!(shown.chars().count(), 103);
        assert!(shown.ends_with("..."));
        assert_eq!(&shown[..100], &text[..100]);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(150);
        let shown = truncate_description(&text);
        assert_eq!(shown.chars().count(), 103);
    }

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(500.0), "500");
        assert_eq!(format_price(1200.0), "1,200");
        assert_eq!(format_price(1234567.0), "1,234,567");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn fractional_prices_keep_two_decimals() {
        assert_eq!(format_price(1499.5), "1,499.50");
        assert_eq!(format_price(999.994), "999.99");
    }

    #[test]
    fn fractions_that_round_to_a_whole_carry_over() {
        assert_eq!(format_price(999.999), "1,000");
        assert_eq!(format_price(0.999), "1");
    }

    #[test]
    fn dates_render_locale_style() {
        assert_eq!(format_date("2024-03-05T08:30:00.000Z"), "3/5/2024");
        assert_eq!(format_date("2023-11-21T23:59:59+03:00"), "11/21/2023");
    }

    #[test]
    fn bad_date_falls_back_to_raw_value() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn users_sort_newest_first() {
        let mut users = vec![
            make_user("old", "2023-01-01T00:00:00Z"),
            make_user("new", "2024-06-01T00:00:00Z"),
            make_user("mid", "2023-09-15T00:00:00Z"),
        ];
        sort_users_newest_first(&mut users);
        let order: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(order, vec!["new", "mid", "old"]);
    }

    #[test]
    fn unparseable_timestamps_sink_to_the_end() {
        let mut users = vec![
            make_user("bad", "not a date"),
            make_user("good", "2024-06-01T00:00:00Z"),
        ];
        sort_users_newest_first(&mut users);
        assert_eq!(users[0].id, "good");
        assert_eq!(users[1].id, "bad");
    }
}
