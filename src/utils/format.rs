//! Display helpers for review cards, tables and the navbar.

use chrono::{DateTime, NaiveDate, TimeZone};

/// Client timestamp sent with new reviews and favorites.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// `createdAt` as a short local date, or "N/A".
pub fn format_date(iso: Option<&str>) -> String {
    format_date_in(iso, &chrono::Local)
}

pub fn format_date_in<Tz: TimeZone>(iso: Option<&str>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = iso.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return at.with_timezone(tz).format("%-m/%-d/%Y").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => "N/A".to_string(),
    }
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Number of filled stars out of five.
pub fn filled_stars(rating: f64) -> usize {
    rating.round().clamp(0.0, 5.0) as usize
}

pub fn truncate_email(email: &str) -> String {
    const MAX: usize = 22;
    if email.chars().count() > MAX {
        format!("{}...", email.chars().take(MAX).collect::<String>())
    } else {
        email.to_string()
    }
}

pub fn results_summary(count: usize) -> String {
    format!("Showing {} review{}", count, if count > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn dates() {
        assert_eq!(format_date_in(Some("2025-01-04T10:00:00.000Z"), &Utc), "1/4/2025");
        assert_eq!(format_date_in(Some("2024-12-31"), &Utc), "12/31/2024");
        assert_eq!(format_date_in(None, &Utc), "N/A");
        assert_eq!(format_date_in(Some("yesterday"), &Utc), "N/A");
    }

    #[test]
    fn ratings_and_stars() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(4.26), "4.3");
        assert_eq!(filled_stars(3.5), 4);
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(-1.0), 0);
    }

    #[test]
    fn long_email_is_truncated() {
        assert_eq!(truncate_email("short@example.com"), "short@example.com");
        assert_eq!(
            truncate_email("a.very.long.address@example.com"),
            "a.very.long.address@ex..."
        );
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(results_summary(1), "Showing 1 review");
        assert_eq!(results_summary(12), "Showing 12 reviews");
    }

    #[test]
    fn now_is_rfc3339() {
        assert!(DateTime::parse_from_rfc3339(&now_iso()).is_ok());
    }
}
