use regex::Regex;
use std::sync::OnceLock;

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:(\d+)\s*h(?:oras?|ours?|rs?)?)?\s*(?:(\d+)\s*(?:m|mins?|minutos?|minutes?)?)?$",
        )
        .expect("duration pattern is valid")
    })
}

/// Parses a preparation time into minutes.
///
/// Accepts plain minutes (`"45"`), minutes with a unit (`"45m"`, `"90 min"`),
/// hours (`"5h"`) and both (`"2h 30m"`). Returns `None` for anything else,
/// including an empty string.
pub fn parse_minutes(text: &str) -> Option<u32> {
    let caps = duration_regex().captures(text.trim())?;
    let hours = caps.get(1);
    let minutes = caps.get(2);
    if hours.is_none() && minutes.is_none() {
        return None;
    }

    let hours: u32 = match hours {
        Some(h) => h.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u32 = match minutes {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Formats minutes the way recipe cards show them: `45m`, `5h`, `2h 30m`.
pub fn format_minutes(minutes: u32) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("45"), Some(45));
        assert_eq!(parse_minutes("45m"), Some(45));
        assert_eq!(parse_minutes("90 min"), Some(90));
        assert_eq!(parse_minutes("20 minutos"), Some(20));
        assert_eq!(parse_minutes("5h"), Some(300));
        assert_eq!(parse_minutes("2h 30m"), Some(150));
        assert_eq!(parse_minutes(" 1H15M "), Some(75));
        assert_eq!(parse_minutes("1 hora 5 minutos"), Some(65));
    }

    #[test]
    fn test_parse_minutes_rejects_garbage() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("   "), None);
        assert_eq!(parse_minutes("un rato"), None);
        assert_eq!(parse_minutes("30m 2h"), None);
        assert_eq!(parse_minutes("99999999999h"), None);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(300), "5h");
        assert_eq!(format_minutes(150), "2h 30m");
        assert_eq!(format_minutes(0), "0m");
    }
}
