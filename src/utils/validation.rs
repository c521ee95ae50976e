use crate::utils::error::{MatchError, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// The positional argument format an order is built from.
pub const INPUT_FORMAT: &str = "filename dd/mm/yy hh:mm postcode amount";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Loose calendar grammar: 31/02/15 passes here and is rejected by
// NaiveDate construction afterwards.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(3[01]|[12][0-9]|0[1-9])/(1[0-2]|0[1-9])/([0-9]{2})$").unwrap()
});

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]|0[0-9]|1[0-9]|2[0-3]):([0-5][0-9])$").unwrap());

// UK postcode grammar per the ILR specification appendix C. Uppercase,
// space-free except for the fixed GIR 0AA variant.
static POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(GIR ?0AA|[A-PR-UWYZ]([0-9]{1,2}|([A-HK-Y][0-9]([0-9ABEHMNPRV-Y])?)|[0-9][A-HJKPS-UW])[0-9][ABD-HJLNP-UW-Z]{2})$",
    )
    .unwrap()
});

/// Parses a `dd/mm/yy` date. Two-digit years map to 2000-2099.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let caps = DATE_RE
        .captures(value)
        .ok_or_else(|| MatchError::invalid_input("date", "Must be in format \"dd/mm/yy\""))?;
    let day: u32 = caps[1].parse().unwrap_or_default();
    let month: u32 = caps[2].parse().unwrap_or_default();
    let year: i32 = caps[3].parse().unwrap_or_default();
    NaiveDate::from_ymd_opt(2000 + year, month, day)
        .ok_or_else(|| MatchError::invalid_input("date", format!("\"{value}\" is not a calendar date")))
}

/// Parses a 24-hour `hh:mm` time.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let caps = TIME_RE
        .captures(value)
        .ok_or_else(|| MatchError::invalid_input("time", "Must be in 24h format \"hh:mm\""))?;
    let hour: u32 = caps[1].parse().unwrap_or_default();
    let minute: u32 = caps[2].parse().unwrap_or_default();
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| MatchError::invalid_input("time", "Must be in 24h format \"hh:mm\""))
}

pub fn validate_postcode(value: &str) -> Result<()> {
    if !POSTCODE_RE.is_match(value) {
        return Err(MatchError::invalid_input(
            "postcode",
            "Must be an uppercase UK postcode without internal spaces",
        ));
    }
    Ok(())
}

/// Parses the covers field. Anything below one person is not an order.
pub fn parse_covers(value: &str) -> Result<u32> {
    let covers: u32 = value.parse().map_err(|_| {
        MatchError::invalid_input("covers", "Must be a number higher than zero")
    })?;
    if covers < 1 {
        return Err(MatchError::invalid_input(
            "covers",
            "Must be a number higher than zero",
        ));
    }
    Ok(covers)
}

/// The outward-code area letters: everything before the first digit.
pub fn postcode_area(postcode: &str) -> &str {
    match postcode.find(|c: char| c.is_ascii_digit()) {
        Some(idx) => &postcode[..idx],
        None => postcode,
    }
}

/// Parses a `<n>h` lead-time token into whole hours.
pub fn parse_lead_time(token: &str) -> Option<u32> {
    token.strip_suffix('h')?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("24/10/15").unwrap(),
            NaiveDate::from_ymd_opt(2015, 10, 24).unwrap()
        );
        assert!(parse_date("2038-02-28").is_err());
        assert!(parse_date("28/02/2038").is_err());
        assert!(parse_date("foo").is_err());
        // Passes the grammar, fails calendar construction.
        assert!(parse_date("31/02/15").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("11:00").unwrap(),
            NaiveTime::from_hms_opt(11, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("9:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("10:30:50").is_err());
    }

    #[test]
    fn test_validate_postcode() {
        assert!(validate_postcode("NW43QB").is_ok());
        assert!(validate_postcode("E32NY").is_ok());
        assert!(validate_postcode("GIR 0AA").is_ok());
        assert!(validate_postcode("GIR0AA").is_ok());
        assert!(validate_postcode("nw43qb").is_err());
        assert!(validate_postcode("NW4 3QB").is_err());
        assert!(validate_postcode("").is_err());
    }

    #[test]
    fn test_parse_covers() {
        assert_eq!(parse_covers("1").unwrap(), 1);
        assert_eq!(parse_covers("40").unwrap(), 40);
        assert!(parse_covers("0").is_err());
        assert!(parse_covers("-1").is_err());
        assert!(parse_covers("many").is_err());
    }

    #[test]
    fn test_postcode_area() {
        assert_eq!(postcode_area("NW43QB"), "NW");
        assert_eq!(postcode_area("E32NY"), "E");
        assert_eq!(postcode_area("SW34DA"), "SW");
        assert_eq!(postcode_area("NODIGITS"), "NODIGITS");
    }

    #[test]
    fn test_parse_lead_time() {
        assert_eq!(parse_lead_time("12h"), Some(12));
        assert_eq!(parse_lead_time("36h"), Some(36));
        assert_eq!(parse_lead_time("12"), None);
        assert_eq!(parse_lead_time("h"), None);
        assert_eq!(parse_lead_time("-5h"), None);
        assert_eq!(parse_lead_time("soonh"), None);
    }
}
