use crate::log::{NumericField, SessionInfo, StatsLine, is_time_header, parse_day_code};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

//-----------------------------------------------------------------------------
// Time header
//-----------------------------------------------------------------------------

#[test]
fn time_header_requires_exact_prefix() {
    assert!(is_time_header("# Time: 070606 10:02:03"));
    assert!(!is_time_header("#Time: 070606 10:02:03"));
    assert!(!is_time_header("# User@Host: root[root] @ localhost []"));
}

#[test]
fn parses_classic_day_code() {
    let parsed = parse_day_code("# Time: 070606 10:02:03");

    assert_eq!(parsed, Ok(date(2007, 6, 6)));
}

#[test]
fn parses_rfc3339_timestamp() {
    let parsed = parse_day_code("# Time: 2019-04-01T10:02:03.123456Z");

    assert_eq!(parsed, Ok(date(2019, 4, 1)));
}

#[test]
fn parses_timestamp_without_zone() {
    let parsed = parse_day_code("# Time: 2019-04-01T10:02:03.123456");

    assert_eq!(parsed, Ok(date(2019, 4, 1)));
}

#[test]
fn rejects_invalid_day_code() {
    assert_eq!(parse_day_code("# Time: 071399 10:02:03"), Err("071399".to_string()));
    assert_eq!(parse_day_code("# Time: yesterday"), Err("yesterday".to_string()));
    assert_eq!(parse_day_code("# Time:"), Err(String::new()));
}

//-----------------------------------------------------------------------------
// Session line
//-----------------------------------------------------------------------------

#[test]
fn session_fields_are_positional() {
    let session = SessionInfo::from_line("# User@Host: app[app] @ db-1.internal [10.0.0.7]");

    assert_eq!(session.user, "app[app]");
    assert_eq!(session.host, "db-1.internal");
    assert_eq!(session.ip, "[10.0.0.7]");
}

#[test]
fn missing_session_tokens_are_empty() {
    let session = SessionInfo::from_line("# User@Host: app[app]");

    assert_eq!(session.user, "app[app]");
    assert_eq!(session.host, "");
    assert_eq!(session.ip, "");
}

//-----------------------------------------------------------------------------
// Stats line
//-----------------------------------------------------------------------------

#[test]
fn numeric_field_reads_leading_digits() {
    assert_eq!(NumericField::parse(Some("42")), NumericField::Parsed(42));
    assert_eq!(NumericField::parse(Some("2.731")), NumericField::Parsed(2));
    assert_eq!(NumericField::parse(Some("0.000123")), NumericField::Parsed(0));
}

#[test]
fn numeric_field_coerces_garbage_to_zero() {
    assert_eq!(NumericField::parse(Some("abc")), NumericField::Coerced);
    assert_eq!(NumericField::parse(Some("-3")), NumericField::Coerced);
    assert_eq!(NumericField::parse(None), NumericField::Coerced);
    assert_eq!(NumericField::Coerced.value(), 0);
}

#[test]
fn stats_line_reads_fixed_positions() {
    let stats =
        StatsLine::from_line("# Query_time: 12  Lock_time: 3  Rows_sent: 1  Rows_examined: 1042");

    assert_eq!(stats.elapsed.value(), 12);
    assert_eq!(stats.lock.value(), 3);
    assert_eq!(stats.rows_sent.value(), 1);
    assert_eq!(stats.rows_examined.value(), 1042);
    assert_eq!(stats.malformed(), 0);
}

#[test]
fn stats_line_counts_malformed_fields() {
    let stats = StatsLine::from_line("# Query_time: x  Lock_time: 3  Rows_sent:");

    assert_eq!(stats.elapsed.value(), 0);
    assert_eq!(stats.lock.value(), 3);
    assert_eq!(stats.malformed(), 3);
}
