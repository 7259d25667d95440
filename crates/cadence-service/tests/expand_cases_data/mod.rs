use crate::series::expand::expand_with_series_id;
use crate::series::model::{BaseSession, SeriesId};
use crate::series::pattern::{Pattern, RepeatConfig};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

pub struct ExpandCase {
    pub name: &'static str,
    pub base_start: &'static str,
    pub base_end: &'static str,
    pub weeks: u32,
    pub patterns: Vec<Pattern>,
    /// Expected `(starts_at, ends_at)` pairs, in output order.
    pub expected: Option<&'static [(&'static str, &'static str)]>,
    pub expected_len: Option<usize>,
}

#[expect(clippy::too_many_lines)]
pub fn expand_cases() -> Vec<ExpandCase> {
    vec![
        ExpandCase {
            name: "single_week_no_patterns",
            base_start: "2024-03-04T09:00:00",
            base_end: "2024-03-04T10:00:00",
            weeks: 1,
            patterns: vec![],
            expected: Some(&[]),
            expected_len: None,
        },
        ExpandCase {
            name: "base_only_three_weeks",
            base_start: "2024-03-04T09:00:00",
            base_end: "2024-03-04T10:00:00",
            weeks: 3,
            patterns: vec![],
            expected: Some(&[
                ("2024-03-11T09:00:00", "2024-03-11T10:00:00"),
                ("2024-03-18T09:00:00", "2024-03-18T10:00:00"),
            ]),
            expected_len: None,
        },
        ExpandCase {
            name: "monday_base_wednesday_evening",
            base_start: "2024-03-04T09:00:00",
            base_end: "2024-03-04T10:00:00",
            weeks: 3,
            patterns: vec![Pattern::on(3).starting_at("18:00").lasting(45)],
            expected: Some(&[
                ("2024-03-06T18:00:00", "2024-03-06T18:45:00"),
                ("2024-03-11T09:00:00", "2024-03-11T10:00:00"),
                ("2024-03-13T18:00:00", "2024-03-13T18:45:00"),
                ("2024-03-18T09:00:00", "2024-03-18T10:00:00"),
                ("2024-03-20T18:00:00", "2024-03-20T18:45:00"),
            ]),
            expected_len: None,
        },
        ExpandCase {
            name: "saturday_base_monday_pattern_wraps",
            base_start: "2024-03-09T10:00:00",
            base_end: "2024-03-09T11:30:00",
            weeks: 2,
            patterns: vec![Pattern::on(1).starting_at("08:00")],
            expected: Some(&[
                ("2024-03-11T08:00:00", "2024-03-11T09:30:00"),
                ("2024-03-16T10:00:00", "2024-03-16T11:30:00"),
                ("2024-03-18T08:00:00", "2024-03-18T09:30:00"),
            ]),
            expected_len: None,
        },
        ExpandCase {
            name: "pattern_order_kept_within_week",
            base_start: "2024-03-06T12:00:00",
            base_end: "2024-03-06T13:00:00",
            weeks: 2,
            patterns: vec![
                Pattern::on(5).starting_at("07:00").ending_at("08:00"),
                Pattern::on(1).starting_at("19:00").lasting(30),
            ],
            expected: Some(&[
                ("2024-03-08T07:00:00", "2024-03-08T08:00:00"),
                ("2024-03-11T19:00:00", "2024-03-11T19:30:00"),
                ("2024-03-13T12:00:00", "2024-03-13T13:00:00"),
                ("2024-03-15T07:00:00", "2024-03-15T08:00:00"),
                ("2024-03-18T19:00:00", "2024-03-18T19:30:00"),
            ]),
            expected_len: None,
        },
        ExpandCase {
            name: "leap_day_crossing",
            base_start: "2024-02-26T18:30:00",
            base_end: "2024-02-26T19:15:00",
            weeks: 2,
            patterns: vec![Pattern::on(4)],
            expected: Some(&[
                ("2024-02-29T18:30:00", "2024-02-29T19:15:00"),
                ("2024-03-04T18:30:00", "2024-03-04T19:15:00"),
                ("2024-03-07T18:30:00", "2024-03-07T19:15:00"),
            ]),
            expected_len: None,
        },
        ExpandCase {
            name: "late_session_running_past_midnight",
            base_start: "2024-03-08T23:30:00",
            base_end: "2024-03-09T00:30:00",
            weeks: 2,
            patterns: vec![],
            expected: Some(&[("2024-03-15T23:30:00", "2024-03-16T00:30:00")]),
            expected_len: None,
        },
        ExpandCase {
            name: "daily_patterns_for_a_quarter",
            base_start: "2024-01-01T06:00:00",
            base_end: "2024-01-01T06:45:00",
            weeks: 13,
            patterns: (0..7).map(Pattern::on).collect(),
            expected: None,
            expected_len: Some(13 * 8 - 1),
        },
    ]
}

pub fn assert_case(case: &ExpandCase) {
    let base = BaseSession {
        starts_at: parse_local(case.base_start),
        ends_at: parse_local(case.base_end),
        activity_type: "class".to_string(),
        stylist_id: "stylist-1".to_string(),
        service_id: None,
        capacity_max: 10,
        price_decimal: Decimal::ZERO,
        notes: None,
    };
    let config = RepeatConfig {
        enabled: true,
        weeks: case.weeks,
        patterns: case.patterns.clone(),
    };
    let series_id = SeriesId::new(case.name);

    let requests = expand_with_series_id(&base, &config, &series_id)
        .unwrap_or_else(|err| panic!("Case {} failed to expand: {err}", case.name));

    assert!(
        requests.iter().all(|r| r.series_id == series_id),
        "Case {} mixed series ids",
        case.name
    );

    if let Some(expected) = case.expected {
        let actual: Vec<(NaiveDateTime, NaiveDateTime)> =
            requests.iter().map(|r| (r.starts_at, r.ends_at)).collect();
        let expected: Vec<(NaiveDateTime, NaiveDateTime)> = expected
            .iter()
            .map(|(start, end)| (parse_local(start), parse_local(end)))
            .collect();
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            requests.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}

fn parse_local(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|err| panic!("Failed to parse local datetime {value}: {err}"))
}
