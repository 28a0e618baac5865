use super::{ParsePriorityError, Priority};

#[test]
fn named_values_follow_syslog_numbering() {
    let values: Vec<i32> = Priority::ALL.iter().map(|p| p.as_i32()).collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn ordering_is_numeric() {
    for pair in Priority::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
    }
    assert!(Priority::from_raw(-1) < Priority::EMERG);
    assert!(Priority::DEBUG < Priority::from_raw(8));
}

#[test]
fn labels_are_fixed() {
    let labels: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(
        labels,
        vec![
            "EMERGENCY: ",
            "ALERT: ",
            "CRITICAL: ",
            "ERROR: ",
            "WARNING: ",
            "NOTICE: ",
            "INFO: ",
            "DEBUG: ",
        ]
    );
}

#[test]
fn unnamed_values_have_no_label_or_name() {
    for raw in [-3, 8, 42, i32::MAX] {
        let priority = Priority::from_raw(raw);
        assert_eq!(priority.label(), "");
        assert_eq!(priority.name(), None);
        assert!(!priority.is_named());
        assert_eq!(priority.to_string(), raw.to_string());
    }
}

#[test]
fn allows_admits_equal_and_more_severe() {
    for threshold in Priority::ALL {
        for message in Priority::ALL {
            assert_eq!(
                threshold.allows(message),
                message.as_i32() <= threshold.as_i32(),
                "threshold {threshold} message {message}"
            );
        }
    }
}

#[test]
fn out_of_range_thresholds_gate_numerically() {
    let everything = Priority::from_raw(100);
    let nothing = Priority::from_raw(-1);
    for priority in Priority::ALL {
        assert!(everything.allows(priority));
        assert!(!nothing.allows(priority));
    }
}

#[test]
fn parse_accepts_names_and_aliases() {
    let cases = [
        ("emerg", Priority::EMERG),
        ("EMERGENCY", Priority::EMERG),
        ("alert", Priority::ALERT),
        ("crit", Priority::CRIT),
        ("critical", Priority::CRIT),
        ("err", Priority::ERROR),
        ("Error", Priority::ERROR),
        ("warn", Priority::WARN),
        ("warning", Priority::WARN),
        (" notice ", Priority::NOTICE),
        ("info", Priority::INFO),
        ("debug", Priority::DEBUG),
    ];
    for (text, expected) in cases {
        assert_eq!(text.parse::<Priority>(), Ok(expected), "parsing {text:?}");
    }
}

#[test]
fn parse_accepts_integers() {
    assert_eq!("3".parse::<Priority>(), Ok(Priority::ERROR));
    assert_eq!("12".parse::<Priority>(), Ok(Priority::from_raw(12)));
    assert_eq!("-2".parse::<Priority>(), Ok(Priority::from_raw(-2)));
}

#[test]
fn parse_rejects_unknown_text() {
    let error: ParsePriorityError = "verbose".parse::<Priority>().expect_err("unknown");
    assert_eq!(error.input(), "verbose");
    assert!(error.to_string().contains("`verbose`"));
    assert!("".parse::<Priority>().is_err());
}

#[test]
fn display_round_trips_through_parse() {
    for priority in Priority::ALL {
        assert_eq!(priority.to_string().parse::<Priority>(), Ok(priority));
    }
}

#[test]
fn integer_conversions() {
    assert_eq!(Priority::from(5), Priority::NOTICE);
    assert_eq!(i32::from(Priority::ALERT), 1);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_names_for_named_values() {
    let json = serde_json::to_string(&Priority::WARN).expect("serialize");
    assert_eq!(json, "\"warn\"");
    let json = serde_json::to_string(&Priority::from_raw(9)).expect("serialize");
    assert_eq!(json, "9");
}

#[cfg(feature = "serde")]
#[test]
fn serde_accepts_names_and_integers() {
    let parsed: Priority = serde_json::from_str("\"critical\"").expect("name");
    assert_eq!(parsed, Priority::CRIT);
    let parsed: Priority = serde_json::from_str("6").expect("integer");
    assert_eq!(parsed, Priority::INFO);
    assert!(serde_json::from_str::<Priority>("\"loud\"").is_err());
    assert!(serde_json::from_str::<Priority>("4294967296").is_err());
}
