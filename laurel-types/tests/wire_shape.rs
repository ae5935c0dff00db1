use laurel_types::{
    AwardRecord, IntervalReport, LaurelConfig, LaurelError, ProducerInterval, ZeroIntervalPolicy,
};
use serde_json::json;

#[test]
fn producer_interval_serializes_camel_case_keys() {
    let p = ProducerInterval::new("Joel Silver", 1990, 1991);
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(
        v,
        json!({
            "producer": "Joel Silver",
            "interval": 1,
            "previousWin": 1990,
            "followingWin": 1991,
        })
    );
}

#[test]
fn report_serializes_min_and_max_arrays() {
    let report = IntervalReport {
        min: vec![ProducerInterval::new("B", 2015, 2020)],
        max: vec![ProducerInterval::new("A", 2000, 2010)],
    };
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["min"][0]["producer"], "B");
    assert_eq!(v["max"][0]["interval"], 10);

    let back: IntervalReport = serde_json::from_value(v).unwrap();
    assert_eq!(back, report);
}

#[test]
fn empty_report_has_no_extremes() {
    let report = IntervalReport::default();
    assert!(report.is_empty());
    assert_eq!(report.min_interval(), None);
    assert_eq!(report.max_interval(), None);
    assert_eq!(serde_json::to_value(&report).unwrap(), json!({ "min": [], "max": [] }));
}

#[test]
fn record_title_and_studios_default_when_absent() {
    let r: AwardRecord =
        serde_json::from_value(json!({ "year": 1986, "producers": "Gloria Katz", "winner": true }))
            .unwrap();
    assert_eq!(r, AwardRecord::win(1986, "Gloria Katz"));
    assert!(r.title.is_empty());
}

#[test]
fn default_config_includes_zero_intervals_and_reads_semicolons() {
    let cfg = LaurelConfig::default();
    assert_eq!(cfg.zero_intervals, ZeroIntervalPolicy::Include);
    assert_eq!(cfg.import.delimiter, b';');
    assert_eq!(cfg.import.winner_token, "yes");
}

#[test]
fn only_record_errors_carry_a_line() {
    assert_eq!(LaurelError::invalid_record(4, "bad year").line(), Some(4));
    assert_eq!(LaurelError::invalid_arg("x").line(), None);
    let io: LaurelError = std::io::Error::other("boom").into();
    assert!(matches!(io, LaurelError::Io(_)));
}
