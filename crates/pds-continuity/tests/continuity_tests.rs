use std::sync::Arc;

use mockall::mock;
use pds_continuity::{ContinuityState, ResultContinuity, ResultSink, ScanResult, SinkError};
use pds_test_utils::{result_with_metadata, RecordingResultSink};
use proptest::prelude::*;

mock! {
    Sink {}
    impl ResultSink for Sink {
        fn save(&self, result: &ScanResult) -> Result<(), SinkError>;
    }
}

const JOB_UUID: &str = "pds.job.uuid";

#[test]
fn continuity_sequence() {
    let r1 = result_with_metadata("findings/1", &[(JOB_UUID, "job-1")]);
    let r2 = result_with_metadata("findings/2", &[(JOB_UUID, "job-2")]);
    let mut continuity =
        ResultContinuity::new(vec![r1.clone(), r2.clone()], Arc::new(RecordingResultSink::new()));

    assert_eq!(continuity.current(), Some(&r1));
    assert_eq!(continuity.select_by_metadata(JOB_UUID, "job-2"), Some(&r2));
    assert_eq!(continuity.current(), Some(&r2));
    assert_eq!(continuity.select_by_metadata(JOB_UUID, "job-3"), None);
    assert_eq!(continuity.state(), &ContinuityState::NoCurrent);
}

#[test]
fn malformed_metadata_does_not_block_later_match() {
    let broken = ScanResult::new("findings/0").with_metadata("{not json");
    let absent = ScanResult::new("findings/1");
    let wanted = result_with_metadata("findings/2", &[(JOB_UUID, "job-2")]);
    let mut continuity = ResultContinuity::new(
        vec![broken, absent, wanted.clone()],
        Arc::new(RecordingResultSink::new()),
    );

    assert_eq!(continuity.select_by_metadata(JOB_UUID, "job-2"), Some(&wanted));
}

#[test]
fn uri_values_compare_by_string_form() {
    let target = "https://app.example.org/login";
    let wanted = result_with_metadata("findings/1", &[("target.uri", target)]);
    let mut continuity =
        ResultContinuity::new(vec![wanted.clone()], Arc::new(RecordingResultSink::new()));

    assert_eq!(continuity.select_by_metadata_display("target.uri", &target), Some(&wanted));
    assert_eq!(
        continuity.current_metadata().and_then(|m| m.value("target.uri").map(str::to_string)),
        Some(target.to_string())
    );
}

#[test]
fn persist_calls_sink_once_and_keeps_history() {
    let former = ScanResult::new("findings/1");
    let new_result = ScanResult::new("findings/2");
    let expected_id = new_result.id();

    let mut sink = MockSink::new();
    sink.expect_save()
        .withf(move |r| r.id() == expected_id)
        .times(1)
        .returning(|_| Ok(()));

    let continuity = ResultContinuity::new(vec![former.clone()], Arc::new(sink));
    continuity.persist(&new_result).unwrap();

    assert_eq!(continuity.former_results(), &[former.clone()]);
    assert_eq!(continuity.current(), Some(&former));
}

#[test]
fn failing_sink_reports_result_id() {
    let result = ScanResult::new("findings/1");
    let continuity =
        ResultContinuity::new(Vec::new(), Arc::new(RecordingResultSink::failing("disk full")));

    let err = continuity.persist(&result).unwrap_err();
    assert_eq!(err.result_id, result.id());
}

proptest! {
    #[test]
    fn prop_first_matching_result_wins(
        values in prop::collection::vec(prop_oneof![Just("a"), Just("b"), Just("c")], 1..8),
        wanted in prop_oneof![Just("a"), Just("b"), Just("c")],
    ) {
        let history: Vec<ScanResult> = values
            .iter()
            .enumerate()
            .map(|(i, v)| result_with_metadata(&format!("findings/{i}"), &[(JOB_UUID, v)]))
            .collect();
        let expected = values.iter().position(|v| *v == wanted).map(|i| history[i].clone());
        let mut continuity = ResultContinuity::new(history, Arc::new(RecordingResultSink::new()));

        prop_assert_eq!(continuity.select_by_metadata(JOB_UUID, wanted).cloned(), expected);
    }
}
