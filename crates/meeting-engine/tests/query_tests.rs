//! End-to-end tests for the meeting query.

use meeting_engine::{query, EngineError, Event, MeetingQuery, MeetingRequest, TimeRange, DAY_SLOTS};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end).unwrap()
}

fn event(start: u32, end: u32, attendees: &[&str]) -> Event {
    Event::new(range(start, end), attendees.iter().copied())
}

fn request(attendees: &[&str], duration: u32) -> MeetingRequest {
    MeetingRequest::new(attendees.iter().copied(), duration).unwrap()
}

// ── Basic scenarios ─────────────────────────────────────────────────────────

#[test]
fn no_events_whole_day_is_free() {
    let windows = query(&[], &request(&["A"], 30));
    assert_eq!(windows, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn no_attendees_whole_day_is_free() {
    let events = vec![event(600, 660, &["A"])];
    let windows = query(&events, &request(&[], 60));
    assert_eq!(windows, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn duration_longer_than_day_has_no_options() {
    let windows = query(&[], &request(&["A"], DAY_SLOTS + 1));
    assert!(windows.is_empty());
}

#[test]
fn single_event_splits_the_day() {
    let events = vec![event(600, 660, &["A"])];
    let windows = query(&events, &request(&["A"], 30));
    assert_eq!(windows, vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn overlapping_events_merge_into_one_busy_block() {
    let events = vec![event(60, 120, &["A"]), event(90, 150, &["A"])];
    let windows = query(&events, &request(&["A"], 1));
    assert_eq!(windows, vec![range(0, 60), range(150, 1440)]);
}

#[test]
fn full_day_event_leaves_no_window() {
    let events = vec![event(0, 1440, &["A"])];
    assert!(query(&events, &request(&["A"], 1)).is_empty());
}

#[test]
fn nested_events_use_the_outer_block() {
    // |----A----|
    //   |--A--|
    let events = vec![event(480, 600, &["A"]), event(510, 540, &["A"])];
    let windows = query(&events, &request(&["A"], 30));
    assert_eq!(windows, vec![range(0, 480), range(600, 1440)]);
}

#[test]
fn events_of_several_attendees_combine() {
    // A: 08:00-08:30, B: 09:00-09:30
    let events = vec![event(480, 510, &["A"]), event(540, 570, &["B"])];
    let windows = query(&events, &request(&["A", "B"], 30));
    assert_eq!(windows, vec![range(0, 480), range(510, 540), range(570, 1440)]);
}

#[test]
fn just_enough_room() {
    let events = vec![event(0, 510, &["A"]), event(540, 1440, &["A"])];
    let windows = query(&events, &request(&["A"], 30));
    assert_eq!(windows, vec![range(510, 540)]);
}

#[test]
fn not_enough_room() {
    let events = vec![event(0, 510, &["A"]), event(540, 1440, &["A"])];
    assert!(query(&events, &request(&["A"], 60)).is_empty());
}

#[test]
fn events_of_unrelated_people_are_ignored() {
    let events = vec![event(480, 510, &["A"]), event(540, 570, &["C"])];
    let windows = query(&events, &request(&["A", "B"], 30));
    assert_eq!(windows, vec![range(0, 480), range(510, 1440)]);
}

#[test]
fn event_with_any_required_attendee_blocks_time() {
    let events = vec![event(600, 660, &["C", "D", "B"])];
    let windows = query(&events, &request(&["A", "B"], 30));
    assert_eq!(windows, vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn windows_come_back_in_chronological_order_regardless_of_event_order() {
    let events = vec![
        event(900, 960, &["A"]),
        event(60, 120, &["A"]),
        event(480, 540, &["A"]),
    ];
    let windows = query(&events, &request(&["A"], 30));
    assert_eq!(
        windows,
        vec![range(0, 60), range(120, 480), range(540, 900), range(960, 1440)]
    );
}

// ── Optional attendees ──────────────────────────────────────────────────────

#[test]
fn optional_attendee_is_honored_when_possible() {
    let events = vec![
        event(480, 510, &["A"]),
        event(540, 570, &["B"]),
        event(0, 1440, &["C"]),
    ];
    let req = request(&["A", "B"], 30);

    // C is busy all day: fall back to A and B only.
    let with_c = req.clone().with_optional_attendees(["C"]);
    assert_eq!(
        query(&events, &with_c),
        vec![range(0, 480), range(510, 540), range(570, 1440)]
    );

    // D has a short busy spot that still leaves room.
    let events = vec![
        event(480, 510, &["A"]),
        event(540, 570, &["B"]),
        event(510, 540, &["D"]),
    ];
    let with_d = req.with_optional_attendees(["D"]);
    assert_eq!(query(&events, &with_d), vec![range(0, 480), range(570, 1440)]);
}

#[test]
fn optional_attendee_squeezing_every_window_falls_back() {
    // A: 0-510 and 540-1440, optional B busy 510-540: only A's gap survives.
    let events = vec![
        event(0, 510, &["A"]),
        event(540, 1440, &["A"]),
        event(510, 540, &["B"]),
    ];
    let req = request(&["A"], 30).with_optional_attendees(["B"]);
    assert_eq!(query(&events, &req), vec![range(510, 540)]);
}

#[test]
fn only_optional_attendees_are_treated_as_required() {
    let events = vec![event(480, 510, &["A"]), event(540, 570, &["B"])];
    let req = request(&[], 30).with_optional_attendees(["A", "B"]);
    assert_eq!(
        query(&events, &req),
        vec![range(0, 480), range(510, 540), range(570, 1440)]
    );
}

#[test]
fn only_optional_attendees_with_no_gaps_yields_nothing() {
    let events = vec![event(0, 510, &["A"]), event(540, 1440, &["B"])];
    let req = request(&[], 60).with_optional_attendees(["A", "B"]);
    assert!(query(&events, &req).is_empty());
}

// ── Request validation ──────────────────────────────────────────────────────

#[test]
fn zero_duration_request_is_rejected() {
    let err = MeetingRequest::new(["A"], 0).unwrap_err();
    assert_eq!(err, EngineError::InvalidDuration(0));
}

#[test]
fn request_deserializes_with_default_optional_attendees() {
    let req: MeetingRequest =
        serde_json::from_str(r#"{"duration":30,"attendees":["A","B"]}"#).unwrap();
    assert_eq!(req.duration(), 30);
    assert_eq!(req.attendees().len(), 2);
    assert!(req.optional_attendees().is_empty());

    let bad = serde_json::from_str::<MeetingRequest>(r#"{"duration":0,"attendees":["A"]}"#);
    assert!(bad.is_err(), "zero duration must be rejected on deserialize");
}

#[test]
fn event_deserializes_with_validated_range() {
    let ev: Event = serde_json::from_str(
        r#"{"title":"Standup","when":{"start":540,"end":555},"attendees":["A"]}"#,
    )
    .unwrap();
    assert_eq!(ev.title.as_deref(), Some("Standup"));
    assert_eq!(ev.when, range(540, 555));

    let bad = serde_json::from_str::<Event>(
        r#"{"when":{"start":540,"end":1441},"attendees":["A"]}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn meeting_query_object_matches_free_function() {
    let events = vec![event(600, 660, &["A"])];
    let req = request(&["A"], 30);
    assert_eq!(MeetingQuery::new().query(&events, &req), query(&events, &req));
}
