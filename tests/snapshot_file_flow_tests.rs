// Restore flows against the JSON file snapshot store.

use chrono::{TimeZone, Utc};
use pomodoro_cycles::modules::cycles::adapters::outbound::snapshot::CYCLES_STATE_KEY;
use pomodoro_cycles::modules::cycles::store::CyclesStore;
use pomodoro_cycles::shared::core::primitives::ManualClock;
use pomodoro_cycles::shared::infrastructure::snapshot_store::SnapshotStore;
use pomodoro_cycles::shared::infrastructure::snapshot_store::json_file::JsonFileSnapshotStore;
use rstest::{fixture, rstest};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

type BeforeEachReturn = (TempDir, Arc<ManualClock>, Arc<JsonFileSnapshotStore>);

#[fixture]
fn before_each() -> BeforeEachReturn {
    let dir = tempfile::tempdir().unwrap();
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()));
    let snapshots = Arc::new(JsonFileSnapshotStore::new(dir.path()));
    (dir, clock, snapshots)
}

#[rstest]
fn a_restarted_store_picks_up_the_running_cycle(before_each: BeforeEachReturn) {
    let (_dir, clock, snapshots) = before_each;
    let mut first = CyclesStore::new(clock.clone(), snapshots.clone());
    first.start("Write report", 25).unwrap();
    first.interrupt().unwrap();
    let running = first.start("Read", 5).unwrap();
    drop(first);

    clock.advance_seconds(120);
    let restored = CyclesStore::new(clock, snapshots);

    assert_eq!(restored.cycles().len(), 2);
    assert_eq!(restored.active_cycle_id(), Some(running.id.as_str()));
    assert_eq!(restored.elapsed_seconds(), 120);
}

#[rstest]
fn the_snapshot_is_a_single_camel_case_record(before_each: BeforeEachReturn) {
    let (_dir, clock, snapshots) = before_each;
    let mut store = CyclesStore::new(clock, snapshots.clone());
    let cycle = store.start("Write report", 25).unwrap();

    let contents = snapshots.read(CYCLES_STATE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["activeCycleId"], cycle.id.as_str());
    assert_eq!(json["cycles"][0]["minutesAmount"], 25);
    assert_eq!(json["cycles"][0]["startDate"], "2024-03-04T09:00:00Z");
    assert!(json["cycles"][0].get("finishedDate").is_none());
}

#[rstest]
fn a_corrupted_file_starts_an_empty_history(before_each: BeforeEachReturn) {
    let (_dir, clock, snapshots) = before_each;
    fs::write(snapshots.path_for(CYCLES_STATE_KEY), "{\"cycles\": [").unwrap();

    let mut store = CyclesStore::new(clock, snapshots.clone());
    assert!(store.cycles().is_empty());

    store.start("Read", 5).unwrap();
    let contents = snapshots.read(CYCLES_STATE_KEY).unwrap().unwrap();
    assert!(contents.contains("\"Read\""), "the next write replaces the corrupted file");
}
