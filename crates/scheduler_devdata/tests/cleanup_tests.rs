mod fixtures;

use std::time::Duration;

use fixtures::{test_catalog, ApiCall, FakeBookingApi};
use scheduler_api_client::EntityKind;
use scheduler_devdata::{delete_all_data, populate, DevDataError, SeedOptions};
use serde_json::json;

const BASE_URL: &str = "http://localhost:3001/api";

#[tokio::test]
async fn test_deletes_events_then_rooms_then_venues() {
    let mut api = FakeBookingApi::default();
    let options = SeedOptions {
        venue_cleanup_pause: Duration::ZERO,
    };
    populate(&mut api, BASE_URL, &test_catalog(), &options).await.unwrap();

    let report = delete_all_data(&api, BASE_URL, Duration::ZERO).await.unwrap();

    assert_eq!(report.total_deleted(), 17);
    assert_eq!(api.count(EntityKind::Venue), 0);
    assert_eq!(api.count(EntityKind::Room), 0);
    assert_eq!(api.count(EntityKind::Event), 0);

    let delete_kinds: Vec<EntityKind> = api
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            ApiCall::Delete(kind, _) => Some(kind),
            _ => None,
        })
        .collect();
    let last_event = delete_kinds.iter().rposition(|k| *k == EntityKind::Event).unwrap();
    let first_room = delete_kinds.iter().position(|k| *k == EntityKind::Room).unwrap();
    let last_room = delete_kinds.iter().rposition(|k| *k == EntityKind::Room).unwrap();
    let first_venue = delete_kinds.iter().position(|k| *k == EntityKind::Venue).unwrap();
    assert!(last_event < first_room);
    assert!(last_room < first_venue);
}

#[tokio::test]
async fn test_tallies_per_kind_in_deletion_order() {
    let api = FakeBookingApi::default();
    api.insert(EntityKind::Venue, json!({"name": "Hall"}));
    api.insert(EntityKind::Event, json!({"name": "Party"}));
    api.insert(EntityKind::Event, json!({"eventName": "Quiz"}));

    let report = delete_all_data(&api, BASE_URL, Duration::ZERO).await.unwrap();

    let tallies: Vec<(EntityKind, usize, usize)> = report
        .tallies
        .iter()
        .map(|t| (t.kind, t.deleted, t.total))
        .collect();
    assert_eq!(
        tallies,
        vec![
            (EntityKind::Event, 2, 2),
            (EntityKind::Room, 0, 0),
            (EntityKind::Venue, 1, 1),
        ]
    );
}

#[tokio::test]
async fn test_records_without_id_are_skipped_but_counted() {
    let api = FakeBookingApi::default();
    api.insert(EntityKind::Room, json!({"name": "Main Area"}));
    let mut records = api.records(EntityKind::Room);
    records.push(scheduler_api_client::EntityRecord::default());

    let deleted =
        scheduler_devdata::cleanup::delete_records(&api, EntityKind::Room, &records, Duration::ZERO).await;

    assert_eq!(deleted, 1);
    let deletes = api.calls().into_iter().filter(ApiCall::is_mutating).count();
    assert_eq!(deletes, 1);
}

#[tokio::test]
async fn test_closed_api_aborts_before_any_deletion() {
    let api = FakeBookingApi::with_api_closed();
    api.insert(EntityKind::Venue, json!({"name": "Hall"}));

    let err = delete_all_data(&api, BASE_URL, Duration::ZERO).await.unwrap_err();

    assert!(matches!(err, DevDataError::ServerUnavailable(_)));
    assert_eq!(api.calls(), vec![ApiCall::CheckApiOpen]);
    assert_eq!(api.count(EntityKind::Venue), 1);
}
