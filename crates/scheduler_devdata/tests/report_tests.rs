mod fixtures;

use fixtures::FakeTableStore;
use scheduler_devdata::{load_venue_report, DevDataError, ReportTables};
use scheduler_tables::{composite_key, AttributeValue, Item, ItemExt};

const TABLES: ReportTables<'static> = ReportTables {
    venues: "venues",
    users: "users",
};

fn venue(id: &str, created_at: &str, created_by: Option<&str>) -> Item {
    let mut item = composite_key(format!("VENUE#{id}"), format!("VENUE#{id}"));
    item.insert("entityType".into(), AttributeValue::string("VENUE"));
    item.insert("venueId".into(), AttributeValue::string(id));
    item.insert("venueName".into(), AttributeValue::string(format!("Venue {id}")));
    item.insert("createdAt".into(), AttributeValue::string(created_at));
    item.insert("capacity".into(), AttributeValue::N("30".into()));
    if let Some(by) = created_by {
        item.insert("createdBy".into(), AttributeValue::string(by));
    }
    item
}

fn user(id: &str, name: &str) -> Item {
    let mut item = composite_key(format!("USER#{id}"), "PROFILE");
    item.insert("userId".into(), AttributeValue::string(id));
    item.insert("name".into(), AttributeValue::string(name));
    item.insert("email".into(), AttributeValue::string(format!("{id}@example.com")));
    item
}

#[tokio::test]
async fn test_report_spans_all_pages_newest_first() {
    let store = FakeTableStore::new(2);
    for (i, day) in ["01", "05", "03", "04", "02"].iter().enumerate() {
        store.put("venues", venue(&format!("v{i}"), &format!("2026-10-{day}T12:00:00Z"), Some("u-1")));
    }
    // Same table, not a venue: filtered out
    let mut room = composite_key("VENUE#v0", "ROOM#r1");
    room.insert("entityType".into(), AttributeValue::string("ROOM"));
    store.put("venues", room);
    store.put("users", user("u-1", "Test User"));

    let report = load_venue_report(&store, &TABLES).await.unwrap();

    let created: Vec<_> = report
        .venues
        .iter()
        .filter_map(|v| v.str_attr("createdAt"))
        .collect();
    assert_eq!(
        created,
        vec![
            "2026-10-05T12:00:00Z",
            "2026-10-04T12:00:00Z",
            "2026-10-03T12:00:00Z",
            "2026-10-02T12:00:00Z",
            "2026-10-01T12:00:00Z",
        ]
    );
    let venue_scans = store.scans().iter().filter(|s| s.table_name == "venues").count();
    assert_eq!(venue_scans, 3);
    assert!(report.render().contains("Test User (u-1@example.com): 5 venues"));
}

#[tokio::test]
async fn test_scan_filters_match_stored_records() {
    let store = FakeTableStore::new(10);
    store.put("venues", venue("v1", "", Some("u-1")));
    store.put("users", user("u-1", "Test User"));

    load_venue_report(&store, &TABLES).await.unwrap();

    let scans = store.scans();
    assert_eq!(scans[0].filter_expression.as_deref(), Some("entityType = :entityType"));
    assert_eq!(scans[1].filter_expression.as_deref(), Some("SK = :sk"));
}

#[tokio::test]
async fn test_creator_missing_from_scan_is_fetched_directly() {
    let store = FakeTableStore::new(10);
    store.put("venues", venue("v1", "", Some("u-2")));
    // Profile stored without userId, so the scan cannot index it
    let mut profile = composite_key("USER#u-2", "PROFILE");
    profile.insert("name".into(), AttributeValue::string("Late User"));
    profile.insert("email".into(), AttributeValue::string("late@example.com"));
    store.put("users", profile);

    let report = load_venue_report(&store, &TABLES).await.unwrap();

    let gets = store.gets();
    assert_eq!(gets.len(), 1);
    assert_eq!(gets[0].1.primary_key(), Some(("USER#u-2", "PROFILE")));
    assert!(report.render().contains("Creator: Late User (late@example.com)"));
}

#[tokio::test]
async fn test_unknown_and_missing_creators() {
    let store = FakeTableStore::new(10);
    store.put("venues", venue("v1", "2026-01-01T00:00:00Z", Some("ghost")));
    store.put("venues", venue("v2", "2025-01-01T00:00:00Z", None));

    let text = load_venue_report(&store, &TABLES).await.unwrap().render();

    assert!(text.contains("Creator: User ID: ghost (not found in users table)"));
    assert!(text.contains("Creator: Unknown Creator"));
    assert!(text.contains("Found 1 venues without creator information:"));
    assert!(text.contains("   - Venue v2 (v2)"));
}

#[tokio::test]
async fn test_no_venues_skips_user_scan() {
    let store = FakeTableStore::new(10);
    store.put("users", user("u-1", "Test User"));

    let report = load_venue_report(&store, &TABLES).await.unwrap();

    assert!(report.venues.is_empty());
    assert_eq!(store.scans().len(), 1);
}

#[tokio::test]
async fn test_unreachable_store_is_a_prerequisite_failure() {
    let mut store = FakeTableStore::new(10);
    store.reachable = false;

    let err = load_venue_report(&store, &TABLES).await.unwrap_err();

    assert!(matches!(err, DevDataError::TableStoreUnavailable(_)));
}
