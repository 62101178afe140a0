//! Test fixtures for the dev-data orchestrators
//!
//! In-memory stand-ins for the booking API and the table store that record
//! every call so tests can assert on ordering and side effects.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use chrono::NaiveDate;
use scheduler_api_client::{ApiError, EntityApi, EntityKind, EntityRecord, NewEventRoom};
use scheduler_devdata::{sample_catalog, Catalog, SampleDates};
use scheduler_tables::{
    AttributeValue, Item, ItemExt, ScanPage, ScanRequest, TableStore, TableStoreError,
};
use serde_json::{Map, Value};

/// A call made against [`FakeBookingApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    CheckServer,
    CheckApiOpen,
    Authenticate,
    List(EntityKind),
    Get(EntityKind, String),
    Create(EntityKind),
    Delete(EntityKind, String),
    AssignRoom { event_id: String, room_id: String },
}

impl ApiCall {
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            ApiCall::Create(_) | ApiCall::Delete(..) | ApiCall::AssignRoom { .. }
        )
    }
}

#[derive(Default)]
struct ApiState {
    records: HashMap<EntityKind, Vec<EntityRecord>>,
    assignments: Vec<NewEventRoom>,
    calls: Vec<ApiCall>,
    next_id: usize,
}

/// In-memory booking API.
pub struct FakeBookingApi {
    pub server_up: bool,
    pub api_open: bool,
    pub login_ok: bool,
    /// Names whose create call fails
    pub failing_names: HashSet<String>,
    state: Mutex<ApiState>,
}

impl Default for FakeBookingApi {
    fn default() -> Self {
        Self {
            server_up: true,
            api_open: true,
            login_ok: true,
            failing_names: HashSet::new(),
            state: Mutex::new(ApiState::default()),
        }
    }
}

impl FakeBookingApi {
    pub fn down() -> Self {
        Self {
            server_up: false,
            api_open: false,
            ..Self::default()
        }
    }

    pub fn with_login_failing() -> Self {
        Self {
            login_ok: false,
            ..Self::default()
        }
    }

    /// Up, but the venues collection wants credentials.
    pub fn with_api_closed() -> Self {
        Self {
            api_open: false,
            ..Self::default()
        }
    }

    /// Adds an existing record and returns its id.
    pub fn insert(&self, kind: EntityKind, fields: Value) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("{}-{}", kind.label(), state.next_id);
        let mut map = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert(kind.id_field().to_string(), Value::String(id.clone()));
        if kind == EntityKind::Venue {
            if let Some(name) = map.get("name").cloned() {
                map.insert("venueName".to_string(), name);
            }
        }
        state.records.entry(kind).or_default().push(EntityRecord(map));
        id
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.state
            .lock()
            .unwrap()
            .records
            .get(&kind)
            .map_or(0, Vec::len)
    }

    pub fn records(&self, kind: EntityKind) -> Vec<EntityRecord> {
        self.state
            .lock()
            .unwrap()
            .records
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    pub fn assignments(&self) -> Vec<NewEventRoom> {
        self.state.lock().unwrap().assignments.clone()
    }

    fn record(&self, call: ApiCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

impl EntityApi for FakeBookingApi {
    async fn check_server(&self) -> bool {
        self.record(ApiCall::CheckServer);
        self.server_up
    }

    async fn check_api_open(&self) -> bool {
        self.record(ApiCall::CheckApiOpen);
        self.api_open
    }

    async fn authenticate(&mut self) -> Result<(), ApiError> {
        self.record(ApiCall::Authenticate);
        if self.login_ok {
            Ok(())
        } else {
            Err(ApiError::MissingSessionToken)
        }
    }

    async fn list(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, ApiError> {
        self.record(ApiCall::List(kind));
        Ok(self.records(kind))
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<EntityRecord, ApiError> {
        self.record(ApiCall::Get(kind, id.to_string()));
        self.records(kind)
            .into_iter()
            .find(|r| r.id(kind) == Some(id))
            .ok_or(ApiError::StatusError {
                status_code: 404,
                message: "not found".into(),
            })
    }

    async fn create(&self, kind: EntityKind, body: Value) -> Result<String, ApiError> {
        self.record(ApiCall::Create(kind));
        let name = body.get("name").and_then(Value::as_str).unwrap_or_default();
        if self.failing_names.contains(name) {
            return Err(ApiError::StatusError {
                status_code: 500,
                message: format!("cannot create {}", name),
            });
        }
        Ok(self.insert(kind, body))
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(kind, id.to_string()));
        let mut state = self.state.lock().unwrap();
        let records = state.records.entry(kind).or_default();
        let before = records.len();
        records.retain(|r| r.id(kind) != Some(id));
        if records.len() == before {
            return Err(ApiError::StatusError {
                status_code: 404,
                message: format!("{} {} not found", kind, id),
            });
        }
        Ok(())
    }

    async fn assign_room(&self, assignment: &NewEventRoom) -> Result<(), ApiError> {
        self.record(ApiCall::AssignRoom {
            event_id: assignment.event_id.clone(),
            room_id: assignment.room_id.clone(),
        });
        self.state.lock().unwrap().assignments.push(assignment.clone());
        Ok(())
    }
}

/// The sample catalog for a fixed day.
pub fn test_catalog() -> Catalog {
    sample_catalog(&SampleDates::from_today(
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
    ))
}

/// In-memory table store that serves scans in pages of `page_size`.
pub struct FakeTableStore {
    pub reachable: bool,
    pub page_size: usize,
    tables: Mutex<HashMap<String, Vec<Item>>>,
    scans: Mutex<Vec<ScanRequest>>,
    gets: Mutex<Vec<(String, Item)>>,
}

impl FakeTableStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            reachable: true,
            page_size,
            tables: Mutex::new(HashMap::new()),
            scans: Mutex::new(Vec::new()),
            gets: Mutex::new(Vec::new()),
        }
    }

    pub fn put(&self, table: &str, item: Item) {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(item);
    }

    pub fn items(&self, table: &str) -> Vec<Item> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub fn scans(&self) -> Vec<ScanRequest> {
        self.scans.lock().unwrap().clone()
    }

    pub fn gets(&self) -> Vec<(String, Item)> {
        self.gets.lock().unwrap().clone()
    }

    fn unreachable() -> TableStoreError {
        TableStoreError::ServiceError {
            code: "ConnectionRefused".into(),
            message: "table store is down".into(),
        }
    }
}

fn same_key(a: &Item, b: &Item) -> bool {
    a.primary_key().is_some() && a.primary_key() == b.primary_key()
}

/// Evaluates the `attr = :placeholder` filters the tools use.
fn matches_filter(item: &Item, request: &ScanRequest) -> bool {
    let Some(expression) = &request.filter_expression else {
        return true;
    };
    let Some((attribute, placeholder)) = expression.split_once(" = ") else {
        return true;
    };
    let expected: Option<&AttributeValue> = request.expression_attribute_values.get(placeholder);
    item.get(attribute) == expected
}

impl TableStore for FakeTableStore {
    async fn list_tables(&self) -> Result<Vec<String>, TableStoreError> {
        if !self.reachable {
            return Err(Self::unreachable());
        }
        let mut names: Vec<String> = self.tables.lock().unwrap().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>, TableStoreError> {
        if !self.reachable {
            return Err(Self::unreachable());
        }
        self.gets.lock().unwrap().push((table.to_string(), key.clone()));
        Ok(self.items(table).into_iter().find(|item| same_key(item, &key)))
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<(), TableStoreError> {
        if !self.reachable {
            return Err(Self::unreachable());
        }
        if let Some(items) = self.tables.lock().unwrap().get_mut(table) {
            items.retain(|item| !same_key(item, &key));
        }
        Ok(())
    }

    async fn scan(&self, request: &ScanRequest) -> Result<ScanPage, TableStoreError> {
        if !self.reachable {
            return Err(Self::unreachable());
        }
        self.scans.lock().unwrap().push(request.clone());

        let all = self.items(&request.table_name);
        let start = match &request.exclusive_start_key {
            Some(key) => all
                .iter()
                .position(|item| same_key(item, key))
                .map_or(all.len(), |i| i + 1),
            None => 0,
        };
        let end = (start + self.page_size).min(all.len());
        let page = &all[start..end];

        Ok(ScanPage {
            items: page.iter().filter(|item| matches_filter(item, request)).cloned().collect(),
            last_evaluated_key: if end < all.len() {
                page.last().map(|item| {
                    let (pk, sk) = item.primary_key().unwrap();
                    scheduler_tables::composite_key(pk, sk)
                })
            } else {
                None
            },
        })
    }
}
