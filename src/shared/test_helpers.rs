use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::core::app::{build_router, AppServices, Repositories};
use crate::core::config::{IngestionConfig, WeatherConfig};
use crate::core::error::{AppError, Result};
use crate::features::contacts::models::{CreateContact, NonProfitContact};
use crate::features::contacts::ContactRepository;
use crate::features::locations::models::{CreateLocation, Location};
use crate::features::locations::LocationRepository;
use crate::features::report_statuses::models::{CreateReportStatus, ReportStatusEntry};
use crate::features::report_statuses::ReportStatusRepository;
use crate::features::reports::models::{
    Report, ReportDetail, ReportFields, ReportMarker, ReportType,
};
use crate::features::reports::ReportRepository;
use crate::features::users::models::{CreateUser, User};
use crate::features::users::UserRepository;
use crate::features::weather::WeatherService;

#[derive(Default)]
struct Tables {
    last_id: i64,
    users: BTreeMap<i64, User>,
    locations: BTreeMap<i64, Location>,
    contacts: BTreeMap<i64, NonProfitContact>,
    reports: BTreeMap<i64, Report>,
    statuses: BTreeMap<i64, ReportStatusEntry>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn insert_report(&mut self, location_id: i64, fields: &ReportFields) -> Report {
        let report = Report {
            id: self.next_id(),
            user_id: fields.user_id,
            location_id,
            report_type: fields.report_type,
            category: fields.category.clone(),
            severity: fields.severity.clone(),
            magnitude: fields.magnitude,
            temperature: fields.temperature,
            humidity: fields.humidity,
            wind_speed: fields.wind_speed,
            precipitation: fields.precipitation,
            image_url: fields.image_url.clone(),
            is_active: fields.is_active,
            timestamp: fields.timestamp,
            row_version: 1,
        };
        self.reports.insert(report.id, report.clone());
        report
    }

    fn detail(&self, report: &Report) -> ReportDetail {
        ReportDetail {
            report: report.clone(),
            location_name: self
                .locations
                .get(&report.location_id)
                .map(|l| l.name.clone())
                .unwrap_or_default(),
            user_email: report
                .user_id
                .and_then(|id| self.users.get(&id))
                .map(|u| u.email.clone()),
        }
    }

    fn delete_report(&mut self, id: i64) -> bool {
        let removed = self.reports.remove(&id).is_some();
        self.statuses.retain(|_, s| s.report_id != id);
        removed
    }
}

/// In-memory stand-in for PostgreSQL implementing every repository trait.
///
/// Enforces the same foreign-key rules as the schema: deleting a location
/// cascades to its reports and contacts, deleting a report cascades to its
/// status history, deleting a user nulls report submitters and reviewers.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    fail_report_inserts: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    /// Make every subsequent report insert fail, as a broken database would
    pub fn fail_report_inserts(&self) {
        self.fail_report_inserts.store(true, Ordering::SeqCst);
    }

    fn check_report_insert(&self) -> Result<()> {
        if self.fail_report_inserts.load(Ordering::SeqCst) {
            return Err(AppError::Internal("simulated report insert failure".to_string()));
        }
        Ok(())
    }

    pub fn seed_location(&self, name: &str, lat: &str, lon: &str) -> Location {
        let mut t = self.tables();
        let location = Location {
            id: t.next_id(),
            name: name.to_string(),
            latitude: Decimal::from_str(lat).unwrap(),
            longitude: Decimal::from_str(lon).unwrap(),
            country: "Turkey".to_string(),
        };
        t.locations.insert(location.id, location.clone());
        location
    }

    pub fn seed_user(&self, username: &str, email: &str) -> User {
        let mut t = self.tables();
        let user = User {
            id: t.next_id(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$seeded".to_string(),
            join_date: Utc::now(),
        };
        t.users.insert(user.id, user.clone());
        user
    }

    pub fn seed_report(&self, location_id: i64, user_id: Option<i64>, is_active: bool) -> Report {
        let fields = ReportFields {
            user_id,
            report_type: ReportType::Disaster,
            category: "Earthquake".to_string(),
            severity: Some("Severe".to_string()),
            magnitude: Some(Decimal::from_str("6.8").unwrap()),
            temperature: None,
            humidity: None,
            wind_speed: None,
            precipitation: None,
            image_url: None,
            is_active,
            timestamp: Utc::now(),
        };
        self.tables().insert_report(location_id, &fields)
    }

    pub fn report(&self, id: i64) -> Option<Report> {
        self.tables().reports.get(&id).cloned()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.tables().reports.values().cloned().collect()
    }

    pub fn set_report_active(&self, id: i64, is_active: bool) {
        if let Some(report) = self.tables().reports.get_mut(&id) {
            report.is_active = is_active;
        }
    }

    pub fn contact_count(&self) -> usize {
        self.tables().contacts.len()
    }

    pub fn status_count(&self) -> usize {
        self.tables().statuses.len()
    }
}

#[async_trait]
impl LocationRepository for InMemoryStore {
    async fn insert(&self, data: &CreateLocation) -> Result<Location> {
        let mut t = self.tables();
        let location = Location {
            id: t.next_id(),
            name: data.name.clone(),
            latitude: data.latitude,
            longitude: data.longitude,
            country: data.country.clone(),
        };
        t.locations.insert(location.id, location.clone());
        Ok(location)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>> {
        Ok(self.tables().locations.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Location>> {
        let mut locations: Vec<Location> = self.tables().locations.values().cloned().collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(locations)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut t = self.tables();
        if t.locations.remove(&id).is_none() {
            return Ok(false);
        }
        let report_ids: Vec<i64> = t
            .reports
            .values()
            .filter(|r| r.location_id == id)
            .map(|r| r.id)
            .collect();
        for report_id in report_ids {
            t.delete_report(report_id);
        }
        t.contacts.retain(|_, c| c.location_id != id);
        Ok(true)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, data: &CreateUser) -> Result<User> {
        let mut t = self.tables();
        if t.users.values().any(|u| u.username == data.username) {
            return Err(AppError::Conflict(format!(
                "Username '{}' is already taken",
                data.username
            )));
        }
        if t.users.values().any(|u| u.email == data.email) {
            return Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }
        let user = User {
            id: t.next_id(),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            join_date: Utc::now(),
        };
        t.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.tables().users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self.tables().users.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut t = self.tables();
        if t.users.remove(&id).is_none() {
            return Ok(false);
        }
        for report in t.reports.values_mut() {
            if report.user_id == Some(id) {
                report.user_id = None;
            }
        }
        for status in t.statuses.values_mut() {
            if status.reviewed_by_id == Some(id) {
                status.reviewed_by_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn insert(&self, data: &CreateContact) -> Result<NonProfitContact> {
        let mut t = self.tables();
        let contact = NonProfitContact {
            id: t.next_id(),
            location_id: data.location_id,
            name: data.name.clone(),
            contact_email: data.contact_email.clone(),
            phone: data.phone.clone(),
            website: data.website.clone(),
        };
        t.contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn list_by_location(&self, location_id: i64) -> Result<Vec<NonProfitContact>> {
        let mut contacts: Vec<NonProfitContact> = self
            .tables()
            .contacts
            .values()
            .filter(|c| c.location_id == location_id)
            .cloned()
            .collect();
        contacts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(contacts)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.tables().contacts.remove(&id).is_some())
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    async fn list_active_markers(&self) -> Result<Vec<ReportMarker>> {
        let t = self.tables();
        Ok(t.reports
            .values()
            .filter(|r| r.is_active)
            .filter_map(|r| {
                t.locations.get(&r.location_id).map(|l| ReportMarker {
                    id: r.id,
                    category: r.category.clone(),
                    severity: r.severity.clone(),
                    timestamp: r.timestamp,
                    latitude: l.latitude,
                    longitude: l.longitude,
                })
            })
            .collect())
    }

    async fn create_with_location(
        &self,
        location: &CreateLocation,
        fields: &ReportFields,
    ) -> Result<ReportMarker> {
        let mut t = self.tables();
        let location = Location {
            id: t.next_id(),
            name: location.name.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            country: location.country.clone(),
        };
        // Nothing is committed until both rows are accepted
        self.check_report_insert()?;

        t.locations.insert(location.id, location.clone());
        let report = t.insert_report(location.id, fields);
        Ok(ReportMarker {
            id: report.id,
            category: report.category,
            severity: report.severity,
            timestamp: report.timestamp,
            latitude: location.latitude,
            longitude: location.longitude,
        })
    }

    async fn insert(&self, location_id: i64, fields: &ReportFields) -> Result<Report> {
        self.check_report_insert()?;
        let mut t = self.tables();
        if !t.locations.contains_key(&location_id) {
            return Err(AppError::Internal(format!(
                "foreign key violation: location {}",
                location_id
            )));
        }
        Ok(t.insert_report(location_id, fields))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Report>> {
        Ok(self.tables().reports.get(&id).cloned())
    }

    async fn find_detail(&self, id: i64) -> Result<Option<ReportDetail>> {
        let t = self.tables();
        Ok(t.reports.get(&id).map(|r| t.detail(r)))
    }

    async fn list_details(&self, offset: i64, limit: i64) -> Result<(Vec<ReportDetail>, i64)> {
        let t = self.tables();
        let rows = t
            .reports
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|r| t.detail(r))
            .collect();
        Ok((rows, t.reports.len() as i64))
    }

    async fn replace(
        &self,
        id: i64,
        location_id: i64,
        expected_version: i32,
        fields: &ReportFields,
    ) -> Result<Option<Report>> {
        let mut t = self.tables();
        let Some(report) = t
            .reports
            .get_mut(&id)
            .filter(|r| r.row_version == expected_version)
        else {
            return Ok(None);
        };

        report.location_id = location_id;
        report.user_id = fields.user_id;
        report.report_type = fields.report_type;
        report.category = fields.category.clone();
        report.severity = fields.severity.clone();
        report.magnitude = fields.magnitude;
        report.temperature = fields.temperature;
        report.humidity = fields.humidity;
        report.wind_speed = fields.wind_speed;
        report.precipitation = fields.precipitation;
        report.image_url = fields.image_url.clone();
        report.is_active = fields.is_active;
        report.timestamp = fields.timestamp;
        report.row_version += 1;
        Ok(Some(report.clone()))
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.tables().reports.contains_key(&id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.tables().delete_report(id))
    }
}

#[async_trait]
impl ReportStatusRepository for InMemoryStore {
    async fn insert(&self, data: &CreateReportStatus) -> Result<ReportStatusEntry> {
        let mut t = self.tables();
        let entry = ReportStatusEntry {
            id: t.next_id(),
            report_id: data.report_id,
            status: data.status,
            reviewed_by_id: data.reviewed_by_id,
            review_timestamp: data.review_timestamp,
        };
        t.statuses.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn list_by_report(&self, report_id: i64) -> Result<Vec<ReportStatusEntry>> {
        Ok(self
            .tables()
            .statuses
            .values()
            .filter(|s| s.report_id == report_id)
            .cloned()
            .collect())
    }
}

// =============================================================================
// HTTP FIXTURES
// =============================================================================

pub fn weather_config(base_url: &str) -> WeatherConfig {
    WeatherConfig {
        api_key: "test-key".to_string(),
        base_url: base_url.trim_end_matches('/').to_string(),
        units: "metric".to_string(),
    }
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_fake_provider(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn repositories(store: &Arc<InMemoryStore>) -> Repositories {
    Repositories {
        reports: store.clone(),
        report_statuses: store.clone(),
        locations: store.clone(),
        contacts: store.clone(),
        users: store.clone(),
    }
}

/// Full application router over `store`, with the weather provider at
/// `weather_base_url`
pub fn test_server(
    store: &Arc<InMemoryStore>,
    weather_base_url: &str,
    admin_credentials: Option<&str>,
) -> TestServer {
    let services = AppServices::new(
        repositories(store),
        IngestionConfig::default(),
        WeatherService::new(reqwest::Client::new(), weather_config(weather_base_url)),
    );
    let router = build_router(
        &services,
        admin_credentials.map(str::to_string),
        1024 * 1024,
    );
    TestServer::new(router).unwrap()
}
