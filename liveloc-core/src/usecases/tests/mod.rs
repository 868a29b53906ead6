use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use liveloc_entities::builders::*;

use super::*;
use crate::{
    entities::*,
    gateways::{geocode::*, position::*, report::*},
};

pub struct MockPositionSource {
    result: Result<Coordinate, RawPositionError>,
    pub calls: AtomicUsize,
    pub last_options: Mutex<Option<PositionOptions>>,
}

impl MockPositionSource {
    pub fn ok(coords: Coordinate) -> Self {
        Self::new(Ok(coords))
    }
    pub fn err(err: RawPositionError) -> Self {
        Self::new(Err(err))
    }
    fn new(result: Result<Coordinate, RawPositionError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_options: Mutex::new(None),
        }
    }
}

impl PositionSource for MockPositionSource {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, RawPositionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_options.lock().unwrap() = Some(*options);
        self.result.clone()
    }
}

pub enum Lookup {
    Found(Option<String>),
    Fail,
    Hang,
}

pub struct MockGeoGW {
    lookup: Lookup,
    pub calls: AtomicUsize,
}

impl MockGeoGW {
    pub fn new(lookup: Lookup) -> Self {
        Self {
            lookup,
            calls: AtomicUsize::new(0),
        }
    }
    pub fn found(name: &str) -> Self {
        Self::new(Lookup::Found(Some(name.to_string())))
    }
}

impl ReverseGeocodingGateway for MockGeoGW {
    async fn resolve_place_name(
        &self,
        _: &Coordinate,
        _: Duration,
    ) -> Result<Option<String>, GeocodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.lookup {
            Lookup::Found(name) => Ok(name.clone()),
            Lookup::Fail => Err(GeocodingError::Status(503)),
            Lookup::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Some("too late".to_string()))
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingReportGW {
    pub sent: Mutex<Vec<(Role, ReportPayload)>>,
    pub failure: Option<ReportError>,
}

impl RecordingReportGW {
    pub fn failing(err: ReportError) -> Self {
        Self {
            failure: Some(err),
            ..Default::default()
        }
    }

    fn record(&self, role: Role, payload: &ReportPayload) -> Result<(), ReportError> {
        self.sent.lock().unwrap().push((role, payload.clone()));
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub fn sent(&self) -> Vec<(Role, ReportPayload)> {
        self.sent.lock().unwrap().clone()
    }
}

impl LocationReportGateway for RecordingReportGW {
    async fn update_maid_location(&self, payload: &ReportPayload) -> Result<(), ReportError> {
        self.record(Role::Maid, payload)
    }
    async fn update_homeowner_location(&self, payload: &ReportPayload) -> Result<(), ReportError> {
        self.record(Role::Homeowner, payload)
    }
    async fn update_cleaning_company_location(
        &self,
        payload: &ReportPayload,
    ) -> Result<(), ReportError> {
        self.record(Role::CleaningCompany, payload)
    }
    async fn update_home_nurse_location(
        &self,
        payload: &ReportPayload,
    ) -> Result<(), ReportError> {
        self.record(Role::HomeNurse, payload)
    }
}

fn nairobi() -> Coordinate {
    Coordinate::build().lat(-0.3).lng(36.07).finish()
}

fn succeeded(outcome: CycleOutcome) -> LiveLocation {
    match outcome {
        CycleOutcome::Succeeded(location) => location,
        outcome => panic!("Unexpected outcome: {outcome:?}"),
    }
}

fn failed(outcome: CycleOutcome) -> CycleError {
    match outcome {
        CycleOutcome::Failed(err) => err,
        outcome => panic!("Unexpected outcome: {outcome:?}"),
    }
}

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn no_actor_does_nothing() {
    init_test_logger();
    let source = MockPositionSource::ok(nairobi());
    let geo = MockGeoGW::found("Nairobi");
    let reporter = RecordingReportGW::default();
    let outcome =
        acquire_and_report(None, &source, &geo, &reporter, &CycleOptions::default()).await;
    assert_eq!(CycleOutcome::Skipped, outcome);
    assert_eq!(0, source.calls.load(Ordering::SeqCst));
    assert_eq!(0, geo.calls.load(Ordering::SeqCst));
    assert!(reporter.sent().is_empty());
}

#[tokio::test]
async fn report_maid_location_with_label() {
    init_test_logger();
    let source = MockPositionSource::ok(nairobi());
    let geo = MockGeoGW::found("Nairobi");
    let reporter = RecordingReportGW::default();
    let actor = Actor::new("maid");
    let outcome = acquire_and_report(
        Some(&actor),
        &source,
        &geo,
        &reporter,
        &CycleOptions::default(),
    )
    .await;
    let expected_payload = ReportPayload {
        current_latitude: -0.3,
        current_longitude: 36.07,
        location_label: Some("Nairobi".to_string()),
    };
    assert_eq!(vec![(Role::Maid, expected_payload)], reporter.sent());
    assert_eq!(
        CycleOutcome::Succeeded(LiveLocation {
            coords: nairobi(),
            place_name: Some("Nairobi".to_string()),
        }),
        outcome
    );
}

#[tokio::test]
async fn acquire_with_fresh_high_accuracy_fix() {
    let source = MockPositionSource::ok(nairobi());
    let actor = Actor::new("homeowner");
    acquire_and_report(
        Some(&actor),
        &source,
        &MockGeoGW::found("Nairobi"),
        &RecordingReportGW::default(),
        &CycleOptions::default(),
    )
    .await;
    let options = source.last_options.lock().unwrap().unwrap();
    assert!(options.high_accuracy);
    assert_eq!(Duration::from_millis(15_000), options.timeout);
    assert_eq!(Duration::ZERO, options.max_age);
}

#[tokio::test]
async fn exposed_coords_equal_reported_coords() {
    let coords = Coordinate::build()
        .lat(52.520_008_123_456)
        .lng(13.404_954_987_654)
        .accuracy(4.2)
        .finish();
    let source = MockPositionSource::ok(coords);
    let actor = Actor::new("home_nurse");
    let outcome = acquire_and_report(
        Some(&actor),
        &source,
        &MockGeoGW::new(Lookup::Found(None)),
        &RecordingReportGW::default(),
        &CycleOptions::default(),
    )
    .await;
    let location = succeeded(outcome);
    assert_eq!(coords, location.coords);
    assert!(location.place_name.is_none());
}

#[tokio::test]
async fn failed_reverse_geocoding_is_not_fatal() {
    init_test_logger();
    let reporter = RecordingReportGW::default();
    let actor = Actor::new("maid");
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::ok(nairobi()),
        &MockGeoGW::new(Lookup::Fail),
        &reporter,
        &CycleOptions::default(),
    )
    .await;
    assert_eq!(
        CycleOutcome::Succeeded(LiveLocation {
            coords: nairobi(),
            place_name: None,
        }),
        outcome
    );
    let sent = reporter.sent();
    assert_eq!(1, sent.len());
    assert!(sent[0].1.location_label.is_none());
}

#[tokio::test(start_paused = true)]
async fn reverse_geocoding_times_out() {
    init_test_logger();
    let reporter = RecordingReportGW::default();
    let actor = Actor::new("cleaning_company");
    let options = CycleOptions {
        reverse_geocoding_timeout: Duration::from_millis(50),
        ..Default::default()
    };
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::ok(nairobi()),
        &MockGeoGW::new(Lookup::Hang),
        &reporter,
        &options,
    )
    .await;
    assert_eq!(
        CycleOutcome::Succeeded(LiveLocation {
            coords: nairobi(),
            place_name: None,
        }),
        outcome
    );
    assert_eq!(Role::CleaningCompany, reporter.sent()[0].0);
}

#[tokio::test]
async fn blank_place_names_are_dropped() {
    let actor = Actor::new("maid");
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::ok(nairobi()),
        &MockGeoGW::found("  "),
        &RecordingReportGW::default(),
        &CycleOptions::default(),
    )
    .await;
    let location = succeeded(outcome);
    assert!(location.place_name.is_none());
}

#[tokio::test]
async fn skip_reverse_geocoding_if_disabled() {
    let geo = MockGeoGW::found("Nairobi");
    let actor = Actor::new("maid");
    let options = CycleOptions {
        reverse_geocoding: false,
        ..Default::default()
    };
    acquire_and_report(
        Some(&actor),
        &MockPositionSource::ok(nairobi()),
        &geo,
        &RecordingReportGW::default(),
        &options,
    )
    .await;
    assert_eq!(0, geo.calls.load(Ordering::SeqCst));
}

#[tokio::test]
async fn permission_denied() {
    let geo = MockGeoGW::found("Nairobi");
    let reporter = RecordingReportGW::default();
    let actor = Actor::new("maid");
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::err(RawPositionError::coded(1, "User denied Geolocation")),
        &geo,
        &reporter,
        &CycleOptions::default(),
    )
    .await;
    let err = failed(outcome);
    assert_eq!(
        CycleError::Acquisition(AcquisitionError::PermissionDenied),
        err
    );
    assert_eq!(AcquisitionError::PermissionDenied.to_string(), err.to_string());
    assert_eq!(0, geo.calls.load(Ordering::SeqCst));
    assert!(reporter.sent().is_empty());
}

#[tokio::test]
async fn acquisition_timeout_sends_nothing() {
    let reporter = RecordingReportGW::default();
    let actor = Actor::new("homeowner");
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::err(RawPositionError::coded(3, "Timeout expired")),
        &MockGeoGW::found("Nairobi"),
        &reporter,
        &CycleOptions::default(),
    )
    .await;
    let err = failed(outcome);
    assert_eq!("Location request timed out. Please try again.", err.to_string());
    assert!(reporter.sent().is_empty());
}

#[tokio::test]
async fn each_role_reports_to_exactly_one_endpoint() {
    use strum::IntoEnumIterator;
    for role in Role::iter() {
        let reporter = RecordingReportGW::default();
        let actor = Actor::from(role);
        acquire_and_report(
            Some(&actor),
            &MockPositionSource::ok(nairobi()),
            &MockGeoGW::found("Nairobi"),
            &reporter,
            &CycleOptions::default(),
        )
        .await;
        let roles: Vec<_> = reporter.sent().into_iter().map(|(r, _)| r).collect();
        assert_eq!(vec![role], roles);
    }
}

#[tokio::test]
async fn unrecognized_role_reports_nowhere() {
    let reporter = RecordingReportGW::default();
    let actor = Actor::new("admin");
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::ok(nairobi()),
        &MockGeoGW::found("Nairobi"),
        &reporter,
        &CycleOptions::default(),
    )
    .await;
    assert!(reporter.sent().is_empty());
    assert!(matches!(outcome, CycleOutcome::Succeeded(_)));
}

#[tokio::test]
async fn failed_report_fails_the_cycle() {
    let actor = Actor::new("maid");
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::ok(nairobi()),
        &MockGeoGW::found("Nairobi"),
        &RecordingReportGW::failing(ReportError::Status(500)),
        &CycleOptions::default(),
    )
    .await;
    assert_eq!(
        CycleOutcome::Failed(CycleError::Report(ReportError::Status(500))),
        outcome
    );
}

#[tokio::test]
async fn missing_geocoding_gateway_resolves_nothing() {
    let no_gateway: Option<MockGeoGW> = None;
    let actor = Actor::new("maid");
    let outcome = acquire_and_report(
        Some(&actor),
        &MockPositionSource::ok(nairobi()),
        &no_gateway,
        &RecordingReportGW::default(),
        &CycleOptions::default(),
    )
    .await;
    let location = succeeded(outcome);
    assert!(location.place_name.is_none());
}
