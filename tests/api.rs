use std::collections::HashMap;
use std::sync::Arc;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vendor_directory::callback::{CallbackFormHandler, SERVER_ERROR_NOTICE, TERMS_NOTICE};
use vendor_directory::config::{ApiConfig, DisplaySettings, GeocoderConfig, Settings};
use vendor_directory::models::{CallbackRequest, Coordinates};
use vendor_directory::page::{
    CallbackForm, InputField, MemoryCallbackForm, MemoryInput, MemoryListing, MemoryModal, ModalTrigger,
    Recorder,
};
use vendor_directory::render::{EMPTY_HTML, FAILED_HTML};
use vendor_directory::services::{FixedPosition, VendorSource};
use vendor_directory::{suggest, ApiService, Error, ListingController, ListingOutcome, LocationHelper, SubmitOutcome};

fn settings(server: &MockServer) -> Settings {
    Settings {
        api: ApiConfig {
            base_url: server.uri(),
            headers: HashMap::from([("x-client".to_string(), "listing".to_string())]),
        },
        geocoder: GeocoderConfig {
            base_url: server.uri(),
            ..Default::default()
        },
        display: DisplaySettings::default(),
    }
}

fn api(server: &MockServer) -> ApiService {
    ApiService::new(&settings(server)).unwrap()
}

#[tokio::test]
async fn search_encodes_parameters_and_parses_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vendors"))
        .and(query_param("query", "AC & fridge"))
        .and(query_param("category", "Repair/Service"))
        .and(header("x-client", "listing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"business_name": "Cool Care", "phone": 9811111111u64, "average_rating": 4.6, "review_count": 5},
            {"business_name": "Frost Fix", "phone": "9822222222", "average_rating": null, "review_count": 0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let vendors = api(&server)
        .fetch_vendors("AC & fridge", "Repair/Service")
        .await
        .unwrap();

    assert_eq!(vendors.len(), 2);
    assert_eq!(vendors[0].phone, "9811111111");
    assert_eq!(vendors[1].rating(), None);
}

#[tokio::test]
async fn listing_renders_filtered_and_sorted_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vendors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"business_name": "Okay Electricals", "phone": "2", "average_rating": 3.5, "review_count": 2},
            {"business_name": "Fresh Start", "phone": "3"},
            {"business_name": "Bright Sparks", "phone": "1", "average_rating": 4.8, "review_count": 9}
        ])))
        .mount(&server)
        .await;

    let listing = Arc::new(MemoryListing::new());
    let controller = ListingController::new(api(&server), DisplaySettings::default())
        .with_listing(listing.clone());

    assert_eq!(controller.on_ready().await, ListingOutcome::Rendered(2));

    let html = listing.html();
    let bright = html.find("Bright Sparks").unwrap();
    let fresh = html.find("Fresh Start").unwrap();
    assert!(bright < fresh);
    assert!(!html.contains("Okay Electricals"));
}

#[tokio::test]
async fn empty_array_shows_no_vendors_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vendors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let listing = Arc::new(MemoryListing::new());
    let controller = ListingController::new(api(&server), DisplaySettings::default())
        .with_listing(listing.clone());

    assert_eq!(controller.search("zzz", "").await, ListingOutcome::Empty);
    assert_eq!(listing.html(), EMPTY_HTML);
}

#[tokio::test]
async fn server_error_and_bad_json_both_show_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vendors"))
        .and(query_param("query", "broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/vendors"))
        .and(query_param("query", "garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let listing = Arc::new(MemoryListing::new());
    let controller = ListingController::new(api(&server), DisplaySettings::default())
        .with_listing(listing.clone());

    assert_eq!(controller.search("broken", "").await, ListingOutcome::Failed);
    assert_eq!(listing.html(), FAILED_HTML);

    assert_eq!(controller.search("garbled", "").await, ListingOutcome::Failed);
    assert_eq!(listing.html(), FAILED_HTML);
}

#[tokio::test]
async fn unreachable_backend_shows_failure() {
    let settings = Settings {
        api: ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            headers: HashMap::new(),
        },
        ..Default::default()
    };
    let listing = Arc::new(MemoryListing::new());
    let controller = ListingController::new(ApiService::new(&settings).unwrap(), DisplaySettings::default())
        .with_listing(listing.clone());

    assert_eq!(controller.on_ready().await, ListingOutcome::Failed);
    assert_eq!(listing.html(), FAILED_HTML);
}

#[tokio::test]
async fn rate_limit_maps_to_dedicated_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vendors"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = api(&server).fetch_vendors("", "").await.unwrap_err();
    assert!(matches!(err, Error::RateLimit));
}

fn callback_page(terms_accepted: bool) -> (Arc<MemoryCallbackForm>, Arc<MemoryModal>, Arc<Recorder>) {
    let form = Arc::new(MemoryCallbackForm::new(CallbackRequest {
        user_name: "Ravi Kumar".into(),
        user_phone: "9000000002".into(),
        message: "Need a quote".into(),
        terms_accepted,
        ..Default::default()
    }));
    (form, Arc::new(MemoryModal::open()), Arc::new(Recorder::new()))
}

#[tokio::test]
async fn callback_posts_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit_callback"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("vendor_phone=9876543210"))
        .and(body_string_contains("user_name=Ravi%20Kumar"))
        .and(body_string_contains("user_phone=9000000002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Callback request submitted."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (form, modal, notices) = callback_page(true);
    let handler = CallbackFormHandler::new(api(&server), form.clone(), modal.clone(), notices.clone());

    handler.on_modal_show(Some(&ModalTrigger::for_phone("9876543210")));
    let outcome = handler.submit().await;

    assert_eq!(outcome, SubmitOutcome::Submitted("Callback request submitted.".into()));
    assert_eq!(notices.entries(), ["Callback request submitted."]);
    assert!(!modal.is_open());
}

#[tokio::test]
async fn callback_without_terms_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit_callback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(0)
        .mount(&server)
        .await;

    let (form, modal, notices) = callback_page(false);
    let handler = CallbackFormHandler::new(api(&server), form, modal, notices.clone());

    assert_eq!(handler.submit().await, SubmitOutcome::Blocked);
    assert_eq!(notices.entries(), [TERMS_NOTICE]);
}

#[tokio::test]
async fn callback_validation_error_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit_callback"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "message": "Missing required fields"
        })))
        .mount(&server)
        .await;

    let (form, modal, notices) = callback_page(true);
    let handler = CallbackFormHandler::new(api(&server), form.clone(), modal.clone(), notices.clone());

    assert_eq!(
        handler.submit().await,
        SubmitOutcome::Rejected("Missing required fields".into())
    );
    assert_eq!(form.fields().user_name, "Ravi Kumar");
    assert!(modal.is_open());
}

#[tokio::test]
async fn callback_server_crash_shows_generic_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit_callback"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let (form, modal, notices) = callback_page(true);
    let handler = CallbackFormHandler::new(api(&server), form.clone(), modal.clone(), notices.clone());

    assert_eq!(handler.submit().await, SubmitOutcome::Failed);
    assert_eq!(notices.entries(), [SERVER_ERROR_NOTICE]);
    assert_eq!(form.fields().message, "Need a quote");
    assert!(modal.is_open());
}

#[tokio::test]
async fn reverse_geocode_fills_location() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("lat", "12.97"))
        .and(query_param("lon", "77.59"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "display_name": "Somewhere",
            "address": {"village": "Hebbal", "state": "Karnataka"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let location = Arc::new(MemoryInput::default());
    let helper = LocationHelper::new(api(&server), Arc::new(Recorder::new()), Arc::new(Recorder::new()))
        .with_location_input(location.clone());
    let here = FixedPosition(Coordinates { latitude: 12.97, longitude: 77.59 });

    assert_eq!(helper.use_my_location(&here).await.unwrap(), "Hebbal");
    assert_eq!(location.value(), "Hebbal");
}

#[tokio::test]
async fn suggestions_pass_prefix_and_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/vendor_suggestions"))
        .and(query_param("q", "plu"))
        .and(query_param("city", "Pune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Sharma Plumbing", "Ace Plumbers"])))
        .expect(1)
        .mount(&server)
        .await;

    let names = suggest(&api(&server), "plu", "Pune").await.unwrap();
    assert_eq!(names, ["Ace Plumbers", "Sharma Plumbing"]);
}
