//! Integration tests for the patient intake client
//!
//! These drive a `Page` end to end against a mocked intake service.

use patient_intake::client::IntakeClient;
use patient_intake::form::{ConditionTag, FormField, FormState};
use patient_intake::i18n::Language;
use patient_intake::page::Page;
use patient_intake::submission::{BeginError, SubmissionState};
use proptest::prelude::*;
use std::time::Instant;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

fn client_for(server: &MockServer) -> IntakeClient {
    IntakeClient::new(&format!("{}/submit", server.uri())).expect("valid url")
}

fn scenario_response() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": "OK ",
        "timestamp": "T1",
        "patient_id": "P1",
        "fhir_bundle": {"entry": [{"resource": {"resourceType": "Patient"}}]}
    })
}

/// A bundle shaped like the real service's: patient, encounter, coverage,
/// one condition per tag, one allergy per comma-separated item.
fn full_response(patient_id: &str) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": "Intake received successfully.",
        "timestamp": "2024-01-15 10:30:00",
        "patient_id": patient_id,
        "fhir_bundle": {
            "resourceType": "Bundle",
            "type": "collection",
            "timestamp": "2024-01-15T10:30:00Z",
            "entry": [
                {"resource": {"resourceType": "Patient", "id": patient_id}},
                {"resource": {"resourceType": "Encounter", "status": "planned"}},
                {"resource": {"resourceType": "Coverage", "status": "active"}},
                {"resource": {"resourceType": "Condition", "code": {"text": "Diabetes mellitus"}}},
                {"resource": {"resourceType": "Condition", "code": {"text": "Hypertension"}}},
                {"resource": {"resourceType": "AllergyIntolerance", "code": {"text": "Penicillin"}}},
                {"resource": {"resourceType": "AllergyIntolerance", "code": {"text": "shellfish"}}}
            ]
        },
        "received_data": {}
    })
}

fn demo_page(language: Language) -> Page {
    let mut page = Page::new();
    if page.language() != language {
        page.toggle_language();
    }
    page.load_demo(Instant::now());
    page
}

// ==================== Locale Switcher ====================

proptest! {
    #[test]
    fn prop_toggling_twice_restores_every_label(start_spanish in any::<bool>(), extra in 0usize..4) {
        let mut page = Page::new();
        if start_spanish {
            page.toggle_language();
        }
        for _ in 0..extra * 2 {
            page.toggle_language();
        }

        let before = page.render();
        page.toggle_language();
        prop_assert_ne!(page.render().labels, before.labels.clone());
        page.toggle_language();
        prop_assert_eq!(page.render(), before);
    }
}

// ==================== Demo-Data Loader ====================

#[test]
fn test_demo_data_fills_every_required_field_in_both_languages() {
    for language in [Language::English, Language::Spanish] {
        let page = demo_page(language);
        for field in FormField::ALL.iter().filter(|f| f.is_required()) {
            assert!(!page.form().value(*field).trim().is_empty(), "{}", field);
        }
        assert!(page.form().validate().is_empty());
        assert_eq!(page.state(), SubmissionState::Idle);
        assert_eq!(page.language(), language);
    }
}

// ==================== Submission Controller ====================

#[tokio::test]
async fn test_missing_required_field_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scenario_response()))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    for field in FormField::ALL.into_iter().filter(|f| f.is_required()) {
        let mut page = demo_page(Language::English);
        page.edit_field(field, "  ");

        let err = page.submit(&client).await.unwrap_err();

        assert!(matches!(err, BeginError::Invalid(_)));
        assert!(page.form().is_invalid(field));
        assert_eq!(page.form().focused(), Some(field));
        assert!(!page.render().submit_disabled);
    }
}

#[tokio::test]
async fn test_malformed_email_never_hits_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut page = demo_page(Language::Spanish);
    page.edit_field(FormField::Email, "juan.perez");
    let err = page.submit(&client_for(&server)).await.unwrap_err();

    assert!(matches!(err, BeginError::Invalid(_)));
    assert_eq!(page.form().invalid_fields(), vec![FormField::Email]);
    assert_eq!(
        page.notice().unwrap().text,
        "Por favor corrija los errores marcados en naranja."
    );
}

#[tokio::test]
async fn test_valid_submission_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scenario_response()))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = demo_page(Language::English);
    let state = page.submit(&client_for(&server)).await.expect("started");

    assert_eq!(state, SubmissionState::Success);
    assert_eq!(page.form(), &FormState::new());
    assert_eq!(
        page.notice().unwrap().text,
        format!("OK T1{}", Language::English.strings().success_suffix)
    );

    let summary = page.render().result.expect("result panel");
    assert_eq!(summary.patient_id, "P1");
    assert_eq!(summary.resources_text(), "1 (Patient)");
    assert!(!page.render().submit_disabled);
}

#[tokio::test]
async fn test_payload_sent_matches_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(body_json(serde_json::json!({
            "first_name": "Juan",
            "last_name": "Pérez",
            "dob": "1985-06-15",
            "phone": "(555) 123-4567",
            "email": "juan.perez@ejemplo.com",
            "address": "Calle Principal 123, Springfield, IL 62701",
            "emergency_contact": "María Pérez (555) 987-6543",
            "insurance_provider": "Blue Cross Blue Shield",
            "policy_number": "BC-789456",
            "reason_for_visit": "Chequeo anual y preocupaciones sobre fatiga reciente",
            "medications": "Metformina 500mg dos veces al día, Lisinopril 10mg una vez al día",
            "allergies": "Penicilina, mariscos",
            "conditions": ["diabetes", "hypertension", "asthma"],
            "language_preference": "es"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_response("P-es")))
        .expect(1)
        .mount(&server)
        .await;

    let mut page = demo_page(Language::Spanish);
    page.set_condition(ConditionTag::Asthma, true);
    let state = page.submit(&client_for(&server)).await.expect("started");

    assert_eq!(state, SubmissionState::Success);
    assert_eq!(
        page.notice().unwrap().text,
        "Intake received successfully.2024-01-15 10:30:00 Recursos FHIR creados exitosamente."
    );
    let summary = page.render().result.expect("result panel");
    assert_eq!(
        summary.resources_text(),
        "7 (Patient, Encounter, Coverage, Condition, AllergyIntolerance)"
    );
}

#[tokio::test]
async fn test_http_500_shows_generic_error_and_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            serde_json::json!({"detail": "Internal server error: boom"}),
        ))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server);

    for language in [Language::English, Language::Spanish] {
        let mut page = demo_page(language);
        let before = page.form().clone();

        let state = page.submit(&client).await.expect("started");

        assert_eq!(state, SubmissionState::Error);
        assert_eq!(page.notice().unwrap().text, language.strings().msg_error);
        assert_eq!(page.form(), &before);
        assert!(page.result().is_none());
        assert!(!page.render().submit_disabled);
    }
}

#[tokio::test]
async fn test_connection_refused_shows_connect_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    let client = IntakeClient::new(&format!("http://127.0.0.1:{}/submit", port)).expect("url");

    for language in [Language::English, Language::Spanish] {
        let mut page = demo_page(language);
        let state = page.submit(&client).await.expect("started");

        assert_eq!(state, SubmissionState::Error);
        let text = &page.notice().unwrap().text;
        assert_eq!(text, language.strings().msg_connect_error);
        assert_ne!(text, language.strings().msg_error);
        assert!(page.form().validate().is_empty());
    }
}

#[tokio::test]
async fn test_language_toggle_during_request_uses_new_language_for_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({"language_preference": "en"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(scenario_response()))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut page = demo_page(Language::English);
    let record = page.begin_submission().expect("valid");
    page.toggle_language();
    assert_eq!(page.render().submit_label, "Procesando...");

    let outcome = client.submit(&record).await;
    page.finish_submission(outcome);

    assert_eq!(
        page.notice().unwrap().text,
        "OK T1 Recursos FHIR creados exitosamente."
    );
    assert_eq!(page.render().submit_label, "Enviar Formulario");
}

// ==================== Result Renderer ====================

#[tokio::test]
async fn test_only_one_result_panel_after_many_submissions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_response("P-many")))
        .expect(3)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut page = Page::new();
    for _ in 0..3 {
        page.load_demo(Instant::now());
        page.submit(&client).await.expect("started");
        page.toggle_result_json();
    }

    let result = page.result().expect("one panel");
    assert_eq!(result.patient_id(), "P-many");
    assert!(result.is_json_visible());
}

#[tokio::test]
async fn test_json_view_and_download_round_trip() {
    let server = MockServer::start().await;
    let response = full_response("abc-123");
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let mut page = demo_page(Language::English);
    page.submit(&client_for(&server)).await.expect("started");

    assert_eq!(page.toggle_result_json(), Some(true));
    let text = page
        .result()
        .unwrap()
        .json_view()
        .unwrap()
        .expect("visible");
    let shown: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(shown, response["fhir_bundle"]);
    assert_eq!(page.toggle_result_json(), Some(false));
    assert!(page.result().unwrap().json_view().unwrap().is_none());

    let temp_dir = TempDir::new().expect("temp dir");
    let path = page.download_result(temp_dir.path()).expect("download");
    assert_eq!(path.file_name().unwrap(), "fhir-bundle-abc-123.json");
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(saved, response["fhir_bundle"]);

    page.close_result();
    assert!(page.result().is_none());
    assert!(page.render().result.is_none());
}

// ==================== Health Check ====================

#[tokio::test]
async fn test_health_check_hits_sibling_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "healthy"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let health = client_for(&server).check_health().await.expect("healthy");
    assert_eq!(health.status, "healthy");
    assert!(health.timestamp.is_none());
}
