// tests/job_payload.rs
//
// What goes over the wire when a job is created, and how status bodies are read.
use serde_json::{json, Value};

use maps_scrape::catalog::Location;
use maps_scrape::job::{JobId, JobParams, JobRequest, JobStatus, REQUIRED_FIELDS, job_name};

fn madrid() -> Location {
    Location { zoom: 14, lat: "40.4168".into(), lon: "-3.7038".into() }
}

#[test]
fn request_carries_every_required_field() {
    let req = JobRequest::new("Job_bares_madrid_20240101_120000", vec!["bar".into(), "pub".into()], &madrid(), &JobParams::default());
    let v = serde_json::to_value(&req).unwrap();
    let obj = v.as_object().unwrap();

    for key in REQUIRED_FIELDS {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj.len(), REQUIRED_FIELDS.len());

    assert_eq!(v["name"], "Job_bares_madrid_20240101_120000");
    assert_eq!(v["keywords"], json!(["bar", "pub"]));
    assert_eq!(v["lang"], "es");
    assert_eq!(v["zoom"], 14);
    // Coordinates go out as the strings read from the file.
    assert_eq!(v["lat"], "40.4168");
    assert_eq!(v["lon"], "-3.7038");
    assert_eq!(v["fast_mode"], true);
    assert_eq!(v["radius"], 10_000);
    assert_eq!(v["depth"], 10);
    assert_eq!(v["email"], true);
    assert_eq!(v["max_time"], 15);
    assert_eq!(v["proxies"], json!([]));
}

#[test]
fn params_flow_into_the_request() {
    let params = JobParams { fast_mode: false, radius: 2_500, depth: 3, email: false, max_time: 60, ..JobParams::default() };
    let req = JobRequest::new("n", vec!["a".into()], &madrid(), &params);
    assert!(!req.fast_mode);
    assert_eq!((req.radius, req.depth, req.max_time), (2_500, 3, 60));
    assert!(!req.email);
}

#[test]
fn job_names() {
    assert_eq!(job_name("", "bares", "madrid", "20240101_120000"), "Job_bares_madrid_20240101_120000");
    assert_eq!(job_name("Lote1", "bares", "madrid", "ts"), "Lote1_bares_madrid_ts");
    assert_eq!(job_name("Lote1_", "bares", "madrid", "ts"), "Lote1_bares_madrid_ts");
}

#[test]
fn keyword_preview_marks_truncation() {
    let kws: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let req = JobRequest::new("n", kws, &madrid(), &JobParams::default());
    assert_eq!(req.keywords_preview(3), "a, b, c...");
    assert_eq!(req.keywords_preview(4), "a, b, c, d");
}

#[test]
fn status_bodies() {
    let st: JobStatus = serde_json::from_value(json!({"id": 42, "status": "working"})).unwrap();
    assert_eq!(st.id, Some(JobId("42".into())));
    assert_eq!(st.status_str(), "working");
    assert!(!st.has_result());
    assert!(!st.is_failed());

    let st: JobStatus = serde_json::from_value(json!({"status": "FAILED", "error": "quota"})).unwrap();
    assert!(st.is_failed());
    assert_eq!(st.error_message().as_deref(), Some("quota"));
    assert_eq!(st.id, None);

    let st: JobStatus = serde_json::from_value(json!({"result": []})).unwrap();
    assert!(!st.has_result());
    assert_eq!(st.status_str(), "unknown");

    let st: JobStatus = serde_json::from_value(json!({"status": "ok", "result": [{"title": "Bar Pepe"}]})).unwrap();
    assert!(st.has_result());
}

#[test]
fn ids_from_strings_or_numbers() {
    assert_eq!(JobId::from_value(&json!("abc")), Some(JobId("abc".into())));
    assert_eq!(JobId::from_value(&json!(7)), Some(JobId("7".into())));
    assert_eq!(JobId::from_value(&json!("  ")), None);
    assert_eq!(JobId::from_value(&Value::Null), None);
}
