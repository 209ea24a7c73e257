use std::path::Path;

use assert_cmd::Command;
use mockito::{Matcher, Server};
use serde_json::json;

const DEVICE_IDS: [&str; 4] = ["YG19P0025", "YG19D0004", "YG19W0001", "YG19O0005"];
const SAMPLE_TOKEN: &str = "sample-access-token";

fn token_mock(server: &mut Server) -> mockito::Mock {
    server
        .mock("POST", "/oauth2/token")
        .with_body(json!({"access_token": SAMPLE_TOKEN}).to_string())
        .expect(1)
        .create()
}

fn current_mock(server: &mut Server, device_id: &str, aqi: u32) -> mockito::Mock {
    server
        .mock("GET", format!("/data/cur/{device_id}").as_str())
        .match_header("authorization", format!("Bearer {SAMPLE_TOKEN}").as_str())
        .match_header("clientid", "test-client")
        .with_body(json!({"aqi": aqi, "deviceId": device_id}).to_string())
        .expect(1)
        .create()
}

fn fetch_csv_cmd(server: &Server, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("oizom-fetch").unwrap();
    cmd.env("OIZOM_API_BASE_URL", server.url())
        .env("clientid", "test-client")
        .env("client_secret", "test-secret")
        .env_remove("CLIENTID")
        .env_remove("CLIENT_SECRET")
        .current_dir(dir)
        .arg("fetch-csv");
    cmd
}

fn read_rows(path: &Path) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let records = reader.records().map(Result::unwrap).collect();
    (headers, records)
}

#[test]
fn writes_csv_with_header_and_one_row_per_sensor() {
    let mut server = Server::new();
    let token = token_mock(&mut server);
    let mut data_mocks = Vec::new();
    for (i, device_id) in DEVICE_IDS.into_iter().enumerate() {
        data_mocks.push(current_mock(&mut server, device_id, 100 + i as u32));
    }
    // The CSV variant only ever hits the `current` endpoint.
    let other_kinds = server
        .mock("GET", Matcher::Regex("^/data/(daily|hourly)/".to_string()))
        .expect(0)
        .create();

    let tempdir = tempfile::tempdir().unwrap();
    fetch_csv_cmd(&server, tempdir.path()).assert().success();

    token.assert();
    other_kinds.assert();
    for mock in &data_mocks {
        mock.assert();
    }

    let (headers, records) = read_rows(&tempdir.path().join("all_sensor_data.csv"));
    assert_eq!(headers, vec!["device_id", "aqi", "deviceId"]);
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], vec!["YG19P0025", "100", "YG19P0025"]);
    assert_eq!(records[3], vec!["YG19O0005", "103", "YG19O0005"]);
}

#[test]
fn failed_sensor_is_absent_from_csv() {
    let mut server = Server::new();
    let _token = token_mock(&mut server);
    let mut data_mocks = Vec::new();
    for device_id in ["YG19P0025", "YG19W0001", "YG19O0005"] {
        data_mocks.push(current_mock(&mut server, device_id, 55));
    }
    let failing = server
        .mock("GET", "/data/cur/YG19D0004")
        .with_status(503)
        .expect(1)
        .create();

    let tempdir = tempfile::tempdir().unwrap();
    fetch_csv_cmd(&server, tempdir.path()).assert().success();

    failing.assert();

    let (_, records) = read_rows(&tempdir.path().join("all_sensor_data.csv"));
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| &r[0] != "YG19D0004"));
}

#[test]
fn output_path_argument_overrides_default() {
    let mut server = Server::new();
    let _token = token_mock(&mut server);
    let mut data_mocks = Vec::new();
    for device_id in DEVICE_IDS {
        data_mocks.push(current_mock(&mut server, device_id, 77));
    }

    let tempdir = tempfile::tempdir().unwrap();
    fetch_csv_cmd(&server, tempdir.path())
        .arg("readings.csv")
        .assert()
        .success();

    assert!(tempdir.path().join("readings.csv").exists());
    assert!(!tempdir.path().join("all_sensor_data.csv").exists());
}
