use std::time::Duration;

pub const API_BASE_URL: &str = "https://sandbox.oizom.com/v1";
pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub const RATE_LIMIT_RETRY_DELAY: Duration = Duration::from_secs(5);
pub const MAX_FETCH_ATTEMPTS: u32 = 3;

pub const JSON_OUTPUT_FILENAME: &str = "all_sensor_data.json";
pub const CSV_OUTPUT_FILENAME: &str = "all_sensor_data.csv";
