mod fetch_csv;
mod fetch_json;

pub use fetch_csv::fetch_csv;
pub use fetch_json::fetch_json;
