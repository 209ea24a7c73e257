use std::path::PathBuf;

use anyhow::Result;

use crate::argsets::FetchArgs;
use crate::constants::{defaults, devices};
use crate::data_mgmt::models::ReadingKind;
use crate::data_mgmt::table::CurrentTable;
use crate::interfaces::oizom_api::{api_base_url, ApiClient, Credentials};

pub fn fetch_csv(args: FetchArgs) -> Result<()> {
    let base_url = api_base_url();
    let credentials = Credentials::from_env()?;
    let client = ApiClient::authenticate(&base_url, &credentials)?;

    let mut table = CurrentTable::new();
    for device_id in devices::SENSOR_DEVICE_IDS {
        if let Some(payload) = client.fetch_reading(device_id, ReadingKind::Current) {
            table.append(device_id, payload);
        }
    }
    log::info!(
        "Obtained current readings for {} of {} sensors",
        table.row_count(),
        devices::SENSOR_DEVICE_IDS.len()
    );

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(defaults::CSV_OUTPUT_FILENAME));
    table.write_csv(&path)?;
    log::info!("Combined data for all sensors saved to {}", path.display());

    Ok(())
}
