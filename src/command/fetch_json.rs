use std::path::PathBuf;

use anyhow::Result;

use crate::argsets::FetchArgs;
use crate::constants::{defaults, devices};
use crate::data_mgmt::combined::CombinedData;
use crate::data_mgmt::models::ReadingKind;
use crate::interfaces::oizom_api::{api_base_url, ApiClient, Credentials};

pub fn fetch_json(args: FetchArgs) -> Result<()> {
    let base_url = api_base_url();
    let credentials = Credentials::from_env()?;
    let client = ApiClient::authenticate(&base_url, &credentials)?;

    let mut combined = CombinedData::new();
    for device_id in devices::SENSOR_DEVICE_IDS {
        for kind in ReadingKind::ALL {
            if let Some(payload) = client.fetch_reading(device_id, kind) {
                combined.append(kind, payload);
            }
        }
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(defaults::JSON_OUTPUT_FILENAME));
    combined.write_json(&path)?;
    log::info!("Combined data for all sensors saved to {}", path.display());

    Ok(())
}
