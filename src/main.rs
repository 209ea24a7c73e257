mod argsets;
mod command;
mod constants;
mod data_mgmt;
mod interfaces;

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use env_logger::Env;

const CMD_FETCH_JSON: &str = "fetch-json";
const CMD_FETCH_CSV: &str = "fetch-csv";

const LOG_LEVEL_ENV_VAR: &str = "LOGGING_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "INFO";

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_FETCH_JSON) => command::fetch_json(argsets::FetchArgs {
            output: args.opt_free_from_str()?,
        }),
        Some(CMD_FETCH_CSV) => command::fetch_csv(argsets::FetchArgs {
            output: args.opt_free_from_str()?,
        }),
        _ => Err(anyhow!(
            "Subcommand must be one of 'fetch-json', 'fetch-csv'"
        )),
    }
}
