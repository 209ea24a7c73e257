use std::path::PathBuf;

pub struct FetchArgs {
    pub output: Option<PathBuf>,
}
