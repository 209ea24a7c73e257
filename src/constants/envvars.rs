// The two historical fetch scripts disagreed on the casing of the credential
// variables; both spellings are accepted, lowercase taking precedence.
pub const CLIENT_ID: &str = "clientid";
pub const CLIENT_ID_ALT: &str = "CLIENTID";
pub const CLIENT_SECRET: &str = "client_secret";
pub const CLIENT_SECRET_ALT: &str = "CLIENT_SECRET";

pub const API_BASE_URL: &str = "OIZOM_API_BASE_URL";
