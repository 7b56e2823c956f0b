use serde::Serialize;

/// Connectivity info of this instance; unset values are emitted as null.
#[derive(Debug, Serialize)]
pub struct IpResponse {
    pub ip: Option<String>,
    pub domain: Option<String>,
    pub port: Option<String>,
}
