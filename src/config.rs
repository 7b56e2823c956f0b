use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Connectivity info of the running instance. Loaded once at process start;
/// handlers never read the environment directly.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceConfig {
    pub internal_ip: Option<String>,
    pub domain: Option<String>,
    pub nginx_port: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub instance: InstanceConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "instance-api".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "instance-api-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let instance = InstanceConfig {
            internal_ip: std::env::var("INTERNAL_IP").ok(),
            domain: std::env::var("DOMAIN").ok(),
            nginx_port: std::env::var("NGINX_PORT").ok(),
        };
        Ok(Self {
            database_url,
            jwt,
            instance,
        })
    }
}
