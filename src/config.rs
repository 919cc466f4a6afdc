use rand::Rng;

/// Runtime configuration, loaded once at startup from the environment
/// (a local `.env` file is honored via dotenvy before this runs).
#[derive(Clone)]
pub struct Config {
    pub addr: String,
    pub database_url: String,
    pub access_secret: String,
    pub refresh_secret: String,
    pub cors_origins: Vec<String>,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            addr: env_or("CONFSITE_ADDR", "127.0.0.1:8080"),
            database_url: env_or("DATABASE_URL", "sqlite:data/confsite.db"),
            access_secret: secret_or_dev("ACCESS_TOKEN_SECRET"),
            refresh_secret: secret_or_dev("REFRESH_TOKEN_SECRET"),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:3000")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            static_dir: env_or("STATIC_DIR", "./static"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

/// Token signing secrets must be set in production. A missing secret gets a
/// process-local random value, which invalidates all tokens on restart.
fn secret_or_dev(key: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => {
            log::warn!("{key} not set, generating a random secret (tokens lost on restart)");
            let mut rng = rand::rng();
            let bytes: [u8; 32] = rng.random();
            hex::encode(bytes)
        }
    }
}
