use std::env;

/// Default OpenAI-compatible image generation endpoint.
const DEFAULT_IMAGE_API_URL: &str = "https://api.openai.com/v1/images/generations";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub page_size: i64,
    pub image_api_url: String,
    pub image_api_key: String,
    pub image_model: String,
    pub image_size: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            page_size: env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            image_api_url: env::var("IMAGE_API_URL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_API_URL.to_string()),
            image_api_key: env::var("IMAGE_API_KEY")?,
            image_model: env::var("IMAGE_MODEL").unwrap_or_else(|_| "dall-e-3".to_string()),
            image_size: env::var("IMAGE_SIZE").unwrap_or_else(|_| "1024x1024".to_string()),
        })
    }
}
