use std::path::PathBuf;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    pub storage: StorageSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct StorageSettings {
    pub catalog_path: PathBuf,
    pub public_dir: PathBuf,
    // relative to public_dir, also the url path images are served under
    pub images_route: String,
    pub image_url_base: String,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl StorageSettings {
    pub fn images_dir(&self) -> PathBuf {
        self.public_dir.join(self.images_route.trim_matches('/'))
    }

    // Public url of an uploaded image: <image_url_base>/<images_route>/<filename>
    pub fn image_url(&self, filename: &str) -> String {
        format!(
            "{}/{}/{}",
            self.image_url_base.trim_end_matches('/'),
            self.images_route.trim_matches('/'),
            filename
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml first, then APP__STORAGE__CATALOG_PATH style overrides
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
