use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsConfig {
    /// Filesystem the disk figures describe; platform root when unset.
    pub disk_path: Option<String>,
}

impl AppConfig {
    /// Loads `path`, else `CONFIG_FILE`, else `config.toml`. Only the implicit default
    /// may be missing, in which case built-in defaults apply.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("CONFIG_FILE").map(Into::into));
        match explicit {
            Some(p) => Self::load_from_path(&p),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
            }
            None => {
                tracing::info!("No {} found; using built-in defaults", DEFAULT_CONFIG_PATH);
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        if let Some(path) = &self.metrics.disk_path {
            anyhow::ensure!(!path.is_empty(), "metrics.disk_path must be non-empty when set");
        }
        Ok(())
    }

    pub fn disk_path(&self) -> String {
        self.metrics
            .disk_path
            .clone()
            .unwrap_or_else(|| crate::collector::default_disk_path().to_string())
    }
}
