//! # Configuración del Servidor
//! src/config.rs
//!
//! Argumentos CLI con respaldo en variables de entorno. Los valores por
//! defecto reproducen el comportamiento clásico: puerto 9000, assets en
//! `www/`, GitHub con 20 segundos de timeout.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./fun_http_server --port 9000 --www-dir ./www
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! FUN_HTTP_PORT=8080 RUST_LOG=debug ./fun_http_server
//! ```

use clap::Parser;
use std::time::Duration;

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "fun_http_server")]
#[command(about = "Servidor HTTP de una petición por conexión con rutas fijas")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "9000", env = "FUN_HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "FUN_HTTP_HOST")]
    pub host: String,

    /// Directorio con root.html, index.html y los archivos listados
    #[arg(long = "www-dir", default_value = "www", env = "FUN_HTTP_WWW_DIR")]
    pub www_dir: String,

    /// Prefijo de la API remota de la ruta github
    #[arg(long = "github-api", default_value = "https://api.github.com/", env = "FUN_HTTP_GITHUB_API")]
    pub github_api: String,

    /// Timeout de la llamada saliente en segundos
    #[arg(long = "fetch-timeout-secs", default_value = "20", env = "FUN_HTTP_FETCH_TIMEOUT")]
    pub fetch_timeout_secs: u64,

    /// Filtro de logging (sintaxis de tracing EnvFilter)
    #[arg(long = "log-level", default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use fun_http_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:9000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout de la llamada saliente
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be >= 1".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return Err("Fetch timeout must be > 0".to_string());
        }
        if !(self.github_api.starts_with("http://") || self.github_api.starts_with("https://")) {
            return Err(format!("GitHub API base must be an http(s) URL: {}", self.github_api));
        }
        Ok(())
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 9000,
            host: "0.0.0.0".to_string(),
            www_dir: "www".to_string(),
            github_api: "https://api.github.com/".to_string(),
            fetch_timeout_secs: 20,
            log_level: "info".to_string(),
        }
    }
}
