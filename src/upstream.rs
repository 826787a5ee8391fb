//! # Llamada HTTP saliente
//! src/upstream.rs
//!
//! Un único GET bloqueante con timeout de lectura. Mientras dura, el
//! servidor entero queda bloqueado (una conexión a la vez).

use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Errores de la llamada saliente
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No se pudo construir el cliente
    Client(String),

    /// Error de red, timeout o de lectura del body
    Transport(String),

    /// El servidor remoto respondió con un status no exitoso
    Status(u16),

    /// Respuesta vacía
    Empty,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Client(e) => write!(f, "HTTP client error: {}", e),
            FetchError::Transport(e) => write!(f, "Request failed: {}", e),
            FetchError::Status(code) => write!(f, "Upstream returned status {}", code),
            FetchError::Empty => write!(f, "Empty response from GitHub"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Colaborador que trae el body de una URL como texto
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Implementación con `reqwest::blocking`
///
/// El cliente se construye una vez y se reutiliza entre requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().map_err(|e| {
            warn!(url, error = %e, "outbound request failed");
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "outbound request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if body.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Empty.to_string(), "Empty response from GitHub");
        assert_eq!(FetchError::Status(404).to_string(), "Upstream returned status 404");
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        // Puerto 1 en loopback: conexión rechazada de inmediato
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/users/x/repos");

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[test]
    fn test_client_is_reused_across_fetches() {
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();

        for _ in 0..2 {
            let result = fetcher.fetch("http://127.0.0.1:1/users/x/repos");
            assert!(matches!(result, Err(FetchError::Transport(_))));
        }
    }
}
