//! # Comandos del Servidor
//!
//! Handlers de cada ruta de la tabla del router.
//!
//! ## Categorías de comandos
//!
//! - **assets**: páginas leídas de disco (`""`, `json`, `random`, `file/`)
//! - **basic**: cálculos sobre la query (`multiply`, `reverse`,
//!   `palindrome`, `fibonacci`)
//! - **story**: la historia compartida (`addline`, `story`)
//! - **github**: proxy a la API de GitHub
//!
//! Cada comando es una función handler que recibe el contexto y el
//! Request y retorna una Response.

pub mod assets;
pub mod basic;
pub mod github;
pub mod story;

pub use assets::*;
pub use basic::*;
pub use github::*;
pub use story::*;

use crate::http::{QueryParameters, Request, Response, StatusCode};

/// Decodifica la query del request o arma la respuesta 400
pub(crate) fn query_params(req: &Request) -> Result<QueryParameters, Response> {
    QueryParameters::from_target(req.target()).map_err(|e| {
        Response::html(StatusCode::BadRequest, &format!("<h1>Error: {}</h1>", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_ok() {
        let params = query_params(&Request::new("reverse?text=abc")).unwrap();
        assert_eq!(params.get("text"), Some("abc"));
    }

    #[test]
    fn test_query_params_malformed() {
        let response = query_params(&Request::new("reverse?text")).unwrap_err();

        assert_eq!(response.status(), StatusCode::BadRequest);
        assert_eq!(response.body_text(), "<h1>Error: malformed query parameter 'text'</h1>");
    }
}
