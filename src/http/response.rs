//! # Construcción de Respuestas HTTP
//!
//! Una respuesta tiene exactamente una status line, un único header
//! `Content-Type`, una línea vacía y el body. No se emite ningún otro
//! header: la conexión se cierra justo después de escribir, así que
//! no hace falta `Content-Length`.
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html; charset=utf-8\r\n
//! \r\n
//! Result is: 12
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use fun_http_server::http::{Response, StatusCode};
//!
//! let response = Response::html(StatusCode::Ok, "Result is: 12");
//! let bytes = response.to_bytes();
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

use super::StatusCode;

/// Content-Type de todas las páginas HTML
pub const TEXT_HTML: &str = "text/html; charset=utf-8";

/// Content-Type de la ruta `json`
pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 400, 404, 500)
    status: StatusCode,

    /// Valor del único header `Content-Type`
    content_type: &'static str,

    /// Cuerpo de la respuesta (texto o bytes crudos)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin body
    pub fn new(status: StatusCode, content_type: &'static str) -> Self {
        Self {
            status,
            content_type,
            body: Vec::new(),
        }
    }

    /// Establece el cuerpo de la respuesta desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para páginas leídas de disco tal cual.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Crea una respuesta HTML con el status indicado
    ///
    /// # Ejemplo
    /// ```
    /// use fun_http_server::http::{Response, StatusCode};
    ///
    /// let response = Response::html(StatusCode::BadRequest, "<h1>Error</h1>");
    /// assert_eq!(response.status(), StatusCode::BadRequest);
    /// ```
    pub fn html(status: StatusCode, body: &str) -> Self {
        Self::new(status, TEXT_HTML).with_body(body)
    }

    /// Crea una respuesta JSON exitosa (200 OK)
    pub fn json(body: &str) -> Self {
        Self::new(StatusCode::Ok, APPLICATION_JSON).with_body(body)
    }

    /// Respuesta 500 para fallos de I/O: `<html>ERROR: mensaje</html>`
    pub fn internal_error(message: &str) -> Self {
        Self::html(
            StatusCode::InternalServerError,
            &format!("<html>ERROR: {}</html>", message),
        )
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Header: `Content-Type: ...\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body sin framing adicional
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\n\r\n",
            self.status, self.content_type
        );

        let mut result = Vec::with_capacity(head.len() + self.body.len());
        result.extend_from_slice(head.as_bytes());
        result.extend_from_slice(&self.body);
        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el valor del header `Content-Type`
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body como texto (con reemplazo de bytes no UTF-8)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
