//! # Módulo HTTP
//!
//! Protocolo mínimo de una petición por conexión, sin librerías de
//! alto nivel:
//!
//! - Lectura del request line (`GET <target> HTTP/x.y`)
//! - Decodificación de query parameters
//! - Construcción de responses
//! - Códigos de estado
//!
//! ### Formato de Request
//!
//! ```text
//! GET /palindrome?text=Racecar HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html; charset=utf-8\r\n
//! \r\n
//! <h1>Palindrome Check</h1>...
//! ```
//!
//! No hay keep-alive ni `Content-Length`: el cierre de la conexión
//! delimita el body.

pub mod query;     // Decodificación de query strings
pub mod request;   // Lectura del request line
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

pub use query::{QueryError, QueryParameters};
pub use request::Request;
pub use response::{Response, APPLICATION_JSON, TEXT_HTML};
pub use status::StatusCode;
