//! # Fun HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP de una petición por conexión. El request line se parsea
//! a mano y una tabla fija de rutas produce respuestas crudas.
//!
//! ## Arquitectura
//!
//! - `http`: request line, query strings, responses y status codes
//! - `router`: tabla ordenada (predicado, handler)
//! - `commands`: handlers de cada ruta
//! - `server`: loop de aceptación secuencial
//! - `story`: líneas compartidas entre requests
//! - `assets` / `upstream`: filesystem y llamada HTTP saliente
//! - `config` / `logging`: CLI y tracing
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use fun_http_server::config::Config;
//! use fun_http_server::server::Server;
//!
//! let server = Server::new(Config::default()).expect("Error al crear cliente HTTP");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod assets;
pub mod commands;
pub mod config;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod story;
pub mod upstream;
