//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta una conexión
//! 3. Lee el request line y descarta los headers
//! 4. Genera la response, la escribe y cierra
//!
//! Una conexión a la vez, sin threads.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{Server, ILLEGAL_REQUEST_BODY};
