//! # Parsing del Request Line
//! src/http/request.rs
//!
//! Lee líneas del stream hasta la línea vacía que cierra los headers.
//! La primera línea que empieza con `GET` aporta el request target: el texto
//! entre el primer y el segundo espacio, sin la `/` inicial. El resto
//! de los headers se lee y se descarta.
//!
//! ```text
//! GET /multiply?num1=3&num2=4 HTTP/1.1\r\n   -> "multiply?num1=3&num2=4"
//! Host: localhost:9000\r\n                   -> descartado
//! \r\n                                       -> fin
//! ```
//!
//! El target NO se decodifica aquí; eso ocurre por ruta al extraer la
//! query (ver [`crate::http::QueryParameters`]).

use std::io::{self, BufRead};
use tracing::debug;

/// Request parseado: solo el target sin decodificar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    target: String,
}

impl Request {
    /// Crea un request a partir de un target ya extraído
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Lee un request del stream
    ///
    /// # Retorna
    ///
    /// * `Ok(Some(Request))` - se encontró una línea `GET` con target
    /// * `Ok(None)` - no hubo línea `GET` antes de la línea vacía o del EOF
    /// * `Err(io::Error)` - fallo de lectura del socket
    ///
    /// Si aparecen varias líneas `GET`, gana la primera que tenga target;
    /// las siguientes se leen y se descartan como cualquier header.
    pub fn read_from<R: BufRead>(reader: &mut R) -> io::Result<Option<Self>> {
        let mut target = None;
        let mut raw = Vec::new();

        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&raw);
            let line = text.trim_end_matches(['\r', '\n']);
            debug!(line, "received");

            if line.is_empty() {
                break;
            }
            if target.is_none() && line.starts_with("GET") {
                if let Some(found) = extract_target(line) {
                    target = Some(found.to_string());
                }
            }
        }

        Ok(target.map(Self::new))
    }

    /// Parsea un request desde un buffer en memoria
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use fun_http_server::http::Request;
    ///
    /// let request = Request::parse(b"GET /fibonacci?start=0&count=5 HTTP/1.1\r\n\r\n")
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(request.target(), "fibonacci?start=0&count=5");
    /// ```
    pub fn parse(mut buffer: &[u8]) -> io::Result<Option<Self>> {
        Self::read_from(&mut buffer)
    }

    /// Target sin decodificar (path + `?query` opcional, sin `/` inicial)
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Texto entre el primer espacio y el siguiente (o el fin de línea)
fn extract_target(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(' ')?;
    let raw = rest.split(' ').next().unwrap_or(rest);
    Some(raw.strip_prefix('/').unwrap_or(raw))
}
