//! # Decodificación de Query Strings
//! src/http/query.rs
//!
//! Convierte un fragmento `nombre1=valor1&nombre2=valor2` en un mapa
//! ordenado. Cada nombre y cada valor se decodifican con percent-decoding
//! estándar (`+` equivale a espacio).
//!
//! ## Política de casos borde
//!
//! - Piezas vacías (`a=1&&b=2`, `&` final) se ignoran.
//! - Una pieza sin `=` es un error [`QueryError::MissingEquals`].
//! - `nombre=` es válido y produce un valor vacío.
//! - Si un nombre se repite, gana el último valor pero conserva la
//!   posición de la primera aparición.

use std::fmt;

/// Errores al decodificar una query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Una pieza no contiene `=`
    MissingEquals(String),

    /// Los bytes decodificados no son UTF-8 válido
    InvalidEncoding(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MissingEquals(piece) => write!(f, "malformed query parameter '{}'", piece),
            QueryError::InvalidEncoding(piece) => write!(f, "invalid encoding in '{}'", piece),
        }
    }
}

impl std::error::Error for QueryError {}

/// Mapa ordenado de parámetros de query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, String)>,
}

impl QueryParameters {
    /// Decodifica un fragmento `a=1&b=2` (sin el `?`)
    ///
    /// # Ejemplo
    /// ```
    /// use fun_http_server::http::QueryParameters;
    ///
    /// let params = QueryParameters::parse("q=hello+world%2Fme&bob=5").unwrap();
    /// assert_eq!(params.get("q"), Some("hello world/me"));
    /// assert_eq!(params.get("bob"), Some("5"));
    /// ```
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let mut params = Self::default();

        for piece in query.split('&') {
            if piece.is_empty() {
                continue;
            }

            let (raw_name, raw_value) = piece
                .split_once('=')
                .ok_or_else(|| QueryError::MissingEquals(piece.to_string()))?;

            let name = decode_component(raw_name)
                .ok_or_else(|| QueryError::InvalidEncoding(piece.to_string()))?;
            let value = decode_component(raw_value)
                .ok_or_else(|| QueryError::InvalidEncoding(piece.to_string()))?;

            params.insert(name, value);
        }

        Ok(params)
    }

    /// Extrae y decodifica la query de un request target completo
    ///
    /// Todo lo que sigue al primer `?`; sin `?` el resultado es vacío.
    pub fn from_target(target: &str) -> Result<Self, QueryError> {
        match target.split_once('?') {
            Some((_, query)) => Self::parse(query),
            None => Ok(Self::default()),
        }
    }

    fn insert(&mut self, name: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Obtiene un parámetro específico
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Parámetro presente y no vacío
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// Itera en orden de inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Percent-decoding con `+` como espacio; `None` si no es UTF-8
fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}
