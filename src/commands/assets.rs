//! # Páginas y archivos
//! src/commands/assets.rs
//!
//! - `""`: root.html con `${links}` reemplazado por el listado
//! - `json`: una imagen al azar como JSON
//! - `random`: index.html tal cual
//! - `file/<ruta>`: comprueba si la ruta existe (no envía el archivo)

use crate::assets::{ROOT_PAGE, RANDOM_PAGE};
use crate::http::{Request, Response, StatusCode, TEXT_HTML};
use crate::router::RouteContext;
use serde::Serialize;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Imágenes disponibles para la ruta `json`: (header, url)
pub const IMAGES: [(&str, &str); 2] = [
    ("streets", "https://iili.io/JV1pSV.jpg"),
    ("bread", "https://iili.io/Jj9MWG.jpg"),
];

/// Placeholder de root.html
pub const LINKS_PLACEHOLDER: &str = "${links}";

/// Body de `file/` cuando la ruta existe
pub const FILE_PLACEHOLDER_BODY: &str =
    "Would theoretically be a file but removed this part, you do not have to do anything with it for the assignment";

#[derive(Debug, Serialize)]
struct ImagePayload<'a> {
    header: &'a str,
    image: &'a str,
}

/// Handler para el target vacío (`GET /`)
pub fn root_handler(ctx: &RouteContext<'_>, _req: &Request) -> Response {
    let page = match ctx.assets.read(ROOT_PAGE) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => return Response::internal_error(&e.to_string()),
    };

    let names = match ctx.assets.list() {
        Ok(names) => names,
        Err(e) => return Response::internal_error(&e.to_string()),
    };

    let page = page.replace(LINKS_PLACEHOLDER, &build_file_list(&names));
    Response::html(StatusCode::Ok, &page)
}

/// Lista HTML de nombres de archivo
pub fn build_file_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No files in directory".to_string();
    }

    let mut html = String::from("<ul>\n");
    for name in names {
        html.push_str("<li>");
        html.push_str(name);
        html.push_str("</li>");
    }
    html.push_str("</ul>\n");
    html
}

/// Handler para `json`
///
/// # Ejemplo de response
/// ```json
/// {"header":"streets","image":"https://iili.io/JV1pSV.jpg"}
/// ```
pub fn json_handler(_ctx: &RouteContext<'_>, _req: &Request) -> Response {
    let (header, image) = IMAGES[random_index(IMAGES.len())];

    match serde_json::to_string(&ImagePayload { header, image }) {
        Ok(body) => Response::json(&body),
        Err(e) => Response::internal_error(&e.to_string()),
    }
}

/// Índice uniforme en `0..len` sembrado por proceso y por instante
fn random_index(len: usize) -> usize {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut hasher = RandomState::new().build_hasher();
    nanos.hash(&mut hasher);
    (hasher.finish() % len as u64) as usize
}

/// Handler para `random`: retorna index.html sin modificar
pub fn random_handler(ctx: &RouteContext<'_>, _req: &Request) -> Response {
    match ctx.assets.read(RANDOM_PAGE) {
        Ok(bytes) => Response::new(StatusCode::Ok, TEXT_HTML).with_body_bytes(bytes),
        Err(e) => Response::internal_error(&e.to_string()),
    }
}

/// Handler para `file/<ruta>`
///
/// Se quitan todas las apariciones de `file/` del target y lo que queda
/// es la ruta a comprobar.
pub fn file_handler(ctx: &RouteContext<'_>, req: &Request) -> Response {
    let path = req.target().replace("file/", "");

    if ctx.assets.exists(&path) {
        Response::html(StatusCode::Ok, FILE_PLACEHOLDER_BODY)
    } else {
        Response::html(StatusCode::NotFound, &format!("File not found: {}", path))
    }
}
