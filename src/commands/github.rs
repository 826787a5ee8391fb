//! # Proxy a la API de GitHub
//! src/commands/github.rs
//!
//! `github?query=users/<owner>/repos` hace un GET bloqueante a
//! `<github_api><query>` y lista nombre, id y dueño de cada repo.
//!
//! No hay parser JSON: el arreglo se corta en cada `},{` y los campos se
//! buscan por substring dentro de cada pedazo. Es frágil a propósito;
//! comillas escapadas dentro de `full_name` o un objeto anidado que
//! contenga `},{` rompen la extracción y así se reporta.

use super::query_params;
use crate::http::{Request, Response, StatusCode};
use crate::router::RouteContext;
use tracing::debug;

/// Valor para un campo que no aparece en el pedazo
pub const MISSING_FIELD: &str = "N/A";

/// Campos extraídos de un repo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
    pub full_name: String,
    pub id: String,
    pub owner: String,
}

/// Handler para /github?query=QUERY
pub fn github_handler(ctx: &RouteContext<'_>, req: &Request) -> Response {
    match fetch_repos(ctx, req) {
        Ok(repos) => {
            let mut body = String::from("<h1>GitHub Repos:</h1>");
            for repo in &repos {
                body.push_str(&format!(
                    "Full Name: {}<br>ID: {}<br>Owner: {}<br><br>",
                    repo.full_name, repo.id, repo.owner
                ));
            }
            Response::html(StatusCode::Ok, &body)
        }
        Err(reason) => Response::html(
            StatusCode::BadRequest,
            &format!("<h1>Error fetching GitHub repos: {}</h1>", reason),
        ),
    }
}

fn fetch_repos(ctx: &RouteContext<'_>, req: &Request) -> Result<Vec<RepoSummary>, String> {
    let params = query_params(req).map_err(|_| "Malformed query parameters".to_string())?;
    let query = params
        .non_empty("query")
        .ok_or_else(|| "Missing query parameter".to_string())?;

    let url = format!("{}{}", ctx.github_api, query);
    debug!(url = %url, "fetching repos");

    let json = ctx.fetcher.fetch(&url).map_err(|e| e.to_string())?;
    if json.is_empty() {
        return Err("Empty response from GitHub".to_string());
    }

    Ok(split_repos(&json).into_iter().map(summarize).collect())
}

/// Corta un arreglo JSON en pedazos por la frontera literal `},{`
///
/// Los pedazos vacíos al final se descartan.
pub fn split_repos(json: &str) -> Vec<&str> {
    let mut pieces: Vec<&str> = json.split("},{").collect();
    while pieces.len() > 1 && pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Extrae `full_name`, `id` y `owner.login` de un pedazo
pub fn summarize(fragment: &str) -> RepoSummary {
    let owner = if fragment.contains("\"owner\"") {
        string_field(fragment, "login")
    } else {
        None
    };

    RepoSummary {
        full_name: string_field(fragment, "full_name").unwrap_or_else(|| MISSING_FIELD.to_string()),
        id: raw_field(fragment, "id").unwrap_or_else(|| MISSING_FIELD.to_string()),
        owner: owner.unwrap_or_else(|| MISSING_FIELD.to_string()),
    }
}

/// Valor string de la primera aparición de `"key":"...`
///
/// Termina en la siguiente comilla (o al final del pedazo).
pub fn string_field(fragment: &str, key: &str) -> Option<String> {
    let marker = format!("\"{}\":\"", key);
    let start = fragment.find(&marker)? + marker.len();
    let rest = &fragment[start..];
    let end = rest.find('"').unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

/// Valor sin comillas de la primera aparición de `"key":...`
///
/// Termina en la siguiente coma (o al final del pedazo).
pub fn raw_field(fragment: &str, key: &str) -> Option<String> {
    let marker = format!("\"{}\":", key);
    let start = fragment.find(&marker)? + marker.len();
    let rest = &fragment[start..];
    let end = rest.find(',').unwrap_or(rest.len());
    Some(rest[..end].to_string())
}
