//! # Comandos de la Story
//! src/commands/story.rs

use super::query_params;
use crate::http::{Request, Response, StatusCode};
use crate::router::RouteContext;

/// Handler para /addline?text=TEXT
///
/// Agrega `text` si viene y no está vacío; siempre muestra la story.
pub fn addline_handler(ctx: &RouteContext<'_>, req: &Request) -> Response {
    let params = match query_params(req) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let lines = match params.non_empty("text") {
        Some(text) => ctx.story.append_and_snapshot(text),
        None => ctx.story.snapshot(),
    };

    Response::html(StatusCode::Ok, &render_story("Updated Story", &lines))
}

/// Handler para /story
pub fn story_handler(ctx: &RouteContext<'_>, _req: &Request) -> Response {
    let lines = ctx.story.snapshot();
    Response::html(StatusCode::Ok, &render_story("Current Story", &lines))
}

fn render_story(title: &str, lines: &[String]) -> String {
    let mut html = format!("<h1>{}</h1>\n", title);
    for line in lines {
        html.push_str(line);
        html.push_str("<br>\n");
    }
    html
}
