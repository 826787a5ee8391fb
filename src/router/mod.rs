//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Lista ordenada de pares (predicado, handler) evaluada sobre el target
//! sin decodificar. Gana la primera regla que coincide; si ninguna
//! coincide se responde 400.
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El orden importa: `file/` se evalúa antes que `multiply?`, así que
//! `file/multiply?x` es una ruta de archivo.

use crate::assets::AssetStore;
use crate::commands;
use crate::http::{Request, Response, StatusCode};
use crate::story::Story;
use crate::upstream::Fetcher;

/// Body de la respuesta cuando ninguna ruta coincide
pub const UNRECOGNIZED_BODY: &str = "I am not sure what you want me to do...";

/// Colaboradores disponibles para los handlers durante un request
#[derive(Clone, Copy)]
pub struct RouteContext<'a> {
    pub assets: &'a dyn AssetStore,
    pub fetcher: &'a dyn Fetcher,
    pub story: &'a Story,
    /// Prefijo de la API remota, p.ej. `https://api.github.com/`
    pub github_api: &'a str,
}

/// Decide si una ruta atiende un target
pub type Predicate = fn(&str) -> bool;

/// Un handler recibe el contexto y el request y retorna una Response
pub type Handler = fn(&RouteContext<'_>, &Request) -> Response;

/// Una regla de la tabla de rutas
#[derive(Clone, Copy)]
pub struct Route {
    pub name: &'static str,
    pub matches: Predicate,
    pub handler: Handler,
}

/// Router con tabla ordenada
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Tabla fija de rutas del servidor, en orden de evaluación
    pub fn standard() -> Self {
        let mut router = Self::new();
        router.register("root", |t| t.is_empty(), commands::root_handler);
        router.register("json", |t| t.eq_ignore_ascii_case("json"), commands::json_handler);
        router.register("random", |t| t.eq_ignore_ascii_case("random"), commands::random_handler);
        router.register("file", |t| t.contains("file/"), commands::file_handler);
        router.register("multiply", |t| t.contains("multiply?"), commands::multiply_handler);
        router.register("github", |t| t.contains("github?"), commands::github_handler);
        router.register("addline", |t| t.starts_with("addline"), commands::addline_handler);
        router.register("story", |t| t == "story", commands::story_handler);
        router.register("reverse", |t| t.starts_with("reverse"), commands::reverse_handler);
        router.register("palindrome", |t| t.starts_with("palindrome?"), commands::palindrome_handler);
        router.register("fibonacci", |t| t.starts_with("fibonacci?"), commands::fibonacci_handler);
        router
    }

    /// Registra una ruta al final de la tabla
    pub fn register(&mut self, name: &'static str, matches: Predicate, handler: Handler) {
        self.routes.push(Route {
            name,
            matches,
            handler,
        });
    }

    /// Primera ruta cuyo predicado acepta el target
    pub fn find(&self, target: &str) -> Option<&Route> {
        self.routes.iter().find(|route| (route.matches)(target))
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si ninguna ruta coincide retorna 400 con un mensaje genérico.
    pub fn route(&self, ctx: &RouteContext<'_>, request: &Request) -> Response {
        match self.find(request.target()) {
            Some(route) => (route.handler)(ctx, request),
            None => Response::html(StatusCode::BadRequest, UNRECOGNIZED_BODY),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::standard()
    }
}
