//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Loop de aceptación estrictamente secuencial: aceptar, leer, rutear,
//! escribir, cerrar, repetir. Nunca hay más de un request en curso; la
//! ruta github puede bloquear todo el servidor hasta el timeout de la
//! llamada saliente.
//!
//! Un error al aceptar termina el loop (y el proceso). Un error dentro
//! de una conexión solo afecta a esa conexión.

use crate::assets::{AssetStore, DiskAssets};
use crate::config::Config;
use crate::http::{Request, Response, StatusCode};
use crate::router::{RouteContext, Router};
use crate::story::Story;
use crate::upstream::{FetchError, Fetcher, HttpFetcher};
use std::io::{self, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Body cuando el request no trae línea GET
pub const ILLEGAL_REQUEST_BODY: &str = "<html>Illegal request: no GET</html>";

/// Servidor de una conexión a la vez
pub struct Server {
    config: Config,
    router: Router,
    assets: Box<dyn AssetStore>,
    fetcher: Box<dyn Fetcher>,
    story: Story,
}

impl Server {
    /// Servidor con filesystem real y cliente HTTP real
    ///
    /// Falla si no se puede construir el cliente HTTP saliente.
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let assets = Box::new(DiskAssets::new(&config.www_dir));
        let fetcher = Box::new(HttpFetcher::new(config.fetch_timeout())?);
        Ok(Self::with_collaborators(config, assets, fetcher))
    }

    /// Servidor con colaboradores inyectados
    pub fn with_collaborators(
        config: Config,
        assets: Box<dyn AssetStore>,
        fetcher: Box<dyn Fetcher>,
    ) -> Self {
        Self {
            config,
            router: Router::standard(),
            assets,
            fetcher,
            story: Story::new(),
        }
    }

    /// Hace bind en la dirección configurada y atiende para siempre
    pub fn run(&self) -> io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;
        info!(%address, www_dir = %self.config.www_dir, "listening");

        self.serve(listener)
    }

    /// Atiende conexiones del listener una por una
    ///
    /// Solo retorna si `accept` falla.
    pub fn serve(&self, listener: TcpListener) -> io::Result<()> {
        for stream in listener.incoming() {
            let stream = stream.map_err(|e| {
                error!(error = %e, "accept failed");
                e
            })?;

            if let Err(e) = self.handle_connection(stream) {
                warn!(error = %e, "connection failed");
            }
        }

        Ok(())
    }

    /// Lee un request, escribe la respuesta y cierra la conexión
    pub fn handle_connection(&self, stream: TcpStream) -> io::Result<()> {
        let start = Instant::now();
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        debug!(%peer, "accepted connection");

        let mut reader = BufReader::new(&stream);
        let (response, request_target) = match Request::read_from(&mut reader) {
            Ok(Some(request)) => {
                let response = self.dispatch(&request);
                (response, request.target().to_string())
            }
            Ok(None) => (
                Response::html(StatusCode::Ok, ILLEGAL_REQUEST_BODY),
                String::new(),
            ),
            Err(e) => {
                warn!(%peer, error = %e, "failed to read request");
                (Response::internal_error(&e.to_string()), String::new())
            }
        };

        let mut writer = &stream;
        writer.write_all(&response.to_bytes())?;
        writer.flush()?;

        info!(
            %peer,
            request_target = %request_target,
            status = response.status().as_u16(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "served"
        );

        Ok(())
    }

    /// Rutea el request; un panic del handler se vuelve un 500
    fn dispatch(&self, request: &Request) -> Response {
        let ctx = RouteContext {
            assets: self.assets.as_ref(),
            fetcher: self.fetcher.as_ref(),
            story: &self.story,
            github_api: &self.config.github_api,
        };

        panic::catch_unwind(AssertUnwindSafe(|| self.router.route(&ctx, request)))
            .unwrap_or_else(|_| {
                error!(request_target = %request.target(), "handler panicked");
                Response::internal_error("handler failure")
            })
    }
}
