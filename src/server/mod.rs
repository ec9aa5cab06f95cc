//! HTTP server
//!
//! A tokio TCP listener that serves the JSON API and the rendered pages:
//! - One task per accepted connection
//! - Routing of request paths to API handlers and views
//! - Shutdown through a `watch` channel

mod http;

pub use http::{parse_request_head, read_head, reason_phrase, Request, RequestError, Response};

use crate::api::{resolve, Api, Route};
use crate::config::Config;
use crate::model::{BAD_REQUEST_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE};
use crate::views::Views;
use crate::TabellError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;

/// Routes requests to the API and the views
#[derive(Debug, Clone)]
pub struct App {
    api: Api,
    views: Views,
}

impl App {
    /// Builds the API and the views around one shared HTTP client
    pub fn new(config: Arc<Config>) -> Result<Self, TabellError> {
        let api = Api::new(config.clone())?;
        let client = crate::fetcher::build_http_client(&config.user_agent, &config.upstream)?;
        let views = Views::new(config, client);
        Ok(Self { api, views })
    }

    pub async fn handle(&self, request: &Request) -> Response {
        if request.method != "GET" {
            return Response::error(405, METHOD_NOT_ALLOWED_MESSAGE);
        }

        match resolve(&request.path) {
            Route::Index => self.views.index(),
            Route::View(page) => self.views.page(page).await,
            Route::Table { code, kind } => self.api.table(code, kind).await,
            Route::NotFound => Response::error(404, NOT_FOUND_MESSAGE),
        }
    }
}

/// How long a client may take to send its request head
pub const HEAD_READ_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Server {
    listener: TcpListener,
    app: Arc<App>,
    read_timeout: Duration,
}

impl Server {
    /// Binds the listener; use port 0 for an ephemeral port
    pub async fn bind(addr: &str, app: App) -> Result<Self, TabellError> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            app: Arc::new(app),
            read_timeout: HEAD_READ_TIMEOUT,
        })
    }

    /// Replaces [`HEAD_READ_TIMEOUT`]; idle connections are closed without a response
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until `shutdown` flips to `true` or its sender is dropped
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        if let Ok(addr) = self.local_addr() {
            tracing::info!("Listening on http://{}", addr);
        }

        loop {
            tokio::select! {
                accept_result = self.listener.accept() => {
                    match accept_result {
                        Ok((stream, peer)) => {
                            let app = self.app.clone();
                            let read_timeout = self.read_timeout;
                            tokio::spawn(async move {
                                if let Err(e) = handle_connection(stream, app, read_timeout).await {
                                    tracing::debug!("Connection from {} ended: {}", peer, e);
                                }
                            });
                        }
                        Err(e) => {
                            tracing::error!("Accept error: {}", e);
                        }
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Server shutting down");
                        break;
                    }
                }
            }
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    app: Arc<App>,
    read_timeout: Duration,
) -> std::io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    let head = match tokio::time::timeout(read_timeout, read_head(&mut reader)).await {
        Ok(head) => head,
        Err(_) => {
            tracing::debug!("No request head within {:?}, closing", read_timeout);
            return writer.shutdown().await;
        }
    };

    let response = match head {
        Ok(head) => match parse_request_head(&head) {
            Ok(request) => {
                let response = app.handle(&request).await;
                tracing::info!("{} {} -> {}", request.method, request.path, response.status);
                response
            }
            Err(e) => {
                tracing::debug!("Rejecting request: {:?}", e);
                Response::error(400, BAD_REQUEST_MESSAGE)
            }
        },
        Err(e) => {
            tracing::debug!("Failed to read request: {}", e);
            Response::error(400, BAD_REQUEST_MESSAGE)
        }
    };

    writer.write_all(&response.to_bytes()).await?;
    writer.shutdown().await
}
