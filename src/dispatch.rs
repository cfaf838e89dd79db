//! Background request dispatch.
//!
//! Sends issued requests on the tokio runtime and delivers their
//! completions back to the UI loop over a channel.

use crate::app::{Completion, PendingRequest};
use crate::news::{Endpoint, NewsClient};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::debug;

/// Spawns one task per request and reports its completion.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Client shared by all request tasks
    client: NewsClient,
    /// Completion channel into the UI loop
    tx: UnboundedSender<Completion>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiver its completions arrive on.
    pub fn new(client: NewsClient) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = unbounded_channel();
        (Self { client, tx }, rx)
    }

    /// Send `request` in the background.
    ///
    /// # Details
    /// Requests are never cancelled. A completion that arrives after the UI
    /// loop has shut down is dropped.
    pub fn dispatch(&self, request: PendingRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = match &request.endpoint {
                Endpoint::Search { query, filters } => client.search(query, filters).await,
                Endpoint::Latest => client.latest().await,
            };
            let completion = Completion {
                ticket: request.ticket,
                result,
            };
            if tx.send(completion).is_err() {
                debug!("completion dropped, UI loop has exited");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::Config;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_dispatch_delivers_completion_to_app() {
        let router = Router::new().route(
            "/latest",
            get(|| async {
                Json(json!({"results": [
                    {"url": "https://example.com/1", "title": "One", "source": "a",
                     "description": "d", "date published": "2024-01-15", "image": null}
                ]}))
            }),
        );
        let config = Config {
            base_url: spawn_server(router).await,
            ..Config::default()
        };
        let (dispatcher, mut rx) = Dispatcher::new(NewsClient::new(&config).unwrap());

        let mut app = App::new(Vec::new(), false);
        dispatcher.dispatch(app.fetch_latest());
        assert!(app.loading);

        let completion = rx.recv().await.unwrap();
        assert!(app.complete(completion));
        assert!(!app.loading);
        assert_eq!(app.articles.len(), 1);
        assert_eq!(app.articles[0].title, "One");
    }

    #[tokio::test]
    async fn test_dispatch_reports_failure() {
        let router = Router::new().route("/latest", get(|| async { Json(json!({"nope": 1})) }));
        let config = Config {
            base_url: spawn_server(router).await,
            ..Config::default()
        };
        let (dispatcher, mut rx) = Dispatcher::new(NewsClient::new(&config).unwrap());

        let mut app = App::new(Vec::new(), false);
        dispatcher.dispatch(app.fetch_latest());
        let completion = rx.recv().await.unwrap();
        assert!(completion.result.is_err());
        assert!(app.complete(completion));
        assert!(!app.loading);
        assert!(app.articles.is_empty());
    }
}
