//! Defines the dashboard backend trait and its HTTP implementation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::CategoryTotal;
use crate::models::ChatReply;
use crate::models::ChatRequest;
use crate::models::NewExpense;
use crate::models::Stats;
use crate::models::Transaction;
use crate::models::TrendPoint;

/// Anything that can serve the dashboard's data.
///
/// Every method is a single round trip. Nothing here retries or transforms
/// amounts; failures are handed back to the caller as they are.
pub trait DashboardBackend {
    async fn fetch_stats(&self) -> Result<Stats, ApiError>;

    async fn fetch_recent(&self) -> Result<Vec<Transaction>, ApiError>;

    async fn fetch_trend(&self) -> Result<Vec<TrendPoint>, ApiError>;

    async fn fetch_category_breakdown(&self) -> Result<Vec<CategoryTotal>, ApiError>;

    async fn add_expense(&self, expense: &NewExpense) -> Result<(), ApiError>;

    /// Starts a new advisor session and returns its greeting.
    async fn init_chat(&self) -> Result<String, ApiError>;

    async fn chat(&self, message: &str) -> Result<String, ApiError>;
}

/// Talks JSON over HTTP to the expense backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?;
        Self::decode(resp).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let mut req = self.client.post(self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?.error_for_status()?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        // Read the body as text first so a malformed payload is a parse error
        // rather than a transport error.
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl DashboardBackend for HttpBackend {
    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.get_json("/stats").await
    }

    async fn fetch_recent(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/recent_expenses").await
    }

    async fn fetch_trend(&self) -> Result<Vec<TrendPoint>, ApiError> {
        self.get_json("/spending_trend").await
    }

    async fn fetch_category_breakdown(&self) -> Result<Vec<CategoryTotal>, ApiError> {
        self.get_json("/expenses").await
    }

    async fn add_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        // Only the status matters; the body is not read.
        self.client
            .post(self.url("/add_expense"))
            .json(expense)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn init_chat(&self) -> Result<String, ApiError> {
        let reply: ChatReply = self.post_json::<(), _>("/init_chat", None).await?;
        Ok(reply.response)
    }

    async fn chat(&self, message: &str) -> Result<String, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        let reply: ChatReply = self.post_json("/chat", Some(&body)).await?;
        Ok(reply.response)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::AsyncReadExt;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let backend = HttpBackend::new("http://localhost:5000/");
        assert_eq!(backend.base_url(), "http://localhost:5000");
        assert_eq!(backend.url("/stats"), "http://localhost:5000/stats");
    }

    /// Serves one connection with `response`, returning the base URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        format!("http://{addr}")
    }

    fn expense() -> NewExpense {
        NewExpense {
            amount: 250.0,
            category: "Food".into(),
            note: String::new(),
        }
    }

    #[tokio::test]
    async fn add_expense_ignores_a_non_json_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        )
        .await;
        let backend = HttpBackend::new(url);
        assert_eq!(backend.add_expense(&expense()).await, Ok(()));
    }

    #[tokio::test]
    async fn add_expense_reports_server_errors() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let backend = HttpBackend::new(url);
        match backend.add_expense(&expense()).await {
            Err(ApiError::Network(_)) => {}
            other => panic!("expected a network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        // Port 9 (discard) is not expected to accept connections.
        let backend = HttpBackend::new("http://127.0.0.1:9");
        match backend.fetch_stats().await {
            Err(ApiError::Network(_)) => {}
            other => panic!("expected a network error, got {other:?}"),
        }
    }
}
