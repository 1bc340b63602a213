use crate::domain::{Product, ProductId};
use crate::transport::http::types::{ErrorBody, ProductPayload};
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach the server: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The four product operations as seen from a client.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ClientError>;
    async fn create(&self, name: &str, description: &str) -> Result<Product, ClientError>;
    async fn update(
        &self,
        id: &ProductId,
        name: &str,
        description: &str,
    ) -> Result<Product, ClientError>;
    async fn delete(&self, id: &ProductId) -> Result<(), ClientError>;
}

/// [`ProductApi`] over HTTP/JSON. Only `nome` and `descricao` are ever sent.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/produto", self.base_url)
    }

    fn item_url(&self, id: &ProductId) -> String {
        format!("{}/produto/{}", self.base_url, id)
    }
}

fn payload(name: &str, description: &str) -> ProductPayload {
    ProductPayload {
        nome: Some(name.to_string()),
        descricao: Some(description.to_string()),
    }
}

/// Turns a non-success response into `ClientError::Rejected`, using the
/// server's `{error}` body when it has one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);
    Err(ClientError::Rejected { status, message })
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(ClientError::Transport)?;
        check(response)
            .await?
            .json()
            .await
            .map_err(ClientError::Decode)
    }

    async fn create(&self, name: &str, description: &str) -> Result<Product, ClientError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&payload(name, description))
            .send()
            .await
            .map_err(ClientError::Transport)?;
        check(response)
            .await?
            .json()
            .await
            .map_err(ClientError::Decode)
    }

    async fn update(
        &self,
        id: &ProductId,
        name: &str,
        description: &str,
    ) -> Result<Product, ClientError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(&payload(name, description))
            .send()
            .await
            .map_err(ClientError::Transport)?;
        check(response)
            .await?
            .json()
            .await
            .map_err(ClientError::Decode)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(ClientError::Transport)?;
        check(response).await.map(|_| ())
    }
}
