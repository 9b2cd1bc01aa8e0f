use async_trait::async_trait;
use mercato_core::{
    CreateProductRequest, CreateUserRequest, Envelope, HealthStatus, Product, User,
};

use crate::error::ClientError;

/// Le operazioni del servizio catalogo viste dal client. È un trait perché il
/// client va costruito esplicitamente e iniettato nei consumatori (niente
/// istanza globale condivisa); nei test al suo posto entra un finto catalogo.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_products(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, ClientError>;

    async fn get_product(&self, id: u32) -> Result<Product, ClientError>;

    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, ClientError>;

    async fn list_users(&self) -> Result<Vec<User>, ClientError>;

    async fn get_user(&self, id: u32) -> Result<User, ClientError>;

    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, ClientError>;

    /// /health è l'unico endpoint fuori busta.
    async fn health(&self) -> Result<HealthStatus, ClientError>;
}

/// Client HTTP concreto su reqwest. La base URL arriva dal costruttore.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpCatalogClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Spacchetta la busta: `success: false` diventa `Rejected` col messaggio del
/// server, una busta di successo senza `data` è malformata.
fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, ClientError> {
    if !envelope.success {
        return Err(ClientError::Rejected(envelope.message));
    }
    envelope.data.ok_or(ClientError::MissingData)
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_products(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, ClientError> {
        let mut request = self.http.get(self.url("/api/products"));
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }
        if let Some(limit) = limit {
            request = request.query(&[("limite", limit.to_string().as_str())]);
        }
        let envelope = request.send().await?.json::<Envelope<Vec<Product>>>().await?;
        unwrap_envelope(envelope)
    }

    async fn get_product(&self, id: u32) -> Result<Product, ClientError> {
        let envelope = self
            .http
            .get(self.url(&format!("/api/products/{}", id)))
            .send()
            .await?
            .json::<Envelope<Product>>()
            .await?;
        unwrap_envelope(envelope)
    }

    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, ClientError> {
        let envelope = self
            .http
            .post(self.url("/api/products"))
            .json(req)
            .send()
            .await?
            .json::<Envelope<Product>>()
            .await?;
        unwrap_envelope(envelope)
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let envelope = self
            .http
            .get(self.url("/api/users"))
            .send()
            .await?
            .json::<Envelope<Vec<User>>>()
            .await?;
        unwrap_envelope(envelope)
    }

    async fn get_user(&self, id: u32) -> Result<User, ClientError> {
        let envelope = self
            .http
            .get(self.url(&format!("/api/users/{}", id)))
            .send()
            .await?
            .json::<Envelope<User>>()
            .await?;
        unwrap_envelope(envelope)
    }

    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, ClientError> {
        let envelope = self
            .http
            .post(self.url("/api/users"))
            .json(req)
            .send()
            .await?
            .json::<Envelope<User>>()
            .await?;
        unwrap_envelope(envelope)
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let status = self
            .http
            .get(self.url("/health"))
            .send()
            .await?
            .json::<HealthStatus>()
            .await?;
        Ok(status)
    }
}
