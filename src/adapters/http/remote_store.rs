//! HTTP client adapter for the remote document store.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::RemoteConfig;
use crate::domain::document::{Document, DocumentStatus};
use crate::domain::foundation::{Actor, DocumentId, DomainError, ErrorCode};
use crate::domain::kpi::Kpi;
use crate::domain::tabular::TableData;
use crate::ports::{DocumentPatch, RemoteDocumentStore};

/// Production implementation of `RemoteDocumentStore` over the store's
/// HTTP API.
///
/// The core enforces no timeout of its own; the client-level timeout
/// configured here is the only one.
pub struct HttpRemoteStore {
    config: RemoteConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct StatusUpdateBody<'a> {
    estado: DocumentStatus,
    #[serde(rename = "autorId")]
    author_id: &'a str,
    #[serde(rename = "autorNombre")]
    author_name: &'a str,
}

impl HttpRemoteStore {
    /// Create a new client against the configured store.
    pub fn new(config: RemoteConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn token(&self) -> &str {
        self.config.api_token.expose_secret()
    }

    /// Maps a transport error into the opaque remote-failure taxonomy.
    fn transport_error(context: &str, err: reqwest::Error) -> DomainError {
        tracing::error!("{} failed: {}", context, err);
        DomainError::remote(format!("{}: {}", context, err))
    }

    /// Rejects non-success responses, distinguishing missing targets.
    async fn check(
        context: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::error!("{} returned 404", context);
            return Err(DomainError::new(
                ErrorCode::DocumentNotFound,
                format!("{}: not found", context),
            ));
        }
        if !status.is_success() {
            tracing::error!("{} returned {}", context, status);
            return Err(DomainError::remote(format!(
                "{}: store returned {}",
                context, status
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl RemoteDocumentStore for HttpRemoteStore {
    async fn list_documents(&self, actor: &Actor) -> Result<Vec<Document>, DomainError> {
        let permissions = actor
            .permissions()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(self.url("documentos"))
            .bearer_auth(self.token())
            .query(&[("permisos", permissions.as_str())])
            .send()
            .await
            .map_err(|e| Self::transport_error("list documents", e))?;

        Self::check("list documents", response)
            .await?
            .json()
            .await
            .map_err(|e| Self::transport_error("parse document list", e))
    }

    async fn list_kpis(&self) -> Result<Vec<Kpi>, DomainError> {
        let response = self
            .client
            .get(self.url("indicadores"))
            .bearer_auth(self.token())
            .send()
            .await
            .map_err(|e| Self::transport_error("list kpis", e))?;

        Self::check("list kpis", response)
            .await?
            .json()
            .await
            .map_err(|e| Self::transport_error("parse kpi list", e))
    }

    async fn update_status(
        &self,
        id: &DocumentId,
        status: DocumentStatus,
        actor: &Actor,
    ) -> Result<Document, DomainError> {
        let body = StatusUpdateBody {
            estado: status,
            author_id: actor.user_id().as_str(),
            author_name: actor.name(),
        };

        let response = self
            .client
            .put(self.url(&format!("documentos/{}/estado", id)))
            .bearer_auth(self.token())
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::transport_error("update status", e))?;

        Self::check("update status", response)
            .await?
            .json()
            .await
            .map_err(|e| Self::transport_error("parse updated document", e))
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        patch: DocumentPatch,
        actor: &Actor,
    ) -> Result<Document, DomainError> {
        let response = self
            .client
            .patch(self.url(&format!("documentos/{}", id)))
            .bearer_auth(self.token())
            .header("X-Actor-Id", actor.user_id().as_str())
            .json(&patch)
            .send()
            .await
            .map_err(|e| Self::transport_error("update document", e))?;

        Self::check("update document", response)
            .await?
            .json()
            .await
            .map_err(|e| Self::transport_error("parse updated document", e))
    }

    async fn clone_as_new_version(&self, id: &DocumentId) -> Result<Document, DomainError> {
        let response = self
            .client
            .post(self.url(&format!("documentos/{}/versiones", id)))
            .bearer_auth(self.token())
            .send()
            .await
            .map_err(|e| Self::transport_error("clone document", e))?;

        Self::check("clone document", response)
            .await?
            .json()
            .await
            .map_err(|e| Self::transport_error("parse cloned document", e))
    }

    async fn get_rows(&self, id: &DocumentId) -> Result<TableData, DomainError> {
        let response = self
            .client
            .get(self.url(&format!("documentos/{}/filas", id)))
            .bearer_auth(self.token())
            .send()
            .await
            .map_err(|e| Self::transport_error("get rows", e))?;

        Self::check("get rows", response)
            .await?
            .json()
            .await
            .map_err(|e| Self::transport_error("parse rows", e))
    }

    async fn put_rows(
        &self,
        id: &DocumentId,
        table: &TableData,
        actor: &Actor,
    ) -> Result<(), DomainError> {
        let response = self
            .client
            .put(self.url(&format!("documentos/{}/filas", id)))
            .bearer_auth(self.token())
            .header("X-Actor-Id", actor.user_id().as_str())
            .json(table)
            .send()
            .await
            .map_err(|e| Self::transport_error("put rows", e))?;

        Self::check("put rows", response).await?;
        Ok(())
    }
}
