//! Typed gRPC client for `students.RecordService`.
//!
//! Wraps the generated tonic client and speaks facade types, so callers see
//! the same `found` / `success` payloads the server produced.

use thiserror::Error;
use tonic::transport::Channel;

use crate::facade::{
    AddRequest, AddResponse, DeleteResponse, FindResponse, ListResponse, UpdateRequest,
    UpdateResponse,
};
use crate::microsvc::grpc::{self, RecordServiceClient};

/// Failures reaching the service. Business outcomes are not errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),
}

/// Client for a running record service.
#[derive(Clone)]
pub struct StudentClient {
    inner: RecordServiceClient<Channel>,
}

impl StudentClient {
    /// Connect to `endpoint` (e.g. `"http://localhost:50051"`).
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let endpoint = endpoint.into();
        let inner = RecordServiceClient::connect(endpoint.clone())
            .await
            .map_err(|source| ClientError::Connect { endpoint, source })?;
        Ok(Self { inner })
    }

    pub async fn count(&mut self) -> Result<usize, ClientError> {
        let response = self.inner.count(grpc::CountRequest {}).await?.into_inner();
        Ok(response.count as usize)
    }

    pub async fn list_all(&mut self) -> Result<ListResponse, ClientError> {
        let response = self.inner.list_all(grpc::ListRequest {}).await?.into_inner();
        Ok(response.into())
    }

    pub async fn find_by_name(
        &mut self,
        name: impl Into<String>,
    ) -> Result<FindResponse, ClientError> {
        let request = grpc::FindRequest { name: name.into() };
        let response = self.inner.find_by_name(request).await?.into_inner();
        Ok(response.into())
    }

    pub async fn add(&mut self, request: AddRequest) -> Result<AddResponse, ClientError> {
        let response = self
            .inner
            .add(grpc::AddRequest::from(request))
            .await?
            .into_inner();
        Ok(response.into())
    }

    pub async fn update(&mut self, request: UpdateRequest) -> Result<UpdateResponse, ClientError> {
        let response = self
            .inner
            .update(grpc::UpdateRequest::from(request))
            .await?
            .into_inner();
        Ok(response.into())
    }

    pub async fn delete(&mut self, id: impl Into<String>) -> Result<DeleteResponse, ClientError> {
        let request = grpc::DeleteRequest { id: id.into() };
        let response = self.inner.delete(request).await?.into_inner();
        Ok(response.into())
    }
}
