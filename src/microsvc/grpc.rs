//! gRPC transport — serves the record facade as `students.RecordService`.
//!
//! Requires the `grpc` feature. Uses tonic for the gRPC server and prost
//! for message serialization (standard protobuf wire format, no `.proto` file).
//!
//! ## RPCs
//!
//! - `Count`, `ListAll`, `FindByName`, `Add`, `Update`, `Delete` — one per
//!   facade operation. Business failures are ordinary responses carrying
//!   `found: false` / `success: false`; only internal store failures become
//!   a gRPC `Status`.
//!
//! ## Example
//!
//! ```ignore
//! use student_registry::{microsvc, InMemoryRecordStore, RecordFacade};
//!
//! let facade = RecordFacade::new(InMemoryRecordStore::new());
//!
//! // Get the server to compose with other tonic routes
//! let grpc_svc = microsvc::grpc_server(facade.clone());
//!
//! // Or serve directly
//! microsvc::serve_grpc(facade, "0.0.0.0:50051".parse()?, shutdown_signal).await?;
//! ```

use std::future::Future;
use std::net::SocketAddr;

use tonic::{Request, Response, Status};

use crate::error::StoreError;
use crate::facade::{self, RecordFacade};
use crate::record::Record;
use crate::store::RecordStore;

// ---------------------------------------------------------------------------
// Message types (prost — standard protobuf wire format)
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, prost::Message)]
pub struct Student {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub lastname: String,
    #[prost(string, tag = "4")]
    pub mail: String,
    #[prost(string, tag = "5")]
    pub phone: String,
    #[prost(string, tag = "6")]
    pub street: String,
    #[prost(string, tag = "7")]
    pub city: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CountRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CountResponse {
    #[prost(uint64, tag = "1")]
    pub count: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListResponse {
    #[prost(message, repeated, tag = "1")]
    pub students: Vec<Student>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FindRequest {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FindResponse {
    #[prost(message, optional, tag = "1")]
    pub student: Option<Student>,
    #[prost(bool, tag = "2")]
    pub found: bool,
    #[prost(string, tag = "3")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddRequest {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub lastname: String,
    #[prost(string, tag = "3")]
    pub mail: String,
    #[prost(string, optional, tag = "4")]
    pub phone: Option<String>,
    #[prost(string, optional, tag = "5")]
    pub street: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub city: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AddResponse {
    #[prost(message, optional, tag = "1")]
    pub student: Option<Student>,
    #[prost(bool, tag = "2")]
    pub success: bool,
    #[prost(string, tag = "3")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub lastname: String,
    #[prost(string, tag = "4")]
    pub mail: String,
    #[prost(string, optional, tag = "5")]
    pub phone: Option<String>,
    #[prost(string, optional, tag = "6")]
    pub street: Option<String>,
    #[prost(string, optional, tag = "7")]
    pub city: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateResponse {
    #[prost(message, optional, tag = "1")]
    pub student: Option<Student>,
    #[prost(bool, tag = "2")]
    pub success: bool,
    #[prost(string, tag = "3")]
    pub message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteResponse {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/students.RecordService.rs"));

pub use record_service_client::RecordServiceClient;
pub use record_service_server::{RecordService, RecordServiceServer};

// ---------------------------------------------------------------------------
// Wire <-> facade conversions
// ---------------------------------------------------------------------------

impl From<Record> for Student {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            lastname: record.lastname,
            mail: record.mail,
            phone: record.phone,
            street: record.street,
            city: record.city,
        }
    }
}

impl From<Student> for Record {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            lastname: student.lastname,
            mail: student.mail,
            phone: student.phone,
            street: student.street,
            city: student.city,
        }
    }
}

impl From<facade::CountResponse> for CountResponse {
    fn from(response: facade::CountResponse) -> Self {
        Self {
            count: response.count as u64,
        }
    }
}

impl From<facade::ListResponse> for ListResponse {
    fn from(response: facade::ListResponse) -> Self {
        Self {
            students: response.records.into_iter().map(Student::from).collect(),
        }
    }
}

impl From<ListResponse> for facade::ListResponse {
    fn from(response: ListResponse) -> Self {
        Self {
            records: response.students.into_iter().map(Record::from).collect(),
        }
    }
}

impl From<facade::FindResponse> for FindResponse {
    fn from(response: facade::FindResponse) -> Self {
        Self {
            student: response.record.map(Student::from),
            found: response.found,
            message: response.message,
        }
    }
}

impl From<FindResponse> for facade::FindResponse {
    fn from(response: FindResponse) -> Self {
        Self {
            record: response.student.map(Record::from),
            found: response.found,
            message: response.message,
        }
    }
}

impl From<facade::AddRequest> for AddRequest {
    fn from(request: facade::AddRequest) -> Self {
        Self {
            name: request.name,
            lastname: request.lastname,
            mail: request.mail,
            phone: request.phone,
            street: request.street,
            city: request.city,
        }
    }
}

impl From<AddRequest> for facade::AddRequest {
    fn from(request: AddRequest) -> Self {
        Self {
            name: request.name,
            lastname: request.lastname,
            mail: request.mail,
            phone: request.phone,
            street: request.street,
            city: request.city,
        }
    }
}

impl From<facade::UpdateRequest> for UpdateRequest {
    fn from(request: facade::UpdateRequest) -> Self {
        let fields = request.fields;
        Self {
            id: request.id,
            name: fields.name,
            lastname: fields.lastname,
            mail: fields.mail,
            phone: fields.phone,
            street: fields.street,
            city: fields.city,
        }
    }
}

impl From<UpdateRequest> for facade::UpdateRequest {
    fn from(request: UpdateRequest) -> Self {
        Self {
            id: request.id,
            fields: facade::AddRequest {
                name: request.name,
                lastname: request.lastname,
                mail: request.mail,
                phone: request.phone,
                street: request.street,
                city: request.city,
            },
        }
    }
}

impl From<facade::RecordResponse> for AddResponse {
    fn from(response: facade::RecordResponse) -> Self {
        Self {
            student: response.record.map(Student::from),
            success: response.success,
            message: response.message,
        }
    }
}

impl From<AddResponse> for facade::RecordResponse {
    fn from(response: AddResponse) -> Self {
        Self {
            record: response.student.map(Record::from),
            success: response.success,
            message: response.message,
        }
    }
}

impl From<facade::RecordResponse> for UpdateResponse {
    fn from(response: facade::RecordResponse) -> Self {
        Self {
            student: response.record.map(Student::from),
            success: response.success,
            message: response.message,
        }
    }
}

impl From<UpdateResponse> for facade::RecordResponse {
    fn from(response: UpdateResponse) -> Self {
        Self {
            record: response.student.map(Record::from),
            success: response.success,
            message: response.message,
        }
    }
}

impl From<facade::DeleteResponse> for DeleteResponse {
    fn from(response: facade::DeleteResponse) -> Self {
        Self {
            success: response.success,
            message: response.message,
        }
    }
}

impl From<DeleteResponse> for facade::DeleteResponse {
    fn from(response: DeleteResponse) -> Self {
        Self {
            success: response.success,
            message: response.message,
        }
    }
}

// ---------------------------------------------------------------------------
// Handler implementation
// ---------------------------------------------------------------------------

/// gRPC handler that wraps a `RecordFacade<S>` and implements the generated
/// `RecordService` trait.
pub struct GrpcHandler<S> {
    facade: RecordFacade<S>,
}

impl<S> GrpcHandler<S> {
    pub fn new(facade: RecordFacade<S>) -> Self {
        Self { facade }
    }
}

#[tonic::async_trait]
impl<S: RecordStore + 'static> RecordService for GrpcHandler<S> {
    async fn count(
        &self,
        _request: Request<CountRequest>,
    ) -> Result<Response<CountResponse>, Status> {
        let response = self.facade.count().map_err(internal)?;
        Ok(Response::new(response.into()))
    }

    async fn list_all(
        &self,
        _request: Request<ListRequest>,
    ) -> Result<Response<ListResponse>, Status> {
        let response = self.facade.list_all().map_err(internal)?;
        Ok(Response::new(response.into()))
    }

    async fn find_by_name(
        &self,
        request: Request<FindRequest>,
    ) -> Result<Response<FindResponse>, Status> {
        let req = request.into_inner();
        let response = self
            .facade
            .find_by_name(facade::FindRequest::new(req.name))
            .map_err(internal)?;
        Ok(Response::new(response.into()))
    }

    async fn add(&self, request: Request<AddRequest>) -> Result<Response<AddResponse>, Status> {
        let response = self
            .facade
            .add(request.into_inner().into())
            .map_err(internal)?;
        Ok(Response::new(response.into()))
    }

    async fn update(
        &self,
        request: Request<UpdateRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        let response = self
            .facade
            .update(request.into_inner().into())
            .map_err(internal)?;
        Ok(Response::new(response.into()))
    }

    async fn delete(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        let req = request.into_inner();
        let response = self
            .facade
            .delete(facade::DeleteRequest::new(req.id))
            .map_err(internal)?;
        Ok(Response::new(response.into()))
    }
}

fn internal(err: StoreError) -> Status {
    tracing::error!(error = %err, "record store failure");
    Status::internal(err.to_string())
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a `RecordServiceServer` from a facade.
pub fn grpc_server<S: RecordStore + 'static>(
    facade: RecordFacade<S>,
) -> RecordServiceServer<GrpcHandler<S>> {
    RecordServiceServer::new(GrpcHandler::new(facade))
}

/// Bind and serve the gRPC transport at `addr` until `shutdown` resolves.
pub async fn serve_grpc<S, F>(
    facade: RecordFacade<S>,
    addr: SocketAddr,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    S: RecordStore + 'static,
    F: Future<Output = ()>,
{
    tracing::info!(%addr, "gRPC transport listening");
    tonic::transport::Server::builder()
        .add_service(grpc_server(facade))
        .serve_with_shutdown(addr, shutdown)
        .await
}
