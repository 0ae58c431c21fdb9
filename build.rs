fn main() {
    // Only run gRPC codegen when the "grpc" feature is enabled.
    // Cargo sets CARGO_FEATURE_GRPC when compiling with --features grpc.
    if std::env::var("CARGO_FEATURE_GRPC").is_ok() {
        let methods = [
            ("count", "Count", "CountRequest", "CountResponse"),
            ("list_all", "ListAll", "ListRequest", "ListResponse"),
            ("find_by_name", "FindByName", "FindRequest", "FindResponse"),
            ("add", "Add", "AddRequest", "AddResponse"),
            ("update", "Update", "UpdateRequest", "UpdateResponse"),
            ("delete", "Delete", "DeleteRequest", "DeleteResponse"),
        ];

        let mut service = tonic_build::manual::Service::builder()
            .name("RecordService")
            .package("students");

        for (name, route, input, output) in methods {
            service = service.method(
                tonic_build::manual::Method::builder()
                    .name(name)
                    .route_name(route)
                    .input_type(format!("crate::microsvc::grpc::{input}"))
                    .output_type(format!("crate::microsvc::grpc::{output}"))
                    .codec_path("tonic::codec::ProstCodec")
                    .build(),
            );
        }

        tonic_build::manual::Builder::new().compile(&[service.build()]);
    }
}
