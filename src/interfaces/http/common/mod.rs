pub mod api_error;
pub mod client_ip;
pub mod validated_json;
pub mod validated_query;

pub use api_error::{sanitize_server_errors, ApiError, ErrorBody, GENERIC_ERROR_MESSAGE};
pub use client_ip::{resolve_client_id, ClientIp, ClientIpHeader};
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
