//! Common HTTP response types and extractors.

pub mod responses;
pub mod validated_json;

pub use responses::{error_response, DeleteAck, ErrorBody};
pub use validated_json::ValidatedJson;
