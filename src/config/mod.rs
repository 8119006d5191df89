//! Configuration loading and logger options derivation

pub mod factory;
pub mod serializers;
pub mod settings;

pub use factory::{
    logger_options, LoggerOptions, PrettyOptions, MESSAGE_KEY, PRETTY_TRANSLATE_TIME,
    TIMESTAMP_KEY,
};
pub use serializers::{
    serialize_request, serialize_response, RequestInfo, ResponseInfo, Serializers,
    HEADER_MACHINE_ID, HEADER_REQUEST_HANDLE, HEADER_REQUEST_START, HEADER_RESPONSE_TIME,
    HEADER_TOTAL_TIME,
};
pub use settings::RuntimeSettings;
