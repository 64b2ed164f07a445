pub mod config;
pub mod secret_request;
pub mod table;
pub mod validate;

pub use secret_request::{Draft, NewSecretRequest, RequestId, SecretRequest, SecretType};
