//! HTTP client for the secret-requests backend.

pub mod client;

pub use client::{ApiError, Health, HttpClient};
