//! Resource-level authorization for downstream services

mod service;

pub use service::ResourceAuthorizer;
