//! Common types for the annotation consistency checker
//!
//! This crate contains the shared data structures and error types used
//! across the descriptor loading, annotation extraction, and validation
//! components.

use thiserror::Error;

pub mod annotations;
pub mod descriptor;
pub mod server;

pub use annotations::{Access, MethodAnnotation, Scope};
pub use descriptor::{FileDescriptor, MethodDescriptor, MethodOptions, ServiceDescriptor};
pub use server::{MethodShape, ServerInterface};

/// Errors that can occur while checking a service's annotations
///
/// Every variant is fatal to the run: the checker gates a build on total
/// annotation correctness, so the first violation terminates the pass.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Descriptor blob corrupt or unparsable
    #[error("load error: {0}")]
    Load(String),

    /// No descriptor registered under the given logical proto path
    #[error("no file descriptor registered for {0}")]
    UnknownDescriptor(String),

    /// Service name matched nothing in the parsed descriptor
    #[error("service {0} not found in file descriptor")]
    ServiceNotFound(String),

    /// Method carries no annotation extension at all
    #[error("annotation for {0} missing")]
    AnnotationMissing(String),

    /// Annotation present but scope left unspecified
    #[error("scope annotation for {0} missing")]
    ScopeMissing(String),

    /// Annotation present but access level left unspecified
    #[error("access annotation for {0} missing")]
    AccessMissing(String),

    /// Annotated method has no counterpart on the server interface
    #[error("can't find method {0} in server type")]
    MethodNotFound(String),

    /// Cluster-scoped method whose request exposes a Namespace field
    #[error("found Namespace field in request for SCOPE_CLUSTER method {0}")]
    UnexpectedNamespaceField(String),

    /// Namespace-scoped method whose request lacks a Namespace field
    #[error("didn't find Namespace field in request for SCOPE_NAMESPACE method {0}")]
    MissingNamespaceField(String),
}

/// Result type for checker operations
pub type Result<T> = std::result::Result<T, CheckError>;
