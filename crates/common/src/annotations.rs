//! Access-control annotation attached to RPC methods
//!
//! Mirrors the `conductor.api.annotations.v1.Method` extension carried in
//! each method's `MethodOptions`. Every method of a checked service must
//! declare both a scope and an access level.

use serde::{Deserialize, Serialize};

/// Access-control scope of an RPC method
///
/// Cluster-scoped methods operate across tenant boundaries; namespace-scoped
/// methods operate within a single tenant and must take a request carrying a
/// `namespace` field.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    ::prost::Enumeration,
)]
#[repr(i32)]
pub enum Scope {
    Unspecified = 0,
    Cluster = 1,
    Namespace = 2,
}

/// Authorization tier required to invoke an RPC method
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    ::prost::Enumeration,
)]
#[repr(i32)]
pub enum Access {
    Unspecified = 0,
    ReadOnly = 1,
    Write = 2,
    Admin = 3,
}

/// The method annotation extension payload
///
/// Leaving either field at its zero value is an invariant violation; the
/// validator rejects `Unspecified` in both positions.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodAnnotation {
    #[prost(enumeration = "Scope", tag = "1")]
    pub scope: i32,

    #[prost(enumeration = "Access", tag = "2")]
    pub access: i32,
}

impl MethodAnnotation {
    /// Annotation with both fields set
    pub fn new(scope: Scope, access: Access) -> Self {
        Self {
            scope: scope as i32,
            access: access as i32,
        }
    }
}
