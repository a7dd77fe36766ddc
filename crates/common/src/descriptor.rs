//! Typed projection of `google.protobuf.FileDescriptorProto`
//!
//! The checker only needs services, methods, and the method annotation
//! extension, so instead of probing an opaque options bag per method it
//! decodes the descriptor once into this narrow, strongly typed view. Field
//! tags match `descriptor.proto`, which keeps the projection wire-compatible
//! with descriptors emitted by `protoc` — unmodeled fields are skipped by
//! the decoder.

use crate::annotations::MethodAnnotation;

/// Extension field number of `conductor.api.annotations.v1.method` on
/// `google.protobuf.MethodOptions`.
pub const METHOD_ANNOTATION_EXTENSION: u32 = 7234;

/// Parsed representation of one proto source file
///
/// Load-once and read-only; the checker never mutates a descriptor.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptor {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,

    #[prost(string, optional, tag = "2")]
    pub package: Option<String>,

    #[prost(message, repeated, tag = "6")]
    pub service: Vec<ServiceDescriptor>,
}

/// One service and its methods, in declaration order
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceDescriptor {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,

    #[prost(message, repeated, tag = "2")]
    pub method: Vec<MethodDescriptor>,
}

/// One RPC method and its options
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodDescriptor {
    #[prost(string, optional, tag = "1")]
    pub name: Option<String>,

    #[prost(string, optional, tag = "2")]
    pub input_type: Option<String>,

    #[prost(string, optional, tag = "3")]
    pub output_type: Option<String>,

    #[prost(message, optional, tag = "4")]
    pub options: Option<MethodOptions>,

    #[prost(bool, optional, tag = "5")]
    pub client_streaming: Option<bool>,

    #[prost(bool, optional, tag = "6")]
    pub server_streaming: Option<bool>,
}

/// `MethodOptions`, reduced to the one extension the checker reads
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MethodOptions {
    /// The access annotation extension, decoded as a declared field.
    #[prost(message, optional, tag = "7234")]
    pub method: Option<MethodAnnotation>,
}

impl MethodDescriptor {
    /// The method's annotation, if its options carry one
    pub fn annotation(&self) -> Option<&MethodAnnotation> {
        self.options.as_ref().and_then(|opts| opts.method.as_ref())
    }
}
