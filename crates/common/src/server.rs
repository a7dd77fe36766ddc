//! Compile-time description of a service's server interface
//!
//! Replaces runtime reflection over generated server traits with an
//! explicitly maintained table: one entry per method, recording whether the
//! method takes a request message at all and, if so, whether that request
//! exposes a `Namespace` field. The tables live next to the embedded
//! descriptors and are updated together with the API definition.

/// Shape of one server method's signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodShape {
    /// False for streaming methods, which take no request message.
    pub has_request: bool,

    /// Whether the request message exposes a `Namespace` field. Meaningless
    /// when `has_request` is false.
    pub request_has_namespace: bool,
}

impl MethodShape {
    /// Unary method whose request carries a `Namespace` field
    pub const NAMESPACE_REQUEST: MethodShape = MethodShape {
        has_request: true,
        request_has_namespace: true,
    };

    /// Unary method whose request has no `Namespace` field
    pub const CLUSTER_REQUEST: MethodShape = MethodShape {
        has_request: true,
        request_has_namespace: false,
    };

    /// Streaming method with no request message in its signature
    pub const STREAMING: MethodShape = MethodShape {
        has_request: false,
        request_has_namespace: false,
    };
}

/// Method table for one service's server interface
pub struct ServerInterface {
    /// Service name, as declared in the proto file.
    pub name: &'static str,

    /// Method name to signature shape, in declaration order.
    pub methods: &'static [(&'static str, MethodShape)],
}

impl ServerInterface {
    /// Look up a method's shape by exact, case-sensitive name
    pub fn method(&self, name: &str) -> Option<MethodShape> {
        self.methods
            .iter()
            .find(|(method, _)| *method == name)
            .map(|(_, shape)| *shape)
    }
}
