//! Conductor API surface checked by the annotation gate
//!
//! Carries the build-time artifacts the checker runs against: the
//! gzip-compressed file descriptor of each service, keyed by its canonical
//! proto path, and the hand-maintained server interface tables describing
//! each method's signature shape. Descriptors and tables must be updated
//! together whenever the API definition changes; keeping them consistent is
//! exactly what the gate verifies.

use annotation_check_common::{MethodShape, ServerInterface};

/// Canonical proto path of the workflow service definition
pub const WORKFLOW_SERVICE_PROTO: &str = "conductor/api/workflowservice/v1/service.proto";

/// Canonical proto path of the operator service definition
pub const OPERATOR_SERVICE_PROTO: &str = "conductor/api/operatorservice/v1/service.proto";

/// Service name declared in the workflow service proto
pub const WORKFLOW_SERVICE: &str = "WorkflowService";

/// Service name declared in the operator service proto
pub const OPERATOR_SERVICE: &str = "OperatorService";

static WORKFLOW_SERVICE_DESCRIPTOR: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/workflowservice.bin.gz"));

static OPERATOR_SERVICE_DESCRIPTOR: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/operatorservice.bin.gz"));

/// Compressed descriptor blob for a registered proto path
pub fn file_descriptor(proto_path: &str) -> Option<&'static [u8]> {
    match proto_path {
        WORKFLOW_SERVICE_PROTO => Some(WORKFLOW_SERVICE_DESCRIPTOR),
        OPERATOR_SERVICE_PROTO => Some(OPERATOR_SERVICE_DESCRIPTOR),
        _ => None,
    }
}

/// Server interface table for `WorkflowService`
pub static WORKFLOW_SERVICE_SERVER: ServerInterface = ServerInterface {
    name: WORKFLOW_SERVICE,
    methods: &[
        ("StartWorkflowExecution", MethodShape::NAMESPACE_REQUEST),
        ("SignalWorkflowExecution", MethodShape::NAMESPACE_REQUEST),
        ("TerminateWorkflowExecution", MethodShape::NAMESPACE_REQUEST),
        ("GetWorkflowExecutionHistory", MethodShape::NAMESPACE_REQUEST),
        ("ListWorkflowExecutions", MethodShape::NAMESPACE_REQUEST),
        ("DescribeNamespace", MethodShape::NAMESPACE_REQUEST),
        ("ListNamespaces", MethodShape::CLUSTER_REQUEST),
        ("GetClusterInfo", MethodShape::CLUSTER_REQUEST),
        ("StreamWorkflowEvents", MethodShape::STREAMING),
    ],
};

/// Server interface table for `OperatorService`
pub static OPERATOR_SERVICE_SERVER: ServerInterface = ServerInterface {
    name: OPERATOR_SERVICE,
    methods: &[
        ("AddSearchAttributes", MethodShape::CLUSTER_REQUEST),
        ("RemoveSearchAttributes", MethodShape::CLUSTER_REQUEST),
        ("ListSearchAttributes", MethodShape::CLUSTER_REQUEST),
        ("DeleteNamespace", MethodShape::NAMESPACE_REQUEST),
        ("ListClusters", MethodShape::CLUSTER_REQUEST),
    ],
};
