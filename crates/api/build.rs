//! Builds the embedded descriptor blobs
//!
//! Constructs the file descriptor for each checked service, including the
//! access annotation extension on every method, then gzip-compresses the
//! encoded bytes into `OUT_DIR` for `include_bytes!` embedding.

use annotation_check_common::{
    Access, FileDescriptor, MethodAnnotation, MethodDescriptor, MethodOptions, Scope,
    ServiceDescriptor,
};
use anyhow::{Context, Result};
use flate2::{write::GzEncoder, Compression};
use prost::Message;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn unary(package: &str, name: &str, scope: Scope, access: Access) -> MethodDescriptor {
    MethodDescriptor {
        name: Some(name.to_string()),
        input_type: Some(format!(".{package}.{name}Request")),
        output_type: Some(format!(".{package}.{name}Response")),
        options: Some(MethodOptions {
            method: Some(MethodAnnotation::new(scope, access)),
        }),
        ..Default::default()
    }
}

fn streaming(package: &str, name: &str, scope: Scope, access: Access) -> MethodDescriptor {
    MethodDescriptor {
        client_streaming: Some(true),
        server_streaming: Some(true),
        ..unary(package, name, scope, access)
    }
}

fn workflow_service() -> FileDescriptor {
    let pkg = "conductor.api.workflowservice.v1";
    FileDescriptor {
        name: Some("conductor/api/workflowservice/v1/service.proto".to_string()),
        package: Some(pkg.to_string()),
        service: vec![ServiceDescriptor {
            name: Some("WorkflowService".to_string()),
            method: vec![
                unary(pkg, "StartWorkflowExecution", Scope::Namespace, Access::Write),
                unary(pkg, "SignalWorkflowExecution", Scope::Namespace, Access::Write),
                unary(pkg, "TerminateWorkflowExecution", Scope::Namespace, Access::Write),
                unary(pkg, "GetWorkflowExecutionHistory", Scope::Namespace, Access::ReadOnly),
                unary(pkg, "ListWorkflowExecutions", Scope::Namespace, Access::ReadOnly),
                unary(pkg, "DescribeNamespace", Scope::Namespace, Access::ReadOnly),
                unary(pkg, "ListNamespaces", Scope::Cluster, Access::ReadOnly),
                unary(pkg, "GetClusterInfo", Scope::Cluster, Access::ReadOnly),
                streaming(pkg, "StreamWorkflowEvents", Scope::Namespace, Access::ReadOnly),
            ],
        }],
    }
}

fn operator_service() -> FileDescriptor {
    let pkg = "conductor.api.operatorservice.v1";
    FileDescriptor {
        name: Some("conductor/api/operatorservice/v1/service.proto".to_string()),
        package: Some(pkg.to_string()),
        service: vec![ServiceDescriptor {
            name: Some("OperatorService".to_string()),
            method: vec![
                unary(pkg, "AddSearchAttributes", Scope::Cluster, Access::Admin),
                unary(pkg, "RemoveSearchAttributes", Scope::Cluster, Access::Admin),
                unary(pkg, "ListSearchAttributes", Scope::Cluster, Access::ReadOnly),
                unary(pkg, "DeleteNamespace", Scope::Namespace, Access::Admin),
                unary(pkg, "ListClusters", Scope::Cluster, Access::ReadOnly),
            ],
        }],
    }
}

fn write_descriptor(out_dir: &Path, file_name: &str, file: &FileDescriptor) -> Result<()> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&file.encode_to_vec())?;
    let compressed = encoder.finish()?;
    fs::write(out_dir.join(file_name), compressed)
        .with_context(|| format!("failed to write {file_name}"))
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var_os("OUT_DIR").context("OUT_DIR not set")?;
    let out_dir = Path::new(&out_dir);

    write_descriptor(out_dir, "workflowservice.bin.gz", &workflow_service())?;
    write_descriptor(out_dir, "operatorservice.bin.gz", &operator_service())?;

    Ok(())
}
