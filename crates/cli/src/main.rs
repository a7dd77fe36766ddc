//! Annotation consistency gate
//!
//! Checks the two conductor services against their embedded descriptors and
//! server interface tables. Takes no arguments: the inputs are fixed at
//! compile time. Prints the first violation on stdout and exits non-zero;
//! prints nothing on success.

use annotation_check_api as api;
use annotation_check_common::{CheckError, Result, ServerInterface};
use annotation_check_core::check_service;

fn check(proto_path: &str, service_name: &str, server: &ServerInterface) -> Result<()> {
    let blob = api::file_descriptor(proto_path)
        .ok_or_else(|| CheckError::UnknownDescriptor(proto_path.to_string()))?;
    check_service(blob, service_name, server)
}

fn run() -> Result<()> {
    check(
        api::WORKFLOW_SERVICE_PROTO,
        api::WORKFLOW_SERVICE,
        &api::WORKFLOW_SERVICE_SERVER,
    )?;
    check(
        api::OPERATOR_SERVICE_PROTO,
        api::OPERATOR_SERVICE,
        &api::OPERATOR_SERVICE_SERVER,
    )?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        println!("{err}");
        std::process::exit(1);
    }
}
