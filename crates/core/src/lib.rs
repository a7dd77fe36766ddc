//! Annotation consistency checking for RPC service descriptors
//!
//! Verifies that every method of a checked service carries an access
//! annotation (scope + access level) and that the declared scope agrees with
//! the shape of the method's request type. Runs as a one-shot build gate:
//! the first violation is fatal.
//!
//! ## Pipeline
//!
//! ```rust,ignore
//! let blob = api::file_descriptor(api::WORKFLOW_SERVICE_PROTO).unwrap();
//! annotation_check_core::check_service(blob, "WorkflowService", &api::WORKFLOW_SERVICE_SERVER)?;
//! ```

mod extractor;
mod loader;
mod validator;

pub use extractor::annotated_methods;
pub use loader::load_file_descriptor;
pub use validator::validate_method;

use annotation_check_common::{Result, ServerInterface};

/// Run the full check for one service
///
/// Loads the compressed descriptor, extracts every method's annotation in
/// declaration order, and validates each against the server interface table.
/// Returns the first violation encountered; succeeds silently otherwise.
pub fn check_service(
    compressed: &[u8],
    service_name: &str,
    server: &ServerInterface,
) -> Result<()> {
    let file = load_file_descriptor(compressed)?;
    for (name, annotation) in annotated_methods(&file, service_name)? {
        validate_method(server, name, annotation)?;
    }
    Ok(())
}
