//! Annotation extraction
//!
//! Walks a parsed file descriptor and pairs every method of the target
//! service with its decoded access annotation, or `None` when the method
//! options carry no annotation extension. A service name that matches
//! nothing is a hard error rather than a vacuous pass: a mistyped name must
//! not silently validate zero methods.

use annotation_check_common::{CheckError, FileDescriptor, MethodAnnotation, Result};

/// Methods of the named service, paired with their annotations
///
/// Declaration order is preserved so that first-failure reporting is
/// deterministic.
pub fn annotated_methods<'a>(
    file: &'a FileDescriptor,
    service_name: &str,
) -> Result<Vec<(&'a str, Option<&'a MethodAnnotation>)>> {
    let service = file
        .service
        .iter()
        .find(|service| service.name() == service_name)
        .ok_or_else(|| CheckError::ServiceNotFound(service_name.to_string()))?;

    Ok(service
        .method
        .iter()
        .map(|method| (method.name(), method.annotation()))
        .collect())
}
