//! Consistency validation
//!
//! Checks one method's annotation against the server interface table. Rules
//! are evaluated in order and the first violation wins:
//!
//! 1. the annotation must be present
//! 2. scope must not be unspecified
//! 3. access must not be unspecified
//! 4. the method must exist on the server interface
//! 5. for unary methods, the declared scope must agree with the presence of
//!    a `Namespace` field in the request type
//!
//! Streaming methods have no request message, so rule 5 does not apply to
//! them.

use annotation_check_common::{
    Access, CheckError, MethodAnnotation, Result, Scope, ServerInterface,
};

/// Validate one method's annotation against the server interface
pub fn validate_method(
    server: &ServerInterface,
    name: &str,
    annotation: Option<&MethodAnnotation>,
) -> Result<()> {
    let annotation =
        annotation.ok_or_else(|| CheckError::AnnotationMissing(name.to_string()))?;
    if annotation.scope() == Scope::Unspecified {
        return Err(CheckError::ScopeMissing(name.to_string()));
    }
    if annotation.access() == Access::Unspecified {
        return Err(CheckError::AccessMissing(name.to_string()));
    }

    let shape = server
        .method(name)
        .ok_or_else(|| CheckError::MethodNotFound(name.to_string()))?;

    if shape.has_request {
        if annotation.scope() == Scope::Cluster && shape.request_has_namespace {
            return Err(CheckError::UnexpectedNamespaceField(name.to_string()));
        }
        if annotation.scope() == Scope::Namespace && !shape.request_has_namespace {
            return Err(CheckError::MissingNamespaceField(name.to_string()));
        }
    }

    Ok(())
}
