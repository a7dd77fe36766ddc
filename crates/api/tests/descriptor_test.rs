//! Tests over the embedded descriptor blobs

use annotation_check_api as api;
use annotation_check_core::{annotated_methods, load_file_descriptor};

#[test]
fn test_workflow_service_descriptor_decodes() {
    let blob = api::file_descriptor(api::WORKFLOW_SERVICE_PROTO).unwrap();
    let file = load_file_descriptor(blob).unwrap();

    assert_eq!(file.name(), api::WORKFLOW_SERVICE_PROTO);
    assert_eq!(file.service.len(), 1);
    assert_eq!(file.service[0].name(), api::WORKFLOW_SERVICE);
}

#[test]
fn test_operator_service_descriptor_decodes() {
    let blob = api::file_descriptor(api::OPERATOR_SERVICE_PROTO).unwrap();
    let file = load_file_descriptor(blob).unwrap();

    assert_eq!(file.name(), api::OPERATOR_SERVICE_PROTO);
    assert_eq!(file.service[0].name(), api::OPERATOR_SERVICE);
}

#[test]
fn test_every_embedded_method_has_a_table_entry() {
    // Descriptor and table are maintained together; a method present in one
    // but not the other means someone updated half the API definition.
    for (path, service, server) in [
        (
            api::WORKFLOW_SERVICE_PROTO,
            api::WORKFLOW_SERVICE,
            &api::WORKFLOW_SERVICE_SERVER,
        ),
        (
            api::OPERATOR_SERVICE_PROTO,
            api::OPERATOR_SERVICE,
            &api::OPERATOR_SERVICE_SERVER,
        ),
    ] {
        let file = load_file_descriptor(api::file_descriptor(path).unwrap()).unwrap();
        let methods = annotated_methods(&file, service).unwrap();

        assert_eq!(methods.len(), server.methods.len());
        for (name, annotation) in methods {
            assert!(
                server.method(name).is_some(),
                "method {name} missing from {service} table"
            );
            assert!(annotation.is_some(), "method {name} missing annotation");
        }
    }
}
