//! Wire-compatibility tests for the typed descriptor projection
//!
//! The loader decodes descriptors through a narrow projection of
//! `google.protobuf.FileDescriptorProto`. These tests encode descriptors
//! with the canonical `prost-types` definitions and decode them through the
//! projection, proving the field tags line up and unmodeled fields are
//! skipped cleanly.

use annotation_check_core::load_file_descriptor;
use flate2::{write::GzEncoder, Compression};
use prost::Message;
use prost_types::{
    DescriptorProto, FileDescriptorProto, MethodDescriptorProto, MethodOptions,
    ServiceDescriptorProto,
};
use std::io::Write;

fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

fn canonical_descriptor() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("test/v1/service.proto".to_string()),
        package: Some("test.v1".to_string()),
        // Message types are not modeled by the projection and must be skipped.
        message_type: vec![DescriptorProto {
            name: Some("GetThingRequest".to_string()),
            ..Default::default()
        }],
        service: vec![ServiceDescriptorProto {
            name: Some("ThingService".to_string()),
            method: vec![
                MethodDescriptorProto {
                    name: Some("GetThing".to_string()),
                    input_type: Some(".test.v1.GetThingRequest".to_string()),
                    output_type: Some(".test.v1.GetThingResponse".to_string()),
                    ..Default::default()
                },
                MethodDescriptorProto {
                    name: Some("WatchThings".to_string()),
                    input_type: Some(".test.v1.WatchThingsRequest".to_string()),
                    output_type: Some(".test.v1.WatchThingsResponse".to_string()),
                    server_streaming: Some(true),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_protoc_style_descriptor_decodes_through_the_projection() {
    let blob = gzip(&canonical_descriptor().encode_to_vec());
    let file = load_file_descriptor(&blob).unwrap();

    assert_eq!(file.name(), "test/v1/service.proto");
    assert_eq!(file.package(), "test.v1");
    assert_eq!(file.service.len(), 1);

    let service = &file.service[0];
    assert_eq!(service.name(), "ThingService");
    assert_eq!(service.method.len(), 2);
    assert_eq!(service.method[0].name(), "GetThing");
    assert_eq!(service.method[0].input_type(), ".test.v1.GetThingRequest");
    assert_eq!(service.method[1].name(), "WatchThings");
    assert!(service.method[1].server_streaming());
}

#[test]
fn test_standard_method_options_yield_no_annotation() {
    let mut canonical = canonical_descriptor();
    // Options populated only with standard fields, none of which share a tag
    // with the annotation extension.
    canonical.service[0].method[0].options = Some(MethodOptions {
        deprecated: Some(true),
        ..Default::default()
    });

    let blob = gzip(&canonical.encode_to_vec());
    let file = load_file_descriptor(&blob).unwrap();

    let method = &file.service[0].method[0];
    assert!(method.options.is_some());
    assert!(method.annotation().is_none());
}
