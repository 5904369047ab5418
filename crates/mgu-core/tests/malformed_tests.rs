use mgu_core::{DeclaredField, ExtractBinAsAssemblyParams, ParamsError};
use serde_json::json;

fn malformed_field(err: ParamsError) -> (String, &'static str) {
    match err {
        ParamsError::MalformedRequest { field, expected, .. } => (field, expected),
        other => panic!("expected MalformedRequest, got {other:?}"),
    }
}

#[test]
fn string_where_list_expected() {
    // mismo shape que el caso "extracted_assemblies": "bin_id" del servicio
    let err = ExtractBinAsAssemblyParams::from_json_value(json!({
        "binned_contig_obj_ref": "binned_contig_obj_ref",
        "extracted_assemblies": "bin_id",
        "workspace_name": "workspace_name"
    })).unwrap_err();
    let (field, expected) = malformed_field(err);
    assert_eq!(field, "extracted_assemblies");
    assert_eq!(expected, DeclaredField::ExtractedAssemblies.expected());
}

#[test]
fn non_string_entry_value() {
    let err = ExtractBinAsAssemblyParams::from_json_value(json!({
        "extracted_assemblies": [{"bin_id": 1, "assembly_suffix": "_a"}]
    })).unwrap_err();
    let (field, _) = malformed_field(err);
    assert_eq!(field, "extracted_assemblies");
}

#[test]
fn number_for_object_ref() {
    let err = ExtractBinAsAssemblyParams::from_json_value(json!({"binned_contig_obj_ref": 18858})).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.field(), Some("binned_contig_obj_ref"));
}

#[test]
fn invalid_json_text_is_json_error() {
    let err = ExtractBinAsAssemblyParams::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ParamsError::Json(_)));
    assert!(err.is_malformed());
}

#[test]
fn scalar_root_reports_kind() {
    for (doc, kind) in [(json!("s"), "string"), (json!(1), "number"), (json!(null), "null"), (json!(true), "boolean")] {
        let err = ExtractBinAsAssemblyParams::from_json_value(doc).unwrap_err();
        assert!(matches!(err, ParamsError::NotAnObject { found } if found == kind));
    }
}
