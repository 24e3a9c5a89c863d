use super::*;

#[test]
fn decodes_saved_filename() {
    let result = UploadResult::from_json(br#"{"savedFilename":"img/abc.png"}"#).unwrap();
    assert_eq!(result.saved, "img/abc.png");
}

#[test]
fn accepts_saved_path_and_ignores_extra_fields() {
    let body = br#"{"file":"cat.png","savedPath":"notes-1700000000000-cat.png"}"#;
    let result = UploadResult::from_json(body).unwrap();
    assert_eq!(result.saved, "notes-1700000000000-cat.png");
}

#[test]
fn both_identifier_keys_prefer_saved_filename() {
    let body = br#"{"file":"cat.png","savedFilename":"img/abc.png","savedPath":"notes-1-cat.png"}"#;
    let result = UploadResult::from_json(body).unwrap();
    assert_eq!(result.saved, "img/abc.png");
}

#[test]
fn missing_identifier_is_a_decode_error() {
    let err = UploadResult::from_json(br#"{"file":"cat.png"}"#).unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[test]
fn non_json_body_is_a_decode_error() {
    let err = UploadResult::from_json(b"<html>502 Bad Gateway</html>").unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}
