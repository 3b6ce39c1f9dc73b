use aws_profile_parser::error::DecodeError;
use aws_profile_parser::profile::{Profile, decode_section, ensure_section};

#[test]
fn keeps_only_requested_section() {
    let raw = "stray = before\n[a]\nregion = us-east-1\n[b]\nregion = eu-west-1\n";
    let section = decode_section(raw.as_bytes(), "a").expect("store should decode");
    assert_eq!(section.len(), 1);
    assert_eq!(section.get("region").map(String::as_str), Some("us-east-1"));
}

#[test]
fn excludes_entries_before_first_header() {
    let raw = "aws_access_key_id = stray\n[a]\nregion = us-east-1\n";
    let section = decode_section(raw.as_bytes(), "a").expect("store should decode");
    assert!(!section.contains_key("aws_access_key_id"));
}

#[test]
fn ignores_comments_blank_and_bare_lines() {
    let raw = "[a]\n# comment\n; comment\n\njunk line\nregion=us-east-1\r\n";
    let section = decode_section(raw.as_bytes(), "a").expect("store should decode");
    assert_eq!(section.len(), 1);
    assert_eq!(section["region"], "us-east-1");

    let raw = "\u{feff}[a]\r\nregion = eu-west-1\r\n";
    let section = decode_section(raw.as_bytes(), "a").expect("bom store should decode");
    assert_eq!(section["region"], "eu-west-1");
}

#[test]
fn keeps_key_case_and_first_equals_split() {
    let raw = "[a]\nAWS_ACCESS_KEY_ID = upper\naws_session_token = abc==\n";
    let section = decode_section(raw.as_bytes(), "a").expect("store should decode");
    assert_eq!(section["AWS_ACCESS_KEY_ID"], "upper");
    assert_eq!(section["aws_session_token"], "abc==");

    let profile = Profile::from_section(&section).expect("section should map");
    assert!(profile.access_key_id.is_empty());
    assert_eq!(profile.session_token, "abc==");
}

#[test]
fn repeated_section_merges_with_later_values_winning() {
    let raw = "[a]\nregion = one\nrole_arn = arn\n[b]\n[a]\nregion = two\n";
    let section = decode_section(raw.as_bytes(), "a").expect("store should decode");
    assert_eq!(section["region"], "two");
    assert_eq!(section["role_arn"], "arn");
}

#[test]
fn reports_syntax_errors() {
    assert_eq!(
        decode_section(b"[a]\n = value\n", "a"),
        Err(DecodeError::EmptyKey { line: 2 })
    );
    assert_eq!(
        decode_section(b"[]\n", "a"),
        Err(DecodeError::EmptySectionName { line: 1 })
    );
    assert!(matches!(
        decode_section(&[b'[', b'a', b']', b'\n', 0xff], "a"),
        Err(DecodeError::InvalidUtf8(_))
    ));
}

#[test]
fn locator_matches_literal_header() {
    assert!(ensure_section(b"[iam-user]\n", "iam-user").is_ok());
    assert!(ensure_section(b"[IAM-USER]\n", "iam-user").is_err());
    assert!(ensure_section(b"[ iam-user ]\n", "iam-user").is_err());
    assert!(ensure_section(b"", "iam-user").is_err());
}
