use super::*;

#[test]
fn kinds_follow_taxonomy() {
    assert_eq!(SubmitError::Transport("refused".to_owned()).kind(), ErrorKind::Network);
    assert_eq!(SubmitError::Timeout { secs: 20 }.kind(), ErrorKind::Network);
    assert_eq!(SubmitError::Status { status: 500 }.kind(), ErrorKind::Network);
    assert_eq!(SubmitError::EmptyBody.kind(), ErrorKind::Protocol);
    assert_eq!(
        SubmitError::MalformedBody { detail: "eof".to_owned() }.kind(),
        ErrorKind::Protocol
    );
    assert_eq!(SubmitError::Encode("bad".to_owned()).kind(), ErrorKind::Protocol);
    assert_eq!(SubmitError::Application("nope".to_owned()).kind(), ErrorKind::Application);
}

#[test]
fn user_messages_hide_parser_detail() {
    let err = SubmitError::MalformedBody {
        detail: "expected value at line 1 column 1".to_owned(),
    };
    assert_eq!(err.user_message(), "Invalid JSON response from server");
}

#[test]
fn status_and_application_messages() {
    assert_eq!(SubmitError::Status { status: 500 }.user_message(), "HTTP error! status: 500");
    assert_eq!(
        SubmitError::Application("rate limited".to_owned()).user_message(),
        "rate limited"
    );
}

#[test]
fn error_codes_are_distinct() {
    let errors = [
        SubmitError::Transport(String::new()),
        SubmitError::Timeout { secs: 1 },
        SubmitError::Status { status: 404 },
        SubmitError::EmptyBody,
        SubmitError::MalformedBody { detail: String::new() },
        SubmitError::Encode(String::new()),
        SubmitError::Application(String::new()),
    ];
    let mut codes: Vec<&str> = errors.iter().map(SubmitError::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn decode_errors_map_to_protocol_variants() {
    assert_eq!(SubmitError::from(form::DecodeError::Empty), SubmitError::EmptyBody);
    let malformed = form::decode_response("not json").unwrap_err();
    assert!(matches!(SubmitError::from(malformed), SubmitError::MalformedBody { .. }));
}
