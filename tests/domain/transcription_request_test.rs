use whisper_gateway::domain::{RequestNameError, TranscriptionRequest};

#[test]
fn given_plain_ogg_name_when_parsing_then_derives_sibling_names() {
    let request = TranscriptionRequest::parse("call1.ogg", "ogg").unwrap();

    assert_eq!(request.file_name(), "call1.ogg");
    assert_eq!(request.stem(), "call1");
    assert_eq!(request.resampled_file_name("wav"), "call1.wav");
    assert_eq!(request.result_file_name(), "call1.txt");
}

#[test]
fn given_dotted_stem_when_parsing_then_only_last_extension_is_replaced() {
    let request = TranscriptionRequest::parse("meeting.2024-05-01.ogg", "ogg").unwrap();

    assert_eq!(request.stem(), "meeting.2024-05-01");
    assert_eq!(request.resampled_file_name("wav"), "meeting.2024-05-01.wav");
    assert_eq!(request.result_file_name(), "meeting.2024-05-01.txt");
}

#[test]
fn given_other_extension_when_parsing_then_rejects_extension() {
    for name in ["call1.mp3", "call1.OGG", "call1.ogg.txt", "ogg", "call1ogg"] {
        assert_eq!(
            TranscriptionRequest::parse(name, "ogg"),
            Err(RequestNameError::UnsupportedExtension),
            "{name}"
        );
    }
}

#[test]
fn given_directory_components_when_parsing_then_rejects_name() {
    for name in [
        "../secret.ogg",
        "../../etc/passwd.ogg",
        "/abs/call.ogg",
        "nested/call.ogg",
        "..\\call.ogg",
        "call\0.ogg",
    ] {
        assert_eq!(
            TranscriptionRequest::parse(name, "ogg"),
            Err(RequestNameError::InvalidName),
            "{name:?}"
        );
    }
}

#[test]
fn given_bare_extension_when_parsing_then_rejects_empty_stem() {
    assert_eq!(
        TranscriptionRequest::parse(".ogg", "ogg"),
        Err(RequestNameError::InvalidName)
    );
}

#[test]
fn given_request_when_displayed_then_shows_file_name() {
    let request = TranscriptionRequest::parse("call1.ogg", "ogg").unwrap();
    assert_eq!(request.to_string(), "call1.ogg");
}
