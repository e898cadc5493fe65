use super::OutputWriter;
use crate::error::LoginError;
use crate::http::response::Cookie;

fn rendered(writer: OutputWriter<Vec<u8>>) -> String {
    String::from_utf8(writer.into_inner()).expect("utf8 output")
}

#[test]
fn write_body_appends_newline() {
    let mut writer = OutputWriter::new(Vec::new());
    writer.write_body(b"OK").expect("write");
    assert_eq!(rendered(writer), "OK\n");
}

#[test]
fn write_body_keeps_control_characters() {
    let mut writer = OutputWriter::new(Vec::new());
    writer.write_body(b"line1\r\nline2\t\x07").expect("write");
    assert_eq!(writer.into_inner(), b"line1\r\nline2\t\x07\n".to_vec());
}

#[test]
fn write_body_empty_prints_blank_line() {
    let mut writer = OutputWriter::new(Vec::new());
    writer.write_body(b"").expect("write");
    assert_eq!(rendered(writer), "\n");
}

#[test]
fn write_cookies_uses_labels_in_order() {
    let mut writer = OutputWriter::new(Vec::new());
    writer
        .write_cookies(&[Cookie::new("session", "abc123"), Cookie::new("lang", "en")])
        .expect("write");
    assert_eq!(
        rendered(writer),
        "Cookie Name:  session\nCookie Value:  abc123\n\
         Cookie Name:  lang\nCookie Value:  en\n"
    );
}

#[test]
fn write_cookies_empty_writes_nothing() {
    let mut writer = OutputWriter::new(Vec::new());
    writer.write_cookies(&[]).expect("write");
    assert!(rendered(writer).is_empty());
}

#[test]
fn write_error_prints_message_line() {
    let mut writer = OutputWriter::new(Vec::new());
    writer.write_error(&LoginError::InvalidUrl("'x': bad".to_string()));
    assert_eq!(rendered(writer), "Invalid URL: 'x': bad\n");
}
