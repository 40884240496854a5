use crate::parser::Cursor;
use crate::util::Location;

#[test]
fn observe_and_read() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.observe(), Some('a'));
    assert_eq!(cursor.read(), Some('a'));
    assert_eq!(cursor.observe(), Some('b'));
    assert_eq!(cursor.read(), Some('b'));
    assert!(cursor.at_end());
    assert_eq!(cursor.observe(), None);
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn advance_at_end_does_nothing() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.remainder(), "");
}

#[test]
fn empty_text() {
    let cursor = Cursor::new("");
    assert!(cursor.at_end());
    assert_eq!(cursor.observe(), None);
}

#[test]
fn multibyte_chars() {
    let mut cursor = Cursor::new("é+");
    assert_eq!(cursor.read(), Some('é'));
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.observe(), Some('+'));
    assert_eq!(cursor.loc(), Location::new(1, 2));
}

#[test]
fn commit_keeps_position() {
    let mut cursor = Cursor::new("abc");
    cursor.push_checkpoint();
    cursor.read();
    cursor.read();
    assert_eq!(cursor.checkpoint_depth(), 1);
    assert!(cursor.commit_checkpoint().is_ok());
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.checkpoint_depth(), 0);
}

#[test]
fn rollback_restores_position() {
    let mut cursor = Cursor::new("abc");
    cursor.read();
    cursor.push_checkpoint();
    cursor.read();
    cursor.read();
    assert!(cursor.rollback_checkpoint().is_ok());
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.observe(), Some('b'));
    assert_eq!(cursor.checkpoint_depth(), 0);
}

#[test]
fn nested_checkpoints() {
    let mut cursor = Cursor::new("abcd");
    cursor.push_checkpoint(); // 0
    cursor.read();
    cursor.push_checkpoint(); // 1
    cursor.read();
    cursor.read();
    assert_eq!(cursor.checkpoint_depth(), 2);
    assert!(cursor.rollback_checkpoint().is_ok());
    assert_eq!(cursor.position(), 1);
    assert!(cursor.commit_checkpoint().is_ok());
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.checkpoint_depth(), 0);
}

#[test]
fn text_since_checkpoint() {
    let mut cursor = Cursor::new("12+3");
    cursor.push_checkpoint();
    assert_eq!(cursor.text_since_checkpoint(), Ok(""));
    cursor.read();
    cursor.read();
    assert_eq!(cursor.text_since_checkpoint(), Ok("12"));
    // Doesn't pop.
    assert_eq!(cursor.checkpoint_depth(), 1);
}

#[test]
fn unbalanced_checkpoints_are_internal_errors() {
    let mut cursor = Cursor::new("1");
    assert!(cursor.commit_checkpoint().unwrap_err().is_internal());
    assert!(cursor.rollback_checkpoint().unwrap_err().is_internal());
    assert!(cursor.text_since_checkpoint().unwrap_err().is_internal());
}

#[test]
fn skip_whitespace() {
    let mut cursor = Cursor::new(" \t\r\n x");
    assert!(cursor.skip_whitespace());
    assert_eq!(cursor.observe(), Some('x'));
    assert!(!cursor.skip_whitespace());
    assert_eq!(cursor.observe(), Some('x'));
}

#[test]
fn location() {
    let mut cursor = Cursor::new("1\n 2");
    assert_eq!(cursor.loc(), Location::new(1, 1));
    cursor.read();
    cursor.read();
    cursor.read();
    assert_eq!(cursor.loc(), Location::new(2, 2));
    assert_eq!(cursor.loc().to_string(), "2:2");
}

#[test]
fn location_crlf() {
    assert_eq!(Location::from_offset("1\r\n2", 3), Location::new(2, 1));
    assert_eq!(Location::from_offset("1\r2", 2), Location::new(2, 1));
}
