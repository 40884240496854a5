use crate::config::Config;
use crate::driver::Driver;
use crate::parser::ParseMode;
use crate::repl::Session;

fn session() -> Session<i32> {
    Session::new(Driver::new(&Config::default()))
}

#[test]
fn eval_exit() {
    let mut session = session();
    assert!(matches!(session.eval(".exit"), Some(Ok(()))));
    assert!(matches!(session.eval("  .quit  "), Some(Ok(()))));
}

#[test]
fn eval_expression() {
    let mut session = session();
    assert!(session.eval("1 + 2 * 3").is_none());
    assert!(session.eval("1 + (2)").is_none());
    assert!(session.eval("").is_none());
}

#[test]
fn eval_error_does_not_end_session() {
    let mut session = session();
    assert!(session.eval("99999999999").is_none());
    assert!(session.eval("1").is_none());
}

#[test]
fn eval_commands() {
    let mut session = session();
    assert!(session.eval(".help").is_none());
    assert!(session.eval(".ops").is_none());

    assert!(session.eval(".flat").is_none());
    assert_eq!(session.driver().mode(), ParseMode::Flat);
    assert!(session.eval(".climb").is_none());
    assert_eq!(session.driver().mode(), ParseMode::Climbing);

    assert!(!session.driver().strict());
    assert!(session.eval(".strict").is_none());
    assert!(session.driver().strict());
    assert!(session.eval(".strict").is_none());
    assert!(!session.driver().strict());
}
