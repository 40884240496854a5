use crate::config::{Config, IntWidth};
use crate::driver::{self, Driver, Input};
use crate::parser::ParseMode;
use crate::result::DriverErrKind;

fn driver(strict: bool) -> Driver {
    let config = Config { strict, ..Config::default() };
    Driver::new(&config)
}

#[test]
fn render_expression() {
    let driver = driver(false);
    let rendering = driver.render("1 + 2 * 3").unwrap();
    assert_eq!(rendering.as_deref(), Some("(1 + (2 * 3))"));
}

#[test]
fn render_partial_input() {
    let driver = driver(false);
    let rendering = driver.render("1 + (2)").unwrap();
    assert_eq!(rendering.as_deref(), Some("1"));
    assert_eq!(driver.render("").unwrap(), None);
    assert_eq!(driver.render("?").unwrap(), None);
}

#[test]
fn strict_mode_rejects_unconsumed_input() {
    let driver = driver(true);
    let err = driver.render("1 + (2)").unwrap_err();
    match &err.kind {
        DriverErrKind::UnconsumedInput(loc, rest) => {
            assert_eq!(loc.to_string(), "1:5");
            assert_eq!(rest, "(2)");
        }
        kind => panic!("Unexpected error kind: {kind:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert!(driver.render("1 + 2  ").is_ok());
}

#[test]
fn strict_mode_rejects_dropped_operator() {
    let err = driver(true).render("1 +").unwrap_err();
    match &err.kind {
        DriverErrKind::DroppedOperator(loc) => assert_eq!(loc.to_string(), "1:3"),
        kind => panic!("Unexpected error kind: {kind:?}"),
    }
    assert_eq!(err.exit_code(), 1);

    let err = driver(true).render("1 + 2 * + 3").unwrap_err();
    assert!(matches!(err.kind, DriverErrKind::DroppedOperator(_)));

    let rendering = driver(false).render("1 +").unwrap();
    assert_eq!(rendering.as_deref(), Some("1"));
}

#[test]
fn strict_mode_rejects_missing_expression() {
    let driver = driver(true);
    let err = driver.render("   ").unwrap_err();
    assert!(matches!(err.kind, DriverErrKind::NoExpression));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn flat_mode() {
    let mut driver = driver(false);
    assert_eq!(driver.mode(), ParseMode::Climbing);
    driver.set_mode(ParseMode::Flat);
    let rendering = driver.render("1 + 2 * 3").unwrap();
    assert_eq!(rendering.as_deref(), Some("((1 + 2) * 3)"));
}

#[test]
fn literal_width() {
    let config = Config::default();
    let driver = Driver::<i8>::new(&config);
    assert_eq!(driver.render("127 - 1").unwrap().as_deref(), Some("(127 - 1)"));

    let err = driver.render("1 + 128").unwrap_err();
    assert!(matches!(&err.kind, DriverErrKind::Parse(err) if err.is_overflow()));
    assert_eq!(err.exit_code(), 1);

    let driver = Driver::<i128>::new(&config);
    let big = "170141183460469231731687303715884105727";
    assert_eq!(driver.render(big).unwrap().as_deref(), Some(big));
}

#[test]
fn run_with_int_width() {
    let config = Config { int_width: IntWidth::I8, ..Config::default() };
    let err = driver::run(&config, Input::Code("300".to_owned())).unwrap_err();
    assert!(matches!(&err.kind, DriverErrKind::Parse(err) if err.is_overflow()));

    let config = Config { int_width: IntWidth::I16, ..Config::default() };
    assert!(driver::run(&config, Input::Code("300".to_owned())).is_ok());
}

#[test]
fn internal_error_exit_code() {
    let err = driver(false).render("007").unwrap_err();
    assert_eq!(err.exit_code(), 70);
}

#[test]
fn missing_source_file() {
    let err = driver(false).execute_file("/no/such/dir/expr.txt").unwrap_err();
    assert!(matches!(err.kind, DriverErrKind::CouldNotReadSourceFile(..)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn max_depth_from_config() {
    let config = Config { max_depth: 1, ..Config::default() };
    let driver: Driver = Driver::new(&config);
    assert_eq!(driver.parser().max_depth(), 1);
    assert!(driver.render("1 + 2").is_err());
    assert!(driver.render("1").is_ok());
}
