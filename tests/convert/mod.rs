use kirho::convert::{option_to_outcome, outcome_to_result, result_to_outcome};
use kirho::Outcome;
use std::cell::Cell;

#[test]
fn result_and_outcome_convert_both_ways() {
    let ok: Outcome<u8, String> = result_to_outcome(Ok(3));
    assert_eq!(ok, Outcome::Success(3));
    assert_eq!(outcome_to_result(ok), Ok(3));

    let err: Outcome<u8, &str> = Err("parse").into();
    assert_eq!(err, Outcome::Failure("parse"));

    let back: Result<u8, &str> = err.into();
    assert_eq!(back, Err("parse"));
}

#[test]
fn parse_errors_flow_into_outcomes() {
    let outcome = Outcome::from("x1".parse::<i64>());
    let mut error = None;
    outcome.handle_error(|e| error = Some(e.to_string()));
    assert_eq!(error.as_deref(), Some("invalid digit found in string"));
}

#[test]
fn option_to_outcome_only_builds_the_error_when_absent() {
    let built = Cell::new(0);
    let make_error = || {
        built.set(built.get() + 1);
        "absent"
    };

    assert_eq!(option_to_outcome(Some(1), make_error), Outcome::Success(1));
    assert_eq!(built.get(), 0);

    assert_eq!(option_to_outcome(None::<i32>, make_error), Outcome::Failure("absent"));
    assert_eq!(built.get(), 1);
}
