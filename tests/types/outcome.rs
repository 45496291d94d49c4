use kirho::Outcome;
use std::cell::Cell;

fn get_number(number: i32) -> Outcome<i32, i32> {
    if number == 69 {
        Outcome::success(420)
    } else {
        Outcome::error(666)
    }
}

#[test]
fn success_fills_success_slot_and_leaves_error_slot_untouched() {
    for value in [i32::MIN, -1, 0, 1, 420, i32::MAX] {
        let outcome = Outcome::<i32, i32>::success(value);

        let mut slot = -7;
        assert!(outcome.clone_success_into(&mut slot));
        assert_eq!(slot, value);

        let mut error_slot = -7;
        assert!(!outcome.clone_error_into(&mut error_slot));
        assert_eq!(error_slot, -7);
    }
}

#[test]
fn failure_fills_error_slot_and_leaves_success_slot_untouched() {
    for error in ["", "boom", "You failed"] {
        let outcome = Outcome::<String, &str>::error(error);

        let mut error_slot = "untouched";
        assert!(outcome.clone_error_into(&mut error_slot));
        assert_eq!(error_slot, error);

        let mut slot = String::from("untouched");
        assert!(!outcome.clone_success_into(&mut slot));
        assert_eq!(slot, "untouched");
    }
}

#[test]
fn borrowing_accessors_do_not_consume_the_outcome() {
    let outcome = Outcome::<Vec<u8>, ()>::success(vec![1, 2, 3]);

    let mut first = Vec::new();
    let mut second = Vec::new();
    assert!(outcome.clone_success_into(&mut first));
    assert!(outcome.clone_success_into(&mut second));

    assert_eq!(first, second);
    assert_eq!(outcome.to_optional(), Some(vec![1, 2, 3]));
}

#[test]
fn same_payload_type_discriminates_by_variant_not_content() {
    let success = Outcome::<i32, i32>::success(5);
    let failure = Outcome::<i32, i32>::error(5);

    assert!(success.is_success());
    assert!(failure.is_error());
    assert_ne!(success, failure);
}

#[test]
fn to_optional_keeps_value_and_drops_error() {
    assert_eq!(get_number(69).to_optional(), Some(420));
    assert_eq!(get_number(1).to_optional(), None);
    assert_eq!(Outcome::<&str, String>::error("detail".into()).to_optional(), None);
}

#[test]
fn error_value_is_the_mirror_of_to_optional() {
    assert_eq!(get_number(1).error_value(), Some(666));
    assert_eq!(get_number(69).error_value(), None);
}

#[test]
fn unwrap_returns_success_payload() {
    assert_eq!(get_number(69).unwrap(), 420);
}

#[test]
fn unwrap_or_abort_returns_success_payload() {
    assert_eq!(get_number(69).unwrap_or_abort("hello you suck bozo llll"), 420);
    assert_eq!(get_number(69).unwrap_or_abort(("lookup of ", 69, " failed")), 420);
    assert_eq!(get_number(69).unwrap_or_abort(format_args!("lookup of {}", 69)), 420);
    assert_eq!(get_number(69).unwrap_or_abort(()), 420);
    assert_eq!(get_number(69).unwrap_or_abort(&69), 420);
    #[cfg(feature = "std")]
    assert_eq!(get_number(69).unwrap_or_abort(String::from("owned label")), 420);
}

#[test]
fn handle_error_runs_once_with_the_exact_payload() {
    let calls = Cell::new(0);
    let mut seen = None;

    Outcome::<i32, &str>::error("You failed, you bozo. :joy_cat:").handle_error(|error| {
        calls.set(calls.get() + 1);
        seen = Some(error);
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(seen, Some("You failed, you bozo. :joy_cat:"));
}

#[test]
fn handle_error_infers_the_closure_parameter_type() {
    let mut seen = String::new();
    Outcome::<i32, &str>::error("boom").handle_error(|e| seen = e.to_uppercase());
    assert_eq!(seen, "BOOM");

    let mut digits = 0;
    get_number(1).handle_error(|code| digits = code.to_string().len());
    assert_eq!(digits, 3);
}

#[test]
fn handle_error_is_silent_on_success() {
    let mut is_error = false;
    Outcome::<i32, &str>::success(16).handle_error(|_| is_error = true);
    assert!(!is_error);
}

#[test]
fn handle_error_accepts_function_items() {
    fn record(code: i32) {
        assert_eq!(code, 666);
    }

    get_number(1).handle_error(record);
}

#[test]
fn combinators_follow_the_active_variant() {
    let mapped = get_number(69).map(|v| v + 1).map_error(|e| e.to_string());
    assert_eq!(mapped, Outcome::Success(421));

    let mapped = get_number(1).map(|v| v + 1).map_error(|e| e.to_string());
    assert_eq!(mapped, Outcome::Failure("666".to_string()));

    let chained = get_number(69).and_then(|v| get_number(v - 351));
    assert_eq!(chained, Outcome::Success(420));

    let recovered = get_number(1).or_else(|e| Outcome::<i32, ()>::success(e * 2));
    assert_eq!(recovered, Outcome::Success(1332));
}

#[test]
fn and_then_skips_the_continuation_on_failure() {
    let called = Cell::new(false);
    let outcome = get_number(1).and_then(|v| {
        called.set(true);
        Outcome::<i32, i32>::success(v)
    });

    assert!(!called.get());
    assert_eq!(outcome, Outcome::Failure(666));
}

#[test]
fn defaults_apply_only_on_failure() {
    assert_eq!(get_number(69).unwrap_or(0), 420);
    assert_eq!(get_number(1).unwrap_or(0), 0);
    assert_eq!(get_number(1).unwrap_or_else(|e| e + 1), 667);
}

#[test]
fn as_ref_and_as_mut_borrow_the_payload() {
    let mut outcome = Outcome::<String, u8>::success("draft".to_string());
    assert_eq!(outcome.as_ref().map(String::len), Outcome::Success(5));

    if let Outcome::Success(text) = outcome.as_mut() {
        text.push_str(" final");
    }
    assert_eq!(outcome.unwrap(), "draft final");
}

#[test]
fn from_option_picks_the_variant_from_presence() {
    assert_eq!(Outcome::from_option(Some(1), "none"), Outcome::Success(1));
    assert_eq!(Outcome::from_option(None::<i32>, "none"), Outcome::Failure("none"));
}
