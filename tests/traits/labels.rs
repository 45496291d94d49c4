use kirho::traits::{Labels, Printable};
use std::fmt;

struct Celsius(f32);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}C", self.0)
    }
}

fn render<L: Labels>(labels: L) -> String {
    labels.concat().to_string()
}

fn describe<P: Printable>(value: P) -> String {
    value.to_string()
}

#[test]
fn labels_concatenate_without_separator() {
    assert_eq!(render(("a", "b", "c")), "abc");
    assert_eq!(render(("sensor ", 3, " reads ", Celsius(21.5))), "sensor 3 reads 21.5C");
}

#[test]
fn single_values_are_labels() {
    assert_eq!(render("fixed message"), "fixed message");
    assert_eq!(render(&String::from("borrowed")), "borrowed");
    #[cfg(feature = "std")]
    assert_eq!(render(String::from("owned")), "owned");
    assert_eq!(render(&42), "42");
    assert_eq!(render(format_args!("{}-{}", 1, 2)), "1-2");
}

#[test]
fn empty_labels_render_nothing() {
    assert_eq!(render(()), "");
}

#[test]
fn owned_scalars_pass_as_one_tuples_or_references() {
    let code = 404;
    assert_eq!(render((code,)), "404");
    assert_eq!(render(&code), "404");
}

#[test]
fn twelve_labels_are_supported() {
    let labels = (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12);
    assert_eq!(render(labels), "123456789101112");
}

#[test]
fn concat_debug_quotes_the_line() {
    let labels = ("code ", 7);
    assert_eq!(format!("{:?}", labels.concat()), "\"code 7\"");
}

#[test]
fn any_display_type_is_printable() {
    assert_eq!(describe(Celsius(-3.0)), "-3.0C");
    assert_eq!(describe('x'), "x");
    assert_eq!(describe("str slice"), "str slice");
}
