// File: crates/indicator-core/tests/numeric.rs
// Purpose: Lenient number/integer coercion used for cells, year keys and selector input.

use indicator_core::numeric::{leading_int, leading_int_saturating, leading_number};

#[test]
fn numbers_from_cells() {
    assert_eq!(leading_number("10"), Some(10.0));
    assert_eq!(leading_number("  3.5 "), Some(3.5));
    assert_eq!(leading_number("-2e3"), Some(-2000.0));
    assert_eq!(leading_number(".5"), Some(0.5));
    assert_eq!(leading_number("12.5*"), Some(12.5));
    assert_eq!(leading_number("1e"), Some(1.0));
    assert_eq!(leading_number("7."), Some(7.0));
    assert_eq!(leading_number("0"), Some(0.0));
    assert_eq!(leading_number("-Infinity"), Some(f64::NEG_INFINITY));
}

#[test]
fn non_numbers_from_cells() {
    for cell in ["", "   ", "..", "n/a", "abc", "-", ".", "NaN", "e5"] {
        assert_eq!(leading_number(cell), None, "cell {cell:?}");
    }
}

#[test]
fn integers_from_keys_and_input() {
    assert_eq!(leading_int("1995"), Some(1995));
    assert_eq!(leading_int(" 42abc"), Some(42));
    assert_eq!(leading_int("-3"), Some(-3));
    assert_eq!(leading_int("+8"), Some(8));
    assert_eq!(leading_int("2.9"), Some(2));
    assert_eq!(leading_int("x1"), None);
    assert_eq!(leading_int(""), None);
    assert_eq!(leading_int("-"), None);
    assert_eq!(leading_int("99999999999999999999"), None);
}

#[test]
fn saturating_integers_clamp_on_overflow() {
    assert_eq!(leading_int_saturating("42"), Some(42));
    assert_eq!(leading_int_saturating("99999999999999999999"), Some(i64::MAX));
    assert_eq!(leading_int_saturating("-99999999999999999999x"), Some(i64::MIN));
    assert_eq!(leading_int_saturating("abc"), None);
}
