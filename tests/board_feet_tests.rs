use timberops::core::board_feet::{
    board_feet, derive_unit, format_board_feet, parse_board_feet_unit, parse_input,
};

#[test]
fn test_pine_cutting_example() {
    assert_eq!(
        derive_unit("144", "12", "1", "10").as_deref(),
        Some("120.00 BF")
    );
}

#[test]
fn test_cedar_planking_example() {
    assert_eq!(
        derive_unit("96", "8", "1.5", "50").as_deref(),
        Some("400.00 BF")
    );
}

#[test]
fn test_half_cent_rounds_up() {
    // 18 cubic inches = 0.125 BF
    assert_eq!(derive_unit("3", "3", "2", "1").as_deref(), Some("0.13 BF"));
    assert_eq!(format_board_feet(0.125), "0.13 BF");
}

#[test]
fn test_missing_or_non_positive_inputs_give_nothing() {
    assert_eq!(derive_unit("", "12", "1", "10"), None);
    assert_eq!(derive_unit("144", "0", "1", "10"), None);
    assert_eq!(derive_unit("144", "12", "-1", "10"), None);
    assert_eq!(derive_unit("144", "12", "1", "abc"), None);
    assert_eq!(board_feet(144.0, 12.0, 1.0, 0.0), None);
}

#[test]
fn test_parse_input_trims_and_rejects_garbage() {
    assert_eq!(parse_input("  12.5 "), Some(12.5));
    assert_eq!(parse_input("   "), None);
    assert_eq!(parse_input("12in"), None);
    assert_eq!(parse_input("inf"), None);
}

#[test]
fn test_board_feet_unit_reads_back() {
    assert_eq!(parse_board_feet_unit("120.00 BF"), Some(120.0));
    assert_eq!(parse_board_feet_unit("loads"), None);
}

#[test]
fn test_overflowing_product_is_not_derived() {
    assert_eq!(board_feet(1e300, 1e300, 1.0, 1.0), None);
    assert_eq!(derive_unit("1e300", "1e300", "1", "1"), None);
}
