use libmozzi_table::{make_symmetrical, map_range, BitWidth};

#[test]
fn test_without_trigger_value_nothing_changes() {
    let values = vec![-128, -1, 0, 1, 128];
    let (out, applied) = make_symmetrical(values.clone(), BitWidth::Bits8);
    assert_eq!(out, values);
    assert!(!applied);
}

#[test]
fn test_trigger_value_maps_to_negative_max() {
    let (out, applied) = make_symmetrical(vec![-129, 0, 128], BitWidth::Bits8);
    assert!(applied);
    assert_eq!(out[0], -128);
    assert_eq!(out[2], 128);
}

#[test]
fn test_remap_keeps_everything_in_range() {
    let values: Vec<i64> = (-129..=128).collect();
    let (out, applied) = make_symmetrical(values, BitWidth::Bits8);
    assert!(applied);
    assert_eq!(out.len(), 258);
    assert!(out.iter().all(|&v| (-128..=128).contains(&v)));
    assert_eq!(out.first(), Some(&-128));
    assert_eq!(out.last(), Some(&128));
}

#[test]
fn test_remap_touches_the_whole_sequence() {
    // 64 -> (193 * 256) / 257 - 128 = 64.25..., truncated to 64
    // -64 -> (65 * 256) / 257 - 128 = -63.25..., truncated to -63
    let (out, _) = make_symmetrical(vec![-129, 64, -64], BitWidth::Bits8);
    assert_eq!(out, vec![-128, 64, -63]);
}

#[test]
fn test_remap_is_monotonic() {
    let values: Vec<i64> = (-129..=128).collect();
    let (out, _) = make_symmetrical(values, BitWidth::Bits8);
    assert!(out.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_16bit_trigger() {
    let (out, applied) = make_symmetrical(vec![-32769, 32768], BitWidth::Bits16);
    assert!(applied);
    assert_eq!(out, vec![-32768, 32768]);
}

#[test]
fn test_32bit_endpoints_are_exact() {
    let max = 2147483648i64;
    let (out, applied) = make_symmetrical(vec![-max - 1, 0, max], BitWidth::Bits32);
    assert!(applied);
    assert_eq!(out[0], -max);
    assert_eq!(out[1], 0);
    assert_eq!(out[2], max);
}

#[test]
fn test_map_range_linear() {
    assert_eq!(map_range(5, 0, 10, 0, 100), 50);
    assert_eq!(map_range(0, 0, 10, -100, 100), -100);
    assert_eq!(map_range(10, 0, 10, -100, 100), 100);
    // -1.5 truncates toward zero
    assert_eq!(map_range(1, 0, 4, -2, 0), -1);
}

#[test]
fn test_map_range_degenerate_domain() {
    assert_eq!(map_range(3, 3, 3, -7, 7), -7);
}

#[test]
fn test_map_range_exact_at_32_bits() {
    let max = 2147483648i64;
    let remap = |v| map_range(v, -max - 1, max, -max, max);

    assert_eq!(remap(max - 1), 2147483647);
    assert_eq!(remap(-max), -2147483647);
    assert_eq!(remap(1), 1);
    assert_eq!(remap(0), 0);
    // -0.4999... truncates toward zero
    assert_eq!(remap(-1), 0);
}
