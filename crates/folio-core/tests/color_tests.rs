use folio_core::color::{palette_color, parse_hex_color, ColorParseError};
use folio_core::constants::{HEAD_LIGHT_COLORS, TUBE_COLORS};

#[test]
fn parses_full_hex_colors() {
    assert_eq!(parse_hex_color("#000000"), Ok([0.0, 0.0, 0.0]));
    assert_eq!(parse_hex_color("#ffffff"), Ok([1.0, 1.0, 1.0]));
    let cyan = parse_hex_color("#00ffff").unwrap();
    assert_eq!(cyan[0], 0.0);
    assert!((cyan[1] - 1.0).abs() < 1e-6);
    let purple = parse_hex_color("#8b5cf6").unwrap();
    assert!((purple[0] - 0x8b as f32 / 255.0).abs() < 1e-6);
}

#[test]
fn rejects_malformed_colors() {
    assert_eq!(parse_hex_color("#fff"), Err(ColorParseError::BadLength(4)));
    assert_eq!(parse_hex_color("00ffff"), Err(ColorParseError::BadLength(6)));
    assert!(matches!(
        parse_hex_color("#zzffff"),
        Err(ColorParseError::BadDigit(_))
    ));
}

#[test]
fn built_in_palettes_parse_cleanly() {
    for s in TUBE_COLORS.iter().chain(HEAD_LIGHT_COLORS.iter()) {
        assert!(parse_hex_color(s).is_ok(), "palette entry {s} failed");
        let c = palette_color(s);
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
