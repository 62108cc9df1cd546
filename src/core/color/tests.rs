use super::*;

#[test]
fn test_color_new() {
    let c = Color::new(1, 2, 3, 4);
    assert_eq!(c.r, 1);
    assert_eq!(c.to_array(), [1, 2, 3, 4]);
}

#[test]
fn test_color_trans() {
    let c = Color::transparent();
    assert_eq!(c.a, 0);
}

#[test]
fn test_color_hex_parse() {
    assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::opaque(255, 128, 0));
    assert_eq!(Color::from_hex("00FF7f").unwrap(), Color::opaque(0, 255, 127));
    assert_eq!(Color::from_hex("  #123456 ").unwrap().a, 255);
}

#[test]
fn test_color_hex_reject() {
    assert!(Color::from_hex("#fff").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
    assert!(Color::from_hex("").is_err());
    assert!(Color::from_hex("#ff00ff00").is_err());
    assert!(Color::from_hex("#é0000").is_err());
}

#[test]
fn test_color_hex_format() {
    assert_eq!(Color::opaque(255, 0, 10).to_hex(), "#ff000a");
    let c = Color::from_hex(&Color::opaque(9, 200, 33).to_hex()).unwrap();
    assert_eq!(c, Color::opaque(9, 200, 33));
}
