/// Source-over composite of `fg` onto `bg`, with `fg`'s alpha scaled by `opacity`.
#[inline(always)]
pub fn blend_pixels(bg: [u8; 4], fg: [u8; 4], opacity: u8) -> [u8; 4] {
    let src_a = (fg[3] as u32 * opacity as u32) / 255;
    if src_a == 0 { return bg; }
    if src_a == 255 { return [fg[0], fg[1], fg[2], 255]; }
    let inv_a = 255 - src_a;

    let mix = |f: u8, b: u8| ((f as u32 * src_a + b as u32 * inv_a) / 255) as u8;
    [
        mix(fg[0], bg[0]),
        mix(fg[1], bg[1]),
        mix(fg[2], bg[2]),
        (src_a + (bg[3] as u32 * inv_a) / 255) as u8,
    ]
}
