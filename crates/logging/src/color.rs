//! crates/logging/src/color.rs
//! Deterministic colour assignment for namespaces.

/// ANSI colours used when the terminal supports only the basic set.
pub const DEFAULT_PALETTE: [u8; 6] = [6, 2, 3, 4, 5, 1];

/// 256-colour palette for terminals that support extended colours.
pub const EXTENDED_PALETTE: [u8; 76] = [
    20, 21, 26, 27, 32, 33, 38, 39, 40, 41, 42, 43, 44, 45, 56, 57, 62, 63, 68, 69, 74, 75, 76, 77,
    78, 79, 80, 81, 92, 93, 98, 99, 112, 113, 128, 129, 134, 135, 148, 149, 160, 161, 162, 163, 164,
    165, 166, 167, 168, 169, 170, 171, 172, 173, 178, 179, 184, 185, 196, 197, 198, 199, 200, 201,
    202, 203, 204, 205, 206, 207, 208, 209, 214, 215, 220, 221,
];

/// Picks a colour for `namespace` from `palette`.
///
/// The namespace is hashed over its UTF-16 code units with the 32-bit
/// wrapping recurrence `h = (h << 5) - h + unit`, and the absolute value of
/// the hash indexes the palette. The same namespace always receives the same
/// colour for a given palette. An empty palette yields `0`.
///
/// ```
/// use logging::{DEFAULT_PALETTE, select_color};
///
/// let color = select_color("worker:a", &DEFAULT_PALETTE);
/// assert_eq!(color, select_color("worker:a", &DEFAULT_PALETTE));
/// assert!(DEFAULT_PALETTE.contains(&color));
/// ```
#[must_use]
pub fn select_color(namespace: &str, palette: &[u8]) -> u8 {
    if palette.is_empty() {
        return 0;
    }

    let hash = namespace.encode_utf16().fold(0_i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    });

    palette[hash.unsigned_abs() as usize % palette.len()]
}
