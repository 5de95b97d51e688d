//! ANSI color handling: name resolution and the preset per-level table.

use std::collections::HashMap;

use crate::level::Level;

/// Fallback color code (white), used for unknown names and unmapped levels.
pub const DEFAULT_COLOR: u8 = 37;

/// Convert a color name to its ANSI SGR code, case-insensitive.
///
/// Supports the standard colors, `gray`, the `light` variants, and
/// `bright white`. Unknown names resolve to white (37).
pub fn resolve_color(name: &str) -> u8 {
    match name.to_lowercase().as_str() {
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "yellow" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "white" => 37,
        "gray" => 90,
        "light red" | "light-red" => 91,
        "light green" | "light-green" => 92,
        "light yellow" | "light-yellow" => 93,
        "light blue" | "light-blue" => 94,
        "light magenta" | "light-magenta" => 95,
        "light cyan" | "light-cyan" => 96,
        "bright white" | "bright-white" => 97,
        _ => DEFAULT_COLOR,
    }
}

/// Preset level colors.
///
/// Returns a fresh copy per call so formatter instances never share a
/// mutable table.
pub fn default_colors() -> HashMap<Level, u8> {
    HashMap::from([
        (Level::Debug, 96), // light cyan
        (Level::Info, 32),  // green
        (Level::Warn, 33),  // yellow
        (Level::Error, 31), // red
        (Level::Fatal, 95), // light magenta
        (Level::Panic, 34), // blue
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_color_case_insensitive() {
        assert_eq!(resolve_color("red"), 31);
        assert_eq!(resolve_color("RED"), 31);
        assert_eq!(resolve_color("Red"), 31);
    }

    #[test]
    fn test_resolve_color_all_names() {
        assert_eq!(resolve_color("black"), 30);
        assert_eq!(resolve_color("green"), 32);
        assert_eq!(resolve_color("yellow"), 33);
        assert_eq!(resolve_color("blue"), 34);
        assert_eq!(resolve_color("magenta"), 35);
        assert_eq!(resolve_color("cyan"), 36);
        assert_eq!(resolve_color("white"), 37);
        assert_eq!(resolve_color("gray"), 90);
        assert_eq!(resolve_color("light red"), 91);
        assert_eq!(resolve_color("light green"), 92);
        assert_eq!(resolve_color("light yellow"), 93);
        assert_eq!(resolve_color("light blue"), 94);
        assert_eq!(resolve_color("light magenta"), 95);
        assert_eq!(resolve_color("light cyan"), 96);
        assert_eq!(resolve_color("bright white"), 97);
    }

    #[test]
    fn test_resolve_color_hyphenated_variants() {
        assert_eq!(resolve_color("light-cyan"), 96);
        assert_eq!(resolve_color("bright-white"), 97);
    }

    #[test]
    fn test_resolve_color_unknown_falls_back_to_white() {
        assert_eq!(resolve_color("unknown"), 37);
        assert_eq!(resolve_color(""), 37);
        assert_eq!(resolve_color("chartreuse"), 37);
    }

    #[test]
    fn test_default_colors_cover_every_level() {
        let colors = default_colors();
        for level in Level::ALL {
            assert!(colors.contains_key(&level), "No preset color for {level:?}");
        }
    }

    #[test]
    fn test_default_colors_fresh_copy() {
        let mut first = default_colors();
        first.insert(Level::Warn, 99);
        let second = default_colors();
        assert_eq!(second[&Level::Warn], 33);
    }
}
