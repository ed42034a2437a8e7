//! Theme catalog
//!
//! The fixed set of named palettes. Entries are `const` so they can be used
//! in patterns and static tables; [`named`] resolves a catalog name through a
//! hash index built on first use.

use crate::Theme;
use kestrel_core::rgb8;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

pub const OCEAN_BLUE: Theme = Theme {
    name: "ocean-blue",
    keyboard_background_color: rgb8!(1, 70, 112),
    primary_background_color: rgb8!(3, 86, 136),
    secondary_background_color: rgb8!(0, 56, 90),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(3, 86, 136),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const BRIGHT_PURPLE: Theme = Theme {
    name: "bright-purple",
    keyboard_background_color: rgb8!(255, 213, 109),
    primary_background_color: rgb8!(162, 138, 200),
    secondary_background_color: rgb8!(250, 95, 38),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(162, 138, 200),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const AUTUMN: Theme = Theme {
    name: "autumn",
    keyboard_background_color: rgb8!(115, 13, 86),
    primary_background_color: rgb8!(225, 95, 27),
    secondary_background_color: rgb8!(225, 199, 4),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(225, 95, 27),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const LEAF: Theme = Theme {
    name: "leaf",
    keyboard_background_color: rgb8!(202, 224, 158),
    primary_background_color: rgb8!(254, 225, 228),
    secondary_background_color: rgb8!(165, 191, 141),
    primary_foreground_color: rgb8!(125, 127, 115),
    callout_background_color: rgb8!(254, 225, 228),
    callout_foreground_color: rgb8!(125, 127, 115),
};

pub const LEMON: Theme = Theme {
    name: "lemon",
    keyboard_background_color: rgb8!(211, 234, 255),
    primary_background_color: rgb8!(255, 255, 190),
    secondary_background_color: rgb8!(249, 230, 0),
    primary_foreground_color: rgb8!(170, 162, 154),
    callout_background_color: rgb8!(255, 255, 190),
    callout_foreground_color: rgb8!(170, 162, 154),
};

pub const PINK: Theme = Theme {
    name: "pink",
    keyboard_background_color: rgb8!(254, 230, 246),
    primary_background_color: rgb8!(255, 213, 237),
    secondary_background_color: rgb8!(244, 194, 223),
    primary_foreground_color: rgb8!(155, 155, 155),
    callout_background_color: rgb8!(255, 213, 237),
    callout_foreground_color: rgb8!(155, 155, 155),
};

pub const LIGHT_BLUE: Theme = Theme {
    name: "light-blue",
    keyboard_background_color: rgb8!(232, 242, 254),
    primary_background_color: rgb8!(201, 221, 224),
    secondary_background_color: rgb8!(189, 213, 249),
    primary_foreground_color: rgb8!(166, 166, 168),
    callout_background_color: rgb8!(201, 221, 224),
    callout_foreground_color: rgb8!(166, 166, 168),
};

pub const PASTLE_BLUE_AND_GREEN: Theme = Theme {
    name: "pastle-blue-and-green",
    keyboard_background_color: rgb8!(237, 183, 196),
    primary_background_color: rgb8!(177, 222, 184),
    secondary_background_color: rgb8!(166, 213, 229),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(177, 222, 184),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const DAGOBAH_GREEN: Theme = Theme {
    name: "dagobah-green",
    keyboard_background_color: rgb8!(13, 154, 144),
    primary_background_color: rgb8!(0, 184, 171),
    secondary_background_color: rgb8!(11, 141, 132),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(0, 184, 171),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const CLASSIC_TURQUOISE: Theme = Theme {
    name: "classic-turquoise",
    keyboard_background_color: rgb8!(65, 197, 215),
    primary_background_color: rgb8!(27, 176, 195),
    secondary_background_color: rgb8!(20, 146, 163),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(27, 176, 195),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const BRIGHT_BLUE: Theme = Theme {
    name: "bright-blue",
    keyboard_background_color: rgb8!(0, 143, 176),
    primary_background_color: rgb8!(0, 181, 224),
    secondary_background_color: rgb8!(0, 111, 137),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(0, 181, 224),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const CLASSIC_BLUE: Theme = Theme {
    name: "classic-blue",
    keyboard_background_color: rgb8!(47, 144, 203),
    primary_background_color: rgb8!(59, 133, 231),
    secondary_background_color: rgb8!(28, 87, 163),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(59, 133, 231),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const GOLD: Theme = Theme {
    name: "gold",
    keyboard_background_color: rgb8!(213, 155, 58),
    primary_background_color: rgb8!(247, 189, 83),
    secondary_background_color: rgb8!(194, 141, 49),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(247, 189, 83),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const MAGICAL_PURPLE: Theme = Theme {
    name: "magical-purple",
    keyboard_background_color: rgb8!(218, 183, 222),
    primary_background_color: rgb8!(236, 219, 238),
    secondary_background_color: rgb8!(154, 141, 197),
    primary_foreground_color: rgb8!(255, 246, 255),
    callout_background_color: rgb8!(236, 219, 238),
    callout_foreground_color: rgb8!(255, 246, 255),
};

pub const FAIRY_PURPLE: Theme = Theme {
    name: "fairy-purple",
    keyboard_background_color: rgb8!(218, 183, 222),
    primary_background_color: rgb8!(236, 219, 238),
    secondary_background_color: rgb8!(154, 141, 197),
    primary_foreground_color: rgb8!(255, 246, 255),
    callout_background_color: rgb8!(236, 219, 238),
    callout_foreground_color: rgb8!(255, 246, 255),
};

pub const DARK_PURPLE: Theme = Theme {
    name: "dark-purple",
    keyboard_background_color: rgb8!(62, 23, 114),
    primary_background_color: rgb8!(82, 28, 158),
    secondary_background_color: rgb8!(54, 16, 95),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(82, 28, 158),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const VERY_DARK_PURPLE: Theme = Theme {
    name: "very-dark-purple",
    keyboard_background_color: rgb8!(14, 0, 85),
    primary_background_color: rgb8!(40, 28, 116),
    secondary_background_color: rgb8!(6, 0, 59),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(40, 28, 116),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const WATERMELON_RED: Theme = Theme {
    name: "watermelon-red",
    keyboard_background_color: rgb8!(233, 92, 92),
    primary_background_color: rgb8!(255, 120, 118),
    secondary_background_color: rgb8!(202, 68, 65),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(255, 120, 118),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const BLUSH_PINK: Theme = Theme {
    name: "blush-pink",
    keyboard_background_color: rgb8!(255, 206, 206),
    primary_background_color: rgb8!(244, 178, 177),
    secondary_background_color: rgb8!(201, 127, 134),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(244, 178, 177),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const PEACH: Theme = Theme {
    name: "peach",
    keyboard_background_color: rgb8!(167, 171, 147),
    primary_background_color: rgb8!(255, 180, 154),
    secondary_background_color: rgb8!(255, 141, 102),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(255, 180, 154),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const CHERRY_PINK: Theme = Theme {
    name: "cherry-pink",
    keyboard_background_color: rgb8!(255, 82, 120),
    primary_background_color: rgb8!(222, 66, 98),
    secondary_background_color: rgb8!(195, 51, 82),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(222, 66, 98),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const BRIGHT_PINK: Theme = Theme {
    name: "bright-pink",
    keyboard_background_color: rgb8!(151, 35, 160),
    primary_background_color: rgb8!(216, 63, 224),
    secondary_background_color: rgb8!(145, 32, 150),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(216, 63, 224),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const AUTUMN_CAMEL: Theme = Theme {
    name: "autumn-camel",
    keyboard_background_color: rgb8!(150, 153, 161),
    primary_background_color: rgb8!(233, 194, 143),
    secondary_background_color: rgb8!(183, 135, 108),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(233, 194, 143),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const GRAPHITE: Theme = Theme {
    name: "graphite",
    keyboard_background_color: rgb8!(192, 190, 179),
    primary_background_color: rgb8!(70, 68, 64),
    secondary_background_color: rgb8!(130, 126, 118),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(70, 68, 64),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const PACIFIC_BLUE: Theme = Theme {
    name: "pacific-blue",
    keyboard_background_color: rgb8!(155, 182, 193),
    primary_background_color: rgb8!(52, 79, 93),
    secondary_background_color: rgb8!(104, 132, 145),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(52, 79, 93),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const MIDNIGHT_GREEN: Theme = Theme {
    name: "midnight-green",
    keyboard_background_color: rgb8!(123, 132, 119),
    primary_background_color: rgb8!(62, 72, 64),
    secondary_background_color: rgb8!(147, 156, 144),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(62, 72, 64),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const VIOLET: Theme = Theme {
    name: "violet",
    keyboard_background_color: rgb8!(197, 189, 210),
    primary_background_color: rgb8!(224, 221, 240),
    secondary_background_color: rgb8!(178, 183, 220),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(224, 221, 240),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const RETRO: Theme = Theme {
    name: "retro",
    keyboard_background_color: rgb8!(146, 115, 82),
    primary_background_color: rgb8!(202, 159, 128),
    secondary_background_color: rgb8!(208, 180, 157),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(202, 159, 128),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const DARK_DARK: Theme = Theme {
    name: "dark-dark",
    keyboard_background_color: rgb8!(3, 3, 3),
    primary_background_color: rgb8!(37, 37, 37),
    secondary_background_color: rgb8!(19, 19, 19),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(37, 37, 37),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const DARK_AND_RED: Theme = Theme {
    name: "dark-and-red",
    keyboard_background_color: rgb8!(11, 11, 11),
    primary_background_color: rgb8!(40, 40, 40),
    secondary_background_color: rgb8!(171, 0, 0),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(40, 40, 40),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const DARK_AND_GREEN: Theme = Theme {
    name: "dark-and-green",
    keyboard_background_color: rgb8!(11, 11, 11),
    primary_background_color: rgb8!(40, 40, 40),
    secondary_background_color: rgb8!(0, 128, 15),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(40, 40, 40),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const DARK_AND_BLUE: Theme = Theme {
    name: "dark-and-blue",
    keyboard_background_color: rgb8!(11, 11, 11),
    primary_background_color: rgb8!(40, 40, 40),
    secondary_background_color: rgb8!(0, 101, 162),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(40, 40, 40),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const VERY_DARK_GRAY: Theme = Theme {
    name: "very-dark-gray",
    keyboard_background_color: rgb8!(26, 27, 33),
    primary_background_color: rgb8!(39, 40, 46),
    secondary_background_color: rgb8!(15, 16, 25),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(39, 40, 46),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const VERY_DARK_BLUE: Theme = Theme {
    name: "very-dark-blue",
    keyboard_background_color: rgb8!(14, 2, 47),
    primary_background_color: rgb8!(62, 61, 82),
    secondary_background_color: rgb8!(40, 34, 56),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(62, 61, 82),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const ALMOST_BLACK: Theme = Theme {
    name: "almost-black",
    keyboard_background_color: rgb8!(39, 40, 46),
    primary_background_color: rgb8!(26, 27, 33),
    secondary_background_color: rgb8!(15, 16, 25),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(26, 27, 33),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const DARK_PURPLE_SHADOW: Theme = Theme {
    name: "dark-purple-shadow",
    keyboard_background_color: rgb8!(0, 7, 19),
    primary_background_color: rgb8!(24, 33, 48),
    secondary_background_color: rgb8!(20, 37, 59),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(24, 33, 48),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const BLACK_BLACK: Theme = Theme {
    name: "black-black",
    keyboard_background_color: rgb8!(16, 17, 26),
    primary_background_color: rgb8!(16, 17, 26),
    secondary_background_color: rgb8!(15, 16, 26),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(16, 17, 26),
    callout_foreground_color: rgb8!(255, 255, 255),
};

pub const SOFT_BLUE: Theme = Theme {
    name: "soft-blue",
    keyboard_background_color: rgb8!(255, 255, 255),
    primary_background_color: rgb8!(255, 255, 255),
    secondary_background_color: rgb8!(236, 244, 255),
    primary_foreground_color: rgb8!(60, 90, 139),
    callout_background_color: rgb8!(255, 255, 255),
    callout_foreground_color: rgb8!(60, 90, 139),
};

pub const SOFT_GRAY: Theme = Theme {
    name: "soft-gray",
    keyboard_background_color: rgb8!(255, 255, 255),
    primary_background_color: rgb8!(255, 255, 255),
    secondary_background_color: rgb8!(244, 248, 255),
    primary_foreground_color: rgb8!(247, 247, 247),
    callout_background_color: rgb8!(255, 255, 255),
    callout_foreground_color: rgb8!(247, 247, 247),
};

pub const SOFT_PURPLE: Theme = Theme {
    name: "soft-purple",
    keyboard_background_color: rgb8!(248, 253, 255),
    primary_background_color: rgb8!(255, 255, 255),
    secondary_background_color: rgb8!(234, 239, 255),
    primary_foreground_color: rgb8!(121, 135, 255),
    callout_background_color: rgb8!(255, 255, 255),
    callout_foreground_color: rgb8!(121, 135, 255),
};

pub const SOFT_BRIGHT_BLUE: Theme = Theme {
    name: "soft-bright-blue",
    keyboard_background_color: rgb8!(255, 255, 255),
    primary_background_color: rgb8!(255, 255, 255),
    secondary_background_color: rgb8!(236, 244, 255),
    primary_foreground_color: rgb8!(11, 171, 238),
    callout_background_color: rgb8!(255, 255, 255),
    callout_foreground_color: rgb8!(11, 171, 238),
};

pub const SOFT_DARK_BLUE: Theme = Theme {
    name: "soft-dark-blue",
    keyboard_background_color: rgb8!(255, 255, 255),
    primary_background_color: rgb8!(255, 255, 255),
    secondary_background_color: rgb8!(251, 255, 255),
    primary_foreground_color: rgb8!(60, 90, 136),
    callout_background_color: rgb8!(255, 255, 255),
    callout_foreground_color: rgb8!(60, 90, 136),
};

pub const SOFT_WHITE: Theme = Theme {
    name: "soft-white",
    keyboard_background_color: rgb8!(255, 255, 255),
    primary_background_color: rgb8!(255, 255, 255),
    secondary_background_color: rgb8!(255, 255, 255),
    primary_foreground_color: rgb8!(26, 27, 31),
    callout_background_color: rgb8!(255, 255, 255),
    callout_foreground_color: rgb8!(26, 27, 31),
};

pub const SOFT_SOFT: Theme = Theme {
    name: "soft-soft",
    keyboard_background_color: rgb8!(255, 255, 255),
    primary_background_color: rgb8!(255, 255, 255),
    secondary_background_color: rgb8!(255, 255, 255),
    primary_foreground_color: rgb8!(26, 27, 31),
    callout_background_color: rgb8!(255, 255, 255),
    callout_foreground_color: rgb8!(26, 27, 31),
};

pub const FIRE_RED: Theme = Theme {
    name: "fire-red",
    keyboard_background_color: rgb8!(196, 56, 26),
    primary_background_color: rgb8!(255, 80, 42),
    secondary_background_color: rgb8!(154, 50, 28),
    primary_foreground_color: rgb8!(255, 255, 255),
    callout_background_color: rgb8!(255, 80, 42),
    callout_foreground_color: rgb8!(255, 255, 255),
};

/// Every palette, in presentation order
pub const CATALOG: [Theme; 45] = [
    OCEAN_BLUE,
    BRIGHT_PURPLE,
    AUTUMN,
    LEAF,
    LEMON,
    PINK,
    LIGHT_BLUE,
    PASTLE_BLUE_AND_GREEN,
    DAGOBAH_GREEN,
    CLASSIC_TURQUOISE,
    BRIGHT_BLUE,
    CLASSIC_BLUE,
    GOLD,
    MAGICAL_PURPLE,
    FAIRY_PURPLE,
    DARK_PURPLE,
    VERY_DARK_PURPLE,
    WATERMELON_RED,
    BLUSH_PINK,
    PEACH,
    CHERRY_PINK,
    BRIGHT_PINK,
    AUTUMN_CAMEL,
    GRAPHITE,
    PACIFIC_BLUE,
    MIDNIGHT_GREEN,
    VIOLET,
    RETRO,
    DARK_DARK,
    DARK_AND_RED,
    DARK_AND_GREEN,
    DARK_AND_BLUE,
    VERY_DARK_GRAY,
    VERY_DARK_BLUE,
    ALMOST_BLACK,
    DARK_PURPLE_SHADOW,
    BLACK_BLACK,
    SOFT_BLUE,
    SOFT_GRAY,
    SOFT_PURPLE,
    SOFT_BRIGHT_BLUE,
    SOFT_DARK_BLUE,
    SOFT_WHITE,
    SOFT_SOFT,
    FIRE_RED,
];

static INDEX: OnceLock<FxHashMap<&'static str, usize>> = OnceLock::new();

fn index() -> &'static FxHashMap<&'static str, usize> {
    INDEX.get_or_init(|| {
        CATALOG
            .iter()
            .enumerate()
            .map(|(position, theme)| (theme.name, position))
            .collect()
    })
}

/// Every palette, in presentation order
pub fn all() -> &'static [Theme] {
    &CATALOG
}

/// Look up a palette by name. Names are matched exactly.
pub fn named(name: &str) -> Option<&'static Theme> {
    let found = index().get(name).map(|position| &CATALOG[*position]);
    if found.is_none() {
        tracing::debug!(name, "theme not found in catalog");
    }
    found
}
