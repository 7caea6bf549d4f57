//! The small wire enumerations: codepages, alert triggers/sources, audio formats and clips, and
//! regions.
//!
//! Each is a `u8`/`u16` newtype with named constants rather than a Rust `enum`, so that decoding
//! a value the table doesn't name is never an error — GPI files in the wild may carry codepages
//! or region codes this codec doesn't document, and interpreting *content* (as opposed to
//! *structure*) is out of scope. `Flags16` (`crate::flags`) uses the same "newtype with named
//! constants" shape for the same reason.

use std::fmt;

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident($repr:ty) { $($(#[$cmeta:meta])* $cname:ident = $cval:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(
            /// The raw wire value.
            pub $repr,
        );

        impl $name {
            $(
                $(#[$cmeta])*
                pub const $cname: $name = $name($cval);
            )+

            /// The constant's name, if this value matches one of the documented constants.
            pub fn name(&self) -> Option<&'static str> {
                match *self {
                    $(Self::$cname => Some(stringify!($cname)),)+
                    _ => None,
                }
            }
        }

        impl From<$repr> for $name {
            fn from(raw: $repr) -> $name {
                $name(raw)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{name}({:#x})", self.0),
                    None => write!(f, "{:#x}", self.0),
                }
            }
        }
    };
}

wire_enum! {
    /// `codepage_t`.
    Codepage(u16) {
        /// Thai.
        THAI = 0x036A,
        /// Traditional Chinese.
        CHINESE_TRADITIONAL = 0x03B6,
        /// Central European.
        CENTRAL_EUROPEAN = 0x04E2,
        /// Cyrillic.
        CYRILLIC = 0x04E3,
        /// Western European.
        WESTERN_EUROPEAN = 0x04E4,
        /// Unicode.
        UNICODE = 0xFDE9,
    }
}

wire_enum! {
    /// `alert_trigger_t`.
    AlertTrigger(u8) {
        /// Triggers on proximity to the waypoint.
        PROXIMITY = 0,
        /// Triggers when along a road.
        ALONG_ROAD = 1,
        /// Triggers when along a road (alternate form).
        ALONG_ROAD_ALTERNATE = 2,
        /// Tour-guide narration trigger.
        TOUR_GUIDE = 3,
    }
}

wire_enum! {
    /// `alert_source_t`: selects how the alert's symbol/internal-id/media-id byte is
    /// interpreted.
    AlertSource(u8) {
        /// The byte is a bitmap symbol id.
        SYMBOL = 0x00,
        /// The byte is an internal (built-in) alert id.
        INTERNAL = 0x10,
        /// The byte is a media (audio clip) id.
        MEDIA = 0x20,
    }
}

wire_enum! {
    /// `audio_clips_t`.
    AudioClip(u8) {
        /// A single beep.
        BEEP = 0,
        /// A tone.
        TONE = 1,
        /// Three beeps.
        TRIPLE_BEEP = 2,
        /// No sound.
        SILENCE = 3,
        /// A single plonk.
        PLONK = 4,
        /// Two plonks.
        DOUBLE_PLONK = 5,
    }
}

wire_enum! {
    /// `audio_format_t`.
    AudioFormat(u8) {
        /// WAV-encoded audio.
        WAV = 0,
        /// MP3-encoded audio.
        MP3 = 1,
    }
}

wire_enum! {
    /// `region_t`.
    Region(u8) {
        /// No region.
        NONE = 0,
        /// United Kingdom and Ireland.
        UNITED_KINGDOM_IRELAND = 1,
        /// Netherlands.
        NETHERLANDS = 2,
        /// France.
        FRANCE = 3,
        /// Belgium and Luxembourg.
        BELGIUM_LUXEMBURG = 4,
        /// Australia and New Zealand.
        AUSTRALIA_NEW_ZEALAND = 5,
        /// Spain and Portugal.
        SPAIN_PORTUGAL = 6,
        /// Italy and Slovenia.
        ITALY_SLOVENIA = 7,
        /// Austria and Germany.
        AUSTRIA_GERMANY = 8,
        /// Nordic countries.
        NORDICS = 9,
        /// Eastern Europe.
        EASTERN_EUROPE = 10,
        /// Greece.
        GREECE = 11,
        /// North America.
        NORTH_AMERICA = 12,
        /// Russia.
        RUSSIA = 13,
        /// South Africa.
        SOUTH_AFRICA = 14,
        /// Middle East.
        MIDDLE_EAST = 15,
        /// Also means "no region".
        ALSO_NONE = 0xFF,
    }
}
