//! Note symbols and their frequencies.
//!
//! Notes are named by letter only (one octave, C4..B4) with an optional `S`
//! suffix for sharps. The rest marker is `-`.
//!
//! | Symbol | Hz  | Symbol | Hz  |
//! |--------|-----|--------|-----|
//! | `C`    | 262 | `CS`   | 277 |
//! | `D`    | 294 | `DS`   | 311 |
//! | `E`    | 330 |        |     |
//! | `F`    | 349 | `FS`   | 370 |
//! | `G`    | 392 | `GS`   | 415 |
//! | `A`    | 440 | `AS`   | 466 |
//! | `B`    | 494 |        |     |
//!
//! Lookup is an exact match. Anything else, including the empty string and
//! lower-case names, is a rest: frequency 0, never an error.

/// Symbol used for a rest in melody listings.
pub const REST_SYMBOL: &str = "-";

/// One melody note, or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    /// Silence.
    Rest,
    /// C4
    C,
    /// C#4
    CSharp,
    /// D4
    D,
    /// D#4
    DSharp,
    /// E4
    E,
    /// F4
    F,
    /// F#4
    FSharp,
    /// G4
    G,
    /// G#4
    GSharp,
    /// A4
    A,
    /// A#4
    ASharp,
    /// B4
    B,
}

impl Note {
    /// Every pitched note, in ascending order.
    pub const PITCHED: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Parse a note symbol. Unrecognized symbols are a rest.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "C" => Note::C,
            "CS" => Note::CSharp,
            "D" => Note::D,
            "DS" => Note::DSharp,
            "E" => Note::E,
            "F" => Note::F,
            "FS" => Note::FSharp,
            "G" => Note::G,
            "GS" => Note::GSharp,
            "A" => Note::A,
            "AS" => Note::ASharp,
            "B" => Note::B,
            _ => Note::Rest,
        }
    }

    /// Symbol for this note (`-` for a rest).
    pub const fn symbol(self) -> &'static str {
        match self {
            Note::Rest => REST_SYMBOL,
            Note::C => "C",
            Note::CSharp => "CS",
            Note::D => "D",
            Note::DSharp => "DS",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "FS",
            Note::G => "G",
            Note::GSharp => "GS",
            Note::A => "A",
            Note::ASharp => "AS",
            Note::B => "B",
        }
    }

    /// Frequency in Hz, rounded to the nearest integer. `0` for a rest.
    pub const fn frequency_hz(self) -> u32 {
        match self {
            Note::Rest => 0,
            Note::C => 262,
            Note::CSharp => 277,
            Note::D => 294,
            Note::DSharp => 311,
            Note::E => 330,
            Note::F => 349,
            Note::FSharp => 370,
            Note::G => 392,
            Note::GSharp => 415,
            Note::A => 440,
            Note::ASharp => 466,
            Note::B => 494,
        }
    }

    /// `true` for [`Note::Rest`].
    pub const fn is_rest(self) -> bool {
        matches!(self, Note::Rest)
    }
}

/// Frequency of a note symbol in Hz; `0` for a rest or an unknown symbol.
pub fn note_to_freq(symbol: &str) -> u32 {
    Note::from_symbol(symbol).frequency_hz()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_round_trips_for_every_note() {
        for note in Note::PITCHED {
            assert_eq!(Note::from_symbol(note.symbol()), note);
        }
        assert_eq!(Note::from_symbol(Note::Rest.symbol()), Note::Rest);
    }

    #[test]
    fn pitched_notes_are_ascending() {
        let freqs = Note::PITCHED.map(Note::frequency_hz);
        assert!(freqs.windows(2).all(|w| w[0] < w[1]), "{freqs:?}");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(note_to_freq("c"), 0);
        assert_eq!(note_to_freq("Cs"), 0);
    }

    #[test]
    fn flats_and_octaves_are_not_understood() {
        assert_eq!(note_to_freq("BB"), 0);
        assert_eq!(note_to_freq("C4"), 0);
        assert_eq!(note_to_freq("ES"), 0);
    }
}
