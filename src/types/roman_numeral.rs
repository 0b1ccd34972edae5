//! Roman-numeral harmony in two notational systems.
//!
//! [`Traditional`] uses figured-bass notation with mixed-case numerals
//! (`iv6`, `IM43`, `Ger6`), resolved through a fixed symbol table.
//! [`Berklee`] uses chord-symbol style notation in upper case
//! (`IVm6`, `bVImaj7#11`, `subV7/IV`), resolved by splitting the numeral
//! prefix from a chord suffix and reusing the chord-symbol suffix rules.

use crate::types::chord::map_suffix;
use crate::types::pcset::PCSet;
use crate::types::pitch::PitchClass;
use crate::types::pitch_letter::Key;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Figured-bass symbols and their offsets-from-tonic, encoded as
/// whitespace-separated strings. The `M` infix means a major seventh, so
/// `I7` is a dominant seventh built on the tonic. Upper-case numerals on
/// minor degrees (`III`, `VI`) denote the flatted-root major triads of the
/// parallel minor.
static RN_TABLE: &[(&str, &str)] = &[
    ("I", "0 4 7"),
    ("I6", "4 7 12"),
    ("I64", "7 12 16"),
    ("IM7", "0 4 7 11"),
    ("IM65", "4 7 11 12"),
    ("IM43", "7 11 12 16"),
    ("IM42", "11 12 16 19"),
    ("I7", "0 4 7 10"),
    ("I65", "4 7 10 12"),
    ("I43", "7 10 12 16"),
    ("I42", "10 12 16 19"),
    ("i", "0 3 7"),
    ("i6", "3 7 12"),
    ("i64", "7 12 15"),
    ("i7", "0 3 7 10"),
    ("i65", "3 7 10 12"),
    ("i43", "7 10 12 15"),
    ("i42", "10 12 17 19"),
    ("ii", "2 5 9"),
    ("ii6", "5 9 14"),
    ("ii64", "9 14 17"),
    ("ii7", "2 5 9 12"),
    ("ii65", "5 9 12 14"),
    ("ii43", "9 12 14 17"),
    ("ii42", "0 2 5 9"),
    ("iiº", "2 5 8"),
    ("iiº6", "5 8 14"),
    ("iiº64", "8 14 17"),
    ("iiø7", "2 5 8 12"),
    ("iiø65", "5 8 12 14"),
    ("iiø43", "8 12 14 17"),
    ("iiø42", "0 2 5 8"),
    ("iii", "4 7 11"),
    ("iii6", "7 11 16"),
    ("iii64", "11 16 19"),
    ("iii7", "4 7 11 14"),
    ("iii65", "7 11 14 16"),
    ("iii43", "11 14 16 19"),
    ("iii42", "2 4 7 11"),
    ("III", "3 7 10"),
    ("III6", "7 10 15"),
    ("III64", "10 15 19"),
    ("IIIM7", "3 7 10 14"),
    ("IIIM65", "7 10 14 15"),
    ("IIIM43", "10 14 15 19"),
    ("IIIM42", "2 3 7 10"),
    ("III7", "3 7 10 13"),
    ("III65", "7 10 13 15"),
    ("III43", "10 13 15 19"),
    ("III42", "1 3 7 10"),
    ("IV", "5 9 12"),
    ("IV6", "9 12 17"),
    ("IV64", "0 5 9"),
    ("IVM7", "5 9 12 16"),
    ("IVM65", "9 12 16 17"),
    ("IVM43", "0 4 5 9"),
    ("IVM42", "4 5 9 12"),
    ("IV7", "5 9 12 15"),
    ("IV65", "9 12 15 17"),
    ("IV43", "0 3 5 9"),
    ("IV42", "3 5 9 12"),
    ("iv", "5 8 12"),
    ("iv6", "8 12 17"),
    ("iv64", "0 5 8"),
    ("iv7", "5 8 12 15"),
    ("iv65", "8 12 15 17"),
    ("iv43", "0 3 5 8"),
    ("iv42", "3 5 8 12"),
    ("V", "7 11 14"),
    ("V6", "11 14 19"),
    ("V64", "2 7 11"),
    ("V7", "7 11 14 17"),
    ("V65", "11 14 17 19"),
    ("V43", "2 5 7 11"),
    ("V42", "5 7 11 14"),
    ("v", "7 10 14"),
    ("v6", "10 14 19"),
    ("v64", "2 7 10"),
    ("v7", "7 10 14 17"),
    ("v65", "10 14 17 19"),
    ("v43", "2 5 7 10"),
    ("v42", "5 7 10 14"),
    ("vi", "9 12 16"),
    ("vi6", "0 4 9"),
    ("vi64", "4 9 12"),
    ("vi7", "9 12 16 19"),
    ("vi65", "0 4 7 9"),
    ("vi43", "4 7 9 12"),
    ("vi42", "7 9 12 16"),
    ("VI", "8 12 15"),
    ("VI6", "0 3 8"),
    ("VI64", "3 8 12"),
    ("VIM7", "8 12 15 19"),
    ("VIM65", "0 3 7 8"),
    ("VIM43", "3 7 8 12"),
    ("VIM42", "7 8 12 15"),
    ("VI7", "8 12 15 18"),
    ("VI65", "0 3 6 8"),
    ("VI43", "3 6 8 12"),
    ("VI42", "6 8 12 15"),
    ("viiº", "11 14 17"),
    ("viiº6", "2 5 11"),
    ("viiº64", "5 11 14"),
    ("viiº7", "11 14 17 20"),
    ("viiº65", "2 5 8 11"),
    ("viiº43", "5 8 11 14"),
    ("viiº42", "8 11 14 17"),
    ("N", "1 5 8"),
    ("N6", "5 8 13"),
    ("N64", "8 13 17"),
    ("It6", "8 12 18"),
    ("Fr6", "8 12 14 18"),
    ("Ger6", "8 12 15 18"),
];

/// A traditional figured-bass roman numeral, e.g. `Traditional::new("viiº7")`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traditional {
    /// Offsets from the tonic; inverted figures exceed 12.
    pub offsets: Vec<PitchClass>,
}

impl Traditional {
    /// Look up a figured-bass symbol. `None` for symbols outside the table.
    pub fn new(symbol: &str) -> Option<Self> {
        let encoded = RN_TABLE
            .iter()
            .find(|(sym, _)| *sym == symbol)
            .map(|(_, offsets)| *offsets)?;
        let offsets = encoded
            .split_whitespace()
            .filter_map(|v| v.parse().ok())
            .collect();
        Some(Traditional { offsets })
    }

    /// Every symbol the table knows.
    pub fn options() -> Vec<&'static str> {
        RN_TABLE.iter().map(|(sym, _)| *sym).collect()
    }

    /// The offsets as a pitch-class set. Collapsing to pitch-classes may
    /// negate the inversion the figures encode.
    pub fn pcset(&self) -> PCSet {
        self.offsets.iter().copied().collect()
    }

    /// The offsets transposed to a key's tonic, unreduced.
    pub fn offsets_in(&self, key: Key) -> Vec<PitchClass> {
        self.offsets.iter().map(|o| o + key.pc()).collect()
    }

    /// MIDI note numbers for the numeral in a key, with the bass octave
    /// clamped to 8.
    pub fn to_midi(&self, key: Key, bass_octave: u8) -> Vec<u8> {
        self.offsets
            .iter()
            .map(|o| (o + key.pc()) as u8 + bass_octave.min(8) * 12)
            .collect()
    }

    /// Apply a secondary function, reading the secondary numeral's first
    /// pitch-class as a transposition: `iv.of(&III, key)` is "iv of III".
    pub fn of(&self, secondary: &Traditional, key: Key) -> Vec<PitchClass> {
        let sec = secondary.pcset()[0];
        self.offsets.iter().map(|o| o + sec + key.pc()).collect()
    }
}

impl FromStr for Traditional {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Traditional::new(s).ok_or_else(|| anyhow!("Unknown roman numeral: {}", s))
    }
}

/// A chord-symbol style roman numeral in the Berklee idiom, e.g.
/// `Berklee::new("Imaj7#9")`. Input is upper-cased before parsing, so the
/// quality lives entirely in the suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Berklee {
    /// Offsets from the tonic, reduced mod 12.
    pub offsets: Vec<PitchClass>,
}

impl Berklee {
    /// Parse a Berklee-style symbol. `None` when no numeral prefix matches.
    pub fn new(symbol: &str) -> Option<Self> {
        let mut sym = symbol.to_uppercase();
        let mut sub_v7_flag = false;

        // Tritone substitution of V7 with no target degree.
        if sym == "SUBV7" {
            return Some(Berklee {
                offsets: vec![1, 5, 8, 11],
            });
        }

        let mut root_offset = match sym.chars().next() {
            Some('#') => 1,
            Some('B') => -1,
            _ => 0,
        };
        if root_offset != 0 {
            sym = sym.chars().skip(1).collect();
        }

        let mut prefix = map_rn(&sym)?;

        if prefix == "SUBV7" {
            sub_v7_flag = true;
            root_offset += 1;
            prefix = map_rn(&sym.replace("SUBV7/", ""))?;
        }

        let suffix = sym.replace(prefix, "");

        let mut offset = match prefix {
            "II" => 2,
            "III" => 4,
            "IV" => 5,
            "V" => 7,
            "VI" => 9,
            "VII" => 11,
            _ => 0,
        };
        offset += root_offset;

        let mut offsets_from_zero: Vec<PitchClass> = if suffix.is_empty() {
            vec![0, 4, 7]
        } else {
            map_suffix(&suffix).pitch_classes
        };

        if sub_v7_flag {
            offsets_from_zero = vec![0, 4, 7, 10];
        }

        Some(Berklee {
            offsets: offsets_from_zero.iter().map(|o| (o + offset) % 12).collect(),
        })
    }

    /// The offsets as a pitch-class set.
    pub fn pcset(&self) -> PCSet {
        self.offsets.iter().copied().collect()
    }

    /// The numeral's pitch-classes as they apply to a key.
    pub fn pitch_classes_in(&self, key: Key) -> PCSet {
        self.offsets.iter().map(|o| (o + key.pc()) % 12).collect()
    }

    /// MIDI note numbers relative to C in the given octave, with the bass
    /// octave clamped to 8.
    pub fn to_midi(&self, bass_octave: u8) -> Vec<u8> {
        self.offsets
            .iter()
            .map(|o| *o as u8 + bass_octave.min(8) * 12)
            .collect()
    }
}

impl FromStr for Berklee {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Berklee::new(s).ok_or_else(|| anyhow!("Unknown roman numeral: {}", s))
    }
}

/// Longest-prefix match of the numeral portion of an upper-cased symbol.
fn map_rn(symbol: &str) -> Option<&'static str> {
    let probe = |n: usize| -> String { symbol.chars().take(n).collect() };

    if probe(5) == "SUBV7" {
        Some("SUBV7")
    } else if probe(3) == "III" {
        Some("III")
    } else if probe(3) == "VII" {
        Some("VII")
    } else if probe(2) == "II" {
        Some("II")
    } else if probe(2) == "IV" {
        Some("IV")
    } else if probe(2) == "VI" {
        Some("VI")
    } else if probe(1) == "I" {
        Some("I")
    } else if probe(1) == "V" {
        Some("V")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traditional_dominant_seventh() {
        let v7 = Traditional::new("V7").unwrap();
        assert_eq!(v7.offsets, vec![7, 11, 14, 17]);
        assert_eq!(v7.pcset().pitch_classes, vec![7, 11, 2, 5]);
    }

    #[test]
    fn test_traditional_inversions() {
        let first_inv = Traditional::new("I6").unwrap();
        assert_eq!(first_inv.offsets, vec![4, 7, 12]);

        let leading = Traditional::new("viiº65").unwrap();
        assert_eq!(leading.offsets, vec![2, 5, 8, 11]);
    }

    #[test]
    fn test_traditional_unknown_symbol() {
        assert!(Traditional::new("XIV").is_none());
        assert!("XIV".parse::<Traditional>().is_err());
    }

    #[test]
    fn test_traditional_offsets_in_key() {
        let v = Traditional::new("V").unwrap();
        assert_eq!(v.offsets_in(Key::D), vec![9, 13, 16]);
    }

    #[test]
    fn test_traditional_to_midi() {
        let i = Traditional::new("I").unwrap();
        assert_eq!(i.to_midi(Key::C, 5), vec![60, 64, 67]);
        // Octave is clamped at 8.
        assert_eq!(i.to_midi(Key::C, 10), vec![96, 100, 103]);
    }

    #[test]
    fn test_traditional_secondary_function() {
        let iv = Traditional::new("iv").unwrap();
        let iii = Traditional::new("III").unwrap();
        assert_eq!(iv.of(&iii, Key::C), vec![8, 11, 15]);
    }

    #[test]
    fn test_traditional_options_cover_table() {
        let options = Traditional::options();
        assert_eq!(options.len(), RN_TABLE.len());
        assert!(options.contains(&"Ger6"));
    }

    #[test]
    fn test_berklee_triad() {
        let five = Berklee::new("V").unwrap();
        assert_eq!(five.offsets, vec![7, 11, 2]);
    }

    #[test]
    fn test_berklee_case_insensitive() {
        assert_eq!(Berklee::new("ii"), Berklee::new("II"));
    }

    #[test]
    fn test_berklee_flat_degree_with_suffix() {
        let numeral = Berklee::new("bVImaj7#11").unwrap();
        assert_eq!(numeral.offsets, vec![8, 0, 2, 3, 7]);
    }

    #[test]
    fn test_berklee_tritone_substitution() {
        let bare = Berklee::new("SUBV7").unwrap();
        assert_eq!(bare.offsets, vec![1, 5, 8, 11]);

        let of_four = Berklee::new("subV7/IV").unwrap();
        assert_eq!(of_four.offsets, vec![6, 10, 1, 4]);
    }

    #[test]
    fn test_berklee_unknown_prefix() {
        assert!(Berklee::new("X7").is_none());
    }

    #[test]
    fn test_berklee_in_key() {
        let five = Berklee::new("V7").unwrap();
        assert_eq!(five.pitch_classes_in(Key::D).pitch_classes, vec![9, 1, 4, 7]);
    }

    #[test]
    fn test_berklee_to_midi() {
        let one = Berklee::new("I").unwrap();
        assert_eq!(one.to_midi(5), vec![60, 64, 67]);
    }
}
