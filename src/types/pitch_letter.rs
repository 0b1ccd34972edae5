//! Tonal pitch spellings and key types.
//!
//! [`PitchLetter`] carries the enharmonic spelling (C-sharp vs. D-flat) that
//! a bare pitch-class loses; the convention is `Cs` for C-sharp, `Eb` for
//! E-flat, `x` for double-sharp and `bb` for double-flat.

use crate::types::pitch::PitchClass;
use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// A key center is just a spelled pitch letter.
pub type Key = PitchLetter;

/// An octave-invariant spelled pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum PitchLetter {
    C, Bs, Dbb,
    Db, Cs, Bx,
    D, Cx, Ebb,
    Eb, Ds, Csx,
    E, Dx, Fb,
    F, Es, Gbb,
    Gb, Fs, Ex,
    G, Fx, Abb,
    Ab, Gs, Fsx,
    A, Gx, Bbb,
    Bb, As, Gsx,
    B, Ax, Cb,
}

impl PitchLetter {
    /// The pitch-class value of this spelling.
    pub fn pc(self) -> PitchClass {
        use PitchLetter::*;
        match self {
            C | Bs | Dbb => 0,
            Db | Cs | Bx => 1,
            D | Cx | Ebb => 2,
            Eb | Ds | Csx => 3,
            E | Dx | Fb => 4,
            F | Es | Gbb => 5,
            Gb | Fs | Ex => 6,
            G | Fx | Abb => 7,
            Ab | Gs | Fsx => 8,
            A | Gx | Bbb => 9,
            Bb | As | Gsx => 10,
            B | Ax | Cb => 11,
        }
    }

    /// Display spelling with conventional accidental glyphs.
    pub fn name(self) -> &'static str {
        use PitchLetter::*;
        match self {
            C => "C", Bs => "B#", Dbb => "Dbb",
            Db => "Db", Cs => "C#", Bx => "Bx",
            D => "D", Cx => "Cx", Ebb => "Ebb",
            Eb => "Eb", Ds => "D#", Csx => "C#x",
            E => "E", Dx => "Dx", Fb => "Fb",
            F => "F", Es => "E#", Gbb => "Gbb",
            Gb => "Gb", Fs => "F#", Ex => "Ex",
            G => "G", Fx => "Fx", Abb => "Abb",
            Ab => "Ab", Gs => "G#", Fsx => "F#x",
            A => "A", Gx => "Gx", Bbb => "Bbb",
            Bb => "Bb", As => "A#", Gsx => "G#x",
            B => "B", Ax => "Ax", Cb => "Cb",
        }
    }

    /// Look up a spelling in the accidental-normalized form used by the
    /// chord-symbol parser: `#`/`♯` become `s`, `♭` becomes `b`.
    pub fn from_normalized(name: &str) -> Option<PitchLetter> {
        use PitchLetter::*;
        let letter = match name {
            "C" => C, "Bs" => Bs, "Dbb" => Dbb,
            "Db" => Db, "Cs" => Cs, "Bx" => Bx,
            "D" => D, "Cx" => Cx, "Ebb" => Ebb,
            "Eb" => Eb, "Ds" => Ds, "Csx" => Csx,
            "E" => E, "Dx" => Dx, "Fb" => Fb,
            "F" => F, "Es" => Es, "Gbb" => Gbb,
            "Gb" => Gb, "Fs" => Fs, "Ex" => Ex,
            "G" => G, "Fx" => Fx, "Abb" => Abb,
            "Ab" => Ab, "Gs" => Gs, "Fsx" => Fsx,
            "A" => A, "Gx" => Gx, "Bbb" => Bbb,
            "Bb" => Bb, "As" => As, "Gsx" => Gsx,
            "B" => B, "Ax" => Ax, "Cb" => Cb,
            _ => return None,
        };
        Some(letter)
    }
}

impl FromStr for PitchLetter {
    type Err = anyhow::Error;

    /// Parse a spelling such as `"C#"`, `"Eb"` or `"F♯"`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace(['#', '♯'], "s").replace('♭', "b");
        PitchLetter::from_normalized(&normalized)
            .ok_or_else(|| anyhow!("Invalid pitch letter: {}", s))
    }
}

impl fmt::Display for PitchLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Major/minor distinction, and the diatonic pattern each implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    Major,
    Minor,
}

impl KeyType {
    /// Semitonal offset pattern from the tonic.
    pub fn pattern(self) -> [PitchClass; 7] {
        match self {
            KeyType::Major => [0, 2, 4, 5, 7, 9, 11],
            KeyType::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_values() {
        assert_eq!(PitchLetter::C.pc(), 0);
        assert_eq!(PitchLetter::Bs.pc(), 0);
        assert_eq!(PitchLetter::Fs.pc(), 6);
        assert_eq!(PitchLetter::Gb.pc(), 6);
        assert_eq!(PitchLetter::Cb.pc(), 11);
    }

    #[test]
    fn test_parsing_accidental_notations() {
        assert_eq!("C#".parse::<PitchLetter>().unwrap(), PitchLetter::Cs);
        assert_eq!("C♯".parse::<PitchLetter>().unwrap(), PitchLetter::Cs);
        assert_eq!("E♭".parse::<PitchLetter>().unwrap(), PitchLetter::Eb);
        assert_eq!("Bbb".parse::<PitchLetter>().unwrap(), PitchLetter::Bbb);
        assert_eq!("Cx".parse::<PitchLetter>().unwrap(), PitchLetter::Cx);
        assert!("H".parse::<PitchLetter>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PitchLetter::Cs.to_string(), "C#");
        assert_eq!(PitchLetter::Ebb.to_string(), "Ebb");
    }

    #[test]
    fn test_key_patterns() {
        assert_eq!(KeyType::Major.pattern(), [0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(KeyType::Minor.pattern(), [0, 2, 3, 5, 7, 8, 10]);
    }
}
