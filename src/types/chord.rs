//! Chords and the chord-symbol grammar.
//!
//! Parsing is two-phase: [`separate_root`] splits a symbol like `"Gbm7"`
//! into a spelled root and a quality suffix, then [`map_suffix`] maps the
//! suffix to semitone offsets from the root. The suffix rules are an ordered
//! branch chain (7 / m / M / dim / aug) followed by an independent `#`/`b`
//! alteration scan; the branch priority is part of the contract and some
//! inputs (e.g. `"m7b5"`) deliberately hit both a branch and the scan.

use crate::types::pcset::PCSet;
use crate::types::pitch::{PitchClass, ScaleDegree};
use crate::types::pitch_letter::{Key, KeyType, PitchLetter};
use anyhow::{anyhow, Result};
#[cfg(feature = "colored")]
use colored::Colorize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A vertically-oriented harmonic structure: a pitch-class set plus the key
/// context used for scale-degree views.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
    /// The underlying pitch-class set.
    pub pitch_classes: PCSet,
    /// Key context for scale-degree operations. Defaults to C major.
    pub key: (Key, KeyType),
}

impl Chord {
    /// Wrap a pitch-class set with the default C major key context.
    pub fn from_pcset(pitch_classes: PCSet) -> Self {
        Chord {
            pitch_classes,
            key: (Key::C, KeyType::Major),
        }
    }

    /// Build from scale degrees in a key. Degrees outside the seven-note
    /// pattern are skipped.
    pub fn from_scale_degrees(degrees: &[ScaleDegree], key: (Key, KeyType)) -> Self {
        let mut chord = Chord {
            pitch_classes: PCSet::new(),
            key,
        };
        chord.set_tones(degrees);
        chord
    }

    /// Parse a chord symbol, e.g. `Chord::parse("Fmaj7#11")`.
    pub fn parse(chord_symbol: &str) -> Result<Self> {
        let separated = separate_root(chord_symbol)
            .ok_or_else(|| anyhow!("Could not parse chord symbol: {}", chord_symbol))?;
        Ok(Chord::from_pcset(separated.pitch_classes()))
    }

    /// The chord as scale degrees of the current key, keeping only the
    /// pitch-classes that are diatonic to it.
    pub fn tones(&self) -> Vec<ScaleDegree> {
        self.pitch_classes
            .iter()
            .filter_map(|pc| self.to_scale_degree(pc))
            .collect()
    }

    /// Replace the pitch content from scale degrees of the current key.
    pub fn set_tones(&mut self, degrees: &[ScaleDegree]) {
        self.pitch_classes = degrees
            .iter()
            .filter_map(|&d| self.to_pitch_class(d))
            .collect();
    }

    /// Scale-degree index of a pitch-class within the current key's
    /// diatonic pattern, if it appears there.
    pub fn to_scale_degree(&self, pc: PitchClass) -> Option<ScaleDegree> {
        self.scale_pcs().iter().position(|&v| v == pc)
    }

    /// Pitch-class of a scale degree in the current key.
    pub fn to_pitch_class(&self, degree: ScaleDegree) -> Option<PitchClass> {
        self.scale_pcs().get(degree).copied()
    }

    fn scale_pcs(&self) -> Vec<PitchClass> {
        let tonic = self.key.0.pc();
        self.key.1.pattern().iter().map(|p| (p + tonic) % 12).collect()
    }

    /// Voice-lead from a set of MIDI note numbers to the next chord, moving
    /// each target pitch-class to the nearest source note. Naive, O(n^2).
    pub fn voice_lead(from: &[u8], to: &Chord) -> Vec<u8> {
        let mut out_chord = Vec::new();
        let midi_chord: Vec<u8> = from.iter().copied().filter(|&n| n <= 127).collect();

        for p in &to.pitch_classes {
            let mut distance = 12;
            let mut offset = 0;
            let mut note = 0i32;

            for &n in &midi_chord {
                let d = p - (i32::from(n) % 12);
                if pc_abs(d) < distance {
                    distance = d;
                    offset = d;
                    note = i32::from(n);
                }
            }

            out_chord.push((note + offset) as u8);
        }

        out_chord
    }
}

/// Circular distance helper for voice leading.
fn pc_abs(pc: PitchClass) -> PitchClass {
    if pc < -6 {
        12 + pc
    } else {
        pc.abs()
    }
}

impl PartialEq for Chord {
    /// Chord parity ignores ordering and key context.
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = self.pitch_classes.pitch_classes.clone();
        let mut rhs = other.pitch_classes.pitch_classes.clone();
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }
}

impl Eq for Chord {}

impl FromStr for Chord {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Chord::parse(s)
    }
}

#[cfg(feature = "colored")]
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} {}",
            self.pitch_classes.to_string().cyan(),
            self.key.0,
            match self.key.1 {
                KeyType::Major => "major",
                KeyType::Minor => "minor",
            }
        )
    }
}

#[cfg(not(feature = "colored"))]
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {} {}",
            self.pitch_classes,
            self.key.0,
            match self.key.1 {
                KeyType::Major => "major",
                KeyType::Minor => "minor",
            }
        )
    }
}

/// A chord symbol split into its spelled root and its quality suffix; the
/// intermediate artifact of a single parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatedChordSymbol {
    /// The chord root.
    pub root: PitchLetter,
    /// The chord symbol suffix.
    pub suffix: String,
}

impl SeparatedChordSymbol {
    pub fn new(root: PitchLetter, suffix: impl Into<String>) -> Self {
        SeparatedChordSymbol {
            root,
            suffix: suffix.into(),
        }
    }

    /// Absolute pitch-classes: the suffix offsets applied to the root.
    pub fn pitch_classes(&self) -> PCSet {
        let root_pc = self.root.pc();
        map_suffix(&self.suffix)
            .iter()
            .map(|o| (o + root_pc) % 12)
            .collect()
    }
}

/// Split a chord symbol into root and suffix. The first one to three
/// characters are probed for a letter plus up to two accidental markers;
/// double-flat wins over a single accidental, which wins over the bare
/// letter. Returns `None` when the probed prefix spells no known letter.
pub fn separate_root(symbol: &str) -> Option<SeparatedChordSymbol> {
    let chars: Vec<char> = symbol.chars().collect();
    let first = *chars.first()?;
    let accidental = chars.get(1).copied();
    let ext_accidental: String = chars.iter().skip(1).take(2).collect();

    let portion: String = if ext_accidental == "bb" || ext_accidental == "♭♭" {
        let mut p = String::from(first);
        p.push_str(&ext_accidental);
        p
    } else if matches!(accidental, Some('#' | 'b' | 'x' | '♭' | '♯')) {
        let mut p = String::from(first);
        p.push(accidental?);
        p
    } else {
        String::from(first)
    };

    let root = map_pitch_to_letter(&portion)?;
    Some(SeparatedChordSymbol::new(root, symbol.replace(&portion, "")))
}

/// Map a pitch-letter string (ASCII or Unicode accidentals) to a spelling.
pub fn map_pitch_to_letter(s: &str) -> Option<PitchLetter> {
    let normalized = s.replace('♭', "b").replace(['♯', '#'], "s");
    PitchLetter::from_normalized(&normalized)
}

/// Map a quality suffix to semitone offsets as they would apply to a root
/// of C (pitch-class 0), e.g. `map_suffix("m7")` gives `{0 3 7 10}`.
///
/// A suffix that matches no rule contributes nothing and yields an empty
/// set; that is a quality signal for callers, not an error.
pub fn map_suffix(suffix: &str) -> PCSet {
    let mut offsets: BTreeSet<PitchClass> = BTreeSet::new();
    let s: Vec<char> = suffix.chars().collect();
    if s.is_empty() {
        return PCSet::new();
    }

    // Clamped character-range slice so short suffixes probe as absent
    // rather than out of bounds.
    let subs = |from: usize, to: usize| -> String {
        s.iter()
            .skip(from)
            .take(to.saturating_sub(from))
            .collect()
    };

    if s[0] == '7' {
        offsets.extend([0, 4, 7, 10]);
    } else if (s[0] == 'm' || s[0] == '-') && subs(0, 3) != "maj" {
        match s.get(1).copied() {
            Some('7') => {
                offsets.insert(10);
            }
            Some('6') => {
                offsets.insert(9);
            }
            Some('9') => {
                offsets.insert(2);
            }
            _ => {}
        }

        if suffix.contains("b5") {
            offsets.extend([0, 3, 6]);
        } else {
            offsets.extend([0, 3, 7]);
        }

        let infix = subs(1, 4);
        if infix == "maj" || infix == "Maj" {
            match s.get(4).copied() {
                Some('7') => {
                    offsets.insert(11);
                }
                Some('9') => {
                    offsets.extend([11, 2]);
                }
                _ => {}
            }
        }
    } else if s[0] == 'M' || subs(0, 3) == "maj" || subs(0, 3) == "Maj" {
        if s.get(1).copied() == Some('7') || s.get(3).copied() == Some('7') {
            offsets.insert(11);
        } else if s.get(1).copied() == Some('9') || s.get(3).copied() == Some('9') {
            offsets.extend([11, 2]);
        }

        if suffix.contains("#5") {
            offsets.extend([0, 4, 8]);
        } else {
            offsets.extend([0, 4, 7]);
        }
    } else if s[0] == 'º' || s[0] == 'o' || s[0] == 'd' || subs(0, 3) == "dim" {
        offsets.extend([0, 3, 6]);

        if s.get(1).copied() == Some('7') || s.get(3).copied() == Some('7') {
            offsets.insert(9);
        }
    } else if s[0] == '+' || s[0] == 'a' || subs(0, 3) == "aug" {
        offsets.extend([0, 4, 8]);

        if suffix.contains("maj7") || suffix.contains("Maj7") {
            offsets.insert(11);
        } else if suffix.contains('7') {
            offsets.insert(10);
        }
    }

    // Alteration scan, independent of the quality branch above.
    for i in 0..s.len() {
        if s[i] == '#' {
            match s.get(i + 1).copied() {
                Some('9') => {
                    offsets.insert(3);
                }
                Some('5') => {
                    offsets.insert(8);
                    offsets.remove(&7);
                }
                Some('1') if s.get(i + 2).copied() == Some('1') => {
                    offsets.insert(6);
                }
                _ => {}
            }
        } else if s[i] == 'b' {
            match s.get(i + 1).copied() {
                Some('9') => {
                    offsets.insert(1);
                }
                Some('5') => {
                    offsets.insert(6);
                    offsets.remove(&7);
                }
                Some('1') if s.get(i + 2).copied() == Some('3') => {
                    offsets.insert(8);
                }
                _ => {}
            }
        }
    }

    offsets.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(chord: &Chord) -> Vec<PitchClass> {
        chord.pitch_classes.pitch_classes.clone()
    }

    #[test]
    fn test_major_seventh() {
        let chord = Chord::parse("Cmaj7").unwrap();
        assert_eq!(pcs(&chord), vec![0, 4, 7, 11]);

        let m7: Chord = "CM7".parse().unwrap();
        assert_eq!(chord, m7);
    }

    #[test]
    fn test_minor_seventh() {
        let chord = Chord::parse("Am7").unwrap();
        assert_eq!(pcs(&chord), vec![9, 0, 4, 7]);
    }

    #[test]
    fn test_dominant_seventh() {
        let chord = Chord::parse("G7").unwrap();
        assert_eq!(pcs(&chord), vec![7, 11, 2, 5]);
    }

    #[test]
    fn test_flat_root() {
        let chord = Chord::parse("Gbm7").unwrap();
        assert_eq!(pcs(&chord), vec![6, 9, 1, 4]);
    }

    #[test]
    fn test_double_flat_root() {
        let separated = separate_root("Bbb13").unwrap();
        assert_eq!(separated.root, PitchLetter::Bbb);
        assert_eq!(separated.suffix, "13");
    }

    #[test]
    fn test_unicode_accidentals() {
        let ascii = Chord::parse("F#m7").unwrap();
        let unicode = Chord::parse("F♯m7").unwrap();
        assert_eq!(ascii, unicode);
    }

    #[test]
    fn test_unknown_root_fails() {
        assert!(Chord::parse("Hm7").is_err());
        assert!(Chord::parse("").is_err());
    }

    #[test]
    fn test_half_diminished() {
        // "m7b5" takes the minor branch and the b5 alteration scan.
        assert_eq!(map_suffix("m7b5").pitch_classes, vec![0, 3, 6, 10]);
    }

    #[test]
    fn test_diminished_seventh() {
        let chord = Chord::parse("Ddim7").unwrap();
        assert_eq!(pcs(&chord), vec![2, 5, 8, 11]);
        assert_eq!(map_suffix("º7").pitch_classes, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_augmented() {
        assert_eq!(map_suffix("+").pitch_classes, vec![0, 4, 8]);
        assert_eq!(map_suffix("+7").pitch_classes, vec![0, 4, 7, 8, 10]);
        assert_eq!(map_suffix("augmaj7").pitch_classes, vec![0, 4, 8, 11]);
    }

    #[test]
    fn test_altered_dominant() {
        assert_eq!(map_suffix("7#9").pitch_classes, vec![0, 3, 4, 7, 10]);
        assert_eq!(map_suffix("7b9").pitch_classes, vec![0, 1, 4, 7, 10]);
        assert_eq!(map_suffix("7#5").pitch_classes, vec![0, 4, 8, 10]);
        assert_eq!(map_suffix("maj7#11").pitch_classes, vec![0, 4, 6, 7, 11]);
        assert_eq!(map_suffix("7b13").pitch_classes, vec![0, 4, 7, 8, 10]);
    }

    #[test]
    fn test_minor_major_seventh() {
        assert_eq!(map_suffix("mmaj7").pitch_classes, vec![0, 3, 7, 11]);
        assert_eq!(map_suffix("mMaj9").pitch_classes, vec![0, 2, 3, 7, 11]);
    }

    #[test]
    fn test_unmatched_suffix_is_empty() {
        assert_eq!(map_suffix("q").pitch_classes, Vec::<PitchClass>::new());
        let bare = Chord::parse("C").unwrap();
        assert!(bare.pitch_classes.is_empty());
    }

    #[test]
    fn test_chord_equality_ignores_order() {
        let a = Chord::from_pcset(PCSet::from([0, 4, 7]));
        let b = Chord::from_pcset(PCSet::from([7, 0, 4]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tones_in_key() {
        let chord = Chord::parse("Cmaj7").unwrap();
        assert_eq!(chord.tones(), vec![0, 2, 4, 6]);

        // F# is not diatonic to C major, so it has no degree.
        let lydian = Chord::from_pcset(PCSet::from([0, 6]));
        assert_eq!(lydian.tones(), vec![0]);
    }

    #[test]
    fn test_from_scale_degrees() {
        let chord = Chord::from_scale_degrees(&[0, 2, 4], (Key::C, KeyType::Major));
        assert_eq!(pcs(&chord), vec![0, 4, 7]);

        let minor = Chord::from_scale_degrees(&[0, 2, 4], (Key::A, KeyType::Minor));
        assert_eq!(pcs(&minor), vec![9, 0, 4]);
    }

    #[test]
    fn test_voice_lead() {
        let next = Chord::parse("Fmaj7").unwrap();
        let led = Chord::voice_lead(&[60, 64, 67], &next);
        assert_eq!(led, vec![65, 69, 60, 64]);
    }
}
