//! Pitch primitives: pitch-classes, absolute pitches, and notes.

use crate::types::duration::Duration;
use crate::types::pitch_letter::PitchLetter;
use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// A pitch reduced modulo an octave, nominally in `[0, 11]`.
pub type PitchClass = i32;

/// An index into a seven-note diatonic pattern.
pub type ScaleDegree = usize;

/// A pitch-class plus an octave, with octaves numbered so that the MIDI
/// value is `oct * 12 + pc`; middle C is `Pitch::new(0, 5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pitch {
    /// The underlying pitch-class, clamped to at most 11.
    pub pc: PitchClass,
    /// Octave in scientific pitch notation.
    pub oct: i32,
}

impl Pitch {
    /// Build from a pitch-class and octave. Out-of-range pitch-classes are
    /// clamped to 11 rather than rejected.
    pub fn new(pc: PitchClass, octave: i32) -> Self {
        Pitch {
            pc: pc.min(11),
            oct: octave,
        }
    }

    /// Build from a spelled letter and octave.
    pub fn from_letter(letter: PitchLetter, octave: i32) -> Self {
        Pitch {
            pc: letter.pc(),
            oct: octave,
        }
    }

    /// Build from a MIDI note number.
    pub fn from_midi(midi: u8) -> Self {
        Pitch {
            pc: PitchClass::from(midi % 12),
            oct: i32::from(midi / 12),
        }
    }

    /// MIDI note number view.
    pub fn midi_value(&self) -> u8 {
        (self.oct * 12 + self.pc) as u8
    }

    /// Pitch-class parity, ignoring octave.
    pub fn same_pitch_class(&self, other: &Pitch) -> bool {
        self.pc == other.pc
    }
}

impl FromStr for Pitch {
    type Err = anyhow::Error;

    /// Parse a description such as `"Eb5"`.
    fn from_str(s: &str) -> Result<Self> {
        let octave_part: String = s.chars().filter(char::is_ascii_digit).collect();
        let letter_part: String = s.chars().filter(|c| !c.is_ascii_digit()).collect();

        let octave = octave_part
            .parse::<i32>()
            .map_err(|_| anyhow!("Missing octave in pitch: {}", s))?;
        let letter: PitchLetter = letter_part.parse()?;
        Ok(Pitch::from_letter(letter, octave))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PC{}:{}", self.pc, self.oct)
    }
}

/// A pitch with a duration and a velocity.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    pub pitch: Pitch,
    pub duration: Duration,
    /// MIDI-style velocity, clamped to at most 127.
    pub velocity: u8,
}

impl Note {
    pub fn new(pitch: Pitch, duration: Duration, velocity: u8) -> Self {
        Note {
            pitch,
            duration,
            velocity: velocity.min(127),
        }
    }
}

impl PartialEq for Note {
    /// Notes compare by pitch and realized duration; velocity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.pitch == other.pitch && self.duration.seconds() == other.duration.seconds()
    }
}

/// Map a note name to a pitch-class, e.g. `note_map("F#")` gives 6.
/// Accidentals stack; the result is not reduced mod 12, so `"Cb"` gives -1.
pub fn note_map(note_name: &str) -> Option<PitchClass> {
    let mut chars = note_name.chars();
    let letter = chars.next()?;
    let mut note = natural_pc(letter)?;

    for c in chars {
        match c {
            '#' => note += 1,
            'b' => note -= 1,
            'x' => note += 2,
            _ => return None,
        }
    }
    Some(note)
}

/// 24EDO variant of [`note_map`]: `+` raises and `d` lowers by a quarter
/// tone, e.g. `note_map_24("G+")` gives 15.
pub fn note_map_24(note_name: &str) -> Option<PitchClass> {
    let mut chars = note_name.chars();
    let letter = chars.next()?;
    let mut note = natural_pc(letter)? * 2;

    for c in chars {
        match c {
            '#' => note += 2,
            'b' => note -= 2,
            'x' => note += 4,
            '+' => note += 1,
            'd' => note -= 1,
            _ => return None,
        }
    }
    Some(note)
}

fn natural_pc(letter: char) -> Option<PitchClass> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}
