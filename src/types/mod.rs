// src/types/mod.rs

pub mod chord;
pub mod duration;
pub mod mode;
pub mod pcset;
pub mod pitch;
pub mod pitch_letter;
pub mod roman_numeral;
pub mod tone_row;
pub mod transform;
pub mod xenharmonic;

mod forte;

pub use chord::{map_suffix, separate_root, Chord, SeparatedChordSymbol};
pub use duration::{Duration, NoteValue, Tempo, TimeSignature};
pub use mode::{
    HarmonicMajorMode, HarmonicMinorMode, MajorMode, MelodicMinorMode, Mode, ModeCatalog,
};
pub use pcset::PCSet;
pub use pitch::{note_map, note_map_24, Note, Pitch, PitchClass, ScaleDegree};
pub use pitch_letter::{Key, KeyType, PitchLetter};
pub use roman_numeral::{Berklee, Traditional};
pub use tone_row::{MatrixForm, ToneMatrix, ToneRow};
pub use transform::{
    check_single_transformation, transform, ChordQuality, Transformation, Triad,
};
pub use xenharmonic::{edo_increment, midi_parse_edo, ED};
