//! # Tonos
//!
//! Tonos is a Rust library of music-theory building blocks for composition
//! and analysis. It covers pitch-class set theory (normal and prime forms,
//! Forte catalog lookups, tone rows and matrices), tonal harmony (chord
//! symbols, traditional and Berklee roman numerals, modal collections),
//! neo-Riemannian triadic transformations, and musical time (tempo, meter,
//! and durations).
//!
//! ## Modules
//!
//! - `types`: Defines the core data structures for musical concepts such as
//!   pitch-class sets, chords, roman numerals, modes, tone rows, and
//!   durations, along with their associated logic and operations.

pub mod types;

// Re-export commonly used types and functions for convenience
pub use crate::types::{
    check_single_transformation, transform, Berklee, Chord, ChordQuality, Duration, Key,
    KeyType, MajorMode, MatrixForm, Mode, ModeCatalog, Note, NoteValue, PCSet, Pitch,
    PitchClass, PitchLetter, Tempo, TimeSignature, ToneMatrix, ToneRow, Traditional,
    Transformation, Triad,
};
