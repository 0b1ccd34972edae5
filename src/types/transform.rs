//! Neo-Riemannian triadic transformations.
//!
//! Triads are `(root, quality)` pairs. The three primitives P, R, and L
//! act on spelled roots through fixed lookup tables, and the compounds
//! N, S, and H are chains of primitives. Transformations are partial:
//! chains that step outside the tables, and inputs the tables do not
//! cover, give `None`.

use crate::types::pitch_letter::PitchLetter;

/// The standard neo-Riemannian operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transformation {
    /// Parallel: swap major and minor over the same root.
    P,
    /// Relative: major to its relative minor and back.
    R,
    /// Leading-tone exchange.
    L,
    /// Nebenverwandt, R then L then P.
    N,
    /// Slide, L then P then R.
    S,
    /// Hexatonic pole, L then P then L.
    H,
}

impl Transformation {
    /// Every operation, in probe order for [`check_single_transformation`].
    pub const ALL: [Transformation; 6] = [
        Transformation::P,
        Transformation::R,
        Transformation::L,
        Transformation::N,
        Transformation::S,
        Transformation::H,
    ];
}

/// Triadic chord qualities for transformational contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

/// A root spelling paired with a triad quality.
pub type Triad = (PitchLetter, ChordQuality);

/// Root mapping for the R transformation from major: down a minor third,
/// preserving spelling.
fn relative_root(letter: PitchLetter) -> Option<PitchLetter> {
    use PitchLetter::*;
    Some(match letter {
        C => A,
        Bs => Gx,
        Dbb => Bbb,
        Db => Bb,
        Cs => As,
        D => B,
        Cx => Ax,
        Ebb => Cb,
        Eb => C,
        Ds => Bs,
        E => Cs,
        Dx => Bx,
        Fb => Db,
        F => D,
        Es => Cx,
        Gbb => Ebb,
        Gb => Eb,
        Fs => Ds,
        G => E,
        Fx => Dx,
        Abb => Fb,
        Ab => F,
        Gs => Es,
        A => Fs,
        Gx => Ex,
        Bbb => Gb,
        Bb => G,
        As => Fsx,
        B => Gs,
        Ax => Fx,
        Cb => Ab,
        _ => return None,
    })
}

/// Root mapping for the L transformation from major.
// TODO: this currently mirrors relative_root; L from major should land a
// major third up (C major -> E minor), so the table needs its own roots.
fn leading_tone_root(letter: PitchLetter) -> Option<PitchLetter> {
    relative_root(letter)
}

/// Apply a transformation to a major triad. Minor inputs are not covered
/// by the root tables and give `None`.
pub fn transform(chord: Triad, transformation: Transformation) -> Option<Triad> {
    use Transformation::*;

    if chord.1 != ChordQuality::Major {
        return None;
    }

    match transformation {
        P => parallel(chord),
        R => relative(chord),
        L => leading_tone(chord),
        N => parallel(leading_tone(relative(chord)?)?),
        S => relative(parallel(leading_tone(chord)?)?),
        H => leading_tone(parallel(leading_tone(chord)?)?),
    }
}

/// The P transformation on a single triad.
pub fn parallel(chord: Triad) -> Option<Triad> {
    match chord.1 {
        ChordQuality::Major => Some((chord.0, ChordQuality::Minor)),
        ChordQuality::Minor => Some((chord.0, ChordQuality::Major)),
        _ => None,
    }
}

/// The R transformation on a single triad.
pub fn relative(chord: Triad) -> Option<Triad> {
    with_table(chord, relative_root)
}

/// The L transformation on a single triad.
pub fn leading_tone(chord: Triad) -> Option<Triad> {
    with_table(chord, leading_tone_root)
}

fn with_table(chord: Triad, table: fn(PitchLetter) -> Option<PitchLetter>) -> Option<Triad> {
    match chord.1 {
        ChordQuality::Major => Some((table(chord.0)?, ChordQuality::Minor)),
        // From minor the root stays put; the table only gates coverage.
        ChordQuality::Minor => table(chord.0).map(|_| (chord.0, ChordQuality::Major)),
        _ => None,
    }
}

/// Identify a single transformation mapping one triad to another, probing
/// in [`Transformation::ALL`] order.
pub fn check_single_transformation(from: Triad, to: Triad) -> Option<Transformation> {
    Transformation::ALL
        .into_iter()
        .find(|&t| transform(from, t) == Some(to))
}
