//! Pitch-class sets and their canonical forms.
//!
//! A [`PCSet`] abstracts an ordered sequence of pitch-classes rather than a
//! true set, so duplicates and explicit ordering survive until a thinning
//! pass is requested. Canonical-form reduction (normal form, prime form) and
//! the Forte-catalog lookups live here.

use crate::types::forte;
use crate::types::pitch::PitchClass;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Index, IndexMut};

/// An ordered, duplicate-tolerant collection of pitch-classes (mod 12).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PCSet {
    /// Underlying pitch-class sequence. Every element lies in `[0, 11]`
    /// unless produced by a negative transposition (see [`PCSet::transposed`]).
    pub pitch_classes: Vec<PitchClass>,
}

impl PCSet {
    /// Create an empty pitch-class set.
    pub fn new() -> Self {
        PCSet::default()
    }

    /// Build from MIDI note numbers, reducing each mod 12.
    pub fn from_midi(notes: &[u8]) -> Self {
        PCSet {
            pitch_classes: notes.iter().map(|&n| PitchClass::from(n % 12)).collect(),
        }
    }

    /// Build from a Forte catalog name, e.g. `PCSet::from_forte_name("4-Z15")`
    /// gives `[0, 1, 4, 6]`. The catalog is scanned linearly for the name.
    pub fn from_forte_name(name: &str) -> Option<Self> {
        let prime = forte::lookup_prime(name)?;
        // 'A' encodes 10 and anything else past '9' encodes 11.
        let pcs = prime
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => d as PitchClass,
                None if c == 'A' => 10,
                None => 11,
            })
            .collect();
        Some(PCSet { pitch_classes: pcs })
    }

    /// Number of stored elements, duplicates included.
    pub fn len(&self) -> usize {
        self.pitch_classes.len()
    }

    /// True when no pitch-classes are stored.
    pub fn is_empty(&self) -> bool {
        self.pitch_classes.is_empty()
    }

    /// Number of *distinct* pitch-classes.
    pub fn cardinality(&self) -> usize {
        self.thinned().pitch_classes.len()
    }

    /// Iterate over the stored pitch-classes in order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.pitch_classes.iter().copied()
    }

    /// Membership test.
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.pitch_classes.contains(&pc)
    }

    /// Append a pitch-class, normalizing into `[0, 11]`.
    pub fn push(&mut self, pc: PitchClass) {
        self.pitch_classes.push(pc.rem_euclid(12));
    }

    /// Remove the first occurrence of `pc`, returning it if present.
    pub fn remove(&mut self, pc: PitchClass) -> Option<PitchClass> {
        let at = self.pitch_classes.iter().position(|&v| v == pc)?;
        Some(self.pitch_classes.remove(at))
    }

    /// An ordered replica with duplicates removed (first occurrence wins).
    pub fn thinned(&self) -> PCSet {
        let mut seen = Vec::with_capacity(self.pitch_classes.len());
        for &pc in &self.pitch_classes {
            if !seen.contains(&pc) {
                seen.push(pc);
            }
        }
        PCSet { pitch_classes: seen }
    }

    /// The normal form: the rotation of the thinned, sorted set that starts
    /// immediately after the single largest adjacent gap (ties broken by the
    /// leftmost gap). Sets of cardinality 0 or 1 are returned as-is.
    pub fn normal_form(&self) -> PCSet {
        let mut st = self.thinned().pitch_classes;
        st.sort_unstable();
        if st.len() <= 1 {
            return PCSet { pitch_classes: st };
        }

        let n = st.len();
        st.push(st[0] + 12); // close the circle
        let mut largest_diff = 0;
        let mut ld_index = 0;
        for i in 1..st.len() {
            let diff = st[i] - st[i - 1];
            if diff > largest_diff {
                largest_diff = diff;
                ld_index = i;
            }
        }

        // When the largest gap is the wrap gap, ld_index == n and the sorted
        // order is already the most packed rotation.
        let mut rotated = Vec::with_capacity(n);
        rotated.extend_from_slice(&st[ld_index.min(n)..n]);
        rotated.extend_from_slice(&st[..ld_index.min(n)]);
        PCSet {
            pitch_classes: rotated,
        }
    }

    /// The prime form: normal forms of the set and of its inversion are each
    /// transposed to start at 0, then the candidate with the smaller packing
    /// weight wins. The weight is a left-to-right reduction
    /// `w = 1; w += v * (1/w)` — a house tie-break heuristic, deliberately
    /// not the textbook best-normal-order comparison.
    pub fn prime_form(&self) -> PCSet {
        let nf = self.normal_form();
        if nf.is_empty() {
            return nf;
        }
        let rev = self.inverted().normal_form();

        let option1 = zeroed(&nf);
        let option2 = zeroed(&rev);

        if packing_weight(&option1) < packing_weight(&option2) {
            option1
        } else {
            option2
        }
    }

    /// Map each element `v` to `(12 - v) % 12`.
    pub fn inverted(&self) -> PCSet {
        PCSet {
            pitch_classes: self.pitch_classes.iter().map(|&v| (12 - v) % 12).collect(),
        }
    }

    /// Invert in place.
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// Map each element `v` to `(v + t) % 12`. `t` may be negative, in which
    /// case results may be negative too; callers normalize if they need to.
    pub fn transposed(&self, t: PitchClass) -> PCSet {
        PCSet {
            pitch_classes: self.pitch_classes.iter().map(|&v| (v + t) % 12).collect(),
        }
    }

    /// Transpose in place.
    pub fn transpose(&mut self, t: PitchClass) {
        *self = self.transposed(t);
    }

    /// Compound transposition/inversion. With `invert` set, the result is the
    /// normal form of the inverted-then-transposed set.
    pub fn transformed(&self, t: PitchClass, invert: bool) -> PCSet {
        if invert {
            self.inverted().transposed(t).normal_form()
        } else {
            self.transposed(t)
        }
    }

    /// In-place variant of [`PCSet::transformed`].
    pub fn transform(&mut self, t: PitchClass, invert: bool) {
        *self = self.transformed(t, invert);
    }

    /// Union under thinned membership semantics; order favors `self`.
    pub fn union(&self, other: &PCSet) -> PCSet {
        let mut pcs = self.pitch_classes.clone();
        pcs.extend_from_slice(&other.pitch_classes);
        PCSet { pitch_classes: pcs }.thinned()
    }

    /// Elements of `other` that are also members of `self`, in `other`'s order.
    pub fn intersection(&self, other: &PCSet) -> PCSet {
        PCSet {
            pitch_classes: other
                .pitch_classes
                .iter()
                .filter(|&&pc| self.contains(pc))
                .copied()
                .collect(),
        }
    }

    /// Members of exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &PCSet) -> PCSet {
        let intersection = self.intersection(other);
        let mut union = self.union(other);
        for pc in intersection.pitch_classes {
            union.remove(pc);
        }
        union
    }

    /// The Forte catalog name of this set's prime form, when the catalog
    /// carries a matching spelling.
    pub fn forte_code(&self) -> Option<&'static str> {
        let prime = self.prime_form();
        let digits: String = prime.pitch_classes.iter().map(|&v| pc_digit(v)).collect();
        forte::lookup_name(&digits)
    }
}

fn zeroed(set: &PCSet) -> PCSet {
    let first = set.pitch_classes[0];
    PCSet {
        pitch_classes: set
            .pitch_classes
            .iter()
            .map(|&v| ((12 + v) - first) % 12)
            .collect(),
    }
}

fn packing_weight(set: &PCSet) -> f64 {
    set.pitch_classes
        .iter()
        .fold(1.0_f64, |w, &v| w + f64::from(v) * (1.0 / w))
}

/// Digit encoding for prime-form strings: 0-9, then 'A' = 10, 'B' = 11.
fn pc_digit(pc: PitchClass) -> char {
    match pc {
        0..=9 => char::from_digit(pc as u32, 10).unwrap_or('0'),
        10 => 'A',
        _ => 'B',
    }
}

impl From<Vec<PitchClass>> for PCSet {
    fn from(pcs: Vec<PitchClass>) -> Self {
        pcs.into_iter().collect()
    }
}

impl From<&[PitchClass]> for PCSet {
    fn from(pcs: &[PitchClass]) -> Self {
        pcs.iter().copied().collect()
    }
}

impl<const N: usize> From<[PitchClass; N]> for PCSet {
    fn from(pcs: [PitchClass; N]) -> Self {
        pcs.into_iter().collect()
    }
}

impl FromIterator<PitchClass> for PCSet {
    /// Collect pitch-classes, normalizing each into `[0, 11]`.
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        PCSet {
            pitch_classes: iter.into_iter().map(|pc| pc.rem_euclid(12)).collect(),
        }
    }
}

impl Index<usize> for PCSet {
    type Output = PitchClass;

    fn index(&self, index: usize) -> &PitchClass {
        &self.pitch_classes[index]
    }
}

impl IndexMut<usize> for PCSet {
    fn index_mut(&mut self, index: usize) -> &mut PitchClass {
        &mut self.pitch_classes[index]
    }
}

impl<'a> IntoIterator for &'a PCSet {
    type Item = PitchClass;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PitchClass>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pitch_classes.iter().copied()
    }
}

// Set operations, in the operator style used for chords elsewhere.
impl BitOr for &PCSet {
    type Output = PCSet;

    fn bitor(self, other: &PCSet) -> PCSet {
        self.union(other)
    }
}

impl BitAnd for &PCSet {
    type Output = PCSet;

    fn bitand(self, other: &PCSet) -> PCSet {
        self.intersection(other)
    }
}

impl BitXor for &PCSet {
    type Output = PCSet;

    fn bitxor(self, other: &PCSet) -> PCSet {
        self.symmetric_difference(other)
    }
}

impl fmt::Display for PCSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pc) in self.pitch_classes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{pc}")?;
        }
        write!(f, "}}")
    }
}
