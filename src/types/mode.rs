//! Modal collections: the stock diatonic mode families plus user-defined
//! scales collected in a [`ModeCatalog`].

use crate::types::pcset::PCSet;
use crate::types::pitch::PitchClass;
use crate::types::pitch_letter::KeyType;
use std::collections::HashMap;

/// Offsets for an arbitrary mode of a base collection: rotate and re-zero
/// on the new tonic, reduced mod 12.
pub fn modal_rotate(base: &[PitchClass], amount: usize) -> Vec<PitchClass> {
    if base.is_empty() {
        return Vec::new();
    }
    let n = base.len();
    let amount = amount % n;
    (0..n)
        .map(|i| (base[(i + amount) % n] - base[amount] + 12) % 12)
        .collect()
}

/// The seven modes of the major scale.
/// `MajorMode::Lydian.offsets()` gives `[0, 2, 4, 6, 7, 9, 11]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MajorMode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl MajorMode {
    /// Offsets-from-tonic for this mode.
    pub fn offsets(self) -> Vec<PitchClass> {
        modal_rotate(&KeyType::Major.pattern(), self as usize)
    }
}

/// The modes of harmonic major (major with a flatted sixth).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HarmonicMajorMode {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
}

impl HarmonicMajorMode {
    /// Offsets-from-tonic for this mode.
    /// `HarmonicMajorMode::Fifth.offsets()` gives `[0, 1, 4, 5, 7, 9, 10]`.
    pub fn offsets(self) -> Vec<PitchClass> {
        let mut base = KeyType::Major.pattern();
        base[5] = 8;
        modal_rotate(&base, self as usize)
    }
}

/// The modes of harmonic minor (natural minor with a raised seventh).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HarmonicMinorMode {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
}

impl HarmonicMinorMode {
    /// Offsets-from-tonic for this mode.
    /// `HarmonicMinorMode::Fifth.offsets()` gives `[0, 1, 4, 5, 7, 8, 10]`.
    pub fn offsets(self) -> Vec<PitchClass> {
        let mut base = KeyType::Minor.pattern();
        base[6] = 11;
        modal_rotate(&base, self as usize)
    }
}

/// The modes of ascending melodic minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MelodicMinorMode {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
}

impl MelodicMinorMode {
    /// Offsets-from-tonic for this mode.
    /// `MelodicMinorMode::Fifth.offsets()` gives `[0, 2, 4, 5, 7, 8, 10]`.
    pub fn offsets(self) -> Vec<PitchClass> {
        let mut base = KeyType::Minor.pattern();
        base[5] = 9;
        base[6] = 11;
        modal_rotate(&base, self as usize)
    }
}

/// A named custom scale structure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mode {
    /// Scale name.
    pub name: String,
    /// Offsets-from-tonic, reduced mod 12.
    pub offsets: Vec<PitchClass>,
}

impl Mode {
    /// Offsets for the nth mode of this scale, 1-based and clamped to the
    /// scale's length.
    pub fn mode(&self, number: u8) -> Vec<PitchClass> {
        if self.offsets.is_empty() {
            return Vec::new();
        }
        let amount = (usize::from(number))
            .saturating_sub(1)
            .min(self.offsets.len() - 1);
        modal_rotate(&self.offsets, amount)
    }
}

/// A collection of user-defined modes, keyed by name. Redefining a name
/// replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct ModeCatalog {
    modes: HashMap<String, Mode>,
}

impl ModeCatalog {
    pub fn new() -> Self {
        ModeCatalog::default()
    }

    /// Register a mode from raw offsets, which are reduced mod 12.
    pub fn define(&mut self, name: impl Into<String>, offsets: &[PitchClass]) -> Mode {
        let mode = Mode {
            name: name.into(),
            offsets: offsets.iter().map(|o| o % 12).collect(),
        };
        self.modes.insert(mode.name.clone(), mode.clone());
        mode
    }

    /// Register a mode from a pitch-class set, using its prime form zeroed
    /// on its first element.
    pub fn define_from_pcset(&mut self, name: impl Into<String>, pcset: &PCSet) -> Mode {
        let prime = pcset.prime_form();
        let first = prime.pitch_classes.first().copied().unwrap_or(0);
        let offsets: Vec<PitchClass> = prime.iter().map(|v| v - first).collect();
        self.define(name, &offsets)
    }

    /// Look up a mode by name.
    pub fn get(&self, name: &str) -> Option<&Mode> {
        self.modes.get(name)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lydian() {
        assert_eq!(MajorMode::Lydian.offsets(), vec![0, 2, 4, 6, 7, 9, 11]);
    }

    #[test]
    fn test_ionian_is_identity() {
        assert_eq!(MajorMode::Ionian.offsets(), vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_aeolian_matches_natural_minor() {
        assert_eq!(
            MajorMode::Aeolian.offsets(),
            KeyType::Minor.pattern().to_vec()
        );
    }

    #[test]
    fn test_harmonic_major_fifth() {
        assert_eq!(
            HarmonicMajorMode::Fifth.offsets(),
            vec![0, 1, 4, 5, 7, 9, 10]
        );
    }

    #[test]
    fn test_harmonic_minor_fifth() {
        assert_eq!(
            HarmonicMinorMode::Fifth.offsets(),
            vec![0, 1, 4, 5, 7, 8, 10]
        );
    }

    #[test]
    fn test_melodic_minor_fifth() {
        assert_eq!(
            MelodicMinorMode::Fifth.offsets(),
            vec![0, 2, 4, 5, 7, 8, 10]
        );
    }

    #[test]
    fn test_modal_rotate_degenerate() {
        assert_eq!(modal_rotate(&[], 3), Vec::<PitchClass>::new());
        assert_eq!(modal_rotate(&[0], 5), vec![0]);
    }

    #[test]
    fn test_custom_mode_rotation_clamps() {
        let catalog = {
            let mut c = ModeCatalog::new();
            c.define("pelog-ish", &[0, 1, 3, 7, 8]);
            c
        };
        let mode = catalog.get("pelog-ish").unwrap();
        assert_eq!(mode.mode(1), vec![0, 1, 3, 7, 8]);
        assert_eq!(mode.mode(2), vec![0, 2, 6, 7, 11]);
        // Out-of-range requests clamp to the last rotation.
        assert_eq!(mode.mode(9), mode.mode(5));
    }

    #[test]
    fn test_catalog_redefinition_replaces() {
        let mut catalog = ModeCatalog::new();
        catalog.define("scale", &[0, 2, 4]);
        catalog.define("scale", &[0, 1, 2]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("scale").unwrap().offsets, vec![0, 1, 2]);
    }

    #[test]
    fn test_define_reduces_mod_twelve() {
        let mut catalog = ModeCatalog::new();
        let mode = catalog.define("wide", &[0, 14, 19]);
        assert_eq!(mode.offsets, vec![0, 2, 7]);
    }

    #[test]
    fn test_define_from_pcset_uses_prime_form() {
        let mut catalog = ModeCatalog::new();
        let mode = catalog.define_from_pcset("triadic", &PCSet::from([7, 0, 4]));
        assert_eq!(mode.offsets, vec![0, 3, 7]);
    }
}
