//! Tone rows and the derived twelve-by-twelve matrix.

use crate::types::pcset::PCSet;
use crate::types::pitch::PitchClass;
use crate::types::xenharmonic::ED;
use std::ops::Index;

/// An ordered row of pitch-classes for serial composition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneRow {
    /// The underlying pitch-class set.
    pub notes: PCSet,
}

impl ToneRow {
    pub fn new(notes: PCSet) -> Self {
        ToneRow { notes }
    }

    /// Number of distinct pitch-classes in the row.
    pub fn len(&self) -> usize {
        self.notes.cardinality()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Derive the full matrix of transposed and inverted row forms.
    pub fn build_matrix(&self) -> ToneMatrix {
        ToneMatrix::from_row(self)
    }
}

impl From<Vec<PitchClass>> for ToneRow {
    fn from(pcs: Vec<PitchClass>) -> Self {
        ToneRow::new(PCSet::from(pcs))
    }
}

impl<const N: usize> From<[PitchClass; N]> for ToneRow {
    fn from(pcs: [PitchClass; N]) -> Self {
        ToneRow::new(PCSet::from(pcs))
    }
}

impl Index<usize> for ToneRow {
    type Output = PitchClass;

    fn index(&self, index: usize) -> &PitchClass {
        &self.notes[index]
    }
}

impl<'a> IntoIterator for &'a ToneRow {
    type Item = PitchClass;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PitchClass>>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.pitch_classes.iter().copied()
    }
}

/// The four classical row forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixForm {
    /// Prime.
    P,
    /// Inversion.
    I,
    /// Retrograde.
    R,
    /// Retrograde inversion.
    RI,
}

/// A tone matrix: one transposition of the source row per pitch-class, laid
/// out so that row `p` starts on pitch-class `p`'s complement shift.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneMatrix {
    /// The underlying rows.
    pub rows: Vec<ToneRow>,
}

impl ToneMatrix {
    /// Build the matrix from a row. Pitch-classes that exceed the row
    /// length (possible for rows of fewer than twelve notes) keep their
    /// seed row unshifted.
    pub fn from_row(row: &ToneRow) -> Self {
        let n = row.len();
        let mut rows = vec![row.clone(); n];

        for pc in &row.notes {
            let idx = pc as usize;
            if idx >= n {
                continue;
            }
            let shift = n as PitchClass - row[idx];
            rows[idx] = ToneRow::new(
                row.notes
                    .iter()
                    .map(|v| (v + shift) % n as PitchClass)
                    .collect(),
            );
        }

        ToneMatrix { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A row form at a transposition offset, read from the matrix edges.
    pub fn row_form(&self, form: MatrixForm, offset: PitchClass) -> Option<ToneRow> {
        self.row_form_non12(form, offset, (12, 2))
    }

    /// A row form in an arbitrary equal division of the diapason.
    pub fn row_form_non12(
        &self,
        form: MatrixForm,
        offset: PitchClass,
        ed: ED,
    ) -> Option<ToneRow> {
        let top = self.rows.first()?;

        let pcs: Vec<PitchClass> = match form {
            MatrixForm::P => top.notes.iter().map(|v| (v + offset) % ed.0).collect(),
            MatrixForm::R => {
                let mut pcs: Vec<PitchClass> =
                    top.notes.iter().map(|v| (v + offset) % ed.0).collect();
                pcs.reverse();
                pcs
            }
            MatrixForm::I => self
                .rows
                .iter()
                .map(|r| (r[0] + offset) % ed.0)
                .collect(),
            MatrixForm::RI => {
                let mut pcs: Vec<PitchClass> = self
                    .rows
                    .iter()
                    .map(|r| (r[0] + offset) % ed.0)
                    .collect();
                pcs.reverse();
                pcs
            }
        };

        Some(ToneRow::new(pcs.into_iter().collect()))
    }
}

impl Index<usize> for ToneMatrix {
    type Output = ToneRow;

    fn index(&self, index: usize) -> &ToneRow {
        &self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromatic() -> ToneRow {
        ToneRow::from([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])
    }

    #[test]
    fn test_matrix_from_chromatic_row() {
        let matrix = chromatic().build_matrix();
        assert_eq!(matrix.len(), 12);

        // Row p is the source transposed down by p.
        assert_eq!(matrix[0], chromatic());
        assert_eq!(
            matrix[3].notes.pitch_classes,
            vec![9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_row_forms() {
        let matrix = chromatic().build_matrix();

        let p0 = matrix.row_form(MatrixForm::P, 0).unwrap();
        assert_eq!(p0, chromatic());

        let p3 = matrix.row_form(MatrixForm::P, 3).unwrap();
        assert_eq!(p3[0], 3);
        assert_eq!(p3[11], 2);

        let r0 = matrix.row_form(MatrixForm::R, 0).unwrap();
        assert_eq!(
            r0.notes.pitch_classes,
            vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]
        );

        let i0 = matrix.row_form(MatrixForm::I, 0).unwrap();
        assert_eq!(
            i0.notes.pitch_classes,
            vec![0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        );

        let ri0 = matrix.row_form(MatrixForm::RI, 0).unwrap();
        assert_eq!(
            ri0.notes.pitch_classes,
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]
        );
    }

    #[test]
    fn test_empty_matrix_has_no_row_forms() {
        let matrix = ToneRow::from([]).build_matrix();
        assert!(matrix.is_empty());
        assert_eq!(matrix.row_form(MatrixForm::P, 0), None);
    }

    #[test]
    fn test_short_row_skips_out_of_range_classes() {
        let matrix = ToneRow::from([0, 5, 7]).build_matrix();
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix[0].notes.pitch_classes, vec![0, 2, 1]);
        // Classes 5 and 7 exceed the row length, so their rows keep the seed.
        assert_eq!(matrix[1].notes.pitch_classes, vec![0, 5, 7]);
    }
}
