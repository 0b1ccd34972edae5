//! Helpers for equal divisions of the octave beyond 12.

/// An equal division: `(divisions, diapason)`, so 12-EDO is `(12, 2)`.
pub type ED = (i32, i32);

/// Infer an equal division of the octave from fractional MIDI pitches,
/// reading the smallest non-zero fractional part as the step size. Returns
/// 0 when no fractional content is present to measure.
pub fn midi_parse_edo(midi_pitches: &[f64]) -> i32 {
    let after_radix: Vec<f64> = midi_pitches.iter().map(|p| p - p.floor()).collect();

    let smallest = match after_radix
        .iter()
        .copied()
        .filter(|v| *v != 0.0)
        .reduce(f64::min)
    {
        Some(s) => s,
        None => return 0,
    };
    let largest = match after_radix.iter().copied().reduce(f64::max) {
        Some(l) => l,
        None => return 0,
    };

    if largest == 0.0 {
        return 12;
    }

    ((1.0 / smallest) * 12.0).round() as i32
}

/// Size of one step of an equal division, in 12-EDO semitones.
pub fn edo_increment(edo: i32) -> f64 {
    12.0 / f64::from(edo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_tones() {
        assert_eq!(midi_parse_edo(&[60.0, 60.5, 62.0]), 24);
    }

    #[test]
    fn test_eighth_tones() {
        assert_eq!(midi_parse_edo(&[60.25, 60.125]), 96);
    }

    #[test]
    fn test_integer_pitches_have_no_step_to_measure() {
        assert_eq!(midi_parse_edo(&[60.0, 62.0, 64.0]), 0);
        assert_eq!(midi_parse_edo(&[]), 0);
    }

    #[test]
    fn test_edo_increment() {
        assert_eq!(edo_increment(24), 0.5);
        assert_eq!(edo_increment(12), 1.0);
    }
}
