//! Musical time: time signatures, note values, tempo, and durations.
//!
//! Durations come in two flavors. A metered duration derives its length
//! from a tempo and a note value; a proportional duration scales a base
//! number of seconds. Both reduce to seconds, and duration equality is
//! defined on that reduction.

use anyhow::{anyhow, Result};
use num_rational::Ratio;
use num_traits::ToPrimitive;
use std::ops::RangeInclusive;

/// A time signature. Only dyadic denominators are representable; no
/// "irrational" meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    pub numerator: u8,
    pub denominator: u8,
}

impl TimeSignature {
    /// Build a time signature, e.g. `TimeSignature::new(6, 8)`.
    pub fn new(count: u8, value: u8) -> Result<Self> {
        if !value.is_power_of_two() {
            return Err(anyhow!("Time signature denominator must be dyadic: {}", value));
        }
        Ok(TimeSignature {
            numerator: count,
            denominator: value,
        })
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        TimeSignature {
            numerator: 4,
            denominator: 4,
        }
    }
}

/// Standard note values as subdivision factors of a whole note, with
/// triplet (`T`) and dotted (`D`) variants. `N4` is a quarter note, `T8` a
/// triplet eighth, `D16` a dotted sixteenth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteValue {
    N1,
    N2,
    N4,
    N8,
    N16,
    N32,
    N64,
    N128,
    T1,
    T2,
    T4,
    T8,
    T16,
    T32,
    T64,
    T128,
    D1,
    D2,
    D4,
    D8,
    D16,
    D32,
    D64,
    D128,
}

impl NoteValue {
    /// The exact subdivision factor. Triplets scale the plain value by 3/2,
    /// dotted values by 2/3.
    pub fn factor(self) -> Ratio<i64> {
        use NoteValue::*;
        match self {
            N1 => Ratio::from_integer(1),
            N2 => Ratio::from_integer(2),
            N4 => Ratio::from_integer(4),
            N8 => Ratio::from_integer(8),
            N16 => Ratio::from_integer(16),
            N32 => Ratio::from_integer(32),
            N64 => Ratio::from_integer(64),
            N128 => Ratio::from_integer(128),
            T1 => Ratio::new(3, 2),
            T2 => Ratio::from_integer(3),
            T4 => Ratio::from_integer(6),
            T8 => Ratio::from_integer(12),
            T16 => Ratio::from_integer(24),
            T32 => Ratio::from_integer(48),
            T64 => Ratio::from_integer(96),
            T128 => Ratio::from_integer(192),
            D1 => Ratio::new(2, 3),
            D2 => Ratio::new(4, 3),
            D4 => Ratio::new(8, 3),
            D8 => Ratio::new(16, 3),
            D16 => Ratio::new(32, 3),
            D32 => Ratio::new(64, 3),
            D64 => Ratio::new(128, 3),
            D128 => Ratio::new(256, 3),
        }
    }
}

/// A beats-per-minute value and the note value each beat stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo {
    /// Beats per minute, clamped to the soft limit at construction.
    pub bpm: f64,
    /// The value of each beat.
    pub value: NoteValue,
}

impl Tempo {
    /// Ceiling applied to BPM values unless overridden per call.
    pub const DEFAULT_SOFT_LIMIT: f64 = 400.0;

    /// A quarter-note tempo, e.g. `Tempo::new(116.5)`.
    pub fn new(bpm: f64) -> Self {
        Tempo::with_value(NoteValue::N4, bpm)
    }

    /// A tempo with an explicit beat value, e.g.
    /// `Tempo::with_value(NoteValue::D4, 140.0)`.
    pub fn with_value(value: NoteValue, bpm: f64) -> Self {
        Tempo {
            bpm: bpm.abs().min(Self::DEFAULT_SOFT_LIMIT),
            value,
        }
    }

    /// A quarter-note tempo clamped to a caller-chosen soft limit.
    pub fn with_soft_limit(bpm: f64, soft_limit: f64) -> Self {
        Tempo {
            bpm: bpm.abs().min(soft_limit.abs()),
            value: NoteValue::N4,
        }
    }

    /// The BPM range conventionally meant by an Italian tempo marking.
    pub fn marking_range(marking: &str) -> Option<RangeInclusive<u32>> {
        match marking {
            "grave" => Some(40..=50),
            "largo" => Some(50..=55),
            "larghetto" => Some(55..=60),
            "adagio" => Some(60..=70),
            "andante" => Some(70..=85),
            "moderato" => Some(85..=100),
            "allegretto" => Some(100..=115),
            "allegro" => Some(115..=140),
            "vivace" => Some(140..=150),
            "presto" => Some(150..=170),
            "prestissimo" => Some(170..=200),
            _ => None,
        }
    }

    /// A quarter-note tempo at the midpoint of a marking's range, e.g.
    /// `Tempo::from_marking("allegro")`. Markings are matched lower-case.
    pub fn from_marking(marking: &str) -> Option<Self> {
        let range = Self::marking_range(&marking.to_lowercase())?;
        let midpoint = (range.start() + range.end()) / 2;
        Some(Tempo::new(f64::from(midpoint)))
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Tempo::new(120.0)
    }
}

/// A duration, reducible to seconds.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Duration {
    /// A duration with metric context.
    Metered {
        tempo: Tempo,
        meter: TimeSignature,
        value: NoteValue,
    },
    /// A duration proportional to a base absolute-time interval.
    Proportional { base_seconds: f64, factor: f64 },
}

impl Duration {
    /// A metered duration, e.g. a quarter note at 120 BPM in 4/4.
    pub fn metered(tempo: Tempo, meter: TimeSignature, value: NoteValue) -> Self {
        Duration::Metered { tempo, meter, value }
    }

    /// A proportional duration equal to its base interval.
    pub fn proportional(base_seconds: f64) -> Self {
        Duration::Proportional {
            base_seconds: base_seconds.abs(),
            factor: 1.0,
        }
    }

    /// A proportional duration with an initial scaling factor.
    pub fn proportional_scaled(base_seconds: f64, factor: f64) -> Self {
        Duration::Proportional {
            base_seconds: base_seconds.abs(),
            factor,
        }
    }

    /// The absolute-time interval this duration stands for.
    pub fn seconds(&self) -> f64 {
        match *self {
            Duration::Metered { tempo, value, .. } => {
                let subdivision = value.factor() / tempo.value.factor();
                60.0 / (tempo.bpm * subdivision.to_f64().unwrap_or(1.0))
            }
            Duration::Proportional {
                base_seconds,
                factor,
            } => base_seconds * factor,
        }
    }

    /// Rescale a proportional duration, returning the new interval. The
    /// factor's sign is discarded. Metered durations are unaffected.
    pub fn scale(&mut self, scaling_factor: f64) -> f64 {
        if let Duration::Proportional { factor, .. } = self {
            *factor = scaling_factor.abs();
        }
        self.seconds()
    }
}

impl Default for Duration {
    /// A quarter note at 120 BPM in 4/4, i.e. half a second.
    fn default() -> Self {
        Duration::Metered {
            tempo: Tempo::default(),
            meter: TimeSignature::default(),
            value: NoteValue::N4,
        }
    }
}

impl PartialEq for Duration {
    /// Durations compare by the interval they reduce to.
    fn eq(&self, other: &Self) -> bool {
        self.seconds() == other.seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_signature_dyadic_only() {
        assert!(TimeSignature::new(4, 4).is_ok());
        assert!(TimeSignature::new(7, 8).is_ok());
        assert!(TimeSignature::new(4, 5).is_err());
        assert!(TimeSignature::new(4, 0).is_err());
    }

    #[test]
    fn test_note_value_factors() {
        assert_eq!(NoteValue::N4.factor(), Ratio::from_integer(4));
        assert_eq!(NoteValue::T8.factor(), Ratio::from_integer(12));
        assert_eq!(NoteValue::D4.factor(), Ratio::new(8, 3));
    }

    #[test]
    fn test_tempo_clamps_to_soft_limit() {
        assert_eq!(Tempo::new(1000.0).bpm, Tempo::DEFAULT_SOFT_LIMIT);
        assert_eq!(Tempo::new(-90.0).bpm, 90.0);
        assert_eq!(Tempo::with_soft_limit(1000.0, 600.0).bpm, 600.0);
    }

    #[test]
    fn test_tempo_markings() {
        assert_eq!(Tempo::marking_range("allegro"), Some(115..=140));
        assert_eq!(Tempo::marking_range("waltz"), None);

        let presto = Tempo::from_marking("Presto").unwrap();
        assert_eq!(presto.bpm, 160.0);
        assert_eq!(presto.value, NoteValue::N4);
    }

    #[test]
    fn test_metered_seconds() {
        let quarter = Duration::metered(
            Tempo::new(120.0),
            TimeSignature::default(),
            NoteValue::N4,
        );
        assert_eq!(quarter.seconds(), 0.5);

        let eighth = Duration::metered(
            Tempo::new(120.0),
            TimeSignature::default(),
            NoteValue::N8,
        );
        assert_eq!(eighth.seconds(), 0.25);

        // The beat value rescales: an eighth-note beat doubles the quarter.
        let against_eighth = Duration::metered(
            Tempo::with_value(NoteValue::N8, 120.0),
            TimeSignature::default(),
            NoteValue::N4,
        );
        assert_eq!(against_eighth.seconds(), 1.0);
    }

    #[test]
    fn test_proportional_scaling() {
        let mut d = Duration::proportional(2.0);
        assert_eq!(d.seconds(), 2.0);
        assert_eq!(d.scale(1.5), 3.0);
        assert_eq!(d.scale(-0.5), 1.0);
    }

    #[test]
    fn test_duration_equality_is_by_seconds() {
        let metered = Duration::default();
        let proportional = Duration::proportional(0.5);
        assert_eq!(metered, proportional);
    }
}
