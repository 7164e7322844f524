use std::fmt;

/// A categorical difficulty label derived from a complexity score.
///
/// Levels are totally ordered: `VerySimple < Easy < Moderate < Hard <
/// VeryHard`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexityLevel {
    /// Scores up to 3.
    VerySimple,
    /// Scores 4 to 7.
    Easy,
    /// Scores 8 to 12.
    Moderate,
    /// Scores 13 to 20.
    Hard,
    /// Scores 21 and above.
    VeryHard,
}

impl ComplexityLevel {
    /// All levels, in ascending order.
    pub const ALL: [Self; 5] = [Self::VerySimple,
                                Self::Easy,
                                Self::Moderate,
                                Self::Hard,
                                Self::VeryHard];

    /// Maps a score onto its level.
    ///
    /// Each bound is the inclusive upper end of its level.
    ///
    /// # Example
    /// ```
    /// use roastulator::engine::complexity::level::ComplexityLevel;
    ///
    /// assert_eq!(ComplexityLevel::from_score(3), ComplexityLevel::VerySimple);
    /// assert_eq!(ComplexityLevel::from_score(4), ComplexityLevel::Easy);
    /// assert_eq!(ComplexityLevel::from_score(21), ComplexityLevel::VeryHard);
    /// ```
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            0..=3 => Self::VerySimple,
            4..=7 => Self::Easy,
            8..=12 => Self::Moderate,
            13..=20 => Self::Hard,
            _ => Self::VeryHard,
        }
    }

    /// Human-readable label, e.g. `"Very Simple"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VerySimple => "Very Simple",
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_upper_bounds() {
        let cases = [(0, ComplexityLevel::VerySimple),
                     (3, ComplexityLevel::VerySimple),
                     (4, ComplexityLevel::Easy),
                     (7, ComplexityLevel::Easy),
                     (8, ComplexityLevel::Moderate),
                     (12, ComplexityLevel::Moderate),
                     (13, ComplexityLevel::Hard),
                     (20, ComplexityLevel::Hard),
                     (21, ComplexityLevel::VeryHard),
                     (u32::MAX, ComplexityLevel::VeryHard)];
        for (score, level) in cases {
            assert_eq!(ComplexityLevel::from_score(score), level, "score {score}");
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(ComplexityLevel::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn labels() {
        assert_eq!(ComplexityLevel::VerySimple.to_string(), "Very Simple");
        assert_eq!(ComplexityLevel::VeryHard.to_string(), "Very Hard");
    }
}
