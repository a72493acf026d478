//! Final score classification

/// Message bucket derived from the final score percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// 100%
    Perfect,
    /// 80% or more
    Great,
    /// 60% or more
    Good,
    /// 40% or more
    TryAgain,
    /// Below 40%
    KeepStudying,
}

impl ScoreTier {
    /// Classify `score` out of `total`.
    ///
    /// Thresholds are compared as `score * 100 >= pct * total` so boundary
    /// scores such as 4/5 land exactly on 80%.
    pub fn classify(score: usize, total: usize) -> Self {
        if total == 0 {
            return ScoreTier::KeepStudying;
        }
        let scaled = score * 100;
        if score >= total {
            ScoreTier::Perfect
        } else if scaled >= 80 * total {
            ScoreTier::Great
        } else if scaled >= 60 * total {
            ScoreTier::Good
        } else if scaled >= 40 * total {
            ScoreTier::TryAgain
        } else {
            ScoreTier::KeepStudying
        }
    }

    /// Short tier label
    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Perfect => "perfect",
            ScoreTier::Great => "great",
            ScoreTier::Good => "good",
            ScoreTier::TryAgain => "try again",
            ScoreTier::KeepStudying => "keep studying",
        }
    }

    /// Result message shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Perfect Score! You are a Genius!",
            ScoreTier::Great => "Great Job! You did well!",
            ScoreTier::Good => "Good Effort! Keep Practicing!",
            ScoreTier::TryAgain => "You can do better! Try again!",
            ScoreTier::KeepStudying => "Keep studying! You'll get better!",
        }
    }

    /// Whether the result deserves a celebration
    pub fn celebrates(&self) -> bool {
        matches!(self, ScoreTier::Perfect | ScoreTier::Great)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_question_tiers() {
        assert_eq!(ScoreTier::classify(5, 5), ScoreTier::Perfect);
        assert_eq!(ScoreTier::classify(4, 5), ScoreTier::Great);
        assert_eq!(ScoreTier::classify(3, 5), ScoreTier::Good);
        assert_eq!(ScoreTier::classify(2, 5), ScoreTier::TryAgain);
        assert_eq!(ScoreTier::classify(1, 5), ScoreTier::KeepStudying);
        assert_eq!(ScoreTier::classify(0, 5), ScoreTier::KeepStudying);
    }

    #[test]
    fn test_boundaries_with_uneven_totals() {
        // 2/3 = 66.6%
        assert_eq!(ScoreTier::classify(2, 3), ScoreTier::Good);
        // 7/9 = 77.7%
        assert_eq!(ScoreTier::classify(7, 9), ScoreTier::Good);
        // 4/10 = 40%
        assert_eq!(ScoreTier::classify(4, 10), ScoreTier::TryAgain);
        // 39/100
        assert_eq!(ScoreTier::classify(39, 100), ScoreTier::KeepStudying);
    }

    #[test]
    fn test_celebration_tiers() {
        assert!(ScoreTier::Perfect.celebrates());
        assert!(ScoreTier::Great.celebrates());
        assert!(!ScoreTier::Good.celebrates());
        assert!(!ScoreTier::KeepStudying.celebrates());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ScoreTier::Perfect.label(), "perfect");
        assert_eq!(ScoreTier::TryAgain.label(), "try again");
        assert!(ScoreTier::KeepStudying.message().starts_with("Keep studying"));
    }
}
