// src/render/score_message.rs

pub const EXCELLENT: &str = "Excellent! Ready for applications.";
pub const GOOD: &str = "Good, but needs optimization.";
pub const NEEDS_IMPROVEMENT: &str = "Needs significant improvement.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreTier {
    NeedsImprovement,
    Good,
    Excellent,
}

impl ScoreTier {
    /// Lower bounds are inclusive. NaN lands in the lowest tier.
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else {
            ScoreTier::NeedsImprovement
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Excellent => EXCELLENT,
            ScoreTier::Good => GOOD,
            ScoreTier::NeedsImprovement => NEEDS_IMPROVEMENT,
        }
    }
}

pub fn score_message(score: f64) -> &'static str {
    ScoreTier::for_score(score).message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(score_message(59.0), NEEDS_IMPROVEMENT);
        assert_eq!(score_message(60.0), GOOD);
        assert_eq!(score_message(79.0), GOOD);
        assert_eq!(score_message(79.99), GOOD);
        assert_eq!(score_message(80.0), EXCELLENT);
        assert_eq!(score_message(100.0), EXCELLENT);
        assert_eq!(score_message(0.0), NEEDS_IMPROVEMENT);
        assert_eq!(score_message(f64::NAN), NEEDS_IMPROVEMENT);
    }

    #[test]
    fn test_tier_is_monotonic() {
        let mut previous = ScoreTier::for_score(-10.0);
        for step in -100..=1100 {
            let tier = ScoreTier::for_score(step as f64 / 10.0);
            assert!(tier >= previous, "tier dropped at {}", step as f64 / 10.0);
            previous = tier;
        }
    }
}
