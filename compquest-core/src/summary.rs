//! Result summary: final percentage and feedback tier.

use serde::Serialize;

use crate::progress::rounded_percent;

/// Score bracket, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// 90% and above.
    Top,
    /// 70% to 89%.
    Second,
    /// 50% to 69%.
    Third,
    /// Below 50%.
    Bottom,
}

impl Tier {
    /// Classify a percentage. Lower bounds are inclusive, checked best-first.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            p if p >= 90 => Tier::Top,
            p if p >= 70 => Tier::Second,
            p if p >= 50 => Tier::Third,
            _ => Tier::Bottom,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Top => "Outstanding! You're a Tech Guru!",
            Tier::Second => "Great Job! You really know your stuff.",
            Tier::Third => "Good effort! Keep learning.",
            Tier::Bottom => "Don't give up! Every expert was once a beginner.",
        }
    }

    /// Short badge shown above the message.
    pub fn badge(self) -> &'static str {
        match self {
            Tier::Top => "🏆 Trophy",
            Tier::Second => "★ Star",
            Tier::Third => "👍 Thumbs up",
            Tier::Bottom => "📖 Keep reading",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub percent: u8,
    pub tier: Tier,
}

impl ResultSummary {
    pub fn new(score: usize, total: usize) -> Self {
        let percent = rounded_percent(score, total);
        Self {
            score,
            total,
            percent,
            tier: Tier::from_percent(percent),
        }
    }

    pub fn message(&self) -> &'static str {
        self.tier.message()
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::from_percent(100), Tier::Top);
        assert_eq!(Tier::from_percent(90), Tier::Top);
        assert_eq!(Tier::from_percent(89), Tier::Second);
        assert_eq!(Tier::from_percent(70), Tier::Second);
        assert_eq!(Tier::from_percent(69), Tier::Third);
        assert_eq!(Tier::from_percent(50), Tier::Third);
        assert_eq!(Tier::from_percent(49), Tier::Bottom);
        assert_eq!(Tier::from_percent(0), Tier::Bottom);
    }

    #[test]
    fn summary_from_score() {
        let s = ResultSummary::new(9, 10);
        assert_eq!(s.percent, 90);
        assert_eq!(s.tier, Tier::Top);
        assert_eq!(s.message(), "Outstanding! You're a Tech Guru!");

        let s = ResultSummary::new(7, 10);
        assert_eq!(s.tier, Tier::Second);

        let s = ResultSummary::new(1, 2);
        assert_eq!(s.percent, 50);
        assert_eq!(s.tier, Tier::Third);

        let s = ResultSummary::new(49, 100);
        assert_eq!(s.tier, Tier::Bottom);
    }

    #[test]
    fn rounding_can_lift_into_next_tier() {
        // 61/87 = 70.11 -> 70
        assert_eq!(ResultSummary::new(61, 87).tier, Tier::Second);
        // 43/87 = 49.43 -> 49
        assert_eq!(ResultSummary::new(43, 87).tier, Tier::Bottom);
        // 78/87 = 89.66 -> 90
        assert_eq!(ResultSummary::new(78, 87).tier, Tier::Top);
    }

    #[test]
    fn every_tier_has_distinct_message() {
        let tiers = [Tier::Top, Tier::Second, Tier::Third, Tier::Bottom];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn zero_total_is_bottom() {
        let s = ResultSummary::new(0, 0);
        assert_eq!(s.percent, 0);
        assert_eq!(s.tier, Tier::Bottom);
    }
}
