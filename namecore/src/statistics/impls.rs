use std::fmt;
use crate::statistics::*;

impl RankBadge {
    /// Badge for a 1-based rank.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RankBadge::Gold,
            2 => RankBadge::Silver,
            3 => RankBadge::Bronze,
            n => RankBadge::Numbered(n),
        }
    }
}

impl fmt::Display for RankBadge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RankBadge::Gold => f.write_str("🥇"),
            RankBadge::Silver => f.write_str("🥈"),
            RankBadge::Bronze => f.write_str("🥉"),
            RankBadge::Numbered(n) => write!(f, "#{n}"),
        }
    }
}

/// Relative bar width in percent for a ranking row.
///
/// The server supplied percentage wins; otherwise the podium gets
/// 80/60/40 and everything else 40.
pub fn bar_width(rank: usize, percentage: Option<f64>) -> f64 {
    match percentage {
        Some(p) if p != 0.0 => p,
        _ if (1..=3).contains(&rank) => 100.0 - rank as f64 * 20.0,
        _ => 40.0,
    }
}

impl PopularName {
    pub fn bar_width(&self, rank: usize) -> f64 {
        bar_width(rank, self.percentage)
    }
}

impl PopularNames {
    /// Pairs every entry with its 1-based rank and badge, in server order.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, RankBadge, &PopularName)> {
        self.names.iter()
            .enumerate()
            .map(|(i, name)| (i + 1, RankBadge::for_rank(i + 1), name))
    }
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            hot_threshold: DEFAULT_HOT_THRESHOLD,
        }
    }
}

impl TrendSettings {
    pub fn new(hot_threshold: f64) -> Self {
        Self { hot_threshold }
    }

    pub fn classify(&self, growth: f64) -> TrendClass {
        if growth > self.hot_threshold {
            TrendClass::Hot
        } else if growth > 0.0 {
            TrendClass::Rising
        } else {
            TrendClass::Falling
        }
    }
}

impl TrendingName {
    pub fn is_rising(&self) -> bool {
        self.growth > 0.0
    }

    pub fn class(&self, settings: &TrendSettings) -> TrendClass {
        settings.classify(self.growth)
    }
}

impl fmt::Display for TrendClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TrendClass::Hot => "hot",
            TrendClass::Rising => "rising",
            TrendClass::Falling => "falling",
        })
    }
}
