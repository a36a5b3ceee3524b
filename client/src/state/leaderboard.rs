//! Fixed leaderboard dataset and its display helpers.
//!
//! The rankings are hardcoded mock data; nothing creates, updates, or
//! removes entries at runtime.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

/// Rank movement since the last period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl Trend {
    /// Arrow shown in the trend column; empty for no change.
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "\u{2197}",
            Trend::Down => "\u{2198}",
            Trend::Same => "",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Trend::Up => "trend trend--up",
            Trend::Down => "trend trend--down",
            Trend::Same => "trend trend--same",
        }
    }
}

/// Badge displayed in a rank cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RankBadge {
    Crown,
    Trophy,
    Medal,
    Number(u32),
}

impl RankBadge {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => RankBadge::Crown,
            2 => RankBadge::Trophy,
            3 => RankBadge::Medal,
            n => RankBadge::Number(n),
        }
    }

    pub fn text(&self) -> String {
        match self {
            RankBadge::Crown => "\u{1F451}".to_owned(),
            RankBadge::Trophy => "\u{1F3C6}".to_owned(),
            RankBadge::Medal => "\u{1F3C5}".to_owned(),
            RankBadge::Number(n) => format!("#{n}"),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            RankBadge::Crown => "rank-badge rank-badge--crown",
            RankBadge::Trophy => "rank-badge rank-badge--trophy",
            RankBadge::Medal => "rank-badge rank-badge--medal",
            RankBadge::Number(_) => "rank-badge rank-badge--number",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: &'static str,
    pub rating: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_streak: u32,
    pub avatar: &'static str,
    pub rank: u32,
    pub trend: Trend,
}

impl LeaderboardEntry {
    /// Whole-number win percentage, 0 when no games were played.
    pub fn win_rate(&self) -> u32 {
        win_rate(self.wins, self.losses)
    }

    pub fn badge(&self) -> RankBadge {
        RankBadge::for_rank(self.rank)
    }

    /// Podium streak text, `None` when there is no active streak.
    pub fn streak_label(&self) -> Option<String> {
        (self.win_streak > 0).then(|| format!("\u{1F525} {} win streak", self.win_streak))
    }
}

/// Rounded `wins / (wins + losses)` as a percentage.
pub fn win_rate(wins: u32, losses: u32) -> u32 {
    let total = u64::from(wins) + u64::from(losses);
    if total == 0 {
        return 0;
    }
    let rate = (u64::from(wins) * 200 + total) / (total * 2);
    u32::try_from(rate).unwrap_or(100)
}

pub static ENTRIES: [LeaderboardEntry; 8] = [
    LeaderboardEntry {
        id: 1,
        name: "GrandMaster Alex",
        rating: 2650,
        wins: 127,
        losses: 23,
        win_streak: 8,
        avatar: "\u{1F451}",
        rank: 1,
        trend: Trend::Same,
    },
    LeaderboardEntry {
        id: 2,
        name: "Chess Ninja",
        rating: 2580,
        wins: 98,
        losses: 31,
        win_streak: 5,
        avatar: "\u{1F977}",
        rank: 2,
        trend: Trend::Up,
    },
    LeaderboardEntry {
        id: 3,
        name: "QueenSlayer",
        rating: 2520,
        wins: 156,
        losses: 44,
        win_streak: 12,
        avatar: "\u{2694}\u{FE0F}",
        rank: 3,
        trend: Trend::Down,
    },
    LeaderboardEntry {
        id: 4,
        name: "Knight Rider",
        rating: 2480,
        wins: 89,
        losses: 29,
        win_streak: 3,
        avatar: "\u{1F3C7}",
        rank: 4,
        trend: Trend::Up,
    },
    LeaderboardEntry {
        id: 5,
        name: "Pawn Storm",
        rating: 2420,
        wins: 67,
        losses: 33,
        win_streak: 7,
        avatar: "\u{26C8}\u{FE0F}",
        rank: 5,
        trend: Trend::Same,
    },
    LeaderboardEntry {
        id: 6,
        name: "Bishop Attack",
        rating: 2380,
        wins: 78,
        losses: 41,
        win_streak: 2,
        avatar: "\u{1F3F4}",
        rank: 6,
        trend: Trend::Down,
    },
    LeaderboardEntry {
        id: 7,
        name: "Rook Fortress",
        rating: 2340,
        wins: 92,
        losses: 55,
        win_streak: 4,
        avatar: "\u{1F3F0}",
        rank: 7,
        trend: Trend::Up,
    },
    LeaderboardEntry {
        id: 8,
        name: "King's Guard",
        rating: 2300,
        wins: 45,
        losses: 28,
        win_streak: 6,
        avatar: "\u{1F6E1}\u{FE0F}",
        rank: 8,
        trend: Trend::Same,
    },
];

/// The top three entries shown on the podium.
pub fn podium() -> &'static [LeaderboardEntry] {
    &ENTRIES[..3]
}
