/// Discrete color tier for a day's contribution count.
///
/// Banding follows the five-tier thresholds throughout; `Zero` keeps the
/// mapping total over all counts even though zero-count days are never drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Band {
    Zero,
    One,
    Two,
    Three,
    Four,
}

impl Band {
    /// Threshold lookup: 0, 1..=3, 4..=6, 7..=9, 10+.
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Self::Zero,
            1..=3 => Self::One,
            4..=6 => Self::Two,
            7..=9 => Self::Three,
            _ => Self::Four,
        }
    }

    /// Fill color for this band on the dark background.
    pub fn color(self) -> &'static str {
        match self {
            Self::Zero => "#161b22",
            Self::One => "#0e4429",
            Self::Two => "#006d32",
            Self::Three => "#26a641",
            Self::Four => "#39d353",
        }
    }
}
