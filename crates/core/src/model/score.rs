/// Running tally for one game session.
///
/// The percentage is always derived from the counts, never taken from the
/// agent, so it stays in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: u32,
    total: u32,
}

impl Score {
    /// Builds a score, clamping `correct` to `total`.
    #[must_use]
    pub fn new(correct: u32, total: u32) -> Self {
        Self {
            correct: correct.min(total),
            total,
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// `round(100 * correct / total)`, or 0 before the first answer.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let scaled = u64::from(self.correct) * 200 + u64::from(self.total);
        let rounded = scaled / (2 * u64::from(self.total));
        u32::try_from(rounded).unwrap_or(100).min(100)
    }

    /// True when `next` would move either count backwards.
    #[must_use]
    pub fn regresses_to(&self, next: Score) -> bool {
        next.correct < self.correct || next.total < self.total
    }

    /// Component-wise maximum, keeping the tally non-decreasing.
    #[must_use]
    pub fn merge(self, next: Score) -> Score {
        Score::new(self.correct.max(next.correct), self.total.max(next.total))
    }
}
