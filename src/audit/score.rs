// src/audit/score.rs

/// Color band for a 0–100 score. One step function drives both the score
/// text color and the progress-bar fill, so the two cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warning,
    Critical,
}

impl ScoreBand {
    pub fn classify(score: u8) -> Self {
        if score >= 90 {
            ScoreBand::Good
        } else if score >= 70 {
            ScoreBand::Warning
        } else {
            ScoreBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Warning => "warning",
            ScoreBand::Critical => "critical",
        }
    }
}
