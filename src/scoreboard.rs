//! Final score summary.

/// Counters at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreInput {
    pub score: usize,
    pub total_questions: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub elapsed_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Great,
    Good,
    Studying,
    Practice,
}

impl ScoreTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            75..=89 => Self::Great,
            60..=74 => Self::Good,
            40..=59 => Self::Studying,
            _ => Self::Practice,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Great => "Great job!",
            Self::Good => "Good work!",
            Self::Studying => "Keep studying!",
            Self::Practice => "Practice makes perfect!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total_questions: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub percentage: u32,
    pub accuracy: u32,
    pub tier: ScoreTier,
    pub elapsed: String,
    /// `None` when there were no questions to average over.
    pub average_per_question: Option<String>,
}

impl Summary {
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

pub fn summarize(input: ScoreInput) -> Summary {
    let percentage = rounded_percent(input.score, input.total_questions);
    let accuracy = rounded_percent(input.correct, input.correct + input.incorrect);

    let average_per_question = (input.total_questions > 0).then(|| {
        let average = (f64::from(input.elapsed_secs) / input.total_questions as f64).round();
        format_clock(average as u32)
    });

    Summary {
        score: input.score,
        total_questions: input.total_questions,
        correct: input.correct,
        incorrect: input.incorrect,
        percentage,
        accuracy,
        tier: ScoreTier::from_percentage(percentage),
        elapsed: format_clock(input.elapsed_secs),
        average_per_question,
    }
}

/// Format seconds as `m:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_out_of_ten() {
        let summary = summarize(ScoreInput {
            score: 7,
            total_questions: 10,
            correct: 7,
            incorrect: 3,
            elapsed_secs: 125,
        });
        assert_eq!(summary.percentage, 70);
        assert_eq!(summary.accuracy, 70);
        assert_eq!(summary.elapsed, "2:05");
        assert_eq!(summary.average_per_question.as_deref(), Some("0:13"));
        assert_eq!(summary.tier, ScoreTier::Good);
        assert_eq!(summary.message(), "Good work!");
    }

    #[test]
    fn test_no_questions_does_not_divide_by_zero() {
        let summary = summarize(ScoreInput::default());
        assert_eq!(summary.percentage, 0);
        assert_eq!(summary.accuracy, 0);
        assert_eq!(summary.elapsed, "0:00");
        assert!(summary.average_per_question.is_none());
        assert_eq!(summary.tier, ScoreTier::Practice);
    }

    #[test]
    fn test_accuracy_only_counts_answered_questions() {
        let summary = summarize(ScoreInput {
            score: 2,
            total_questions: 10,
            correct: 2,
            incorrect: 1,
            elapsed_secs: 60,
        });
        assert_eq!(summary.percentage, 20);
        assert_eq!(summary.accuracy, 67);
        assert_eq!(summary.average_per_question.as_deref(), Some("0:06"));
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::from_percentage(100), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_percentage(90), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_percentage(89), ScoreTier::Great);
        assert_eq!(ScoreTier::from_percentage(75), ScoreTier::Great);
        assert_eq!(ScoreTier::from_percentage(60), ScoreTier::Good);
        assert_eq!(ScoreTier::from_percentage(40), ScoreTier::Studying);
        assert_eq!(ScoreTier::from_percentage(39), ScoreTier::Practice);
    }

    #[test]
    fn test_format_clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(754), "12:34");
    }
}
