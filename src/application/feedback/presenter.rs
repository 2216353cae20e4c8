//! Result presenter: a pure mapping from form state to what is shown below it.

use crate::domain::feedback::{AnalysisResult, Sentiment, WorkflowState};

use super::controller::FeedbackSnapshot;

pub const NO_THEMES_PLACEHOLDER: &str = "No specific themes were identified.";

pub const RESET_LABEL: &str = "Analyze New Feedback";

/// Visual treatment keyed by sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Red,
    Yellow,
}

impl Tone {
    pub fn for_sentiment(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Tone::Green,
            Sentiment::Negative => Tone::Red,
            Sentiment::Neutral => Tone::Yellow,
        }
    }

    /// CSS class suffix used by the page stylesheet.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Green => "tone-green",
            Tone::Red => "tone-red",
            Tone::Yellow => "tone-yellow",
        }
    }
}

/// Everything needed to draw a successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub label: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    /// Score with two decimals, e.g. `0.90`.
    pub score_text: String,
    pub bar_width_percent: f64,
    pub summary: String,
    pub themes: Vec<String>,
    pub reset_label: &'static str,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            label: result.sentiment.as_str(),
            icon: icon_for(result.sentiment),
            tone: Tone::for_sentiment(result.sentiment),
            score_text: format!("{:.2}", result.sentiment_score),
            bar_width_percent: score_bar_width(result.sentiment_score),
            summary: result.summary.clone(),
            themes: result.key_themes.clone(),
            reset_label: RESET_LABEL,
        }
    }

    /// Placeholder to show instead of an empty tag row.
    pub fn themes_placeholder(&self) -> Option<&'static str> {
        self.themes.is_empty().then_some(NO_THEMES_PLACEHOLDER)
    }
}

/// The panel below the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Welcome,
    Loading,
    Error { message: String },
    Result(ResultView),
}

/// Maps a snapshot to its panel. Loading wins over Failed, which wins over
/// Succeeded, which wins over the welcome placeholder.
pub fn present(snapshot: &FeedbackSnapshot) -> Panel {
    match &snapshot.state {
        WorkflowState::Loading => Panel::Loading,
        WorkflowState::Failed(message) => Panel::Error {
            message: message.clone(),
        },
        WorkflowState::Succeeded(result) => Panel::Result(ResultView::from_result(result)),
        WorkflowState::Idle => Panel::Welcome,
    }
}

/// Maps a score in `[-1, 1]` linearly onto a bar width in `[0, 100]` percent.
/// Out-of-range scores are pinned to the ends of the bar.
pub fn score_bar_width(score: f64) -> f64 {
    if score.is_nan() {
        return 50.0;
    }
    ((score + 1.0) * 50.0).clamp(0.0, 100.0)
}

fn icon_for(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "\u{1F60A}",
        Sentiment::Negative => "\u{1F61E}",
        Sentiment::Neutral => "\u{1F610}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn snapshot(state: WorkflowState) -> FeedbackSnapshot {
        FeedbackSnapshot {
            text: String::new(),
            input_disabled: state.is_loading(),
            trigger_disabled: true,
            state,
            updated_at: Utc::now(),
        }
    }

    fn result(sentiment: Sentiment, score: f64, themes: &[&str]) -> AnalysisResult {
        AnalysisResult::new(
            sentiment,
            score,
            "Customer praised fast delivery and service.",
            themes.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn idle_shows_welcome() {
        assert_eq!(present(&snapshot(WorkflowState::Idle)), Panel::Welcome);
    }

    #[test]
    fn loading_shows_indicator() {
        assert_eq!(present(&snapshot(WorkflowState::Loading)), Panel::Loading);
    }

    #[test]
    fn failure_shows_message_verbatim() {
        let panel = present(&snapshot(WorkflowState::Failed("Something <odd>".into())));
        assert_eq!(
            panel,
            Panel::Error {
                message: "Something <odd>".to_string()
            }
        );
    }

    #[test]
    fn positive_result_view() {
        let state = WorkflowState::Succeeded(result(
            Sentiment::Positive,
            0.9,
            &["delivery speed", "service quality"],
        ));

        let Panel::Result(view) = present(&snapshot(state)) else {
            panic!("expected result panel");
        };

        assert_eq!(view.label, "Positive");
        assert_eq!(view.tone, Tone::Green);
        assert_eq!(view.score_text, "0.90");
        assert!((view.bar_width_percent - 95.0).abs() < 1e-9);
        assert_eq!(view.summary, "Customer praised fast delivery and service.");
        assert_eq!(view.themes.len(), 2);
        assert_eq!(view.themes_placeholder(), None);
        assert_eq!(view.reset_label, "Analyze New Feedback");
    }

    #[test]
    fn each_sentiment_has_its_own_tone() {
        assert_eq!(Tone::for_sentiment(Sentiment::Positive), Tone::Green);
        assert_eq!(Tone::for_sentiment(Sentiment::Negative), Tone::Red);
        assert_eq!(Tone::for_sentiment(Sentiment::Neutral), Tone::Yellow);
    }

    #[test]
    fn empty_themes_use_placeholder() {
        let view = ResultView::from_result(&result(Sentiment::Neutral, 0.0, &[]));
        assert_eq!(view.themes_placeholder(), Some(NO_THEMES_PLACEHOLDER));
    }

    #[test]
    fn bar_width_anchor_points() {
        assert_eq!(score_bar_width(-1.0), 0.0);
        assert_eq!(score_bar_width(0.0), 50.0);
        assert_eq!(score_bar_width(1.0), 100.0);
    }

    #[test]
    fn bar_width_pins_out_of_range_scores() {
        assert_eq!(score_bar_width(-3.0), 0.0);
        assert_eq!(score_bar_width(1.5), 100.0);
        assert_eq!(score_bar_width(f64::NAN), 50.0);
    }

    proptest! {
        #[test]
        fn bar_width_is_linear_in_range(score in -1.0f64..=1.0) {
            let width = score_bar_width(score);
            prop_assert!((width - (score + 1.0) * 50.0).abs() < 1e-9);
        }

        #[test]
        fn bar_width_is_monotonic(a in -1.0f64..=1.0, b in -1.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(score_bar_width(lo) <= score_bar_width(hi));
        }
    }
}
