//! Server-rendered HTML for the feedback form.

use std::fmt::Write;

use crate::application::feedback::{present, FeedbackSnapshot, Panel, ResultView};

const TITLE: &str = "Customer Sentiment Analyzer";

const TAGLINE: &str = "Instantly understand your customers' feelings with the power of AI.";

const PLACEHOLDER: &str = "e.g., 'The checkout process was seamless and the product arrived \
     faster than expected! Excellent service.'";

/// Seconds between automatic reloads while an analysis is running.
const LOADING_REFRESH_SECS: u32 = 1;

/// Renders the whole page for the given state.
pub fn render_page(snapshot: &FeedbackSnapshot) -> String {
    let panel = present(snapshot);

    let refresh = if matches!(panel, Panel::Loading) {
        format!(
            r#"<meta http-equiv="refresh" content="{}">"#,
            LOADING_REFRESH_SECS
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
{refresh}
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<header>
<h1>{title}</h1>
<p class="tagline">{tagline}</p>
</header>
<main class="card">
{form}
<section class="panel">
{panel}
</section>
</main>
<footer><p>Powered by Gemini API.</p></footer>
</div>
</body>
</html>
"#,
        refresh = refresh,
        title = TITLE,
        tagline = html_escape(TAGLINE),
        css = DEFAULT_CSS,
        form = render_form(snapshot),
        panel = render_panel(&panel),
    )
}

fn render_form(snapshot: &FeedbackSnapshot) -> String {
    let disabled = if snapshot.input_disabled { " disabled" } else { "" };
    let button_label = if snapshot.input_disabled {
        "Analyzing..."
    } else {
        "Analyze Sentiment"
    };

    format!(
        r#"<form method="post" action="/analyze">
<label for="feedback-input">Paste customer feedback below:</label>
<textarea id="feedback-input" name="feedback" rows="8" placeholder="{placeholder}"{disabled}>{text}</textarea>
<div class="actions"><button type="submit" class="primary"{disabled}>{label}</button></div>
</form>"#,
        placeholder = html_escape(PLACEHOLDER),
        disabled = disabled,
        text = html_escape(&snapshot.text),
        label = button_label,
    )
}

fn render_panel(panel: &Panel) -> String {
    match panel {
        Panel::Welcome => r#"<div class="welcome">
<h2>Ready when you are</h2>
<p>Paste a review, a support ticket or a survey answer above and press <strong>Analyze Sentiment</strong>.</p>
</div>"#
            .to_string(),
        Panel::Loading => r#"<div class="loading" role="status">
<div class="spinner"></div>
<p>Analyzing feedback...</p>
</div>"#
            .to_string(),
        Panel::Error { message } => format!(
            r#"<div class="error" role="alert"><strong>Error:</strong> {}</div>"#,
            html_escape(message)
        ),
        Panel::Result(view) => render_result(view),
    }
}

fn render_result(view: &ResultView) -> String {
    let mut themes = String::new();
    match view.themes_placeholder() {
        Some(placeholder) => {
            let _ = write!(themes, r#"<p class="muted">{}</p>"#, html_escape(placeholder));
        }
        None => {
            for theme in &view.themes {
                let _ = write!(themes, r#"<span class="tag">{}</span>"#, html_escape(theme));
            }
        }
    }

    format!(
        r#"<div class="result {tone}">
<div class="result-head">
<div class="sentiment"><span class="icon">{icon}</span>
<div><p class="muted">Overall Sentiment</p><h2>{label}</h2></div></div>
<form method="post" action="/reset"><button type="submit" class="secondary">{reset}</button></form>
</div>
<h3>Sentiment Score: {score}</h3>
<div class="bar"><div class="bar-fill" style="width: {width:.1}%"></div></div>
<h3>Summary</h3>
<p class="summary">&quot;{summary}&quot;</p>
<h3>Key Themes</h3>
<div class="themes">{themes}</div>
</div>"#,
        tone = view.tone.css_class(),
        icon = view.icon,
        label = view.label,
        reset = view.reset_label,
        score = view.score_text,
        width = view.bar_width_percent,
        summary = html_escape(&view.summary),
        themes = themes,
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Stylesheet inlined into every page.
const DEFAULT_CSS: &str = r#"
:root {
    --bg: #111827;
    --card: #1f2937;
    --border: #374151;
    --text: #f3f4f6;
    --muted: #9ca3af;
    --accent: #4f46e5;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    background: var(--bg);
    color: var(--text);
}
.container { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
header { text-align: center; }
h1 { font-size: 2.5rem; color: #818cf8; margin-bottom: 0.5rem; }
.tagline, .muted, footer { color: var(--muted); }
footer { text-align: center; margin-top: 3rem; font-size: 0.875rem; }
.card { margin-top: 2rem; background: var(--card); border: 1px solid var(--border); border-radius: 1rem; padding: 2rem; }
label { display: block; margin-bottom: 0.5rem; color: #d1d5db; }
textarea { width: 100%; padding: 1rem; background: var(--bg); color: var(--text); border: 1px solid #4b5563; border-radius: 0.5rem; resize: none; }
.actions { display: flex; justify-content: flex-end; margin-top: 1rem; }
button { border: 0; border-radius: 0.5rem; font-weight: 600; cursor: pointer; }
button.primary { padding: 0.75rem 2rem; background: var(--accent); color: #fff; }
button.secondary { padding: 0.5rem 1rem; background: var(--border); color: #d1d5db; }
button:disabled { opacity: 0.5; cursor: not-allowed; }
.panel { margin-top: 2rem; min-height: 300px; }
.welcome, .loading { text-align: center; color: var(--muted); padding-top: 3rem; }
.spinner { width: 3rem; height: 3rem; margin: 0 auto 1rem; border: 4px solid var(--border); border-top-color: var(--accent); border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.error { padding: 1rem; border: 1px solid rgba(239, 68, 68, 0.4); background: rgba(239, 68, 68, 0.1); color: #fca5a5; border-radius: 0.5rem; }
.result { padding: 1.5rem; border-radius: 0.5rem; border: 1px solid; }
.result-head { display: flex; justify-content: space-between; align-items: center; }
.sentiment { display: flex; align-items: center; gap: 1rem; }
.icon { font-size: 2.5rem; }
.bar { width: 100%; height: 0.625rem; background: var(--border); border-radius: 9999px; }
.bar-fill { height: 100%; border-radius: 9999px; }
.summary { font-style: italic; color: #d1d5db; }
.themes { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { padding: 0.25rem 0.75rem; background: var(--border); color: #67e8f9; border-radius: 9999px; font-size: 0.875rem; }
.tone-green { border-color: rgba(34, 197, 94, 0.3); background: rgba(34, 197, 94, 0.1); }
.tone-green h2 { color: #4ade80; }
.tone-green .bar-fill { background: #22c55e; }
.tone-red { border-color: rgba(239, 68, 68, 0.3); background: rgba(239, 68, 68, 0.1); }
.tone-red h2 { color: #f87171; }
.tone-red .bar-fill { background: #ef4444; }
.tone-yellow { border-color: rgba(234, 179, 8, 0.3); background: rgba(234, 179, 8, 0.1); }
.tone-yellow h2 { color: #facc15; }
.tone-yellow .bar-fill { background: #eab308; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feedback::{AnalysisResult, Sentiment, WorkflowState};
    use chrono::Utc;

    fn snapshot(text: &str, state: WorkflowState) -> FeedbackSnapshot {
        FeedbackSnapshot {
            text: text.to_string(),
            input_disabled: state.is_loading(),
            trigger_disabled: state.is_loading() || text.trim().is_empty(),
            state,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn html_escape_escapes_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("it's"), "it&#39;s");
    }

    #[test]
    fn idle_page_shows_welcome_and_enabled_form() {
        let html = render_page(&snapshot("", WorkflowState::Idle));
        assert!(html.contains("Customer Sentiment Analyzer"));
        assert!(html.contains("Ready when you are"));
        assert!(html.contains(">Analyze Sentiment</button>"));
        assert!(!html.contains(" disabled"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn loading_page_disables_form_and_refreshes() {
        let html = render_page(&snapshot("Great!", WorkflowState::Loading));
        assert!(html.contains("Analyzing..."));
        assert!(html.contains("<textarea id=\"feedback-input\""));
        assert!(html.contains(" disabled>Great!</textarea>"));
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("class=\"loading\""));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = render_page(&snapshot("x", WorkflowState::Failed("<b>bad</b>".into())));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(!html.contains("<b>bad</b>"));
    }

    #[test]
    fn result_page_shows_tone_bar_summary_and_tags() {
        let state = WorkflowState::Succeeded(AnalysisResult::new(
            Sentiment::Positive,
            0.9,
            "Customer praised fast delivery and service.",
            vec!["delivery speed".to_string(), "service quality".to_string()],
        ));
        let html = render_page(&snapshot("Great service, fast delivery!", state));

        assert!(html.contains("class=\"result tone-green\""));
        assert!(html.contains("<h2>Positive</h2>"));
        assert!(html.contains("Sentiment Score: 0.90"));
        assert!(html.contains("width: 95.0%"));
        assert!(html.contains("Customer praised fast delivery and service."));
        assert_eq!(html.matches("class=\"tag\"").count(), 2);
        assert!(html.contains("action=\"/reset\""));
        assert!(html.contains("Analyze New Feedback"));
    }

    #[test]
    fn result_without_themes_shows_placeholder() {
        let state = WorkflowState::Succeeded(AnalysisResult::new(
            Sentiment::Negative,
            -1.0,
            "Order never arrived.",
            vec![],
        ));
        let html = render_page(&snapshot("Where is my order", state));

        assert!(html.contains("class=\"result tone-red\""));
        assert!(html.contains("No specific themes were identified."));
        assert!(!html.contains("class=\"tag\""));
        assert!(html.contains("width: 0.0%"));
    }
}
