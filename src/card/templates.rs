//! Askama templates producing the SVG documents.
//!
//! Templates live in `templates/` and are compiled with escaping disabled:
//! every interpolated string is passed through [`escape_xml`] while the view
//! is built, so the markup never double-escapes.

use askama::Template;

use crate::card::format::{escape_xml, format_duration, format_percent};
use crate::card::layout::{BAR_WIDTH, CARD_WIDTH, DIVIDER_X, LanguageRow, RenderInput};
use crate::error::AppError;

/// Served when the error template itself cannot be rendered.
pub const FALLBACK_ERROR_SVG: &str = r##"<svg width="900" height="100" viewBox="0 0 900 100" xmlns="http://www.w3.org/2000/svg"><rect width="900" height="100" fill="#0F172A"/><text x="450" y="55" font-family="system-ui, sans-serif" font-size="14" fill="#F87171" text-anchor="middle" font-weight="600">Failed to fetch stats</text></svg>"##;

/// The full stat card.
#[derive(Template)]
#[template(path = "stat_card.svg", escape = "none")]
pub struct StatCardTemplate {
    pub width: u32,
    pub height: u32,
    pub username: String,
    pub coding_percent: String,
    pub total: String,
    pub daily_average: String,
    pub language_count: usize,
    pub bar_width: f64,
    pub rows: Vec<LanguageRow>,
    pub show_divider: bool,
    pub divider_x: u32,
    pub divider_top: u32,
    pub divider_bottom: u32,
}

impl StatCardTemplate {
    pub fn from_input(input: &RenderInput) -> Self {
        let mut rows = input.left_rows();
        rows.extend(input.right_rows());

        Self {
            width: CARD_WIDTH,
            height: input.height(),
            username: escape_xml(&input.username),
            coding_percent: format_percent(input.coding_percent),
            total: escape_xml(&input.human_readable_total),
            daily_average: format_duration(input.daily_average_seconds),
            language_count: input.language_count,
            bar_width: BAR_WIDTH,
            rows,
            show_divider: input.has_languages(),
            divider_x: DIVIDER_X,
            divider_top: input.divider_top(),
            divider_bottom: input.divider_bottom(),
        }
    }
}

/// Small card carrying a single failure message.
#[derive(Template)]
#[template(path = "error_card.svg", escape = "none")]
pub struct ErrorCardTemplate {
    pub message: String,
}

/// Renders the stat card for a prepared [`RenderInput`].
///
/// # Errors
///
/// Returns [`AppError::Render`] if the template fails to render.
pub fn render_stat_card(input: &RenderInput) -> Result<String, AppError> {
    StatCardTemplate::from_input(input)
        .render()
        .map_err(|e| AppError::render(format!("Failed to render stats card: {e}")))
}

/// Renders an error card. The message is escaped here.
pub fn render_error_card(message: &str) -> String {
    let template = ErrorCardTemplate {
        message: escape_xml(message),
    };

    template.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render error card: {}", e);
        FALLBACK_ERROR_SVG.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryUsage, LanguageUsage, UsageSnapshot};

    fn input() -> RenderInput {
        RenderInput::from_snapshot(&UsageSnapshot {
            username: "alice".to_string(),
            human_readable_total: "12 hrs 5 mins".to_string(),
            categories: vec![CategoryUsage {
                name: "coding".to_string(),
                percent: 87.3,
            }],
            languages: vec![
                LanguageUsage::new("Rust", 30000.0, 70.0),
                LanguageUsage::new("Python", 10000.0, 25.0),
                LanguageUsage::new("TOML", 500.0, 5.0),
            ],
            total_seconds: 43500.0,
        })
    }

    #[test]
    fn test_stat_card_contents() {
        let svg = render_stat_card(&input()).unwrap();

        assert!(svg.trim_start().starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("@alice"));
        assert!(svg.contains("87% coding"));
        assert!(svg.contains("12 hrs 5 mins"));
        // 43500 / 30 = 1450s
        assert!(svg.contains(">24m 10s<"));
        assert!(svg.contains(">3<"));
        assert!(svg.contains(">Rust<"));
        assert!(svg.contains(">Python<"));
        assert!(!svg.contains("TOML"));
        assert!(svg.contains("#CE422B"));
        assert!(svg.contains("#3776AB"));
        assert!(svg.contains(r#"<line x1="470""#));
    }

    #[test]
    fn test_stat_card_dimensions() {
        let svg = render_stat_card(&input()).unwrap();

        assert!(svg.contains(r#"width="900" height="226""#));
        assert!(svg.contains(r#"viewBox="0 0 900 226""#));
    }

    #[test]
    fn test_stat_card_escapes_upstream_text() {
        let mut input = input();
        input.username = "a<b>".to_string();
        input.human_readable_total = r#"1 "hr" & more"#.to_string();

        let svg = render_stat_card(&input).unwrap();

        assert!(svg.contains("@a&lt;b&gt;"));
        assert!(svg.contains("1 &quot;hr&quot; &amp; more"));
        assert!(!svg.contains("a<b>"));
    }

    #[test]
    fn test_stat_card_without_languages_has_no_divider() {
        let input = RenderInput::from_snapshot(&UsageSnapshot {
            username: "idle".to_string(),
            human_readable_total: "5 mins".to_string(),
            categories: vec![],
            languages: vec![LanguageUsage::new("Rust", 300.0, 100.0)],
            total_seconds: 300.0,
        });

        let svg = render_stat_card(&input).unwrap();

        assert!(svg.contains("0% coding"));
        assert!(svg.contains("<linearGradient"));
        assert!(!svg.contains("<line "));
        assert!(!svg.contains("NaN"));
        assert!(svg.contains(r#"height="190""#));
    }

    #[test]
    fn test_error_card() {
        let svg = render_error_card("?username=yourname");

        assert!(svg.contains(r#"width="900" height="100""#));
        assert!(svg.contains("?username=yourname"));
        assert!(svg.contains("#F87171"));
    }

    #[test]
    fn test_error_card_escapes_message() {
        let svg = render_error_card(r#"<bad> & "worse""#);

        assert!(svg.contains("&lt;bad&gt; &amp; &quot;worse&quot;"));
        assert!(!svg.contains("<bad>"));
    }
}
