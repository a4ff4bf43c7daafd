//! Pure text helpers used by the card templates.

/// Bar color for languages missing from [`LANGUAGE_COLORS`].
pub const DEFAULT_COLOR: &str = "#8B5CF6";

/// Bar colors keyed by the exact language name reported upstream.
static LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Python", "#3776AB"),
    ("TypeScript", "#3178C6"),
    ("JavaScript", "#F7DF1E"),
    ("C++", "#00599C"),
    ("Rust", "#CE422B"),
    ("Go", "#00ADD8"),
    ("Java", "#007396"),
    ("Kotlin", "#7F52FF"),
    ("Swift", "#FA7343"),
    ("C#", "#239120"),
    ("PHP", "#777BB4"),
    ("Ruby", "#CC342D"),
    ("Svelte", "#FF3E00"),
    ("Vue", "#4FC08D"),
    ("React", "#61DAFB"),
    ("HTML", "#E34C26"),
    ("CSS", "#563D7C"),
    ("Bash", "#4EAA25"),
    ("SQL", "#336791"),
    ("Markdown", "#083FA1"),
    ("Lua", "#00007C"),
    ("ASM", "#6E4C13"),
    ("Json", "#F7DF1E"),
    ("YAML", "#CB171E"),
    ("R", "#F34FA4"),
    ("Rmd", "#E82EE7"),
    ("Quarto", "#7F1ABB"),
];

/// Returns the bar color for a language.
///
/// Matching is exact and case-sensitive: `rust` gets [`DEFAULT_COLOR`].
pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// Escapes `&`, `<`, `>` and `"` so the text can be embedded in SVG markup.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats a duration in seconds as `"{h}h {m}m"`, `"{m}m {s}s"` or `"{s}s"`.
///
/// Every component is truncated, never rounded. Negative and non-finite input
/// is treated as zero.
///
/// # Examples
///
/// ```
/// use wakapi_card::card::format::format_duration;
///
/// assert_eq!(format_duration(3661.0), "1h 1m");
/// assert_eq!(format_duration(61.9), "1m 1s");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Formats a percentage without decimals, rounding halves away from zero.
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}", percent.round())
}
