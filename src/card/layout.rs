//! Layout arithmetic for the stat card.
//!
//! Turns a [`UsageSnapshot`] into a [`RenderInput`]: languages below one hour
//! are dropped, the rest are sorted by time and split into two columns, and
//! every bar is scaled against the largest displayed percent.

use crate::card::format::{escape_xml, format_duration, language_color};
use crate::domain::entities::{LanguageUsage, UsageSnapshot};

pub const CARD_WIDTH: u32 = 900;
pub const HEADER_HEIGHT: u32 = 150;
pub const ROW_HEIGHT: u32 = 36;
pub const BOTTOM_PADDING: u32 = 40;

/// Width of the bar track; fills are scaled into it.
pub const BAR_WIDTH: f64 = 140.0;
/// Gap between the end of the bar track and the time label.
const TIME_LABEL_GAP: u32 = 12;

pub const LEFT_COLUMN_X: u32 = 80;
pub const RIGHT_COLUMN_X: u32 = 550;
pub const DIVIDER_X: u32 = 470;

/// Languages with less tracked time are not drawn.
pub const MIN_DISPLAY_SECONDS: f64 = 3600.0;
/// Daily average is always computed over this many days.
pub const AVERAGE_WINDOW_DAYS: f64 = 30.0;

/// Display values derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInput {
    pub username: String,
    pub human_readable_total: String,
    pub coding_percent: f64,
    pub daily_average_seconds: f64,
    /// Unfiltered number of languages reported upstream.
    pub language_count: usize,
    pub left: Vec<LanguageUsage>,
    pub right: Vec<LanguageUsage>,
    /// Largest percent among displayed languages, 0 when none are displayed.
    pub max_percent: f64,
}

impl RenderInput {
    pub fn from_snapshot(snapshot: &UsageSnapshot) -> Self {
        let mut displayed: Vec<LanguageUsage> = snapshot
            .languages
            .iter()
            .filter(|lang| lang.total_seconds >= MIN_DISPLAY_SECONDS)
            .cloned()
            .collect();

        // stable: ties keep upstream order
        displayed.sort_by(|a, b| b.total_seconds.total_cmp(&a.total_seconds));

        let max_percent = displayed
            .iter()
            .map(|lang| lang.percent)
            .fold(0.0_f64, f64::max);

        let right = displayed.split_off(displayed.len().div_ceil(2));

        Self {
            username: snapshot.username.clone(),
            human_readable_total: snapshot.human_readable_total.clone(),
            coding_percent: snapshot.coding_percent(),
            daily_average_seconds: snapshot.total_seconds / AVERAGE_WINDOW_DAYS,
            language_count: snapshot.languages.len(),
            left: displayed,
            right,
            max_percent,
        }
    }

    /// Row count of the taller column.
    pub fn max_rows(&self) -> u32 {
        self.left.len().max(self.right.len()) as u32
    }

    pub fn has_languages(&self) -> bool {
        !self.left.is_empty()
    }

    pub fn height(&self) -> u32 {
        HEADER_HEIGHT + self.max_rows() * ROW_HEIGHT + BOTTOM_PADDING
    }

    pub fn divider_top(&self) -> u32 {
        HEADER_HEIGHT + 10
    }

    pub fn divider_bottom(&self) -> u32 {
        HEADER_HEIGHT + self.max_rows() * ROW_HEIGHT + 10
    }

    /// Width of a bar fill relative to the largest displayed percent.
    ///
    /// Returns 0 when there is nothing to scale against.
    pub fn fill_width(&self, percent: f64) -> f64 {
        if self.max_percent > 0.0 && percent.is_finite() {
            (BAR_WIDTH * percent / self.max_percent).clamp(0.0, BAR_WIDTH)
        } else {
            0.0
        }
    }

    pub fn left_rows(&self) -> Vec<LanguageRow> {
        self.column_rows(&self.left, LEFT_COLUMN_X)
    }

    pub fn right_rows(&self) -> Vec<LanguageRow> {
        self.column_rows(&self.right, RIGHT_COLUMN_X)
    }

    fn column_rows(&self, languages: &[LanguageUsage], x: u32) -> Vec<LanguageRow> {
        languages
            .iter()
            .enumerate()
            .map(|(i, lang)| {
                let y = HEADER_HEIGHT + 20 + i as u32 * ROW_HEIGHT;
                LanguageRow {
                    name: escape_xml(&lang.name),
                    color: language_color(&lang.name),
                    x,
                    label_y: y + 10,
                    bar_y: y + 14,
                    time_x: x + BAR_WIDTH as u32 + TIME_LABEL_GAP,
                    time_y: y + 20,
                    fill_width: self.fill_width(lang.percent),
                    time: format_duration(lang.total_seconds),
                }
            })
            .collect()
    }
}

/// Positioned, escaped values for one language row.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRow {
    pub name: String,
    pub color: &'static str,
    pub x: u32,
    pub label_y: u32,
    pub bar_y: u32,
    pub time_x: u32,
    pub time_y: u32,
    pub fill_width: f64,
    pub time: String,
}
