// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the livesuggest CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `LIVESUGGEST_THEME` first, then `COLORFGBG`, then falls back to dark.
//! `NO_COLOR` and non-TTY stdout switch colour off entirely, so piping the
//! output somewhere gives plain text.
//!
//! Matched keywords are highlighted in titles and previews using the same
//! span logic the browser panel uses, with ANSI codes as the marker.

use livesuggest::{highlight_with, Marker, RankResponse};
use std::sync::OnceLock;

/// Width of the result list, excluding the left gutter.
pub const LIST_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LIVESUGGEST_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme colour plus modifiers, or nothing when colour is off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Marker used to highlight keywords in terminal output.
fn keyword_marker() -> Marker {
    if use_colors() {
        Marker::new(format!("{}{}", BOLD, YELLOW()), RESET)
    } else {
        Marker::new("[", "]")
    }
}

/// Colour for a relevance or confidence value.
fn level_color(value: f64) -> fn() -> String {
    if value >= 0.7 {
        GREEN
    } else if value >= 0.4 {
        YELLOW
    } else {
        RED
    }
}

/// Ten-cell bar: `███████░░░`.
pub fn meter(value: f64) -> String {
    let filled = (value.clamp(0.0, 1.0) * 10.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Truncate on a char boundary, adding an ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT LISTING
// ═══════════════════════════════════════════════════════════════════════════

pub fn print_response(query: &str, response: &RankResponse) {
    println!(
        "{} {}",
        themed(CYAN, &[BOLD], "Suggestions for"),
        themed(CYAN, &[], &format!("\"{}\"", query))
    );
    println!("{}", themed(GRAY, &[], &"─".repeat(LIST_WIDTH)));

    if response.results.is_empty() {
        println!("  {}", themed(GRAY, &[DIM], "No matching articles"));
        return;
    }

    let marker = keyword_marker();
    for (rank, result) in response.results.iter().enumerate() {
        let doc = &result.document;
        let title = highlight_with(&doc.title, &result.matched_keywords, &marker);
        let trending = if doc.trending {
            themed(RED, &[], " ▲ trending")
        } else {
            String::new()
        };

        println!("{:>3}. {}{}", rank + 1, title, trending);

        if !doc.body.is_empty() {
            let preview = truncate(&doc.body, LIST_WIDTH - 5);
            println!(
                "     {}",
                highlight_with(&preview, &result.matched_keywords, &marker)
            );
        }

        println!(
            "     {} {} {}",
            themed(level_color(result.relevance), &[], &meter(result.relevance)),
            themed(GRAY, &[], &format!("score {:.1}", result.score)),
            themed(GRAY, &[DIM], &doc.tags.join(", "))
        );
    }

    println!("{}", themed(GRAY, &[], &"─".repeat(LIST_WIDTH)));
    println!(
        "Confidence {} {:.0}%",
        themed(level_color(response.confidence), &[], &meter(response.confidence)),
        response.confidence * 100.0
    );
}
