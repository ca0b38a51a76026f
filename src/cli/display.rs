// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the docsift CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `DOCSIFT_THEME` ("dark" or "light") when set, otherwise from the
//! `COLORFGBG` background hint, otherwise dark. `NO_COLOR` and non-TTY stdout
//! turn color off entirely.

use std::sync::OnceLock;

use docsift::types::{ResultKind, SearchResult};

// Width between │ and │
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Background color index from `COLORFGBG` ("fg;bg"). 7 and up, except 8, are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.split(';').next_back()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    std::env::var("DOCSIFT_THEME")
        .ok()
        .and_then(|v| parse_theme(&v))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| theme_from_colorfgbg(&v))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme color plus modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length without ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to `max` visible chars, ending in `…` when cut.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{b}│{r}{}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    );
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `page` or `section`, colored by kind.
pub fn kind_label(kind: ResultKind) -> String {
    match kind {
        ResultKind::Page => themed(GREEN, &[BOLD], "page   "),
        ResultKind::Section => themed(BLUE, &[], "section"),
    }
}

/// Score, colored by which field it most likely came from.
pub fn score_value(score: u32) -> String {
    let text = format!("{:>3}", score);
    if score >= 20 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 10 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// One result as two box rows: header line, then excerpt.
pub fn result_rows(rank: usize, result: &SearchResult) {
    let header = format!(
        " {:>2}. {} {} {}  {}",
        rank,
        score_value(result.score),
        kind_label(result.kind),
        themed(CYAN, &[BOLD], &clip(result.label(), 36)),
        themed(GRAY, &[], &result.href()),
    );
    row(&header);
    if !result.excerpt.is_empty() {
        row(&format!(
            "       {}",
            themed(GRAY, &[DIM], &clip(&result.excerpt, BOX_WIDTH - 8))
        ));
    }
}

pub fn ok(text: &str) -> String {
    themed(GREEN, &[BOLD], text)
}

pub fn bad(text: &str) -> String {
    themed(RED, &[BOLD], text)
}
