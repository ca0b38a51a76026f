//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record builders to avoid duplication.

#![doc(hidden)]

use crate::build::derive_anchor;
use crate::types::{IndexRecord, PageRecord, SectionRecord};

/// Create a page record. `content` is lowercased like the builder does.
pub fn make_page(slug: &str, title: &str, description: &str, content: &str) -> IndexRecord {
    IndexRecord::Page(PageRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        content: content.to_lowercase(),
    })
}

/// Create a section record with its anchor derived from the heading text.
pub fn make_section(slug: &str, title: &str, heading: &str, level: u8) -> IndexRecord {
    IndexRecord::Section(SectionRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        section: heading.to_string(),
        section_anchor: derive_anchor(heading),
        excerpt: format!("About {}", heading),
        level,
    })
}

/// Create a section record with an explicit anchor.
pub fn make_section_with_anchor(slug: &str, heading: &str, anchor: &str, level: u8) -> IndexRecord {
    IndexRecord::Section(SectionRecord {
        slug: slug.to_string(),
        title: slug.to_string(),
        section: heading.to_string(),
        section_anchor: anchor.to_string(),
        excerpt: String::new(),
        level,
    })
}

/// A small corpus shaped like the real docs site.
pub fn sample_index() -> Vec<IndexRecord> {
    vec![
        make_page("", "Introduction", "What this shell is", "a desktop shell for niri"),
        make_section("", "Introduction", "Overview", 2),
        make_page(
            "configuration",
            "Configuration",
            "Editing config.json",
            "all options live in config.json. see keybindings for shortcuts.",
        ),
        make_section("configuration", "Configuration", "Keybindings", 2),
        make_section("configuration", "Configuration", "Bar modules", 3),
        make_page("keybindings", "Keybindings", "Default shortcuts", "super opens the overview"),
        make_section("keybindings", "Keybindings", "Global", 2),
        make_section("keybindings", "Keybindings", "Overview", 3),
        make_page("theming", "Theming", "Colors and wallpapers", "material you palettes"),
        make_section("theming", "Theming", "Wallpaper colors", 2),
    ]
}
