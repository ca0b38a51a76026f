// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Front-matter splitting for `.mdx` documents.
//!
//! Documents open with a `---` fenced metadata block. Only flat scalar keys are
//! meaningful to the index (`title`, `description`), so this reads `key: value`
//! lines and leaves nested YAML alone. Values may be plain, single or double
//! quoted, or `|`/`>` block scalars with their chomping indicators.

/// Metadata read from a document's front-matter block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
}

const DELIMITER: &str = "---";

/// Split raw document text into front-matter and body.
///
/// Without an opening `---` line, or without a closing one, the whole input is
/// body and the metadata is empty.
pub fn parse_front_matter(raw: &str) -> (FrontMatter, &str) {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let Some(first_end) = raw.find('\n') else {
        return (FrontMatter::default(), raw);
    };
    if raw[..first_end].trim_end_matches('\r') != DELIMITER {
        return (FrontMatter::default(), raw);
    }

    let block_start = first_end + 1;
    let mut offset = block_start;
    for line in raw[block_start..].split_inclusive('\n') {
        let next = offset + line.len();
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            let front = parse_block(&raw[block_start..offset]);
            return (front, &raw[next..]);
        }
        offset = next;
    }

    (FrontMatter::default(), raw)
}

fn parse_block(block: &str) -> FrontMatter {
    let mut front = FrontMatter::default();
    let mut lines = block.lines().peekable();

    while let Some(line) = lines.next() {
        // Nested mappings and list items belong to other keys
        if line.starts_with(char::is_whitespace) || line.starts_with('-') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        let value = match BlockHeader::parse(value) {
            Some(header) => {
                let mut content = Vec::new();
                while let Some(next) = lines.peek() {
                    if !next.trim().is_empty() && !next.starts_with(char::is_whitespace) {
                        break;
                    }
                    content.push(*next);
                    lines.next();
                }
                header.read(&content)
            }
            None => scalar(value),
        };
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "title" => front.title = Some(value),
            "description" => front.description = Some(value),
            _ => {}
        }
    }

    front
}

/// Read a flow scalar: quoted values end at their closing quote, and whatever
/// follows it is a comment.
fn scalar(value: &str) -> String {
    if let Some(rest) = value.strip_prefix('"') {
        if let Some(inner) = double_quoted(rest) {
            return inner;
        }
    } else if let Some(rest) = value.strip_prefix('\'') {
        if let Some(inner) = single_quoted(rest) {
            return inner;
        }
    }
    strip_comment(value).to_string()
}

/// Contents up to the closing `"`, escapes decoded. `None` when unterminated.
fn double_quoted(rest: &str) -> Option<String> {
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(out),
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                other => out.push(other),
            },
            c => out.push(c),
        }
    }
    None
}

/// Contents up to the closing `'`, with `''` read as one quote.
fn single_quoted(rest: &str) -> Option<String> {
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
            } else {
                return Some(out);
            }
        } else {
            out.push(c);
        }
    }
    None
}

/// Drop a trailing ` # comment` from an unquoted scalar.
fn strip_comment(value: &str) -> &str {
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chomp {
    Strip,
    Clip,
    Keep,
}

/// Header of a `|` (literal) or `>` (folded) block scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BlockHeader {
    folded: bool,
    chomp: Chomp,
    indent: Option<usize>,
}

impl BlockHeader {
    fn parse(value: &str) -> Option<Self> {
        let mut chars = strip_comment(value).chars();
        let folded = match chars.next()? {
            '|' => false,
            '>' => true,
            _ => return None,
        };
        let mut header = BlockHeader {
            folded,
            chomp: Chomp::Clip,
            indent: None,
        };
        for c in chars {
            match c {
                '-' if header.chomp == Chomp::Clip => header.chomp = Chomp::Strip,
                '+' if header.chomp == Chomp::Clip => header.chomp = Chomp::Keep,
                '1'..='9' if header.indent.is_none() => {
                    header.indent = c.to_digit(10).map(|d| d as usize);
                }
                _ => return None,
            }
        }
        Some(header)
    }

    /// Assemble the scalar from its indented continuation lines.
    fn read(&self, content: &[&str]) -> String {
        let indent = self.indent.unwrap_or_else(|| {
            content
                .iter()
                .find(|l| !l.trim().is_empty())
                .map_or(0, |l| l.len() - l.trim_start().len())
        });
        let lines: Vec<&str> = content
            .iter()
            .map(|l| {
                let l = l.trim_end_matches('\r');
                if l.trim().is_empty() {
                    ""
                } else if l.len() >= indent && l.is_char_boundary(indent) {
                    &l[indent..]
                } else {
                    l.trim_start()
                }
            })
            .collect();

        let last = lines.iter().rposition(|l| !l.is_empty());
        let (body, trailing) = match last {
            Some(i) => (&lines[..=i], lines.len() - i - 1),
            None => (&lines[..0], lines.len()),
        };

        let mut text = if self.folded {
            fold(body)
        } else {
            body.join("\n")
        };
        if body.is_empty() {
            if self.chomp == Chomp::Keep {
                text.push_str(&"\n".repeat(trailing));
            }
            return text;
        }
        match self.chomp {
            Chomp::Strip => {}
            Chomp::Clip => text.push('\n'),
            Chomp::Keep => text.push_str(&"\n".repeat(trailing + 1)),
        }
        text
    }
}

/// Fold lines: a single break between text lines becomes a space, each blank
/// line becomes a newline, and more-indented lines keep their breaks.
fn fold(lines: &[&str]) -> String {
    let more_indented = |l: &str| l.starts_with(char::is_whitespace);
    let mut text = String::new();
    let mut prev: Option<&str> = None;
    let mut blanks = 0;

    for line in lines {
        if line.is_empty() {
            blanks += 1;
            continue;
        }
        if let Some(p) = prev {
            let kept = more_indented(p) || more_indented(line);
            match (blanks, kept) {
                (0, false) => text.push(' '),
                (n, false) => text.push_str(&"\n".repeat(n)),
                (n, true) => text.push_str(&"\n".repeat(n + 1)),
            }
        }
        text.push_str(line);
        prev = Some(line);
        blanks = 0;
    }

    text
}
