//! Plain-text rendering of report content.
//!
//! Layout: header, title, generation stamp, then each numbered section with
//! its entries. Labels and data keys are title-cased, lists become `- item`
//! bullets, and nested analysis data is indented two spaces per level.

use std::fmt::Write;

use serde_json::Value;

use crate::payload::display_value;
use crate::report::{Body, ReportContent};

pub const DEFAULT_HEADER: &str = "GeoSight - Preliminary DPR";

const EMPTY_LIST: &str = "None specified or detected.";
const INDENT: &str = "  ";

/// `"built_up area"` → `"Built Up Area"`.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut word_start = true;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

/// Render the report as plain text under the given page header.
pub fn render_text(report: &ReportContent, header: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "=".repeat(header.chars().count()));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(out, "Generated {}", report.generated_at);

    for section in &report.sections {
        let heading = format!("{} {}", section.number, section.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "{heading}");
        let _ = writeln!(out, "{}", "-".repeat(heading.chars().count()));

        for entry in &section.entries {
            match (&entry.label, &entry.body) {
                (None, Body::Text(text)) => {
                    let _ = writeln!(out, "{text}");
                }
                (None, Body::List(items)) => write_bullets(&mut out, items.iter().map(String::as_str), 0),
                (None, Body::Data(value)) => write_data(&mut out, None, value, 0),
                (Some(label), Body::Text(text)) => {
                    let _ = writeln!(out, "{}: {text}", title_case(label));
                }
                (Some(label), Body::List(items)) => {
                    let _ = writeln!(out, "{}:", title_case(label));
                    write_bullets(&mut out, items.iter().map(String::as_str), 1);
                }
                (Some(label), Body::Data(value)) => write_data(&mut out, Some(label), value, 0),
            }
        }
    }
    out
}

fn write_bullets<'a>(out: &mut String, items: impl Iterator<Item = &'a str>, depth: usize) {
    let pad = INDENT.repeat(depth);
    let mut any = false;
    for item in items {
        any = true;
        let _ = writeln!(out, "{pad}- {item}");
    }
    if !any {
        let _ = writeln!(out, "{pad}- {EMPTY_LIST}");
    }
}

fn write_data(out: &mut String, key: Option<&str>, value: &Value, depth: usize) {
    let pad = INDENT.repeat(depth);
    let label = key.map(title_case);
    match value {
        Value::Object(map) => {
            let child_depth = match &label {
                Some(l) => {
                    let _ = writeln!(out, "{pad}{l}:");
                    depth + 1
                }
                None => depth,
            };
            for (k, v) in map {
                write_data(out, Some(k), v, child_depth);
            }
        }
        Value::Array(items) => {
            let child_depth = match &label {
                Some(l) => {
                    let _ = writeln!(out, "{pad}{l}:");
                    depth + 1
                }
                None => depth,
            };
            let rendered: Vec<String> = items.iter().map(display_value).collect();
            write_bullets(out, rendered.iter().map(String::as_str), child_depth);
        }
        scalar => match &label {
            Some(l) => {
                let _ = writeln!(out, "{pad}{l}: {}", display_value(scalar));
            }
            None => {
                let _ = writeln!(out, "{pad}{}", display_value(scalar));
            }
        },
    }
}
