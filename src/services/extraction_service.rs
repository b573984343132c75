//! Best-effort recovery of the itinerary JSON from model text.
//!
//! Models wrap their JSON in prose or markdown fences often enough that the
//! completion text is never parsed as a whole. A span is cut out of it and
//! parsed; anything that does not parse becomes the raw variant, so this
//! step never fails a request.

use log::warn;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::models::itinerary::Itinerary;

/// How the JSON span is located in the completion text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionMode {
    /// From the first `{` to the last `}` of the whole text.
    #[default]
    Greedy,
    /// The first brace-balanced object, skipping braces inside JSON strings.
    Balanced,
}

impl ExtractionMode {
    /// Unknown names fall back to `Greedy`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "balanced" => ExtractionMode::Balanced,
            _ => ExtractionMode::Greedy,
        }
    }
}

fn greedy_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static pattern compiles"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryExtractor {
    mode: ExtractionMode,
}

impl ItineraryExtractor {
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    pub fn extract(&self, completion: &str) -> Itinerary {
        let span = match self.mode {
            ExtractionMode::Greedy => greedy_span(completion),
            ExtractionMode::Balanced => balanced_span(completion),
        };

        let Some(span) = span else {
            warn!("No JSON object found in completion, returning raw text");
            return Itinerary::raw(completion);
        };

        match serde_json::from_str::<Map<String, Value>>(span) {
            Ok(object) => Itinerary::Structured(object),
            Err(err) => {
                warn!("Failed to parse itinerary JSON: {}", err);
                Itinerary::raw(completion)
            }
        }
    }
}

fn greedy_span(text: &str) -> Option<&str> {
    greedy_pattern().find(text).map(|m| m.as_str())
}

fn balanced_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let candidate = &text[start..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (idx, ch) in candidate.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&candidate[..=idx]);
                }
            }
            _ => {}
        }
    }

    None
}
