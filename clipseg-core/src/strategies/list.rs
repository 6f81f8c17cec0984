//! List item extraction

use super::{push_trimmed, SegmentationStrategy, StrategyContext};
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

static LIST_MARKER: OnceLock<Regex> = OnceLock::new();

fn list_marker() -> &'static Regex {
    LIST_MARKER.get_or_init(|| {
        Regex::new(concat!(
            r"^\s*(?:",
            r"\d+[.)]\s+",              // 1. 1)
            r"|\d+[、．]\s*",           // 1、
            r"|[一二三四五六七八九十百]+[、．]\s*", // 一、
            r"|[\x{2460}-\x{2473}]\s*", // ① .. ⑳
            r"|[A-Za-z][.)]\s+",        // a. b)
            r"|[-*•·]\s+",              // bullets
            r")(.+)$",
        ))
        .expect("list marker pattern must compile")
    })
}

/// Return the text after a list marker, or `None` when the line has none
pub fn list_item_body(line: &str) -> Option<&str> {
    list_marker()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|body| !body.is_empty())
}

/// Emits one segment per non-blank line, stripping list markers
#[derive(Debug, Clone, Default)]
pub struct ListStrategy;

impl ListStrategy {
    /// Create a new list strategy
    pub fn new() -> Self {
        Self
    }
}

impl SegmentationStrategy for ListStrategy {
    fn name(&self) -> &str {
        "list"
    }

    fn segment(&self, text: &str, _context: &StrategyContext) -> Result<Vec<String>> {
        let mut segments = Vec::new();
        for line in text.lines() {
            match list_item_body(line) {
                Some(body) => push_trimmed(&mut segments, body),
                None => push_trimmed(&mut segments, line),
            }
        }
        Ok(segments)
    }
}
