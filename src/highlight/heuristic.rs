//! Content-based grammar detection.
//!
//! The first line is tried against each grammar's own first-line rules
//! (shebangs, `<?xml`, `<?php`, editor modelines). Failing that, the whole
//! text is scored against weighted keyword signatures. A grammar only
//! wins with a score of at least [`SCORE_THRESHOLD`] and no tie for first.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use syntect::parsing::{SyntaxReference, SyntaxSet};

/// Minimum score for a signature match to count
const SCORE_THRESHOLD: u32 = 3;

const RUST: &str = "Rust";
const PYTHON: &str = "Python";
const GO: &str = "Go";
const C: &str = "C";
const CPP: &str = "C++";
const JAVASCRIPT: &str = "JavaScript";
const HTML: &str = "HTML";
const JSON: &str = "JSON";
const SHELL: &str = "Bourne Again Shell (bash)";
const SQL: &str = "SQL";
const DIFF: &str = "Diff";
const MARKDOWN: &str = "Markdown";

/// (grammar, pattern, weight)
const RAW_SIGNATURES: &[(&str, &str, u32)] = &[
    (RUST, r"(?m)^\s*(pub\s+)?fn\s+\w+\s*[<(]", 2),
    (RUST, r"(?m)^\s*use\s+\w+(::[\w{}, *]+)+\s*;", 1),
    (RUST, r"(?m)^\s*impl(<[^>]*>)?\s+\w+", 2),
    (RUST, r"\blet\s+mut\s+\w+", 2),
    (RUST, r"(?m)^\s*#\[(derive|cfg|test)\b", 3),
    (PYTHON, r"(?m)^\s*def\s+\w+\s*\([^)]*\)\s*(->\s*[^:]+)?:\s*$", 2),
    (PYTHON, r"(?m)^\s*(from\s+[\w.]+\s+)?import\s+\w+", 1),
    (PYTHON, r"(?m)^\s*class\s+\w+(\([^)]*\))?:\s*$", 2),
    (PYTHON, r#"if\s+__name__\s*==\s*['"]__main__['"]"#, 3),
    (PYTHON, r"(?m)^\s*elif\b", 2),
    (GO, r"(?m)^package\s+\w+\s*$", 2),
    (GO, r"(?m)^func\s+(\([^)]*\)\s*)?\w+\s*\(", 2),
    (GO, r"(?m)^import\s+\(", 2),
    (GO, r"\w+\s*:=\s*", 1),
    (C, r#"(?m)^#include\s*[<"]"#, 2),
    (C, r"(?m)^\s*int\s+main\s*\(", 2),
    (C, r"\bprintf\s*\(", 1),
    (CPP, r"\bstd::\w+", 2),
    (CPP, r"(?m)^#include\s*<(iostream|vector|string|memory|map)>", 3),
    (CPP, r"(?m)^\s*(template\s*<|namespace\s+\w+)", 2),
    (JAVASCRIPT, r"(?m)^\s*(const|let|var)\s+\w+\s*=", 1),
    (JAVASCRIPT, r"\bfunction\s*\w*\s*\(", 2),
    (JAVASCRIPT, r"=>\s*\{", 1),
    (JAVASCRIPT, r"\bconsole\.log\s*\(", 3),
    (JAVASCRIPT, r#"\brequire\s*\(\s*['"]"#, 2),
    (HTML, r"(?i)<!DOCTYPE\s+html", 4),
    (HTML, r"(?i)<html[\s>]", 3),
    (HTML, r"(?i)</(div|body|head|span|p)>", 2),
    (JSON, r#"\A\s*\{\s*"[^"]*"\s*:"#, 3),
    (JSON, r#"\A\s*\[\s*[\[{"\d]"#, 2),
    (SHELL, r"(?m)^\s*(if\s+\[|then$|fi$|esac$|done$)", 2),
    (SHELL, r"(?m)^\s*export\s+\w+=", 2),
    (SHELL, r"\$\{\w+\}", 1),
    (SQL, r"(?is)\bSELECT\b.+?\bFROM\b", 3),
    (SQL, r"(?im)^\s*(CREATE\s+TABLE|INSERT\s+INTO|UPDATE\s+\w+\s+SET|DELETE\s+FROM)\b", 3),
    (DIFF, r"(?m)^@@ -\d+(,\d+)? \+\d+(,\d+)? @@", 4),
    (DIFF, r"(?m)^(---|\+\+\+) \S", 1),
    (MARKDOWN, r"(?m)^#{1,6}\s+\S", 1),
    (MARKDOWN, r"(?m)^```", 2),
    (MARKDOWN, r"\[[^\]]+\]\([^)]+\)", 2),
];

struct Signature {
    grammar: &'static str,
    pattern: Regex,
    weight: u32,
}

static SIGNATURES: Lazy<Vec<Signature>> = Lazy::new(|| {
    RAW_SIGNATURES
        .iter()
        .filter_map(|&(grammar, pattern, weight)| {
            Regex::new(pattern).ok().map(|pattern| Signature {
                grammar,
                pattern,
                weight,
            })
        })
        .collect()
});

/// Infer a grammar from the text, or `None` if nothing is conclusive
pub fn analyse<'a>(syntaxes: &'a SyntaxSet, text: &str) -> Option<&'a SyntaxReference> {
    let first_line = text.lines().next().filter(|line| !line.trim().is_empty());
    if let Some(syntax) = first_line.and_then(|line| syntaxes.find_syntax_by_first_line(line)) {
        return Some(syntax);
    }

    best_signature(text).and_then(|grammar| syntaxes.find_syntax_by_name(grammar))
}

/// Per-grammar signature scores; a signature counts once however often it matches
fn scores(text: &str) -> BTreeMap<&'static str, u32> {
    let mut scores = BTreeMap::new();
    for signature in SIGNATURES.iter() {
        if signature.pattern.is_match(text) {
            *scores.entry(signature.grammar).or_insert(0) += signature.weight;
        }
    }
    scores
}

fn best_signature(text: &str) -> Option<&'static str> {
    let scores = scores(text);
    let top = scores.values().copied().max()?;
    if top < SCORE_THRESHOLD {
        return None;
    }

    let mut leaders = scores.iter().filter(|(_, score)| **score == top);
    match (leaders.next(), leaders.next()) {
        (Some((grammar, _)), None) => Some(*grammar),
        _ => None,
    }
}
