//! Word ingestion for the `neighbors` command.
//!
//! Text is split on whitespace, every character outside `[a-zA-Z0-9]` is
//! dropped and words are optionally lowercased. Each distinct word keeps the
//! order in which it was first seen together with all of its occurrences.

use editgrid_align::{AlignmentEngine, Cost, CostModel};
use editgrid_core::{EditGridError, EditGridResult};
use indexmap::IndexMap;
use regex::Regex;
use std::io::BufRead;
use tracing::debug;

/// Where a word appears, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub line: usize,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub word: String,
    pub distance: Cost,
    pub first: Occurrence,
}

pub struct WordIndex {
    pattern: Regex,
    lowercase: bool,
    words: IndexMap<String, Vec<Occurrence>>,
    lines: usize,
}

impl WordIndex {
    pub fn new(lowercase: bool) -> EditGridResult<Self> {
        let pattern = Regex::new("[^a-zA-Z0-9]")
            .map_err(|e| EditGridError::Parse(format!("Invalid word filter: {}", e)))?;
        Ok(Self {
            pattern,
            lowercase,
            words: IndexMap::new(),
            lines: 0,
        })
    }

    /// Strip a raw token down to its alphanumeric characters.
    pub fn normalize(&self, token: &str) -> String {
        let filtered = self.pattern.replace_all(token, "");
        if self.lowercase {
            filtered.to_lowercase()
        } else {
            filtered.into_owned()
        }
    }

    pub fn add_line(&mut self, line: &str) {
        self.lines += 1;
        let mut position = 0;
        for token in line.split_whitespace() {
            let word = self.normalize(token);
            if word.is_empty() {
                continue;
            }
            position += 1;
            self.words.entry(word).or_default().push(Occurrence {
                line: self.lines,
                position,
            });
        }
    }

    pub fn read<R: BufRead>(&mut self, reader: R) -> EditGridResult<()> {
        for line in reader.lines() {
            self.add_line(&line?);
        }
        debug!(lines = self.lines, words = self.words.len(), "Indexed words");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct words in first-seen order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn occurrences(&self, word: &str) -> Option<&[Occurrence]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Words within `max_distance` of `target` under `model`, in first-seen order.
    pub fn neighbors(
        &self,
        target: &str,
        max_distance: Cost,
        model: &CostModel<char>,
    ) -> Vec<Neighbor> {
        let target = self.normalize(target);
        let mut found = Vec::new();

        for (word, occurrences) in &self.words {
            let mut engine = AlignmentEngine::from_strs(&target, word, model.clone());
            let distance = engine.distance();
            if distance > max_distance {
                continue;
            }
            if let Some(&first) = occurrences.first() {
                found.push(Neighbor {
                    word: word.clone(),
                    distance,
                    first,
                });
            }
        }

        debug!(target = %target, max_distance, found = found.len(), "Collected neighbors");
        found
    }
}
