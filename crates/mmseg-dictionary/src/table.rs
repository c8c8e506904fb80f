use std::collections::{HashMap, HashSet};

use mmseg_core::error::MatchError;
use mmseg_core::language::{FrequencyProvider, WordSink};
use serde::Serialize;

use crate::char_node::CharNode;

/// Collects words while a dictionary is loading
#[derive(Debug, Default)]
pub struct CharTableBuilder {
    nodes: HashMap<char, CharNode>,
    /// Characters registered as words on their own
    standalone: HashSet<char>,
    skipped: usize,
}

impl CharTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a word under its leading character, creating the node on first sight
    pub fn add_word(&mut self, word: &str) {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            self.skipped += 1;
            tracing::debug!("Skipping empty dictionary word");
            return;
        };

        let tail: Vec<char> = chars.collect();
        if tail.is_empty() {
            self.standalone.insert(first);
        }
        self.nodes.entry(first).or_default().add_word_tail(&tail);
    }

    /// Register `ch` as a word on its own, creating its node if missing
    pub fn add_char(&mut self, ch: char) {
        self.standalone.insert(ch);
        self.nodes.entry(ch).or_default();
    }

    /// Set the morphemic freedom of a character and register it as a word
    pub fn set_frequency(&mut self, ch: char, frequency: i32) {
        self.standalone.insert(ch);
        self.nodes.entry(ch).or_default().set_frequency(frequency);
    }

    /// Direct access for bulk tooling, e.g. recomputing tail lengths
    pub fn entry_mut(&mut self, ch: char) -> Option<&mut CharNode> {
        self.nodes.get_mut(&ch)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of empty words ignored so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Freeze the table. Nothing can be added afterwards.
    pub fn build(self) -> CharTable {
        let table = CharTable {
            nodes: self.nodes,
            standalone: self.standalone,
        };
        let stats = table.stats();
        tracing::info!(
            chars = stats.chars,
            words = stats.words,
            max_tail_len = stats.max_tail_len,
            skipped = self.skipped,
            "Built character table"
        );
        table
    }
}

impl WordSink for CharTableBuilder {
    fn add_word(&mut self, word: &str) {
        CharTableBuilder::add_word(self, word);
    }

    fn add_char(&mut self, ch: char) {
        CharTableBuilder::add_char(self, ch);
    }

    fn set_frequency(&mut self, ch: char, frequency: i32) {
        CharTableBuilder::set_frequency(self, ch, frequency);
    }
}

/// Read-only dictionary keyed by leading character.
///
/// Offsets passed to the query methods point at the leading character
/// itself; the tail walk starts one position later.
#[derive(Debug, Default)]
pub struct CharTable {
    nodes: HashMap<char, CharNode>,
    standalone: HashSet<char>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    pub chars: usize,
    pub words: usize,
    pub max_tail_len: usize,
}

impl CharTable {
    pub fn get(&self, ch: char) -> Option<&CharNode> {
        self.nodes.get(&ch)
    }

    /// Tail length of the longest word starting at `offset`, 0 if no word
    /// longer than the bare character starts there
    pub fn max_match(&self, sentence: &[char], offset: usize) -> Result<usize, MatchError> {
        MatchError::check(offset, 1, sentence.len())?;

        match self.get(sentence[offset]) {
            Some(node) => node.longest_match(sentence, offset + 1),
            None => Ok(0),
        }
    }

    /// Reset `acc` to `[0]` and append the tail length of every word starting
    /// at `offset`
    pub fn match_lengths<'a>(
        &self,
        sentence: &[char],
        offset: usize,
        acc: &'a mut Vec<usize>,
    ) -> Result<&'a mut Vec<usize>, MatchError> {
        MatchError::check(offset, 1, sentence.len())?;

        acc.clear();
        acc.push(0);
        match self.get(sentence[offset]) {
            Some(node) => node.all_match_lengths(sentence, offset + 1, acc),
            None => Ok(acc),
        }
    }

    /// Whether a multi-character word is in the dictionary
    pub fn contains_word(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < 2 {
            return false;
        }

        self.get(chars[0])
            .is_some_and(|node| node.exact_match(&chars, 1, chars.len() - 1).is_ok_and(|m| m))
    }

    /// Whether `ch` was loaded as a word by itself, either from a word list
    /// or from the character frequency list. Starting a longer word is not enough.
    pub fn is_standalone(&self, ch: char) -> bool {
        self.standalone.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            chars: self.nodes.len(),
            words: self.nodes.values().map(CharNode::word_count).sum(),
            max_tail_len: self
                .nodes
                .values()
                .map(CharNode::max_tail_len)
                .max()
                .unwrap_or(0),
        }
    }
}

impl FrequencyProvider for CharTable {
    fn frequency(&self, ch: char) -> Option<i32> {
        self.get(ch)
            .filter(|node| node.has_frequency())
            .map(CharNode::frequency)
    }
}
