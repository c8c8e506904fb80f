//! Character trie holding the tails of every word that shares one leading
//! character.
//!
//! Nodes live in a flat arena and refer to their children by index. Node 0 is
//! the root and stands for "nothing consumed yet"; it is never a word end.
//! Nodes are only ever appended.

use std::collections::HashMap;

use mmseg_core::error::MatchError;

const ROOT: usize = 0;

/// The key char of a node lives in its parent's child table
#[derive(Debug, Clone, Default)]
struct TailNode {
    children: HashMap<char, usize>,
    word_end: bool,
}

#[derive(Debug, Clone)]
pub struct TailTrie {
    nodes: Vec<TailNode>,
}

impl Default for TailTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl TailTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TailNode::default()],
        }
    }

    /// Insert a word tail. An empty tail is ignored.
    pub fn insert(&mut self, tail: &[char]) {
        if tail.is_empty() {
            return;
        }

        let mut cursor = ROOT;
        for &ch in tail {
            cursor = match self.nodes[cursor].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TailNode::default());
                    self.nodes[cursor].children.insert(ch, next);
                    next
                }
            };
        }
        self.nodes[cursor].word_end = true;
    }

    /// Whether `sentence[offset..offset + len]` is exactly one of the stored tails
    pub fn exact_match(&self, sentence: &[char], offset: usize, len: usize) -> Result<bool, MatchError> {
        MatchError::check(offset, len, sentence.len())?;

        let mut cursor = ROOT;
        for ch in &sentence[offset..offset + len] {
            match self.child(cursor, *ch) {
                Some(next) => cursor = next,
                None => return Ok(false),
            }
        }
        Ok(self.nodes[cursor].word_end)
    }

    /// Length of the longest stored tail starting at `offset`, 0 if none
    pub fn longest_match(&self, sentence: &[char], offset: usize) -> Result<usize, MatchError> {
        let mut longest = 0;
        self.walk(sentence, offset, |len| longest = len)?;
        Ok(longest)
    }

    /// Append every length at which a stored tail ends, shortest first
    pub fn all_match_lengths<'a>(
        &self,
        sentence: &[char],
        offset: usize,
        acc: &'a mut Vec<usize>,
    ) -> Result<&'a mut Vec<usize>, MatchError> {
        self.walk(sentence, offset, |len| acc.push(len))?;
        Ok(acc)
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].children.is_empty()
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes[node].children.get(&ch).copied()
    }

    /// Follow the sentence from `offset` and report each word-end length in order
    fn walk(&self, sentence: &[char], offset: usize, mut on_word_end: impl FnMut(usize)) -> Result<(), MatchError> {
        MatchError::check(offset, 0, sentence.len())?;

        let mut cursor = ROOT;
        for (i, ch) in sentence[offset..].iter().enumerate() {
            match self.child(cursor, *ch) {
                Some(next) => cursor = next,
                None => break,
            }
            if self.nodes[cursor].word_end {
                on_word_end(i + 1);
            }
        }
        Ok(())
    }
}
