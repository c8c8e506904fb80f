use mmseg_core::error::MatchError;

use crate::tail_trie::TailTrie;

/// Frequency value of a character that never appeared in the frequency list
pub const UNSET_FREQUENCY: i32 = -1;

/// Every dictionary word is filed under the node of its first character.
///
/// For the words 一万, 一万年 and 一千 the node for 一 holds the tails 万,
/// 万年 and 千, so a single walk answers "which words start with 一 here".
#[derive(Debug, Clone)]
pub struct CharNode {
    /// Degree of morphemic freedom of the bare character
    frequency: i32,
    max_tail_len: usize,
    word_count: usize,
    tails: TailTrie,
}

impl Default for CharNode {
    fn default() -> Self {
        Self::new()
    }
}

impl CharNode {
    pub fn new() -> Self {
        Self {
            frequency: UNSET_FREQUENCY,
            max_tail_len: 0,
            word_count: 0,
            tails: TailTrie::new(),
        }
    }

    /// Register a word by its tail. Duplicates and empty tails still count.
    pub fn add_word_tail(&mut self, tail: &[char]) {
        self.tails.insert(tail);
        self.word_count += 1;
        self.max_tail_len = self.max_tail_len.max(tail.len());
    }

    /// Whether `sentence[offset..offset + tail_len]` completes a known word
    ///
    /// `offset` points just past this node's character in the sentence.
    pub fn exact_match(&self, sentence: &[char], offset: usize, tail_len: usize) -> Result<bool, MatchError> {
        self.tails.exact_match(sentence, offset, tail_len)
    }

    /// Tail length of the longest word at `offset`, 0 when only the bare
    /// character could be a word
    pub fn longest_match(&self, sentence: &[char], offset: usize) -> Result<usize, MatchError> {
        self.tails.longest_match(sentence, offset)
    }

    /// Append every matching tail length to `acc`, shortest first; `acc` is not cleared
    pub fn all_match_lengths<'a>(
        &self,
        sentence: &[char],
        offset: usize,
        acc: &'a mut Vec<usize>,
    ) -> Result<&'a mut Vec<usize>, MatchError> {
        self.tails.all_match_lengths(sentence, offset, acc)
    }

    pub fn frequency(&self) -> i32 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: i32) {
        self.frequency = frequency;
    }

    pub fn has_frequency(&self) -> bool {
        self.frequency != UNSET_FREQUENCY
    }

    pub fn max_tail_len(&self) -> usize {
        self.max_tail_len
    }

    pub fn set_max_tail_len(&mut self, max_tail_len: usize) {
        self.max_tail_len = max_tail_len;
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn tails(&self) -> &TailTrie {
        &self.tails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn node(tails: &[&str]) -> CharNode {
        let mut node = CharNode::new();
        for tail in tails {
            node.add_word_tail(&chars(tail));
        }
        node
    }

    #[test]
    fn test_new_node_defaults() {
        let node = CharNode::new();
        assert_eq!(node.frequency(), UNSET_FREQUENCY);
        assert!(!node.has_frequency());
        assert_eq!(node.max_tail_len(), 0);
        assert_eq!(node.word_count(), 0);
    }

    #[test]
    fn test_yi_scenario() {
        let node = node(&["万", "万年", "千"]);
        assert_eq!(node.longest_match(&chars("一万年"), 1).unwrap(), 2);
        assert_eq!(node.longest_match(&chars("一万元"), 1).unwrap(), 1);
        assert!(node.exact_match(&chars("一千"), 1, 1).unwrap());
        assert!(!node.exact_match(&chars("一千年"), 1, 2).unwrap());
    }

    #[test]
    fn test_duplicates_count_but_match_the_same() {
        let once = node(&["万年"]);
        let thrice = node(&["万年", "万年", "万年"]);
        assert_eq!(thrice.word_count(), 3);
        assert_eq!(thrice.tails().node_count(), once.tails().node_count());

        let sen = chars("一万年");
        assert_eq!(once.longest_match(&sen, 1), thrice.longest_match(&sen, 1));
        assert_eq!(once.exact_match(&sen, 1, 2), thrice.exact_match(&sen, 1, 2));
    }

    #[test]
    fn test_empty_tail_only() {
        let node = node(&[""]);
        assert_eq!(node.word_count(), 1);
        assert!(node.tails().is_empty());
        assert_eq!(node.longest_match(&chars("一万"), 1).unwrap(), 0);
    }

    #[test]
    fn test_max_tail_len_tracks_longest() {
        let mut node = node(&["万", "万年青", "千"]);
        assert_eq!(node.max_tail_len(), 3);
        node.add_word_tail(&chars("百"));
        assert_eq!(node.max_tail_len(), 3);

        node.set_max_tail_len(1);
        assert_eq!(node.max_tail_len(), 1);
    }

    #[test]
    fn test_frequency_round_trip() {
        let mut node = CharNode::new();
        node.set_frequency(553);
        assert!(node.has_frequency());
        assert_eq!(node.frequency(), 553);
    }

    #[test]
    fn test_all_match_lengths_keeps_seed() {
        let node = node(&["万", "万年"]);
        let mut acc = vec![0];
        node.all_match_lengths(&chars("一万年"), 1, &mut acc).unwrap();
        assert_eq!(acc, vec![0, 1, 2]);
    }
}
