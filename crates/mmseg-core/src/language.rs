/// Receives dictionary data produced by a loader
pub trait WordSink {
    /// Register one dictionary word
    fn add_word(&mut self, word: &str);

    /// Register a character as a word on its own
    fn add_char(&mut self, ch: char);

    /// Record how freely a single character stands alone as a word
    fn set_frequency(&mut self, ch: char, frequency: i32);
}

/// Optional trait for per-character morphemic freedom data
pub trait FrequencyProvider: Send + Sync {
    /// Degree of morphemic freedom, None if the character has no recorded value
    fn frequency(&self, ch: char) -> Option<i32>;

    /// Whether the character was ever seen standing alone
    fn is_free_morpheme(&self, ch: char) -> bool {
        self.frequency(ch).is_some_and(|f| f > 0)
    }
}
