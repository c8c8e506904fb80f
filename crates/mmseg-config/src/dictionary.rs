use serde::{Deserialize, Serialize};

fn default_chars_file() -> String {
    "chars.dic".to_string()
}

fn default_word_file_prefix() -> String {
    "words".to_string()
}

fn default_word_file_suffix() -> String {
    ".dic".to_string()
}

fn default_normalize() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory holding chars.dic and words*.dic
    pub dir: Option<String>,
    #[serde(default = "default_chars_file")]
    pub chars_file: String,
    #[serde(default = "default_word_file_prefix")]
    pub word_file_prefix: String,
    #[serde(default = "default_word_file_suffix")]
    pub word_file_suffix: String,
    /// Extra word lists loaded after the directory
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// Apply NFKC to every dictionary line
    #[serde(default = "default_normalize")]
    pub normalize: bool,
    #[serde(default)]
    pub lowercase: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dir: None,
            chars_file: default_chars_file(),
            word_file_prefix: default_word_file_prefix(),
            word_file_suffix: default_word_file_suffix(),
            additional_paths: vec![],
            normalize: default_normalize(),
            lowercase: false,
        }
    }
}

impl DictionaryConfig {
    /// Whether a file name in the dictionary directory is a word list
    pub fn is_word_file(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.word_file_prefix) && file_name.ends_with(&self.word_file_suffix)
    }
}
