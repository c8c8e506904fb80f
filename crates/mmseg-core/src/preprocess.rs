use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Clean one raw dictionary line; an empty result means "skip"
    fn process(&self, line: &str) -> String {
        let text = line.trim_start_matches('\u{feff}').trim();

        if text.is_empty() || text.starts_with('#') {
            return String::new();
        }

        text.to_string()
    }
}

/// Trims lines and drops comments, nothing else
pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// NFKC normalization on top of the default cleanup, optionally lowercased
pub struct NormalizingPreprocessor {
    pub lowercase: bool,
}

impl Preprocessor for NormalizingPreprocessor {
    fn process(&self, line: &str) -> String {
        let text = DefaultPreprocessor.process(line);
        if text.is_empty() {
            return text;
        }

        // Full-width latin and digits fold to ASCII here
        let text: String = text.nfkc().collect();
        if self.lowercase {
            text.to_lowercase()
        } else {
            text
        }
    }
}
