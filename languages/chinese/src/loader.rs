use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mmseg_config::dictionary::DictionaryConfig;
use mmseg_core::error::LoadError;
use mmseg_core::language::WordSink;
use mmseg_core::preprocess::{DefaultPreprocessor, NormalizingPreprocessor, Preprocessor};
use serde::Serialize;

use crate::frequency::CharFrequency;

/// What a load pass fed into the sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub files: usize,
    pub words: usize,
    pub skipped: usize,
    pub chars_with_frequency: usize,
}

impl LoadSummary {
    fn absorb(&mut self, other: LoadSummary) {
        self.files += other.files;
        self.words += other.words;
        self.skipped += other.skipped;
        self.chars_with_frequency += other.chars_with_frequency;
    }
}

/// Reads `chars.dic` / `words*.dic` style files into a [`WordSink`]
pub struct DicLoader {
    config: DictionaryConfig,
    preprocessor: Box<dyn Preprocessor>,
}

impl DicLoader {
    pub fn new(config: DictionaryConfig) -> Self {
        let preprocessor: Box<dyn Preprocessor> = if config.normalize {
            Box::new(NormalizingPreprocessor {
                lowercase: config.lowercase,
            })
        } else {
            Box::new(DefaultPreprocessor)
        };

        Self { config, preprocessor }
    }

    /// Load the configured directory, then every additional word list
    pub fn load(&self, sink: &mut impl WordSink) -> Result<LoadSummary, LoadError> {
        let mut summary = LoadSummary::default();

        match &self.config.dir {
            Some(dir) => summary.absorb(self.load_dir(Path::new(dir), sink)?),
            None if self.config.additional_paths.is_empty() => {
                tracing::warn!("No dictionary directory configured, starting with an empty dictionary");
            }
            None => {}
        }

        for path in &self.config.additional_paths {
            match self.load_words_file(Path::new(path), sink) {
                Ok(loaded) => {
                    tracing::info!("Merged additional word list from: {}", path);
                    summary.absorb(loaded);
                }
                Err(e) => {
                    tracing::warn!("Failed to load word list from {}: {}", path, e);
                }
            }
        }

        tracing::info!(
            files = summary.files,
            words = summary.words,
            skipped = summary.skipped,
            chars_with_frequency = summary.chars_with_frequency,
            "Dictionary loaded"
        );
        Ok(summary)
    }

    /// Load the chars file (if present) and all word files of a directory
    pub fn load_dir(&self, dir: &Path, sink: &mut impl WordSink) -> Result<LoadSummary, LoadError> {
        tracing::info!("Loading dictionary directory: {}", dir.display());
        if !dir.is_dir() {
            return Err(LoadError::FileNotFound(dir.display().to_string()));
        }

        let mut summary = LoadSummary::default();

        let chars_path = dir.join(&self.config.chars_file);
        if chars_path.is_file() {
            summary.absorb(self.load_chars_file(&chars_path, sink)?);
        } else {
            tracing::debug!("No chars file at {}", chars_path.display());
        }

        for path in self.word_files(dir)? {
            summary.absorb(self.load_words_file(&path, sink)?);
        }

        Ok(summary)
    }

    /// Word files of a directory, sorted by file name
    fn word_files(&self, dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let is_word_file = entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.is_word_file(name));
            if is_word_file && entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }

    pub fn load_words_file(&self, path: &Path, sink: &mut impl WordSink) -> Result<LoadSummary, LoadError> {
        let text = read_file(path)?;
        let mut summary = self.load_words_str(&text, sink);
        summary.files = 1;
        tracing::debug!("Loaded {} words from {}", summary.words, path.display());
        Ok(summary)
    }

    pub fn load_chars_file(&self, path: &Path, sink: &mut impl WordSink) -> Result<LoadSummary, LoadError> {
        let text = read_file(path)?;
        let mut summary = self.load_chars_str(&text, sink);
        summary.files = 1;
        tracing::debug!(
            "Loaded {} character frequencies from {}",
            summary.chars_with_frequency,
            path.display()
        );
        Ok(summary)
    }

    /// One word per line; anything after the first whitespace is ignored
    pub fn load_words_str(&self, text: &str, sink: &mut impl WordSink) -> LoadSummary {
        let mut summary = LoadSummary::default();

        for line in text.lines() {
            let line = self.preprocessor.process(line);
            if let Some(word) = line.split_whitespace().next() {
                sink.add_word(word);
                summary.words += 1;
            }
        }

        summary
    }

    /// `<char> <count>` per line
    pub fn load_chars_str(&self, text: &str, sink: &mut impl WordSink) -> LoadSummary {
        let mut summary = LoadSummary::default();

        for (idx, line) in text.lines().enumerate() {
            let line = self.preprocessor.process(line);
            if line.is_empty() {
                continue;
            }

            match CharFrequency::parse(&line) {
                Ok(parsed) => match parsed.morphemic_freedom() {
                    Some(freedom) => {
                        sink.set_frequency(parsed.ch, freedom);
                        summary.chars_with_frequency += 1;
                    }
                    None => sink.add_char(parsed.ch),
                },
                Err(reason) => {
                    tracing::debug!("Skipping chars line {}: {}", idx + 1, reason);
                    summary.skipped += 1;
                }
            }
        }

        summary
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
        _ => LoadError::IoError(e),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use mmseg_core::language::FrequencyProvider;
    use mmseg_dictionary::CharTableBuilder;

    use super::*;

    fn loader() -> DicLoader {
        DicLoader::new(DictionaryConfig::default())
    }

    #[test]
    fn test_load_words_str() {
        let mut builder = CharTableBuilder::new();
        let summary = loader().load_words_str("# comment\n一万\n\n一万年 12\r\n中国\n", &mut builder);
        assert_eq!(summary.words, 3);

        let table = builder.build();
        assert!(table.contains_word("一万"));
        assert!(table.contains_word("一万年"));
        assert!(table.contains_word("中国"));
    }

    #[test]
    fn test_load_words_normalizes() {
        let config = DictionaryConfig {
            lowercase: true,
            ..DictionaryConfig::default()
        };
        let mut builder = CharTableBuilder::new();
        DicLoader::new(config).load_words_str("ＩＢＭ公司\n", &mut builder);
        assert!(builder.build().contains_word("ibm公司"));
    }

    #[test]
    fn test_load_chars_str() {
        let mut builder = CharTableBuilder::new();
        let summary = loader().load_chars_str("的 100\n丁\n中国 5\n了 x\n", &mut builder);
        assert_eq!(summary.chars_with_frequency, 1);
        assert_eq!(summary.skipped, 2);

        let table = builder.build();
        assert_eq!(table.frequency('的'), Some(460));
        assert!(table.get('丁').is_some());
        assert_eq!(table.frequency('丁'), None);
        assert!(table.get('中').is_none());
        assert!(table.is_standalone('的'));
        assert!(table.is_standalone('丁'));
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chars.dic"), "一 5000\n中 3000\n").unwrap();
        fs::write(dir.path().join("words.dic"), "一万\n中国\n").unwrap();
        fs::write(dir.path().join("words-extra.dic"), "一万年\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "不是词\n").unwrap();

        let mut builder = CharTableBuilder::new();
        let summary = loader().load_dir(dir.path(), &mut builder).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                files: 3,
                words: 3,
                skipped: 0,
                chars_with_frequency: 2
            }
        );

        let table = builder.build();
        assert!(table.contains_word("一万年"));
        assert!(!table.contains_word("不是"));
        assert!(table.frequency('中').is_some());
    }

    #[test]
    fn test_load_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let mut builder = CharTableBuilder::new();
        let err = loader().load_dir(&missing, &mut builder).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound(_)));
    }

    #[test]
    fn test_load_skips_missing_additional_paths() {
        let dir = tempfile::tempdir().unwrap();
        let extra = dir.path().join("extra.dic");
        fs::write(&extra, "人民\n").unwrap();

        let config = DictionaryConfig {
            additional_paths: vec![
                dir.path().join("missing.dic").display().to_string(),
                extra.display().to_string(),
            ],
            ..DictionaryConfig::default()
        };

        let mut builder = CharTableBuilder::new();
        let summary = DicLoader::new(config).load(&mut builder).unwrap();
        assert_eq!(summary.files, 1);
        assert!(builder.build().contains_word("人民"));
    }
}
