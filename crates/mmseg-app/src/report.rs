use mmseg_core::error::MatchError;
use mmseg_dictionary::CharTable;
use serde::Serialize;

/// Words that can start at one position of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidates {
    pub position: usize,
    pub ch: char,
    /// Shortest first; the bare character is always the first entry
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCheck {
    pub word: String,
    pub known: bool,
}

/// Every dictionary word starting at every position of `text`
pub fn candidates(table: &CharTable, text: &str) -> Result<Vec<Candidates>, MatchError> {
    let sentence: Vec<char> = text.chars().collect();
    let mut lens = Vec::new();
    let mut result = Vec::with_capacity(sentence.len());

    for position in 0..sentence.len() {
        table.match_lengths(&sentence, position, &mut lens)?;
        let words = lens
            .iter()
            .map(|&tail_len| sentence[position..=position + tail_len].iter().collect())
            .collect();
        result.push(Candidates {
            position,
            ch: sentence[position],
            words,
        });
    }

    Ok(result)
}

/// Single characters count as known only when they were loaded as words themselves
pub fn check_words(table: &CharTable, words: &[String]) -> Vec<WordCheck> {
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            let known = match (chars.next(), chars.next()) {
                (Some(ch), None) => table.is_standalone(ch),
                _ => table.contains_word(word),
            };
            WordCheck {
                word: word.clone(),
                known,
            }
        })
        .collect()
}

/// `position char: word word longest*`
pub fn render_candidates(candidates: &[Candidates]) -> String {
    let mut out = String::new();
    for c in candidates {
        let mut words: Vec<String> = c.words.clone();
        if words.len() > 1 {
            if let Some(last) = words.last_mut() {
                last.push('*');
            }
        }
        out.push_str(&format!("{} {}: {}\n", c.position, c.ch, words.join(" ")));
    }
    out
}

pub fn render_checks(checks: &[WordCheck]) -> String {
    checks
        .iter()
        .map(|c| format!("{}\t{}\n", c.word, if c.known { "yes" } else { "no" }))
        .collect()
}

#[cfg(test)]
mod tests {
    use mmseg_dictionary::CharTableBuilder;

    use super::*;

    fn table() -> CharTable {
        let mut builder = CharTableBuilder::new();
        for word in ["一万", "一万年", "中国", "的"] {
            builder.add_word(word);
        }
        builder.build()
    }

    #[test]
    fn test_candidates() {
        let found = candidates(&table(), "一万年").unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].words, vec!["一", "一万", "一万年"]);
        assert_eq!(found[2].words, vec!["年"]);
        assert_eq!(found[1].words, vec!["万"]);
    }

    #[test]
    fn test_candidates_empty_text() {
        assert!(candidates(&table(), "").unwrap().is_empty());
    }

    #[test]
    fn test_check_words() {
        let words = vec!["中国".to_string(), "中".to_string(), "的".to_string(), "国家".to_string()];
        let checks = check_words(&table(), &words);
        let known: Vec<bool> = checks.iter().map(|c| c.known).collect();
        assert_eq!(known, vec![true, false, true, false]);
    }

    #[test]
    fn test_check_leading_char_of_longer_word_is_unknown() {
        let mut builder = CharTableBuilder::new();
        builder.add_word("中国");
        let checks = check_words(&builder.build(), &["中".to_string()]);
        assert!(!checks[0].known);
    }

    #[test]
    fn test_render_candidates_marks_longest() {
        let found = candidates(&table(), "一万").unwrap();
        assert_eq!(render_candidates(&found), "0 一: 一 一万*\n1 万: 万\n");
    }

    #[test]
    fn test_render_checks() {
        let checks = vec![WordCheck {
            word: "中国".to_string(),
            known: true,
        }];
        assert_eq!(render_checks(&checks), "中国\tyes\n");
    }
}
