/// One parsed line of a character frequency list (`<char> <count>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharFrequency {
    pub ch: char,
    /// Raw occurrence count as a standalone word, if the line has one
    pub count: Option<u64>,
}

impl CharFrequency {
    /// Parse a cleaned line; `Err` carries the reason the line is unusable
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let head = parts.next().ok_or_else(|| "empty line".to_string())?;

        let mut head_chars = head.chars();
        let ch = match (head_chars.next(), head_chars.next()) {
            (Some(ch), None) => ch,
            _ => return Err(format!("expected a single character, got {head:?}")),
        };

        let count = match parts.next() {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| format!("bad count {raw:?}: {e}"))?,
            ),
            None => None,
        };

        Ok(Self { ch, count })
    }

    /// Degree of morphemic freedom derived from the count
    pub fn morphemic_freedom(&self) -> Option<i32> {
        self.count.map(morphemic_freedom)
    }
}

/// Compress a raw count to `ln(count) * 100`; counts below 1 give 0
pub fn morphemic_freedom(count: u64) -> i32 {
    if count < 1 {
        return 0;
    }
    ((count as f64).ln() * 100.0) as i32
}
