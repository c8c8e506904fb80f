/// A query walked outside the sentence buffer it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("range {offset}..{offset}+{len} is out of bounds for a sentence of {sentence_len} chars")]
    OutOfRange {
        offset: usize,
        len: usize,
        sentence_len: usize,
    },
}

impl MatchError {
    /// Check that `offset..offset + len` lies inside a buffer of `sentence_len` chars
    pub fn check(offset: usize, len: usize, sentence_len: usize) -> Result<(), Self> {
        match offset.checked_add(len) {
            Some(end) if end <= sentence_len => Ok(()),
            _ => Err(MatchError::OutOfRange {
                offset,
                len,
                sentence_len,
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_inside_bounds() {
        assert!(MatchError::check(0, 3, 3).is_ok());
        assert!(MatchError::check(3, 0, 3).is_ok());
    }

    #[test]
    fn test_check_past_end() {
        let err = MatchError::check(2, 2, 3).unwrap_err();
        assert_eq!(
            err,
            MatchError::OutOfRange {
                offset: 2,
                len: 2,
                sentence_len: 3
            }
        );
    }

    #[test]
    fn test_check_overflow() {
        assert!(MatchError::check(usize::MAX, 1, 3).is_err());
    }
}
