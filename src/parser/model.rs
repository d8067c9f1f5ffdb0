/// One ingredient name taken from the user's free text.
///
/// Keeps the text as typed (trimmed) for echoing back, and a lower-cased copy
/// used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    original: String,
    normalized: String,
}

impl Token {
    /// Builds a token from one segment of input. Returns `None` when the
    /// segment is blank.
    pub fn new(segment: &str) -> Option<Self> {
        let original = segment.trim();
        if original.is_empty() {
            return None;
        }
        Some(Token {
            original: original.to_string(),
            normalized: original.to_lowercase(),
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}
