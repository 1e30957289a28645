//! Token counting for prompt reports using tiktoken

use tiktoken_rs::CoreBPE;

use crate::error::{PromptError, Result};

/// Counts tokens with the `cl100k_base` encoding
pub struct Tokenizer {
    encoding: CoreBPE,
}

impl Tokenizer {
    /// Build the encoder
    pub fn new() -> Result<Self> {
        let encoding =
            tiktoken_rs::cl100k_base().map_err(|e| PromptError::Tokenizer(e.to_string()))?;
        Ok(Self { encoding })
    }

    /// Count tokens in `text`
    pub fn count_tokens(&self, text: &str) -> usize {
        self.encoding.encode_ordinary(text).len()
    }
}

/// Rough token estimate used when no encoder is available
pub fn estimate_tokens(chars: usize) -> usize {
    chars / 4
}
