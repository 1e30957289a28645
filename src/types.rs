/*!
 * Core types for promptclip
 */

use std::path::PathBuf;

use crate::utils::count_lines;

/// Opening and closing delimiter of a block
pub const FENCE: &str = "```";

/// Separator written after every closing fence
pub const BLOCK_SEPARATOR: &str = "\n\n\n";

/// One file rendered as a fenced, path-labeled block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBlock {
    /// Path relative to the root, `/`-separated
    pub display_path: String,
    /// Absolute path the content was read from
    pub source_path: PathBuf,
    /// Verbatim file content
    pub content: String,
}

impl FormattedBlock {
    /// Render the block exactly as it appears in the prompt
    pub fn render(&self) -> String {
        format!(
            "{FENCE}{}\n{}{FENCE}{BLOCK_SEPARATOR}",
            self.display_path, self.content
        )
    }

    /// Number of lines in the content
    pub fn lines(&self) -> usize {
        count_lines(&self.content)
    }

    /// Number of characters in the content
    pub fn chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// The concatenation of all blocks in file-list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptText {
    text: String,
    blocks: Vec<FormattedBlock>,
}

impl PromptText {
    /// Create an empty prompt
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block at the end of the prompt
    pub fn push(&mut self, block: FormattedBlock) {
        self.text.push_str(&block.render());
        self.blocks.push(block);
    }

    /// The assembled text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Blocks in the order they were appended
    pub fn blocks(&self) -> &[FormattedBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(path: &str, content: &str) -> FormattedBlock {
        FormattedBlock {
            display_path: path.to_string(),
            source_path: PathBuf::from("/proj").join(path),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_render_block() {
        assert_eq!(block("a.txt", "hello").render(), "```a.txt\nhello```\n\n\n");
    }

    #[test]
    fn test_render_keeps_fences_in_content() {
        let rendered = block("README.md", "```rust\nfn main() {}\n```\n").render();
        assert_eq!(rendered, "```README.md\n```rust\nfn main() {}\n```\n```\n\n\n");
    }

    #[test]
    fn test_prompt_text_concatenates_in_order() {
        let mut prompt = PromptText::new();
        assert!(prompt.is_empty());

        prompt.push(block("b.txt", "second"));
        prompt.push(block("a.txt", "first"));

        assert_eq!(
            prompt.as_str(),
            "```b.txt\nsecond```\n\n\n```a.txt\nfirst```\n\n\n"
        );
        assert_eq!(prompt.blocks().len(), 2);
        assert_eq!(prompt.blocks()[0].display_path, "b.txt");
    }
}
