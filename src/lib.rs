/*!
 * promptclip - Copy a fixed set of project files to the clipboard as an LLM prompt
 *
 * Each file is wrapped in a code fence labeled with its path relative to the
 * project root; the blocks are concatenated in list order and published to
 * the clipboard in a single write.
 */

pub mod assembler;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;
pub mod root;
pub mod tokenizer;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use assembler::{format_block, Assembler};
pub use clipboard::{Clipboard, StdoutSink, SystemClipboard};
pub use config::{Args, Config, Sink};
pub use error::{PromptError, Result};
pub use manifest::PROMPT_FILES;
pub use report::{FileReport, PromptReport, ReportFormat, Reporter};
pub use root::resolve_root;
pub use types::{FormattedBlock, PromptText};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
