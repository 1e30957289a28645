/*!
 * Configuration handling for promptclip
 */

use std::path::PathBuf;

use clap::Parser;

use crate::clipboard::{Clipboard, StdoutSink, SystemClipboard};
use crate::error::Result;
use crate::manifest::PROMPT_FILES;
use crate::report::ReportFormat;
use crate::root::{resolve_root_from_exe, validate_root};

/// Command-line arguments for promptclip
///
/// Every flag is optional; a bare invocation reads the fixed file list from
/// the root above the executable and copies the prompt to the clipboard.
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "promptclip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy a fixed set of project files to the clipboard as fenced code blocks",
    long_about = "Reads a fixed list of project files relative to the project root, wraps each in a code fence labeled with its path, and copies the concatenation to the system clipboard."
)]
pub struct Args {
    /// Project root (defaults to the parent of the directory holding this executable)
    #[clap(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Write the prompt to stdout instead of the clipboard
    #[clap(long)]
    pub stdout: bool,

    /// Print a per-file report to stderr after publishing
    #[clap(long, value_enum, value_name = "FORMAT")]
    pub report: Option<ReportFormat>,
}

/// Where the prompt is published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Clipboard,
    Stdout,
}

impl Sink {
    /// The clipboard implementation backing this sink
    pub fn clipboard(&self) -> Box<dyn Clipboard> {
        match self {
            Self::Clipboard => Box::new(SystemClipboard),
            Self::Stdout => Box::new(StdoutSink),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory all listed files are resolved against
    pub root: PathBuf,

    /// Files to assemble, in output order
    pub files: &'static [&'static str],

    /// Output sink
    pub sink: Sink,

    /// Report format, if a report was requested
    pub report: Option<ReportFormat>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let root = match args.root {
            Some(root) => root,
            None => resolve_root_from_exe()?,
        };

        Ok(Self {
            root,
            files: PROMPT_FILES,
            sink: if args.stdout {
                Sink::Stdout
            } else {
                Sink::Clipboard
            },
            report: args.report,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.root)
    }
}
