/*!
 * Prompt assembly: read each listed file, fence it, concatenate, publish
 */

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::clipboard::Clipboard;
use crate::error::{PromptError, Result};
use crate::types::{FormattedBlock, PromptText};
use crate::utils::{display_path, normalize_path};

/// Assembles a prompt from files under a single root
#[derive(Debug, Clone)]
pub struct Assembler {
    root: PathBuf,
}

impl Assembler {
    /// Create an assembler for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: normalize_path(&root.into()),
        }
    }

    /// Read `file` and render it as a block labeled with its root-relative path
    ///
    /// `file` may be absolute or relative to the root. Containment is checked
    /// before the file is opened.
    pub fn format_file(&self, file: &Path) -> Result<FormattedBlock> {
        let source_path = normalize_path(&self.root.join(file));

        let rel_path = source_path
            .strip_prefix(&self.root)
            .ok()
            // A relative root made of `..` leaves them in the stripped path
            .filter(|rel| !rel.components().any(|c| c == Component::ParentDir))
            .ok_or_else(|| PromptError::PathContainment {
                path: file.to_path_buf(),
                root: self.root.clone(),
            })?;

        let bytes = fs::read(&source_path)
            .map_err(|e| PromptError::from_read(source_path.clone(), e))?;
        let content = String::from_utf8(bytes).map_err(|source| PromptError::Decode {
            path: source_path.clone(),
            source,
        })?;

        log::debug!("Read {} ({} bytes)", source_path.display(), content.len());

        Ok(FormattedBlock {
            display_path: display_path(rel_path),
            source_path,
            content,
        })
    }

    /// Format every file in order; the first failure aborts the whole assembly
    pub fn assemble<P: AsRef<Path>>(&self, files: &[P]) -> Result<PromptText> {
        let mut prompt = PromptText::new();
        for file in files {
            prompt.push(self.format_file(file.as_ref())?);
        }
        Ok(prompt)
    }

    /// Assemble `files` and hand the result to `sink` exactly once
    ///
    /// Nothing reaches the sink unless every file was read successfully.
    pub fn assemble_and_publish<P: AsRef<Path>>(
        &self,
        files: &[P],
        sink: &dyn Clipboard,
    ) -> Result<PromptText> {
        let prompt = self.assemble(files)?;
        log::debug!(
            "Publishing {} blocks ({} bytes) to {}",
            prompt.blocks().len(),
            prompt.as_str().len(),
            sink.name()
        );
        sink.copy_to_clipboard(prompt.as_str())?;
        Ok(prompt)
    }
}

/// Format one file under `root` into its block
pub fn format_block(root: &Path, file: &Path) -> Result<FormattedBlock> {
    Assembler::new(root).format_file(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::tempdir;

    use crate::clipboard::{self, ClipboardError};

    /// Records every text it receives
    #[derive(Default)]
    struct RecordingSink {
        copies: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingSink {
        fn copy_to_clipboard(&self, text: &str) -> clipboard::Result<()> {
            self.copies.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    struct FailingSink;

    impl Clipboard for FailingSink {
        fn copy_to_clipboard(&self, _text: &str) -> clipboard::Result<()> {
            Err(ClipboardError::NoClipboardFound)
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_format_single_file() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

        let block = format_block(temp_dir.path(), Path::new("a.txt")).unwrap();
        assert_eq!(block.display_path, "a.txt");
        assert_eq!(block.render(), "```a.txt\nhello```\n\n\n");
    }

    #[test]
    fn test_format_accepts_absolute_path_under_root() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("pages")).unwrap();
        let file = temp_dir.path().join("pages").join("styles.css");
        fs::write(&file, "body {}\n").unwrap();

        let block = Assembler::new(temp_dir.path()).format_file(&file).unwrap();
        assert_eq!(block.display_path, "pages/styles.css");
        assert_eq!(block.content, "body {}\n");
    }

    #[test]
    fn test_format_rejects_path_outside_root() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("proj");
        fs::create_dir(&root).unwrap();
        fs::write(temp_dir.path().join("secret.txt"), "secret").unwrap();

        let result = Assembler::new(&root).format_file(Path::new("../secret.txt"));
        assert!(matches!(result, Err(PromptError::PathContainment { .. })));
    }

    #[test]
    fn test_format_rejects_absolute_path_elsewhere() {
        let root = tempdir().unwrap();
        let other = tempdir().unwrap();
        let file = other.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        let result = Assembler::new(root.path()).format_file(&file);
        assert!(matches!(result, Err(PromptError::PathContainment { .. })));
    }

    #[test]
    fn test_format_rejects_escape_from_relative_root() {
        let result = Assembler::new("..").format_file(Path::new("../secret.txt"));
        assert!(matches!(result, Err(PromptError::PathContainment { .. })));
    }

    #[test]
    fn test_format_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = Assembler::new(temp_dir.path()).format_file(Path::new("main.js"));
        assert!(matches!(result, Err(PromptError::FileNotFound(_))));
    }

    #[test]
    fn test_format_invalid_utf8() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();

        let result = Assembler::new(temp_dir.path()).format_file(Path::new("bin.dat"));
        assert!(matches!(result, Err(PromptError::Decode { .. })));
    }

    #[test]
    fn test_format_directory_is_io_error() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("pages")).unwrap();

        let result = Assembler::new(temp_dir.path()).format_file(Path::new("pages"));
        assert!(matches!(result, Err(PromptError::Io { .. })));
    }

    #[test]
    fn test_assemble_and_publish_writes_once() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "A").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "B\n").unwrap();

        let sink = RecordingSink::default();
        let prompt = Assembler::new(temp_dir.path())
            .assemble_and_publish(&["b.txt", "a.txt"], &sink)
            .unwrap();

        let copies = sink.copies.borrow();
        assert_eq!(copies.len(), 1);
        assert_eq!(copies[0], "```b.txt\nB\n```\n\n\n```a.txt\nA```\n\n\n");
        assert_eq!(copies[0], prompt.as_str());
    }

    #[test]
    fn test_missing_file_never_reaches_sink() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "A").unwrap();

        let sink = RecordingSink::default();
        let result = Assembler::new(temp_dir.path())
            .assemble_and_publish(&["a.txt", "missing.txt"], &sink);

        assert!(matches!(result, Err(PromptError::FileNotFound(_))));
        assert!(sink.copies.borrow().is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "A").unwrap();

        let result = Assembler::new(temp_dir.path()).assemble_and_publish(&["a.txt"], &FailingSink);
        assert!(matches!(result, Err(PromptError::Clipboard(_))));
    }

    #[test]
    fn test_duplicates_produce_duplicate_blocks() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "A").unwrap();

        let prompt = Assembler::new(temp_dir.path())
            .assemble(&["a.txt", "a.txt"])
            .unwrap();
        assert_eq!(prompt.as_str(), "```a.txt\nA```\n\n\n".repeat(2));
    }
}
