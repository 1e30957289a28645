/*!
 * Clipboard support for promptclip
 *
 * Provides the sinks the assembled prompt is published to: the system
 * clipboard (with automatic detection of the available mechanism) and stdout.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// The native clipboard refused the text
    #[error("Native clipboard error: {0}")]
    Native(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// A write-only destination for the assembled prompt
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardProvider {
    /// tmux clipboard
    Tmux,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (via WSL)
    Wsl,
    /// Termux clipboard
    Termux,
    /// In-process clipboard through arboard
    Native,
}

impl Clipboard for ClipboardProvider {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (cmd, args) = match self {
            Self::Tmux => ("tmux", vec!["load-buffer", "-w", "-"]),
            Self::Xclip => ("xclip", vec!["-selection", "clipboard", "-in"]),
            Self::Xsel => ("xsel", vec!["-b", "-i"]),
            Self::Wayland => ("wl-copy", vec![]),
            Self::MacOS => ("pbcopy", vec![]),
            Self::Wsl => ("clip.exe", vec![]),
            Self::Termux => ("termux-clipboard-set", vec![]),
            Self::Native => return copy_with_arboard(text),
        };

        execute_clipboard_command(cmd, &args, text)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Wayland => "wl-copy",
            Self::MacOS => "pbcopy",
            Self::Wsl => "clip.exe",
            Self::Termux => "termux-clipboard-set",
            Self::Native => "native",
        }
    }
}

//--------------------------------------------------------------------
// Public API
//--------------------------------------------------------------------

/// The operating system clipboard
///
/// The mechanism is chosen when the text is copied, so constructing a
/// `SystemClipboard` never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let clipboard = get_clipboard()?;
        log::debug!("Copying {} bytes with {}", text.len(), clipboard.name());
        clipboard.copy_to_clipboard(text)
    }

    fn name(&self) -> &'static str {
        "clipboard"
    }
}

/// Writes the text to stdout instead of the clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Clipboard for StdoutSink {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

/// Copy text to the system clipboard
///
/// # Examples
/// ```no_run
/// use promptclip::clipboard::copy_to_clipboard;
///
/// if let Err(e) = copy_to_clipboard("Hello, clipboard!") {
///     eprintln!("Failed to copy to clipboard: {}", e);
/// }
/// ```
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    SystemClipboard.copy_to_clipboard(text)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Some(paths) = env::var_os("PATH") {
        if env::split_paths(&paths).any(|dir| Path::new(&dir).join(command).is_file()) {
            return true;
        }
    }

    // Try to run the command with '--version' flag as fallback
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

//--------------------------------------------------------------------
// Internal Implementation
//--------------------------------------------------------------------

/// Pick the first available provider
fn get_clipboard() -> Result<ClipboardProvider> {
    determine_clipboard_providers()
        .into_iter()
        .next()
        .ok_or(ClipboardError::NoClipboardFound)
}

/// Spawn `cmd`, feed `text` on stdin and wait for it to exit
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    let stdin = child.stdin.as_mut().ok_or_else(|| {
        ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
    })?;

    stdin
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to wait for {}", cmd)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

fn copy_with_arboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Native(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| ClipboardError::Native(e.to_string()))
}

/// Platform detection cache
static PLATFORM: OnceLock<&'static str> = OnceLock::new();

/// Determine the platform (cached)
fn get_platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else if cfg!(target_os = "android") {
            "android"
        } else {
            "unknown"
        }
    })
}

/// Providers to try, in order of preference
fn determine_clipboard_providers() -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(4);

    if command_exists("tmux") && is_tmux_running() {
        providers.push(ClipboardProvider::Tmux);
    }

    let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
    providers.extend(platform_providers(get_platform(), wayland, command_exists));

    providers
}

/// Platform-specific providers, given which commands are available
///
/// On Linux an X11 or Wayland selection dies with the process that owns it,
/// so the in-process arboard clipboard is never offered there.
fn platform_providers(
    platform: &str,
    wayland: bool,
    available: impl Fn(&str) -> bool,
) -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(3);

    match platform {
        "macos" => {
            if available("pbcopy") {
                providers.push(ClipboardProvider::MacOS);
            }
            providers.push(ClipboardProvider::Native);
        }
        "windows" | "wsl" => {
            if available("clip.exe") {
                providers.push(ClipboardProvider::Wsl);
            }
            if platform == "windows" {
                providers.push(ClipboardProvider::Native);
            }
        }
        "linux" => {
            if wayland && available("wl-copy") {
                providers.push(ClipboardProvider::Wayland);
            }
            if available("xsel") {
                providers.push(ClipboardProvider::Xsel);
            }
            if available("xclip") {
                providers.push(ClipboardProvider::Xclip);
            }
        }
        "android" => {
            if available("termux-clipboard-set") {
                providers.push(ClipboardProvider::Termux);
            }
        }
        _ => {}
    }

    providers
}

/// Check if we are inside a tmux session
fn is_tmux_running() -> bool {
    env::var("TMUX").is_ok()
}
