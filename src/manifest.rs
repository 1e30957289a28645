/*!
 * The fixed list of files assembled into the prompt
 */

/// Files read on every run, relative to the root, in output order
pub const PROMPT_FILES: &[&str] = &[
    "main.js",
    "preload.js",
    "pages/render.js",
    "pages/index.html",
    "pages/styles.css",
];
