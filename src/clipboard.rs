use anyhow::Result;
use arboard::Clipboard;

/// Copy a string to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy an activation target (URL or mailto) to the clipboard.
///
/// Opening a browser tab has no portable terminal equivalent, so activating
/// a selection hands the link to the clipboard instead.
pub fn copy_link(href: &str) -> Result<()> {
    copy_to_clipboard(href)
}
