//! Executes side-effect requests produced by the session.
//!
//! All three effects are best-effort: a failing clipboard, viewer, or copy
//! is logged and swallowed so the terminal stays interactive. Nothing here
//! reports back into the scrollback.

use std::fs;
use std::path::Path;

use termfolio_core::session::Effect;


/// Run a batch of effects in order.
pub fn run_all(effects: &[Effect]) {
    for effect in effects {
        run(effect);
    }
}

/// Run a single effect.
pub fn run(effect: &Effect) {
    match effect {
        Effect::CopyToClipboard(text) => copy_to_clipboard(text),
        Effect::OpenDocument(path) => open_document(path),
        Effect::DownloadDocument { path, file_name } => download_document(path, file_name),
    }
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text.to_string()) {
                tracing::warn!("clipboard write failed: {}", e);
            }
        }
        Err(e) => tracing::warn!("clipboard unavailable: {}", e),
    }
}

fn open_document(path: &Path) {
    if let Err(e) = open::that_detached(path) {
        tracing::warn!("failed to open {}: {}", path.display(), e);
    } else {
        tracing::debug!("opened {}", path.display());
    }
}

/// Copy the document into the user's download directory (falling back to
/// the home directory) under its own file name.
fn download_document(path: &Path, file_name: &str) {
    let Some(dir) = dirs::download_dir().or_else(dirs::home_dir) else {
        tracing::warn!("no download directory available");
        return;
    };
    let dest = dir.join(file_name);
    match fs::copy(path, &dest) {
        Ok(_) => tracing::debug!("saved {} to {}", path.display(), dest.display()),
        Err(e) => tracing::warn!("download of {} failed: {}", path.display(), e),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // Clipboard and viewer effects need a desktop session; only the
    // filesystem copy is exercised here.

    #[test]
    fn download_copies_into_home_when_no_download_dir() {
        let src = std::env::temp_dir().join("termfolio-effect-test.pdf");
        fs::write(&src, b"pdf bytes").unwrap();

        download_document(&src, "termfolio-effect-test.pdf");

        if let Some(dir) = dirs::download_dir().or_else(dirs::home_dir) {
            let dest = dir.join("termfolio-effect-test.pdf");
            if dest.exists() {
                assert_eq!(fs::read(&dest).unwrap(), b"pdf bytes");
                let _ = fs::remove_file(&dest);
            }
        }
        let _ = fs::remove_file(&src);
    }

    #[test]
    fn missing_source_is_not_fatal() {
        download_document(&PathBuf::from("/does/not/exist.pdf"), "exist.pdf");
    }
}
