//! Delegated PDF rendering.
//!
//! Turning assembled markup into a paginated binary is not this crate's
//! job: it is handed to an external rendering collaborator behind the
//! [`RenderBackend`] seam. The bundled implementation shells out to the
//! `weasyprint` executable, feeding it markup on stdin plus a fixed print
//! stylesheet (A4 pages, 20mm margins, exact color reproduction for
//! background fills). Any failure surfaces as
//! [`crate::error::Error::RenderingFailed`] carrying the collaborator's
//! message.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};

/// Print geometry and color fidelity passed to the renderer alongside the
/// document's own stylesheet.
const PRINT_CSS: &str =
    "@page { size: A4; margin: 20mm } body { -weasy-print-color-adjust: exact; }";

/// An external collaborator that converts a markup document into PDF
/// bytes.
pub trait RenderBackend {
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>>;
}

/// Renders through the `weasyprint` command-line tool.
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    /// The executable to invoke.
    pub command: String,
}

impl Default for WeasyPrint {
    fn default() -> Self {
        WeasyPrint {
            command: "weasyprint".to_string(),
        }
    }
}

/// A scratch path for one call's print stylesheet. The counter keeps
/// concurrent calls in the same process from sharing a file: one call's
/// cleanup must never delete a stylesheet another call's renderer is
/// still reading.
fn stylesheet_scratch_path() -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("bookforge-print-{}-{n}.css", std::process::id()))
}

impl RenderBackend for WeasyPrint {
    fn render_pdf(&self, html: &str) -> Result<Vec<u8>> {
        let css_path = stylesheet_scratch_path();
        std::fs::write(&css_path, PRINT_CSS)
            .map_err(|e| Error::RenderingFailed(format!("cannot write print stylesheet: {e}")))?;

        let spawn = Command::new(&self.command)
            .arg("-")
            .arg("-")
            .arg("--stylesheet")
            .arg(&css_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawn {
            Ok(child) => child,
            Err(e) => {
                let _ = std::fs::remove_file(&css_path);
                return Err(Error::RenderingFailed(format!(
                    "cannot launch {}: {e}",
                    self.command
                )));
            }
        };

        let write_result = child
            .stdin
            .take()
            .ok_or_else(|| Error::RenderingFailed("renderer stdin unavailable".to_string()))
            .and_then(|mut stdin| {
                stdin
                    .write_all(html.as_bytes())
                    .map_err(|e| Error::RenderingFailed(format!("cannot feed renderer: {e}")))
            });

        let output = child
            .wait_with_output()
            .map_err(|e| Error::RenderingFailed(format!("renderer did not finish: {e}")));
        let _ = std::fs::remove_file(&css_path);

        write_result?;
        let output = output?;
        if !output.status.success() {
            return Err(Error::RenderingFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn concurrent_render_calls_get_distinct_stylesheet_paths() {
        assert_ne!(stylesheet_scratch_path(), stylesheet_scratch_path());

        let paths: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(stylesheet_scratch_path))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().expect("can join"))
            .collect();
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn missing_renderer_surfaces_as_a_rendering_failure() {
        let backend = WeasyPrint {
            command: "bookforge-no-such-renderer".to_string(),
        };
        let err = backend
            .render_pdf("<!DOCTYPE html><html><head></head><body></body></html>")
            .expect_err("renderer cannot exist");
        match err {
            Error::RenderingFailed(message) => {
                assert!(message.contains("bookforge-no-such-renderer"))
            }
            other => panic!("expected RenderingFailed, got {other:?}"),
        }
    }
}
