//! Placeholder illustration synthesis.
//!
//! Illustrations are deterministic, self-contained SVG panels: a diagonal
//! gradient derived from the theme color, a few decorative circles, and
//! three caption lines (title, style + truncated prompt, footer). The SVG
//! is base64-encoded into a `data:` URI so it can be embedded inline in
//! markup with no separate asset to manage.
//!
//! Synthesis is total. A failing renderer is retried up to [`RETRIES`]
//! times; once the budget is exhausted the caller receives a visibly
//! marked fallback panel instead of an error, so a usable image is always
//! returned.

use crate::error::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Number of retries after the first failed synthesis attempt.
pub const RETRIES: usize = 2;

/// How many characters of the prompt survive into the caption subtitle.
const PROMPT_CAPTION_LIMIT: usize = 60;

/// A synthesized vector image, ready for inline embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Illustration {
    /// The raw SVG markup.
    pub svg: String,
    /// The same image as a `data:image/svg+xml;base64,` URI.
    pub data_uri: String,
}

/// Everything the panel renderer needs to draw one illustration.
#[derive(Debug, Clone)]
pub struct PanelSpec {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    pub theme_color: String,
    pub width: u32,
    pub height: u32,
}

/// The seam between the retry loop and the actual drawing code. The
/// default implementation is [`GradientPanel`]; tests substitute a failing
/// renderer to exercise the fallback path.
pub trait PanelRenderer {
    fn render_panel(&self, spec: &PanelSpec) -> Result<String>;
}

/// The built-in renderer: pure string formatting over the panel spec.
#[derive(Debug, Default)]
pub struct GradientPanel;

impl PanelRenderer for GradientPanel {
    fn render_panel(&self, spec: &PanelSpec) -> Result<String> {
        Ok(gradient_panel_svg(spec))
    }
}

/// Outcome of a synthesis: either a freshly rendered panel or the fallback
/// image produced after the retry budget ran out.
#[derive(Debug, Clone)]
pub enum Synthesis {
    Rendered(Illustration),
    Degraded { image: Illustration, reason: String },
}

impl Synthesis {
    /// The image, regardless of how it was obtained.
    pub fn into_image(self) -> Illustration {
        match self {
            Synthesis::Rendered(image) => image,
            Synthesis::Degraded { image, .. } => image,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Synthesis::Degraded { .. })
    }
}

/// Synthesize an illustration with the built-in renderer.
///
/// Never fails: callers can assume a usable image is always returned.
pub fn synthesize(
    prompt: &str,
    style: &str,
    theme_color: &str,
    width: u32,
    height: u32,
) -> Illustration {
    synthesize_with(&GradientPanel, prompt, style, theme_color, width, height).into_image()
}

/// Synthesize an illustration through an explicit renderer, retrying on
/// failure and degrading to the fallback panel once the budget is spent.
pub fn synthesize_with<R: PanelRenderer>(
    renderer: &R,
    prompt: &str,
    style: &str,
    theme_color: &str,
    width: u32,
    height: u32,
) -> Synthesis {
    let subtitle = format!("{style} • {}", truncate_chars(prompt, PROMPT_CAPTION_LIMIT))
        .trim()
        .to_string();
    let spec = PanelSpec {
        title: "AI Illustration".to_string(),
        subtitle,
        footer: "Generated Inline".to_string(),
        theme_color: theme_color.to_string(),
        width,
        height,
    };

    let mut last_error = None;
    for _ in 0..=RETRIES {
        match renderer.render_panel(&spec) {
            Ok(svg) => return Synthesis::Rendered(encode(svg)),
            Err(e) => last_error = Some(e.to_string()),
        }
    }

    let reason = last_error.unwrap_or_default();
    log::warn!("illustration synthesis degraded after {} attempts: {reason}", RETRIES + 1);
    let fallback = gradient_panel_svg(&PanelSpec {
        title: "Image Unavailable".to_string(),
        subtitle: reason.clone(),
        footer: "Retry later".to_string(),
        ..spec
    });
    Synthesis::Degraded {
        image: encode(fallback),
        reason,
    }
}

/// Draw the gradient panel. All caption text and the theme color are
/// escaped before insertion; unescaped `&`, `<`, or `>` in the output
/// would break the embedding document.
fn gradient_panel_svg(spec: &PanelSpec) -> String {
    let color = html_escape::encode_double_quoted_attribute(&spec.theme_color);
    let title = html_escape::encode_text(&spec.title);
    let subtitle = html_escape::encode_text(&spec.subtitle);
    let footer = html_escape::encode_text(&spec.footer);
    let (w, h) = (spec.width as f64, spec.height as f64);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">
  <defs>
    <linearGradient id="g" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="{color}" stop-opacity="0.95" />
      <stop offset="100%" stop-color="{color}" stop-opacity="0.7" />
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#g)"/>
  <g fill="#ffffff" opacity="0.15">
    <circle cx="{c1x}" cy="{c1y}" r="60"/>
    <circle cx="{c2x}" cy="{c2y}" r="40"/>
    <circle cx="{c3x}" cy="{c3y}" r="70"/>
  </g>
  <text x="50%" y="45%" dominant-baseline="middle" text-anchor="middle" font-family="Inter, Arial" font-size="28" font-weight="700" fill="#ffffff">{title}</text>
  <text x="50%" y="55%" dominant-baseline="middle" text-anchor="middle" font-family="Inter, Arial" font-size="18" font-weight="500" fill="#f0f0f0">{subtitle}</text>
  <text x="50%" y="90%" dominant-baseline="middle" text-anchor="middle" font-family="Inter, Arial" font-size="14" fill="#f9f9f9">{footer}</text>
</svg>"##,
        width = spec.width,
        height = spec.height,
        c1x = w * 0.2,
        c1y = h * 0.3,
        c2x = w * 0.8,
        c2y = h * 0.2,
        c3x = w * 0.6,
        c3y = h * 0.75,
    )
}

fn encode(svg: String) -> Illustration {
    let data_uri = format!("data:image/svg+xml;base64,{}", BASE64.encode(svg.as_bytes()));
    Illustration { svg, data_uri }
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
