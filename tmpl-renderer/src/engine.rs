//! Renderer collaborator interface and its tera-backed implementation.
//!
//! The pipeline only ever sees [`TemplateRenderer`]; it never inspects the
//! template grammar. [`TeraRenderer`] supplies Jinja2-style syntax:
//!
//! | Construct            | Example                                   |
//! |----------------------|-------------------------------------------|
//! | Interpolation        | `{{ appName }}`                           |
//! | Filters              | `{{ appName \| upper }}`                  |
//! | Conditionals         | `{% if env == "prod" %}…{% endif %}`      |
//! | Loops                | `{% for p in ports \| split(pat=",") %}…` |
//! | Raw (no rendering)   | `{% raw %}{{ kept }}{% endraw %}`         |

use tera::Tera;

use tmpl_core::ResolvedContext;

use crate::context::to_tera_context;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// TemplateRenderer
// ---------------------------------------------------------------------------

/// Renders template source text against a resolved context.
pub trait TemplateRenderer {
    fn render(&self, source: &str, context: &ResolvedContext) -> Result<String, RenderError>;
}

// ---------------------------------------------------------------------------
// TeraRenderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for one-off template sources.
///
/// Undefined variables are **strict**: `{{ missing }}` fails the whole file
/// with [`RenderError::Tera`] instead of rendering as empty. Use
/// `{{ missing | default(value="") }}` in templates that tolerate absence.
///
/// HTML autoescaping is off by default since targets are config files.
#[derive(Debug, Clone, Default)]
pub struct TeraRenderer {
    autoescape: bool,
}

impl TeraRenderer {
    /// Construct a new [`TeraRenderer`] with autoescaping disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable HTML autoescaping of interpolated values.
    pub fn with_autoescape(mut self, autoescape: bool) -> Self {
        self.autoescape = autoescape;
        self
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, source: &str, context: &ResolvedContext) -> Result<String, RenderError> {
        let tera_ctx = to_tera_context(context)?;
        Ok(Tera::one_off(source, &tera_ctx, self.autoescape)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
