//! Template context — converts a [`ResolvedContext`] into a [`tera::Context`].

use tmpl_core::ResolvedContext;

use crate::error::RenderError;

/// Convert to a [`tera::Context`] for rendering.
///
/// Every resolved key becomes a top-level string variable.
pub fn to_tera_context(ctx: &ResolvedContext) -> Result<tera::Context, RenderError> {
    tera::Context::from_serialize(ctx).map_err(RenderError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_becomes_a_variable() {
        let ctx: ResolvedContext = [("appName", "Gjinja"), ("secret", "mysecret")]
            .into_iter()
            .collect();
        let tera_ctx = to_tera_context(&ctx).expect("context conversion");
        assert_eq!(
            tera_ctx.get("appName").and_then(|v| v.as_str()),
            Some("Gjinja")
        );
        assert_eq!(
            tera_ctx.get("secret").and_then(|v| v.as_str()),
            Some("mysecret")
        );
    }

    #[test]
    fn empty_context_converts() {
        let tera_ctx = to_tera_context(&ResolvedContext::default()).expect("context conversion");
        assert!(tera_ctx.get("anything").is_none());
    }
}
