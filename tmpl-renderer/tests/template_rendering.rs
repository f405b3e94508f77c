use tmpl_core::ResolvedContext;
use tmpl_renderer::{RenderError, TemplateRenderer, TeraRenderer};

fn deploy_context() -> ResolvedContext {
    [
        ("appName", "Gjinja"),
        ("secret", "mysecret"),
        ("cwd", "/home/user\n"),
        ("env", "prod"),
        ("hosts", "a.example,b.example"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn reference_example_renders() {
    let out = TeraRenderer::new()
        .render(
            "Hello {{ appName }}! Your secret is {{ secret }} at {{ cwd | trim }}.",
            &deploy_context(),
        )
        .expect("render");
    assert_eq!(out, "Hello Gjinja! Your secret is mysecret at /home/user.");
}

#[test]
fn conditionals_use_resolved_values() {
    let template = "\
log_level = {% if env == \"prod\" %}warn{% else %}debug{% endif %}
";
    let out = TeraRenderer::new()
        .render(template, &deploy_context())
        .expect("render");
    assert_eq!(out, "log_level = warn\n");
}

#[test]
fn loops_over_split_values() {
    let template = "{% for h in hosts | split(pat=\",\") %}server {{ h }};\n{% endfor %}";
    let out = TeraRenderer::new()
        .render(template, &deploy_context())
        .expect("render");
    assert_eq!(out, "server a.example;\nserver b.example;\n");
}

#[test]
fn default_filter_tolerates_missing_keys() {
    let out = TeraRenderer::new()
        .render("port={{ port | default(value=\"8080\") }}", &deploy_context())
        .expect("render");
    assert_eq!(out, "port=8080");
}

#[test]
fn text_without_tags_is_unchanged() {
    let body = "plain: config\nkey = value\n\n";
    let out = TeraRenderer::new()
        .render(body, &ResolvedContext::default())
        .expect("render");
    assert_eq!(out, body);
}

#[test]
fn raw_blocks_are_left_alone() {
    let out = TeraRenderer::new()
        .render("{% raw %}{{ appName }}{% endraw %}", &deploy_context())
        .expect("render");
    assert_eq!(out, "{{ appName }}");
}

/// Any type implementing the trait can stand in for tera.
struct Uppercase;

impl TemplateRenderer for Uppercase {
    fn render(&self, source: &str, _context: &ResolvedContext) -> Result<String, RenderError> {
        if source.is_empty() {
            return Err(RenderError::Template("empty source".to_string()));
        }
        Ok(source.to_uppercase())
    }
}

#[test]
fn renderer_is_usable_as_trait_object() {
    let renderers: Vec<Box<dyn TemplateRenderer>> = vec![Box::new(TeraRenderer::new()), Box::new(Uppercase)];
    let outputs: Vec<String> = renderers
        .iter()
        .map(|r| r.render("{{ env }}", &deploy_context()).expect("render"))
        .collect();
    assert_eq!(outputs, ["prod", "{{ ENV }}"]);

    let err = Uppercase.render("", &deploy_context()).unwrap_err();
    assert_eq!(err.to_string(), "template error: empty source");
}
