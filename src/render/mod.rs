//! Output formatting for resolved hosts.
//!
//! Templates use Go `text/template` syntax. The template data has a single
//! `hosts` field holding the address list, and a `join` helper is registered
//! next to the built-in functions:
//!
//! ```text
//! {{join "," .hosts}}
//! {{range .hosts}}server {{.}}:5432
//! {{end}}
//! ```
//!
//! A bare `{{.hosts}}` prints `[10.0.0.1 10.0.0.2]`, as Go does. Other lists a
//! template builds itself keep the template engine's own list formatting.

pub mod funcs;

use crate::k8s::Hosts;
use crate::{KubehostsError, Result};
use gtmpl::{Context, Template, Value};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// `[a b c]` followed by a newline.
    #[default]
    None,
    Inline(String),
    File(PathBuf),
}

impl TemplateSource {
    /// An inline format wins over a template file when both are given.
    pub fn from_flags(format: Option<String>, template: Option<PathBuf>) -> Self {
        match (format, template) {
            (Some(format), _) if !format.is_empty() => TemplateSource::Inline(format),
            (_, Some(path)) if !path.as_os_str().is_empty() => TemplateSource::File(path),
            _ => TemplateSource::None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub hosts: Hosts,
    pub source: TemplateSource,
}

impl RenderRequest {
    pub fn new(hosts: Hosts, source: TemplateSource) -> Self {
        Self { hosts, source }
    }
}

/// Writes the rendered hosts to `out`.
///
/// Output is rendered in full before the first write, so a failing template
/// leaves `out` untouched.
pub fn render<W: Write>(request: &RenderRequest, out: &mut W) -> Result<()> {
    let rendered = render_to_string(request)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn render_to_string(request: &RenderRequest) -> Result<String> {
    match &request.source {
        TemplateSource::None => Ok(format!("{}\n", request.hosts)),
        TemplateSource::Inline(source) => render_template(source, &request.hosts),
        TemplateSource::File(path) => {
            debug!("Loading template from {}", path.display());
            let source = fs::read_to_string(path).map_err(|e| KubehostsError::TemplateFile {
                path: path.clone(),
                source: e,
            })?;
            render_template(&source, &request.hosts)
        }
    }
}

fn render_template(source: &str, hosts: &Hosts) -> Result<String> {
    let mut template = Template::default();
    template.add_func("join", funcs::join);
    template
        .parse(source)
        .map_err(|e| KubehostsError::TemplateError(e.to_string()))?;

    let addresses = address_values(hosts);
    let rendered = template
        .render(&template_context(addresses.clone()))
        .map_err(|e| KubehostsError::TemplateError(e.to_string()))?;

    Ok(normalize_printed_hosts(rendered, &addresses, hosts))
}

fn address_values(hosts: &Hosts) -> Vec<Value> {
    hosts.iter().cloned().map(Value::String).collect()
}

fn template_context(addresses: Vec<Value>) -> Context {
    let mut data = HashMap::new();
    data.insert("hosts".to_string(), Value::Array(addresses));

    Context::from(Value::Map(data))
}

/// gtmpl prints a bare list (`{{.hosts}}`, `{{print .hosts}}`) in its `Debug`
/// form, `[String("a"), String("b")]`. Rewrite every such print of the `hosts`
/// list to the Go form `[a b]`, the same text as the default dump.
fn normalize_printed_hosts(rendered: String, addresses: &[Value], hosts: &Hosts) -> String {
    if hosts.is_empty() {
        return rendered;
    }

    let printed = format!("{:?}", addresses);
    if rendered.contains(&printed) {
        rendered.replace(&printed, &hosts.to_string())
    } else {
        rendered
    }
}
