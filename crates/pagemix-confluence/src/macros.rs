//! Confluence storage-format macro envelopes.
//!
//! Text segments go into a markdown structured macro as raw CDATA. Diagram
//! segments go into an ADF extension node that invokes the configured Forge
//! app, followed by an identical copy inside `<ac:adf-fallback>`.

use pagemix_config::ExtensionDescriptor;

use crate::escape::escape_html;

/// Markdown structured macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMacro {
    /// Macro name (`markdown` for the Markdown Macro app).
    pub name: String,
}

impl TextMacro {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Wrap markdown verbatim.
    ///
    /// `]]>` cannot occur inside CDATA, so it is split across two adjacent
    /// sections; the renderer sees the original bytes.
    #[must_use]
    pub fn render(&self, content: &str) -> String {
        format!(
            "<ac:structured-macro ac:name=\"{}\">\n  <ac:plain-text-body><![CDATA[{}]]></ac:plain-text-body>\n</ac:structured-macro>",
            escape_html(&self.name),
            content.replace("]]>", "]]]]><![CDATA[>")
        )
    }
}

impl Default for TextMacro {
    fn default() -> Self {
        Self::new("markdown")
    }
}

/// ADF extension envelope for a diagram-rendering Forge app.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiagramMacro {
    pub descriptor: ExtensionDescriptor,
}

impl DiagramMacro {
    #[must_use]
    pub fn new(descriptor: ExtensionDescriptor) -> Self {
        Self { descriptor }
    }

    /// Wrap a diagram body.
    ///
    /// The body is entity-escaped and carried as the `text` guest parameter.
    /// The same node, with the same `local_id`, is repeated as fallback.
    #[must_use]
    pub fn render(&self, body: &str, local_id: &str) -> String {
        let node = self.node(&escape_html(body), &escape_html(local_id));
        format!(
            "<ac:adf-extension>\n{node}\n<ac:adf-fallback>\n{node}\n</ac:adf-fallback>\n</ac:adf-extension>"
        )
    }

    fn node(&self, text: &str, local_id: &str) -> String {
        let descriptor = &self.descriptor;
        let key = escape_html(&descriptor.extension_key());
        let ari = escape_html(&descriptor.extension_ari());
        let label = escape_html(&descriptor.label);
        let environment = escape_html(&descriptor.environment);

        format!(
            r#"<ac:adf-node type="extension">
<ac:adf-attribute key="extension-key">{key}</ac:adf-attribute>
<ac:adf-attribute key="extension-type">com.atlassian.ecosystem</ac:adf-attribute>
<ac:adf-attribute key="parameters">
<ac:adf-parameter key="local-id">{local_id}</ac:adf-parameter>
<ac:adf-parameter key="extension-id">{ari}</ac:adf-parameter>
<ac:adf-parameter key="extension-title">{label}</ac:adf-parameter>
<ac:adf-parameter key="layout">extension</ac:adf-parameter>
<ac:adf-parameter key="forge-environment">{environment}</ac:adf-parameter>
<ac:adf-parameter key="render">native</ac:adf-parameter>
<ac:adf-parameter key="guest-params">
<ac:adf-parameter key="text">{text}</ac:adf-parameter>
</ac:adf-parameter>
</ac:adf-attribute>
<ac:adf-attribute key="text">{label}</ac:adf-attribute>
<ac:adf-attribute key="layout">default</ac:adf-attribute>
<ac:adf-attribute key="local-id">{local_id}</ac:adf-attribute>
</ac:adf-node>"#
        )
    }
}
