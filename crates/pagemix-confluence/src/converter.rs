//! Mixed markdown/diagram content to Confluence storage format.
//!
//! [`MixedContentConverter`] scans a document with
//! [`DiagramScanner`](pagemix_diagrams::DiagramScanner), wraps each segment in
//! its macro envelope and joins the envelopes into one page body.

use pagemix_config::{Config, ExtensionDescriptor};
use pagemix_diagrams::{DiagramScanner, ScanConfig, SegmentKind, SubtypeSet};
use tracing::debug;

use crate::error::ConvertError;
use crate::local_id::{LocalIdGenerator, SequentialIds};
use crate::macros::{DiagramMacro, TextMacro};

/// Separator between adjacent macro envelopes.
const SEPARATOR: &str = "\n\n";

/// Join wrapped segments in order and trim the result.
#[must_use]
pub fn assemble(wrapped: &[String]) -> String {
    wrapped.join(SEPARATOR).trim().to_owned()
}

/// Converter settings.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// What counts as a diagram.
    pub scan: ScanConfig,
    /// Envelope for text segments.
    pub text_macro: TextMacro,
    /// Extension that renders diagram segments.
    pub descriptor: ExtensionDescriptor,
}

impl ConverterConfig {
    /// Build converter settings from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Scan`] if a configured subtype keyword is invalid.
    pub fn from_config(config: &Config) -> Result<Self, ConvertError> {
        let subtypes = match &config.diagrams.subtypes {
            Some(keywords) => SubtypeSet::new(keywords)?,
            None => SubtypeSet::default(),
        };

        Ok(Self {
            scan: ScanConfig {
                language: config.diagrams.language.clone(),
                subtypes,
            },
            text_macro: TextMacro::new(config.markdown.macro_name.clone()),
            descriptor: config.extension.clone(),
        })
    }
}

/// Result of converting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Confluence storage-format body.
    pub body: String,
    /// Number of diagram envelopes in `body`.
    pub diagram_count: usize,
    /// Number of markdown envelopes in `body`.
    pub text_count: usize,
    /// Scanner warnings (unterminated diagram markers).
    pub warnings: Vec<String>,
}

impl Conversion {
    /// Human-readable description of what was produced.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.diagram_count == 0 {
            return "Markdown content processed with Confluence Markdown Macro".to_owned();
        }
        format!(
            "Mixed content processed:\n- {} markdown section(s) → Confluence Markdown Macro\n- {} diagram(s) → ADF Extension format",
            self.text_count, self.diagram_count
        )
    }
}

/// Converts mixed markdown and diagram content into a Confluence page body.
///
/// Holds only compiled patterns and macro settings, so one converter can be
/// shared between threads.
///
/// # Example
///
/// ```
/// use pagemix_confluence::{ConverterConfig, MixedContentConverter};
///
/// let converter = MixedContentConverter::new(ConverterConfig::default())?;
/// let conversion = converter.convert("# Flow\n\n@startuml\nA -> B\n@enduml");
///
/// assert_eq!(conversion.diagram_count, 1);
/// assert!(conversion.body.contains("A -&gt; B"));
/// # Ok::<(), pagemix_confluence::ConvertError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MixedContentConverter {
    scanner: DiagramScanner,
    text_macro: TextMacro,
    diagram_macro: DiagramMacro,
}

impl MixedContentConverter {
    /// Create a converter.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] if the diagram settings are invalid.
    pub fn new(config: ConverterConfig) -> Result<Self, ConvertError> {
        Ok(Self {
            scanner: DiagramScanner::new(&config.scan)?,
            text_macro: config.text_macro,
            diagram_macro: DiagramMacro::new(config.descriptor),
        })
    }

    /// Convert a document, numbering diagram ids from 1.
    #[must_use]
    pub fn convert(&self, content: &str) -> Conversion {
        self.convert_with_ids(content, &mut SequentialIds::default())
    }

    /// Convert a document, taking diagram ids from `ids`.
    pub fn convert_with_ids(&self, content: &str, ids: &mut dyn LocalIdGenerator) -> Conversion {
        let scan = self.scanner.scan(content);

        let mut diagram_count = 0;
        let mut text_count = 0;
        let wrapped: Vec<String> = scan
            .segments
            .iter()
            .map(|segment| match segment.kind {
                SegmentKind::Text => {
                    text_count += 1;
                    self.text_macro.render(&segment.content)
                }
                SegmentKind::Diagram => {
                    diagram_count += 1;
                    self.diagram_macro.render(&segment.content, &ids.next_id())
                }
            })
            .collect();

        debug!(
            text = text_count,
            diagrams = diagram_count,
            "Assembled storage body"
        );

        Conversion {
            body: assemble(&wrapped),
            diagram_count,
            text_count,
            warnings: scan.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    use super::*;
    use crate::local_id::RandomIds;

    fn converter() -> MixedContentConverter {
        MixedContentConverter::new(ConverterConfig::default()).unwrap()
    }

    fn text(content: &str) -> String {
        TextMacro::default().render(content)
    }

    fn diagram(body: &str, id: &str) -> String {
        DiagramMacro::default().render(body, id)
    }

    /// Parse `body` as XML and return the concatenated CDATA payloads.
    fn parse_storage(body: &str) -> String {
        let document = format!("<root>{body}</root>");
        let mut reader = Reader::from_str(&document);
        let mut depth = 0usize;
        let mut cdata = String::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::CData(data) => cdata.push_str(std::str::from_utf8(&data).unwrap()),
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(depth, 0);
        cdata
    }

    #[test]
    fn test_plain_markdown() {
        let conversion = converter().convert("Hello **world**");

        assert_eq!(conversion.body, text("Hello **world**"));
        assert_eq!(conversion.diagram_count, 0);
        assert_eq!(conversion.text_count, 1);
    }

    #[test]
    fn test_no_diagram_content_is_wrapped_verbatim() {
        for content in [
            "# Title\n\nSome *prose*.\n",
            "  leading and trailing  \n\n",
            "```rust\nfn main() {}\n```",
            "@startuml without an end",
            "",
        ] {
            assert_eq!(converter().convert(content).body, text(content));
        }
    }

    #[test]
    fn test_fenced_diagram_between_text() {
        let conversion =
            converter().convert("Intro\n```plantuml\n@startuml\nA->B\n@enduml\n```\nOutro");

        let expected = [
            text("Intro"),
            diagram("@startuml\nA->B\n@enduml", "plantuml-1"),
            text("Outro"),
        ]
        .join("\n\n");
        assert_eq!(conversion.body, expected);
        assert_eq!(conversion.diagram_count, 1);
        assert_eq!(conversion.text_count, 2);
    }

    #[test]
    fn test_standalone_only() {
        let conversion = converter().convert("@startuml\nA->B\n@enduml");

        assert_eq!(
            conversion.body,
            diagram("@startuml\nA->B\n@enduml", "plantuml-1")
        );
        assert_eq!(conversion.text_count, 0);
    }

    #[test]
    fn test_fenced_standalone_produces_one_diagram() {
        let conversion = converter().convert("```plantuml\n@startuml\nA->B\n@enduml\n```");

        assert_eq!(conversion.diagram_count, 1);
        assert_eq!(conversion.body.matches("<ac:adf-extension>").count(), 1);
    }

    #[test]
    fn test_diagrams_keep_document_order() {
        let content = "@startuml\nfirst\n@enduml\n\ntext\n\n```plantuml\nsecond\n```\n\n@startmindmap\n* third\n@endmindmap";
        let body = converter().convert(content).body;

        let first = body.find("first").unwrap();
        let second = body.find("second").unwrap();
        let third = body.find("third").unwrap();
        assert!(first < second && second < third);
        assert!(body.find("plantuml-1").unwrap() < body.find("plantuml-2").unwrap());
        assert!(body.find("plantuml-2").unwrap() < body.find("plantuml-3").unwrap());
    }

    #[test]
    fn test_diagram_body_fully_escaped() {
        let body = converter()
            .convert("@startuml\nA -> B : \"a\" & b < c\n@enduml")
            .body;
        let (_, parameter) = body.split_once("<ac:adf-parameter key=\"text\">").unwrap();
        let (payload, _) = parameter.split_once("</ac:adf-parameter>").unwrap();

        assert_eq!(
            payload,
            "@startuml\nA -&gt; B : &quot;a&quot; &amp; b &lt; c\n@enduml"
        );
    }

    #[test]
    fn test_ids_restart_per_call() {
        let converter = converter();
        let first = converter.convert("@startuml\nA\n@enduml");
        let second = converter.convert("@startuml\nA\n@enduml");

        assert_eq!(first, second);
        assert!(second.body.contains("plantuml-1"));
    }

    #[test]
    fn test_convert_with_random_ids() {
        let content = "@startuml\nA\n@enduml\n\n@startuml\nB\n@enduml";
        let conversion = converter().convert_with_ids(content, &mut RandomIds::default());

        assert_eq!(conversion.diagram_count, 2);
        assert!(!conversion.body.contains("plantuml-1<"));
    }

    #[test]
    fn test_output_is_well_formed_xml() {
        let content = "# Intro\n\nx ]]> y & <b>\n\n```plantuml\n@startuml\nA -> B : <<x>> & \"y\"\n@enduml\n```\n\nOutro";
        let body = converter().convert(content).body;

        let cdata = parse_storage(&body);
        assert_eq!(cdata, "# Intro\n\nx ]]> y & <b>Outro");
    }

    #[test]
    fn test_unterminated_marker_reported() {
        let conversion = converter().convert("Intro\n@startgantt\n[Task] lasts 5 days");

        assert_eq!(conversion.diagram_count, 0);
        assert_eq!(conversion.warnings.len(), 1);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.diagrams.language = "puml".to_owned();
        config.diagrams.subtypes = Some(vec!["mindmap".to_owned()]);
        config.markdown.macro_name = "md".to_owned();
        let converter = MixedContentConverter::new(ConverterConfig::from_config(&config).unwrap())
            .unwrap();

        let conversion =
            converter.convert("```puml\nA\n```\n\n@startuml\nB\n@enduml\n\n@startmindmap\n* C\n@endmindmap");

        assert_eq!(conversion.diagram_count, 2);
        assert!(conversion.body.contains("ac:name=\"md\""));
        assert!(conversion.body.contains("<![CDATA[@startuml\nB\n@enduml]]>"));
    }

    #[test]
    fn test_from_config_rejects_bad_subtype() {
        let mut config = Config::default();
        config.diagrams.subtypes = Some(vec!["a b".to_owned()]);

        let err = ConverterConfig::from_config(&config).unwrap_err();
        assert!(matches!(err, ConvertError::Scan(_)));
    }

    #[test]
    fn test_validated_config_builds_converter() {
        let mut config = Config::default();
        config.diagrams.subtypes = Some(vec![" uml ".to_owned()]);
        config.validate().unwrap();

        let converter = MixedContentConverter::new(ConverterConfig::from_config(&config).unwrap())
            .unwrap();
        assert_eq!(converter.convert("@startuml\nA\n@enduml").diagram_count, 1);
    }

    #[test]
    fn test_assemble_trims() {
        let wrapped = vec!["  a".to_owned(), "b\n".to_owned()];
        assert_eq!(assemble(&wrapped), "a\n\nb");
        assert_eq!(assemble(&[]), "");
    }

    #[test]
    fn test_summary() {
        let plain = converter().convert("text");
        assert_eq!(
            plain.summary(),
            "Markdown content processed with Confluence Markdown Macro"
        );

        let mixed = converter().convert("text\n\n@startuml\nA\n@enduml");
        assert_eq!(
            mixed.summary(),
            "Mixed content processed:\n- 1 markdown section(s) → Confluence Markdown Macro\n- 1 diagram(s) → ADF Extension format"
        );
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MixedContentConverter>();
    }
}
