//! Internal constants for diagram detection.

/// Default fence language tag for diagram code blocks.
pub const DEFAULT_LANGUAGE: &str = "plantuml";

/// `PlantUML` diagram subtypes accepted in `@start<subtype>` / `@end<subtype>` markers.
pub const DEFAULT_SUBTYPES: &[&str] = &[
    "uml",
    "wbs",
    "mindmap",
    "gantt",
    "activity",
    "component",
    "deployment",
    "state",
    "timing",
    "sequence",
    "class",
    "usecase",
    "object",
    "salt",
    "ditaa",
    "dot",
    "jcckit",
    "wire",
    "yaml",
    "json",
    "ebnf",
    "regex",
    "flow",
    "nwdiag",
    "rackdiag",
    "packetdiag",
    "actdiag",
    "blockdiag",
    "seqdiag",
];
