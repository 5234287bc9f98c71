//! Combined shader source splitting.
//!
//! One text unit carries every stage of a program:
//!
//! ```text
//! #shader vertex
//! @vertex fn vs_main(...) -> ... { ... }
//!
//! #shader fragment
//! @fragment fn fs_main() -> ... { ... }
//! ```
//!
//! The splitter performs no shader-language parsing; it only routes lines
//! into per-stage accumulators.

/// Reserved directive that opens a stage section.
pub const STAGE_DIRECTIVE: &str = "#shader";

/// One phase of the GPU shading pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Every stage a bundle can carry. Adding a pipeline stage means
    /// extending the enum and this list, nothing else.
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// Stage name as used in section keywords and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    /// Entry point the linker expects in this stage's module.
    pub fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }

    /// Section keyword → stage. Case-sensitive: `vertex`, not `Vertex`.
    fn from_keyword(keyword: &str) -> Option<ShaderStage> {
        ShaderStage::ALL.into_iter().find(|s| s.name() == keyword)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-stage source text produced by [`split_source`].
///
/// Built once per program and immutable afterward. A stage whose section
/// never appeared (or was empty) has an empty source; the linker treats that
/// as a missing stage, not the splitter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBundle {
    sources: [String; ShaderStage::ALL.len()],
}

impl SourceBundle {
    /// Returns the accumulated source for `stage`.
    pub fn source(&self, stage: ShaderStage) -> &str {
        &self.sources[stage.index()]
    }

    fn push_line(&mut self, stage: ShaderStage, line: &str) {
        let source = &mut self.sources[stage.index()];
        source.push_str(line);
        source.push('\n');
    }
}

/// Splits a combined shader text into per-stage sources.
///
/// Line-oriented scan: a line whose first token is [`STAGE_DIRECTIVE`]
/// switches the active section according to the keyword token that follows;
/// the directive line itself is not copied. Every other line is appended
/// verbatim (plus a newline) to the active section. Lines before the first
/// directive belong to no section and are dropped.
///
/// A directive with an unrecognized or absent keyword leaves the active
/// section unchanged and logs a warning.
pub fn split_source(text: &str) -> SourceBundle {
    let mut bundle = SourceBundle::default();
    let mut current: Option<ShaderStage> = None;

    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        if tokens.next() == Some(STAGE_DIRECTIVE) {
            match tokens.next().and_then(ShaderStage::from_keyword) {
                Some(stage) => current = Some(stage),
                None => log::warn!("ignoring stage directive with unknown keyword: {line:?}"),
            }
            continue;
        }

        if let Some(stage) = current {
            bundle.push_line(stage, line);
        }
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── section routing ───────────────────────────────────────────────────

    #[test]
    fn splits_vertex_and_fragment_sections() {
        let bundle = split_source(
            "#shader vertex\nfn vs() {}\n#shader fragment\nfn fs() {}\n",
        );
        assert_eq!(bundle.source(ShaderStage::Vertex), "fn vs() {}\n");
        assert_eq!(bundle.source(ShaderStage::Fragment), "fn fs() {}\n");
    }

    #[test]
    fn non_marker_lines_round_trip_in_order() {
        let vertex_lines = ["line one", "", "  indented", "\tlast"];
        let text = format!("#shader vertex\n{}\n", vertex_lines.join("\n"));
        let bundle = split_source(&text);

        let collected: Vec<&str> = bundle.source(ShaderStage::Vertex).lines().collect();
        assert_eq!(collected, vertex_lines);
    }

    #[test]
    fn marker_line_is_not_copied() {
        let bundle = split_source("#shader vertex\nbody\n");
        assert!(!bundle.source(ShaderStage::Vertex).contains("#shader"));
    }

    #[test]
    fn reopened_section_accumulates() {
        let bundle = split_source(
            "#shader vertex\na\n#shader fragment\nf\n#shader vertex\nb\n",
        );
        assert_eq!(bundle.source(ShaderStage::Vertex), "a\nb\n");
        assert_eq!(bundle.source(ShaderStage::Fragment), "f\n");
    }

    // ── no-section states ─────────────────────────────────────────────────

    #[test]
    fn empty_input_yields_empty_sections() {
        let bundle = split_source("");
        for stage in ShaderStage::ALL {
            assert_eq!(bundle.source(stage), "");
        }
    }

    #[test]
    fn text_without_directives_is_discarded() {
        let bundle = split_source("just\nsome\nlines\n");
        for stage in ShaderStage::ALL {
            assert_eq!(bundle.source(stage), "");
        }
    }

    #[test]
    fn leading_text_before_first_directive_is_discarded() {
        let bundle = split_source("preamble\n#shader fragment\nbody\n");
        assert_eq!(bundle.source(ShaderStage::Fragment), "body\n");
        assert_eq!(bundle.source(ShaderStage::Vertex), "");
    }

    // ── directive edge cases ──────────────────────────────────────────────

    #[test]
    fn unknown_keyword_leaves_active_section_unchanged() {
        // Policy choice: the bogus directive is dropped, the `vertex`
        // section stays active.
        let bundle = split_source("#shader vertex\na\n#shader geometry\nb\n");
        assert_eq!(bundle.source(ShaderStage::Vertex), "a\nb\n");
        assert_eq!(bundle.source(ShaderStage::Fragment), "");
    }

    #[test]
    fn unknown_keyword_before_any_section_keeps_discarding() {
        let bundle = split_source("#shader geometry\nb\n");
        for stage in ShaderStage::ALL {
            assert_eq!(bundle.source(stage), "");
        }
    }

    #[test]
    fn keyword_is_case_sensitive() {
        let bundle = split_source("#shader Vertex\nb\n");
        assert_eq!(bundle.source(ShaderStage::Vertex), "");
    }

    #[test]
    fn directive_must_be_first_token() {
        // `#shader` appearing mid-line is ordinary content.
        let bundle = split_source("#shader vertex\nsee #shader fragment docs\n");
        assert_eq!(
            bundle.source(ShaderStage::Vertex),
            "see #shader fragment docs\n"
        );
        assert_eq!(bundle.source(ShaderStage::Fragment), "");
    }

    #[test]
    fn directive_tolerates_extra_whitespace() {
        let bundle = split_source("  #shader   fragment  \nbody\n");
        assert_eq!(bundle.source(ShaderStage::Fragment), "body\n");
    }
}
