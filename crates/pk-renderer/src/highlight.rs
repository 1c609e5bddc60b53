//! Language-aware code highlighting.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Syntax highlighter producing class-annotated HTML.
///
/// Wraps a preloaded [`SyntaxSet`]; loading the default syntaxes is
/// expensive, so construct one highlighter and reuse it across renders.
/// Unknown languages fall back to the plain-text syntax.
pub struct Highlighter {
    syntaxes: SyntaxSet,
}

impl Highlighter {
    /// Create a highlighter with the bundled default syntaxes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Highlight `code` as `lang`, emitting `<span class="…">` markup.
    ///
    /// The output is fully escaped. Lines the grammar fails on are
    /// dropped from the highlighted output rather than aborting the block;
    /// the raw text is still available to the caller.
    #[must_use]
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let syntax = lang
            .and_then(|token| self.syntaxes.find_syntax_by_token(token))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);

        for line in LinesWithEndings::from(code) {
            // Grammar errors on a single line must not abort the block.
            let _ = generator.parse_html_for_line_which_includes_newline(line);
        }

        generator.finalize()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
