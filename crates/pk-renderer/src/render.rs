//! Event-driven post renderer.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::highlight::Highlighter;
use crate::slug::IdScope;
use crate::state::{CodeBlockState, HeadingState, TableState, escape_html};
use crate::toc::TocEntry;

/// Result of rendering a post body.
#[derive(Clone, Debug)]
pub struct Rendered {
    /// Article HTML.
    pub html: String,
    /// Anchored level-2/3 headings in document order, as assigned during
    /// this render pass. Matches [`crate::build_toc`] on the same body.
    pub toc: Vec<TocEntry>,
    /// Raw text of each fenced code block, in document order. The index
    /// matches the `data-block` attribute on the block's copy button, so
    /// the host can wire copy-to-clipboard without re-parsing.
    pub code_blocks: Vec<String>,
}

/// Markdown-to-HTML renderer for post bodies.
///
/// Construct once and reuse: the embedded [`Highlighter`] loads its
/// syntax definitions eagerly. Each [`render`](Self::render) call is an
/// independent pass with a fresh [`IdScope`].
pub struct PostRenderer {
    highlighter: Highlighter,
}

impl PostRenderer {
    /// Create a renderer with the default syntax set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: Highlighter::new(),
        }
    }

    /// Render a title-stripped post body to article HTML.
    ///
    /// Level-1 headings are suppressed (the page header owns the title);
    /// callers that may still have a leading title line should run
    /// [`crate::strip_leading_title`] first so the TOC pass sees the same
    /// input.
    #[must_use]
    pub fn render(&self, body: &str) -> Rendered {
        let options =
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        let mut walker = Walker::new(&self.highlighter);
        for event in Parser::new_ext(body, options) {
            walker.event(event);
        }
        walker.finish()
    }
}

impl Default for PostRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-pass event walker; owns all output and buffer state.
struct Walker<'h> {
    highlighter: &'h Highlighter,
    output: String,
    ids: IdScope,
    toc: Vec<TocEntry>,
    code: CodeBlockState,
    code_blocks: Vec<String>,
    table: TableState,
    heading: HeadingState,
    image_alt: Option<String>,
    pending_image: Option<(String, String)>,
}

impl<'h> Walker<'h> {
    fn new(highlighter: &'h Highlighter) -> Self {
        Self {
            highlighter,
            output: String::with_capacity(4096),
            ids: IdScope::new(),
            toc: Vec::new(),
            code: CodeBlockState::default(),
            code_blocks: Vec::new(),
            table: TableState::default(),
            heading: HeadingState::default(),
            image_alt: None,
            pending_image: None,
        }
    }

    fn finish(self) -> Rendered {
        Rendered {
            html: self.output,
            toc: self.toc,
            code_blocks: self.code_blocks,
        }
    }

    /// Route inline markup to the heading buffer while a heading is open.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => self.task_list_marker(checked),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.heading.is_suppressed() {
                    self.output.push_str("<p>");
                }
            }
            Tag::Heading { level, .. } => {
                self.heading.start(heading_level_to_num(level));
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(ref info) if !info.is_empty() => fence_language(info),
                    _ => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str(r#"<div class="table-scroll"><table>"#);
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let cell = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{cell}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Link { dest_url, .. } => {
                let link = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image_alt = Some(String::new());
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::FootnoteDefinition(_)
            | Tag::HtmlBlock
            | Tag::MetadataBlock(_)
            | Tag::DefinitionList
            | Tag::DefinitionListTitle
            | Tag::DefinitionListDefinition
            | Tag::Superscript
            | Tag::Subscript => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if !self.heading.is_suppressed() {
                    self.output.push_str("</p>");
                }
            }
            TagEnd::Heading(_) => self.complete_heading(),
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => self.complete_code_block(),
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Table => self.output.push_str("</tbody></table></div>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                let alt = self.image_alt.take().unwrap_or_default();
                if let Some((src, title)) = self.pending_image.take() {
                    self.write_image(&src, &alt, &title);
                }
            }
            TagEnd::FootnoteDefinition
            | TagEnd::HtmlBlock
            | TagEnd::MetadataBlock(_)
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition
            | TagEnd::Superscript
            | TagEnd::Subscript => {}
        }
    }

    /// Write a completed heading, assigning its anchor ID.
    ///
    /// Level 1 is dropped: the post title is rendered by the page header,
    /// never by the article body. Levels 2/3 get an ID from this pass's
    /// [`IdScope`]; deeper levels render without anchors and stay out of
    /// the TOC.
    fn complete_heading(&mut self) {
        let Some((level, text, html)) = self.heading.complete() else {
            return;
        };
        match level {
            1 => {}
            2 | 3 => {
                let text = text.trim().to_owned();
                let id = self.ids.assign(&text);
                write!(
                    self.output,
                    r#"<h{level} id="{id}">{}</h{level}>"#,
                    html.trim()
                )
                .unwrap();
                self.toc.push(TocEntry { id, text, level });
            }
            _ => {
                write!(self.output, "<h{level}>{}</h{level}>", html.trim()).unwrap();
            }
        }
    }

    /// Write a completed fenced code block.
    ///
    /// The block gets a header bar with the language label (or `CODE`)
    /// and a copy button whose `data-block` index points into
    /// [`Rendered::code_blocks`]. Highlighted content defaults to the
    /// plain-text grammar when no language is declared.
    fn complete_code_block(&mut self) {
        let (lang, content) = self.code.end();
        // Match the on-screen selection: no trailing newline in the copied text.
        let raw = content.strip_suffix('\n').unwrap_or(&content).to_owned();
        let index = self.code_blocks.len();

        let label = lang
            .as_deref()
            .map_or_else(|| "CODE".to_owned(), str::to_uppercase);
        let highlighted = self.highlighter.highlight(&content, lang.as_deref());

        write!(
            self.output,
            r#"<div class="code-block"><div class="code-block-header"><span class="code-block-lang">{}</span><button type="button" class="code-block-copy" data-block="{index}" aria-label="Copy code">Copy</button></div>"#,
            escape_html(&label)
        )
        .unwrap();
        match lang.as_deref() {
            Some(lang) => write!(
                self.output,
                r#"<pre><code class="language-{}">{highlighted}</code></pre></div>"#,
                escape_html(lang)
            )
            .unwrap(),
            None => write!(self.output, "<pre><code>{highlighted}</code></pre></div>").unwrap(),
        }

        self.code_blocks.push(raw);
    }

    fn write_image(&mut self, src: &str, alt: &str, title: &str) {
        if title.is_empty() {
            write!(
                self.output,
                r#"<img src="{}" alt="{}">"#,
                escape_html(src),
                escape_html(alt)
            )
            .unwrap();
        } else {
            write!(
                self.output,
                r#"<img src="{}" title="{}" alt="{}">"#,
                escape_html(src),
                escape_html(title),
                escape_html(alt)
            )
            .unwrap();
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if let Some(alt) = self.image_alt.as_mut() {
            alt.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        let markup = format!("<code>{}</code>", escape_html(code));
        if self.heading.is_active() {
            self.heading.push_text(code);
            self.heading.push_html(&markup);
        } else {
            self.output.push_str(&markup);
        }
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else if self.heading.is_active() {
            self.heading.push_text(" ");
            self.heading.push_html(" ");
        } else {
            self.output.push('\n');
        }
    }

    fn task_list_marker(&mut self, checked: bool) {
        self.output.push_str(if checked {
            r#"<input type="checkbox" checked disabled> "#
        } else {
            r#"<input type="checkbox" disabled> "#
        });
    }
}

/// First whitespace-separated token of the fence info string.
fn fence_language(info: &str) -> Option<String> {
    info.split_whitespace()
        .next()
        .map(str::to_owned)
        .filter(|lang| !lang.is_empty())
}

fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
