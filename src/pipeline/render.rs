//! Structural renderer: turn the `pulldown-cmark` event stream into speakable text.
//!
//! ## Why a stack of buffers?
//!
//! `pulldown-cmark` emits a flat `Start(tag) … End(tag)` stream. Several rules
//! need the *finished* child text of a node (a list item is trimmed before it
//! gets its full stop, a code block drops everything it collected), so each
//! open tag gets its own buffer. On `End` the buffer is popped, run through
//! [`NodeKind::emit`] and appended to the parent. Composite nodes are
//! therefore always emitted after all of their children.
//!
//! ## Punctuation
//!
//! Headings and list items end in `". "` and paragraphs in `" "` so that TTS
//! engines pause at block boundaries. Everything else is either passed through
//! (emphasis, quotes, links) or dropped (code, raw HTML, rules).

use pulldown_cmark::{Event, Options, Tag};

/// The closed set of Markdown constructs the renderer distinguishes.
///
/// Constructs without a dedicated rule map to [`NodeKind::Other`], which
/// passes its child text through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Emphasis,
    Strong,
    Strikethrough,
    CodeSpan,
    CodeBlock,
    Link,
    Image,
    /// ATX or setext heading, level 1–6. The level is not spoken.
    Heading(u8),
    Paragraph,
    List { ordered: bool },
    ListItem,
    ThematicBreak,
    BlockQuote,
    HardBreak,
    SoftBreak,
    HtmlBlock,
    InlineHtml,
    /// Tables, footnotes, definition lists, math, metadata blocks …
    Other,
}

impl NodeKind {
    /// Classify an opening tag.
    pub fn from_tag(tag: &Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::Heading { level, .. } => NodeKind::Heading(*level as u8),
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::CodeBlock(_) => NodeKind::CodeBlock,
            Tag::HtmlBlock => NodeKind::HtmlBlock,
            Tag::List(start) => NodeKind::List {
                ordered: start.is_some(),
            },
            Tag::Item => NodeKind::ListItem,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Link { .. } => NodeKind::Link,
            Tag::Image { .. } => NodeKind::Image,
            _ => NodeKind::Other,
        }
    }

    /// Produce the text for this node given its already-rendered children.
    ///
    /// Link and image children are the link text and the alt text; their
    /// targets never reach the renderer as text.
    pub fn emit(self, children: String) -> String {
        match self {
            NodeKind::Text
            | NodeKind::Emphasis
            | NodeKind::Strong
            | NodeKind::Strikethrough
            | NodeKind::Link
            | NodeKind::Image
            | NodeKind::List { .. }
            | NodeKind::BlockQuote
            | NodeKind::Other => children,

            NodeKind::CodeSpan
            | NodeKind::CodeBlock
            | NodeKind::ThematicBreak
            | NodeKind::HtmlBlock
            | NodeKind::InlineHtml => String::new(),

            NodeKind::Heading(_) => children + ". ",
            NodeKind::Paragraph => children + " ",
            NodeKind::ListItem => format!("{}. ", children.trim()),
            NodeKind::HardBreak | NodeKind::SoftBreak => String::from(" "),
        }
    }
}

/// Parser options for the grammar collaborator.
pub fn parser_options(strikethrough: bool) -> Options {
    let mut options = Options::empty();
    if strikethrough {
        options.insert(Options::ENABLE_STRIKETHROUGH);
    }
    options
}

/// One open tag and the text its children have produced so far.
struct Frame {
    kind: NodeKind,
    text: String,
}

/// Render a Markdown event stream into a single flat string.
///
/// Never fails. An unbalanced stream (which `pulldown-cmark` does not
/// produce) is closed off at the end as if the missing `End` events arrived.
pub fn render<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = Event<'a>>,
{
    let mut root = String::new();
    let mut stack: Vec<Frame> = Vec::new();

    for event in events {
        match event {
            Event::Start(tag) => stack.push(Frame {
                kind: NodeKind::from_tag(&tag),
                text: String::new(),
            }),
            Event::End(_) => close(&mut stack, &mut root),
            leaf => {
                let emitted = emit_leaf(leaf);
                sink(&mut stack, &mut root).push_str(&emitted);
            }
        }
    }

    while !stack.is_empty() {
        close(&mut stack, &mut root);
    }
    root
}

/// Pop the innermost frame and append its emission to the parent.
fn close(stack: &mut Vec<Frame>, root: &mut String) {
    if let Some(frame) = stack.pop() {
        let emitted = frame.kind.emit(frame.text);
        sink(stack, root).push_str(&emitted);
    }
}

fn sink<'s>(stack: &'s mut [Frame], root: &'s mut String) -> &'s mut String {
    match stack.last_mut() {
        Some(frame) => &mut frame.text,
        None => root,
    }
}

fn emit_leaf(event: Event<'_>) -> String {
    match event {
        Event::Text(t) => NodeKind::Text.emit(t.into_string()),
        Event::Code(t) => NodeKind::CodeSpan.emit(t.into_string()),
        Event::Html(t) => NodeKind::HtmlBlock.emit(t.into_string()),
        Event::InlineHtml(t) => NodeKind::InlineHtml.emit(t.into_string()),
        Event::SoftBreak => NodeKind::SoftBreak.emit(String::new()),
        Event::HardBreak => NodeKind::HardBreak.emit(String::new()),
        Event::Rule => NodeKind::ThematicBreak.emit(String::new()),
        Event::InlineMath(t) | Event::DisplayMath(t) => NodeKind::Other.emit(t.into_string()),
        // Footnote references and task markers carry no child text.
        _ => NodeKind::Other.emit(String::new()),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
