//! Javadoc model
//!
//! An ordered collection of tagged description components extracted from one
//! `/** ... */` comment: the bare description, `@param`, `@return`,
//! `@throws`, and arbitrary other tags. Supports required-tag injection
//! (synthesizing missing `@param`/`@return` stubs per configuration) and
//! single-line vs. multi-line rendering with a configured tag order.

use crate::comment::description::render_description;
use crate::comment::patterns::{JAVADOC_TAG_RE, SINGLE_LINE_BLOCKER_RE};
use crate::comment::tokenizer::{has_content, CommentToken, CommentTokenizer, TokenKind};
use crate::config::Config;
use crate::layout::PrintState;

/// Tags that carry an identifier word after the tag itself
fn tag_takes_id(tag: &str) -> bool {
    matches!(tag, "param" | "throws" | "exception")
}

/// `@throws` and `@exception` name the same slot
fn tags_equivalent(a: &str, b: &str) -> bool {
    a == b
        || (a == "throws" && b == "exception")
        || (a == "exception" && b == "throws")
}

/// Tags where a single containment match short-circuits further scanning
fn tag_short_circuits(tag: &str) -> bool {
    matches!(tag, "param" | "return" | "throws" | "exception" | "")
}

/// Tags participating in id-column alignment; `@see` and friends keep their
/// natural single space
fn tag_aligns(tag: &str) -> bool {
    matches!(tag, "param" | "return" | "throws" | "exception")
}

/// One tag+description unit inside a javadoc comment
#[derive(Debug, Clone)]
pub struct JavadocComponent {
    /// Tag name without `@`; empty for the bare description
    pub tag: String,
    /// Identifier for `@param`/`@throws`-style tags
    pub id: Option<String>,
    /// Description text; line breaks preserved as `\n`
    pub description: String,
    /// Columns the `@tag id` header needs, for id-column alignment
    pub len_hint: usize,
    pub required: bool,
    pub printed: bool,
}

impl JavadocComponent {
    #[must_use]
    pub fn new(tag: &str, id: Option<String>, description: &str) -> Self {
        let mut len_hint = 0;
        if !tag.is_empty() {
            len_hint = tag.len() + 1;
            if let Some(id) = &id {
                len_hint += id.len() + 1;
            }
        }
        JavadocComponent {
            tag: tag.to_string(),
            id,
            description: description.to_string(),
            len_hint,
            required: false,
            printed: false,
        }
    }

    fn required_stub(tag: &str, id: Option<String>, description: &str) -> Self {
        let mut component = JavadocComponent::new(tag, id, description);
        component.required = true;
        component
    }
}

/// The parsed model of one javadoc comment
#[derive(Debug, Clone, Default)]
pub struct JavadocComment {
    components: Vec<JavadocComponent>,
    /// A required-only policy is active for param/return/throws tags
    required_only: bool,
}

impl JavadocComment {
    /// Parse the raw text of a `/** ... */` comment into components.
    ///
    /// An id-bearing tag with no following identifier word is malformed and
    /// is silently dropped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let body = strip_delimiters(raw);
        let tokens: Vec<CommentToken> = CommentTokenizer::new(body).collect();

        let mut doc = JavadocComment::default();
        let mut tag = String::new();
        let mut id: Option<String> = None;
        let mut description = String::new();
        let mut open = false;

        let mut pos = 0;
        while pos < tokens.len() {
            let token = &tokens[pos];
            match token.kind {
                TokenKind::Word if JAVADOC_TAG_RE.is_match(&token.image) => {
                    if open {
                        doc.add_component(build_component(&tag, id.take(), &description));
                    }
                    tag = token.image.trim_start_matches('@').to_string();
                    id = None;
                    description.clear();
                    open = true;
                    pos += 1;
                    if tag_takes_id(&tag) {
                        // The identifier is the next word, skipping whitespace
                        while pos < tokens.len()
                            && tokens[pos].kind != TokenKind::Word
                        {
                            pos += 1;
                        }
                        if pos < tokens.len()
                            && !JAVADOC_TAG_RE.is_match(&tokens[pos].image)
                        {
                            id = Some(tokens[pos].image.clone());
                            pos += 1;
                        }
                    }
                }
                TokenKind::Word => {
                    description.push_str(&token.image);
                    open = true;
                    pos += 1;
                }
                TokenKind::Space => {
                    if !description.is_empty() {
                        description.push(' ');
                    }
                    pos += 1;
                }
                TokenKind::Newline => {
                    if !description.is_empty() {
                        description.push('\n');
                    }
                    pos += 1;
                }
            }
        }
        if open {
            doc.add_component(build_component(&tag, id, &description));
        }
        doc
    }

    /// Append a component; ignores `None`
    pub fn add_component(&mut self, component: Option<JavadocComponent>) {
        if let Some(component) = component {
            self.components.push(component);
        }
    }

    #[must_use]
    pub fn components(&self) -> &[JavadocComponent] {
        &self.components
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Mark components carrying `tag` required, synthesizing one when absent.
    ///
    /// For the canonical one-slot tags (param/return/throws/exception and
    /// the bare description) the first match ends the scan; other tags keep
    /// scanning so every instance is marked.
    pub fn require_tag(&mut self, tag: &str, default_description: &str) {
        let mut found = false;
        for component in &mut self.components {
            if tags_equivalent(&component.tag, tag) {
                component.required = true;
                found = true;
                if tag_short_circuits(tag) {
                    break;
                }
            }
        }
        if !found {
            self.components
                .push(JavadocComponent::required_stub(tag, None, default_description));
        }
    }

    /// Mark the component matching (tag, id) required, synthesizing one when
    /// absent
    pub fn require_named_tag(&mut self, tag: &str, id: &str, default_description: &str) {
        for component in &mut self.components {
            if tags_equivalent(&component.tag, tag) && component.id.as_deref() == Some(id) {
                component.required = true;
                return;
            }
        }
        self.components.push(JavadocComponent::required_stub(
            tag,
            Some(id.to_string()),
            default_description,
        ));
    }

    /// Required-tag policy for a method: one `@param` per declared parameter
    /// by position, `@return` unless void, one `@throws` per clause entry
    pub fn finish_for_method(
        &mut self,
        params: &[String],
        returns_value: bool,
        throws: &[String],
        config: &Config,
    ) {
        if !config.require_method_tags {
            return;
        }
        self.required_only = true;
        for name in params {
            self.require_named_tag("param", name, "Description of the parameter");
        }
        if returns_value {
            self.require_tag("return", "Description of the return value");
        }
        for exception in throws {
            self.require_named_tag("throws", exception, "Description of the exception");
        }
    }

    /// Constructors require nothing beyond their parameters
    pub fn finish_for_constructor(&mut self, params: &[String], config: &Config) {
        if !config.require_method_tags {
            return;
        }
        self.required_only = true;
        for name in params {
            self.require_named_tag("param", name, "Description of the parameter");
        }
    }

    /// Classes and interfaces require a description stub
    pub fn finish_for_type(&mut self, qualified_name: &str, config: &Config) {
        if !config.require_class_tags {
            return;
        }
        self.require_tag("", &format!("Description of the {qualified_name} class"));
    }

    pub fn finish_for_field(&mut self, config: &Config) {
        if !config.require_field_tags {
            return;
        }
        self.require_tag("", "Description of the field");
    }

    /// Whether a required-only policy suppresses unrequired instances of `tag`
    fn required_only_for(&self, tag: &str) -> bool {
        self.required_only && tag_short_circuits(tag) && !tag.is_empty()
    }

    /// Render the comment at the current indent level
    pub fn render(&mut self, state: &mut PrintState) {
        let config = state.config().clone();

        state.indent();
        if self.try_single_line(state, &config) {
            return;
        }

        let gutter = format!(" {}", "*".repeat(config.javadoc_star_count));
        let prefix = format!("{gutter}{}", " ".repeat(config.javadoc_indent));

        state.word("/**");
        state.newline();

        // Bare description first
        let mut printed_description = false;
        if let Some(idx) = self.components.iter().position(|c| c.tag.is_empty()) {
            let description = self.components[idx].description.clone();
            self.components[idx].printed = true;
            if has_content(&description) {
                state.indent();
                state.word(&prefix);
                render_description(state, &description, &prefix, 0, &config);
                state.newline();
                printed_description = true;
            }
        }

        // Blank gutter line between description and tag block
        let more = self.components.iter().any(|c| !c.printed);
        if printed_description && more && self.components.len() > 1 {
            state.indent();
            state.word(&gutter);
            state.newline();
        }

        // Shared description start column for lined-up ids
        let header_width = self
            .components
            .iter()
            .filter(|c| tag_aligns(&c.tag))
            .map(|c| c.len_hint)
            .max()
            .unwrap_or(0);

        // Tags in configured order
        for tag in config.tag_order_list() {
            for idx in 0..self.components.len() {
                if self.components[idx].printed
                    || !tags_equivalent(&self.components[idx].tag, &tag)
                {
                    continue;
                }
                if self.required_only_for(&tag) && !self.components[idx].required {
                    // Suppressed, but counts as handled
                    self.components[idx].printed = true;
                    continue;
                }
                self.render_component(state, idx, header_width, &prefix, &config);
            }
        }

        // Everything still unprinted, in original order
        for idx in 0..self.components.len() {
            if !self.components[idx].printed {
                self.render_component(state, idx, header_width, &prefix, &config);
            }
        }

        state.indent();
        state.word(" */");
        state.newline();
    }

    /// Single-line rendering when eligible; returns whether it was used
    fn try_single_line(&mut self, state: &mut PrintState, config: &Config) -> bool {
        if !config.javadoc_single_line || self.components.len() != 1 {
            return false;
        }
        let component = &self.components[0];
        if !component.tag.is_empty() {
            return false;
        }
        if SINGLE_LINE_BLOCKER_RE.is_match(&component.description) {
            return false;
        }
        let collapsed = collapse(&component.description);
        // "/** " + text + " */"
        if state.line_len() + collapsed.chars().count() + 7 > config.javadoc_max_column {
            return false;
        }
        state.word("/** ");
        state.word(&collapsed);
        state.word(" */");
        state.newline();
        self.components[0].printed = true;
        true
    }

    fn render_component(
        &mut self,
        state: &mut PrintState,
        idx: usize,
        header_width: usize,
        prefix: &str,
        config: &Config,
    ) {
        let component = self.components[idx].clone();
        self.components[idx].printed = true;

        state.indent();
        state.word(prefix);
        let base = state.line_len();
        if component.tag.is_empty() {
            render_description(state, &component.description, prefix, 0, config);
            state.newline();
            return;
        }

        state.word("@");
        state.word(&component.tag);
        if let Some(id) = &component.id {
            state.space();
            state.word(id);
        }

        let hang = if config.javadoc_lined_up_ids && tag_aligns(&component.tag) {
            state.pad_to(base + header_width);
            header_width
        } else {
            component.len_hint
        };
        if has_content(&component.description) {
            state.space();
            render_description(state, &component.description, prefix, hang, config);
        }
        state.newline();
    }
}

/// Build a parsed component, rejecting malformed and empty ones
fn build_component(tag: &str, id: Option<String>, description: &str) -> Option<JavadocComponent> {
    if tag_takes_id(tag) && id.is_none() {
        return None;
    }
    let description = description.trim_end();
    if tag.is_empty() && !has_content(description) {
        return None;
    }
    Some(JavadocComponent::new(tag, id, description))
}

/// Strip the `/**` opener and `*/` closer from a raw comment
fn strip_delimiters(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(stripped) = body.strip_prefix("/**") {
        body = stripped;
    } else if let Some(stripped) = body.strip_prefix("/*") {
        body = stripped;
    }
    if let Some(stripped) = body.strip_suffix("*/") {
        body = stripped;
    }
    body
}

/// Collapse a description to single-space-separated words
fn collapse(description: &str) -> String {
    let mut out = String::new();
    for token in CommentTokenizer::new(description) {
        match token.kind {
            TokenKind::Word => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
                out.push_str(&token.image);
            }
            TokenKind::Space | TokenKind::Newline => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
        }
    }
    out.truncate(out.trim_end().len());
    out
}
