//! Configuration management for jprettier.
//!
//! This module provides the [`Config`] struct which controls all formatting
//! behavior. Configuration can be loaded from:
//! - TOML files (`jprettier.toml`)
//! - Programmatic construction (callers override fields directly)
//!
//! Config files are auto-discovered by searching parent directories from the
//! file being formatted up to the filesystem root, plus the user's home
//! directory. A missing key always falls back to its documented default; a
//! missing key is never an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["jprettier.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

/// Opening brace placement for a block construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BraceStyle {
    /// Same line as the construct header: `void run() {`
    C,
    /// Own line at the construct's indent level
    Pascal,
    /// Own line, indented one extra level
    Emacs,
}

/// How `/* ... */` comments are reformatted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCommentMode {
    /// Copy the comment through untouched
    Leave,
    /// Re-indent every continuation line to a ` *` gutter
    AlignStar,
    /// Re-indent every continuation line to a two-space gutter
    AlignBlank,
    /// Preserve original spacing but guarantee a trailing ` */`
    MaintainStar,
}

/// When consecutive field/variable declarations are column-aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSpacing {
    /// Never align
    Never,
    /// Align modifiers, types, and names across the scope
    Always,
    /// Align only declarations that carry no javadoc comment
    Javadoc,
    /// Only line up the `=` column, leave everything before it natural
    AlignEquals,
}

/// Character used for one indent level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentChar {
    Space,
    Tab,
}

/// End-of-line sequence written between completed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

// Serde default functions
fn default_indent() -> usize {
    4
}
fn default_indent_char() -> IndentChar {
    IndentChar::Space
}
fn default_line_ending() -> LineEnding {
    LineEnding::Lf
}
fn default_brace() -> BraceStyle {
    BraceStyle::C
}
fn default_true() -> bool {
    true
}
fn default_blank_lines() -> usize {
    1
}
fn default_javadoc_min() -> usize {
    20
}
fn default_javadoc_max() -> usize {
    80
}
fn default_javadoc_stars() -> usize {
    1
}
fn default_javadoc_indent() -> usize {
    1
}
fn default_tag_order() -> String {
    "param,return,exception,throws,see".to_string()
}
fn default_block_comment_mode() -> BlockCommentMode {
    BlockCommentMode::AlignStar
}
fn default_c_style_indent() -> usize {
    2
}
fn default_field_spacing() -> FieldSpacing {
    FieldSpacing::Always
}

/// Main configuration struct for jprettier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of indent characters per indent level (default: 4)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Character used for indentation (default: space)
    #[serde(default = "default_indent_char")]
    pub indent_char: IndentChar,

    /// End-of-line sequence (default: lf)
    #[serde(default = "default_line_ending")]
    pub line_ending: LineEnding,

    /// Brace placement for class and interface bodies (default: c)
    #[serde(default = "default_brace")]
    pub class_brace: BraceStyle,

    /// Brace placement for method and constructor bodies (default: c)
    #[serde(default = "default_brace")]
    pub method_brace: BraceStyle,

    /// Brace placement for plain code blocks (default: c)
    #[serde(default = "default_brace")]
    pub block_brace: BraceStyle,

    /// Space between a construct header and a same-line `{` (default: true)
    #[serde(default = "default_true")]
    pub space_before_brace: bool,

    /// Blank lines inserted between consecutive members (default: 1)
    #[serde(default = "default_blank_lines")]
    pub blank_lines_between_members: usize,

    /// Column at which javadoc word-wrap becomes allowed (default: 20)
    #[serde(default = "default_javadoc_min")]
    pub javadoc_min_column: usize,

    /// Column past which javadoc word-wrap is forced (default: 80)
    #[serde(default = "default_javadoc_max")]
    pub javadoc_max_column: usize,

    /// Number of `*` characters in the javadoc gutter (default: 1, clamped 1-4)
    #[serde(default = "default_javadoc_stars")]
    pub javadoc_star_count: usize,

    /// Spaces between the javadoc gutter star and the text (default: 1)
    #[serde(default = "default_javadoc_indent")]
    pub javadoc_indent: usize,

    /// Right-align `@param`/`@throws` ids so descriptions share a column (default: true)
    #[serde(default = "default_true")]
    pub javadoc_lined_up_ids: bool,

    /// Allow `/** short description */` on a single line (default: true)
    #[serde(default = "default_true")]
    pub javadoc_single_line: bool,

    /// Re-wrap javadoc description text; false preserves original line breaks
    /// and only normalizes the left gutter (default: true)
    #[serde(default = "default_true")]
    pub javadoc_wrap: bool,

    /// Comma-separated tag emission order (default: "param,return,exception,throws,see")
    #[serde(default = "default_tag_order")]
    pub tag_order: String,

    /// Generate javadoc stubs for nested classes too (default: true)
    #[serde(default = "default_true")]
    pub document_nested_classes: bool,

    /// Inject missing required tags into method javadoc (default: true)
    #[serde(default = "default_true")]
    pub require_method_tags: bool,

    /// Generate a description stub for undocumented classes (default: true)
    #[serde(default = "default_true")]
    pub require_class_tags: bool,

    /// Inject a description stub into empty field javadoc (default: false)
    #[serde(default)]
    pub require_field_tags: bool,

    /// Block comment (`/* ... */`) reformat policy (default: align_star)
    #[serde(default = "default_block_comment_mode")]
    pub block_comment_mode: BlockCommentMode,

    /// Extra per-line indent between a block comment gutter and its text (default: 2)
    #[serde(default = "default_c_style_indent")]
    pub c_style_indent: usize,

    /// Dynamic field/variable alignment policy (default: always)
    #[serde(default = "default_field_spacing")]
    pub field_spacing: FieldSpacing,

    /// Extra breathing space added to every alignment column (default: 0)
    #[serde(default)]
    pub field_spacing_pad: usize,

    /// Space between a cast's closing paren and its operand (default: true)
    #[serde(default = "default_true")]
    pub space_after_cast: bool,

    /// Space between a keyword (`if`, `while`, ...) and its paren (default: true)
    #[serde(default = "default_true")]
    pub space_after_keyword: bool,

    /// Pad the inside of non-empty parentheses (default: false)
    #[serde(default)]
    pub space_in_parens: bool,

    /// Place `catch` on its own line instead of `} catch` (default: false)
    #[serde(default)]
    pub newline_before_catch: bool,

    /// Place `else` on its own line instead of `} else` (default: false)
    #[serde(default)]
    pub newline_before_else: bool,

    /// Place a method's `throws` clause on its own line (default: false)
    #[serde(default)]
    pub throws_on_new_line: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub indent: Option<usize>,
    pub indent_char: Option<IndentChar>,
    pub line_ending: Option<LineEnding>,
    pub class_brace: Option<BraceStyle>,
    pub method_brace: Option<BraceStyle>,
    pub block_brace: Option<BraceStyle>,
    pub space_before_brace: Option<bool>,
    pub blank_lines_between_members: Option<usize>,
    pub javadoc_min_column: Option<usize>,
    pub javadoc_max_column: Option<usize>,
    pub javadoc_star_count: Option<usize>,
    pub javadoc_indent: Option<usize>,
    pub javadoc_lined_up_ids: Option<bool>,
    pub javadoc_single_line: Option<bool>,
    pub javadoc_wrap: Option<bool>,
    pub tag_order: Option<String>,
    pub document_nested_classes: Option<bool>,
    pub require_method_tags: Option<bool>,
    pub require_class_tags: Option<bool>,
    pub require_field_tags: Option<bool>,
    pub block_comment_mode: Option<BlockCommentMode>,
    pub c_style_indent: Option<usize>,
    pub field_spacing: Option<FieldSpacing>,
    pub field_spacing_pad: Option<usize>,
    pub space_after_cast: Option<bool>,
    pub space_after_keyword: Option<bool>,
    pub space_in_parens: Option<bool>,
    pub newline_before_catch: Option<bool>,
    pub newline_before_else: Option<bool>,
    pub throws_on_new_line: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: 4,
            indent_char: IndentChar::Space,
            line_ending: LineEnding::Lf,
            class_brace: BraceStyle::C,
            method_brace: BraceStyle::C,
            block_brace: BraceStyle::C,
            space_before_brace: true,
            blank_lines_between_members: 1,
            javadoc_min_column: 20,
            javadoc_max_column: 80,
            javadoc_star_count: 1,
            javadoc_indent: 1,
            javadoc_lined_up_ids: true,
            javadoc_single_line: true,
            javadoc_wrap: true,
            tag_order: default_tag_order(),
            document_nested_classes: true,
            require_method_tags: true,
            require_class_tags: true,
            require_field_tags: false,
            block_comment_mode: BlockCommentMode::AlignStar,
            c_style_indent: 2,
            field_spacing: FieldSpacing::Always,
            field_spacing_pad: 0,
            space_after_cast: true,
            space_after_keyword: true,
            space_in_parens: false,
            newline_before_catch: false,
            newline_before_else: false,
            throws_on_new_line: false,
        }
    }
}

impl Config {
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 20;
    /// Maximum javadoc wrap column
    const MAX_WRAP_COLUMN: usize = 200;
    /// Maximum javadoc gutter stars
    const MAX_STAR_COUNT: usize = 4;
    /// Maximum alignment padding
    const MAX_SPACING_PAD: usize = 10;
    /// Maximum extra block comment indent
    const MAX_C_STYLE_INDENT: usize = 10;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.indent == 0 {
            return Some("indent must be at least 1".to_string());
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        if self.javadoc_min_column >= self.javadoc_max_column {
            return Some(format!(
                "javadoc_min_column {} must be below javadoc_max_column {}",
                self.javadoc_min_column, self.javadoc_max_column
            ));
        }
        if self.javadoc_max_column > Self::MAX_WRAP_COLUMN {
            return Some(format!(
                "javadoc_max_column {} exceeds maximum of {}",
                self.javadoc_max_column,
                Self::MAX_WRAP_COLUMN
            ));
        }
        if self.javadoc_star_count == 0 || self.javadoc_star_count > Self::MAX_STAR_COUNT {
            return Some(format!(
                "javadoc_star_count {} must be between 1 and {}",
                self.javadoc_star_count,
                Self::MAX_STAR_COUNT
            ));
        }
        if self.field_spacing_pad > Self::MAX_SPACING_PAD {
            return Some(format!(
                "field_spacing_pad {} exceeds maximum of {}",
                self.field_spacing_pad,
                Self::MAX_SPACING_PAD
            ));
        }
        if self.c_style_indent > Self::MAX_C_STYLE_INDENT {
            return Some(format!(
                "c_style_indent {} exceeds maximum of {}",
                self.c_style_indent,
                Self::MAX_C_STYLE_INDENT
            ));
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.indent_char {
            self.indent_char = v;
        }
        if let Some(v) = partial.line_ending {
            self.line_ending = v;
        }
        if let Some(v) = partial.class_brace {
            self.class_brace = v;
        }
        if let Some(v) = partial.method_brace {
            self.method_brace = v;
        }
        if let Some(v) = partial.block_brace {
            self.block_brace = v;
        }
        if let Some(v) = partial.space_before_brace {
            self.space_before_brace = v;
        }
        if let Some(v) = partial.blank_lines_between_members {
            self.blank_lines_between_members = v;
        }
        if let Some(v) = partial.javadoc_min_column {
            self.javadoc_min_column = v;
        }
        if let Some(v) = partial.javadoc_max_column {
            self.javadoc_max_column = v;
        }
        if let Some(v) = partial.javadoc_star_count {
            self.javadoc_star_count = v;
        }
        if let Some(v) = partial.javadoc_indent {
            self.javadoc_indent = v;
        }
        if let Some(v) = partial.javadoc_lined_up_ids {
            self.javadoc_lined_up_ids = v;
        }
        if let Some(v) = partial.javadoc_single_line {
            self.javadoc_single_line = v;
        }
        if let Some(v) = partial.javadoc_wrap {
            self.javadoc_wrap = v;
        }
        if let Some(v) = &partial.tag_order {
            self.tag_order = v.clone();
        }
        if let Some(v) = partial.document_nested_classes {
            self.document_nested_classes = v;
        }
        if let Some(v) = partial.require_method_tags {
            self.require_method_tags = v;
        }
        if let Some(v) = partial.require_class_tags {
            self.require_class_tags = v;
        }
        if let Some(v) = partial.require_field_tags {
            self.require_field_tags = v;
        }
        if let Some(v) = partial.block_comment_mode {
            self.block_comment_mode = v;
        }
        if let Some(v) = partial.c_style_indent {
            self.c_style_indent = v;
        }
        if let Some(v) = partial.field_spacing {
            self.field_spacing = v;
        }
        if let Some(v) = partial.field_spacing_pad {
            self.field_spacing_pad = v;
        }
        if let Some(v) = partial.space_after_cast {
            self.space_after_cast = v;
        }
        if let Some(v) = partial.space_after_keyword {
            self.space_after_keyword = v;
        }
        if let Some(v) = partial.space_in_parens {
            self.space_in_parens = v;
        }
        if let Some(v) = partial.newline_before_catch {
            self.newline_before_catch = v;
        }
        if let Some(v) = partial.newline_before_else {
            self.newline_before_else = v;
        }
        if let Some(v) = partial.throws_on_new_line {
            self.throws_on_new_line = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the file's directory up to the root, then adds home
    /// directory config. Returns list of config file paths in order of
    /// priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Add home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the file's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        if config_files.is_empty() {
            return Self::default();
        }

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }

    /// The string written for one indent level
    #[must_use]
    pub fn indent_unit(&self) -> String {
        match self.indent_char {
            IndentChar::Space => " ".repeat(self.indent),
            IndentChar::Tab => "\t".to_string(),
        }
    }

    /// The javadoc tag order as individual tag names (no `@` prefix)
    #[must_use]
    pub fn tag_order_list(&self) -> Vec<String> {
        self.tag_order
            .split(',')
            .map(|t| t.trim().trim_start_matches('@').to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 4);
        assert_eq!(config.class_brace, BraceStyle::C);
        assert_eq!(config.blank_lines_between_members, 1);
        assert_eq!(config.javadoc_max_column, 80);
        assert_eq!(config.field_spacing, FieldSpacing::Always);
        assert!(config.javadoc_single_line);
    }

    #[test]
    fn test_config_apply_partial() {
        let mut base = Config::default();

        let partial = PartialConfig {
            indent: Some(2),
            method_brace: Some(BraceStyle::Pascal),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.indent, 2);
        assert_eq!(base.method_brace, BraceStyle::Pascal);
        // Other fields should remain at defaults
        assert_eq!(base.class_brace, BraceStyle::C);
        assert!(base.javadoc_wrap);
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config::default();
        base.javadoc_max_column = 100;

        let partial = PartialConfig {
            indent: Some(8),
            ..Default::default()
        };

        base.apply_partial(&partial);
        // javadoc_max_column should be preserved (not reset to default)
        assert_eq!(base.javadoc_max_column, 100);
        assert_eq!(base.indent, 8);
    }

    #[test]
    fn test_partial_config_from_toml() {
        let partial: PartialConfig = toml::from_str(
            r#"
            indent = 2
            class_brace = "pascal"
            block_comment_mode = "align_blank"
            field_spacing = "align_equals"
            line_ending = "crlf"
            "#,
        )
        .unwrap();
        let mut config = Config::default();
        config.apply_partial(&partial);
        assert_eq!(config.indent, 2);
        assert_eq!(config.class_brace, BraceStyle::Pascal);
        assert_eq!(config.block_comment_mode, BlockCommentMode::AlignBlank);
        assert_eq!(config.field_spacing, FieldSpacing::AlignEquals);
        assert_eq!(config.line_ending.as_str(), "\r\n");
    }

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(
            config.validate().is_none(),
            "Default config should be valid"
        );
    }

    #[test]
    fn test_validate_indent_zero() {
        let config = Config {
            indent: 0,
            ..Default::default()
        };
        assert!(config.validate().is_some());
        assert!(config.validate().unwrap().contains("indent"));
    }

    #[test]
    fn test_validate_wrap_columns_inverted() {
        let config = Config {
            javadoc_min_column: 90,
            javadoc_max_column: 80,
            ..Default::default()
        };
        assert!(config.validate().is_some());
        assert!(config.validate().unwrap().contains("javadoc_min_column"));
    }

    #[test]
    fn test_validate_star_count() {
        let config = Config {
            javadoc_star_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_some());

        let config = Config {
            javadoc_star_count: 9,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_discover_config_files_nonexistent_path() {
        let path = PathBuf::from("/nonexistent/path/File.java");
        let files = Config::discover_config_files(&path);
        // Should not panic; result depends on the environment
        let _ = files;
    }

    #[test]
    fn test_from_discovered_files_returns_default_when_empty() {
        let path = PathBuf::from("/nonexistent/unique/path/File.java");
        let config = Config::from_discovered_files(&path);
        assert_eq!(config.indent, 4);
        assert_eq!(config.javadoc_max_column, 80);
    }

    #[test]
    fn test_indent_unit() {
        let config = Config::default();
        assert_eq!(config.indent_unit(), "    ");

        let config = Config {
            indent_char: IndentChar::Tab,
            ..Default::default()
        };
        assert_eq!(config.indent_unit(), "\t");
    }

    #[test]
    fn test_tag_order_list() {
        let config = Config::default();
        assert_eq!(
            config.tag_order_list(),
            vec!["param", "return", "exception", "throws", "see"]
        );

        let config = Config {
            tag_order: "@return , param".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tag_order_list(), vec!["return", "param"]);
    }
}
