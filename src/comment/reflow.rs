//! Block comment reflow
//!
//! Reformats `/* ... */` comments under one of four mutually exclusive
//! policies: leave untouched, re-align with a trailing-star gutter, re-align
//! with a blank gutter, or maintain the original spacing while guaranteeing
//! the closing delimiter. The aligned policies apply a configurable extra
//! indent between the gutter and the text.

use crate::config::{BlockCommentMode, Config};
use crate::layout::PrintState;

/// Print one block comment. `last_in_run` marks the final comment of a
/// comment run, which owes the aligned policies a trailing line break plus
/// an indent recovery.
pub fn print_block_comment(state: &mut PrintState, raw: &str, last_in_run: bool, config: &Config) {
    match config.block_comment_mode {
        BlockCommentMode::Leave => print_untouched(state, raw),
        BlockCommentMode::AlignStar => {
            print_aligned(state, raw, " *", "/", last_in_run, config.c_style_indent);
        }
        BlockCommentMode::AlignBlank => {
            print_aligned(state, raw, "  ", "*/", last_in_run, config.c_style_indent);
        }
        BlockCommentMode::MaintainStar => print_maintained(state, raw),
    }
}

/// Copy the comment line by line, exactly as written
fn print_untouched(state: &mut PrintState, raw: &str) {
    for (i, line) in raw.lines().enumerate() {
        if i == 0 {
            if state.line_is_empty() {
                state.indent();
            } else {
                state.space();
            }
        } else {
            state.newline();
        }
        state.word(line.trim_end());
    }
}

/// Re-indent every line to the current depth behind `gutter`, padding text
/// out by `pad` columns; close with `gutter` + `closer`
fn print_aligned(
    state: &mut PrintState,
    raw: &str,
    gutter: &str,
    closer: &str,
    last_in_run: bool,
    pad: usize,
) {
    if !state.line_is_empty() {
        state.newline();
    }
    state.indent();
    state.word("/*");

    let mut seen_content = false;
    for line in content_lines(raw) {
        // Leading blank lines are dropped; interior ones keep a gutter line
        if line.is_empty() && !seen_content {
            continue;
        }
        seen_content = true;
        state.newline();
        state.indent();
        state.word(gutter);
        if !line.is_empty() {
            state.pad_to(state.line_len() + pad);
            state.word(&line);
        }
    }

    state.newline();
    state.indent();
    state.word(gutter);
    state.word(closer);

    if last_in_run {
        state.newline();
        state.surprise_indent();
    }
}

/// Keep the original column spacing, only guaranteeing the `*/` closer
fn print_maintained(state: &mut PrintState, raw: &str) {
    if state.line_is_empty() {
        state.indent();
    } else {
        state.space();
    }
    let text = raw.trim_end();
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            state.newline();
        }
        state.word(line.trim_end());
    }
    if !text.ends_with("*/") {
        state.word(" */");
    }
}

/// Comment body split into lines with delimiters and star gutters stripped
fn content_lines(raw: &str) -> Vec<String> {
    let mut body = raw.trim();
    if let Some(stripped) = body.strip_prefix("/**") {
        body = stripped;
    } else if let Some(stripped) = body.strip_prefix("/*") {
        body = stripped;
    }
    if let Some(stripped) = body.strip_suffix("*/") {
        body = stripped;
    }
    body.trim_end()
        .lines()
        .map(|line| line.trim_start().trim_start_matches('*').trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print_with(raw: &str, config: Config, last_in_run: bool) -> String {
        let mut state = PrintState::new(config.clone());
        print_block_comment(&mut state, raw, last_in_run, &config);
        state.finish()
    }

    fn mode(mode: BlockCommentMode) -> Config {
        Config {
            block_comment_mode: mode,
            ..Config::default()
        }
    }

    #[test]
    fn test_align_star_reflows_lines() {
        let out = print_with(
            "/* hello\n      world */",
            mode(BlockCommentMode::AlignStar),
            false,
        );
        assert_eq!(out, "/*\n *  hello\n *  world\n */\n");
    }

    #[test]
    fn test_align_star_strips_old_gutter() {
        let out = print_with(
            "/*\n * first\n * second\n */",
            mode(BlockCommentMode::AlignStar),
            false,
        );
        assert_eq!(out, "/*\n *  first\n *  second\n */\n");
    }

    #[test]
    fn test_align_star_skips_leading_blank_lines() {
        let out = print_with(
            "/*\n\n\n   text */",
            mode(BlockCommentMode::AlignStar),
            false,
        );
        assert_eq!(out, "/*\n *  text\n */\n");
    }

    #[test]
    fn test_align_star_keeps_interior_blank_line() {
        let out = print_with(
            "/* a\n\n b */",
            mode(BlockCommentMode::AlignStar),
            false,
        );
        assert_eq!(out, "/*\n *  a\n *\n *  b\n */\n");
    }

    #[test]
    fn test_align_star_respects_indent_depth() {
        let config = mode(BlockCommentMode::AlignStar);
        let mut state = PrintState::new(config.clone());
        state.increase_indent();
        print_block_comment(&mut state, "/* x */", false, &config);
        assert_eq!(state.finish(), "    /*\n     *  x\n     */\n");
    }

    #[test]
    fn test_align_star_custom_pad() {
        let config = Config {
            block_comment_mode: BlockCommentMode::AlignStar,
            c_style_indent: 4,
            ..Config::default()
        };
        let out = print_with("/* x */", config, false);
        assert_eq!(out, "/*\n *    x\n */\n");
    }

    #[test]
    fn test_align_blank_gutter_and_closer() {
        let out = print_with(
            "/* x */",
            mode(BlockCommentMode::AlignBlank),
            false,
        );
        assert_eq!(out, "/*\n    x\n  */\n");
    }

    #[test]
    fn test_align_star_last_in_run_recovers_indent() {
        let config = mode(BlockCommentMode::AlignStar);
        let mut state = PrintState::new(config.clone());
        state.increase_indent();
        print_block_comment(&mut state, "/* x */", true, &config);
        state.word("int y;");
        let out = state.finish();
        assert!(out.ends_with(" */\n    int y;\n"), "{out:?}");
    }

    #[test]
    fn test_leave_mode_is_verbatim() {
        let raw = "/* odd   spacing\n        kept */";
        let out = print_with(raw, mode(BlockCommentMode::Leave), false);
        assert_eq!(out, "/* odd   spacing\n        kept */\n");
    }

    #[test]
    fn test_leave_mode_trailing_comment_gets_space() {
        let config = mode(BlockCommentMode::Leave);
        let mut state = PrintState::new(config.clone());
        state.word("int x;");
        print_block_comment(&mut state, "/* note */", false, &config);
        assert_eq!(state.finish(), "int x; /* note */\n");
    }

    #[test]
    fn test_maintain_mode_preserves_columns() {
        let raw = "/* a\n     b\n */";
        let out = print_with(raw, mode(BlockCommentMode::MaintainStar), false);
        assert_eq!(out, "/* a\n     b\n */\n");
    }

    #[test]
    fn test_maintain_mode_guarantees_closer() {
        let out = print_with("/* open ended", mode(BlockCommentMode::MaintainStar), false);
        assert_eq!(out, "/* open ended */\n");
    }

    #[test]
    fn test_empty_comment() {
        let out = print_with("/* */", mode(BlockCommentMode::AlignStar), false);
        assert_eq!(out, "/*\n */\n");
    }
}
