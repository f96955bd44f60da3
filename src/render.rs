//! Markdown rendering module.
//!
//! Converts raw Markdown text into an ordered sequence of display lines,
//! each a fully styled, print-ready terminal row. Rendering is a pure
//! function of the document text and the terminal width; it performs no
//! I/O and never fails on text input — constructs that match no rule
//! degrade to literal text.
//!
//! Only a line-oriented subset of Markdown is handled: fenced code
//! blocks, headings, horizontal rules, blockquotes, flat lists, and the
//! usual inline spans. Nested lists, tables, reference links and HTML
//! are out of scope.
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::style::{BLUE, BOLD, CYAN, GREEN, RESET, REVERSE, UNDERLINE, YELLOW};

/// Matches an ordered list item on an already-trimmed line.
static ORDERED_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s+(.*)").expect("Invalid ordered list regex")
});

/// Matches image syntax `![alt](src)`.
static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex")
});

/// Matches link syntax `[text](url)`.
///
/// Applied after [`IMAGE_REGEX`], so image forms are already consumed and
/// whatever bracket pairs remain are plain links. The text group must not
/// cross a bracket, otherwise it could span from a `[` inside an earlier
/// image substitution's escape sequences to a later link on the same line.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\((.*?)\)").expect("Invalid link regex")
});

/// Matches bold spans, `**text**` or `__text__`.
static BOLD_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").expect("Invalid bold span regex")
});

/// Matches italic spans, `*text*` or `_text_`.
static ITALIC_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*(.*?)\*|_(.*?)_").expect("Invalid italic span regex")
});

/// Matches inline code spans.
static CODE_SPAN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`(.*?)`").expect("Invalid code span regex")
});

/// Renders Markdown text into styled display lines.
///
/// Lines are processed strictly in order, carrying a single "inside
/// fenced code block" flag forward. Each raw line is consumed by the
/// first matching rule: fence delimiter, code block body, heading,
/// horizontal rule, blockquote, list item, and finally the inline
/// markup pass. An unterminated fence leaves the rest of the document
/// rendered as code.
///
/// # Arguments
///
/// * `content` - The raw Markdown document text
/// * `width` - Terminal width in columns, used for centering and padding
///
/// # Returns
///
/// The rendered rows, in document order, ready to print as-is.
#[must_use]
pub fn render(content: &str, width: usize) -> Vec<String>
{
    let mut lines = Vec::new();
    let mut inside_code = false;

    for raw_line in content.lines()
    {
        render_line(raw_line, width, &mut inside_code, &mut lines);
    }

    lines
}

/// Renders a single raw line, applying the first matching rule.
///
/// # Arguments
///
/// * `raw_line` - The raw line to render
/// * `width` - Terminal width in columns
/// * `inside_code` - Code block state, toggled by fence lines
/// * `lines` - Output buffer; a rule may emit more than one row
fn render_line(
    raw_line: &str,
    width: usize,
    inside_code: &mut bool,
    lines: &mut Vec<String>,
)
{
    let trimmed = raw_line.trim();

    // Fence delimiters toggle the code block state and draw a rule,
    // whether entering or leaving the block.
    if trimmed == "```"
    {
        *inside_code = !*inside_code;
        lines.push(format!("{GREEN}{}{RESET}", "─".repeat(width)));
        return;
    }

    // Code block bodies are shown verbatim, padded to the full width so
    // the reverse-video background forms a solid block.
    if *inside_code
    {
        lines.push(format!("{REVERSE}{raw_line:<width$}{RESET}"));
        return;
    }

    if raw_line.starts_with('#')
    {
        render_heading(raw_line, width, lines);
        return;
    }

    if trimmed == "---" || trimmed == "***" || trimmed == "___"
    {
        lines.push(format!("{BOLD}{}{RESET}", "─".repeat(width)));
        return;
    }

    // Blockquotes get a colored bar. Nested quotes are not handled;
    // further '>' characters stay literal.
    if let Some(quoted) = raw_line.strip_prefix('>')
    {
        lines.push(format!("{YELLOW}|{RESET} {}", quoted.trim()));
        return;
    }

    if let Some(item) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        lines.push(format!("  • {item}"));
        return;
    }

    if let Some(caps) = ORDERED_ITEM_REGEX.captures(trimmed)
    {
        lines.push(format!("  {}. {}", &caps[1], &caps[2]));
        return;
    }

    lines.push(substitute_inline(raw_line));
}

/// Renders a heading line.
///
/// The heading level is the count of leading `#` characters; the text is
/// the remainder, trimmed. Level 1 headings are centered with an `=`
/// rule underneath whose length matches the visible text; deeper levels
/// are left-aligned with no rule. Both start with a blank spacer row.
///
/// # Arguments
///
/// * `raw_line` - The raw heading line, starting with `#`
/// * `width` - Terminal width in columns, used for centering
/// * `lines` - Output buffer
fn render_heading(raw_line: &str, width: usize, lines: &mut Vec<String>)
{
    let text = raw_line.trim_start_matches('#');
    let level = raw_line
        .chars()
        .count()
        .saturating_sub(text.chars().count());
    let text = text.trim();

    lines.push(String::new());

    if level == 1
    {
        lines.push(format!(
            "{}{BOLD}{YELLOW}{text}{RESET}",
            centering_pad(text.chars().count(), width)
        ));
        lines.push(format!(
            "{}{YELLOW}{}{RESET}",
            centering_pad(text.chars().count(), width),
            "=".repeat(text.chars().count())
        ));
    }
    else
    {
        lines.push(format!("{BOLD}{CYAN}{text}{RESET}"));
    }
}

/// Returns the left padding that centers content of the given visible
/// length within `width` columns.
///
/// The visible length must not count escape sequences, otherwise the
/// content drifts left by half their length.
fn centering_pad(visible_len: usize, width: usize) -> String
{
    " ".repeat(width.saturating_sub(visible_len) / 2)
}

/// Applies the inline markup substitutions to a line.
///
/// Passes run in a fixed order — images, links, bold, italics, inline
/// code — each one a non-greedy, leftmost, non-overlapping replacement
/// over the already-substituted line. Escape sequences inserted by an
/// earlier pass contain none of the later delimiters, so they are inert
/// text to later passes. A line matching nothing comes back unchanged,
/// which is also how empty lines preserve paragraph spacing.
///
/// # Arguments
///
/// * `raw_line` - The line to substitute
///
/// # Returns
///
/// The line with all inline spans replaced by styled text.
fn substitute_inline(raw_line: &str) -> String
{
    let line = IMAGE_REGEX.replace_all(raw_line, |caps: &Captures| {
        format!(
            "{BOLD}[Image: {}]{RESET} ({UNDERLINE}{}{RESET})",
            &caps[1], &caps[2]
        )
    });

    let line = LINK_REGEX.replace_all(&line, |caps: &Captures| {
        format!("{} ({UNDERLINE}{BLUE}{}{RESET})", &caps[1], &caps[2])
    });

    let line = BOLD_SPAN_REGEX.replace_all(&line, |caps: &Captures| {
        format!("{BOLD}{}{RESET}", alternate_group(caps))
    });

    let line = ITALIC_SPAN_REGEX.replace_all(&line, |caps: &Captures| {
        format!("{UNDERLINE}{}{RESET}", alternate_group(caps))
    });

    let line = CODE_SPAN_REGEX.replace_all(&line, |caps: &Captures| {
        format!("{REVERSE}{}{RESET}", &caps[1])
    });

    line.into_owned()
}

/// Returns whichever of the two alternation groups participated in the
/// match, for patterns of the form `x(.*?)x|y(.*?)y`.
fn alternate_group<'cap>(caps: &'cap Captures<'cap>) -> &'cap str
{
    caps.get(1)
        .or_else(|| caps.get(2))
        .map_or("", |group| group.as_str())
}

#[cfg(test)]
mod tests
{
    use super::*;

    const WIDTH: usize = 80;

    #[test]
    fn plain_text_passes_through_unchanged()
    {
        let lines = render("just an ordinary sentence.", WIDTH);
        assert_eq!(lines, vec!["just an ordinary sentence.".to_owned()]);
    }

    #[test]
    fn empty_lines_are_preserved()
    {
        let lines = render("one\n\ntwo", WIDTH);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "");
    }

    #[test]
    fn fence_pair_toggles_code_state_on_then_off()
    {
        let lines = render("```\n```", WIDTH);
        let rule = format!("{GREEN}{}{RESET}", "─".repeat(WIDTH));

        assert_eq!(lines, vec![rule.clone(), rule]);
        assert!(lines.iter().all(|line| !line.contains(REVERSE)));
    }

    #[test]
    fn code_block_body_is_padded_and_reversed()
    {
        let lines = render("```\nlet x = 1;\n```", WIDTH);

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(REVERSE));
        assert!(lines[1].ends_with(RESET));
        // Padded to the full width, markup untouched.
        assert!(lines[1].contains(&format!("{:<width$}", "let x = 1;", width = WIDTH)));
    }

    #[test]
    fn unterminated_fence_renders_rest_as_code()
    {
        let lines = render("```\n**still code**", WIDTH);

        assert!(lines[1].starts_with(REVERSE));
        assert!(lines[1].contains("**still code**"));
        assert!(!lines[1].contains(BOLD));
    }

    #[test]
    fn no_inline_markup_inside_code_blocks()
    {
        let lines = render("```\n[link](url) and `tick`\n```", WIDTH);
        assert!(lines[1].contains("[link](url) and `tick`"));
    }

    #[test]
    fn level_one_heading_is_centered_with_matching_rule()
    {
        let lines = render("# Title", WIDTH);
        let pad = " ".repeat((WIDTH - "Title".len()) / 2);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], format!("{pad}{BOLD}{YELLOW}Title{RESET}"));
        assert_eq!(lines[2], format!("{pad}{YELLOW}====={RESET}"));
    }

    #[test]
    fn deeper_headings_are_left_aligned_without_rule()
    {
        let lines = render("## Section", WIDTH);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], format!("{BOLD}{CYAN}Section{RESET}"));
    }

    #[test]
    fn horizontal_rule_variants_all_draw_a_rule()
    {
        for marker in ["---", "***", "___"]
        {
            let lines = render(marker, WIDTH);
            assert_eq!(
                lines,
                vec![format!("{BOLD}{}{RESET}", "─".repeat(WIDTH))],
                "marker {marker} should draw a rule"
            );
        }
    }

    #[test]
    fn blockquote_gets_a_colored_bar()
    {
        let lines = render("> wise words", WIDTH);
        assert_eq!(lines, vec![format!("{YELLOW}|{RESET} wise words")]);
    }

    #[test]
    fn unordered_items_become_bullets_without_styling()
    {
        let lines = render("* item one\n* item two", WIDTH);
        assert_eq!(
            lines,
            vec!["  • item one".to_owned(), "  • item two".to_owned()]
        );
    }

    #[test]
    fn dash_items_become_bullets_too()
    {
        let lines = render("- dashed", WIDTH);
        assert_eq!(lines, vec!["  • dashed".to_owned()]);
    }

    #[test]
    fn ordered_items_keep_their_numbers()
    {
        let lines = render("1. first\n12.  second", WIDTH);
        assert_eq!(
            lines,
            vec!["  1. first".to_owned(), "  12. second".to_owned()]
        );
    }

    #[test]
    fn link_styles_only_the_url_portion()
    {
        let lines = render("[site](http://x)", WIDTH);
        assert_eq!(
            lines,
            vec![format!("site ({UNDERLINE}{BLUE}http://x{RESET})")]
        );
    }

    #[test]
    fn image_becomes_a_bold_label_with_underlined_source()
    {
        let lines = render("![logo](img.png)", WIDTH);
        assert_eq!(
            lines,
            vec![format!(
                "{BOLD}[Image: logo]{RESET} ({UNDERLINE}img.png{RESET})"
            )]
        );
    }

    #[test]
    fn image_and_link_on_one_line_stay_separate()
    {
        let lines = render("![a](b) and [c](d)", WIDTH);
        assert_eq!(
            lines,
            vec![format!(
                "{BOLD}[Image: a]{RESET} ({UNDERLINE}b{RESET}) and c \
                 ({UNDERLINE}{BLUE}d{RESET})"
            )]
        );
    }

    #[test]
    fn bold_and_italic_spans_both_delimiter_styles()
    {
        let lines = render("**strong** and __stronger__", WIDTH);
        assert_eq!(
            lines,
            vec![format!(
                "{BOLD}strong{RESET} and {BOLD}stronger{RESET}"
            )]
        );

        let lines = render("*slanted* and _leaning_", WIDTH);
        assert_eq!(
            lines,
            vec![format!(
                "{UNDERLINE}slanted{RESET} and {UNDERLINE}leaning{RESET}"
            )]
        );
    }

    #[test]
    fn inline_code_is_reversed()
    {
        let lines = render("run `cargo doc` now", WIDTH);
        assert_eq!(
            lines,
            vec![format!("run {REVERSE}cargo doc{RESET} now")]
        );
    }

    #[test]
    fn bold_around_inline_code_composes()
    {
        let lines = render("**`x`**", WIDTH);

        // The bold pass runs first, leaving the backticks for the code
        // pass to pick up inside the bold span.
        assert_eq!(
            lines,
            vec![format!("{BOLD}{REVERSE}x{RESET}{RESET}")]
        );
    }

    #[test]
    fn substitutions_do_not_rematch_inserted_escapes()
    {
        // The underline sequences inserted for italics must stay inert
        // during the code span pass.
        let lines = render("_a_ `b` _c_", WIDTH);
        assert_eq!(
            lines,
            vec![format!(
                "{UNDERLINE}a{RESET} {REVERSE}b{RESET} {UNDERLINE}c{RESET}"
            )]
        );
    }

    #[test]
    fn list_rule_wins_over_inline_markup()
    {
        // The bullet rule fires before the inline pass, so the asterisk
        // prefix is never treated as emphasis.
        let lines = render("* item one", WIDTH);
        assert_eq!(lines, vec!["  • item one".to_owned()]);
    }

    #[test]
    fn renderer_is_deterministic_across_calls()
    {
        let document = "# T\n```\ncode\n```\n> q\n* a\n1. b\n**c**";
        assert_eq!(render(document, WIDTH), render(document, WIDTH));
    }
}
