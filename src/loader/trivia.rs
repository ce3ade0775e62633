use winnow::{
    ModalResult, Parser,
    ascii::{multispace1, till_line_ending},
    combinator::{alt, cut_err, delimited, repeat},
    error::{StrContext, StrContextValue},
    token::take_until,
};

/// Any amount of whitespace and comments, including none.
pub(crate) fn trivia(input: &mut &str) -> ModalResult<()> {
    repeat(0.., alt((multispace1.void(), line_comment, block_comment))).parse_next(input)
}

/// `// ...` up to (not including) the line ending.
fn line_comment(input: &mut &str) -> ModalResult<()> {
    ("//", till_line_ending).void().parse_next(input)
}

/// `/* ... */`, not nested.
fn block_comment(input: &mut &str) -> ModalResult<()> {
    delimited(
        "/*",
        cut_err(take_until(0.., "*/")),
        "*/",
    )
    .context(StrContext::Expected(StrContextValue::StringLiteral("*/")))
    .void()
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_mixed_comments_and_whitespace() {
        let mut input = "  // line\n /* block\n still */\t rest";
        trivia(&mut input).unwrap();
        assert_eq!(input, "rest");
    }

    #[test]
    fn accepts_nothing() {
        let mut input = "rest";
        trivia(&mut input).unwrap();
        assert_eq!(input, "rest");
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let mut input = "/* never closed";
        assert!(trivia(&mut input).is_err());
    }
}
