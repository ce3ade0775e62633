use winnow::{
    ModalResult, Parser,
    combinator::{cut_err, fail, opt, preceded},
    error::{StrContext, StrContextValue},
    token::{any, one_of, take_while},
};

/// A string literal in single or double quotes, returned unescaped.
pub(crate) fn quoted(input: &mut &str) -> ModalResult<String> {
    let quote = one_of(['"', '\'']).parse_next(input)?;
    let mut out = String::new();
    loop {
        let c = cut_err(any)
            .context(StrContext::Expected(StrContextValue::CharLiteral(quote)))
            .parse_next(input)?;
        match c {
            c if c == quote => return Ok(out),
            '\\' => escape(input, &mut out)?,
            '\n' | '\r' => {
                return cut_err(fail)
                    .context(StrContext::Label("line break in string"))
                    .parse_next(input);
            }
            c => out.push(c),
        }
    }
}

/// Everything after a backslash.
fn escape(input: &mut &str, out: &mut String) -> ModalResult<()> {
    let c = cut_err(any)
        .context(StrContext::Label("escape sequence"))
        .parse_next(input)?;
    match c {
        'b' => out.push('\u{8}'),
        'f' => out.push('\u{c}'),
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'v' => out.push('\u{b}'),
        '0' => out.push('\0'),
        'x' => out.push(cut_err(hex_char::<2>).parse_next(input)?),
        'u' => out.push(cut_err(unicode_escape).parse_next(input)?),
        // line continuation
        '\n' | '\u{2028}' | '\u{2029}' => {}
        '\r' => {
            opt('\n').parse_next(input)?;
        }
        // `\"`, `\'`, `\\`, `\/` and any other character stand for themselves
        other => out.push(other),
    }
    Ok(())
}

fn hex_digits<const N: usize>(input: &mut &str) -> ModalResult<u32> {
    take_while(N, |c: char| c.is_ascii_hexdigit())
        .try_map(|digits: &str| u32::from_str_radix(digits, 16))
        .context(StrContext::Expected(StrContextValue::Description("hexadecimal digits")))
        .parse_next(input)
}

fn hex_char<const N: usize>(input: &mut &str) -> ModalResult<char> {
    hex_digits::<N>
        .map(|code| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
        .parse_next(input)
}

/// `XXXX` after `\u`, combining a surrogate pair when one follows.
fn unicode_escape(input: &mut &str) -> ModalResult<char> {
    let high = hex_digits::<4>.parse_next(input)?;
    if !(0xD800..0xDC00).contains(&high) {
        return Ok(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    let low = opt(preceded("\\u", hex_digits::<4>).verify(|low: &u32| (0xDC00..0xE000).contains(low)))
        .parse_next(input)?;
    let code = match low {
        Some(low) => 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00),
        None => return Ok(char::REPLACEMENT_CHARACTER),
    };
    Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Option<String> {
        let mut input = src;
        quoted(&mut input).ok()
    }

    #[test]
    fn both_quote_styles() {
        assert_eq!(parse(r#""hello""#).as_deref(), Some("hello"));
        assert_eq!(parse("'it\"s'").as_deref(), Some("it\"s"));
    }

    #[test]
    fn escapes() {
        assert_eq!(parse(r#""a\nb\t\\\"\/""#).as_deref(), Some("a\nb\t\\\"/"));
        assert_eq!(parse(r#"'\x41é'"#).as_deref(), Some("Aé"));
        assert_eq!(parse(r#""\ud83d\ude00""#).as_deref(), Some("😀"));
        assert_eq!(parse("'line \\\ncontinued'").as_deref(), Some("line continued"));
    }

    #[test]
    fn rejects_raw_newlines_and_unterminated() {
        assert_eq!(parse("\"a\nb\""), None);
        assert_eq!(parse("\"abc"), None);
        assert_eq!(parse(r#""\u12""#), None);
    }
}
