use winnow::{
    ModalResult, Parser,
    ascii::{digit0, digit1, hex_digit1},
    combinator::{alt, cut_err, opt, preceded},
    error::{StrContext, StrContextValue},
    token::one_of,
};

/// Signed number: decimal (leading or trailing dot allowed), hexadecimal,
/// `Infinity` or `NaN`.
pub(crate) fn number(input: &mut &str) -> ModalResult<f64> {
    let sign = opt(one_of(['+', '-'])).parse_next(input)?;
    let magnitude = alt((
        "Infinity".value(f64::INFINITY),
        "NaN".value(f64::NAN),
        hexadecimal,
        decimal,
    ))
    .context(StrContext::Label("number"))
    .parse_next(input)?;
    Ok(if sign == Some('-') { -magnitude } else { magnitude })
}

fn hexadecimal(input: &mut &str) -> ModalResult<f64> {
    preceded(alt(("0x", "0X")), cut_err(hex_digit1))
        .map(|digits: &str| {
            digits
                .chars()
                .filter_map(|c| c.to_digit(16))
                .fold(0.0, |acc, d| acc * 16.0 + f64::from(d))
        })
        .parse_next(input)
}

fn decimal(input: &mut &str) -> ModalResult<f64> {
    (
        alt((
            (integer, opt(('.', opt(digit1)))).void(),
            ('.', digit1).void(),
        )),
        opt((
            one_of(['e', 'E']),
            opt(one_of(['+', '-'])),
            cut_err(digit1).context(StrContext::Expected(StrContextValue::Description("exponent digits"))),
        )),
    )
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

/// `0` or a digit run without a leading zero.
fn integer<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt(("0", (one_of('1'..='9'), digit0).take())).parse_next(input)
}
