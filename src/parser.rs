use crate::error::{Result, SolveError};
use crate::expr::{Expr, Rational};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, alphanumeric0, char, digit1, multispace0};
use nom::combinator::{all_consuming, map, opt, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use nom::IResult;
use num_bigint::BigInt;
use num_traits::Num;

pub fn parse_expr(input: &str) -> Result<Expr> {
    match all_consuming(ws(parse_add_sub))(input) {
        Ok((_, expr)) => Ok(expr),
        Err(e) => Err(SolveError::Parse(format!("{e:?}"))),
    }
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_mul_div(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '+' => Expr::Add(acc.boxed(), rhs.boxed()),
            '-' => Expr::Sub(acc.boxed(), rhs.boxed()),
            _ => unreachable!(),
        },
    )(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, init) = parse_unary(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_unary),
        move || init.clone(),
        |acc, (op, rhs)| match op {
            '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
            '/' => Expr::Div(acc.boxed(), rhs.boxed()),
            _ => unreachable!(),
        },
    )(rest)
}

fn parse_unary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
        Ok((rest, Expr::Neg(expr.boxed())))
    } else {
        parse_pow(input)
    }
}

fn parse_pow(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    let (rest, base) = parse_primary(input)?;
    // Right-associative; the exponent goes through the unary level so
    // negative exponents parse without parentheses.
    if let Ok((next, exp)) = preceded(ws(alt((tag("**"), tag("^")))), parse_unary)(rest) {
        Ok((next, Expr::Pow(base.boxed(), exp.boxed())))
    } else {
        Ok((rest, base))
    }
}

fn parse_primary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    alt((parse_parens, parse_number, parse_identifier))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(
        ws(recognize(pair(
            pair(opt(char('-')), digit1),
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| Expr::Constant(rational_literal(s)),
    )(input)
}

fn parse_identifier(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
    map(ws(recognize(pair(alpha1, alphanumeric0))), |s: &str| {
        Expr::Variable(s.to_string())
    })(input)
}

fn rational_literal(s: &str) -> Rational {
    match s.split_once('.') {
        None => Rational::from_integer(BigInt::from_str_radix(s, 10).unwrap()),
        Some((whole, frac)) => {
            let digits = format!("{whole}{frac}");
            let numer = BigInt::from_str_radix(&digits, 10).unwrap();
            let denom = BigInt::from(10).pow(frac.len() as u32);
            Rational::new(numer, denom)
        }
    }
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
