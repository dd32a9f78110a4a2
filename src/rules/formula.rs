//! Parser for custom spending formulas.
//!
//! Only one shape of constraint is understood:
//!
//! ```text
//! formula := "AMOUNT" "<=" expr
//! expr    := term "*" term      (exactly one term is SALARY)
//!          | term
//! term    := "SALARY" | number "%" | number
//! number  := digits [("." | ",") digits]
//! ```
//!
//! Keywords are case-insensitive and whitespace is ignored anywhere in the
//! text. A percent literal is divided by 100. Anything else is rejected as an
//! unsupported formula; nothing is ever evaluated outside this grammar.

use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    sequence::{pair, preceded, separated_pair, terminated},
    IResult,
};
use rust_decimal::Decimal;
use thiserror::Error;

use super::scale;

/// A formula that does not fit the supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The text is not of the form `AMOUNT <= <expression>`, or the
    /// expression is not one of the supported shapes.
    #[error("Unsupported formula: {formula}")]
    Unsupported {
        /// The formula exactly as configured.
        formula: String,
    },
}

/// The right-hand side of a parsed formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaLimit {
    /// `AMOUNT <= SALARY`
    Salary,
    /// `AMOUNT <= 200`
    Fixed(Decimal),
    /// `AMOUNT <= 0.4 * SALARY` or `AMOUNT <= SALARY * 40%`
    SalaryTimes(Decimal),
}

/// A parsed spending formula.
///
/// # Examples
///
/// ```
/// use expense_exporter::rules::Formula;
/// use rust_decimal::Decimal;
///
/// let formula = Formula::parse("AMOUNT <= 40% * SALARY").unwrap();
/// assert_eq!(formula.limit_for(Decimal::new(1200, 0)), Decimal::new(480, 0));
///
/// assert!(Formula::parse("AMOUNT <= SALARY * SALARY").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    source: String,
    limit: FormulaLimit,
}

impl Formula {
    /// Parses formula text.
    ///
    /// On failure the error carries the original text, untrimmed and
    /// un-normalized.
    pub fn parse(text: &str) -> Result<Self, FormulaError> {
        let normalized: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        match formula(&normalized) {
            Ok((_, limit)) => Ok(Self {
                source: text.to_string(),
                limit,
            }),
            Err(_) => Err(FormulaError::Unsupported {
                formula: text.to_string(),
            }),
        }
    }

    /// The text this formula was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed right-hand side.
    pub fn limit(&self) -> FormulaLimit {
        self.limit
    }

    /// Resolves the spending limit for an employee with the given salary.
    pub fn limit_for(&self, salary: Decimal) -> Decimal {
        match self.limit {
            FormulaLimit::Salary => salary,
            FormulaLimit::Fixed(value) => value,
            FormulaLimit::SalaryTimes(coefficient) => scale(salary, coefficient),
        }
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parses `text` and resolves it against `salary` in one step.
pub fn resolve_limit(text: &str, salary: Decimal) -> Result<Decimal, FormulaError> {
    Formula::parse(text).map(|formula| formula.limit_for(salary))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Term {
    Salary,
    Coefficient(Decimal),
}

// Input to every parser below is already stripped of whitespace and uppercased.

fn formula(input: &str) -> IResult<&str, FormulaLimit> {
    all_consuming(preceded(tag("AMOUNT<="), expression))(input)
}

fn expression(input: &str) -> IResult<&str, FormulaLimit> {
    alt((
        map_res(separated_pair(term, char('*'), term), product),
        map(term, |term| match term {
            Term::Salary => FormulaLimit::Salary,
            Term::Coefficient(value) => FormulaLimit::Fixed(value),
        }),
    ))(input)
}

fn product((left, right): (Term, Term)) -> Result<FormulaLimit, ()> {
    match (left, right) {
        (Term::Salary, Term::Coefficient(c)) | (Term::Coefficient(c), Term::Salary) => {
            Ok(FormulaLimit::SalaryTimes(c))
        }
        _ => Err(()),
    }
}

fn term(input: &str) -> IResult<&str, Term> {
    alt((
        value(Term::Salary, tag("SALARY")),
        map(percent, Term::Coefficient),
        map(number, Term::Coefficient),
    ))(input)
}

fn percent(input: &str) -> IResult<&str, Decimal> {
    map(terminated(number, char('%')), |value| {
        value / Decimal::ONE_HUNDRED
    })(input)
}

fn number(input: &str) -> IResult<&str, Decimal> {
    map_res(
        alt((
            recognize(pair(digit1, opt(pair(one_of(".,"), digit1)))),
            recognize(pair(one_of(".,"), digit1)),
        )),
        |literal: &str| {
            let literal = literal.replace(',', ".");
            if literal.starts_with('.') {
                Decimal::from_str(&format!("0{literal}"))
            } else {
                Decimal::from_str(&literal)
            }
        },
    )(input)
}
