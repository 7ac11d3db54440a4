//! Single-pass chemical formula scanner.
//!
//! A formula is read left to right as a flat run of tokens of the form
//! `[A-Z][a-z]?[0-9]*`. Characters that cannot start a token (lowercase
//! letters, stray digits, whitespace) are skipped. Nested groups, charges
//! and hydrates are not understood: `( ) [ ] { } + - . · *` and superscript
//! charges (`⁺ ⁻ ⁰-⁹`) stop the scan with
//! [`ChemCalcError::UnsupportedSyntax`] instead of yielding a partial and
//! wrong composition.

use std::collections::HashMap;

use crate::error::{ChemCalcError, Result};

/// One element symbol and how many times it appears at that spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaToken {
    pub symbol: String,
    pub count: u32,
}

const UNSUPPORTED: &[char] = &['(', ')', '[', ']', '{', '}', '+', '-', '.', '·', '•', '*'];

fn is_unsupported(ch: char) -> bool {
    UNSUPPORTED.contains(&ch) || is_superscript(ch)
}

fn is_superscript(ch: char) -> bool {
    matches!(ch, '⁺' | '⁻' | '⁰' | '¹' | '²' | '³' | '⁴'..='⁹')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tokens.
    Start,
    /// Read the uppercase letter of a symbol.
    Symbol,
    /// Read the optional lowercase letter.
    Lowercase,
    /// Accumulating the count digits.
    Count,
}

/// Replaces Unicode subscript digits (`H₂O`) with ASCII digits.
pub fn normalize_formula(formula: &str) -> String {
    formula
        .chars()
        .map(|ch| match ch {
            '₀'..='₉' => char::from(b'0' + (ch as u32 - '₀' as u32) as u8),
            _ => ch,
        })
        .collect()
}

struct Scanner<'a> {
    formula: &'a str,
    state: State,
    symbol: String,
    digits: String,
    tokens: Vec<FormulaToken>,
}

impl<'a> Scanner<'a> {
    fn new(formula: &'a str) -> Self {
        Scanner {
            formula,
            state: State::Start,
            symbol: String::new(),
            digits: String::new(),
            tokens: Vec::new(),
        }
    }

    fn step(&mut self, position: usize, ch: char) -> Result<()> {
        if is_unsupported(ch) {
            return Err(ChemCalcError::UnsupportedSyntax {
                formula: self.formula.to_string(),
                found: ch,
                position,
            });
        }

        self.state = match (self.state, ch) {
            (State::Symbol, c) if c.is_ascii_lowercase() => {
                self.symbol.push(c);
                State::Lowercase
            }
            (State::Symbol | State::Lowercase | State::Count, c) if c.is_ascii_digit() => {
                self.digits.push(c);
                State::Count
            }
            (_, c) => {
                self.finish_token()?;
                if c.is_ascii_uppercase() {
                    self.symbol.push(c);
                    State::Symbol
                } else {
                    State::Start
                }
            }
        };
        Ok(())
    }

    fn finish_token(&mut self) -> Result<()> {
        if self.state == State::Start {
            return Ok(());
        }
        let count = if self.digits.is_empty() {
            1
        } else {
            self.digits
                .parse::<u32>()
                .map_err(|_| ChemCalcError::InvalidCount {
                    symbol: self.symbol.clone(),
                    digits: self.digits.clone(),
                })?
        };
        self.tokens.push(FormulaToken {
            symbol: std::mem::take(&mut self.symbol),
            count,
        });
        self.digits.clear();
        self.state = State::Start;
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<FormulaToken>> {
        self.finish_token()?;
        Ok(self.tokens)
    }
}

/// Scans a formula into its tokens, in order of appearance.
///
/// Repeated symbols are kept as separate tokens (`CH3OH` yields two `H`
/// tokens).
///
/// # Examples
/// ```
/// let tokens = chemcalc::formula::tokenize_formula("C6H12O6").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].symbol, "H");
/// assert_eq!(tokens[1].count, 12);
/// ```
pub fn tokenize_formula(formula: &str) -> Result<Vec<FormulaToken>> {
    if formula.trim().is_empty() {
        return Err(ChemCalcError::MissingField("formula"));
    }

    let normalized = normalize_formula(formula);
    let mut scanner = Scanner::new(formula);
    for (position, ch) in normalized.chars().enumerate() {
        scanner.step(position, ch)?;
    }
    let tokens = scanner.finish()?;

    if tokens.is_empty() {
        return Err(ChemCalcError::UnparseableFormula(formula.to_string()));
    }
    Ok(tokens)
}

/// Total count per element symbol.
pub fn composition(formula: &str) -> Result<HashMap<String, u64>> {
    let mut out = HashMap::new();
    for token in tokenize_formula(formula)? {
        *out.entry(token.symbol).or_insert(0) += u64::from(token.count);
    }
    Ok(out)
}

/// Returns true if the formula scans into at least one token.
/// Does not check that the symbols are real elements.
pub fn validate_formula(formula: &str) -> bool {
    tokenize_formula(formula).is_ok()
}
