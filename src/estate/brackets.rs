//! Progressive tax bracket tables

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result, ToolkitError};

/// One bracket: applies up to and including `upper_bound`
///
/// Tax inside the bracket is `amount * rate - subtractor`, the quick
/// deduction form of a progressive schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound; `None` for the top bracket
    pub upper_bound: Option<f64>,
    /// Marginal rate as a decimal (0.10 for 10%)
    pub rate: f64,
    pub subtractor: f64,
}

impl TaxBracket {
    pub fn new(upper_bound: Option<f64>, rate: f64, subtractor: f64) -> Self {
        Self { upper_bound, rate, subtractor }
    }

    pub fn contains(&self, amount: f64) -> bool {
        self.upper_bound.map_or(true, |bound| amount <= bound)
    }

    /// Tax owed on `amount`, floored at zero
    pub fn tax_on(&self, amount: f64) -> f64 {
        (amount * self.rate - self.subtractor).max(0.0)
    }
}

/// Ordered, non-overlapping brackets covering `[0, inf)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Validate and build a table
    ///
    /// Upper bounds must be finite and strictly increasing, and only the last
    /// bracket may (and must) be unbounded.
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self> {
        if brackets.is_empty() {
            return Err(ToolkitError::invalid("brackets", "table is empty"));
        }

        let last = brackets.len() - 1;
        let mut previous: Option<f64> = None;

        for (idx, bracket) in brackets.iter().enumerate() {
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(ToolkitError::invalid(
                    "brackets",
                    format!("bracket {} rate {} is outside [0, 1]", idx, bracket.rate),
                ));
            }
            ensure_non_negative("brackets.subtractor", bracket.subtractor)?;

            match (bracket.upper_bound, idx == last) {
                (None, true) => {}
                (None, false) => {
                    return Err(ToolkitError::invalid(
                        "brackets",
                        format!("bracket {} is unbounded but not last", idx),
                    ));
                }
                (Some(_), true) => {
                    return Err(ToolkitError::invalid("brackets", "top bracket must be unbounded"));
                }
                (Some(bound), false) => {
                    if !bound.is_finite() || bound < 0.0 {
                        return Err(ToolkitError::invalid(
                            "brackets",
                            format!("bracket {} bound {} is not a finite amount >= 0", idx, bound),
                        ));
                    }
                    if previous.map_or(false, |prev| bound <= prev) {
                        return Err(ToolkitError::invalid(
                            "brackets",
                            format!("bracket {} bound {} does not increase", idx, bound),
                        ));
                    }
                    previous = Some(bound);
                }
            }
        }

        Ok(Self { brackets })
    }

    /// Estate tax schedule used by the planning dashboard
    ///
    /// Amounts are in the same unit as the estate figures (ten-thousands).
    pub fn default_estate() -> Self {
        Self {
            brackets: vec![
                TaxBracket::new(Some(0.0), 0.0, 0.0),
                TaxBracket::new(Some(5_000.0), 0.10, 0.0),
                TaxBracket::new(Some(10_000.0), 0.15, 250.0),
                TaxBracket::new(None, 0.20, 750.0),
            ],
        }
    }

    /// Lowest bracket whose upper bound is at or above `amount`
    pub fn bracket_for(&self, amount: f64) -> &TaxBracket {
        self.brackets
            .iter()
            .find(|b| b.contains(amount))
            .unwrap_or(&self.brackets[self.brackets.len() - 1])
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

impl Default for BracketTable {
    fn default() -> Self {
        Self::default_estate()
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketTable {
    type Error = ToolkitError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self> {
        Self::new(brackets)
    }
}

impl From<BracketTable> for Vec<TaxBracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}
