//! Running state of a growth projection

/// Unrounded balances during accumulation
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Months compounded so far
    pub month: u32,

    /// Completed years
    pub year: u32,

    /// Money put in (lump sum plus contributions)
    pub principal: f64,

    /// Compounded balance
    pub asset: f64,
}

impl GrowthState {
    /// Initial state before the first month
    pub fn new(initial_amount: f64) -> Self {
        Self {
            month: 0,
            year: 0,
            principal: initial_amount,
            asset: initial_amount,
        }
    }

    /// Apply one month: grow the balance, then add the contribution
    pub fn advance_month(&mut self, monthly_rate: f64, contribution: f64) {
        self.month += 1;
        self.asset = self.asset * (1.0 + monthly_rate) + contribution;
        self.principal += contribution;

        if self.month % 12 == 0 {
            self.year += 1;
        }
    }

    /// True when the last month applied closed a year
    pub fn at_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }
}
