use serde::{Deserialize, Serialize};

/// Planning horizon of the business case.
pub const PLANNING_YEARS: usize = 3;

// ---------------------------------------------------------------------------
// BusinessCase
// ---------------------------------------------------------------------------

/// Business-case financials: upfront investment plus revenue and cost per
/// planning year. Initialized all-zero when the business-case stage is first
/// entered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessCase {
    pub investment: f64,
    pub revenue: [f64; PLANNING_YEARS],
    pub costs: [f64; PLANNING_YEARS],
}

impl BusinessCase {
    /// Profit per planning year (revenue minus cost, index 0 = year 1).
    pub fn profits(&self) -> [f64; PLANNING_YEARS] {
        let mut out = [0.0; PLANNING_YEARS];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.revenue[i] - self.costs[i];
        }
        out
    }

    /// Total profit across the planning horizon, before investment.
    pub fn cumulative_profit(&self) -> f64 {
        self.profits().iter().sum()
    }

    /// First planning year (1-based) whose cumulative profit covers the
    /// investment. An all-zero case has no payback year.
    pub fn payback_year(&self) -> Option<usize> {
        let mut cumulative = 0.0;
        for (i, profit) in self.profits().iter().enumerate() {
            cumulative += profit;
            if cumulative > 0.0 && cumulative >= self.investment {
                return Some(i + 1);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let case = BusinessCase::default();
        assert_eq!(case.investment, 0.0);
        assert_eq!(case.revenue, [0.0; PLANNING_YEARS]);
        assert_eq!(case.costs, [0.0; PLANNING_YEARS]);
        assert_eq!(case.payback_year(), None);
    }

    #[test]
    fn payback_in_second_year() {
        let case = BusinessCase {
            investment: 100.0,
            revenue: [80.0, 120.0, 150.0],
            costs: [30.0, 50.0, 60.0],
        };
        // Cumulative profit: 50, 120, 210 → covers 100 in year 2.
        assert_eq!(case.payback_year(), Some(2));
        assert_eq!(case.cumulative_profit(), 210.0);
    }

    #[test]
    fn no_payback_when_investment_never_recovered() {
        let case = BusinessCase {
            investment: 1000.0,
            revenue: [100.0, 100.0, 100.0],
            costs: [50.0, 50.0, 50.0],
        };
        assert_eq!(case.payback_year(), None);
    }

    #[test]
    fn loss_years_push_payback_out() {
        let case = BusinessCase {
            investment: 10.0,
            revenue: [0.0, 0.0, 200.0],
            costs: [50.0, 50.0, 20.0],
        };
        // Cumulative: -50, -100, 80 → year 3.
        assert_eq!(case.payback_year(), Some(3));
    }

    #[test]
    fn case_json_roundtrip() {
        let case = BusinessCase {
            investment: 250_000.0,
            revenue: [0.0, 180_000.0, 420_000.0],
            costs: [90_000.0, 120_000.0, 160_000.0],
        };
        let json = serde_json::to_string(&case).unwrap();
        let parsed: BusinessCase = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, case);
    }
}
