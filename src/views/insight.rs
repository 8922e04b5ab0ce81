use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::{Category, Transaction};
use crate::views::summary::category_breakdown;

const PERCENT_DECIMAL_PLACES: u32 = 1;

/// The single spending hint shown under the chart.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Insight {
    /// Nothing to say yet: no transactions, no expenses, or expenses summing to zero.
    NoData,
    TopCategory {
        category: Category,
        /// Share of total expenses, rounded to one decimal place.
        percent: Decimal
    }
}

impl Display for Insight {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Insight::NoData => formatter.write_str("Add data to generate insights."),
            Insight::TopCategory { category, percent } => write!(
                formatter,
                "Your highest spending is in \"{category}\" at {percent}% of total expenses. Consider reviewing this category."
            )
        }
    }
}

/// Names the category with the largest share of expenses.
///
/// Ties go to the category whose first expense appears earliest in the list.
pub fn insight(transactions: &[Transaction]) -> Insight {
    let breakdown = category_breakdown(transactions);
    let total = breakdown.total().value();

    let Some((category, top)) = breakdown.top() else {
        return Insight::NoData
    };

    if total.is_zero() {
        return Insight::NoData
    }

    let Some(share) = top.value().checked_mul(Decimal::ONE_HUNDRED).and_then(|v| v.checked_div(total)) else {
        return Insight::NoData
    };

    let mut percent = share.round_dp_with_strategy(PERCENT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(PERCENT_DECIMAL_PLACES);

    Insight::TopCategory { category, percent }
}
