use crate::models::{Category, Transaction, TransactionKind};
use crate::types::Amount;

/// Summary card figures.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Totals {
    pub income: Amount,
    pub expense: Amount,
    /// `income - expense`.
    pub balance: Amount
}

/// Summed expense amount per category, in the order each category first appears.
///
/// Categories without any expense entries are absent rather than zero.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Breakdown {
    entries: Vec<(Category, Amount)>
}

impl Breakdown {
    pub fn get(&self, category: Category) -> Option<Amount> {
        self.entries.iter()
            .find(|(entry, _)| *entry == category)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Amount)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every category.
    pub fn total(&self) -> Amount {
        let mut total = Amount::ZERO;

        for (_, amount) in &self.entries {
            total += *amount;
        }

        total
    }

    /// The category with the largest sum. Ties go to the category that appeared first.
    pub fn top(&self) -> Option<(Category, Amount)> {
        let mut top: Option<(Category, Amount)> = None;

        for (category, amount) in self.iter() {
            match top {
                Some((_, best)) if amount <= best => {}
                _ => top = Some((category, amount))
            }
        }

        top
    }

    fn add(&mut self, category: Category, amount: Amount) {
        match self.entries.iter_mut().find(|(entry, _)| *entry == category) {
            Some((_, sum)) => *sum += amount,
            None => self.entries.push((category, amount))
        }
    }
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();

    for transaction in transactions {
        match transaction.kind() {
            TransactionKind::Income => totals.income += transaction.amount(),
            TransactionKind::Expense => totals.expense += transaction.amount()
        }
    }

    totals.balance = totals.income;
    totals.balance -= totals.expense;

    totals
}

pub fn category_breakdown(transactions: &[Transaction]) -> Breakdown {
    let mut breakdown = Breakdown::default();

    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        breakdown.add(transaction.category(), transaction.amount());
    }

    breakdown
}
