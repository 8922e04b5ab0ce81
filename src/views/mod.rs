mod insight;
mod summary;

pub use insight::{insight, Insight};
pub use summary::{category_breakdown, totals, Breakdown, Totals};
