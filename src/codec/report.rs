use crate::models::Transaction;

const REPORT_TITLE: &str = "FinSight Budget Summary";

/// Tab-separated block handed to the clipboard, one transaction per line.
pub fn share_text(transactions: &[Transaction]) -> String {
    transactions.iter()
        .map(|t| format!("{}\t${}\t{}\t{}\t{}", t.description(), t.amount(), t.kind(), t.category(), t.date()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Printable budget summary: a title line followed by a numbered line per transaction.
pub fn report(transactions: &[Transaction]) -> String {
    let mut output = format!("{REPORT_TITLE}\n");

    for (position, t) in transactions.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} - ${} - {} - {} - {}\n",
            position + 1, t.description(), t.amount(), t.kind(), t.category(), t.date()
        ));
    }

    output
}
