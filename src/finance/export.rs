use std::borrow::Cow;
use std::path::Path;

use thiserror::Error;

use super::transaction::Transaction;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    WriteError(#[from] std::io::Error),
}

pub const CSV_HEADER: [&str; 6] = ["Date", "Description", "Amount", "Type", "Category", "Status"];

/// Quotes a field containing a delimiter, quote or line break, doubling inner quotes.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn csv_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields.into_iter().map(escape_field).collect::<Vec<_>>().join(",")
}

pub fn to_csv(transactions: &[&Transaction]) -> String {
    let mut lines = vec![csv_row(CSV_HEADER)];
    for tx in transactions {
        let date = tx.date.format("%Y-%m-%d").to_string();
        let amount = tx.amount.normalize().to_string();
        lines.push(csv_row([
            date.as_str(),
            tx.description.as_str(),
            amount.as_str(),
            tx.kind.label(),
            tx.category.as_str(),
            tx.status.label(),
        ]));
    }
    lines.join("\n")
}

/// `month` is 1-based.
pub fn report_file_name(year: i32, month: u32) -> String {
    format!("financial-report-{}-{}.csv", year, month)
}

pub fn write_csv(path: &Path, transactions: &[&Transaction]) -> Result<(), ExportError> {
    std::fs::write(path, to_csv(transactions))?;
    tracing::info!("Exported {} transactions to {}", transactions.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::utc_day;
    use crate::finance::transaction::TransactionDraft;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample(description: &str) -> Transaction {
        TransactionDraft::expense(description, dec!(4500), "Operations")
            .into_transaction("1".to_string(), utc_day(2024, 2, 7))
            .unwrap()
    }

    #[test]
    fn header_only_for_empty_selection() {
        assert_eq!(to_csv(&[]), "Date,Description,Amount,Type,Category,Status");
    }

    #[test]
    fn writes_one_row_per_transaction() {
        let tx = sample("Office Rent - February");

        let csv = to_csv(&[&tx]);

        assert_eq!(
            csv,
            "Date,Description,Amount,Type,Category,Status\n2024-02-07,Office Rent - February,-4500,expense,Operations,completed"
        );
    }

    #[test]
    fn commas_and_quotes_in_description_are_quoted() {
        let tx = sample("Books, \"workbooks\" and tablets");

        let csv = to_csv(&[&tx]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "2024-02-07,\"Books, \"\"workbooks\"\" and tablets\",-4500,expense,Operations,completed"
        );
    }

    #[test]
    fn file_name_uses_one_based_month() {
        assert_eq!(report_file_name(2024, 2), "financial-report-2024-2.csv");
    }

    #[test]
    fn write_csv_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(report_file_name(2024, 2));
        let tx = sample("Rent");

        write_csv(&path, &[&tx]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
