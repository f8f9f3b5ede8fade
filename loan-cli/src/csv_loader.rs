//! CSV loader for batches of loan scenarios.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive. Values are free text, parsed the same way as the
//! form fields, so a bad number in one row yields a zero payment for that row
//! instead of rejecting the file.
//!
//! | Column          | Required | Notes |
//! |-----------------|----------|------------------------------------|
//! | `label`         | no       | Defaults to `row N` |
//! | `loan_amount`   | yes      | e.g. `25,000` |
//! | `interest_rate` | yes      | Annual percent, e.g. `5.5` |
//! | `loan_term`     | yes      | Months |
//! | `down_payment`  | no       | Empty cell means 0 |
//!
//! ### Example
//!
//! ```csv
//! label,loan_amount,interest_rate,loan_term,down_payment
//! car,5000,5.5,36,1000
//! house,"250,000",6,360,"50,000"
//! ```

use std::path::Path;

use loan_core::LoanInputs;
use serde::Deserialize;

use crate::utils::{parse_field, parse_field_or_zero};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    label: Option<String>,
    loan_amount: String,
    interest_rate: String,
    loan_term: String,
    #[serde(default)]
    down_payment: Option<String>,
}

/// One parsed row of a batch file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanScenario {
    /// 1-based data row number (header = row 0).
    pub row: usize,
    pub label: String,
    pub inputs: LoanInputs,
}

/// Errors that can occur while loading a batch file.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad CSV structure or a missing required column.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> LoanScenario {
    let label = row
        .label
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| format!("row {row_number}"));

    LoanScenario {
        row: row_number,
        label,
        inputs: LoanInputs::new(
            parse_field(&row.loan_amount),
            parse_field(&row.interest_rate),
            parse_field(&row.loan_term),
            parse_field_or_zero(row.down_payment.as_deref().unwrap_or_default()),
        ),
    }
}

/// Parses CSV text and returns the scenarios in file order.
///
/// # Errors
///
/// [`CsvLoadError::Parse`] if the CSV is structurally invalid or a required
/// column is missing.
pub fn load_from_str(input: &str) -> Result<Vec<LoanScenario>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| -> Result<LoanScenario, CsvLoadError> {
            let row_number = idx + 1; // 1-based for user-facing output
            Ok(convert_row(result?, row_number))
        })
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<LoanScenario>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL_CSV: &str = "\
loan_amount,interest_rate,loan_term
5000,5.5,36
";

    const FULL_CSV: &str = "\
label,loan_amount,interest_rate,loan_term,down_payment
car,5000,5.5,36,1000
house,\"250,000\",6,360,\"50,000\"
paid off,1000,5,12,1000
";

    #[test]
    fn minimal_csv_defaults_label_and_down_payment() {
        let scenarios = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(
            scenarios,
            vec![LoanScenario {
                row: 1,
                label: "row 1".to_string(),
                inputs: LoanInputs::new(5000.0, 5.5, 36.0, 0.0),
            }]
        );
    }

    #[test]
    fn full_csv_rows_in_file_order() {
        let scenarios = load_from_str(FULL_CSV).expect("should parse full CSV");
        let labels: Vec<&str> = scenarios.iter().map(|s| s.label.as_str()).collect();

        assert_eq!(labels, vec!["car", "house", "paid off"]);
        assert_eq!(scenarios[1].inputs, LoanInputs::new(250_000.0, 6.0, 360.0, 50_000.0));
        assert_eq!(scenarios[2].row, 3);
    }

    #[test]
    fn empty_label_and_down_payment_cells() {
        let csv = "label,loan_amount,interest_rate,loan_term,down_payment\n,5000,5.5,36,\n";
        let scenarios = load_from_str(csv).expect("should parse");

        assert_eq!(scenarios[0].label, "row 1");
        assert_eq!(scenarios[0].inputs.down_payment, 0.0);
    }

    #[test]
    fn bad_number_is_kept_as_nan() {
        let csv = "loan_amount,interest_rate,loan_term\nlots,5.5,36\n";
        let scenarios = load_from_str(csv).expect("bad values do not reject the file");

        assert!(scenarios[0].inputs.loan_amount.is_nan());
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "loan_term,down_payment,interest_rate,loan_amount\n36,1000,5.5,5000\n";
        let scenarios = load_from_str(csv).expect("column order should not matter");

        assert_eq!(scenarios[0].inputs, LoanInputs::new(5000.0, 5.5, 36.0, 1000.0));
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "label , loan_amount , interest_rate , loan_term\n car , 5000 , 5.5 , 36\n";
        let scenarios = load_from_str(csv).expect("should tolerate surrounding whitespace");

        assert_eq!(scenarios[0].label, "car");
        assert_eq!(scenarios[0].inputs.term_months, 36.0);
    }

    #[test]
    fn missing_required_column_returns_parse_error() {
        let csv = "loan_amount,loan_term\n5000,36\n";

        match load_from_str(csv).unwrap_err() {
            CsvLoadError::Parse(_) => {}
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn wrong_column_count_returns_parse_error() {
        let csv = "loan_amount,interest_rate,loan_term\n5000,5.5\n";

        assert!(matches!(load_from_str(csv), Err(CsvLoadError::Parse(_))));
    }

    #[test]
    fn header_only_yields_no_scenarios() {
        let scenarios = load_from_str("loan_amount,interest_rate,loan_term\n").unwrap();

        assert!(scenarios.is_empty());
    }
}
