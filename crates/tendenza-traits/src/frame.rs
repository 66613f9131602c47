//! Tabular statement input backed by Polars.
//!
//! Statements usually arrive as a table, one row per company and fiscal year.
//! [`StatementFrame`] wraps such a table, validates its schema and converts
//! its rows into [`AnnualStatement`]s.

use crate::{AnnualStatement, Company, Result, TendenzaError};
use polars::prelude::*;
use std::{path::Path, sync::Arc};

/// Column holding the company code.
pub const CODE_COLUMN: &str = "company_code";
/// Column holding the fiscal year.
pub const YEAR_COLUMN: &str = "year";
/// Column holding the company display name, in company tables.
pub const NAME_COLUMN: &str = "company_name";

/// Optional numeric columns, in `AnnualStatement` field order.
pub const FIGURE_COLUMNS: [&str; 5] = [
    "eps",
    "revenue",
    "operating_costs",
    "operating_expenses",
    "net_income",
];

/// Container for annual statement rows.
///
/// # Expected Schema
///
/// - `company_code`: company identifier (any type, read as a string)
/// - `year`: fiscal year (integer)
/// - `eps`, `revenue`, `operating_costs`, `operating_expenses`,
///   `net_income`: optional numeric figures; a missing column reads as all
///   nulls
///
/// # Example
///
/// ```
/// use polars::prelude::*;
/// use tendenza_traits::StatementFrame;
///
/// let df = df! {
///     "company_code" => &["A", "A"],
///     "year" => &[2023i64, 2024],
///     "eps" => &[Some(1.0), None],
/// }
/// .unwrap();
///
/// let statements = StatementFrame::new(df).to_statements().unwrap();
/// assert_eq!(statements[1].eps, None);
/// ```
#[derive(Debug, Clone)]
pub struct StatementFrame {
    data: DataFrame,
}

impl StatementFrame {
    /// Wrap a DataFrame of statement rows.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Read statement rows from a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(read_csv(path)?))
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the frame holds no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if a column exists.
    pub fn has_column(&self, name: &str) -> bool {
        has_column(&self.data, name)
    }

    /// Convert every row into an [`AnnualStatement`].
    ///
    /// # Errors
    ///
    /// Returns an error if `company_code` or `year` is missing, null, or of
    /// a type that cannot be cast, or if a figure column is not numeric.
    pub fn to_statements(&self) -> Result<Vec<AnnualStatement>> {
        let codes = string_column(&self.data, CODE_COLUMN)?;
        let years = require(&self.data, YEAR_COLUMN)?
            .as_materialized_series()
            .cast(&DataType::Int64)?;
        let years = years.i64()?;

        let mut figures: Vec<Vec<Option<f64>>> = Vec::with_capacity(FIGURE_COLUMNS.len());
        for name in FIGURE_COLUMNS {
            figures.push(figure_column(&self.data, name)?);
        }

        let mut statements = Vec::with_capacity(self.len());
        for (row, (code, year)) in codes.into_iter().zip(years.into_iter()).enumerate() {
            let code = code.ok_or_else(|| {
                TendenzaError::InvalidData(format!("row {row}: null {CODE_COLUMN}"))
            })?;
            let year = year
                .and_then(|y| i32::try_from(y).ok())
                .ok_or_else(|| {
                    TendenzaError::InvalidData(format!("row {row}: missing or invalid {YEAR_COLUMN}"))
                })?;

            statements.push(AnnualStatement {
                company_code: code,
                year,
                eps: figures[0][row],
                revenue: figures[1][row],
                operating_costs: figures[2][row],
                operating_expenses: figures[3][row],
                net_income: figures[4][row],
            });
        }

        Ok(statements)
    }
}

impl From<DataFrame> for StatementFrame {
    fn from(data: DataFrame) -> Self {
        Self::new(data)
    }
}

impl AsRef<DataFrame> for StatementFrame {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}

/// Convert a company table (`company_code`, `company_name`) into records.
///
/// # Errors
///
/// Returns an error if either column is missing or holds nulls.
pub fn companies_from_frame(df: &DataFrame) -> Result<Vec<Company>> {
    let codes = string_column(df, CODE_COLUMN)?;
    let names = string_column(df, NAME_COLUMN)?;

    codes
        .into_iter()
        .zip(names)
        .enumerate()
        .map(|(row, (code, name))| match (code, name) {
            (Some(code), Some(name)) => Ok(Company { code, name }),
            _ => Err(TendenzaError::InvalidData(format!(
                "row {row}: null {CODE_COLUMN} or {NAME_COLUMN}"
            ))),
        })
        .collect()
}

/// Read a CSV file with a header row into a DataFrame.
///
/// `company_code` is always read as text so codes such as `0050` keep
/// their leading zeros.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let codes_as_text = Schema::from_iter([Field::new(CODE_COLUMN.into(), DataType::String)]);
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(codes_as_text)))
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(df)
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|s| s.as_str() == name)
}

fn require<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    if !has_column(df, name) {
        return Err(TendenzaError::MissingColumn(name.to_string()));
    }
    Ok(df.column(name)?)
}

// Frames built in code may carry integer codes.
fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = require(df, name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    Ok(series
        .str()?
        .into_iter()
        .map(|s: Option<&str>| s.map(str::to_string))
        .collect())
}

fn figure_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    if !has_column(df, name) {
        return Ok(vec![None; df.height()]);
    }
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}
