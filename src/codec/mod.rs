mod csv_codec;
mod errors;
mod report;
mod snapshot;

pub use csv_codec::{from_csv, to_csv, CsvImport, CSV_HEADER};
pub use errors::CodecError;
pub use report::{report, share_text};
pub use snapshot::{from_snapshot, to_snapshot};

pub const CSV_EXPORT_FILE_NAME: &str = "FinSight-Export.csv";
pub const REPORT_FILE_NAME: &str = "FinSight-Budget.txt";
