pub mod parse;
pub mod source;

pub use parse::{parse_row, split_parents, BoolPolicy, RawRow, IS_MERGE_POLICY, NOMENCLATURE_POLICY};
pub use source::{failure_status, load, read_csv_file, read_rows, DataSource, Loaded, DEFAULT_DATA_PATH};
