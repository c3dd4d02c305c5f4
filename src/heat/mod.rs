pub mod exec;
pub mod output;

pub use exec::exec;
pub use output::{heat_lines, intensity_char, output_heatmap, output_json, output_ndjson, person_heat};
