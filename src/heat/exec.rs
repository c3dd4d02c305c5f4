use super::{output_heatmap, output_json, output_ndjson};
use crate::cli::CommonArgs;
use crate::dataset::Dataset;

pub fn exec(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    // Spinner only for the human-readable table; JSON/NDJSON stay clean
    let dataset = Dataset::open(&common, !(json || ndjson))?;
    let views = dataset.filtered_views(common.person.as_deref());

    if json {
        output_json(&views, &dataset.source_label())?;
    } else if ndjson {
        output_ndjson(&views)?;
    } else {
        output_heatmap(&views, &dataset.overrides)?;
    }

    Ok(())
}
