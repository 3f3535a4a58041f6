use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use profile_cli::session::check;
use profile_model::{FieldSet, ProfileSnapshot};
use profile_validate::descriptors;

use crate::cli::{CheckArgs, OutputArg};
use crate::summary::{apply_table_style, print_check};

pub fn run_fields() {
    let mut table = Table::new();
    table.set_header(vec!["Field set", "Key", "Label", "Kind", "Rule"]);
    apply_table_style(&mut table);
    for field_set in FieldSet::ALL {
        for descriptor in descriptors(field_set) {
            let key = descriptor.key;
            table.add_row(vec![
                field_set.to_string(),
                key.to_string(),
                key.label().to_string(),
                key.kind().to_string(),
                descriptor.rule.describe(),
            ]);
        }
    }
    println!("{table}");
}

/// Run the `check` command and return the process exit code.
pub fn run_check(args: &CheckArgs) -> Result<i32> {
    let snapshot = ProfileSnapshot::from_path(&args.snapshot)
        .with_context(|| format!("load snapshot {}", args.snapshot.display()))?;
    info!(
        path = %args.snapshot.display(),
        field_set = %snapshot.field_set(),
        "loaded snapshot"
    );
    let edits: Vec<_> = args.set.iter().chain(&args.unset).cloned().collect();
    let report = check(&snapshot, &edits).context("apply edits")?;
    match args.output {
        OutputArg::Table => print_check(&report),
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(report.exit_code())
}
