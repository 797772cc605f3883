use std::path::PathBuf;

use pistat_dataset::Cohort;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DatasetArg {
    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DatasetArg) -> anyhow::Result<()> {
    let cohort = Cohort::builtin();
    Output::save_json(&cohort, arg.output.clone())?;
    Ok(())
}
