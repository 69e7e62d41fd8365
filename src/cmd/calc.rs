use crate::reports;
use clap::Args;
use discforge::config::{DiscArgs, OutputArgs, OutputFormat};
use discforge::error::{DfResult, DiscForgeError};
use std::io;

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub disc: DiscArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: CalcArgs) -> DfResult<()> {
    let session = super::committed_session(&args.disc)?;
    let result = session
        .derive_outputs()
        .ok_or_else(|| DiscForgeError::State("nothing committed".to_string()))?;

    match args.output.format {
        OutputFormat::Table => {
            if let Some(disc) = session.committed() {
                reports::print_disc("\n🥏 Disc", disc);
            }
            reports::print_readouts(Some(&result), session.throw_style());
        }
        OutputFormat::Json => {
            let report = discforge::api::build_report(&session);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => reports::write_csv(io::stdout().lock(), &result)?,
    }
    Ok(())
}
