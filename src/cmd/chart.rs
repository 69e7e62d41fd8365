use clap::Args;
use discforge::config::DiscArgs;
use discforge::error::DfResult;
use discforge::render::render_svg;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub disc: DiscArgs,

    /// Where to write the SVG (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: ChartArgs) -> DfResult<()> {
    let session = super::committed_session(&args.disc)?;
    let svg = render_svg(session.derive_outputs().as_ref());

    match args.out {
        Some(path) => {
            fs::write(&path, svg)?;
            info!("🖼️  Chart written to {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}
