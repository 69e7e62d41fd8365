use crate::reports;
use clap::Args;
use discforge::error::{DfResult, DiscForgeError};
use discforge::model::ThrowStyle;
use discforge::render::render_svg;
use discforge::session::{FlightSession, SessionChange, SessionObserver};
use std::fs;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Don't print the "> " prompt (for piped input)
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,
}

const HELP: &str = "\
commands:
  set <speed|glide|turn|fade> <value>   edit the form
  commit                                submit the form
  style <rhbh|rhfh>                     switch throw style
  show                                  print the readouts
  svg [FILE]                            print or write the chart
  help                                  this text
  quit                                  leave";

/// Re-renders the readouts whenever the derived outputs may have moved.
struct ReadoutPrinter;

impl SessionObserver for ReadoutPrinter {
    fn on_change(&self, session: &FlightSession, change: SessionChange) {
        match change {
            SessionChange::PendingEdited(_) | SessionChange::PendingReplaced => {
                reports::print_disc("form", session.pending());
            }
            SessionChange::Committed | SessionChange::ThrowStyleChanged => {
                reports::print_readouts(
                    session.derive_outputs().as_ref(),
                    session.throw_style(),
                );
            }
        }
    }
}

pub fn run(args: SessionArgs) -> DfResult<()> {
    let mut session = FlightSession::new();
    session.subscribe(Box::new(ReadoutPrinter));

    println!("🥏 Disc flight session. Type 'help' for commands.");
    reports::print_disc("form", session.pending());
    reports::print_readouts(None, session.throw_style());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !args.no_prompt {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match execute(&mut session, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => warn!("{}", e),
        }
    }
    info!("Session closed");
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

fn execute(session: &mut FlightSession, line: &str) -> DfResult<Flow> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Flow::Continue);
    };

    match command.to_lowercase().as_str() {
        "set" => {
            let field = words
                .next()
                .ok_or_else(|| DiscForgeError::Command("usage: set <field> <value>".into()))?;
            // a missing value is just an empty entry
            let raw = words.collect::<Vec<_>>().join(" ");
            session.update_field_by_name(field, &raw)?;
        }
        "commit" => session.commit(),
        "style" => {
            let raw = words.next().unwrap_or_default();
            let style = ThrowStyle::from_str(raw)
                .map_err(|_| DiscForgeError::UnknownThrowStyle(raw.to_string()))?;
            session.set_throw_style(style);
        }
        "show" => reports::print_readouts(session.derive_outputs().as_ref(), session.throw_style()),
        "svg" => {
            let svg = render_svg(session.derive_outputs().as_ref());
            match words.next() {
                Some(path) => {
                    fs::write(path, svg)?;
                    println!("chart written to {}", path);
                }
                None => print!("{}", svg),
            }
        }
        "help" => println!("{}", HELP),
        "quit" | "exit" => return Ok(Flow::Quit),
        other => {
            return Err(DiscForgeError::Command(format!(
                "unknown command '{}' (try 'help')",
                other
            )))
        }
    }
    Ok(Flow::Continue)
}
