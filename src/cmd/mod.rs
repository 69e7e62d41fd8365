pub mod calc;
pub mod chart;
pub mod session;

use discforge::config::DiscArgs;
use discforge::error::DfResult;
use discforge::model::{DiscField, DiscRatings};
use discforge::session::FlightSession;

/// Builds a session from command-line disc args and commits it.
pub fn committed_session(args: &DiscArgs) -> DfResult<FlightSession> {
    let mut session = FlightSession::new();
    match &args.disc {
        Some(path) => session.set_pending(DiscRatings::load_from_file(path)?),
        None => {
            for (field, raw) in [
                (DiscField::Speed, &args.speed),
                (DiscField::Glide, &args.glide),
                (DiscField::Turn, &args.turn),
                (DiscField::Fade, &args.fade),
            ] {
                session.update_field(field, raw);
            }
        }
    }
    session.set_throw_style(args.style);
    session.commit();
    Ok(session)
}
