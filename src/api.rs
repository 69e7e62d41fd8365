use crate::error::{DfResult, DiscForgeError};
use crate::model::types::fmt_num;
use crate::model::{DiscRatings, PowerTriple, ThrowStyle};
use crate::render::render_svg;
use crate::session::FlightSession;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// Shared state for a UI host driving one calculator screen.
#[derive(Debug, Default)]
pub struct DiscForgeState {
    pub session: Mutex<FlightSession>,
}

/// Everything a screen needs to draw itself, in one payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightReport {
    pub throw_style: ThrowStyle,
    pub pending: DiscRatings,
    pub disc: Option<DiscRatings>,
    pub stability: Option<String>,
    pub distances: Option<PowerTriple<String>>, // feet, shortest decimal form
    pub paths: Option<PowerTriple<String>>,
    pub svg: String,
}

fn lock(state: &DiscForgeState) -> DfResult<MutexGuard<'_, FlightSession>> {
    state
        .session
        .lock()
        .map_err(|e| DiscForgeError::State(e.to_string()))
}

/// Service: store one form edit.
pub fn update_field(state: &DiscForgeState, name: &str, raw: &str) -> DfResult<()> {
    lock(state)?.update_field_by_name(name, raw)
}

/// Service: submit the pending form.
pub fn commit(state: &DiscForgeState) -> DfResult<()> {
    let mut session = lock(state)?;
    session.commit();
    info!("Disc committed: {:?}", session.committed());
    Ok(())
}

/// Service: toggle RHBH / RHFH. Accepts "rhbh" / "rhfh" in any case.
pub fn set_throw_style(state: &DiscForgeState, style: &str) -> DfResult<()> {
    let style = ThrowStyle::from_str(style.trim())
        .map_err(|_| DiscForgeError::UnknownThrowStyle(style.to_string()))?;
    lock(state)?.set_throw_style(style);
    Ok(())
}

/// Service: the current derived outputs plus a rendered chart.
pub fn flight_report(state: &DiscForgeState) -> DfResult<FlightReport> {
    let session = lock(state)?;
    Ok(build_report(&session))
}

pub fn build_report(session: &FlightSession) -> FlightReport {
    let result = session.derive_outputs();
    FlightReport {
        throw_style: session.throw_style(),
        pending: *session.pending(),
        disc: session.committed().copied(),
        stability: result.as_ref().map(|r| r.stability.to_string()),
        distances: result
            .as_ref()
            .map(|r| r.distances.map(|d| fmt_num(*d))),
        paths: result
            .as_ref()
            .map(|r| r.paths.map(|p| p.to_svg_path())),
        svg: render_svg(result.as_ref()),
    }
}
