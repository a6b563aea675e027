use rand::Rng;

use crate::{
    calendar::ContributionCalendar,
    compose::{ComposeOpts, compose_scene},
    error::InvadersResult,
    svg,
};

/// Compose and serialize in one step.
pub fn generate_svg(
    calendar: &ContributionCalendar,
    opts: &ComposeOpts,
    rng: &mut impl Rng,
) -> InvadersResult<String> {
    let scene = compose_scene(calendar, opts, rng)?;
    Ok(svg::write_document(&scene))
}
