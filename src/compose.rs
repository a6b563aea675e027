use rand::Rng;

use crate::{
    calendar::ContributionCalendar,
    decor,
    error::InvadersResult,
    layout::GridLayout,
    scene::{Node, RectNode, Scene},
};

const BACKGROUND: &str = "#0d1117";

#[derive(Clone, Copy, Debug, Default)]
pub struct ComposeOpts {
    pub layout: GridLayout,
}

/// Compose the full scene for a calendar: starfield, laser, one cell per
/// active day, explosion markers, spaceship. Deterministic given the RNG.
#[tracing::instrument(skip(calendar, opts, rng), fields(weeks = calendar.weeks.len()))]
pub fn compose_scene(
    calendar: &ContributionCalendar,
    opts: &ComposeOpts,
    rng: &mut impl Rng,
) -> InvadersResult<Scene> {
    let canvas = opts.layout.canvas_for(calendar);
    let cells = opts.layout.cells(calendar)?;

    tracing::debug!(
        cells = cells.len(),
        width = canvas.width,
        "laying out contribution grid"
    );

    let mut nodes = Vec::with_capacity(decor::STAR_COUNT + 2 * cells.len() + 2);
    nodes.extend(decor::starfield(&canvas, rng));
    nodes.push(decor::laser(&canvas, opts.layout.origin.y));
    for cell in &cells {
        nodes.push(Node::Rect(RectNode {
            id: Some(format!("cell-{}-{}", cell.week, cell.day)),
            origin: cell.origin,
            width: opts.layout.cell_size,
            height: opts.layout.cell_size,
            fill: cell.band.color().to_string(),
            animation: None,
        }));
    }
    nodes.extend(decor::explosions(&cells, opts.layout.cell_size));
    nodes.push(decor::spaceship(&canvas));

    let scene = Scene {
        canvas,
        background: BACKGROUND,
        nodes,
    };
    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{ContributionDay, ContributionWeek};
    use rand::{SeedableRng, rngs::StdRng};

    fn calendar_with_counts(counts: [u32; 7]) -> ContributionCalendar {
        let base: chrono::NaiveDate = "2025-06-01".parse().unwrap();
        ContributionCalendar {
            total: counts.iter().sum(),
            weeks: vec![ContributionWeek {
                days: counts
                    .iter()
                    .enumerate()
                    .map(|(i, &count)| ContributionDay {
                        date: base + chrono::Days::new(i as u64),
                        count,
                    })
                    .collect(),
            }],
        }
    }

    fn cell_nodes(scene: &Scene) -> Vec<&RectNode> {
        scene
            .nodes
            .iter()
            .filter_map(|node| match node {
                Node::Rect(r) if r.id.as_deref().is_some_and(|id| id.starts_with("cell-")) => {
                    Some(r)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn scene_has_one_cell_per_active_day() {
        let calendar = calendar_with_counts([0, 1, 4, 7, 10, 0, 0]);
        let scene = compose_scene(
            &calendar,
            &ComposeOpts::default(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        let cells = cell_nodes(&scene);
        assert_eq!(cells.len(), 4);
        let ids: Vec<&str> = cells.iter().filter_map(|c| c.id.as_deref()).collect();
        assert_eq!(ids, vec!["cell-0-1", "cell-0-2", "cell-0-3", "cell-0-4"]);
    }

    #[test]
    fn cells_are_independent_of_the_rng() {
        let calendar = calendar_with_counts([0, 2, 0, 5, 0, 0, 11]);
        let opts = ComposeOpts::default();
        let a = compose_scene(&calendar, &opts, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = compose_scene(&calendar, &opts, &mut StdRng::seed_from_u64(999)).unwrap();

        let cells_a: Vec<_> = cell_nodes(&a).into_iter().cloned().collect();
        let cells_b: Vec<_> = cell_nodes(&b).into_iter().cloned().collect();
        assert_eq!(cells_a, cells_b);
        assert_ne!(a.nodes, b.nodes);
    }

    #[test]
    fn empty_calendar_composes_decorations_only() {
        let scene = compose_scene(
            &ContributionCalendar::empty(),
            &ComposeOpts::default(),
            &mut StdRng::seed_from_u64(3),
        )
        .unwrap();
        assert!(cell_nodes(&scene).is_empty());
        // starfield + laser + spaceship survive
        assert_eq!(scene.nodes.len(), decor::STAR_COUNT + 2);
    }

    #[test]
    fn malformed_calendar_is_rejected() {
        let mut calendar = calendar_with_counts([1, 0, 0, 0, 0, 0, 0]);
        calendar.weeks[0].days.truncate(3);
        let result = compose_scene(
            &calendar,
            &ComposeOpts::default(),
            &mut StdRng::seed_from_u64(3),
        );
        assert!(result.is_err());
    }
}
