//! Decorative scene elements: the spaceship, its laser, per-cell explosion
//! markers, and the background starfield.
//!
//! Only the starfield is randomized, and only through the caller-supplied
//! RNG; everything else is a pure function of the canvas and cell layout.

use kurbo::Point;
use rand::Rng;

use crate::{
    layout::{Canvas, RenderedCell},
    scene::{
        AnimatedAttribute, Animation, Begin, CircleNode, GroupNode, LineNode, Node, PolygonNode,
        Repeat,
    },
};

pub const STAR_COUNT: usize = 50;

const HULL_FILL: &str = "#61dafb";
const WING_FILL: &str = "#ffffff";
const COCKPIT_FILL: &str = "#ff0000";
const LASER_STROKE: &str = "#ff0000";
const EXPLOSION_FILL: &str = "#ff4500";
const STAR_FILL: &str = "#ffffff";

/// Horizontal center of the ship in its rest position.
pub const SHIP_CENTER_X: f64 = 30.0;

fn ship_base_y(canvas: &Canvas) -> f64 {
    canvas.height - 20.0
}

fn ship_apex_y(canvas: &Canvas) -> f64 {
    canvas.height - 40.0
}

/// Hull, wings, and cockpit, grouped, sweeping the canvas and back over 8s.
pub fn spaceship(canvas: &Canvas) -> Node {
    let base = ship_base_y(canvas);
    let apex = ship_apex_y(canvas);
    let sweep = (canvas.width - 100.0).max(0.0);

    Node::Group(GroupNode {
        id: Some("spaceship".to_string()),
        opacity: None,
        children: vec![
            Node::Polygon(PolygonNode {
                id: None,
                points: vec![
                    Point::new(SHIP_CENTER_X - 20.0, base),
                    Point::new(SHIP_CENTER_X, apex),
                    Point::new(SHIP_CENTER_X + 20.0, base),
                ],
                fill: HULL_FILL.to_string(),
                animation: None,
            }),
            Node::Polygon(PolygonNode {
                id: None,
                points: vec![
                    Point::new(SHIP_CENTER_X - 15.0, base),
                    Point::new(SHIP_CENTER_X - 5.0, base + 5.0),
                    Point::new(SHIP_CENTER_X + 5.0, base),
                ],
                fill: WING_FILL.to_string(),
                animation: None,
            }),
            Node::Circle(CircleNode {
                id: None,
                center: Point::new(SHIP_CENTER_X, base - 10.0),
                radius: 3.0,
                fill: COCKPIT_FILL.to_string(),
                opacity: None,
                animation: None,
            }),
        ],
        animation: Some(Animation {
            attribute: AnimatedAttribute::Transform,
            values: vec!["0 0".to_string(), format!("{sweep} 0"), "0 0".to_string()],
            dur_secs: 8.0,
            repeat: Repeat::Indefinite,
            begin: Begin::Auto,
        }),
    })
}

/// Blinking beam from the ship apex up to the top of the grid.
pub fn laser(canvas: &Canvas, grid_top: f64) -> Node {
    Node::Group(GroupNode {
        id: Some("laser".to_string()),
        opacity: None,
        children: vec![Node::Line(LineNode {
            id: None,
            start: Point::new(SHIP_CENTER_X, ship_apex_y(canvas)),
            end: Point::new(SHIP_CENTER_X, grid_top),
            stroke: LASER_STROKE.to_string(),
            stroke_width: 2.0,
            animation: None,
        })],
        animation: Some(Animation {
            attribute: AnimatedAttribute::Opacity,
            values: vec!["0".to_string(), "1".to_string(), "0".to_string()],
            dur_secs: 0.5,
            repeat: Repeat::Indefinite,
            begin: Begin::Auto,
        }),
    })
}

/// One hidden burst per visible cell. Never fires on its own
/// (`begin = indefinite`).
pub fn explosions(cells: &[RenderedCell], cell_size: f64) -> Vec<Node> {
    cells
        .iter()
        .map(|cell| {
            let center = Point::new(
                cell.origin.x + cell_size / 2.0,
                cell.origin.y + cell_size / 2.0,
            );
            Node::Group(GroupNode {
                id: Some(format!("explosion-{}-{}", cell.week, cell.day)),
                opacity: Some(0.0),
                children: vec![Node::Circle(CircleNode {
                    id: None,
                    center,
                    radius: 8.0,
                    fill: EXPLOSION_FILL.to_string(),
                    opacity: None,
                    animation: None,
                })],
                animation: Some(Animation {
                    attribute: AnimatedAttribute::Opacity,
                    values: vec!["0".to_string(), "1".to_string(), "0".to_string()],
                    dur_secs: 0.5,
                    repeat: Repeat::Count(1),
                    begin: Begin::Indefinite,
                }),
            })
        })
        .collect()
}

/// Twinkling background stars at RNG-chosen positions.
pub fn starfield(canvas: &Canvas, rng: &mut impl Rng) -> Vec<Node> {
    (0..STAR_COUNT)
        .map(|_| {
            let center = Point::new(
                rng.gen_range(0.0..canvas.width),
                rng.gen_range(0.0..canvas.height),
            );
            Node::Circle(CircleNode {
                id: None,
                center,
                radius: 1.0,
                fill: STAR_FILL.to_string(),
                opacity: None,
                animation: Some(Animation {
                    attribute: AnimatedAttribute::Opacity,
                    values: vec!["0.2".to_string(), "1".to_string(), "0.2".to_string()],
                    dur_secs: 2.0,
                    repeat: Repeat::Indefinite,
                    begin: Begin::Auto,
                }),
            })
        })
        .collect()
}
