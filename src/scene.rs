use kurbo::Point;

use crate::{
    error::{InvadersError, InvadersResult},
    layout::Canvas,
};

/// A composed static scene: canvas, background color, ordered shape nodes.
///
/// The scene is the boundary between the layout/banding logic and the output
/// syntax; nothing in here knows how a node is spelled in the document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub background: &'static str,
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Node {
    Rect(RectNode),
    Circle(CircleNode),
    Line(LineNode),
    Polygon(PolygonNode),
    Group(GroupNode),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RectNode {
    pub id: Option<String>,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub animation: Option<Animation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CircleNode {
    pub id: Option<String>,
    pub center: Point,
    pub radius: f64,
    pub fill: String,
    pub opacity: Option<f64>,
    pub animation: Option<Animation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineNode {
    pub id: Option<String>,
    pub start: Point,
    pub end: Point,
    pub stroke: String,
    pub stroke_width: f64,
    pub animation: Option<Animation>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PolygonNode {
    pub id: Option<String>,
    pub points: Vec<Point>,
    pub fill: String,
    pub animation: Option<Animation>,
}

/// Children render in insertion order; a group animation applies to all of
/// them.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GroupNode {
    pub id: Option<String>,
    pub opacity: Option<f64>,
    pub children: Vec<Node>,
    pub animation: Option<Animation>,
}

/// One declarative animation attached to a node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Animation {
    pub attribute: AnimatedAttribute,
    /// Keyframe values, in order. Serialized `;`-joined.
    pub values: Vec<String>,
    pub dur_secs: f64,
    pub repeat: Repeat,
    pub begin: Begin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum AnimatedAttribute {
    Opacity,
    Transform,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Repeat {
    Indefinite,
    Count(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Begin {
    /// Starts when the document loads.
    Auto,
    /// Never starts on its own; triggered externally or not at all.
    Indefinite,
}

impl Animation {
    pub fn validate(&self) -> InvadersResult<()> {
        if self.values.is_empty() {
            return Err(InvadersError::validation("animation values must be non-empty"));
        }
        if !(self.dur_secs > 0.0) {
            return Err(InvadersError::validation("animation dur_secs must be > 0"));
        }
        if let Repeat::Count(0) = self.repeat {
            return Err(InvadersError::validation("animation repeat count must be > 0"));
        }
        Ok(())
    }
}

impl Node {
    fn validate(&self) -> InvadersResult<()> {
        match self {
            Node::Rect(n) => {
                if !(n.width > 0.0 && n.height > 0.0) {
                    return Err(InvadersError::validation("rect width/height must be > 0"));
                }
                validate_animation(&n.animation)
            }
            Node::Circle(n) => {
                if !(n.radius > 0.0) {
                    return Err(InvadersError::validation("circle radius must be > 0"));
                }
                validate_animation(&n.animation)
            }
            Node::Line(n) => {
                if !(n.stroke_width > 0.0) {
                    return Err(InvadersError::validation("line stroke_width must be > 0"));
                }
                validate_animation(&n.animation)
            }
            Node::Polygon(n) => {
                if n.points.len() < 3 {
                    return Err(InvadersError::validation(
                        "polygon must have at least 3 points",
                    ));
                }
                validate_animation(&n.animation)
            }
            Node::Group(n) => {
                validate_animation(&n.animation)?;
                for child in &n.children {
                    child.validate()?;
                }
                Ok(())
            }
        }
    }
}

fn validate_animation(animation: &Option<Animation>) -> InvadersResult<()> {
    match animation {
        Some(a) => a.validate(),
        None => Ok(()),
    }
}

impl Scene {
    pub fn validate(&self) -> InvadersResult<()> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(InvadersError::validation("canvas width/height must be > 0"));
        }
        for node in &self.nodes {
            node.validate()?;
        }
        Ok(())
    }
}
