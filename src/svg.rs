//! Scene-to-SVG serialization. The only module that knows output syntax.
//!
//! Serialization is a pure function of the scene: the same scene always
//! produces byte-identical output.

use std::fmt::Write as _;

use crate::scene::{
    AnimatedAttribute, Animation, Begin, GroupNode, Node, Repeat, Scene,
};

/// Serialize a composed scene to an SVG document string.
pub fn write_document(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.canvas.width,
        h = scene.canvas.height,
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="100%" height="100%" fill="{}"/>"#,
        escape_attr(scene.background)
    );
    for node in &scene.nodes {
        write_node(&mut out, node, 1);
    }
    out.push_str("</svg>\n");
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        Node::Rect(n) => {
            let _ = write!(
                out,
                r#"{pad}<rect{} x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                id_attr(&n.id),
                n.origin.x,
                n.origin.y,
                n.width,
                n.height,
                escape_attr(&n.fill),
            );
            close_shape(out, &pad, &n.animation, depth, "rect");
        }
        Node::Circle(n) => {
            let _ = write!(
                out,
                r#"{pad}<circle{} cx="{}" cy="{}" r="{}" fill="{}"{}"#,
                id_attr(&n.id),
                n.center.x,
                n.center.y,
                n.radius,
                escape_attr(&n.fill),
                opacity_attr(n.opacity),
            );
            close_shape(out, &pad, &n.animation, depth, "circle");
        }
        Node::Line(n) => {
            let _ = write!(
                out,
                r#"{pad}<line{} x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
                id_attr(&n.id),
                n.start.x,
                n.start.y,
                n.end.x,
                n.end.y,
                escape_attr(&n.stroke),
                n.stroke_width,
            );
            close_shape(out, &pad, &n.animation, depth, "line");
        }
        Node::Polygon(n) => {
            let points = n
                .points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(
                out,
                r#"{pad}<polygon{} points="{}" fill="{}""#,
                id_attr(&n.id),
                points,
                escape_attr(&n.fill),
            );
            close_shape(out, &pad, &n.animation, depth, "polygon");
        }
        Node::Group(n) => write_group(out, n, depth),
    }
}

fn write_group(out: &mut String, group: &GroupNode, depth: usize) {
    let pad = "  ".repeat(depth);
    let _ = writeln!(
        out,
        r#"{pad}<g{}{}>"#,
        id_attr(&group.id),
        opacity_attr(group.opacity)
    );
    for child in &group.children {
        write_node(out, child, depth + 1);
    }
    if let Some(animation) = &group.animation {
        write_animation(out, animation, depth + 1);
    }
    let _ = writeln!(out, "{pad}</g>");
}

/// Shapes with an animation need a child element; bare shapes self-close.
fn close_shape(
    out: &mut String,
    pad: &str,
    animation: &Option<Animation>,
    depth: usize,
    tag: &str,
) {
    match animation {
        Some(a) => {
            out.push_str(">\n");
            write_animation(out, a, depth + 1);
            let _ = writeln!(out, "{pad}</{tag}>");
        }
        None => out.push_str("/>\n"),
    }
}

fn write_animation(out: &mut String, animation: &Animation, depth: usize) {
    let pad = "  ".repeat(depth);
    let values = animation.values.join(";");
    let repeat = match animation.repeat {
        Repeat::Indefinite => "indefinite".to_string(),
        Repeat::Count(n) => n.to_string(),
    };
    let begin = match animation.begin {
        Begin::Auto => String::new(),
        Begin::Indefinite => r#" begin="indefinite""#.to_string(),
    };
    match animation.attribute {
        AnimatedAttribute::Opacity => {
            let _ = writeln!(
                out,
                r#"{pad}<animate attributeName="opacity" values="{}" dur="{}s" repeatCount="{}"{}/>"#,
                escape_attr(&values),
                animation.dur_secs,
                repeat,
                begin,
            );
        }
        AnimatedAttribute::Transform => {
            let _ = writeln!(
                out,
                r#"{pad}<animateTransform attributeName="transform" attributeType="XML" type="translate" values="{}" dur="{}s" repeatCount="{}"{}/>"#,
                escape_attr(&values),
                animation.dur_secs,
                repeat,
                begin,
            );
        }
    }
}

fn id_attr(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(r#" id="{}""#, escape_attr(id)),
        None => String::new(),
    }
}

fn opacity_attr(opacity: Option<f64>) -> String {
    match opacity {
        Some(o) => format!(r#" opacity="{o}""#),
        None => String::new(),
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Canvas;
    use crate::scene::{CircleNode, RectNode};
    use kurbo::Point;

    fn scene_with(nodes: Vec<Node>) -> Scene {
        Scene {
            canvas: Canvas {
                width: 900.0,
                height: 200.0,
            },
            background: "#0d1117",
            nodes,
        }
    }

    #[test]
    fn document_frame_and_background() {
        let doc = write_document(&scene_with(vec![]));
        assert!(doc.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="900""#));
        assert!(doc.contains(r##"fill="#0d1117""##));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn bare_rect_self_closes() {
        let doc = write_document(&scene_with(vec![Node::Rect(RectNode {
            id: Some("cell-0-1".to_string()),
            origin: Point::new(30.0, 33.0),
            width: 10.0,
            height: 10.0,
            fill: "#39d353".to_string(),
            animation: None,
        })]));
        assert!(doc.contains(
            r##"<rect id="cell-0-1" x="30" y="33" width="10" height="10" fill="#39d353"/>"##
        ));
    }

    #[test]
    fn opacity_animation_becomes_animate_element() {
        let doc = write_document(&scene_with(vec![Node::Circle(CircleNode {
            id: None,
            center: Point::new(5.0, 6.0),
            radius: 1.0,
            fill: "#ffffff".to_string(),
            opacity: None,
            animation: Some(Animation {
                attribute: AnimatedAttribute::Opacity,
                values: vec!["0.2".to_string(), "1".to_string(), "0.2".to_string()],
                dur_secs: 2.0,
                repeat: Repeat::Indefinite,
                begin: Begin::Auto,
            }),
        })]));
        assert!(doc.contains(
            r#"<animate attributeName="opacity" values="0.2;1;0.2" dur="2s" repeatCount="indefinite"/>"#
        ));
        assert!(doc.contains("</circle>"));
    }

    #[test]
    fn transform_animation_becomes_animate_transform() {
        let doc = write_document(&scene_with(vec![Node::Group(GroupNode {
            id: Some("spaceship".to_string()),
            opacity: None,
            children: vec![],
            animation: Some(Animation {
                attribute: AnimatedAttribute::Transform,
                values: vec!["0 0".to_string(), "800 0".to_string(), "0 0".to_string()],
                dur_secs: 8.0,
                repeat: Repeat::Indefinite,
                begin: Begin::Auto,
            }),
        })]));
        assert!(doc.contains(
            r#"<animateTransform attributeName="transform" attributeType="XML" type="translate" values="0 0;800 0;0 0" dur="8s" repeatCount="indefinite"/>"#
        ));
    }

    #[test]
    fn indefinite_begin_is_emitted() {
        let doc = write_document(&scene_with(vec![Node::Group(GroupNode {
            id: Some("explosion-0-1".to_string()),
            opacity: Some(0.0),
            children: vec![],
            animation: Some(Animation {
                attribute: AnimatedAttribute::Opacity,
                values: vec!["0".to_string(), "1".to_string(), "0".to_string()],
                dur_secs: 0.5,
                repeat: Repeat::Count(1),
                begin: Begin::Indefinite,
            }),
        })]));
        assert!(doc.contains(r#"repeatCount="1" begin="indefinite"/>"#));
        assert!(doc.contains(r#"<g id="explosion-0-1" opacity="0">"#));
    }

    #[test]
    fn serialization_is_byte_stable() {
        let scene = scene_with(vec![Node::Rect(RectNode {
            id: None,
            origin: Point::new(1.5, 2.5),
            width: 10.0,
            height: 10.0,
            fill: "#0e4429".to_string(),
            animation: None,
        })]);
        assert_eq!(write_document(&scene), write_document(&scene));
    }

    #[test]
    fn attr_values_are_escaped() {
        assert_eq!(escape_attr(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
