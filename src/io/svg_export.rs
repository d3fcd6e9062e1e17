use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path};

use crate::cspace::CSpace;
use crate::geometry::primitives::Point;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///Multiplier for the stroke width, relative to the domain size
    #[serde(default = "default_stroke_width_multiplier")]
    pub stroke_width_multiplier: f32,
    ///Draw obstacle outlines on top of the filled shapes
    #[serde(default = "default_draw_outlines")]
    pub draw_outlines: bool,
}

fn default_stroke_width_multiplier() -> f32 {
    1.0
}

fn default_draw_outlines() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            stroke_width_multiplier: default_stroke_width_multiplier(),
            draw_outlines: default_draw_outlines(),
        }
    }
}

/// Renders the domain and all obstacles of a [`CSpace`] to an SVG document,
/// for debugging and visual inspection.
pub fn cspace_to_svg(space: &CSpace, options: SvgDrawOptions) -> Document {
    let vbox = space.domain.scale(1.10);

    let stroke_width =
        f32::min(vbox.width(), vbox.height()) * 0.001 * options.stroke_width_multiplier;

    //draw the domain (white, black outline)
    let domain_path = {
        let data = polygon_data(&space.domain.corners());
        Path::new()
            .set("d", data)
            .set("fill", "white")
            .set("stroke", "black")
            .set("stroke-width", stroke_width)
    };

    //draw obstacles (dark grey)
    let mut obstacle_group = Group::new().set("id", "obstacles");
    for (index, polygon) in space.obstacles.to_polygons().iter().enumerate() {
        let name = space.obstacle_name(crate::cspace::BOUNDARY_FACES + index);
        let mut path = Path::new()
            .set("id", name)
            .set("d", polygon_data(polygon))
            .set("fill", "rgb(51, 51, 51)");
        if options.draw_outlines {
            path = path
                .set("stroke", "black")
                .set("stroke-width", stroke_width);
        }
        obstacle_group = obstacle_group.add(path);
    }

    Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .add(domain_path)
        .add(obstacle_group)
}

fn polygon_data(polygon: &[Point]) -> Data {
    let mut data = Data::new();
    for (i, point) in polygon.iter().enumerate() {
        let coords = (point.0, point.1);
        data = match i {
            0 => data.move_to(coords),
            _ => data.line_to(coords),
        };
    }
    data.close()
}
