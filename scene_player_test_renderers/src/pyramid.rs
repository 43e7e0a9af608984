/// Pyramid geometry shared by the sample renderers
///
/// Four side faces, apex at (0, 1, 0), base at y = -1. The base itself is
/// never drawn.

use glam::Vec3;
use scene_player::sp::render::{Face, GraphicsContext, MatrixMode, PolygonMode};

/// One triangle of the pyramid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidFace {
    pub vertices: [Vec3; 3],
    pub normal: Vec3,
    pub color: Vec3,
}

const APEX: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const FRONT_LEFT: Vec3 = Vec3::new(-1.0, -1.0, 1.0);
const FRONT_RIGHT: Vec3 = Vec3::new(1.0, -1.0, 1.0);
const BACK_LEFT: Vec3 = Vec3::new(-1.0, -1.0, -1.0);
const BACK_RIGHT: Vec3 = Vec3::new(1.0, -1.0, -1.0);

/// Flat yellow used by `TestRenderer2`
pub const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Front, left, back, right
pub const PYRAMID_FACES: [PyramidFace; 4] = [
    PyramidFace {
        vertices: [APEX, FRONT_LEFT, FRONT_RIGHT],
        normal: Vec3::new(0.0, 0.447214, 0.894427),
        color: Vec3::new(1.0, 0.0, 0.0),
    },
    PyramidFace {
        vertices: [APEX, BACK_LEFT, FRONT_LEFT],
        normal: Vec3::new(-0.894427, 0.447214, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    PyramidFace {
        vertices: [APEX, BACK_LEFT, BACK_RIGHT],
        normal: Vec3::new(0.0, 0.447214, -0.894427),
        color: Vec3::new(0.0, 0.0, 1.0),
    },
    PyramidFace {
        vertices: [APEX, FRONT_RIGHT, BACK_RIGHT],
        normal: Vec3::new(0.894427, 0.447214, 0.0),
        color: Vec3::new(0.0, 1.0, 1.0),
    },
];

/// Vertices submitted per frame
pub const PYRAMID_VERTICES: usize = PYRAMID_FACES.len() * 3;

/// Draw the pyramid 6 units in front of the camera, turned `degrees` about Y.
///
/// `tint` replaces every face colour when set.
pub fn draw_pyramid(gfx: &mut dyn GraphicsContext, degrees: f32, tint: Option<Vec3>) {
    gfx.matrix_mode(MatrixMode::ModelView);
    gfx.load_identity();
    gfx.polygon_mode(Face::FrontAndBack, PolygonMode::Fill);

    gfx.translate(Vec3::new(0.0, 0.0, -6.0));
    gfx.rotate(degrees, Vec3::Y);

    gfx.begin_triangles();
    for face in &PYRAMID_FACES {
        gfx.color(tint.unwrap_or(face.color));
        gfx.normal(face.normal);
        for &vertex in &face.vertices {
            gfx.vertex(vertex);
        }
    }
    gfx.end_triangles();
}

#[cfg(test)]
#[path = "pyramid_tests.rs"]
mod tests;
