/// Software implementation of the graphics collaborator
///
/// Tracks fixed-function state (matrices, polygon mode, current colour and
/// normal) with glam and records every submitted vertex plus a per-frame
/// command log. No pixels are produced; hosts without a GPU and the test
/// suites use it to observe what renderers draw.

use glam::{Mat4, Vec3};
use bytemuck::{Pod, Zeroable};

use crate::renderer::{GraphicsContext, MatrixMode, Face, PolygonMode};

const SOURCE: &str = "sp::SoftwareGraphics";

/// One submitted vertex, laid out for direct upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position as submitted
    pub position: [f32; 3],
    /// Position after the model-view matrix
    pub eye_position: [f32; 3],
    pub color: [f32; 3],
    pub normal: [f32; 3],
}

/// Recorded graphics call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphicsCommand {
    MatrixMode(MatrixMode),
    LoadIdentity,
    Translate(Vec3),
    Rotate { degrees: f32, axis: Vec3 },
    PolygonMode(Face, PolygonMode),
    Perspective { fovy_degrees: f32, aspect: f32, near: f32, far: f32 },
    BeginTriangles,
    Color(Vec3),
    Normal(Vec3),
    Vertex(Vec3),
    EndTriangles,
}

/// Per-frame statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Completed triangle batches
    pub draw_calls: u32,
    /// Complete triangles submitted
    pub triangles: u32,
    /// Vertices submitted inside batches
    pub vertices: u32,
    /// Calls ignored because they were invalid in the current state
    pub rejected_calls: u32,
}

/// Software graphics context
#[derive(Debug, Clone)]
pub struct SoftwareGraphics {
    matrix_mode: MatrixMode,
    model_view: Mat4,
    projection: Mat4,
    front_mode: PolygonMode,
    back_mode: PolygonMode,
    current_color: Vec3,
    current_normal: Vec3,
    batch_open: bool,
    batch_vertices: u32,
    vertices: Vec<Vertex>,
    commands: Vec<GraphicsCommand>,
    stats: FrameStats,
}

impl Default for SoftwareGraphics {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftwareGraphics {
    pub fn new() -> Self {
        Self {
            matrix_mode: MatrixMode::ModelView,
            model_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            front_mode: PolygonMode::Fill,
            back_mode: PolygonMode::Fill,
            current_color: Vec3::ONE,
            current_normal: Vec3::Z,
            batch_open: false,
            batch_vertices: 0,
            vertices: Vec::new(),
            commands: Vec::new(),
            stats: FrameStats::default(),
        }
    }

    /// Start a new frame: clears recorded vertices, commands and stats.
    ///
    /// Matrix and polygon state persist across frames, like a real context.
    pub fn begin_frame(&mut self) {
        if self.batch_open {
            crate::sp_warn!(SOURCE, "Triangle batch left open at end of frame, discarding it");
            self.batch_open = false;
            self.batch_vertices = 0;
        }
        self.vertices.clear();
        self.commands.clear();
        self.stats = FrameStats::default();
    }

    // ===== GETTERS =====

    pub fn matrix_mode_state(&self) -> MatrixMode {
        self.matrix_mode
    }

    pub fn model_view(&self) -> &Mat4 {
        &self.model_view
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Rasterization mode for (front, back) faces
    pub fn polygon_modes(&self) -> (PolygonMode, PolygonMode) {
        (self.front_mode, self.back_mode)
    }

    /// Vertices submitted since `begin_frame`
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Submitted vertices as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Commands recorded since `begin_frame`
    pub fn commands(&self) -> &[GraphicsCommand] {
        &self.commands
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// True when nothing at all was issued since `begin_frame`
    pub fn is_untouched(&self) -> bool {
        self.commands.is_empty()
    }

    // ===== INTERNALS =====

    fn current_mut(&mut self) -> &mut Mat4 {
        match self.matrix_mode {
            MatrixMode::ModelView => &mut self.model_view,
            MatrixMode::Projection => &mut self.projection,
        }
    }

    fn reject(&mut self, what: &str) {
        self.stats.rejected_calls += 1;
        crate::sp_warn!(SOURCE, "Ignored invalid call: {}", what);
    }
}

impl GraphicsContext for SoftwareGraphics {
    fn matrix_mode(&mut self, mode: MatrixMode) {
        self.commands.push(GraphicsCommand::MatrixMode(mode));
        if self.batch_open {
            return self.reject("matrix_mode inside a triangle batch");
        }
        self.matrix_mode = mode;
    }

    fn load_identity(&mut self) {
        self.commands.push(GraphicsCommand::LoadIdentity);
        if self.batch_open {
            return self.reject("load_identity inside a triangle batch");
        }
        *self.current_mut() = Mat4::IDENTITY;
    }

    fn translate(&mut self, offset: Vec3) {
        self.commands.push(GraphicsCommand::Translate(offset));
        if self.batch_open || !offset.is_finite() {
            return self.reject("translate");
        }
        let current = self.current_mut();
        *current *= Mat4::from_translation(offset);
    }

    fn rotate(&mut self, degrees: f32, axis: Vec3) {
        self.commands.push(GraphicsCommand::Rotate { degrees, axis });
        let Some(axis) = axis.try_normalize() else {
            return self.reject("rotate about a degenerate axis");
        };
        if self.batch_open || !degrees.is_finite() {
            return self.reject("rotate");
        }
        let current = self.current_mut();
        *current *= Mat4::from_axis_angle(axis, degrees.to_radians());
    }

    fn polygon_mode(&mut self, face: Face, mode: PolygonMode) {
        self.commands.push(GraphicsCommand::PolygonMode(face, mode));
        match face {
            Face::Front => self.front_mode = mode,
            Face::Back => self.back_mode = mode,
            Face::FrontAndBack => {
                self.front_mode = mode;
                self.back_mode = mode;
            }
        }
    }

    fn perspective(&mut self, fovy_degrees: f32, aspect: f32, near: f32, far: f32) {
        self.commands.push(GraphicsCommand::Perspective { fovy_degrees, aspect, near, far });
        let valid = fovy_degrees > 0.0
            && fovy_degrees < 180.0
            && aspect.is_finite()
            && aspect > 0.0
            && near > 0.0
            && far.is_finite()
            && far > near;
        if self.batch_open || !valid {
            return self.reject("perspective with degenerate parameters");
        }
        let current = self.current_mut();
        *current *= Mat4::perspective_rh_gl(fovy_degrees.to_radians(), aspect, near, far);
    }

    fn begin_triangles(&mut self) {
        self.commands.push(GraphicsCommand::BeginTriangles);
        if self.batch_open {
            return self.reject("begin_triangles inside a triangle batch");
        }
        self.batch_open = true;
        self.batch_vertices = 0;
    }

    fn color(&mut self, rgb: Vec3) {
        self.commands.push(GraphicsCommand::Color(rgb));
        self.current_color = rgb;
    }

    fn normal(&mut self, normal: Vec3) {
        self.commands.push(GraphicsCommand::Normal(normal));
        self.current_normal = normal;
    }

    fn vertex(&mut self, position: Vec3) {
        self.commands.push(GraphicsCommand::Vertex(position));
        if !self.batch_open {
            return self.reject("vertex outside a triangle batch");
        }
        let eye = self.model_view.transform_point3(position);
        self.vertices.push(Vertex {
            position: position.to_array(),
            eye_position: eye.to_array(),
            color: self.current_color.to_array(),
            normal: self.current_normal.to_array(),
        });
        self.batch_vertices += 1;
        self.stats.vertices += 1;
    }

    fn end_triangles(&mut self) {
        self.commands.push(GraphicsCommand::EndTriangles);
        if !self.batch_open {
            return self.reject("end_triangles without begin_triangles");
        }
        if self.batch_vertices % 3 != 0 {
            crate::sp_warn!(SOURCE, "Triangle batch ended with {} dangling vertices", self.batch_vertices % 3);
        }
        self.stats.triangles += self.batch_vertices / 3;
        self.stats.draw_calls += 1;
        self.batch_open = false;
        self.batch_vertices = 0;
    }
}

#[cfg(test)]
#[path = "software_graphics_tests.rs"]
mod tests;
