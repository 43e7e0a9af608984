/// Graphics collaborator - fixed-function state API renderers draw through
///
/// Mirrors the immediate-mode subset the sample renderers need: matrix
/// selection and composition, polygon fill mode, perspective projection and
/// per-vertex triangle submission. All calls are infallible; implementations
/// absorb misuse instead of reporting it.

use glam::Vec3;

/// Matrix targeted by subsequent matrix calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    ModelView,
    Projection,
}

/// Polygon faces affected by a polygon mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

/// Polygon rasterization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    Point,
    Line,
    Fill,
}

/// Graphics-state API consumed by renderers
pub trait GraphicsContext {
    /// Select the matrix targeted by `load_identity`, `translate`, `rotate`, `perspective`
    fn matrix_mode(&mut self, mode: MatrixMode);

    /// Reset the current matrix
    fn load_identity(&mut self);

    /// Post-multiply the current matrix by a translation
    fn translate(&mut self, offset: Vec3);

    /// Post-multiply the current matrix by a rotation of `degrees` about `axis`
    fn rotate(&mut self, degrees: f32, axis: Vec3);

    /// Set rasterization mode for `face`
    fn polygon_mode(&mut self, face: Face, mode: PolygonMode);

    /// Post-multiply the current matrix by a perspective projection
    ///
    /// # Arguments
    ///
    /// * `fovy_degrees` - Vertical field of view
    /// * `aspect` - Width / height
    /// * `near` - Near clip distance
    /// * `far` - Far clip distance
    fn perspective(&mut self, fovy_degrees: f32, aspect: f32, near: f32, far: f32);

    /// Open a triangle batch
    fn begin_triangles(&mut self);

    /// Current vertex colour (RGB)
    fn color(&mut self, rgb: Vec3);

    /// Current vertex normal
    fn normal(&mut self, normal: Vec3);

    /// Submit a vertex with the current colour and normal
    fn vertex(&mut self, position: Vec3);

    /// Close the triangle batch
    fn end_triangles(&mut self);
}
