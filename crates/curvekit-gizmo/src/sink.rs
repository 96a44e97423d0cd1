use curvekit_math::Point3;

/// Linear RGB.
pub type Color = [f32; 3];

pub mod palette {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0];
}

/// Immediate-mode drawing target, e.g. an editor's gizmo API.
///
/// Primitives use the most recently set color.
pub trait GizmoSink {
    fn set_color(&mut self, color: Color);
    fn draw_line(&mut self, from: Point3, to: Point3);
    fn draw_wire_sphere(&mut self, center: Point3, radius: f64);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum GizmoCommand {
    Color(Color),
    Line { from: Point3, to: Point3 },
    WireSphere { center: Point3, radius: f64 },
}

/// Sink that stores every call, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<GizmoCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            GizmoCommand::Line { from, to } => Some((from, to)),
            _ => None,
        })
    }

    pub fn spheres(&self) -> impl Iterator<Item = (Point3, f64)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            GizmoCommand::WireSphere { center, radius } => Some((center, radius)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl GizmoSink for CommandRecorder {
    fn set_color(&mut self, color: Color) {
        self.commands.push(GizmoCommand::Color(color));
    }

    fn draw_line(&mut self, from: Point3, to: Point3) {
        self.commands.push(GizmoCommand::Line { from, to });
    }

    fn draw_wire_sphere(&mut self, center: Point3, radius: f64) {
        self.commands.push(GizmoCommand::WireSphere { center, radius });
    }
}
