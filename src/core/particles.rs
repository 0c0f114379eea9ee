//! Particle field model: point cloud generation and the pointer-following camera.
//!
//! The WebGL renderer in `ui::enhance::particles` only uploads what is built here.

use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn lerp(&self, other: &Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// Flat position and color buffers, three floats per particle
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl PointCloud {
    /// Sample `count` points in a cube of edge `extent` centred on the origin,
    /// each colored somewhere between `from` and `to`.
    pub fn generate<R: Rng>(count: usize, extent: f32, from: Rgb, to: Rgb, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);

        for _ in 0..count {
            for _ in 0..3 {
                positions.push((rng.r#gen::<f32>() - 0.5) * extent);
            }
            let color = from.lerp(&to, rng.r#gen::<f32>());
            colors.extend_from_slice(&[color.r, color.g, color.b]);
        }

        Self { positions, colors }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }
}

/// Canvas size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.height <= 0.0 {
            return 1.0;
        }
        (self.width / self.height) as f32
    }

    /// Drawing buffer size, with the pixel ratio capped at `max_ratio`
    pub fn buffer_size(&self, max_ratio: f64) -> (u32, u32) {
        let ratio = self.device_pixel_ratio.clamp(1.0, max_ratio.max(1.0));
        (
            (self.width * ratio).round().max(0.0) as u32,
            (self.height * ratio).round().max(0.0) as u32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigSettings {
    pub camera_distance: f32,
    /// Fraction of the remaining distance the camera covers per frame
    pub smoothing: f32,
    pub pointer_influence: f32,
    /// Radians added to the cloud's (x, y) rotation per frame
    pub rotation_step: Vec2,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            camera_distance: 5.0,
            smoothing: 0.05,
            pointer_influence: 0.5,
            rotation_step: Vec2::new(0.0005, 0.001),
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Slowly rotating cloud with a camera that eases toward the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    settings: RigSettings,
    pointer: Vec2,
    camera: Vec3,
    rotation: Vec2,
}

impl CameraRig {
    pub fn new(settings: RigSettings) -> Self {
        Self {
            camera: Vec3::new(0.0, 0.0, settings.camera_distance),
            settings,
            pointer: Vec2::ZERO,
            rotation: Vec2::ZERO,
        }
    }

    /// Record a pointer position in client pixels, normalized to -1..=1 with y up
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.pointer = Vec2::new(
            ((client_x / width) * 2.0 - 1.0) as f32,
            (-(client_y / height) * 2.0 + 1.0) as f32,
        );
    }

    /// Advance one frame
    pub fn step(&mut self) {
        self.rotation += self.settings.rotation_step;

        let target = self.pointer * self.settings.pointer_influence;
        self.camera.x += (target.x - self.camera.x) * self.settings.smoothing;
        self.camera.y += (target.y - self.camera.y) * self.settings.smoothing;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation.y) * Mat4::from_rotation_x(self.rotation.x)
    }

    /// The camera always looks at the scene origin
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.camera, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.settings.fov_degrees.to_radians(),
            aspect,
            self.settings.near,
            self.settings.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cloud(count: usize) -> PointCloud {
        let mut rng = StdRng::seed_from_u64(7);
        PointCloud::generate(
            count,
            20.0,
            Rgb::from_hex(0x8B5CF6),
            Rgb::from_hex(0x3B82F6),
            &mut rng,
        )
    }

    #[test]
    fn test_cloud_has_requested_count() {
        let cloud = cloud(1000);
        assert_eq!(cloud.len(), 1000);
        assert_eq!(cloud.positions().len(), 3000);
        assert_eq!(cloud.colors().len(), 3000);
        assert!(self::cloud(0).is_empty());
    }

    #[test]
    fn test_positions_stay_in_cube() {
        assert!(cloud(500).positions().iter().all(|p| (-10.0..=10.0).contains(p)));
    }

    #[test]
    fn test_colors_lie_between_endpoints() {
        let from = Rgb::from_hex(0x8B5CF6);
        let to = Rgb::from_hex(0x3B82F6);
        for rgb in cloud(200).colors().chunks(3) {
            // Red falls and green rises from violet to blue
            assert!(rgb[0] <= from.r + f32::EPSILON && rgb[0] >= to.r - f32::EPSILON);
            assert!(rgb[1] >= from.g - f32::EPSILON && rgb[1] <= to.g + f32::EPSILON);
        }
    }

    #[test]
    fn test_hex_color() {
        let c = Rgb::from_hex(0xFF0080);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_normalization() {
        let mut rig = CameraRig::new(RigSettings::default());
        rig.pointer_moved(0.0, 0.0, 1000.0, 500.0);
        assert_eq!(rig.pointer(), Vec2::new(-1.0, 1.0));
        rig.pointer_moved(500.0, 250.0, 1000.0, 500.0);
        assert_eq!(rig.pointer(), Vec2::ZERO);
        rig.pointer_moved(1000.0, 500.0, 0.0, 500.0);
        assert_eq!(rig.pointer(), Vec2::ZERO);
    }

    #[test]
    fn test_camera_eases_toward_pointer() {
        let mut rig = CameraRig::new(RigSettings::default());
        rig.pointer_moved(1000.0, 0.0, 1000.0, 1000.0);
        rig.step();
        assert!((rig.camera().x - 0.025).abs() < 1e-6);
        assert!((rig.camera().y - 0.025).abs() < 1e-6);
        assert_eq!(rig.camera().z, 5.0);

        for _ in 0..500 {
            rig.step();
        }
        assert!((rig.camera().x - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut rig = CameraRig::new(RigSettings::default());
        rig.step();
        rig.step();
        assert!((rig.rotation().x - 0.001).abs() < 1e-7);
        assert!((rig.rotation().y - 0.002).abs() < 1e-7);
    }

    #[test]
    fn test_viewport_buffer_size_caps_ratio() {
        let viewport = Viewport {
            width: 1280.0,
            height: 720.0,
            device_pixel_ratio: 3.0,
        };
        assert_eq!(viewport.buffer_size(2.0), (2560, 1440));
        assert!((viewport.aspect() - 16.0 / 9.0).abs() < 1e-6);

        let empty = Viewport {
            width: 100.0,
            height: 0.0,
            device_pixel_ratio: 1.0,
        };
        assert_eq!(empty.aspect(), 1.0);
    }
}
