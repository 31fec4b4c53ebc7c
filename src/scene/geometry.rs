//! Pure 3D math for the hero decoration: ring outlines, Euler rotation,
//! perspective projection. Nothing here touches the DOM.

use std::f64::consts::FRAC_PI_4;
use std::rc::Rc;

pub const RING_SEGMENTS: usize = 200;
pub const SPIN_PER_FRAME: f64 = 0.005;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

/// Rotation angles in radians, applied in XYZ order (matrix `Rx * Ry * Rz`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn rotate(&self, v: Vec3) -> Vec3 {
        // z first, then y, then x
        let (sz, cz) = self.z.sin_cos();
        let v = Vec3::new(v.x * cz - v.y * sz, v.x * sz + v.y * cz, v.z);
        let (sy, cy) = self.y.sin_cos();
        let v = Vec3::new(v.x * cy + v.z * sy, v.y, -v.x * sy + v.z * cy);
        let (sx, cx) = self.x.sin_cos();
        Vec3::new(v.x, v.y * cx - v.z * sx, v.y * sx + v.z * cx)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Thin circular outline in the local XY plane, shared by every ring.
#[derive(Debug, PartialEq)]
pub struct RingGeometry {
    points: Vec<Vec3>,
}

impl RingGeometry {
    pub fn new(radius: f64, segments: usize) -> Self {
        let segments = segments.max(3);
        let points = (0..segments)
            .map(|i| {
                let theta = i as f64 / segments as f64 * std::f64::consts::TAU;
                Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

#[derive(Debug)]
pub struct Ring {
    geometry: Rc<RingGeometry>,
    pub position: Vec3,
    pub rotation: Euler,
    pub spin: Axis,
}

impl Ring {
    pub fn step(&mut self) {
        match self.spin {
            Axis::X => self.rotation.x += SPIN_PER_FRAME,
            Axis::Y => self.rotation.y += SPIN_PER_FRAME,
        }
    }

    pub fn world_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.geometry
            .points()
            .iter()
            .map(move |p| self.rotation.rotate(*p).add(self.position))
    }
}

/// Perspective camera on the z axis looking toward -z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub z: f64,
}

impl Camera {
    pub fn new(aspect: f64) -> Self {
        Self {
            fov_degrees: 75.0,
            aspect,
            near: 0.1,
            far: 1000.0,
            z: 5.0,
        }
    }

    /// Pixel coordinates of `p` on a `width` x `height` surface, or `None`
    /// when the point falls outside the near/far range.
    pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<(f64, f64)> {
        let depth = self.z - p.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let ndc_x = focal / self.aspect * p.x / depth;
        let ndc_y = focal * p.y / depth;
        Some(((ndc_x + 1.0) / 2.0 * width, (1.0 - ndc_y) / 2.0 * height))
    }
}

/// The four spinning rings and the camera that looks at them.
#[derive(Debug)]
pub struct Scene {
    geometry: Rc<RingGeometry>,
    rings: Vec<Ring>,
    camera: Camera,
}

impl Scene {
    pub fn new(aspect: f64) -> Self {
        let geometry = Rc::new(RingGeometry::new(1.0, RING_SEGMENTS));
        let lifted = Vec3::new(0.0, 0.5, 0.0);
        let ring = |rotation: Euler, spin: Axis| Ring {
            geometry: Rc::clone(&geometry),
            position: lifted,
            rotation,
            spin,
        };
        let rings = vec![
            ring(Euler::new(-FRAC_PI_4, 0.0, FRAC_PI_4), Axis::Y),
            ring(Euler::new(FRAC_PI_4, 0.0, -FRAC_PI_4), Axis::Y),
            ring(Euler::new(0.0, -FRAC_PI_4, FRAC_PI_4), Axis::X),
            ring(Euler::new(0.0, FRAC_PI_4, -FRAC_PI_4), Axis::X),
        ];
        Self {
            geometry,
            rings,
            camera: Camera::new(aspect),
        }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn geometry(&self) -> &Rc<RingGeometry> {
        &self.geometry
    }

    pub fn step(&mut self) {
        for ring in &mut self.rings {
            ring.step();
        }
    }

    /// One closed polyline per ring in integer pixel coordinates.
    pub fn outlines(&self, width: u32, height: u32) -> Vec<Vec<(i32, i32)>> {
        let (w, h) = (f64::from(width), f64::from(height));
        self.rings
            .iter()
            .map(|ring| {
                let mut line: Vec<(i32, i32)> = ring
                    .world_points()
                    .filter_map(|p| self.camera.project(p, w, h))
                    .map(|(x, y)| (x.round() as i32, y.round() as i32))
                    .collect();
                if let Some(first) = line.first().copied() {
                    line.push(first);
                }
                line
            })
            .collect()
    }
}
