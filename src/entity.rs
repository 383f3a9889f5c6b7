use std::f32::consts::PI;

use glam::{const_vec3, vec3, EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

use crate::geometry::ShapeForm;

pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_SPREAD: f32 = 100.;
pub const PARTICLE_SIZE: f32 = 0.15;

pub const SHAPE_COUNT: usize = 8;
pub const SHAPE_SPREAD: Vec3 = const_vec3!([80., 80., 50.]);
pub const SHAPE_BASE_RATE: f32 = 0.005;
pub const SHAPE_RATE_STEP: f32 = 0.001;

pub const CAMERA_DISTANCE: f32 = 50.;
pub const POINTER_PARALLAX: f32 = 5.;

pub const EMBER: Vec3 = const_vec3!([0.890, 0.396, 0.082]);
pub const AMBIENT_GRAY: Vec3 = const_vec3!([0.251, 0.251, 0.251]);

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    // Viewport y grows downwards; scene y grows upwards.
    pub fn from_viewport(x: f64, y: f64, width: u32, height: u32) -> Self {
        Self {
            x: (x / width as f64) as f32 * 2. - 1.,
            y: -((y / height as f64) as f32 * 2. - 1.),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Camera {
    pub position: Vec3,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect_ratio, self.near, self.far)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Lights {
    pub point_position: Vec3,
    pub point_color: Vec3,
    pub ambient_color: Vec3,
}

#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub particle_size: f32,
}

impl ParticleField {
    pub const DELTA_X: f32 = 0.0005;
    pub const DELTA_Y: f32 = 0.001;

    fn new(rng: &mut impl Rng) -> Self {
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                vec3(
                    (rng.gen_range(0.0..1.0) - 0.5) * PARTICLE_SPREAD,
                    (rng.gen_range(0.0..1.0) - 0.5) * PARTICLE_SPREAD,
                    (rng.gen_range(0.0..1.0) - 0.5) * PARTICLE_SPREAD,
                )
            })
            .collect();

        Self {
            positions,
            rotation_x: 0.,
            rotation_y: 0.,
            particle_size: PARTICLE_SIZE,
        }
    }

    fn advance(&mut self) {
        self.rotation_y += Self::DELTA_Y;
        self.rotation_x += Self::DELTA_X;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation_x,
            self.rotation_y,
            0.,
        ))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WireShape {
    pub form: ShapeForm,
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rate: f32,
}

impl WireShape {
    fn new(index: usize, rng: &mut impl Rng) -> Self {
        let form = match rng.gen_range(0..3) {
            0 => ShapeForm::Tetrahedron,
            1 => ShapeForm::Octahedron,
            _ => ShapeForm::Icosahedron,
        };

        Self {
            form,
            position: vec3(
                (rng.gen_range(0.0..1.0) - 0.5) * SHAPE_SPREAD.x,
                (rng.gen_range(0.0..1.0) - 0.5) * SHAPE_SPREAD.y,
                (rng.gen_range(0.0..1.0) - 0.5) * SHAPE_SPREAD.z,
            ),
            rotation_x: rng.gen_range(0.0..PI),
            rotation_y: rng.gen_range(0.0..PI),
            rate: SHAPE_BASE_RATE + index as f32 * SHAPE_RATE_STEP,
        }
    }

    fn advance(&mut self) {
        self.rotation_x += self.rate;
        self.rotation_y += self.rate;
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.);
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Lights,
    pub particles: ParticleField,
    pub shapes: Vec<WireShape>,
}

impl Scene {
    pub fn new(aspect_ratio: f32, rng: &mut impl Rng) -> Self {
        Self {
            camera: Camera {
                position: vec3(0., 0., CAMERA_DISTANCE),
                fov: 75.,
                aspect_ratio,
                near: 0.1,
                far: 1000.,
            },
            lights: Lights {
                point_position: vec3(0., 0., CAMERA_DISTANCE),
                point_color: EMBER,
                ambient_color: AMBIENT_GRAY,
            },
            particles: ParticleField::new(rng),
            shapes: (0..SHAPE_COUNT).map(|i| WireShape::new(i, rng)).collect(),
        }
    }

    // One step of the redraw loop; deltas are per frame, not per second.
    pub fn advance(&mut self, pointer: Pointer) {
        self.particles.advance();

        for shape in &mut self.shapes {
            shape.advance();
        }

        self.camera.position.x = pointer.x * POINTER_PARALLAX;
        self.camera.position.y = pointer.y * POINTER_PARALLAX;
    }
}
