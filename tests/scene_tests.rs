use emberfield::entity::{
    ParticleField, Pointer, Scene, CAMERA_DISTANCE, PARTICLE_COUNT, POINTER_PARALLAX, SHAPE_COUNT,
};
use glam::{vec3, Vec4};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

fn seeded_scene(seed: u64) -> Scene {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    Scene::new(16. / 9., &mut rng)
}

#[cfg(test)]
mod scene_tests {
    use super::*;

    #[test]
    fn test_scene_population() {
        let scene = seeded_scene(42);

        assert_eq!(scene.particles.positions.len(), PARTICLE_COUNT);
        assert_eq!(scene.shapes.len(), SHAPE_COUNT);
    }

    #[test]
    fn test_particle_placement_stays_in_cube() {
        let scene = seeded_scene(42);

        for position in &scene.particles.positions {
            assert!(position.x.abs() <= 50., "x out of bounds: {}", position.x);
            assert!(position.y.abs() <= 50., "y out of bounds: {}", position.y);
            assert!(position.z.abs() <= 50., "z out of bounds: {}", position.z);
        }
    }

    #[test]
    fn test_shape_placement_stays_in_box() {
        let scene = seeded_scene(42);

        for shape in &scene.shapes {
            assert!(shape.position.x.abs() <= 40.);
            assert!(shape.position.y.abs() <= 40.);
            assert!(shape.position.z.abs() <= 25.);
        }
    }

    #[test]
    fn test_shape_rates_increase_with_index() {
        let scene = seeded_scene(42);

        for (i, pair) in scene.shapes.windows(2).enumerate() {
            assert!(
                pair[1].rate > pair[0].rate,
                "shape {} rate not above shape {}",
                i + 1,
                i
            );
        }

        for (i, shape) in scene.shapes.iter().enumerate() {
            let expected = 0.005 + i as f32 * 0.001;
            assert!((shape.rate - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_particle_rotation_accumulates_fixed_deltas() {
        let mut scene = seeded_scene(42);

        for frame in 1..=3 {
            let before_x = scene.particles.rotation_x;
            let before_y = scene.particles.rotation_y;

            scene.advance(Pointer::default());

            assert!(scene.particles.rotation_x > before_x);
            assert!(scene.particles.rotation_y > before_y);
            assert!((scene.particles.rotation_x - frame as f32 * ParticleField::DELTA_X).abs() < 1e-6);
            assert!((scene.particles.rotation_y - frame as f32 * ParticleField::DELTA_Y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shape_rotation_advances_by_rate() {
        let mut scene = seeded_scene(42);
        let initial: Vec<(f32, f32)> = scene
            .shapes
            .iter()
            .map(|s| (s.rotation_x, s.rotation_y))
            .collect();

        scene.advance(Pointer::default());

        for (shape, (x0, y0)) in scene.shapes.iter().zip(initial) {
            assert!((shape.rotation_x - (x0 + shape.rate)).abs() < 1e-6);
            assert!((shape.rotation_y - (y0 + shape.rate)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_particle_positions_immutable_after_creation() {
        let mut scene = seeded_scene(42);
        let before = scene.particles.positions.clone();

        for _ in 0..10 {
            scene.advance(Pointer { x: 0.3, y: -0.7 });
        }

        assert_eq!(scene.particles.positions, before);
    }

    #[test]
    fn test_camera_is_pure_function_of_pointer() {
        let mut scene = seeded_scene(42);
        let pointer = Pointer { x: 0.4, y: -0.2 };

        scene.advance(pointer);

        assert!((scene.camera.position.x - pointer.x * POINTER_PARALLAX).abs() < 1e-6);
        assert!((scene.camera.position.y - pointer.y * POINTER_PARALLAX).abs() < 1e-6);
        assert!((scene.camera.position.z - CAMERA_DISTANCE).abs() < 1e-6);

        // A repeated sample must not drift the camera further.
        scene.advance(pointer);

        assert!((scene.camera.position.x - pointer.x * POINTER_PARALLAX).abs() < 1e-6);
        assert!((scene.camera.position.y - pointer.y * POINTER_PARALLAX).abs() < 1e-6);
    }

    #[test]
    fn test_centered_pointer_keeps_camera_at_rest() {
        let mut scene = seeded_scene(42);
        let pointer = Pointer::from_viewport(400., 300., 800, 600);

        assert!(pointer.x.abs() < 1e-6);
        assert!(pointer.y.abs() < 1e-6);

        scene.advance(pointer);

        assert!(scene.camera.position.x.abs() < 1e-6);
        assert!(scene.camera.position.y.abs() < 1e-6);
        assert!((scene.camera.position.z - CAMERA_DISTANCE).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_normalization_spans_viewport() {
        let top_left = Pointer::from_viewport(0., 0., 800, 600);
        assert!((top_left.x + 1.).abs() < 1e-6);
        assert!((top_left.y - 1.).abs() < 1e-6);

        let bottom_right = Pointer::from_viewport(800., 600., 800, 600);
        assert!((bottom_right.x - 1.).abs() < 1e-6);
        assert!((bottom_right.y + 1.).abs() < 1e-6);
    }

    #[test]
    fn test_camera_looks_at_origin() {
        let mut scene = seeded_scene(42);
        scene.advance(Pointer { x: 0.8, y: 0.5 });

        // The origin must land on the view-space -z axis regardless of the
        // camera's parallax offset.
        let origin = scene.camera.view_matrix() * Vec4::new(0., 0., 0., 1.);

        assert!(origin.x.abs() < 1e-4);
        assert!(origin.y.abs() < 1e-4);
        assert!(origin.z < 0.);
    }

    #[test]
    fn test_projection_tracks_aspect_ratio() {
        let mut scene = seeded_scene(42);

        scene.camera.aspect_ratio = 800. / 600.;
        let narrow = scene.camera.projection_matrix();

        scene.camera.aspect_ratio = 1600. / 600.;
        let wide = scene.camera.projection_matrix();

        // Vertical scale is aspect-independent, horizontal scale is not.
        assert!((narrow.y_axis.y - wide.y_axis.y).abs() < 1e-6);
        assert!((narrow.x_axis.x - wide.x_axis.x * 2.).abs() < 1e-6);
    }

    #[test]
    fn test_seeded_layout_is_reproducible() {
        let a = seeded_scene(7);
        let b = seeded_scene(7);

        assert_eq!(a.particles.positions, b.particles.positions);
        assert_eq!(a.shapes, b.shapes);

        let c = seeded_scene(8);
        assert_ne!(a.particles.positions, c.particles.positions);
    }

    #[test]
    fn test_initial_camera_position() {
        let scene = seeded_scene(42);

        assert_eq!(scene.camera.position, vec3(0., 0., CAMERA_DISTANCE));
        assert_eq!(scene.camera.fov, 75.);
    }
}
