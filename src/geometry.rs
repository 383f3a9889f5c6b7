use glam::{vec3, Vec3};

pub const SHAPE_RADIUS: f32 = 2.;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeForm {
    Tetrahedron,
    Octahedron,
    Icosahedron,
}

impl ShapeForm {
    pub const ALL: [ShapeForm; 3] = [
        ShapeForm::Tetrahedron,
        ShapeForm::Octahedron,
        ShapeForm::Icosahedron,
    ];

    pub fn vertices(self) -> Vec<Vec3> {
        let raw = match self {
            ShapeForm::Tetrahedron => vec![
                vec3(1., 1., 1.),
                vec3(1., -1., -1.),
                vec3(-1., 1., -1.),
                vec3(-1., -1., 1.),
            ],
            ShapeForm::Octahedron => vec![
                vec3(1., 0., 0.),
                vec3(-1., 0., 0.),
                vec3(0., 1., 0.),
                vec3(0., -1., 0.),
                vec3(0., 0., 1.),
                vec3(0., 0., -1.),
            ],
            ShapeForm::Icosahedron => {
                let phi = (1. + 5f32.sqrt()) / 2.;
                vec![
                    vec3(0., 1., phi),
                    vec3(0., 1., -phi),
                    vec3(0., -1., phi),
                    vec3(0., -1., -phi),
                    vec3(1., phi, 0.),
                    vec3(1., -phi, 0.),
                    vec3(-1., phi, 0.),
                    vec3(-1., -phi, 0.),
                    vec3(phi, 0., 1.),
                    vec3(-phi, 0., 1.),
                    vec3(phi, 0., -1.),
                    vec3(-phi, 0., -1.),
                ]
            }
        };

        raw.into_iter()
            .map(|v| v.normalize() * SHAPE_RADIUS)
            .collect()
    }

    // In a regular polyhedron every edge connects a nearest-neighbor pair,
    // so the edge list falls out of the minimal pairwise distance.
    pub fn edges(self) -> Vec<[u16; 2]> {
        let vertices = self.vertices();

        let mut min_distance = f32::MAX;
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                min_distance = min_distance.min(a.distance(*b));
            }
        }

        let mut edges = Vec::new();
        for (i, a) in vertices.iter().enumerate() {
            for (j, b) in vertices.iter().enumerate().skip(i + 1) {
                if a.distance(*b) <= min_distance * 1.01 {
                    edges.push([i as u16, j as u16]);
                }
            }
        }
        edges
    }
}
