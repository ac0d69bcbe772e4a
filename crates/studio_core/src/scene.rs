//! Scene container and scene builders.
//!
//! A scene is an unordered bag of primitives as far as rendering goes:
//! both renderers order work by spatial distance, never by insertion.

use log::{debug, warn};
use studio_math::Vec3;

use crate::geometry::{cube, quad};
use crate::{Material, Primitive, Sphere, StudioConfig, Triangle};

/// Collection of primitives owned by the editor and read by the renderers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primitives(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// Scene the editor starts with: the demo scene or a placeholder.
    pub fn from_config(config: &StudioConfig) -> Self {
        if config.demo_scene {
            Self::demo()
        } else {
            Self::placeholder()
        }
    }

    /// Built-in demo: a distant emissive sun, three spheres and a cube.
    pub fn demo() -> Self {
        let white = [255, 255, 255];
        let mut scene = Self::new();

        scene.push(Sphere::new(
            Vec3::new(-2400.0, -1200.0, -5000.0),
            2000.0,
            Material::from_rgb8(white, 0.0, 1.0),
        ));

        scene.push(Sphere::new(
            Vec3::new(-4.0, 12.0, 148.0),
            8.0,
            Material::from_rgb8(white, 0.9, 0.0),
        ));
        scene.push(Sphere::new(
            Vec3::new(16.0, 10.0, 148.0),
            10.0,
            Material::from_rgb8([255, 52, 80], 0.0, 0.6),
        ));
        scene.push(Sphere::new(
            Vec3::new(40.0, 8.0, 148.0),
            12.0,
            Material::from_rgb8([38, 136, 240], 0.0, 0.0),
        ));

        scene.extend(cube(
            10.0,
            Vec3::new(-20.0, 13.0, 148.0),
            Material::from_rgb8([0, 255, 255], 0.0, 0.0),
        ));

        debug!("Built demo scene with {} primitives", scene.len());
        scene
    }

    /// A single collapsed black quad.
    ///
    /// Keeps the real-time path's primitive list non-empty before the user
    /// adds anything.
    pub fn placeholder() -> Self {
        let mut scene = Self::new();
        scene.extend(quad(
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            Material::diffuse(Vec3::ZERO),
        ));
        scene
    }

    /// Append a primitive.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Append several primitives.
    pub fn extend<P: Into<Primitive>>(&mut self, primitives: impl IntoIterator<Item = P>) {
        self.primitives
            .extend(primitives.into_iter().map(Into::into));
    }

    /// Remove and return the primitive at `index`, if there is one.
    pub fn remove(&mut self, index: usize) -> Option<Primitive> {
        (index < self.primitives.len()).then(|| self.primitives.remove(index))
    }

    /// Add triangles from indexed mesh data.
    ///
    /// Every vertex is multiplied by `scale`. Faces referencing a vertex
    /// that does not exist are skipped. Returns the number of triangles added.
    pub fn add_indexed_mesh(
        &mut self,
        vertices: &[Vec3],
        faces: &[[usize; 3]],
        scale: f32,
        material: Material,
    ) -> usize {
        let before = self.primitives.len();

        for (face_index, face) in faces.iter().enumerate() {
            let Some([a, b, c]) = lookup_face(vertices, face) else {
                warn!("Skipping face {face_index}: index out of range {face:?}");
                continue;
            };
            self.push(Triangle::new(a * scale, b * scale, c * scale, material));
        }

        let added = self.primitives.len() - before;
        debug!("Added {added} triangles from mesh with {} vertices", vertices.len());
        added
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Count of triangle primitives.
    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_triangle()).count()
    }
}

fn lookup_face(vertices: &[Vec3], face: &[usize; 3]) -> Option<[Vec3; 3]> {
    Some([
        *vertices.get(face[0])?,
        *vertices.get(face[1])?,
        *vertices.get(face[2])?,
    ])
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
