//! Real-time preview session.

use log::{info, trace};
use studio_core::{sorted_indices, ConfigError, Environment, Scene, SortOrder, StudioConfig};
use studio_math::Vec2;

use crate::camera::ViewCamera;
use crate::context::RenderContext;
use crate::draw::Frame;
use crate::lod::LodController;
use crate::shading::{draw_command, sky_fill};

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    /// Position in viewport pixels, origin top-left
    pub position: Vec2,
}

impl PointerInput {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

/// Projected painter's-algorithm renderer.
///
/// Holds the camera, the level-of-detail controller, and the sky settings
/// across frames. Call [`update`](Self::update) and then
/// [`render`](Self::render) once per frame.
pub struct RealtimeRenderer {
    camera: ViewCamera,
    lod: LodController,
    environment: Environment,
    viewport: Vec2,
    screen_translation: Vec2,
}

impl RealtimeRenderer {
    pub fn new(config: &StudioConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(
            "Real-time renderer {}x{}, polygon budget {}",
            config.viewport_width, config.viewport_height, config.polygon_budget
        );

        Ok(Self {
            camera: ViewCamera::new(config.base_camera_position, config.focal_length),
            lod: LodController::new(config.polygon_budget),
            environment: config.environment,
            viewport: config.viewport(),
            screen_translation: config.screen_translation,
        })
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn set_environment(&mut self, environment: Environment) -> Result<(), ConfigError> {
        environment.validate()?;
        self.environment = environment;
        Ok(())
    }

    /// Current detail level; negative while merging triangles.
    pub fn subdivision_amount(&self) -> i32 {
        self.lod.amount()
    }

    /// Primitive count of the last rendered frame.
    pub fn last_count(&self) -> usize {
        self.lod.last_count()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Change the viewport size, e.g. after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
    }

    /// Apply one frame's pointer position.
    pub fn update(&mut self, pointer: &PointerInput) {
        self.camera.update(pointer.position, self.viewport);
    }

    /// Zoom by a scroll-wheel delta.
    pub fn scroll(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    pub fn toggle_rotation_lock(&mut self) {
        self.camera.toggle_rotation_lock();
        info!(
            "Rotation {}",
            if self.camera.rotation_locked { "locked" } else { "unlocked" }
        );
    }

    /// Projection state for the current camera.
    pub fn context(&self) -> RenderContext {
        RenderContext::new(
            self.camera.position(),
            self.camera.rotation.matrix(),
            self.camera.focal_length,
            self.viewport,
            self.screen_translation,
        )
    }

    /// Render the scene as draw commands, farthest primitive first.
    ///
    /// Also advances the level-of-detail controller, so calling this twice
    /// without an `update` in between can still change the output.
    pub fn render(&mut self, scene: &Scene) -> Frame {
        let ctx = self.context();
        let primitives = self.lod.apply(scene.primitives());

        let depths: Vec<f32> = primitives
            .iter()
            .map(|p| p.distance_to(ctx.camera_position))
            .collect();
        let commands = sorted_indices(&depths, SortOrder::Descending)
            .into_iter()
            .map(|i| draw_command(&primitives[i], &ctx))
            .collect();

        trace!(
            "Frame: {} primitives at detail level {}",
            primitives.len(),
            self.lod.amount()
        );

        Frame {
            background: sky_fill(&self.environment),
            commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use studio_core::{Material, Sphere};
    use studio_math::Vec3;

    fn centred(renderer: &RealtimeRenderer) -> PointerInput {
        PointerInput {
            position: renderer.viewport() / 2.0,
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = StudioConfig {
            polygon_budget: 0,
            ..Default::default()
        };
        assert!(matches!(
            RealtimeRenderer::new(&config),
            Err(ConfigError::ZeroPolygonBudget)
        ));
    }

    #[test]
    fn test_empty_scene_is_background_only() {
        let mut renderer = RealtimeRenderer::new(&StudioConfig::default()).unwrap();
        renderer.update(&centred(&renderer));
        let frame = renderer.render(&Scene::new());

        assert!(frame.commands.is_empty());
        assert_eq!(frame.background, [136, 136, 231]);
    }

    #[test]
    fn test_farthest_drawn_first() {
        let mut scene = Scene::new();
        let near = Material::diffuse(Vec3::new(1.0, 0.0, 0.0));
        let far = Material::new(Vec3::new(0.0, 0.0, 1.0), 0.0, 1.0);
        scene.push(Sphere::new(Vec3::new(0.0, 0.0, 500.0), 10.0, near));
        scene.push(Sphere::new(Vec3::new(0.0, 0.0, -500.0), 10.0, far));

        let mut renderer = RealtimeRenderer::new(&StudioConfig::default()).unwrap();
        renderer.update(&centred(&renderer));
        let frame = renderer.render(&scene);

        assert_eq!(frame.commands.len(), 2);
        assert_eq!(frame.commands[0].colour(), [0, 0, 255]);
        assert!(matches!(frame.commands[1], DrawCommand::Circle { .. }));
    }

    #[test]
    fn test_scroll_and_lock() {
        let mut renderer = RealtimeRenderer::new(&StudioConfig::default()).unwrap();
        renderer.scroll(-1.0);
        assert_eq!(renderer.camera().focal_length, 280.0);

        renderer.toggle_rotation_lock();
        renderer.update(&PointerInput::new(0.0, 0.0));
        assert_eq!(renderer.context().rotation, studio_math::Mat3::IDENTITY);
    }

    #[test]
    fn test_set_environment_validates() {
        let mut renderer = RealtimeRenderer::new(&StudioConfig::default()).unwrap();
        assert!(renderer
            .set_environment(Environment::new(Vec3::ONE, -2.0))
            .is_err());

        renderer
            .set_environment(Environment::new(Vec3::ONE, 1.0))
            .unwrap();
        assert_eq!(renderer.render(&Scene::new()).background, [170, 170, 170]);
    }
}
