//! Banner and screen-shake state consumed by the renderer.

use neonfall_core::state::BannerView;

/// Transient presentation effects owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct Effects {
    banner_text: Option<String>,
    banner_timer: f32,
    shake_timer: f32,
    shake_magnitude: f32,
}

impl Effects {
    /// Replaces the current banner.
    pub fn banner(&mut self, text: impl Into<String>, duration: f32) {
        self.banner_text = Some(text.into());
        self.banner_timer = duration;
    }

    /// Starts a screen shake; a stronger shake replaces a weaker one.
    pub fn shake(&mut self, duration: f32, magnitude: f32) {
        self.shake_timer = duration;
        self.shake_magnitude = magnitude;
    }

    pub fn tick(&mut self, delta: f32) {
        if self.banner_timer > 0.0 {
            self.banner_timer -= delta;
            if self.banner_timer <= 0.0 {
                self.banner_text = None;
            }
        }
        if self.shake_timer > 0.0 {
            self.shake_timer -= delta;
        }
    }

    pub fn banner_view(&self) -> Option<BannerView> {
        self.banner_text.as_ref().map(|text| BannerView {
            text: text.clone(),
            timer: self.banner_timer,
        })
    }

    /// Shake magnitude for this frame; zero when the shake has decayed.
    pub fn shake_magnitude(&self) -> f32 {
        if self.shake_timer > 0.0 {
            self.shake_magnitude
        } else {
            0.0
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
