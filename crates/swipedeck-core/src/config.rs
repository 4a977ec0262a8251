//! Swipe engine configuration.

use swipedeck_animation::Easing;

/// Immutable configuration consumed at engine construction.
///
/// Distances are in the same layout-independent units as the drag deltas
/// fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal displacement for a release to commit a decision.
    /// A release at exactly this distance settles back (strict inequality).
    pub commit_distance: f32,
    /// Horizontal distance a committed card flies to before removal.
    pub fly_out_distance: f32,
    /// Duration of the settle / fly-out animation in milliseconds.
    pub settle_duration_millis: u64,
    /// Rotation saturates at this many degrees in either direction.
    pub max_rotation_degrees: f32,
    /// Horizontal offset is divided by this to derive the rotation angle.
    pub rotation_divisor: f32,
    /// Easing applied to the settle / fly-out animation.
    pub settle_easing: Easing,
}

impl SwipeConfig {
    /// Override the commit threshold.
    pub fn with_commit_distance(mut self, distance: f32) -> Self {
        self.commit_distance = distance;
        self
    }

    /// Override the fly-out distance.
    pub fn with_fly_out_distance(mut self, distance: f32) -> Self {
        self.fly_out_distance = distance;
        self
    }

    /// Override the settle / fly-out duration.
    pub fn with_settle_duration(mut self, millis: u64) -> Self {
        self.settle_duration_millis = millis;
        self
    }

    /// Override the settle / fly-out easing.
    pub fn with_settle_easing(mut self, easing: Easing) -> Self {
        self.settle_easing = easing;
        self
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_distance: 300.0,
            fly_out_distance: 1000.0,
            settle_duration_millis: 300,
            max_rotation_degrees: 40.0,
            rotation_divisor: 60.0,
            settle_easing: Easing::FastOutSlowIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_geometry() {
        let config = SwipeConfig::default();
        assert_eq!(config.commit_distance, 300.0);
        assert_eq!(config.fly_out_distance, 1000.0);
        assert_eq!(config.settle_duration_millis, 300);
        assert_eq!(config.max_rotation_degrees, 40.0);
        assert_eq!(config.rotation_divisor, 60.0);
    }

    #[test]
    fn builders_override_single_fields() {
        let config = SwipeConfig::default()
            .with_commit_distance(120.0)
            .with_settle_duration(150);
        assert_eq!(config.commit_distance, 120.0);
        assert_eq!(config.settle_duration_millis, 150);
        assert_eq!(config.fly_out_distance, 1000.0);
    }
}
