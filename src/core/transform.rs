use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local transform of a scene object.
///
/// `rotation` holds Euler angles in radians (x = pitch, y = yaw, z = roll),
/// composed yaw-first so that drag rotation always turns the ring about the
/// world vertical axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, scale: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.rotation.y
    }

    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        self.rotation.y = yaw;
    }

    /// Per-component linear interpolation; each Euler axis is blended
    /// independently.
    pub fn lerp(&self, to: &Transform, t: f32) -> Transform {
        Transform {
            position: self.position.lerp(to.position, t),
            scale: self.scale.lerp(to.scale, t),
            rotation: self.rotation.lerp(to.rotation, t),
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// Object-to-world matrix (scale, then rotate, then translate).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}
