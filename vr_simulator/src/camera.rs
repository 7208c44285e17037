use cgmath::{vec3, Deg, InnerSpace, Quaternion, Rotation3, Vector3, Zero};

/// Spectator camera driven in camera mode. Angles are degrees; yaw turns
/// about +Z and positive pitch looks up.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraContext {
    pub position: Vector3<f32>,
    pub pitch: f32,
    pub yaw: f32,
}

impl CameraContext {
    pub fn new() -> CameraContext {
        CameraContext {
            position: Vector3::zero(),
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    pub fn add_yaw(&mut self, degrees: f32) {
        self.yaw += degrees;
    }

    pub fn add_pitch(&mut self, degrees: f32, max_pitch: f32) {
        self.pitch = (self.pitch + degrees).clamp(-max_pitch, max_pitch);
    }

    pub fn forward(&self) -> Vector3<f32> {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let front = vec3(
            yaw.cos() * pitch.cos(),
            yaw.sin() * pitch.cos(),
            pitch.sin(),
        );

        front.normalize()
    }

    pub fn right(&self) -> Vector3<f32> {
        let yaw = self.yaw.to_radians();
        vec3(yaw.sin(), -yaw.cos(), 0.0)
    }

    pub fn rotation(&self) -> Quaternion<f32> {
        Quaternion::from_angle_z(Deg(self.yaw)) * Quaternion::from_angle_y(Deg(-self.pitch))
    }

    pub fn translate(&mut self, direction: Vector3<f32>, amount: f32) {
        self.position += direction * amount;
    }
}

impl Default for CameraContext {
    fn default() -> Self {
        CameraContext::new()
    }
}
