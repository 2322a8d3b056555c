//! Free-fly camera.
//!
//! The camera only does the math: whoever owns the window fills a
//! [`CameraInputs`] every frame and hands it to [`Camera::update_free_fly`].

use cgmath::{Deg, InnerSpace, Matrix4, Rad, Vector3};

use crate::calc;

/// Per-frame input snapshot driving the camera.
#[derive(Clone, Debug, Default)]
pub struct CameraInputs {
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Mouse movement in pixels since the previous frame.
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub move_forward: bool,
    pub move_backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    /// Multiplies the movement speed while held.
    pub boost: bool,
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vector3<f32>,
    /// Rotation around the world Y axis. Zero looks down -Z.
    pub yaw: Rad<f32>,
    /// Rotation around the camera X axis, kept within (-90°, 90°).
    pub pitch: Rad<f32>,
    /// Units per second.
    pub speed: f32,
    /// Radians per pixel of mouse movement.
    pub sensitivity: f32,
}

const BOOST_FACTOR: f32 = 4.0;
const PITCH_LIMIT: Deg<f32> = Deg(89.0);

impl Camera {
    pub fn new<P: Into<Vector3<f32>>, Y: Into<Rad<f32>>, T: Into<Rad<f32>>>(
        position: P,
        yaw: Y,
        pitch: T,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
            speed: 2.0,
            sensitivity: 0.002,
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        Vector3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    pub fn right(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        Vector3::new(cos_yaw, 0.0, -sin_yaw)
    }

    pub fn update_free_fly(&mut self, inputs: &CameraInputs) {
        self.yaw -= Rad(inputs.mouse_dx * self.sensitivity);
        let limit: Rad<f32> = PITCH_LIMIT.into();
        self.pitch = Rad(calc::clamp(
            self.pitch.0 - inputs.mouse_dy * self.sensitivity,
            -limit.0,
            limit.0,
        ));

        let axis = |positive: bool, negative: bool| match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        let direction = self.forward() * axis(inputs.move_forward, inputs.move_backward)
            + self.right() * axis(inputs.strafe_right, inputs.strafe_left)
            + Vector3::unit_y() * axis(inputs.move_up, inputs.move_down);

        if direction.magnitude2() > 0.0 {
            let boost = if inputs.boost { BOOST_FACTOR } else { 1.0 };
            self.position += direction.normalize() * self.speed * boost * inputs.delta_time;
        }
    }

    /// World to view transform.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        calc::mat4_rotate_x(-self.pitch.0)
            * calc::mat4_rotate_y(-self.yaw.0)
            * calc::mat4_translate(-self.position)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new((0.0, 0.0, 2.0), Rad(0.0), Rad(0.0))
    }
}
