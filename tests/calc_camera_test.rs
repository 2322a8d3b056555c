use mesh_demos::{
    Deg, Matrix4, Rad, SquareMatrix, Vector3, Vector4,
    calc,
    camera::{Camera, CameraInputs},
};

fn assert_vec_close(actual: Vector4<f32>, expected: Vector4<f32>) {
    for axis in 0..4 {
        assert!(
            (actual[axis] - expected[axis]).abs() < 1e-5,
            "expected {:?} but got {:?}",
            expected,
            actual
        );
    }
}

#[test]
fn should_wrap_negative_modulo() {
    assert_eq!(calc::modulo_i32(-1, 3), 2);
    assert_eq!(calc::modulo_i32(7, 3), 1);
    assert_eq!(calc::modulo_i32(-6, 3), 0);
    assert_eq!(calc::modulo_i32(i32::MIN, 7), i32::MIN.rem_euclid(7));
    assert_eq!(calc::modulo_f32(-5.5, 2.0), -1.5);
}

#[test]
fn should_clamp_and_convert_angles() {
    assert_eq!(calc::clamp(5.0, 0.0, 3.0), 3.0);
    assert_eq!(calc::clamp(-1.0, 0.0, 1.0), 0.0);
    assert_eq!(calc::clamp(0.25, 0.0, 1.0), 0.25);
    assert!((calc::to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
}

#[test]
fn should_compose_transforms() {
    let m = calc::mat4_translate(Vector3::new(1.0, 2.0, 3.0)) * calc::mat4_scale(2.0);
    assert_vec_close(m * Vector4::new(1.0, 1.0, 1.0, 1.0), Vector4::new(3.0, 4.0, 5.0, 1.0));
    assert_eq!(calc::mat4_identity() * m, m);
    assert_eq!(calc::mat4_identity(), Matrix4::identity());

    let quarter = std::f32::consts::FRAC_PI_2;
    assert_vec_close(
        calc::mat4_rotate_y(quarter) * Vector4::unit_x(),
        Vector4::new(0.0, 0.0, -1.0, 0.0),
    );
    assert_vec_close(
        calc::mat4_rotate_x(quarter) * Vector4::unit_y(),
        Vector4::new(0.0, 0.0, 1.0, 0.0),
    );
}

#[test]
fn should_match_gl_perspective() {
    let fov = calc::to_radians(60.0);
    let ours = calc::mat4_perspective(fov, 16.0 / 9.0, 0.1, 100.0);
    let reference = mesh_demos::perspective(Rad(fov), 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(ours, reference);

    // GL clip space: the near plane maps to depth -1, the far plane to +1.
    let near = ours * Vector4::new(0.0, 0.0, -0.1, 1.0);
    let far = ours * Vector4::new(0.0, 0.0, -100.0, 1.0);
    assert!((near.z / near.w + 1.0).abs() < 1e-4);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

#[test]
fn should_look_down_negative_z_by_default() {
    let camera = Camera::default();
    let view = camera.view_matrix();

    assert_vec_close(view * Vector4::new(0.0, 0.0, 0.0, 1.0), Vector4::new(0.0, 0.0, -2.0, 1.0));
    assert_vec_close(camera.forward().extend(0.0), Vector4::new(0.0, 0.0, -1.0, 0.0));
}

#[test]
fn should_keep_forward_on_view_axis() {
    let camera = Camera::new((1.0, -2.0, 3.0), Deg(35.0), Deg(-20.0));
    let ahead = camera.position + camera.forward();
    let in_view = camera.view_matrix() * ahead.extend(1.0);

    assert_vec_close(in_view, Vector4::new(0.0, 0.0, -1.0, 1.0));
}

#[test]
fn should_fly_forward() {
    let mut camera = Camera::default();
    camera.speed = 3.0;
    camera.update_free_fly(&CameraInputs {
        delta_time: 0.5,
        move_forward: true,
        ..Default::default()
    });

    assert!((camera.position.z - 0.5).abs() < 1e-5);
    assert_eq!(camera.position.x, 0.0);

    camera.update_free_fly(&CameraInputs {
        delta_time: 0.5,
        strafe_right: true,
        boost: true,
        ..Default::default()
    });
    assert!((camera.position.x - 6.0).abs() < 1e-5);
}

#[test]
fn should_clamp_pitch() {
    let mut camera = Camera::default();
    camera.update_free_fly(&CameraInputs {
        mouse_dy: -1.0e6,
        ..Default::default()
    });

    let limit: Rad<f32> = Deg(89.0).into();
    assert!((camera.pitch.0 - limit.0).abs() < 1e-6);
}
