//! Line and perspective switching through the coordinator events.
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use rstest::{fixture, rstest};
use test_utils::{advance, assert_vec3_near, tunnel_test_app, CapturedSceneErrors, TestRig};
use tunnelview::scene::validate_scene_system;
use tunnelview::spawn_world::BUTTON_NAMES;
use tunnelview::{
    CharacterController, LaserPointer, PointerClick, SceneCoordinator, SceneError, SceneRig,
    SwitchLine, SwitchPerspective, VerticalMotion, Waypoint, Waypoints,
};

const RIGHT: Vec3 = Vec3::new(2.0, 0.0, 0.0);
const LEFT: Vec3 = Vec3::new(-2.0, 0.0, 0.0);
const INSIDE: Vec3 = Vec3::new(0.0, 0.0, -12.0);
const OUTSIDE: Vec3 = Vec3::new(0.0, 40.0, 8.0);

#[fixture]
fn waypoints() -> Waypoints {
    Waypoints {
        right_line_start: Some(RIGHT),
        left_line_start: Some(LEFT),
        inside: Some(Waypoint::at(INSIDE)),
        outside: Some(Waypoint::new(OUTSIDE, Quat::from_rotation_y(0.5))),
    }
}

fn trigger<'a, E: Event<Trigger<'a>: Default>>(rig: &mut TestRig, event: E) {
    rig.app.world_mut().trigger(event);
    rig.app.world_mut().flush();
}

fn coordinator(rig: &TestRig) -> SceneCoordinator {
    *rig.app.world().resource::<SceneCoordinator>()
}

fn can_fly(rig: &TestRig) -> bool {
    rig.app
        .world()
        .get::<VerticalMotion>(rig.player())
        .expect("player should have vertical motion")
        .can_move_vertically()
}

fn errors(rig: &mut TestRig) -> Vec<SceneError> {
    std::mem::take(
        &mut rig
            .app
            .world_mut()
            .resource_mut::<CapturedSceneErrors>()
            .0,
    )
}

#[rstest]
fn complete_scene_validates_cleanly(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, Some(0.0));
    assert_eq!(errors(&mut rig), Vec::new());
}

#[rstest]
fn switch_line_alternates_between_starts(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);

    trigger(&mut rig, SwitchLine);
    assert_vec3_near(rig.player_transform().translation, LEFT);
    assert!(!coordinator(&rig).on_right_line());

    trigger(&mut rig, SwitchLine);
    assert_vec3_near(rig.player_transform().translation, RIGHT);
    assert!(coordinator(&rig).on_right_line());
}

#[rstest]
fn switch_perspective_is_its_own_inverse(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);

    trigger(&mut rig, SwitchPerspective);
    let outside = rig.player_transform();
    assert_vec3_near(outside.translation, OUTSIDE);
    assert!((outside.rotation.angle_between(Quat::from_rotation_y(0.5))) < 1e-4);
    assert!(coordinator(&rig).is_outside());
    assert!(can_fly(&rig));

    trigger(&mut rig, SwitchPerspective);
    let inside = rig.player_transform();
    assert_vec3_near(inside.translation, INSIDE);
    assert!(inside.rotation.angle_between(Quat::IDENTITY) < 1e-4);
    assert!(!coordinator(&rig).is_outside());
    assert!(!can_fly(&rig));
}

#[rstest]
fn outside_viewpoint_holds_position_without_input(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, Some(0.0));
    trigger(&mut rig, SwitchPerspective);

    advance(&mut rig.app, 5);

    assert_vec3_near(rig.player_transform().translation, OUTSIDE);
}

#[rstest]
fn going_back_inside_restores_gravity(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, Some(-1.0));
    trigger(&mut rig, SwitchPerspective);
    trigger(&mut rig, SwitchPerspective);

    advance(&mut rig.app, 10);

    assert_vec3_near(
        rig.player_transform().translation,
        Vec3::new(INSIDE.x, -1.0, INSIDE.z),
    );
}

fn click_button(rig: &mut TestRig, name: &str) {
    let index = BUTTON_NAMES
        .iter()
        .position(|button| *button == name)
        .expect("button should be spawned");
    let hit = rig.spawned.buttons[index];
    let hand = rig.hand();
    trigger(rig, PointerClick { entity: hand, hit });
}

#[rstest]
fn switch_buttons_drive_the_coordinator(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);

    click_button(&mut rig, "SwitchLineButton");
    assert_vec3_near(rig.player_transform().translation, LEFT);

    click_button(&mut rig, "SwitchPerspectiveButton");
    assert_vec3_near(rig.player_transform().translation, OUTSIDE);

    let state = coordinator(&rig);
    assert!(!state.on_right_line());
    assert!(state.is_outside());
}

#[rstest]
fn missing_line_start_aborts_without_toggling(mut waypoints: Waypoints) {
    waypoints.left_line_start = None;
    let mut rig = tunnel_test_app(waypoints, None);
    let _ = errors(&mut rig);
    let before = rig.player_transform().translation;

    trigger(&mut rig, SwitchLine);

    assert_eq!(errors(&mut rig), vec![SceneError::LineStartsMissing]);
    assert_eq!(rig.player_transform().translation, before);
    assert!(coordinator(&rig).on_right_line());
}

#[rstest]
fn missing_viewpoint_aborts_without_toggling(mut waypoints: Waypoints) {
    waypoints.inside = None;
    let mut rig = tunnel_test_app(waypoints, None);
    let _ = errors(&mut rig);

    trigger(&mut rig, SwitchPerspective);

    assert_eq!(
        errors(&mut rig),
        vec![SceneError::PerspectiveWaypointsMissing {
            inside: false,
            outside: true,
        }]
    );
    assert!(!coordinator(&rig).is_outside());
    assert!(!can_fly(&rig));
}

#[rstest]
fn unregistered_player_is_reported(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);
    rig.app.world_mut().resource_mut::<SceneRig>().player = None;
    let _ = errors(&mut rig);

    trigger(&mut rig, SwitchLine);
    trigger(&mut rig, SwitchPerspective);

    assert_eq!(
        errors(&mut rig),
        vec![SceneError::PlayerMissing, SceneError::PlayerMissing]
    );
    let state = coordinator(&rig);
    assert!(state.on_right_line());
    assert!(!state.is_outside());
}

#[rstest]
fn player_without_movement_component_is_reported(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);
    let player = rig.player();
    rig.app.world_mut().entity_mut(player).remove::<VerticalMotion>();
    let _ = errors(&mut rig);

    trigger(&mut rig, SwitchPerspective);

    assert_eq!(errors(&mut rig), vec![SceneError::MovementMissing(player)]);
    assert!(!coordinator(&rig).is_outside());
}

#[rstest]
fn empty_scene_reports_every_missing_waypoint() {
    let mut rig = tunnel_test_app(Waypoints::default(), None);
    let reported = errors(&mut rig);
    assert!(reported.contains(&SceneError::LineStartsMissing));
    assert!(reported.contains(&SceneError::PerspectiveWaypointsMissing {
        inside: false,
        outside: false,
    }));
    assert!(!reported.contains(&SceneError::PlayerMissing));
}

#[rstest]
fn player_without_controller_cannot_switch_lines(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);
    let player = rig.player();
    rig.app
        .world_mut()
        .entity_mut(player)
        .remove::<CharacterController>();
    let _ = errors(&mut rig);
    let before = rig.player_transform().translation;

    trigger(&mut rig, SwitchLine);

    assert_eq!(errors(&mut rig), vec![SceneError::ControllerMissing(player)]);
    assert_eq!(rig.player_transform().translation, before);
    assert!(coordinator(&rig).on_right_line());
}

fn revalidate(rig: &mut TestRig) -> Vec<SceneError> {
    let _ = errors(rig);
    rig.app
        .world_mut()
        .run_system_once(validate_scene_system)
        .expect("validation should run");
    rig.app.world_mut().flush();
    errors(rig)
}

#[rstest]
fn startup_validation_reports_missing_hand(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);
    rig.app.world_mut().resource_mut::<SceneRig>().hand = None;

    assert_eq!(revalidate(&mut rig), vec![SceneError::HandMissing]);
}

#[rstest]
fn startup_validation_reports_hand_without_laser(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);
    let hand = rig.hand();
    rig.app.world_mut().entity_mut(hand).remove::<LaserPointer>();

    assert_eq!(
        revalidate(&mut rig),
        vec![SceneError::LaserPointerMissing(hand)]
    );
}

#[rstest]
fn startup_validation_reports_player_without_controller(waypoints: Waypoints) {
    let mut rig = tunnel_test_app(waypoints, None);
    let player = rig.player();
    rig.app
        .world_mut()
        .entity_mut(player)
        .remove::<CharacterController>();

    assert_eq!(
        revalidate(&mut rig),
        vec![SceneError::ControllerMissing(player)]
    );
}
