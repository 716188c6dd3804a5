use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::simulation::view::{Camera, Viewport};

const ZOOM_STEP: f64 = 0.1;
const MIN_ZOOM: f64 = 0.05;
const MAX_ZOOM: f64 = 10.0;

const HELP_TEXT: &str = "M - Spawn object at cursor\n\
N - Toggle collision\n\
P - Despawn all objects\n\
O - Continue/Pause the simulation\n\
H - Toggle this panel\n\
Drag your mouse to move cam\n\
Scroll to zoom";

/// Marker for the key-binding help panel.
#[derive(Component)]
struct HelpPanel;

/// Camera pan/zoom state driven by mouse input. Screen coordinates are
/// top-left origin throughout; the conversion to Bevy's centered world
/// space happens at the gizmo calls.
#[derive(Resource)]
struct ViewState {
    pan: NVec2,
    zoom: f64,
    dragging: bool,
    last_cursor: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan: NVec2::zeros(),
            zoom: 1.0,
            dragging: false,
            last_cursor: Vec2::ZERO,
        }
    }
}

impl ViewState {
    /// Camera for the current pan/zoom, centered in the window.
    fn camera(&self, width: f64, height: f64) -> Camera {
        Camera::rooted(self.pan, width, height, self.zoom)
    }
}

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .init_resource::<ViewState>()
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_view_system)
        .add_systems(
            Update,
            (
                keyboard_input_system,
                mouse_input_system,
                simulation_step_system,
                draw_scene_system,
            )
                .chain(),
        )
        .run();
}

fn setup_view_system(mut commands: Commands) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // Key-binding guide, visible until toggled away with H
    commands.spawn((
        TextBundle::from_section(
            HELP_TEXT,
            TextStyle {
                font_size: 24.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(100.0),
            left: Val::Px(100.0),
            ..Default::default()
        }),
        HelpPanel,
    ));
}

fn keyboard_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut help: Query<&mut Visibility, With<HelpPanel>>,
    mut exit: EventWriter<AppExit>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // M: spawn a body under the cursor
    if keys.just_pressed(KeyCode::KeyM) {
        if let Some(cursor) = window.cursor_position() {
            let camera = view.camera(window.width() as f64, window.height() as f64);
            let world = camera.screen_to_world(NVec2::new(cursor.x as f64, cursor.y as f64));

            match scenario.spawn_body(world) {
                Ok(index) => info!("spawned body {index} at ({:.1}, {:.1})", world.x, world.y),
                Err(err) => {
                    error!("could not spawn body: {err}");
                    exit.send(AppExit::error());
                }
            }
        }
    }

    // N: toggle collision response
    if keys.just_pressed(KeyCode::KeyN) {
        let enabled = !scenario.collision();
        scenario.set_collision(enabled);
        info!("collision response {}", if enabled { "on" } else { "off" });
    }

    // P: despawn all bodies
    if keys.just_pressed(KeyCode::KeyP) {
        scenario.clear_bodies();
    }

    // O: pause/continue
    if keys.just_pressed(KeyCode::KeyO) {
        let paused = !scenario.paused();
        scenario.set_paused(paused);
    }

    // H: toggle the help panel
    if keys.just_pressed(KeyCode::KeyH) {
        for mut visibility in &mut help {
            *visibility = match *visibility {
                Visibility::Hidden => Visibility::Inherited,
                _ => Visibility::Hidden,
            };
        }
    }
}

fn mouse_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut wheel: EventReader<MouseWheel>,
    mut moved: EventReader<CursorMoved>,
    mut view: ResMut<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        view.dragging = true;
        if let Ok(window) = windows.get_single() {
            if let Some(cursor) = window.cursor_position() {
                view.last_cursor = cursor;
            }
        }
    }
    if buttons.just_released(MouseButton::Left) {
        view.dragging = false;
    }

    for ev in moved.read() {
        if view.dragging {
            let dx = (ev.position.x - view.last_cursor.x) as f64;
            let dy = (ev.position.y - view.last_cursor.y) as f64;

            let zoom = view.zoom;
            view.pan.x += dx / zoom;
            view.pan.y += dy / zoom;
        }
        view.last_cursor = ev.position;
    }

    for ev in wheel.read() {
        if ev.y > 0.0 {
            view.zoom += ZOOM_STEP;
        } else if ev.y < 0.0 {
            view.zoom -= ZOOM_STEP;
        }
        view.zoom = view.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

/// Per-frame simulation advance, fed the render time delta.
fn simulation_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>) {
    scenario.tick(time.delta_seconds() as f64);
}

fn draw_scene_system(
    mut gizmos: Gizmos,
    mut scenario: ResMut<Scenario>,
    view: Res<ViewState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let width = window.width() as f64;
    let height = window.height() as f64;

    let viewport = Viewport { width, height };
    let camera = view.camera(width, height);

    // Trails first so bodies draw over their own history
    scenario.for_each_visible_trail(viewport, camera, |rect, alpha| {
        let center = Vec2::new(
            (rect.x + rect.w * 0.5 - width * 0.5) as f32,
            (height * 0.5 - rect.y - rect.h * 0.5) as f32,
        );
        let color = Color::srgba(1.0, 1.0, 1.0, alpha as f32 / 255.0);
        gizmos.rect_2d(center, 0.0, Vec2::new(rect.w as f32, rect.h as f32), color);
    });

    scenario.for_each_visible_body(viewport, camera, |pos, radius| {
        let center = Vec2::new(
            (pos.x - width * 0.5) as f32,
            (height * 0.5 - pos.y) as f32,
        );
        gizmos.circle_2d(center, radius as f32, Color::WHITE);
    });
}
