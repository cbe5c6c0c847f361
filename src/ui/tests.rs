use super::*;
use crate::interaction::ReplicaKey;
use crate::plane::PannableWrapPlane;
use crate::types::{Item, ItemId, ItemKind};
use crate::CanvasConfig;
use eframe::egui;

const S: f32 = 12000.0;

/// An app with no generated items, no momentum and no loadable assets.
fn quiet_app() -> CanvasApp {
    CanvasApp::with_config(CanvasConfig {
        item_count: 0,
        seed: Some(1),
        momentum: false,
        asset_dir: "/nonexistent/assets".into(),
        ..Default::default()
    })
}

fn big_item(id: u32) -> Item {
    Item {
        id: ItemId(id),
        kind: ItemKind::Icon,
        source: "glasses.jpg".into(),
        position: (0.0, 0.0),
        size: (600.0, 600.0),
        label: "Glasses".into(),
        color: Some("#336699".into()),
    }
}

/// Runs one headless frame of the whole app on `ctx` with the given events.
fn run_frame(ctx: &egui::Context, app: &mut CanvasApp, events: Vec<egui::Event>) {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    let _ = ctx.run(raw, |ctx| {
        app.show(ctx);
    });
}

fn press(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}

/// Drags from `from` by `dx` in two equal moves and releases.
fn drag_x(ctx: &egui::Context, app: &mut CanvasApp, from: egui::Pos2, dx: f32) {
    let mid = from + egui::vec2(dx * 0.5, 0.0);
    let to = from + egui::vec2(dx, 0.0);
    // egui hit-tests against the previous frame's widgets
    run_frame(ctx, app, vec![]);
    run_frame(ctx, app, vec![egui::Event::PointerMoved(from)]);
    run_frame(ctx, app, vec![press(from, true)]);
    run_frame(ctx, app, vec![egui::Event::PointerMoved(mid)]);
    run_frame(ctx, app, vec![egui::Event::PointerMoved(to)]);
    run_frame(ctx, app, vec![press(to, false)]);
}

#[test]
fn dragging_the_canvas_pans_the_plane() {
    let mut app = quiet_app();
    let ctx = egui::Context::default();

    drag_x(&ctx, &mut app, egui::pos2(400.0, 400.0), 100.0);

    let offset = app.plane.offset();
    assert!(offset.x >= -5950.0 && offset.x <= -5900.0, "{offset:?}");
    assert_eq!(offset.y, -6000.0);
    assert!(!app.canvas.is_dragging);
}

#[test]
fn releasing_a_drag_wraps_the_offset() {
    let mut app = quiet_app();
    app.plane.set_offset(egui::vec2(-30.0, -6000.0));
    let ctx = egui::Context::default();

    drag_x(&ctx, &mut app, egui::pos2(400.0, 400.0), 100.0);

    let offset = app.plane.offset();
    assert!((-S..0.0).contains(&offset.x), "{offset:?}");
    assert!(offset.x < -11000.0, "{offset:?}");
}

#[test]
fn clicking_an_item_selects_replica_and_opens_dialog() {
    let mut app = quiet_app();
    app.plane = PannableWrapPlane::new(S, 0.0, vec![big_item(7)]);
    app.plane.set_offset(egui::Vec2::ZERO);
    let ctx = egui::Context::default();
    let pos = egui::pos2(300.0, 300.0);

    run_frame(&ctx, &mut app, vec![]);
    run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(pos)]);
    let key = ReplicaKey::new(ItemId(7), 4);
    assert_eq!(app.plane.interaction().hovered(), Some(key));

    run_frame(&ctx, &mut app, vec![press(pos, true)]);
    run_frame(&ctx, &mut app, vec![press(pos, false)]);

    assert_eq!(app.plane.interaction().selected(), Some(key));
    assert!(app.plane.interaction().is_front(key));
    assert_eq!(app.plane.dialog_item().map(|i| i.id), Some(ItemId(7)));
}

#[test]
fn escape_closes_dialog_but_keeps_selection() {
    let mut app = quiet_app();
    app.plane = PannableWrapPlane::new(S, 0.0, vec![big_item(3)]);
    app.plane.on_item_activate(ItemId(3), 4);
    let ctx = egui::Context::default();

    // Draw once with the dialog open
    run_frame(&ctx, &mut app, vec![]);
    assert!(app.plane.dialog_item().is_some());

    run_frame(
        &ctx,
        &mut app,
        vec![egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }],
    );

    assert!(app.plane.dialog_item().is_none());
    assert_eq!(
        app.plane.interaction().selected(),
        Some(ReplicaKey::new(ItemId(3), 4))
    );
}

#[test]
fn clicking_empty_canvas_opens_nothing() {
    let mut app = quiet_app();
    app.plane = PannableWrapPlane::new(S, 0.0, vec![big_item(1)]);
    app.plane.set_offset(egui::Vec2::ZERO);
    let ctx = egui::Context::default();
    let pos = egui::pos2(900.0, 700.0);

    run_frame(&ctx, &mut app, vec![]);
    run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(pos)]);
    run_frame(&ctx, &mut app, vec![press(pos, true)]);
    run_frame(&ctx, &mut app, vec![press(pos, false)]);

    assert!(app.plane.interaction().hovered().is_none());
    assert!(app.plane.interaction().selected().is_none());
    assert!(app.plane.dialog_item().is_none());
}

#[test]
fn full_frame_renders_generated_layout() {
    let mut app = CanvasApp::with_config(CanvasConfig {
        item_count: 50,
        seed: Some(5),
        asset_dir: "/nonexistent/assets".into(),
        ..Default::default()
    });
    let ctx = egui::Context::default();
    run_frame(&ctx, &mut app, vec![]);
    assert_eq!(app.plane.items().len(), 50);
    assert!(app.plane.dialog_item().is_none());
}

#[test]
fn preferences_round_trip_without_layout() {
    let mut app = quiet_app();
    app.dark_mode = true;
    app.config.momentum = false;
    app.config.item_count = 12;
    app.plane.on_drag_delta(500.0, 0.0);

    let json = app.to_json().expect("serializes");
    assert!(!json.contains("offset"));

    let restored = CanvasApp::from_json(&json).expect("parses");
    assert!(restored.dark_mode);
    assert!(!restored.config.momentum);
    assert_eq!(restored.plane.items().len(), 12);
    assert_eq!(restored.plane.offset(), egui::vec2(-S / 2.0, -S / 2.0));
    assert_eq!(restored.assets.dir(), std::path::Path::new("/nonexistent/assets"));
}

#[test]
fn saved_state_with_bad_geometry_is_sanitized() {
    let json = r#"{ "config": { "tile_size": -1.0, "gap": 24.0, "item_count": 3 }, "dark_mode": true }"#;
    let restored = CanvasApp::from_json(json).expect("parses");
    assert_eq!(restored.config.tile_size, S);
    assert_eq!(restored.config.gap, 24.0);
    assert_eq!(restored.plane.period(), S + 24.0);
    assert_eq!(restored.plane.items().len(), 3);
    assert!(restored.dark_mode);
}

#[test]
fn malformed_saved_state_is_an_error() {
    assert!(CanvasApp::from_json("not json").is_err());
}
