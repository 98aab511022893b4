use super::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn load(json: serde_json::Value) -> Project {
    init_tracing();
    Project::from_json_str(&json.to_string()).unwrap()
}

fn animated_project() -> Project {
    load(serde_json::json!({
        "width": 1280, "height": 720, "fps": 30, "duration": 10.0,
        "scenes": [
            {
                "start": 0.0,
                "end": 4.0,
                "objects": [
                    {
                        "type": "image", "id": "bg", "x": 0, "y": 0, "w": 1280, "h": 720, "z": 0,
                        "src": "bg.png",
                        "animations": [
                            {"type": "zoom", "from": 1.0, "to": 2.0},
                            {"type": "move", "from": {"x": 0, "y": 0}, "to": {"x": 100, "y": 50}},
                            {"type": "fade", "in": 1.0, "out": 1.0}
                        ]
                    }
                ]
            }
        ]
    }))
}

#[test]
fn out_of_window_timestamps_resolve_empty() {
    let project = load(serde_json::json!({
        "width": 1280, "height": 720, "fps": 30, "duration": 10.0,
        "scenes": [{"start": 2.0, "end": 5.0, "objects": [
            {"type": "image", "src": "a.png"}
        ]}]
    }));

    assert!(resolve_frame(&project, 1999).is_empty());
    assert!(!resolve_frame(&project, 2000).is_empty());
    assert!(!resolve_frame(&project, 4999).is_empty());
    // End is exclusive.
    assert!(resolve_frame(&project, 5000).is_empty());
}

#[test]
fn animations_interpolate_over_the_scene_window() {
    let project = animated_project();

    let frame = resolve_frame(&project, 2000);
    let cmd = &frame.commands[0];
    // Halfway through the 4 s window with linear easing.
    assert!((cmd.scale - 1.5).abs() < 1e-9);
    assert!((cmd.translate.x - 50.0).abs() < 1e-9);
    assert!((cmd.translate.y - 25.0).abs() < 1e-9);
    // Past the fade-in, before the fade-out.
    assert_eq!(cmd.alpha, 1.0);
}

#[test]
fn fades_ramp_at_the_scene_edges() {
    let project = animated_project();

    let entering = &resolve_frame(&project, 500).commands[0];
    assert!((entering.alpha - 0.5).abs() < 1e-9);

    let at_start = &resolve_frame(&project, 0).commands[0];
    assert_eq!(at_start.alpha, 0.0);

    let leaving = &resolve_frame(&project, 3500).commands[0];
    assert!((leaving.alpha - 0.5).abs() < 1e-9);
}

#[test]
fn commands_sort_by_z_with_scene_objects_first_at_ties() {
    let project = load(serde_json::json!({
        "width": 1280, "height": 720, "fps": 30, "duration": 10.0,
        "scenes": [{"start": 0.0, "end": 10.0, "objects": [
            {"type": "image", "id": "front", "src": "front.png", "z": 10},
            {"type": "image", "id": "tied", "src": "tied.png", "z": 5}
        ]}],
        "overlays": [
            {"start": 0.0, "end": 10.0, "src": "logo.png", "z": 5}
        ]
    }));

    let frame = resolve_frame(&project, 1000);
    let order: Vec<&str> = frame.commands.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["tied", "overlay-0", "front"]);
    assert!(frame.commands.windows(2).all(|p| p[0].z <= p[1].z));
}

#[test]
fn video_source_time_counts_from_the_current_scene_start() {
    let project = load(serde_json::json!({
        "width": 1280, "height": 720, "fps": 30, "duration": 10.0,
        "scenes": [
            {"start": 0.0, "end": 10.0, "objects": [
                {"type": "image", "src": "bg.png"}
            ]},
            {"start": 2.0, "end": 6.0, "objects": [
                {"type": "video", "id": "clip", "src": "clip.mp4"}
            ]}
        ]
    }));

    let frame = resolve_frame(&project, 3000);
    let clip = frame.commands.iter().find(|c| c.id == "clip").unwrap();
    let DrawKind::Video { src, source_time_ms } = &clip.kind else {
        panic!("expected video command");
    };
    assert_eq!(src, "clip.mp4");
    // The first in-window scene (starting at 0 s) is current, so the clip
    // reads 3000 ms into its source, not 1000.
    assert_eq!(*source_time_ms, 3000);
}

#[test]
fn banner_splices_into_z_order_after_ties() {
    let project = load(serde_json::json!({
        "width": 1280, "height": 720, "fps": 30, "duration": 10.0,
        "scenes": [{"start": 0.0, "end": 10.0, "objects": [
            {"type": "image", "id": "bg", "src": "bg.png", "z": 50},
            {"type": "image", "id": "tied", "src": "tied.png", "z": 100}
        ]}],
        "overlays": [
            {"start": 0.0, "end": 10.0, "src": "logo.png", "z": 150},
            {"start": 0.0, "end": 10.0, "newsTitle": "Headline", "z": 100}
        ]
    }));

    let frame = resolve_frame(&project, 1000);
    let order: Vec<&str> = frame.commands.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["bg", "tied", "overlay-1", "overlay-0"]);

    let banner = &frame.commands[2];
    let DrawKind::Banner { title, frame: state } = &banner.kind else {
        panic!("expected banner command");
    };
    assert_eq!(title, "Headline");
    assert!(state.bar_alpha > 0.0);
}

#[test]
fn banner_goes_inactive_after_its_envelope() {
    let project = load(serde_json::json!({
        "width": 1280, "height": 720, "fps": 30, "duration": 10.0,
        "overlays": [
            {"start": 0.0, "end": 10.0, "newsTitle": "Headline"}
        ]
    }));

    // 10 s window keeps the nominal envelope, which ends well before 8 s.
    assert!(!resolve_frame(&project, 1000).is_empty());
    assert!(resolve_frame(&project, 8000).is_empty());
}

#[test]
fn resolution_is_deterministic() {
    let project = animated_project();
    let a = serde_json::to_value(resolve_frame(&project, 1234)).unwrap();
    let b = serde_json::to_value(resolve_frame(&project, 1234)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn render_state_tracks_only_non_empty_frames() {
    let project = animated_project();
    let mut state = RenderState::default();

    state.note_frame(&resolve_frame(&project, 1000));
    assert_eq!(state.last_drawn_ms(), Some(1000));

    // The scene ends at 4 s; an empty frame leaves the marker in place.
    state.note_frame(&resolve_frame(&project, 6000));
    assert_eq!(state.last_drawn_ms(), Some(1000));
}
