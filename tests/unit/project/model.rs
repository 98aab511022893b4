use super::*;

fn project_json() -> serde_json::Value {
    serde_json::json!({
        "width": 1280,
        "height": 720,
        "background": "#101010",
        "fps": 30,
        "duration": 12.0,
        "futureField": {"ignored": true},
        "scenes": [
            {
                "start": 0.0,
                "end": 5.0,
                "objects": [
                    {
                        "type": "image",
                        "id": "hero",
                        "x": 100, "y": 50, "w": 640, "h": 360, "z": 1,
                        "src": "assets/hero.png",
                        "animations": [
                            {"type": "zoom", "from": 1.0, "to": 1.2, "easing": "easeInOut"},
                            {"type": "fade", "in": 0.5, "out": 0.5},
                            {"type": "wobble", "amount": 3}
                        ]
                    },
                    {
                        "type": "text",
                        "text": "Top story",
                        "style": {"size": 48, "color": "#ff0000", "shadow": true}
                    }
                ]
            }
        ],
        "overlays": [
            {"start": 0.0, "end": 12.0, "src": "assets/logo.png", "x": 20, "y": 20, "w": 96, "h": 96, "opacity": 0.8},
            {"start": 1.0, "end": 7.0, "newsTitle": "Breaking: markets rally", "z": 200}
        ],
        "subtitles": [
            {"start": 0.5, "end": 2.5, "text": "Hello"}
        ],
        "audio": [
            {"src": "assets/voice.mp3", "offset": 0.0, "volumePercent": 100},
            {"src": "assets/bed.mp3", "offset": 2.0, "volumePercent": 50}
        ]
    })
}

#[test]
fn loads_full_document_and_ignores_unknown_fields() {
    let project = Project::from_json_str(&project_json().to_string()).unwrap();
    assert_eq!(project.canvas.width, 1280);
    assert_eq!(project.duration_sec, 12.0);
    assert_eq!(project.scenes.len(), 1);
    assert_eq!(project.overlays.len(), 2);
    assert_eq!(project.subtitles.len(), 1);
    assert_eq!(project.audio.len(), 2);

    let scene = &project.scenes[0];
    assert_eq!(scene.window.unwrap().start_sec, 0.0);
    assert_eq!(scene.objects.len(), 2);

    let hero = &scene.objects[0];
    assert_eq!(hero.id, "hero");
    // The unknown "wobble" animation entry is skipped, not rejected.
    assert_eq!(hero.animations.len(), 2);
    assert!(matches!(
        hero.animations[0],
        Animation::Zoom {
            from,
            to,
            ease: Ease::EaseInOut,
        } if from == 1.0 && to == 1.2
    ));

    let title = &scene.objects[1];
    assert_eq!(title.id, "obj-0-1");
    let ObjectKind::Text { text, style } = &title.kind else {
        panic!("expected text object");
    };
    assert_eq!(text, "Top story");
    assert_eq!(style.size_px, 48.0);
    assert_eq!(style.color, "#ff0000");
    assert!(style.shadow);
}

#[test]
fn overlay_kind_splits_on_news_title() {
    let project = Project::from_json_str(&project_json().to_string()).unwrap();
    let Overlay::Image(logo) = &project.overlays[0] else {
        panic!("expected image overlay");
    };
    assert_eq!(logo.src, "assets/logo.png");
    assert_eq!(logo.z, 100);
    assert_eq!(logo.opacity, 0.8);

    let Overlay::Banner(banner) = &project.overlays[1] else {
        panic!("expected banner overlay");
    };
    assert_eq!(banner.title, "Breaking: markets rally");
    assert_eq!(banner.z, 200);
}

#[test]
fn legacy_music_normalizes_to_track_list() {
    let json = serde_json::json!({
        "width": 640, "height": 360, "fps": 25, "duration": 8.0,
        "music": {"src": "assets/theme.mp3", "gain": -6.0}
    });
    let project = Project::from_json_str(&json.to_string()).unwrap();
    assert_eq!(project.audio.len(), 1);
    assert_eq!(project.audio[0].src, "assets/theme.mp3");
    assert_eq!(project.audio[0].offset_sec, 0.0);
    assert!(matches!(project.audio[0].volume, TrackVolume::GainDb(db) if db == -6.0));
}

#[test]
fn volume_fractions() {
    assert_eq!(TrackVolume::Percent(50.0).fraction(), 0.5);
    assert_eq!(TrackVolume::Percent(-10.0).fraction(), 0.0);
    assert_eq!(TrackVolume::Percent(150.0).fraction(), 1.5);
    assert_eq!(TrackVolume::GainDb(0.0).fraction(), 1.0);
    assert!((TrackVolume::GainDb(-6.0).fraction() - 0.501187).abs() < 1e-6);
    assert_eq!(TrackVolume::Default.fraction(), 1.0);
}

#[test]
fn inverted_scene_bounds_are_rejected_at_load() {
    let json = serde_json::json!({
        "width": 640, "height": 360, "fps": 25, "duration": 8.0,
        "scenes": [{"start": 5.0, "end": 5.0, "objects": []}]
    });
    let err = Project::from_json_str(&json.to_string()).unwrap_err();
    assert!(matches!(err, NewsreelError::Validation(_)));
}

#[test]
fn missing_bounds_mean_never_active() {
    let json = serde_json::json!({
        "width": 640, "height": 360, "fps": 25, "duration": 8.0,
        "scenes": [{"start": 1.0, "objects": []}]
    });
    let project = Project::from_json_str(&json.to_string()).unwrap();
    assert!(project.scenes[0].window.is_none());
}

#[test]
fn duration_derives_from_last_scene_end() {
    let json = serde_json::json!({
        "width": 640, "height": 360, "fps": 25,
        "scenes": [
            {"start": 0.0, "end": 4.0, "objects": []},
            {"start": 4.0, "end": 9.5, "objects": []}
        ]
    });
    let project = Project::from_json_str(&json.to_string()).unwrap();
    assert_eq!(project.duration_sec, 9.5);
}

#[test]
fn underivable_duration_is_rejected() {
    let json = serde_json::json!({"width": 640, "height": 360, "fps": 25});
    let err = Project::from_json_str(&json.to_string()).unwrap_err();
    assert!(matches!(err, NewsreelError::Validation(_)));
}

#[test]
fn negative_audio_offset_is_rejected() {
    let json = serde_json::json!({
        "width": 640, "height": 360, "fps": 25, "duration": 8.0,
        "audio": [{"src": "a.mp3", "offset": -1.0}]
    });
    let err = Project::from_json_str(&json.to_string()).unwrap_err();
    assert!(matches!(err, NewsreelError::Validation(_)));
}
