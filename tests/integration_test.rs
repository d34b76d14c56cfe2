//! Integration tests for spinning-wheel using the library interface

use std::fs;

use pretty_assertions::assert_eq;
use spinning_wheel::error::WheelError;
use spinning_wheel::render::{SurfaceSize, SvgSurface, WheelRenderer};
use spinning_wheel::spin::{SpinController, SpinOutcome, SpinTick, SpinTuning};
use spinning_wheel::storage::{FileStore, KeyValueStore, MemoryStore};
use spinning_wheel::widget::{KeyPress, OverlayTarget, Wheel};
use tempfile::TempDir;

type TestWheel<K> = Wheel<SvgSurface, K>;

fn seeded_wheel<K: KeyValueStore>(store: K, seed: u64) -> TestWheel<K> {
    Wheel::with_parts(
        SvgSurface::new(SurfaceSize::square(400.0)),
        store,
        WheelRenderer::default(),
        SpinController::seeded(SpinTuning::default(), seed),
    )
}

/// Tick every 16ms from `start` until the spin lands
fn run_to_landing<K: KeyValueStore>(wheel: &mut TestWheel<K>, start: f64) -> SpinOutcome {
    let mut now = start;
    for _ in 0..1_000 {
        now += 16.0;
        if let SpinTick::Landed(outcome) = wheel.tick(now) {
            return outcome;
        }
    }
    panic!("spin never landed");
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_fresh_store_shows_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let wheel = seeded_wheel(FileStore::new(temp_dir.path().join("store.json")), 1);

    assert_eq!(
        wheel.options(),
        strings(&["Option 1", "Option 2", "Option 3", "Option 4", "Surprise"])
    );
    assert_eq!(wheel.editor_text(), "Option 1\nOption 2\nOption 3\nOption 4\nSurprise");
}

#[test]
fn test_applied_options_survive_a_reload() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("store.json");

    let mut wheel = seeded_wheel(FileStore::new(&store_path), 1);
    wheel.set_editor_text("  Pizza \n\n Sushi\n   \nTacos");
    assert!(wheel.handle_editor_key(KeyPress {
        key: "Enter",
        ctrl: true
    }));
    drop(wheel);

    let reloaded = seeded_wheel(FileStore::new(&store_path), 2);
    assert_eq!(reloaded.options(), strings(&["Pizza", "Sushi", "Tacos"]));
}

#[test]
fn test_plain_enter_does_not_apply() {
    let mut wheel = seeded_wheel(MemoryStore::new(), 1);
    wheel.set_editor_text("Only");

    assert!(!wheel.handle_editor_key(KeyPress {
        key: "Enter",
        ctrl: false
    }));
    assert_eq!(wheel.options().len(), 5);
}

#[test]
fn test_spin_lands_on_an_option_and_shows_it() {
    let mut wheel = seeded_wheel(MemoryStore::new(), 7);
    wheel.apply_text("A\nB\nC\nD");

    assert!(wheel.request_spin(0.0));
    assert!(!wheel.request_spin(10.0), "second spin must be ignored");

    let outcome = run_to_landing(&mut wheel, 0.0);
    assert_eq!(wheel.options()[outcome.index], outcome.option);
    assert_eq!(wheel.state().rotation, outcome.rotation);
    assert!(!wheel.state().spinning);
    assert_eq!(wheel.overlay().text(), Some(outcome.option.as_str()));

    wheel.overlay_mut().click(OverlayTarget::Content);
    assert!(wheel.overlay().is_visible());
    wheel.overlay_mut().click(OverlayTarget::Backdrop);
    assert!(!wheel.overlay().is_visible());
}

#[test]
fn test_spin_on_empty_wheel_is_ignored() {
    let mut wheel = seeded_wheel(MemoryStore::new(), 1);
    wheel.apply_text(" \n\n");

    assert!(wheel.options().is_empty());
    assert!(!wheel.request_spin(0.0));
    assert_eq!(wheel.tick(16.0), SpinTick::Idle);
    assert_eq!(wheel.surface().element_count(), 0);
}

#[test]
fn test_resize_mid_spin_keeps_the_outcome() {
    let mut resized = seeded_wheel(MemoryStore::new(), 99);
    let mut control = seeded_wheel(MemoryStore::new(), 99);

    assert!(resized.request_spin(0.0));
    assert!(control.request_spin(0.0));

    resized.tick(500.0);
    control.tick(500.0);
    let rotation_before = resized.state().rotation;

    resized.resize(SurfaceSize::for_viewport(300.0, 2.0));
    assert_eq!(resized.state().rotation, rotation_before);
    assert!(resized.state().spinning);

    let resized_outcome = run_to_landing(&mut resized, 500.0);
    let control_outcome = run_to_landing(&mut control, 500.0);
    assert_eq!(resized_outcome, control_outcome);
    assert_eq!(resized.surface().size().pixel_width, 520);
}

#[test]
fn test_export_then_import_restores_options() {
    let temp_dir = TempDir::new().unwrap();
    let export_path = temp_dir.path().join("wheel-options.json");

    let mut source = seeded_wheel(MemoryStore::new(), 1);
    source.apply_text("Red\nGreen\nBlue");
    source.export_to(&export_path).unwrap();

    let mut target = seeded_wheel(MemoryStore::new(), 2);
    let imported = target.import_file(&export_path).unwrap();

    assert_eq!(imported, 3);
    assert_eq!(target.options(), strings(&["Red", "Green", "Blue"]));
    assert_eq!(target.editor_text(), "Red\nGreen\nBlue");
}

#[test]
fn test_rejected_import_leaves_options_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("object.json");
    fs::write(&bad_path, r#"{"options": ["a", "b"]}"#).unwrap();

    let mut wheel = seeded_wheel(MemoryStore::new(), 1);
    wheel.apply_text("Keep\nMe");

    let err = wheel.import_file(&bad_path).unwrap_err();
    assert!(matches!(err, WheelError::ImportShape { .. }));

    let err = wheel.import_json("broken.json", "[\"a\",").unwrap_err();
    assert!(matches!(err, WheelError::ImportParse(_)));

    let err = wheel.import_json("empty.json", "[]").unwrap_err();
    assert!(matches!(err, WheelError::ImportShape { .. }));

    assert_eq!(wheel.options(), strings(&["Keep", "Me"]));
}

#[test]
fn test_missing_import_file_is_a_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut wheel = seeded_wheel(MemoryStore::new(), 1);

    let err = wheel
        .import_file(&temp_dir.path().join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, WheelError::FileReadError { .. }));
}

#[test]
fn test_corrupt_store_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("store.json");
    fs::write(&store_path, "not json at all").unwrap();

    let mut wheel = seeded_wheel(FileStore::new(&store_path), 1);
    assert_eq!(wheel.options().len(), 5);

    wheel.apply_text("Fresh");
    let reloaded = seeded_wheel(FileStore::new(&store_path), 1);
    assert_eq!(reloaded.options(), strings(&["Fresh"]));
}
