//! # Wheel Widget
//!
//! [`Wheel`] ties one [`WheelState`] to its renderer, spin controller,
//! drawing surface and option store, and exposes the operations a host
//! wires to its controls: applying edited text, importing and exporting
//! option lists, spinning, advancing frames, resizing and dismissing the
//! result overlay.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;

use crate::core::WheelState;
use crate::error::WheelError;
use crate::options::{editor_text, export_options, import_options, parse_edit_text};
use crate::render::{Surface, SurfaceSize, WheelRenderer};
use crate::spin::{SpinController, SpinTick, SpinTuning};
use crate::storage::{KeyValueStore, OptionsRepository};

/// Where a click on the result overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    /// The dimmed area around the content
    Backdrop,
    Content,
}

/// Dismissible display of the last landing option
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultOverlay {
    text: Option<String>,
}

impl ResultOverlay {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn close(&mut self) {
        self.text = None;
    }

    /// Clicks outside the content dismiss the overlay
    pub fn click(&mut self, target: OverlayTarget) {
        if target == OverlayTarget::Backdrop {
            self.close();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A key pressed while the edit surface has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
}

impl KeyPress<'_> {
    /// Ctrl+Enter applies the edited options
    pub fn is_apply_shortcut(&self) -> bool {
        self.ctrl && self.key == "Enter"
    }
}

/// One spinning wheel instance
pub struct Wheel<S, K, R = StdRng> {
    state: WheelState,
    renderer: WheelRenderer,
    controller: SpinController<R>,
    surface: S,
    repository: OptionsRepository<K>,
    editor: String,
    overlay: ResultOverlay,
}

impl<S: Surface, K: KeyValueStore> Wheel<S, K, StdRng> {
    /// Wheel with the default palette and an OS-seeded controller
    pub fn load(surface: S, store: K, tuning: SpinTuning) -> Self {
        Self::with_parts(
            surface,
            store,
            WheelRenderer::default(),
            SpinController::new(tuning),
        )
    }
}

impl<S: Surface, K: KeyValueStore, R: Rng> Wheel<S, K, R> {
    /// Wheel showing the stored options, or the defaults when none are saved
    pub fn with_parts(
        surface: S,
        store: K,
        renderer: WheelRenderer,
        controller: SpinController<R>,
    ) -> Self {
        let repository = OptionsRepository::new(store);
        let options = repository.load_or_default();

        let mut wheel = Self {
            editor: editor_text(&options),
            state: WheelState::new(options),
            renderer,
            controller,
            surface,
            repository,
            overlay: ResultOverlay::default(),
        };
        wheel.repaint();
        wheel
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn options(&self) -> &[String] {
        &self.state.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn store(&self) -> &K {
        self.repository.store()
    }

    pub fn controller(&self) -> &SpinController<R> {
        &self.controller
    }

    pub fn overlay(&self) -> &ResultOverlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut ResultOverlay {
        &mut self.overlay
    }

    /// Current content of the edit surface
    pub fn editor_text(&self) -> &str {
        &self.editor
    }

    pub fn set_editor_text(&mut self, text: impl Into<String>) {
        self.editor = text.into();
    }

    /// Replace the options with the non-blank lines of `text`, persist them
    /// and repaint
    ///
    /// While a spin runs the text is kept in the editor but the wheel keeps
    /// its current options.
    pub fn apply_text(&mut self, text: &str) -> &[String] {
        self.editor = text.to_string();
        if !self.state.spinning {
            self.replace_options(parse_edit_text(text));
        }
        &self.state.options
    }

    /// Apply whatever the edit surface currently holds
    pub fn apply_editor(&mut self) -> &[String] {
        let text = self.editor.clone();
        self.apply_text(&text)
    }

    /// Route a key press from the edit surface; returns whether it applied
    /// the edits
    pub fn handle_editor_key(&mut self, key: KeyPress<'_>) -> bool {
        if key.is_apply_shortcut() && !self.state.spinning {
            self.apply_editor();
            true
        } else {
            false
        }
    }

    /// Import a JSON document; state is untouched if it is rejected or a
    /// spin is running
    ///
    /// Returns the number of imported options.
    pub fn import_json(&mut self, name: &str, text: &str) -> Result<usize, WheelError> {
        if self.state.spinning {
            return Err(WheelError::SpinInProgress);
        }
        let options = import_options(name, text)?;
        let count = options.len();

        self.editor = editor_text(&options);
        self.replace_options(options);
        Ok(count)
    }

    /// Read `path` completely, then import it
    pub fn import_file(&mut self, path: &Path) -> Result<usize, WheelError> {
        let text = fs::read_to_string(path).map_err(|source| WheelError::FileReadError {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_json(&path.display().to_string(), &text)
    }

    pub fn export_json(&self) -> Result<String, WheelError> {
        export_options(&self.state.options)
    }

    pub fn export_to(&self, path: &Path) -> Result<(), WheelError> {
        let json = self.export_json()?;
        fs::write(path, json).map_err(|source| WheelError::FileWriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn set_base_spin_speed(&mut self, base_spin_speed: u32) {
        self.controller.set_base_spin_speed(base_spin_speed);
    }

    /// Start a spin; ignored while spinning or when the wheel is empty
    pub fn request_spin(&mut self, now_ms: f64) -> bool {
        let started = self.controller.spin(&mut self.state, now_ms);
        if started {
            self.overlay.close();
        }
        started
    }

    /// Advance a running spin to `now_ms`, repainting when the wheel moved
    pub fn tick(&mut self, now_ms: f64) -> SpinTick {
        let tick = self.controller.tick(&mut self.state, now_ms);

        match &tick {
            SpinTick::Idle => {}
            SpinTick::Frame { .. } => self.repaint(),
            SpinTick::Landed(outcome) => {
                self.repaint();
                self.overlay.show(outcome.option.clone());
            }
        }

        tick
    }

    /// Reallocate the surface and repaint at the current rotation
    ///
    /// A running spin keeps going; the next tick paints at the new size.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.surface.resize(size);
        self.repaint();
    }

    pub fn repaint(&mut self) {
        self.renderer
            .render(&mut self.surface, &self.state.options, self.state.rotation);
    }

    fn replace_options(&mut self, options: Vec<String>) {
        self.state.options = options;
        self.repository.save_best_effort(&self.state.options);
        self.repaint();
    }
}
