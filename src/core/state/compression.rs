use std::mem;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        cmd::Cmd, msg::compression::CompressionMsg, state::editor::TextAreaState,
        textarea_engine::TextAreaEngine,
    },
    domain::compression::{builtin_samples, compress, CompressionReport, Sample, Scheme, WindowSize},
};

/// Compression lab: the input text, the selected scheme and its report
///
/// The report is recomputed after every change, so views only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionState {
    pub textarea: TextAreaState,
    pub scheme: Scheme,
    pub window: WindowSize,
    pub samples: Vec<Sample>,
    /// Sample currently in the text area, `None` once the user edits it
    pub sample_index: Option<usize>,
    pub editing: bool,
    pub pending_input_keys: Vec<KeyEvent>,
    report: CompressionReport,
}

impl Default for CompressionState {
    fn default() -> Self {
        Self::new(builtin_samples(), Scheme::default(), WindowSize::default())
    }
}

impl CompressionState {
    /// Starts out with the first sample loaded
    pub fn new(samples: Vec<Sample>, scheme: Scheme, window: WindowSize) -> Self {
        let (textarea, sample_index) = match samples.first() {
            Some(sample) => (TextAreaState::with_cursor_at_end(&sample.text), Some(0)),
            None => (TextAreaState::default(), None),
        };
        let report = compress(&textarea.content, scheme, window);

        Self {
            textarea,
            scheme,
            window,
            samples,
            sample_index,
            editing: false,
            pending_input_keys: vec![],
            report,
        }
    }

    pub fn text(&self) -> &str {
        &self.textarea.content
    }

    pub fn report(&self) -> &CompressionReport {
        &self.report
    }

    pub fn current_sample(&self) -> Option<&Sample> {
        self.sample_index.and_then(|index| self.samples.get(index))
    }

    fn recompute(&mut self) {
        self.report = compress(&self.textarea.content, self.scheme, self.window);
    }

    fn apply_pending_keys(&mut self, engine: &dyn TextAreaEngine) {
        if self.pending_input_keys.is_empty() {
            return;
        }

        let keys = mem::take(&mut self.pending_input_keys);
        let next = engine.apply_keys(&self.textarea, &keys);
        if next.content != self.textarea.content {
            self.sample_index = None;
        }
        self.textarea = next;
        self.recompute();
    }

    pub fn update(&mut self, msg: CompressionMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            CompressionMsg::StartEditing => {
                self.editing = true;
                vec![]
            }

            CompressionMsg::StopEditing => {
                self.editing = false;
                self.pending_input_keys.clear();
                vec![]
            }

            CompressionMsg::ProcessTextAreaInput(key) => {
                if self.editing {
                    self.pending_input_keys.push(key);
                    self.apply_pending_keys(engine);
                }
                vec![]
            }

            CompressionMsg::Paste(text) => {
                if self.editing {
                    self.pending_input_keys.extend(paste_keys(&text));
                    self.apply_pending_keys(engine);
                }
                vec![]
            }

            CompressionMsg::LoadNextSample => {
                if self.samples.is_empty() {
                    return vec![];
                }
                let index = self
                    .sample_index
                    .map(|index| (index + 1) % self.samples.len())
                    .unwrap_or(0);
                self.textarea = TextAreaState::with_cursor_at_end(&self.samples[index].text);
                self.sample_index = Some(index);
                self.recompute();
                vec![]
            }

            CompressionMsg::NextScheme => {
                self.scheme = self.scheme.next();
                self.recompute();
                vec![]
            }

            CompressionMsg::PreviousScheme => {
                self.scheme = self.scheme.previous();
                self.recompute();
                vec![]
            }

            CompressionMsg::GrowWindow => {
                self.window = self.window.next_preset();
                self.recompute();
                vec![]
            }

            CompressionMsg::ShrinkWindow => {
                self.window = self.window.previous_preset();
                self.recompute();
                vec![]
            }
        }
    }
}

/// Pasted text as the key presses that would type it
fn paste_keys(text: &str) -> Vec<KeyEvent> {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\n' => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            c => KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
        })
        .collect()
}
