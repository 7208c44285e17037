// Scripted input sessions
//
// A session is a list of frames, each with its own delta time and the raw
// events that arrived during it.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use vr_simulator::{Key, RawInputEvent};

#[derive(Debug, Deserialize)]
pub struct Session {
    pub frames: Vec<SessionFrame>,
}

#[derive(Debug, Deserialize)]
pub struct SessionFrame {
    #[serde(default = "default_delta_seconds")]
    pub delta_seconds: f32,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

fn default_delta_seconds() -> f32 {
    1.0 / 60.0
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    Pressed(Key),
    Released(Key),
    Axis { key: Key, value: f32 },
}

impl From<SessionEvent> for RawInputEvent {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::Pressed(key) => RawInputEvent::Pressed(key),
            SessionEvent::Released(key) => RawInputEvent::Released(key),
            SessionEvent::Axis { key, value } => RawInputEvent::Axis(key, value),
        }
    }
}

impl SessionFrame {
    pub fn raw_events(&self) -> Vec<RawInputEvent> {
        self.events.iter().copied().map(RawInputEvent::from).collect()
    }
}

pub fn load_session(path: &Path) -> anyhow::Result<Session> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read session {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("unable to parse session {}", path.display()))
}
