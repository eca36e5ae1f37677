use core::cell::Cell;
use core::num::TryFromIntError;

use hilo_drill::{Card, Drill, DrillState, FeedbackKind, Scheduler, Settings, TimerId};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Hands the armed hide timer to the page, which runs it with `setTimeout`.
#[derive(Default)]
struct PageScheduler {
    armed: Cell<Option<(TimerId, u32)>>,
}

impl Scheduler for PageScheduler {
    fn schedule(&self, id: TimerId, delay_ms: u32) {
        self.armed.set(Some((id, delay_ms)));
    }

    fn cancel(&self, id: TimerId) {
        if matches!(self.armed.get(), Some((armed, _)) if armed == id) {
            self.armed.set(None);
        }
    }
}

#[wasm_bindgen]
pub struct WasmDrill {
    drill: Drill<PageScheduler>,
    settings: Settings,
}

#[wasm_bindgen]
impl WasmDrill {
    /// Builds a drill from the page's saved settings JSON, if any.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, saved_settings: Option<String>) -> Result<WasmDrill, JsValue> {
        let settings = saved_settings
            .and_then(|json| serde_json::from_str::<Settings>(&json).ok())
            .filter(|settings| settings.validate().is_ok())
            .unwrap_or_default();
        let drill = Drill::new(settings.drill_options(), PageScheduler::default(), seed as u64)
            .map_err(js_err)?;
        Ok(Self { drill, settings })
    }

    /// Deals a round and returns the timer the page must run.
    pub fn start_round(&self) -> Result<JsValue, JsValue> {
        self.drill.start_round();
        let timer = match self.drill.scheduler().armed.get() {
            Some((id, delay_ms)) => Some(JsTimer::new(id, delay_ms).map_err(js_err)?),
            None => None,
        };
        to_js_value(&timer)
    }

    /// Called by the page when a `setTimeout` armed by `start_round` fires.
    pub fn on_timer(&self, id: u32) -> bool {
        let fired = self.drill.on_timer(TimerId(u64::from(id)));
        if fired {
            self.drill.scheduler().armed.set(None);
        }
        fired
    }

    pub fn receive_input(&self, text: &str) -> Result<(), JsValue> {
        self.drill.receive_input(text).map_err(js_err)
    }

    pub fn submit(&self) -> Result<String, JsValue> {
        self.drill
            .submit()
            .map(|feedback| feedback.to_string())
            .map_err(js_err)
    }

    pub fn reset_timer(&self) {
        self.drill.reset_timer();
    }

    pub fn end_session(&self) {
        self.drill.end_session();
    }

    /// Returns the settings as JSON for the page to store.
    pub fn settings_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.settings).map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = self.drill.snapshot();
        let feedback = view.feedback.map(|feedback| {
            let text = feedback.to_string();
            JsFeedback {
                kind: kind_to_str(FeedbackKind::classify(&text)),
                text,
            }
        });

        let snapshot = Snapshot {
            state: state_to_str(view.state),
            cards: view.cards,
            cards_visible: view.cards_visible,
            input: view.input,
            feedback,
            display_time: view.display_time,
            show_timer: self.settings.show_timer(),
            timer_duration: self.settings.timer_duration_secs(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct JsTimer {
    id: u32,
    delay_ms: u32,
}

impl JsTimer {
    /// Fails once ids outgrow what the page passes back to `on_timer`.
    fn new(id: TimerId, delay_ms: u32) -> Result<Self, TryFromIntError> {
        Ok(Self {
            id: u32::try_from(id.0)?,
            delay_ms,
        })
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    cards: Vec<Card>,
    cards_visible: bool,
    input: String,
    feedback: Option<JsFeedback>,
    display_time: u32,
    show_timer: bool,
    timer_duration: u32,
}

#[derive(Serialize)]
struct JsFeedback {
    kind: &'static str,
    text: String,
}

fn state_to_str(state: DrillState) -> &'static str {
    match state {
        DrillState::Idle => "Idle",
        DrillState::Revealing => "Revealing",
        DrillState::AwaitingInput => "AwaitingInput",
        DrillState::Graded => "Graded",
    }
}

fn kind_to_str(kind: FeedbackKind) -> &'static str {
    match kind {
        FeedbackKind::Success => "success",
        FeedbackKind::Failure => "failure",
        FeedbackKind::Info => "info",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_ids_convert_until_they_overflow() {
        assert_eq!(
            JsTimer::new(TimerId(7), 500),
            Ok(JsTimer {
                id: 7,
                delay_ms: 500
            })
        );
        assert!(JsTimer::new(TimerId(u64::from(u32::MAX) + 1), 500).is_err());
    }
}
