//! Click feedback tone.
//!
//! The tone is described here and played by a [`ToneSink`]. Playback is best
//! effort: a sink that cannot produce sound reports an error which
//! [`play_feedback_sound`] drops without affecting anything else.

#[cfg(test)]
#[path = "tone_test.rs"]
mod tone_test;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One gain target on the envelope, reached by exponential ramp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GainStep {
    pub at_secs: f64,
    pub gain: f64,
}

/// A short blip: start gain, ramp targets, stop time, context close delay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackTone {
    pub waveform: Waveform,
    pub frequency_hz: f64,
    pub initial_gain: f64,
    pub envelope: Vec<GainStep>,
    pub stop_after_secs: f64,
    /// Delay before the audio context is released.
    pub close_after_ms: u32,
}

impl Default for FeedbackTone {
    fn default() -> Self {
        Self {
            waveform: Waveform::Triangle,
            frequency_hz: 660.0,
            initial_gain: 0.0001,
            envelope: vec![
                GainStep { at_secs: 0.01, gain: 0.02 },
                GainStep { at_secs: 0.12, gain: 0.0001 },
            ],
            stop_after_secs: 0.14,
            close_after_ms: 220,
        }
    }
}

impl FeedbackTone {
    /// Time from start until the tone is silent.
    #[must_use]
    pub fn audible_secs(&self) -> f64 {
        self.stop_after_secs
    }
}

/// Output device for feedback tones.
pub trait ToneSink {
    type Error: fmt::Debug;

    /// # Errors
    ///
    /// Returns the sink's error when the environment cannot play audio.
    fn play(&self, tone: &FeedbackTone) -> Result<(), Self::Error>;
}

/// Sink for environments without audio (server rendering, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSink;

impl ToneSink for SilentSink {
    type Error = std::convert::Infallible;

    fn play(&self, _tone: &FeedbackTone) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Play the default feedback tone on `sink`, ignoring failures.
///
/// Returns whether the sink accepted the tone.
pub fn play_feedback_sound<S: ToneSink>(sink: &S) -> bool {
    match sink.play(&FeedbackTone::default()) {
        Ok(()) => true,
        Err(err) => {
            tracing::trace!(?err, "feedback tone unavailable");
            false
        }
    }
}
