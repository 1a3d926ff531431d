//! Feedback tone playback through Web Audio.
//!
//! Every failure (no `AudioContext`, autoplay policy, closed context) is
//! swallowed by `effects::play_feedback_sound`; nothing here reaches the user.

#[cfg(feature = "hydrate")]
use effects::tone::Waveform;
use effects::{FeedbackTone, ToneSink};

/// Plays tones on a fresh `AudioContext` per click, closed shortly after.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebAudioSink;

#[cfg(feature = "hydrate")]
fn oscillator_type(waveform: Waveform) -> web_sys::OscillatorType {
    match waveform {
        Waveform::Sine => web_sys::OscillatorType::Sine,
        Waveform::Square => web_sys::OscillatorType::Square,
        Waveform::Sawtooth => web_sys::OscillatorType::Sawtooth,
        Waveform::Triangle => web_sys::OscillatorType::Triangle,
    }
}

#[cfg(feature = "hydrate")]
impl ToneSink for WebAudioSink {
    type Error = wasm_bindgen::JsValue;

    #[allow(clippy::cast_possible_truncation)]
    fn play(&self, tone: &FeedbackTone) -> Result<(), Self::Error> {
        let ctx = web_sys::AudioContext::new()?;
        let oscillator = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        oscillator.set_type(oscillator_type(tone.waveform));
        oscillator.frequency().set_value(tone.frequency_hz as f32);
        gain.gain().set_value(tone.initial_gain as f32);
        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        let now = ctx.current_time();
        gain.gain().set_value_at_time(tone.initial_gain as f32, now)?;
        for step in &tone.envelope {
            gain.gain()
                .exponential_ramp_to_value_at_time(step.gain as f32, now + step.at_secs)?;
        }
        oscillator.start()?;
        oscillator.stop_with_when(now + tone.stop_after_secs)?;

        gloo_timers::callback::Timeout::new(tone.close_after_ms, move || {
            if let Err(err) = ctx.close() {
                leptos::logging::debug_warn!("audio context close failed: {err:?}");
            }
        })
        .forget();
        Ok(())
    }
}

#[cfg(not(feature = "hydrate"))]
impl ToneSink for WebAudioSink {
    type Error = std::convert::Infallible;

    fn play(&self, _tone: &FeedbackTone) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Best-effort click tone. Returns whether a tone was started.
pub fn play_feedback_sound() -> bool {
    effects::play_feedback_sound(&WebAudioSink)
}
