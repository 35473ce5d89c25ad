//! 8-bit style feedback tones on the default output device.
//!
//! A single always-on cpal stream mixes a small list of scheduled voices;
//! `play` just pushes voices onto that list. When no output device exists
//! the app runs silent.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEvent {
    Click,
    Correct,
    Wrong,
}

#[derive(Clone, Copy)]
enum Waveform {
    Square,
    Sawtooth,
}

/// One scheduled tone: waits `delay` samples, then plays `total` samples of
/// the waveform with an exponential gain decay from 0.1 down to 0.01.
struct Voice {
    waveform: Waveform,
    freq: f32,
    phase: f32,
    delay: u32,
    played: u32,
    total: u32,
}

impl Voice {
    fn new(sample_rate: f32, freq: f32, waveform: Waveform, duration: f32, delay: f32) -> Self {
        Self {
            waveform,
            freq,
            phase: 0.0,
            delay: (delay * sample_rate) as u32,
            played: 0,
            total: (duration * sample_rate).max(1.0) as u32,
        }
    }

    fn next_sample(&mut self, sample_rate: f32) -> f32 {
        if self.delay > 0 {
            self.delay -= 1;
            return 0.0;
        }
        if self.played >= self.total {
            return 0.0;
        }

        let raw = match self.waveform {
            Waveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * self.phase - 1.0,
        };

        let t = self.played as f32 / self.total as f32;
        let gain = 0.1 * 0.1f32.powf(t);

        self.phase += self.freq / sample_rate;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        self.played += 1;

        raw * gain
    }

    fn finished(&self) -> bool {
        self.delay == 0 && self.played >= self.total
    }
}

pub struct AudioEngine {
    voices: Arc<Mutex<Vec<Voice>>>,
    sample_rate: f32,
    // Dropping the stream stops playback; keep it for the app's lifetime.
    _stream: cpal::Stream,
}

impl AudioEngine {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or("no audio output device")?;
        let supported = device.default_output_config()?;
        if supported.sample_format() != cpal::SampleFormat::F32 {
            return Err(format!("unsupported sample format {:?}", supported.sample_format()).into());
        }
        let config: cpal::StreamConfig = supported.config();
        let sample_rate = config.sample_rate as f32;
        let channels = config.channels as usize;

        let voices: Arc<Mutex<Vec<Voice>>> = Arc::new(Mutex::new(Vec::new()));
        let callback_voices = Arc::clone(&voices);

        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _| {
                let mut voices = match callback_voices.lock() {
                    Ok(v) => v,
                    Err(poisoned) => poisoned.into_inner(),
                };
                for frame in data.chunks_mut(channels) {
                    let mut sample = 0.0;
                    for voice in voices.iter_mut() {
                        sample += voice.next_sample(sample_rate);
                    }
                    let sample = sample.clamp(-1.0, 1.0);
                    for out in frame.iter_mut() {
                        *out = sample;
                    }
                }
                voices.retain(|v| !v.finished());
            },
            |e| log::warn!("audio stream error: {e}"),
            None,
        )?;
        stream.play()?;

        log::info!("audio output at {sample_rate} Hz, {channels} channel(s)");
        Ok(Self {
            voices,
            sample_rate,
            _stream: stream,
        })
    }

    pub fn play(&self, event: SoundEvent) {
        match event {
            SoundEvent::Click => {
                self.tone(400.0, Waveform::Square, 0.05, 0.0);
            }
            SoundEvent::Correct => {
                // C5–E5–G5 arpeggio.
                self.tone(523.25, Waveform::Square, 0.1, 0.0);
                self.tone(659.25, Waveform::Square, 0.1, 0.1);
                self.tone(783.99, Waveform::Square, 0.2, 0.2);
            }
            SoundEvent::Wrong => {
                // Descending low buzz.
                self.tone(150.0, Waveform::Sawtooth, 0.2, 0.0);
                self.tone(100.0, Waveform::Sawtooth, 0.3, 0.1);
            }
        }
    }

    fn tone(&self, freq: f32, waveform: Waveform, duration: f32, delay: f32) {
        let voice = Voice::new(self.sample_rate, freq, waveform, duration, delay);
        if let Ok(mut voices) = self.voices.lock() {
            voices.push(voice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_decays_and_finishes() {
        let mut voice = Voice::new(48_000.0, 440.0, Waveform::Square, 0.05, 0.0);
        let first = voice.next_sample(48_000.0).abs();
        assert!(first > 0.05 && first <= 0.1);

        let mut last = first;
        while !voice.finished() {
            last = voice.next_sample(48_000.0).abs();
        }
        // Faded close to the 0.01 floor by the end.
        assert!(last < 0.02);
        assert_eq!(voice.next_sample(48_000.0), 0.0);
    }

    #[test]
    fn delayed_voice_is_silent_until_its_start() {
        let mut voice = Voice::new(1_000.0, 100.0, Waveform::Sawtooth, 0.1, 0.01);
        for _ in 0..10 {
            assert_eq!(voice.next_sample(1_000.0), 0.0);
        }
        assert!(voice.next_sample(1_000.0).abs() > 0.0);
    }
}
