//! Footstep playback.

use std::f32::consts::TAU;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

const SAMPLE_RATE: u32 = 44_100;
const STEP_SECONDS: f32 = 0.09;

/// The footstep channel: one persistent sink and one synthesized sample.
///
/// Playback is fire-and-forget, but a new step is only queued while the
/// sink is empty, so strides never overlap no matter how fast the walk
/// animation runs.
pub struct Footsteps {
    _stream: OutputStream,
    sink: Sink,
    samples: Vec<f32>,
}

impl Footsteps {
    /// Open the default audio device. `None` when there is no device (a
    /// headless terminal still gets the silent stroll).
    pub fn new() -> Option<Self> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        let sink = Sink::try_new(&handle).ok()?;
        sink.set_volume(0.5);
        Some(Self {
            _stream: stream,
            sink,
            samples: step_samples(SAMPLE_RATE),
        })
    }

    pub fn play(&self) {
        if self.sink.empty() {
            self.sink
                .append(SamplesBuffer::new(1, SAMPLE_RATE, self.samples.clone()));
        }
    }
}

/// A soft scuff: a decaying low thump with a faint high partial.
fn step_samples(sample_rate: u32) -> Vec<f32> {
    let count = (sample_rate as f32 * STEP_SECONDS) as usize;
    (0..count)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            let envelope = (1.0 - t / STEP_SECONDS).max(0.0).powi(2);
            let thump = (TAU * 95.0 * t).sin();
            let scuff = (TAU * 640.0 * t).sin() * 0.2;
            (thump + scuff) * envelope * 0.6
        })
        .collect()
}
