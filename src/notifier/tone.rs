// ABOUTME: Audible cue for alerts — synthesizes a short sine-wave WAV and plays it.
// ABOUTME: Playback shells out to a system player and falls back to the terminal bell.

use std::io::Write;
use std::process::Stdio;

use async_trait::async_trait;

use crate::config::ToneConfig;

const SAMPLE_RATE: u32 = 22_050;
const AMPLITUDE: f64 = 0.4;
/// Length of the linear fade at each end, to avoid clicks.
const FADE_MS: u64 = 10;

/// Longest tone that will be rendered; longer requests are clamped.
pub const MAX_TONE_DURATION_MS: u64 = 10_000;

/// Players probed in order when none is configured.
const DEFAULT_PLAYERS: &[&[&str]] = &[&["paplay"], &["aplay", "-q"], &["afplay"]];

/// Something that can produce the alert tone.
#[async_trait]
pub trait TonePlayer: Send + Sync {
    async fn play(&self) -> anyhow::Result<()>;
}

/// Tone player used when audio is disabled.
pub struct SilentTonePlayer;

#[async_trait]
impl TonePlayer for SilentTonePlayer {
    async fn play(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Plays a pre-rendered WAV through an external command.
pub struct CommandTonePlayer {
    wav: Vec<u8>,
    player: Option<Vec<String>>,
}

impl CommandTonePlayer {
    pub fn new(config: &ToneConfig) -> Self {
        let player = config
            .player
            .as_deref()
            .map(|cmd| cmd.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty());
        Self {
            wav: sine_wav(config.frequency_hz, config.duration_ms, SAMPLE_RATE),
            player,
        }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        match &self.player {
            Some(parts) => vec![parts.clone()],
            None => DEFAULT_PLAYERS
                .iter()
                .map(|parts| parts.iter().map(|p| p.to_string()).collect())
                .collect(),
        }
    }
}

#[async_trait]
impl TonePlayer for CommandTonePlayer {
    async fn play(&self) -> anyhow::Result<()> {
        let mut file = tempfile::Builder::new()
            .prefix("blinkwatch-tone-")
            .suffix(".wav")
            .tempfile()?;
        file.write_all(&self.wav)?;
        file.flush()?;

        for parts in self.candidates() {
            let Some((program, args)) = parts.split_first() else {
                continue;
            };
            let status = tokio::process::Command::new(program)
                .args(args)
                .arg(file.path())
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await;
            match status {
                Ok(status) if status.success() => return Ok(()),
                Ok(status) => tracing::debug!(%program, %status, "tone player exited unsuccessfully"),
                Err(e) => tracing::debug!(%program, error = %e, "tone player unavailable"),
            }
        }

        tracing::debug!("no audio player succeeded; ringing terminal bell");
        ring_bell()?;
        Ok(())
    }
}

fn ring_bell() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

/// Render a mono 16-bit PCM WAV file containing a sine tone.
///
/// `duration_ms` is clamped to [`MAX_TONE_DURATION_MS`] so the RIFF sizes fit in `u32`.
pub fn sine_wav(frequency_hz: u32, duration_ms: u64, sample_rate: u32) -> Vec<u8> {
    let duration_ms = duration_ms.min(MAX_TONE_DURATION_MS);
    let sample_count = (sample_rate as u64 * duration_ms / 1000) as usize;
    let fade_samples = ((sample_rate as u64 * FADE_MS / 1000) as usize)
        .min(sample_count / 2)
        .max(1);
    let data_len = (sample_count * 2) as u32;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());

    let step = 2.0 * std::f64::consts::PI * frequency_hz as f64 / sample_rate as f64;
    for i in 0..sample_count {
        let from_end = sample_count - 1 - i;
        let envelope = (i.min(from_end) as f64 / fade_samples as f64).min(1.0);
        let value = (i as f64 * step).sin() * AMPLITUDE * envelope;
        let sample = (value * i16::MAX as f64) as i16;
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}
