//! Cue playback.
//!
//! Cues are resolved to bundled `<name>.mp3` files in a sound directory.
//! Playback is fire-and-forget: a new cue may overlap one still playing, and
//! failures are returned to the caller for logging rather than retried.
//!
//! Real output requires the `audio` feature; without it, cues are resolved
//! and logged only.

use std::{fmt, path::PathBuf};

use rubber_core::Cue;

/// Environment variable overriding the sound asset directory.
pub const SOUND_DIR_ENV: &str = "RUBBER_SOUND_DIR";

const SOUND_EXTENSION: &str = "mp3";

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[cfg_attr(not(feature = "audio"), allow(dead_code))]
pub(crate) enum AudioError {
    #[display("sound asset not found: {}", path.display())]
    MissingAsset { path: PathBuf },
    #[display("audio output unavailable: {reason}")]
    Device { reason: String },
    #[display("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}

pub(crate) trait CuePlayer: fmt::Debug {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Returns the sound directory: `$RUBBER_SOUND_DIR`, or the workspace `assets/sounds`.
#[must_use]
pub fn default_sound_dir() -> PathBuf {
    std::env::var_os(SOUND_DIR_ENV).map_or_else(
        || PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/sounds")),
        PathBuf::from,
    )
}

#[derive(Debug)]
pub(crate) struct BundledCuePlayer {
    sound_dir: PathBuf,
    output: output::Output,
}

impl BundledCuePlayer {
    #[must_use]
    pub(crate) fn new(sound_dir: PathBuf) -> Self {
        Self {
            sound_dir,
            output: output::Output::default(),
        }
    }

    #[must_use]
    pub(crate) fn asset_path(&self, cue: Cue) -> PathBuf {
        self.sound_dir
            .join(cue.name())
            .with_extension(SOUND_EXTENSION)
    }
}

impl CuePlayer for BundledCuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        let path = self.asset_path(cue);
        if !path.is_file() {
            return Err(AudioError::MissingAsset { path });
        }
        self.output.play(&path)
    }
}

#[cfg(all(feature = "audio", not(target_arch = "wasm32")))]
mod output {
    use std::{fmt, fs::File, io::BufReader, path::Path};

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::AudioError;

    // The stream is opened on first use and kept open; dropping it stops playback.
    #[derive(Default)]
    pub(super) struct Output {
        stream: Option<(OutputStream, OutputStreamHandle)>,
    }

    impl fmt::Debug for Output {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Output")
                .field("open", &self.stream.is_some())
                .finish()
        }
    }

    impl Output {
        pub(super) fn play(&mut self, path: &Path) -> Result<(), AudioError> {
            if self.stream.is_none() {
                let stream = OutputStream::try_default().map_err(|e| AudioError::Device {
                    reason: e.to_string(),
                })?;
                self.stream = Some(stream);
            }
            let Some((_, handle)) = &self.stream else {
                return Err(AudioError::Device {
                    reason: "output stream is not open".to_owned(),
                });
            };

            let file = File::open(path).map_err(|e| AudioError::Decode {
                path: path.to_owned(),
                reason: e.to_string(),
            })?;
            let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
                path: path.to_owned(),
                reason: e.to_string(),
            })?;
            let sink = Sink::try_new(handle).map_err(|e| AudioError::Device {
                reason: e.to_string(),
            })?;
            sink.append(source);
            sink.detach();
            Ok(())
        }
    }
}

#[cfg(not(all(feature = "audio", not(target_arch = "wasm32"))))]
mod output {
    use std::path::Path;

    use super::AudioError;

    #[derive(Debug, Default)]
    pub(super) struct Output;

    impl Output {
        #[allow(clippy::unused_self, clippy::unnecessary_wraps)]
        pub(super) fn play(&mut self, path: &Path) -> Result<(), AudioError> {
            log::debug!("audio output disabled, skipping {}", path.display());
            Ok(())
        }
    }
}
