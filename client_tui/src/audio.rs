//! Sound effects through the default output device.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use game_core::{AudioSink, SoundId};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

/// Decoded sample, cheap to clone for each play
pub type Sound = Buffered<Decoder<BufReader<File>>>;

/// Open and decode a sound file
pub fn decode_sound(path: &Path) -> io::Result<Sound> {
    let file = File::open(path)?;
    let decoder = Decoder::new(BufReader::new(file))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    Ok(decoder.buffered())
}

pub struct RodioAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds: HashMap<SoundId, Sound>,
}

impl RodioAudio {
    pub fn new() -> io::Result<Self> {
        let (stream, handle) = OutputStream::try_default().map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("no audio output: {e}"))
        })?;
        Ok(Self {
            _stream: stream,
            handle,
            sounds: HashMap::new(),
        })
    }
}

impl AudioSink for RodioAudio {
    fn load_sound(&mut self, id: SoundId, path: &Path) -> io::Result<()> {
        let sound = decode_sound(path)?;
        log::debug!(
            "Loaded {:?} from {} ({} ch, {} Hz)",
            id,
            path.display(),
            sound.channels(),
            sound.sample_rate()
        );
        self.sounds.insert(id, sound);
        Ok(())
    }

    fn play_sound(&mut self, id: SoundId) {
        let Some(sound) = self.sounds.get(&id) else {
            return;
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.append(sound.clone());
                sink.detach();
            }
            Err(e) => log::debug!("Could not play {id:?}: {e}"),
        }
    }
}
