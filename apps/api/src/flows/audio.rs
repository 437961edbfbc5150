//! In-memory PCM → WAV transcode for the video-resume narration track.
//!
//! The TTS model emits raw 16-bit mono PCM at 24 kHz; the video model wants
//! a self-describing container, so the samples are wrapped in a minimal
//! RIFF/WAVE header and shipped as a base64 data URI.

use base64::prelude::*;
use bytes::{BufMut, Bytes, BytesMut};

pub const CHANNELS: u16 = 1;
pub const SAMPLE_RATE: u32 = 24_000;
pub const BITS_PER_SAMPLE: u16 = 16;

const HEADER_LEN: usize = 44;

/// Wraps raw PCM samples in a WAV container.
pub fn encode_wav(pcm: &[u8]) -> Bytes {
    let block_align = CHANNELS * (BITS_PER_SAMPLE / 8);
    let byte_rate = SAMPLE_RATE * u32::from(block_align);
    let data_len = pcm.len() as u32;

    let mut wav = BytesMut::with_capacity(HEADER_LEN + pcm.len());
    wav.put_slice(b"RIFF");
    wav.put_u32_le(36 + data_len);
    wav.put_slice(b"WAVE");
    wav.put_slice(b"fmt ");
    wav.put_u32_le(16); // PCM fmt chunk size
    wav.put_u16_le(1); // audio format: uncompressed PCM
    wav.put_u16_le(CHANNELS);
    wav.put_u32_le(SAMPLE_RATE);
    wav.put_u32_le(byte_rate);
    wav.put_u16_le(block_align);
    wav.put_u16_le(BITS_PER_SAMPLE);
    wav.put_slice(b"data");
    wav.put_u32_le(data_len);
    wav.put_slice(pcm);
    wav.freeze()
}

/// Encodes PCM samples as a `data:audio/wav;base64,...` URI.
pub fn wav_data_uri(pcm: &[u8]) -> String {
    format!(
        "data:audio/wav;base64,{}",
        BASE64_STANDARD.encode(encode_wav(pcm))
    )
}
