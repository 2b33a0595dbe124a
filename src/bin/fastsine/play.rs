//! Listening test: a pot-tuned fast sine through chorus and echo

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use quarterwave_dsp::dsp::shape::{limit_buffer, pot_frequency};
use quarterwave_dsp::graph::{ChorusNode, EchoNode, GraphNode, NodeExt, RenderCtx, SineOsc};
use quarterwave_dsp::MAX_BLOCK_SIZE;

pub fn run(pot: f32, seconds: f32) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    let frequency = pot_frequency(pot);

    println!("=== fastsine ===");
    println!("Sample rate: {} Hz", sample_rate);
    println!("Channels: {}", channels);
    println!("Pot: {:.2} -> {:.1} Hz", pot, frequency);
    println!("Playing for {} s...", seconds);

    let ctx = RenderCtx::from_freq(sample_rate, frequency, 100.0);
    let mut voice = SineOsc::new()
        .through(ChorusNode::new(0.8, 2.0, 0.4))
        .through(EchoNode::new(300.0, 0.45, 0.3));
    voice.note_on(&ctx);

    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];

                    voice.render_block(block, &ctx);
                    limit_buffer(block);

                    // Mono to all channels
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;
    std::thread::sleep(std::time::Duration::from_secs_f32(seconds.max(0.0)));

    Ok(())
}
