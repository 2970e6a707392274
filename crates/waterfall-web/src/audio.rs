use waterfall_core::{initial_levels, AudioCommand, AudioParam, AudioSink, WaterfallMix};
use web_sys as web;

// Exponential ramps cannot start or end at zero; silence is approximated.
const MIN_RAMP_VALUE: f32 = 1e-7;

const WATERFALL_NOISE_SEC: f32 = 3.0;
const WAVES_NOISE_SEC: f32 = 6.0;
const MOTOR_HZ: f32 = 48.0;
const MOTOR_TONE_HZ: f32 = 380.0;

/// Looping procedural sources feeding the waterfall, motorboat and waves
/// channels, all summed into `master_gain`.
pub struct AudioGraph {
    ctx: web::AudioContext,
    master_gain: web::GainNode,
    output: web::GainNode,
    waterfall_gain: web::GainNode,
    waterfall_filter: web::BiquadFilterNode,
    reverb_dry: web::GainNode,
    reverb_wet: web::GainNode,
    motorboat_gain: web::GainNode,
    waves_gain: web::GainNode,
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(ctx).map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

// simple xorshift32 for deterministic noise
fn xorshift(seed: &mut u32) -> f32 {
    let mut x = *seed;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *seed = x;
    (x as f32 / u32::MAX as f32) * 2.0 - 1.0
}

/// Stereo noise loop. `brown` integrates the noise for a darker, surf-like bed.
fn noise_buffer(ctx: &web::AudioContext, seconds: f32, brown: bool) -> anyhow::Result<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let len = (sr * seconds) as u32;
    let buf = ctx
        .create_buffer(2, len, sr)
        .map_err(|e| anyhow::anyhow!("AudioBuffer error: {:?}", e))?;
    let mut seeds = [0x1234_ABCDu32, 0x7890_FEDCu32];
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut data = vec![0.0f32; len as usize];
        let mut last = 0.0f32;
        for s in data.iter_mut() {
            let white = xorshift(seed);
            *s = if brown {
                last = (last + 0.02 * white) / 1.02;
                last * 3.5
            } else {
                white
            };
        }
        let _ = buf.copy_to_channel(&mut data, ch as i32);
    }
    Ok(buf)
}

/// Decaying noise impulse response standing in for a reverb of `decay_sec`.
fn reverb_impulse(ctx: &web::AudioContext, decay_sec: f32) -> anyhow::Result<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let seconds = decay_sec.max(0.1);
    let len = (sr * seconds) as u32;
    let ir = ctx
        .create_buffer(2, len, sr)
        .map_err(|e| anyhow::anyhow!("impulse buffer error: {:?}", e))?;
    let mut seeds = [0x0BAD_F00Du32, 0x5EED_CAFEu32];
    let dt = 1.0 / sr;
    for (ch, seed) in seeds.iter_mut().enumerate() {
        let mut data = vec![0.0f32; len as usize];
        for (i, s) in data.iter_mut().enumerate() {
            let t = i as f32 * dt;
            *s = xorshift(seed) * (1.0 - t / seconds).max(0.0).powi(2);
        }
        let _ = ir.copy_to_channel(&mut data, ch as i32);
    }
    Ok(ir)
}

fn looping_source(ctx: &web::AudioContext, buffer: &web::AudioBuffer) -> anyhow::Result<web::AudioBufferSourceNode> {
    let src = web::AudioBufferSourceNode::new(ctx)
        .map_err(|e| anyhow::anyhow!("AudioBufferSourceNode error: {:?}", e))?;
    src.set_buffer(Some(buffer));
    src.set_loop(true);
    Ok(src)
}

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

impl AudioGraph {
    pub fn build(ctx: &web::AudioContext, mix: &WaterfallMix) -> anyhow::Result<Self> {
        let levels = initial_levels(mix);
        let level = |param: AudioParam| {
            levels
                .iter()
                .find(|(p, _)| *p == param)
                .map(|(_, v)| *v)
                .unwrap_or(0.0)
        };
        let master_gain = create_gain(ctx, level(AudioParam::MasterGain), "Master")?;
        let waterfall_gain = create_gain(ctx, level(AudioParam::WaterfallGain), "Waterfall")?;
        let filter_hz = level(AudioParam::WaterfallFilterFrequency);
        let wet = level(AudioParam::WaterfallReverbWet);
        let motorboat_gain = create_gain(ctx, level(AudioParam::MotorboatGain), "Motorboat")?;
        let waves_gain = create_gain(ctx, level(AudioParam::WavesGain), "Waves")?;
        let output = create_gain(ctx, 1.0, "Output")?;

        // waterfall -> gain -> lowpass -> reverb(dry/wet) -> master
        let waterfall_filter = web::BiquadFilterNode::new(ctx).map_err(js_err)?;
        waterfall_filter.set_type(web::BiquadFilterType::Lowpass);
        waterfall_filter.frequency().set_value(filter_hz);
        let reverb = web::ConvolverNode::new(ctx).map_err(js_err)?;
        reverb.set_normalize(true);
        reverb.set_buffer(Some(&reverb_impulse(ctx, mix.min.reverb_decay)?));
        let reverb_dry = create_gain(ctx, 1.0 - wet, "Reverb dry")?;
        let reverb_wet = create_gain(ctx, wet, "Reverb wet")?;

        let waterfall_src = looping_source(ctx, &noise_buffer(ctx, WATERFALL_NOISE_SEC, false)?)?;
        let _ = waterfall_src.connect_with_audio_node(&waterfall_gain);
        let _ = waterfall_gain.connect_with_audio_node(&waterfall_filter);
        let _ = waterfall_filter.connect_with_audio_node(&reverb_dry);
        let _ = waterfall_filter.connect_with_audio_node(&reverb);
        let _ = reverb.connect_with_audio_node(&reverb_wet);
        let _ = reverb_dry.connect_with_audio_node(&master_gain);
        let _ = reverb_wet.connect_with_audio_node(&master_gain);

        // motorboat -> gain -> master
        let motor = web::OscillatorNode::new(ctx).map_err(js_err)?;
        motor.set_type(web::OscillatorType::Sawtooth);
        motor.frequency().set_value(MOTOR_HZ);
        let motor_tone = web::BiquadFilterNode::new(ctx).map_err(js_err)?;
        motor_tone.set_type(web::BiquadFilterType::Lowpass);
        motor_tone.frequency().set_value(MOTOR_TONE_HZ);
        let _ = motor.connect_with_audio_node(&motor_tone);
        let _ = motor_tone.connect_with_audio_node(&motorboat_gain);
        let _ = motorboat_gain.connect_with_audio_node(&master_gain);

        // waves -> gain -> master
        let waves_src = looping_source(ctx, &noise_buffer(ctx, WAVES_NOISE_SEC, true)?)?;
        let _ = waves_src.connect_with_audio_node(&waves_gain);
        let _ = waves_gain.connect_with_audio_node(&master_gain);

        let _ = master_gain.connect_with_audio_node(&output);
        let _ = output.connect_with_audio_node(&ctx.destination());

        waterfall_src.start().map_err(js_err)?;
        motor.start().map_err(js_err)?;
        waves_src.start().map_err(js_err)?;

        log::info!(
            "[audio] graph ready sr={} filter={}Hz wet={:.2}",
            ctx.sample_rate(),
            filter_hz,
            wet
        );

        Ok(Self {
            ctx: ctx.clone(),
            master_gain,
            output,
            waterfall_gain,
            waterfall_filter,
            reverb_dry,
            reverb_wet,
            motorboat_gain,
            waves_gain,
        })
    }

    fn param(&self, param: AudioParam) -> web::AudioParam {
        match param {
            AudioParam::MasterGain => self.master_gain.gain(),
            AudioParam::WaterfallGain => self.waterfall_gain.gain(),
            AudioParam::WaterfallFilterFrequency => self.waterfall_filter.frequency(),
            AudioParam::WaterfallReverbWet => self.reverb_wet.gain(),
            AudioParam::MotorboatGain => self.motorboat_gain.gain(),
            AudioParam::WavesGain => self.waves_gain.gain(),
        }
    }

    fn set(&self, param: AudioParam, value: f32) {
        if param == AudioParam::WaterfallReverbWet {
            let wet = value.clamp(0.0, 1.0);
            self.reverb_wet.gain().set_value(wet);
            self.reverb_dry.gain().set_value(1.0 - wet);
            return;
        }
        self.param(param).set_value(value);
    }

    fn ramp(&self, param: AudioParam, target: f32, duration_sec: f32) {
        let p = self.param(param);
        let now = self.ctx.current_time();
        let from = p.value().max(MIN_RAMP_VALUE);
        let _ = p.cancel_scheduled_values(now);
        let _ = p.set_value_at_time(from, now);
        if let Err(e) =
            p.exponential_ramp_to_value_at_time(target.max(MIN_RAMP_VALUE), now + duration_sec as f64)
        {
            log::error!("[audio] ramp {:?} -> {} failed: {:?}", param, target, e);
        }
    }
}

impl AudioSink for AudioGraph {
    fn send(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::Set { param, value } => self.set(param, value),
            AudioCommand::Ramp {
                param,
                target,
                duration_sec,
            } => self.ramp(param, target, duration_sec),
            AudioCommand::Unlock => {
                if let Err(e) = self.ctx.resume() {
                    log::error!("[audio] resume failed: {:?}", e);
                }
            }
            AudioCommand::SetMuted(muted) => {
                self.output.gain().set_value(if muted { 0.0 } else { 1.0 });
            }
        }
    }
}
