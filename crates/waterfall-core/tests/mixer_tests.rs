// Proximity bucket, mix interpolation and edge-triggered audio commands.

use glam::Vec3;
use waterfall_core::*;

fn ramp_target(cmds: &[AudioCommand], which: AudioParam) -> Option<(f32, f32)> {
    cmds.iter().find_map(|c| match *c {
        AudioCommand::Ramp {
            param,
            target,
            duration_sec,
        } if param == which => Some((target, duration_sec)),
        _ => None,
    })
}

fn set_value(cmds: &[AudioCommand], which: AudioParam) -> Option<f32> {
    cmds.iter().find_map(|c| match *c {
        AudioCommand::Set { param, value } if param == which => Some(value),
        _ => None,
    })
}

#[test]
fn bucket_reference_points() {
    assert_eq!(proximity_bucket(25.0), 0.0);
    assert_eq!(proximity_bucket(10.0), 1.0);
    assert_eq!(proximity_bucket(17.5), 0.5);
}

#[test]
fn bucket_is_clamped_and_quantised() {
    assert_eq!(proximity_bucket(100.0), 0.0);
    assert_eq!(proximity_bucket(0.0), 1.0);
    for i in 0..200 {
        let d = 5.0 + i as f32 * 0.13;
        let p = proximity_bucket(d);
        assert!((0.0..=1.0).contains(&p));
        let tenths = p * 10.0;
        assert!((tenths - tenths.round()).abs() < 1e-4, "{p} at d={d}");
    }
}

#[test]
fn bucket_increases_as_boat_approaches() {
    let mut prev = proximity_bucket(30.0);
    let mut d = 30.0;
    while d > 5.0 {
        let p = proximity_bucket(d);
        assert!(p >= prev);
        prev = p;
        d -= 0.25;
    }
}

#[test]
fn mix_endpoints_and_midpoint() {
    let mix = WaterfallMix::default();
    assert_eq!(mix.at(0.0).gain, 0.2);
    assert!((mix.at(1.0).gain - 0.3).abs() < 1e-6);
    assert!((mix.at(0.5).gain - 0.25).abs() < 1e-6);
    // Reverb runs the other way: nearer is drier.
    assert!((mix.at(1.0).reverb_wet - 0.1).abs() < 1e-6);
    assert!((mix.at(0.5).filter_frequency - 2660.0).abs() < 1e-2);
}

#[test]
fn mix_values_stay_within_endpoints() {
    let mix = WaterfallMix::default();
    for i in 0..=10 {
        let s = mix.at(i as f32 / 10.0);
        assert!(s.gain >= 0.2 - 1e-6 && s.gain <= 0.3 + 1e-6);
        assert!(s.reverb_wet >= 0.1 - 1e-6 && s.reverb_wet <= 0.2 + 1e-6);
        assert!(s.filter_frequency >= 320.0 && s.filter_frequency <= 5000.0 + 1e-2);
    }
}

#[test]
fn bucket_change_emits_gain_wet_and_filter() {
    let mut mixer = ProximityMixer::new(WaterfallMix::default());
    let cmds = mixer.update_proximity(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
    assert_eq!(cmds.len(), 3);
    let (gain, gain_t) = ramp_target(&cmds, AudioParam::WaterfallGain).unwrap();
    assert!((gain - 0.3).abs() < 1e-6);
    assert_eq!(gain_t, 1.0);
    let (freq, freq_t) = ramp_target(&cmds, AudioParam::WaterfallFilterFrequency).unwrap();
    assert!((freq - 5000.0).abs() < 1e-2);
    assert_eq!(freq_t, 2.0);
    let wet = set_value(&cmds, AudioParam::WaterfallReverbWet).unwrap();
    assert!((wet - 0.1).abs() < 1e-6);
    assert_eq!(mixer.bucket(), 1.0);
}

#[test]
fn same_bucket_twice_is_silent() {
    let mut mixer = ProximityMixer::new(WaterfallMix::default());
    assert_eq!(mixer.update_proximity(Vec3::new(17.5, 0.0, 0.0), Vec3::ZERO).len(), 3);
    // 17.4 still rounds to 0.5.
    assert!(mixer
        .update_proximity(Vec3::new(17.4, 0.0, 0.0), Vec3::ZERO)
        .is_empty());
}

#[test]
fn starting_far_away_emits_nothing() {
    let mut mixer = ProximityMixer::new(WaterfallMix::default());
    assert!(mixer
        .update_proximity(Vec3::new(0.0, 0.05, 27.0), Vec3::ZERO)
        .is_empty());
    assert_eq!(mixer.bucket(), 0.0);
}

#[test]
fn slow_approach_emits_once_per_tenth() {
    let mut mixer = ProximityMixer::new(WaterfallMix::default());
    let mut updates = 0;
    let mut d = 26.0;
    while d >= 9.0 {
        if !mixer.update_proximity(Vec3::new(0.0, 0.0, d), Vec3::ZERO).is_empty() {
            updates += 1;
        }
        d -= 0.01;
    }
    assert_eq!(updates, 10);
}

#[test]
fn steering_edges_ramp_motorboat_twice() {
    let mut mixer = ProximityMixer::new(WaterfallMix::default());
    let emitted: Vec<AudioCommand> = [false, true, true, false]
        .into_iter()
        .filter_map(|active| mixer.update_steering(active))
        .collect();
    assert_eq!(
        emitted,
        vec![
            AudioCommand::Ramp {
                param: AudioParam::MotorboatGain,
                target: 0.4,
                duration_sec: 2.0,
            },
            AudioCommand::Ramp {
                param: AudioParam::MotorboatGain,
                target: 0.0,
                duration_sec: 2.0,
            },
        ]
    );
}

#[test]
fn first_interaction_unlocks_once() {
    let mut ctx = AppContext::new();
    let first = ctx.mark_interacted();
    assert_eq!(first[0], AudioCommand::Unlock);
    assert_eq!(
        ramp_target(&first, AudioParam::MasterGain),
        Some((0.5, 1.0))
    );
    assert!(ctx.mark_interacted().is_empty());
    assert!(ctx.has_user_interacted());
}

#[test]
fn mute_toggles_emit_on_change_only() {
    let mut ctx = AppContext::new();
    assert_eq!(ctx.set_muted(false), None);
    assert_eq!(ctx.toggle_muted(), Some(AudioCommand::SetMuted(true)));
    assert_eq!(ctx.set_muted(true), None);
    assert_eq!(ctx.toggle_muted(), Some(AudioCommand::SetMuted(false)));
}

#[test]
fn initial_levels_match_graph_defaults() {
    let levels = initial_levels(&WaterfallMix::default());
    assert!(levels.contains(&(AudioParam::MasterGain, 0.0)));
    assert!(levels.contains(&(AudioParam::WaterfallGain, 0.5)));
    assert!(levels.contains(&(AudioParam::WavesGain, 0.02)));
}

#[test]
fn loaded_flag_is_independent_of_interaction() {
    let mut ctx = AppContext::new();
    assert!(!ctx.is_loaded());
    ctx.set_loaded(true);
    assert!(ctx.is_loaded());
    assert!(!ctx.has_user_interacted());
    assert_eq!(ctx.mark_interacted().len(), 2);
    assert!(ctx.is_loaded());
}
