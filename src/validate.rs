//! Settings validation.
//!
//! One pure function per tool family. Each returns every violated
//! constraint as a human-readable message, in the order the checks run;
//! an empty list means the value is ready for [`crate::compile`]. Nothing
//! here panics or short-circuits: screens surface the whole list and block
//! submission while it is non-empty.

use crate::settings::{
    CompressionSettings, GifSettings, ImageToVideoSettings, MotionKind, ReverseSettings,
    TransitionKind,
};

pub fn validate_compression(settings: &CompressionSettings) -> Vec<String> {
    let mut violations = Vec::new();

    if let Some(res) = &settings.resolution {
        if res.width == 0 {
            violations.push("resolution width must be > 0".to_string());
        }
        if res.height == 0 {
            violations.push("resolution height must be > 0".to_string());
        }
    }

    if settings.bitrate.target_kbps < 100 {
        violations.push("target bitrate must be at least 100 kbps".to_string());
    }
    if settings.bitrate.max_kbps < settings.bitrate.target_kbps {
        violations.push("maximum bitrate must be >= target bitrate".to_string());
    }

    if settings.audio.enabled && !(32..=320).contains(&settings.audio.bitrate_kbps) {
        violations.push("audio bitrate must be between 32 and 320 kbps".to_string());
    }

    violations
}

pub fn validate_reverse(settings: &ReverseSettings) -> Vec<String> {
    let mut violations = Vec::new();

    if !(0.25..=4.0).contains(&settings.speed) {
        violations.push("speed must be between 0.25 and 4.0".to_string());
    }

    if settings.transition.enabled {
        if settings.transition.duration_secs < 0.0 {
            violations.push("transition duration must be >= 0 seconds".to_string());
        }
        if settings.transition.kind == TransitionKind::None
            && settings.transition.duration_secs > 0.0
        {
            violations.push("transition type 'none' cannot have a duration".to_string());
        }
    }

    violations
}

pub fn validate_gif(settings: &GifSettings) -> Vec<String> {
    let mut violations = Vec::new();

    if settings.width == 0 {
        violations.push("width must be > 0".to_string());
    }
    if settings.height == 0 {
        violations.push("height must be > 0".to_string());
    }
    if !(1..=30).contains(&settings.fps) {
        violations.push("fps must be between 1 and 30".to_string());
    }
    if settings.start_time < 0.0 {
        violations.push("start time must be >= 0 seconds".to_string());
    }
    if settings.duration <= 0.0 {
        violations.push("duration must be > 0 seconds".to_string());
    }
    if let Some(q) = settings.quality {
        if !(1..=100).contains(&q) {
            violations.push("quality must be between 1 and 100".to_string());
        }
    }

    if settings.optimization.enabled {
        let colors = settings.optimization.color_reduction;
        if !(2..=256).contains(&colors) || colors % 2 != 0 {
            violations.push("color reduction must be an even number between 2 and 256".to_string());
        }
        if settings.optimization.lossy > 100 {
            violations.push("lossy level must be between 0 and 100".to_string());
        }
    }

    violations
}

pub fn validate_image_to_video(settings: &ImageToVideoSettings) -> Vec<String> {
    let mut violations = Vec::new();

    if settings.duration <= 0.0 {
        violations.push("duration must be > 0 seconds".to_string());
    }
    if !(1..=60).contains(&settings.fps) {
        violations.push("fps must be between 1 and 60".to_string());
    }

    if settings.motion.enabled {
        match &settings.motion.kind {
            MotionKind::KenBurns {
                zoom_start,
                zoom_end,
                ..
            } => {
                if *zoom_start <= 0.0 || *zoom_end <= 0.0 {
                    violations.push("ken burns zoom factors must be > 0".to_string());
                }
            }
            MotionKind::Parallax { intensity, layers } => {
                if *intensity > 100 {
                    violations.push("parallax intensity must be between 0 and 100".to_string());
                }
                if *layers == 0 {
                    violations.push("parallax must have at least one layer".to_string());
                }
            }
            MotionKind::ThreeD { perspective, .. } => {
                if *perspective <= 0.0 {
                    violations.push("3d perspective must be > 0".to_string());
                }
            }
            MotionKind::Custom { keyframes } => {
                if keyframes.len() < 2 {
                    violations.push("custom motion needs at least two keyframes".to_string());
                }
                if keyframes.iter().any(|k| k.zoom <= 0.0) {
                    violations.push("custom motion keyframe zooms must be > 0".to_string());
                }
            }
        }
    }

    if settings.effects.color_grading.enabled {
        let g = &settings.effects.color_grading;
        for (name, value) in [
            ("brightness", g.brightness),
            ("contrast", g.contrast),
            ("saturation", g.saturation),
            ("temperature", g.temperature),
            ("tint", g.tint),
        ] {
            if !(-100.0..=100.0).contains(&value) {
                violations.push(format!("{name} must be between -100 and 100"));
            }
        }
    }
    if settings.effects.vignette.enabled && settings.effects.vignette.strength > 100 {
        violations.push("vignette strength must be between 0 and 100".to_string());
    }
    if settings.effects.blur.enabled && settings.effects.blur.strength > 100 {
        violations.push("blur strength must be between 0 and 100".to_string());
    }

    if settings.audio.enabled && settings.audio.volume > 100 {
        violations.push("audio volume must be between 0 and 100".to_string());
    }

    for (i, overlay) in settings.overlays.iter().enumerate() {
        if overlay.text.trim().is_empty() {
            violations.push(format!("overlay {i} has empty text"));
        }
        if overlay.start_secs < 0.0 || overlay.end_secs <= overlay.start_secs {
            violations.push(format!("overlay {i} has an invalid time range"));
        }
    }

    let out = &settings.output;
    if out.resolution.width == 0 || out.resolution.height == 0 {
        violations.push("output resolution must be > 0 in both dimensions".to_string());
    }
    if !(1..=100).contains(&out.quality) {
        violations.push("output quality must be between 1 and 100".to_string());
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MotionKeyframe, MotionSettings, Resolution, TransitionSettings};

    #[test]
    fn default_settings_all_validate() {
        assert!(validate_compression(&CompressionSettings::default()).is_empty());
        assert!(validate_reverse(&ReverseSettings::default()).is_empty());
        assert!(validate_gif(&GifSettings::default()).is_empty());
        assert!(validate_image_to_video(&ImageToVideoSettings::default()).is_empty());
    }

    #[test]
    fn compression_reports_every_bitrate_violation() {
        let mut settings = CompressionSettings::default();
        settings.bitrate.target_kbps = 50;
        settings.bitrate.max_kbps = 40;
        let violations = validate_compression(&settings);
        assert!(violations.len() >= 2, "got {violations:?}");
        assert!(violations[0].contains("target bitrate"));
        assert!(violations[1].contains("maximum bitrate"));
    }

    #[test]
    fn compression_zero_resolution_rejected() {
        let mut settings = CompressionSettings::default();
        settings.resolution = Some(Resolution {
            width: 0,
            height: 0,
            maintain_aspect: true,
        });
        let violations = validate_compression(&settings);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn reverse_speed_bounds() {
        let mut settings = ReverseSettings::default();
        settings.speed = 0.1;
        assert_eq!(validate_reverse(&settings).len(), 1);
        settings.speed = 4.5;
        assert_eq!(validate_reverse(&settings).len(), 1);
        settings.speed = 0.25;
        assert!(validate_reverse(&settings).is_empty());
    }

    #[test]
    fn reverse_disabled_transition_is_not_checked() {
        let mut settings = ReverseSettings::default();
        settings.transition = TransitionSettings {
            enabled: false,
            kind: TransitionKind::Fade,
            duration_secs: -5.0,
        };
        assert!(validate_reverse(&settings).is_empty());
    }

    #[test]
    fn gif_odd_palette_rejected() {
        let mut settings = GifSettings::default();
        settings.optimization.color_reduction = 123;
        assert_eq!(validate_gif(&settings).len(), 1);
        settings.optimization.enabled = false;
        assert!(validate_gif(&settings).is_empty());
    }

    #[test]
    fn image_to_video_custom_motion_needs_keyframes() {
        let mut settings = ImageToVideoSettings::default();
        settings.motion = MotionSettings {
            enabled: true,
            kind: MotionKind::Custom {
                keyframes: vec![MotionKeyframe {
                    time: 0.0,
                    x: 0.0,
                    y: 0.0,
                    zoom: 1.0,
                }],
            },
        };
        let violations = validate_image_to_video(&settings);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("two keyframes"));
    }

    #[test]
    fn image_to_video_collects_all_grading_violations() {
        let mut settings = ImageToVideoSettings::default();
        settings.effects.color_grading.enabled = true;
        settings.effects.color_grading.brightness = 150.0;
        settings.effects.color_grading.tint = -200.0;
        let violations = validate_image_to_video(&settings);
        assert_eq!(violations.len(), 2);
    }
}
