//! Settings-to-directive compilers, one per tool family.
//!
//! Each compiler is a pure function over a *pre-validated* settings value
//! (run [`crate::validate`] first; behavior on out-of-range input is
//! unspecified). The remote service applies directives as sequential
//! operations, so the emission order within each family is a compatibility
//! contract, not a style choice.

use crate::{
    directive::{Segment, Transformation, kbps, millis},
    settings::{
        CompressionQuality, CompressionSettings, GifSettings, ImageToVideoSettings, MotionKind,
        ReverseSettings, TransitionKind,
    },
};

/// Compression order: quality/format, resolution + crop mode, bitrate,
/// audio.
pub fn compile_compression(settings: &CompressionSettings) -> String {
    let mut seg = Segment::new();

    match settings.quality {
        CompressionQuality::Auto => seg.param("q", "auto"),
        CompressionQuality::Best => seg.param("q", "auto:best"),
        CompressionQuality::Good => seg.param("q", "auto:good"),
        CompressionQuality::Eco => seg.param("q", "auto:eco"),
    };
    seg.param("f", settings.format.as_str());

    if let Some(res) = &settings.resolution {
        seg.param("w", res.width).param("h", res.height);
        // c_limit fits within the box preserving aspect; c_scale stretches.
        if res.maintain_aspect {
            seg.param("c", "limit");
        } else {
            seg.param("c", "scale");
        }
    }

    seg.param("br", kbps(settings.bitrate.target_kbps));
    if settings.bitrate.max_kbps > settings.bitrate.target_kbps {
        seg.param("br_max", kbps(settings.bitrate.max_kbps));
    }

    if settings.audio.enabled {
        seg.param("ac", "aac");
        seg.param("ab", kbps(settings.audio.bitrate_kbps));
    } else {
        seg.param("ac", "none");
    }

    seg.render()
}

/// Speed to the service's acceleration encoding. Values >= 1 are a
/// percentage speed-up; values < 1 encode slow motion as a negative
/// deceleration factor. The sign convention is fixed by the remote grammar.
fn acceleration(speed: f64) -> i64 {
    if speed >= 1.0 {
        (speed * 100.0).round() as i64
    } else {
        -((100.0 / speed).round() as i64)
    }
}

/// Reverse order: base effect, acceleration, audio, loop, transition.
pub fn compile_reverse(settings: &ReverseSettings) -> String {
    let mut seg = Segment::new();

    seg.effect("reverse");
    seg.effect_with("acceleration", acceleration(settings.speed));

    if !settings.preserve_audio {
        seg.param("ac", "none");
    }
    if settings.loop_playback {
        seg.flag("loop");
    }

    if settings.transition.enabled {
        let ms = millis(settings.transition.duration_secs);
        match settings.transition.kind {
            TransitionKind::Fade => {
                seg.effect_with("fade", ms);
            }
            TransitionKind::Dissolve => {
                seg.effect_with("dissolve", ms);
            }
            TransitionKind::None => {}
        }
    }

    seg.render()
}

/// GIF order: sizing, timing, quality, optimization, AI enhancement,
/// effect flags, forced output format last.
pub fn compile_gif(settings: &GifSettings) -> String {
    let mut seg = Segment::new();

    seg.param("w", settings.width)
        .param("h", settings.height)
        .param("fps", settings.fps)
        .param("so", settings.start_time)
        .param("du", settings.duration);

    if let Some(q) = settings.quality {
        seg.param("q", q);
    }

    if settings.optimization.enabled {
        seg.param("colors", settings.optimization.color_reduction);
        if settings.optimization.dithering {
            seg.effect("dither");
        }
        if settings.optimization.lossy > 0 {
            seg.param("lossy", settings.optimization.lossy);
        }
    }

    if settings.ai_enhancement.enabled {
        seg.effect_with("enhance", settings.ai_enhancement.mode.as_str());
        if settings.ai_enhancement.preserve_motion {
            seg.effect("preserve_motion");
        }
        if settings.ai_enhancement.smart_frames {
            seg.effect("smart_frame_selection");
        }
    }

    if settings.effects.loop_playback {
        seg.flag("loop");
    }
    if settings.effects.boomerang {
        seg.effect("boomerang");
    }
    if settings.effects.reverse {
        seg.effect("reverse");
    }
    if settings.effects.fade_in {
        seg.effect("fade_in");
    }
    if settings.effects.fade_out {
        seg.effect("fade_out");
    }

    seg.param("f", "gif");
    seg.render()
}

fn percent(factor: f64) -> i64 {
    (factor * 100.0).round() as i64
}

/// Non-zero channel adjustments only; zero is the identity everywhere.
fn grading_token(seg: &mut Segment, name: &'static str, value: f64) {
    if value != 0.0 {
        seg.effect_with(name, value);
    }
}

/// Overlay text encoding: the remote grammar renders `_` as a space inside
/// text layers, so spaces are mapped rather than percent-encoded.
fn overlay_text(text: &str) -> String {
    text.trim().replace(' ', "_")
}

/// Image-to-video is a chained pipeline: motion/timing, then color and
/// effects, then audio, then one stage per text overlay, then the output
/// stage. Stages are independent operations on the remote side, so each is
/// its own `/`-separated segment.
pub fn compile_image_to_video(settings: &ImageToVideoSettings) -> String {
    let mut tr = Transformation::new();

    let mut motion = Segment::new();
    if settings.motion.enabled {
        match &settings.motion.kind {
            MotionKind::KenBurns {
                zoom_start,
                zoom_end,
                pan,
            } => {
                motion.effect_with("zoompan", pan.as_str());
                motion.effect_with(
                    "zoom",
                    format!("{}-{}", percent(*zoom_start), percent(*zoom_end)),
                );
            }
            MotionKind::Parallax { intensity, layers } => {
                motion.effect_with("parallax", intensity);
                motion.effect_with("parallax_layers", layers);
            }
            MotionKind::ThreeD {
                depth,
                rotation,
                perspective,
            } => {
                motion.effect_with("depth", depth);
                motion.effect_with("rotate_3d", rotation);
                motion.effect_with("perspective", perspective);
            }
            MotionKind::Custom { keyframes } => {
                let path: Vec<String> = keyframes
                    .iter()
                    .map(|k| format!("{}x{}y{}z{}", k.time, k.x, k.y, percent(k.zoom)))
                    .collect();
                motion.effect_with("motion_path", path.join(":"));
            }
        }
    }
    motion
        .param("du", settings.duration)
        .param("fps", settings.fps);
    tr.push(motion);

    let mut effects = Segment::new();
    if settings.effects.color_grading.enabled {
        let g = &settings.effects.color_grading;
        grading_token(&mut effects, "brightness", g.brightness);
        grading_token(&mut effects, "contrast", g.contrast);
        grading_token(&mut effects, "saturation", g.saturation);
        grading_token(&mut effects, "temperature", g.temperature);
        grading_token(&mut effects, "tint", g.tint);
    }
    for filter in &settings.effects.filters {
        effects.effect_with("art", filter.as_str());
    }
    if settings.effects.vignette.enabled {
        effects.effect_with("vignette", settings.effects.vignette.strength);
    }
    if settings.effects.blur.enabled {
        effects.effect_with("blur", settings.effects.blur.strength);
    }
    tr.push(effects);

    let mut audio = Segment::new();
    if settings.audio.enabled {
        if settings.audio.volume != 100 {
            audio.effect_with("volume", settings.audio.volume);
        }
        if settings.audio.loop_audio {
            audio.flag("loop_audio");
        }
    } else {
        audio.param("ac", "none");
    }
    tr.push(audio);

    for overlay in &settings.overlays {
        let mut layer = Segment::new();
        layer.param(
            "l",
            format!(
                "text:{}:{}",
                overlay.position.as_str(),
                overlay_text(&overlay.text)
            ),
        );
        layer
            .param("so", overlay.start_secs)
            .param("eo", overlay.end_secs);
        tr.push(layer);
    }

    let mut out = Segment::new();
    out.param("w", settings.output.resolution.width)
        .param("h", settings.output.resolution.height)
        .param("ar", settings.output.aspect_ratio.as_str())
        .param("q", settings.output.quality)
        .param("f", settings.output.format.as_str());
    tr.push(out);

    tr.render()
}
