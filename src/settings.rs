//! Per-tool-family settings records.
//!
//! These are plain data: serde in/out, a `Default` carrying each tool
//! screen's initial values, and nothing else. Validation lives in
//! [`crate::validate`], directive emission in [`crate::compile`].

/// Output container for video-producing tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Mp4,
    Webm,
}

impl VideoFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Webm => "webm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionQuality {
    Auto,
    Best,
    Good,
    Eco,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    High,
    Medium,
    Low,
}

impl AudioQuality {
    /// Default audio bitrate in kbps for each quality tier.
    pub fn suggested_bitrate(self) -> u32 {
        match self {
            AudioQuality::High => 192,
            AudioQuality::Medium => 128,
            AudioQuality::Low => 64,
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    /// Fit within the box preserving aspect ratio instead of stretching.
    pub maintain_aspect: bool,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitrateSettings {
    pub target_kbps: u32,
    pub max_kbps: u32,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    pub enabled: bool,
    pub quality: AudioQuality,
    pub bitrate_kbps: u32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionSettings {
    pub quality: CompressionQuality,
    pub format: VideoFormat,
    /// Target box; `None` keeps the source dimensions.
    pub resolution: Option<Resolution>,
    pub bitrate: BitrateSettings,
    pub audio: AudioSettings,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            quality: CompressionQuality::Auto,
            format: VideoFormat::Mp4,
            resolution: None,
            bitrate: BitrateSettings {
                target_kbps: 1000,
                max_kbps: 2000,
            },
            audio: AudioSettings {
                enabled: true,
                quality: AudioQuality::Medium,
                bitrate_kbps: AudioQuality::Medium.suggested_bitrate(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Fade,
    Dissolve,
    None,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    pub duration_secs: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseSettings {
    /// Playback rate applied to the reversed clip, in [0.25, 4.0].
    pub speed: f64,
    pub preserve_audio: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub transition: TransitionSettings,
}

impl Default for ReverseSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            preserve_audio: true,
            loop_playback: false,
            transition: TransitionSettings {
                enabled: false,
                kind: TransitionKind::None,
                duration_secs: 0.0,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifOptimization {
    pub enabled: bool,
    /// Palette size, 2..=256 and even.
    pub color_reduction: u32,
    pub dithering: bool,
    /// Lossy compression level 0..=100; 0 disables lossy compression.
    pub lossy: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancementMode {
    Quality,
    Performance,
    Balanced,
}

impl EnhancementMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EnhancementMode::Quality => "quality",
            EnhancementMode::Performance => "performance",
            EnhancementMode::Balanced => "balanced",
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiEnhancement {
    pub enabled: bool,
    pub mode: EnhancementMode,
    pub preserve_motion: bool,
    pub smart_frames: bool,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifEffects {
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub boomerang: bool,
    pub reverse: bool,
    pub fade_in: bool,
    pub fade_out: bool,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub start_time: f64,
    pub duration: f64,
    /// 1..=100; `None` leaves quality to the remote service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    pub optimization: GifOptimization,
    pub ai_enhancement: AiEnhancement,
    pub effects: GifEffects,
}

impl Default for GifSettings {
    fn default() -> Self {
        Self {
            width: 480,
            height: 270,
            fps: 15,
            start_time: 0.0,
            duration: 3.0,
            quality: None,
            optimization: GifOptimization {
                enabled: true,
                color_reduction: 256,
                dithering: true,
                lossy: 0,
            },
            ai_enhancement: AiEnhancement {
                enabled: false,
                mode: EnhancementMode::Balanced,
                preserve_motion: true,
                smart_frames: false,
            },
            effects: GifEffects {
                loop_playback: true,
                boomerang: false,
                reverse: false,
                fade_in: false,
                fade_out: false,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
    Center,
}

impl PanDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            PanDirection::Left => "left",
            PanDirection::Right => "right",
            PanDirection::Up => "up",
            PanDirection::Down => "down",
            PanDirection::Center => "center",
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionKeyframe {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    /// Zoom factor, 1.0 = source framing.
    pub zoom: f64,
}

/// Motion style, tagged so a settings value can never pair a style with the
/// wrong parameter block.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MotionKind {
    KenBurns {
        zoom_start: f64,
        zoom_end: f64,
        pan: PanDirection,
    },
    Parallax {
        /// 0..=100.
        intensity: u32,
        layers: u32,
    },
    #[serde(rename = "3d")]
    ThreeD {
        depth: f64,
        rotation: f64,
        perspective: f64,
    },
    Custom { keyframes: Vec<MotionKeyframe> },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionSettings {
    pub enabled: bool,
    #[serde(flatten)]
    pub kind: MotionKind,
}

/// Channel adjustments, each in [-100, 100] with 0 as identity.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorGrading {
    pub enabled: bool,
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub temperature: f64,
    pub tint: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtFilter {
    Sepia,
    Grayscale,
    Vintage,
    Vivid,
    Noir,
}

impl ArtFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtFilter::Sepia => "sepia",
            ArtFilter::Grayscale => "grayscale",
            ArtFilter::Vintage => "vintage",
            ArtFilter::Vivid => "vivid",
            ArtFilter::Noir => "noir",
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vignette {
    pub enabled: bool,
    /// 0..=100.
    pub strength: u32,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blur {
    pub enabled: bool,
    /// 0..=100.
    pub strength: u32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEffects {
    pub color_grading: ColorGrading,
    pub filters: Vec<ArtFilter>,
    pub vignette: Vignette,
    pub blur: Blur,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundtrackSettings {
    pub enabled: bool,
    /// 0..=100, 100 = source level.
    pub volume: u32,
    pub loop_audio: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayPosition {
    North,
    South,
    East,
    West,
    Center,
}

impl OverlayPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayPosition::North => "north",
            OverlayPosition::South => "south",
            OverlayPosition::East => "east",
            OverlayPosition::West => "west",
            OverlayPosition::Center => "center",
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOverlay {
    pub text: String,
    pub position: OverlayPosition,
    pub start_secs: f64,
    pub end_secs: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    Classic,
}

impl AspectRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Classic => "4:3",
        }
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    pub format: VideoFormat,
    /// 1..=100.
    pub quality: u32,
    pub resolution: Resolution,
    pub aspect_ratio: AspectRatio,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageToVideoSettings {
    pub duration: f64,
    pub fps: u32,
    pub motion: MotionSettings,
    pub effects: ImageEffects,
    pub audio: SoundtrackSettings,
    pub overlays: Vec<TextOverlay>,
    pub output: OutputSettings,
}

impl Default for ImageToVideoSettings {
    fn default() -> Self {
        Self {
            duration: 5.0,
            fps: 30,
            motion: MotionSettings {
                enabled: true,
                kind: MotionKind::KenBurns {
                    zoom_start: 1.0,
                    zoom_end: 1.2,
                    pan: PanDirection::Center,
                },
            },
            effects: ImageEffects {
                color_grading: ColorGrading {
                    enabled: false,
                    brightness: 0.0,
                    contrast: 0.0,
                    saturation: 0.0,
                    temperature: 0.0,
                    tint: 0.0,
                },
                filters: Vec::new(),
                vignette: Vignette {
                    enabled: false,
                    strength: 30,
                },
                blur: Blur {
                    enabled: false,
                    strength: 10,
                },
            },
            audio: SoundtrackSettings {
                enabled: false,
                volume: 100,
                loop_audio: false,
            },
            overlays: Vec::new(),
            output: OutputSettings {
                format: VideoFormat::Mp4,
                quality: 80,
                resolution: Resolution {
                    width: 1920,
                    height: 1080,
                    maintain_aspect: true,
                },
                aspect_ratio: AspectRatio::Wide,
            },
        }
    }
}
