use crate::constants::*;
use serde::Deserialize;

/// Optional overrides accepted by `init`. Field names follow the JS caller
/// (`frameAmount`, `maxFrames`, ...); anything omitted keeps its default.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameOptions {
    pub frame_amount: Option<u32>,
    pub min_frames: Option<u32>,
    pub max_frames: Option<u32>,
    pub frame_size: Option<u32>,
    pub step_size: Option<u32>,
    pub min_frame_size: Option<u32>,
}

/// Resolved settings owned by a grid. Mutated in place by key actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub frame_amount: u32,
    pub min_frames: u32,
    pub max_frames: u32,
    pub frame_size: u32,
    pub step_size: u32,
    pub min_frame_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_amount: DEFAULT_FRAME_AMOUNT,
            min_frames: DEFAULT_MIN_FRAMES,
            max_frames: DEFAULT_MAX_FRAMES,
            frame_size: DEFAULT_FRAME_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            min_frame_size: DEFAULT_MIN_FRAME_SIZE,
        }
    }
}

impl Settings {
    /// Apply `options` over the defaults, rejecting bounds that cannot be
    /// satisfied and clamping the starting values into range.
    pub fn from_options(options: &FrameOptions) -> anyhow::Result<Self> {
        let d = Settings::default();
        let min_frames = options.min_frames.unwrap_or(d.min_frames);
        let max_frames = options.max_frames.unwrap_or(d.max_frames);
        let step_size = options.step_size.unwrap_or(d.step_size);
        let min_frame_size = options.min_frame_size.unwrap_or(d.min_frame_size);

        if min_frames > max_frames {
            anyhow::bail!("minFrames ({min_frames}) exceeds maxFrames ({max_frames})");
        }
        if step_size == 0 {
            anyhow::bail!("stepSize must be at least 1");
        }
        if min_frame_size == 0 {
            anyhow::bail!("minFrameSize must be at least 1");
        }

        let frame_amount = options
            .frame_amount
            .unwrap_or(d.frame_amount)
            .clamp(min_frames, max_frames);
        let frame_size = options.frame_size.unwrap_or(d.frame_size).max(min_frame_size);

        Ok(Self {
            frame_amount,
            min_frames,
            max_frames,
            frame_size,
            step_size,
            min_frame_size,
        })
    }
}
