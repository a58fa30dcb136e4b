use super::colors::generate_colors;
use crate::config::Settings;
use rand::Rng;

/// Grid commands bound to keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Reload,
    ToggleChrome,
    Shrink,
    Grow,
    Double,
    Halve,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "Enter" => Some(KeyAction::Reload),
        "Shift" => Some(KeyAction::ToggleChrome),
        "ArrowLeft" => Some(KeyAction::Shrink),
        "ArrowRight" => Some(KeyAction::Grow),
        "ArrowUp" => Some(KeyAction::Double),
        "ArrowDown" => Some(KeyAction::Halve),
        _ => None,
    }
}

/// What the view has to do after an action was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Colors were regenerated; rebuild every frame. `notice` is set when the
    /// requested amount was clamped to the maximum.
    Rerender { notice: Option<String> },
    /// Apply the new size to the frames already on screen.
    Resize(u32),
    /// Chrome visibility flipped; `true` means header/footer are hidden.
    Chrome(bool),
}

pub fn max_frames_notice(max: u32) -> String {
    format!("max amount of frames is {max}")
}

pub fn copied_notice(color: &str) -> String {
    format!("copied: {color}")
}

pub fn status_text(amount: usize) -> String {
    format!("current: {amount} frames")
}

/// View-independent state of one grid: settings, the current color sequence
/// and whether the page chrome is hidden.
#[derive(Clone, Debug)]
pub struct FrameGrid {
    settings: Settings,
    colors: Vec<String>,
    chrome_hidden: bool,
}

impl FrameGrid {
    pub fn new<R: Rng + ?Sized>(settings: Settings, rng: &mut R) -> Self {
        let colors = generate_colors(settings.frame_amount as usize, rng);
        Self {
            settings,
            colors,
            chrome_hidden: false,
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[inline]
    pub fn chrome_hidden(&self) -> bool {
        self.chrome_hidden
    }

    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.colors = generate_colors(self.settings.frame_amount as usize, rng);
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, action: KeyAction, rng: &mut R) -> Outcome {
        match action {
            KeyAction::Reload => {
                self.regenerate(rng);
                Outcome::Rerender { notice: None }
            }
            KeyAction::ToggleChrome => {
                self.chrome_hidden = !self.chrome_hidden;
                Outcome::Chrome(self.chrome_hidden)
            }
            KeyAction::Shrink => Outcome::Resize(self.shrink()),
            KeyAction::Grow => Outcome::Resize(self.grow()),
            KeyAction::Double => {
                let notice = self.double();
                self.regenerate(rng);
                Outcome::Rerender { notice }
            }
            KeyAction::Halve => {
                self.halve();
                self.regenerate(rng);
                Outcome::Rerender { notice: None }
            }
        }
    }

    fn shrink(&mut self) -> u32 {
        let s = &mut self.settings;
        s.frame_size = s
            .frame_size
            .saturating_sub(s.step_size)
            .max(s.min_frame_size);
        s.frame_size
    }

    // No upper clamp on purpose; see DESIGN.md.
    fn grow(&mut self) -> u32 {
        let s = &mut self.settings;
        s.frame_size = s.frame_size.saturating_add(s.step_size);
        s.frame_size
    }

    fn double(&mut self) -> Option<String> {
        let s = &mut self.settings;
        let doubled = s.frame_amount.saturating_mul(2);
        s.frame_amount = doubled.min(s.max_frames);
        (doubled > s.max_frames).then(|| max_frames_notice(s.max_frames))
    }

    fn halve(&mut self) {
        let s = &mut self.settings;
        s.frame_amount = s.frame_amount.div_ceil(2).max(s.min_frames);
    }
}
