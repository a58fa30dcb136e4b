use crate::clipboard;
use crate::config::Settings;
use crate::constants::TOAST_DURATION_MS;
use crate::core::{copied_notice, FrameGrid, KeyAction, Outcome};
use crate::render::FrameView;
use crate::toast::Toaster;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Owns one grid and everything it draws into. Event handlers reach it
/// through an `Rc<RefCell<_>>`; nothing here is global.
pub struct Controller {
    document: web::Document,
    grid: FrameGrid,
    rng: StdRng,
    view: FrameView,
    toaster: Toaster,
}

impl Controller {
    pub fn new(document: &web::Document, settings: Settings) -> anyhow::Result<Self> {
        let view = FrameView::attach(document)?;
        let mut rng = StdRng::from_entropy();
        let grid = FrameGrid::new(settings, &mut rng);
        Ok(Self {
            document: document.clone(),
            grid,
            rng,
            view,
            toaster: Toaster::new(document),
        })
    }

    #[inline]
    pub fn grid(&self) -> &FrameGrid {
        &self.grid
    }

    #[inline]
    pub fn view(&self) -> &FrameView {
        &self.view
    }

    pub fn render(&self) {
        self.view
            .render(self.grid.colors(), self.grid.settings().frame_size);
    }

    pub fn handle_key(&mut self, action: KeyAction) {
        let outcome = self.grid.apply(action, &mut self.rng);
        log::info!(
            "[keys] {:?} -> amount={} size={}",
            action,
            self.grid.settings().frame_amount,
            self.grid.settings().frame_size
        );
        match outcome {
            Outcome::Rerender { notice } => {
                if let Some(msg) = notice {
                    self.toast(&msg);
                }
                self.render();
            }
            Outcome::Resize(size) => self.view.resize(size),
            Outcome::Chrome(hidden) => self.view.set_chrome_hidden(hidden),
        }
    }

    pub fn copy_color(&mut self, color: &str) {
        match clipboard::copy_text(&self.document, color) {
            Ok(true) => log::info!("[click] copied {}", color),
            Ok(false) => log::warn!("[click] browser refused to copy {}", color),
            Err(e) => log::error!("[click] copy failed: {:#}", e),
        }
        self.toast(&copied_notice(color));
    }

    pub fn toast(&mut self, message: &str) {
        self.toaster.show(message, TOAST_DURATION_MS);
    }
}
