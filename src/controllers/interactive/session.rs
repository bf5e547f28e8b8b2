use std::sync::Arc;

use crate::controllers::interactive::controller::InteractiveController;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::actions::compute_frame::errors::ComputeFrameError;
use crate::core::actions::compute_frame::render_config::RenderConfig;
use crate::core::data::view_params::ViewParametersError;
use crate::core::navigation::commands::NavigationCommand;
use crate::core::navigation::navigator::Navigator;

/// An exploration session: navigation state driving a render worker.
///
/// Front ends translate their input into [`NavigationCommand`]s and call
/// [`ExplorerSession::tick`] once per display refresh. Every method that
/// queues a frame returns its generation.
pub struct ExplorerSession {
    navigator: Navigator,
    controller: InteractiveController,
    width: u32,
    height: u32,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(navigator: Navigator, controller: InteractiveController, width: u32, height: u32) -> Self {
        Self {
            navigator,
            controller,
            width,
            height,
        }
    }

    pub fn with_config(
        navigator: Navigator,
        config: RenderConfig,
        sink: Arc<dyn FrameSink>,
        width: u32,
        height: u32,
    ) -> Result<Self, ComputeFrameError> {
        let controller = InteractiveController::with_config(config, sink)?;
        Ok(Self::new(navigator, controller, width, height))
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn controller(&self) -> &InteractiveController {
        &self.controller
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn request(&self) -> Result<RenderRequest, ViewParametersError> {
        Ok(RenderRequest {
            view: self.navigator.view_parameters()?,
            width: self.width,
            height: self.height,
            colour: self.navigator.colour(),
        })
    }

    /// Queues a frame for the current view regardless of what changed.
    pub fn refresh(&mut self) -> Result<u64, ViewParametersError> {
        let request = self.request()?;
        Ok(self.controller.submit_request(request))
    }

    /// Applies a command. Commands that only move targets are picked up by
    /// later ticks; the rest queue a frame immediately.
    pub fn apply(&mut self, command: NavigationCommand) -> Result<Option<u64>, ViewParametersError> {
        let report = self.navigator.apply(command);
        log::trace!("{command:?}: {report:?}");

        if report.needs_frame() {
            self.refresh().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn tick(&mut self) -> Result<Option<u64>, ViewParametersError> {
        if self.navigator.tick() {
            self.refresh().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<Option<u64>, ViewParametersError> {
        if (width, height) == (self.width, self.height) {
            return Ok(None);
        }

        self.width = width;
        self.height = height;
        self.refresh().map(Some)
    }

    pub fn shutdown(&mut self) {
        self.controller.shutdown();
    }
}
