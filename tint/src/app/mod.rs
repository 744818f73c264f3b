use log::info;

use crate::{
    info::{self, Info},
    ren::{self, RenderError, Renderer, draw::Draw, settings::Settings, shader::TriangleShader},
};

/// Renders the triangle once and writes the frame to `settings.output`.
pub struct App {
    info: Info,
    settings: Settings,
}

pub fn new(name: String) -> App {
    App {
        info: info::new(name, info::make_version(0, 1, 0, 0)),
        settings: Settings::default(),
    }
}

impl App {
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn run(&self) -> Result<(), RenderError> {
        let mut renderer = ren::new(&self.info, &self.settings);
        let shaded = renderer.draw(&TriangleShader, &Draw::triangle())?;
        renderer.frame().save(&self.settings.output)?;
        info!(
            "{} - {shaded} fragments shaded, frame written to {}",
            self.info.app_name,
            self.settings.output.display()
        );
        Ok(())
    }
}
