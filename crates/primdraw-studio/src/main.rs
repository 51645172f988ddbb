mod config;
mod script;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use primdraw::logging::{init_logging, LoggingConfig};
use primdraw::paint::Color;
use primdraw::render::SvgTarget;
use primdraw::{ShapePainter, ShapePainterTemplate};

use crate::config::StudioConfig;

const SAMPLE_TEMPLATE: &str = include_str!("../assets/painter.json");

fn main() -> Result<()> {
    let config = StudioConfig::parse();

    init_logging(&LoggingConfig { filter: config.log.clone(), ..LoggingConfig::default() });

    let template = match &config.template {
        Some(path) => ShapePainterTemplate::from_path(path)
            .with_context(|| format!("loading template {}", path.display()))?,
        None => ShapePainterTemplate::from_json_str(SAMPLE_TEMPLATE).context("parsing bundled template")?,
    };

    let mut painter = ShapePainter::from_template("studio", &template);
    let (x, y) = config.position();
    painter.set_position(x, y);

    fs::create_dir_all(&config.out)
        .with_context(|| format!("creating output directory {}", config.out.display()))?;

    log::info!(
        "rendering {} frame(s) at {}x{} into {}",
        config.frames,
        config.width,
        config.height,
        config.out.display()
    );

    for frame in 0..config.frames {
        // The script runs with the template style restored each frame.
        *painter.style_mut() = template.style();
        painter.hide(config.is_hidden_frame(frame));
        script::draw_frame(&mut painter, frame);

        let mut target = SvgTarget::new(config.width, config.height).with_background(Color::new(12, 12, 20, 255.0));
        let drawn = painter.draw(&mut target);
        log::trace!("frame {frame}: draw returned {drawn}");

        let path = config.frame_path(frame);
        target.save(&path).with_context(|| format!("writing frame {frame}"))?;
        log::info!("frame {frame}: {} shapes -> {}", target.element_count(), path.display());
    }

    Ok(())
}
