use std::path::PathBuf;

use clap::Parser;

/// Renders scripted shape painter frames to SVG files.
#[derive(Parser, Debug, Clone)]
#[command(name = "primdraw-studio")]
#[command(about = "Drive a shape painter through scripted frames and write each frame as SVG")]
#[command(version)]
pub struct StudioConfig {
    /// Painter template (JSON). Defaults to the bundled sample template.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 1)]
    pub frames: u32,

    /// Output directory for `frame_NNNN.svg` files.
    #[arg(short, long, default_value = "frames")]
    pub out: PathBuf,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 640.0)]
    pub width: f32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 480.0)]
    pub height: f32,

    /// Painter object position (x y). Defaults to the viewport center.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub position: Option<Vec<f32>>,

    /// Hide the painter on every Nth frame (0 disables).
    #[arg(long, default_value_t = 0)]
    pub hide_every: u32,

    /// Log filter, e.g. `info` or `primdraw=trace`.
    #[arg(long)]
    pub log: Option<String>,
}

impl StudioConfig {
    /// Object position; the viewport center unless overridden.
    pub fn position(&self) -> (f32, f32) {
        match self.position.as_deref() {
            Some(&[x, y]) => (x, y),
            _ => (self.width / 2.0, self.height / 2.0),
        }
    }

    pub fn is_hidden_frame(&self, frame: u32) -> bool {
        self.hide_every != 0 && frame % self.hide_every == self.hide_every - 1
    }

    pub fn frame_path(&self, frame: u32) -> PathBuf {
        self.out.join(format!("frame_{frame:04}.svg"))
    }
}
