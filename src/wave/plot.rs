//! Channel plot window
//!
//! Two stacked time-domain plots, channel 0 on top and channel 1 below,
//! sharing a linked time axis.

use eframe::egui::{self, Color32, Ui, Vec2b};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints};

use crate::error::{Result, TagscopeError};
use crate::wave::capture::StereoCapture;

const TIME_AXIS_GROUP: &str = "capture_time";
const TIME_AXIS_LABEL: &str = "time (seconds)";
const CHANNEL_1_COLOR: Color32 = Color32::from_rgb(0, 128, 0);

/// eframe app rendering both channels of a capture
///
/// Points are built once; every repaint borrows them.
pub struct ChannelPlotApp {
    channels: [Vec<PlotPoint>; 2],
}

impl ChannelPlotApp {
    pub fn new(capture: &StereoCapture) -> Self {
        ChannelPlotApp {
            channels: capture
                .stereo_points()
                .map(|points| points.into_iter().map(PlotPoint::from).collect()),
        }
    }

    /// Plot points of channel 0 or 1, `None` for any other index
    pub fn points(&self, channel: usize) -> Option<&[PlotPoint]> {
        self.channels.get(channel).map(Vec::as_slice)
    }
}

impl eframe::App for ChannelPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;
            channel_plot(ui, 0, &self.channels[0], None, height, false);
            channel_plot(
                ui,
                1,
                &self.channels[1],
                Some(CHANNEL_1_COLOR),
                height,
                true,
            );
        });
    }
}

fn channel_plot(
    ui: &mut Ui,
    channel: usize,
    points: &[PlotPoint],
    color: Option<Color32>,
    height: f32,
    time_label: bool,
) {
    let mut plot = Plot::new(format!("channel_{channel}"))
        .height(height)
        .link_axis(TIME_AXIS_GROUP, Vec2b::new(true, false))
        .y_axis_label(format!("channel {channel}"))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if time_label {
        plot = plot.x_axis_label(TIME_AXIS_LABEL);
    }

    plot.show(ui, |plot_ui| {
        let mut line =
            Line::new(PlotPoints::Borrowed(points)).name(format!("channel {channel}"));
        if let Some(color) = color {
            line = line.color(color);
        }
        plot_ui.line(line);
    });
}

/// Open the plot window and block until it is closed
///
/// # Errors
/// * `DisplayError` - If no window can be created
pub fn show(capture: &StereoCapture, title: &str) -> Result<()> {
    let app = ChannelPlotApp::new(capture);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| TagscopeError::DisplayError {
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
    use std::io::Cursor;

    #[test]
    fn test_app_points_follow_channels() {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 4,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            for s in [1i16, -1, 2, -2] {
                writer.write_sample(s).unwrap();
            }
            writer.finalize().unwrap();
        }
        let reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let capture = StereoCapture::from_wav(reader, "memory").unwrap();

        let app = ChannelPlotApp::new(&capture);
        let xy = |channel| -> Vec<(f64, f64)> {
            app.points(channel)
                .unwrap()
                .iter()
                .map(|p| (p.x, p.y))
                .collect()
        };
        assert_eq!(xy(0), vec![(0.0, 1.0), (0.25, 2.0)]);
        assert_eq!(xy(1), vec![(0.0, -1.0), (0.25, -2.0)]);
        assert!(app.points(2).is_none());
    }
}
