//! A renderer that records draw commands.
//!
//! [`RecordingRenderer`] turns a paint pass into a flat list of
//! [`DrawCommand`]s. Hosts replay the list on their own backend, and tests
//! inspect it directly.

use crate::image::{Image, ImageScaleMode};
use crate::renderer::{FrameStats, Renderer};
use crate::types::{Color, Rect, Size};

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Frame start.
    Clear {
        /// Clear color.
        color: Color,
        /// Viewport size.
        viewport: Size,
    },
    /// Solid rectangle fill.
    FillRect {
        /// Bounds.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Image draw.
    Image {
        /// The image drawn.
        image: Image,
        /// Destination rectangle.
        dest: Rect,
        /// How the image is scaled into `dest`.
        scale_mode: ImageScaleMode,
        /// Where the scaled image lands, from [`ImageScaleMode::place`].
        placed: Rect,
        /// Active clip when the image was drawn.
        clip: Option<Rect>,
    },
    /// Push a clip rect (already intersected with the enclosing clip).
    PushClip {
        /// Clip bounds.
        rect: Rect,
    },
    /// Pop the most recently pushed clip.
    PopClip,
}

/// Renderer that collects [`DrawCommand`]s instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    /// Saved states: the clip active at `save()` and the clips pushed before it.
    state_stack: Vec<(Option<Rect>, u32)>,
    clip: Option<Rect>,
    /// Clips pushed since the last `save()`.
    pushed_clips: u32,
    stats: FrameStats,
}

impl RecordingRenderer {
    /// Create a new, empty recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the renderer empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        self.commands.clear();
        self.state_stack.clear();
        self.clip = None;
        self.pushed_clips = 0;
        self.stats = FrameStats::default();
        self.commands.push(DrawCommand::Clear {
            color: clear_color,
            viewport: viewport_size,
        });
    }

    fn end_frame(&mut self) -> FrameStats {
        if !self.state_stack.is_empty() {
            tracing::warn!(
                target: "horizon_rating_render::recording",
                depth = self.state_stack.len(),
                "frame ended with unbalanced save/restore"
            );
        }
        self.stats
    }

    fn save(&mut self) {
        self.state_stack.push((self.clip, self.pushed_clips));
        self.pushed_clips = 0;
    }

    fn restore(&mut self) {
        let Some((saved_clip, saved_pushes)) = self.state_stack.pop() else {
            tracing::warn!(target: "horizon_rating_render::recording", "restore without matching save");
            return;
        };
        for _ in 0..self.pushed_clips {
            self.commands.push(DrawCommand::PopClip);
        }
        self.clip = saved_clip;
        self.pushed_clips = saved_pushes;
    }

    fn clip_rect(&mut self, rect: Rect) {
        let clipped = match self.clip {
            Some(current) => current.intersect(&rect).unwrap_or(Rect::ZERO),
            None => rect,
        };
        self.clip = Some(clipped);
        self.pushed_clips += 1;
        self.stats.clips += 1;
        self.commands.push(DrawCommand::PushClip { rect: clipped });
    }

    fn clip_bounds(&self) -> Option<Rect> {
        self.clip
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.stats.draw_calls += 1;
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_image(&mut self, image: &Image, dest: Rect, scale_mode: ImageScaleMode) {
        self.stats.draw_calls += 1;
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            dest,
            scale_mode,
            placed: scale_mode.place(image.size(), dest),
            clip: self.clip,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_frame_resets() {
        let mut r = RecordingRenderer::new();
        r.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        r.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        r.begin_frame(Color::BLACK, Size::new(5.0, 5.0));

        assert_eq!(r.commands().len(), 1);
        assert_eq!(r.end_frame(), FrameStats::default());
    }

    #[test]
    fn test_clip_is_scoped_by_save_restore() {
        let mut r = RecordingRenderer::new();
        let image = Image::with_size(4, 4).unwrap();
        r.begin_frame(Color::TRANSPARENT, Size::new(100.0, 100.0));

        r.save();
        r.clip_rect(Rect::new(0.0, 0.0, 5.0, 10.0));
        r.draw_image(&image, Rect::new(0.0, 0.0, 10.0, 10.0), ImageScaleMode::Fit);
        r.restore();
        r.draw_image(&image, Rect::new(20.0, 0.0, 10.0, 10.0), ImageScaleMode::Fit);

        let commands = r.take_commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[1], DrawCommand::PushClip { .. }));
        match &commands[2] {
            DrawCommand::Image { clip, .. } => {
                assert_eq!(*clip, Some(Rect::new(0.0, 0.0, 5.0, 10.0)))
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(commands[3], DrawCommand::PopClip);
        match &commands[4] {
            DrawCommand::Image { clip, .. } => assert_eq!(*clip, None),
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(r.clip_bounds(), None);
    }

    #[test]
    fn test_image_placement_follows_scale_mode() {
        let mut r = RecordingRenderer::new();
        let banner = Image::with_size(20, 10).unwrap();
        let dest = Rect::new(10.0, 10.0, 40.0, 40.0);
        r.draw_image(&banner, dest, ImageScaleMode::Fit);
        r.draw_image(&banner, dest, ImageScaleMode::Stretch);

        let placed: Vec<Rect> = r
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { placed, .. } => Some(*placed),
                _ => None,
            })
            .collect();
        assert_eq!(placed, vec![Rect::new(10.0, 20.0, 40.0, 20.0), dest]);
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut r = RecordingRenderer::new();
        r.save();
        r.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        r.save();
        r.clip_rect(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(r.clip_bounds(), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        r.restore();
        assert_eq!(r.clip_bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        r.restore();
        assert_eq!(r.clip_bounds(), None);
    }

    #[test]
    fn test_stats_count_draws_and_clips() {
        let mut r = RecordingRenderer::new();
        r.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        r.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        r.save();
        r.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        r.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        r.restore();
        assert_eq!(r.end_frame(), FrameStats { draw_calls: 2, clips: 1 });
    }
}
