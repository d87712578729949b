//! Horizon Rating demo
//!
//! Builds a rating view from a TOML configuration, simulates a user dragging
//! across the stars, and prints what a host controller would see.
//!
//! Run with: cargo run -p horizon-rating --example rating_demo
//!
//! Set `RUST_LOG=horizon_rating=trace` to watch layout and pointer
//! resolution.

use std::sync::Arc;

use horizon_rating::prelude::*;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
max_rating = 5
rating = 1.0
half_ratings = true
min_icon_size = [10.0, 10.0]
"#;

/// Stands in for the view controller hosting the widget.
struct HostController;

impl RatingViewDelegate for HostController {
    fn rating_is_updating(&self, view: ObjectId, rating: f64) {
        println!("{view}: updating rating {rating:.2}");
    }

    fn rating_did_update(&self, view: ObjectId, rating: f64) {
        println!("{view}: rating updated {rating:.2}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RatingViewConfig::from_toml_str(CONFIG)?;
    let mut view = RatingView::from_config(&config)?
        .with_empty_image(Image::with_size(32, 32)?)
        .with_full_image(Image::with_size(32, 32)?);
    view.set_geometry(Rect::new(0.0, 0.0, 250.0, 50.0));

    let host = Arc::new(HostController);
    view.set_delegate(&host);

    view.rating_changed
        .connect(|&rating| tracing::info!(rating, "rating changed"));

    println!("initial rating: {:.1}", view.rating());

    let y = view.size().height / 2.0;
    view.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        Point::new(12.0, y),
    )));
    for x in [60.0, 110.0, 135.0, 180.0] {
        view.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(Point::new(
            x, y,
        ))));
    }
    view.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(180.0, y),
    )));

    println!("final rating: {:.1}", view.rating());

    let commands = view.draw_commands();
    println!("{} draw commands:", commands.len());
    for command in &commands {
        match command {
            DrawCommand::Image {
                dest, clip: Some(clip), ..
            } => println!("  image at {:?} clipped to {:?}", dest.origin, clip),
            DrawCommand::Image { dest, .. } => println!("  image at {:?}", dest.origin),
            other => println!("  {other:?}"),
        }
    }

    println!("\n{}", config.to_toml_string()?);
    Ok(())
}
