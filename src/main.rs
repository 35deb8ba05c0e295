// Allow drawing helpers that only the test suite exercises
#![allow(dead_code)]

mod display;
mod logger;
mod render;
mod scene;
mod util;

use display::{Display, InputEvent, PixelBuffer, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use log::{debug, info};
use scene::{Circle, LightSource, Obstacle, Pixel, Scene, Segment};
use sdl2::keyboard::Keycode;
use util::FpsCounter;

const NUM_RAYS: usize = 120;
const LIGHT_RADIUS: i32 = 50;

/// Seconds between FPS reports at debug level
const FPS_REPORT_INTERVAL: f32 = 5.0;

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: lightcast [OPTIONS]");
                println!();
                println!("Drag the light source with any mouse button held down.");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

fn main() -> Result<(), String> {
    logger::init(log::LevelFilter::Info);
    let (width, height, vsync) = parse_args();

    let (mut display, texture_creator) = Display::with_options("lightcast", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut buffer = PixelBuffer::with_size(width, height);

    let mut scene = Scene::new(
        LightSource::new(400, 300, LIGHT_RADIUS, NUM_RAYS),
        vec![
            Obstacle::Circle(Circle::new(600, 400, 50)),
            Obstacle::Pixel(Pixel::new(700, 400)),
            Obstacle::Segment(Segment::new(800, 400, 900, 400)),
        ],
    );

    info!(
        "{}x{} window, {} rays, {} obstacles, vsync {}",
        width,
        height,
        NUM_RAYS,
        scene.obstacles.len(),
        if vsync { "on" } else { "off" }
    );

    let mut fps_counter = FpsCounter::new(60);
    let mut since_report = 0.0f32;

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();
        since_report += dt;
        if since_report >= FPS_REPORT_INTERVAL {
            debug!("avg fps: {:.1}", avg_fps);
            since_report = 0.0;
        }

        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::MouseDrag { x, y } => scene.drag_light(x, y),
                InputEvent::KeyDown(_) => {},
            }
        }

        render::render_scene(&mut buffer, &scene);
        display.present(&mut target, &buffer)?;
    }

    info!("shutting down");
    Ok(())
}
