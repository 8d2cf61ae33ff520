// What you SEE:
// • The terminal asks for the curve degree, the number of steps and the control points.
// • A window opens with the Bezier curve in black and its control points as red dots.
// • Press + hold Left Mouse on a dot to drag it; the curve follows every frame.
// • R puts the dots back where you typed them. S saves a PNG. ESC quits.

mod bezier;
mod binomial;
mod config;
mod draw;
mod editor;
mod error;
mod scene;
mod screenshot;
mod selection;
mod types;

use clap::Parser;
use config::Config;
use draw::Drawer;
use editor::Editor;
use error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::time::{Duration, Instant};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = Config::parse();

    /* --- Scene input ---
       Visual: nothing yet; prompts appear in the terminal (skipped for --input files). */
    let scene = match &cfg.input {
        Some(path) => scene::read_scene(BufReader::new(File::open(path)?), io::sink())?,
        None => scene::read_scene(io::stdin().lock(), io::stdout())?,
    };
    log::info!(
        "degree {} curve, {} steps, {} control points",
        scene.degree,
        scene.num_steps,
        scene.control_points.len()
    );

    /* --- Window setup ---
       Visual: an empty window of the configured size opens. */
    let mut drawer = Drawer::new("Parametric Bezier Curve", cfg.width, cfg.height, cfg.fps)?;
    let mut screen = FrameBuffer::new(cfg.width, cfg.height);
    let mut editor = Editor::new(scene, cfg.pick_radius);

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Inputs: drag handling first, so this frame already shows the moved point. */
        let pointer = drawer.poll_pointer();
        editor.handle_pointer(&pointer);
        if drawer.r_pressed_once() {
            editor.reset();
        }

        /* 2) Paint background, curve, dots and HUD into the screen buffer. */
        let hud = format!(
            "DEG: {} | STEPS: {} | {} | R: RESET  S: SAVE",
            editor.degree(),
            editor.num_steps(),
            hud_fps_text
        );
        editor.render(&mut screen, &hud);

        /* 3) Screenshot of exactly what is about to be shown. */
        if drawer.s_pressed_once() {
            match screenshot::save_png(&screen, &cfg.screenshot_dir) {
                Ok(path) => log::info!("saved {} (control points: {:?})", path.display(), editor.control_points()),
                Err(e) => log::error!("{e}"),
            }
        }

        /* 4) Present to the window (also waits for the next frame slot). */
        drawer.present(&screen)?;

        /* 5) FPS counter (logged + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
