#![cfg(target_arch = "wasm32")]

mod cards;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod style;

use folio_core::{Accent, ProjectLink, Scene};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

thread_local! {
    static RUNNING: Rc<Cell<bool>> = Rc::new(Cell::new(false));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the render loop. No frame runs after the current one returns; a
/// remount requires a page reload.
#[wasm_bindgen]
pub fn shutdown() {
    RUNNING.with(|r| r.set(false));
    log::info!("shutdown requested");
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, "scene-canvas")?;
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_resize(&canvas);

    let scene = Scene::default_scene(42);
    scene.validate()?;
    log::info!(
        "scene: {} shapes, {} particles, {} lights",
        scene.shapes.len(),
        scene.particles.positions.len(),
        scene.lights.len()
    );

    cards::mount_cards(&document, "projects", &default_projects())?;

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_pointer_tracking(mouse.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene, mouse, canvas, gpu,
    )));
    let running = RUNNING.with(|r| {
        r.set(true);
        r.clone()
    });
    frame::start_loop(ctx, running);
    Ok(())
}

fn default_projects() -> Vec<ProjectLink> {
    let project = |index, title: &str, url: &str, description: &str, accent| ProjectLink {
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        accent,
        index,
    };
    vec![
        project(
            0,
            "Pulse Grid",
            "https://pulsegrid.dev",
            "Realtime dashboards with a generative backdrop",
            Accent::Cyan,
        ),
        project(
            1,
            "Midnight Atlas",
            "midnightatlas.io",
            "Interactive maps for night-sky photography",
            Accent::Magenta,
        ),
        project(
            2,
            "Echo Forms",
            "https://echoforms.studio/work",
            "Audio-reactive installations and web toys",
            Accent::Purple,
        ),
    ]
}
