use crate::constants::{
    HEAD_GLOW_SCALE, ICOSA_SCALE, OCTA_SCALE, PARTICLE_ALPHA, PARTICLE_SCALE, TORUS_SCALE,
};
use crate::input;
use crate::render;
use folio_core::{
    palette_color, pointer_to_world, Camera, Particles, Scene, ShapeDesc, ShapeKind, TubeField,
    HEAD_LIGHT_COLORS, POINTS_PER_TUBE, TUBE_COLORS, TUBE_COUNT,
};
use glam::{EulerRot, Mat3, Vec3};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub tubes: TubeField,
    pub mouse: Rc<RefCell<input::MouseState>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    pub tube_colors: [[f32; 3]; TUBE_COUNT],
    pub head_colors: [[f32; 3]; TUBE_COUNT],
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: Scene,
        mouse: Rc<RefCell<input::MouseState>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            scene,
            tubes: TubeField::new(),
            mouse,
            canvas,
            gpu,
            started: Instant::now(),
            tube_colors: TUBE_COLORS.map(palette_color),
            head_colors: HEAD_LIGHT_COLORS.map(palette_color),
        }
    }

    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();

        // Pointer in CSS pixels over the full-viewport canvas
        let rect = self.canvas.get_bounding_client_rect();
        let (ndc, aspect) = {
            let ms = self.mouse.borrow();
            let w = rect.width() as f32;
            let h = rect.height() as f32;
            (input::pointer_ndc(ms.x, ms.y, w, h), w / h.max(1.0))
        };
        let target = pointer_to_world(ndc, &Camera::tube_overlay(aspect));
        self.tubes.step(target, t);

        let bg_instances = background_instances(&self.scene, t);
        let fx_instances = head_glow_instances(&self.tubes, &self.head_colors);
        let mut tube_vertices = Vec::with_capacity(TUBE_COUNT * POINTS_PER_TUBE);
        for (i, color) in self.tube_colors.iter().enumerate() {
            tube_vertices.extend_from_slice(&self.tubes.chain_vertices(i, *color));
        }

        if let Some(g) = &mut self.gpu {
            g.set_ambient_clear(self.scene.ambient_level());
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&bg_instances, &fx_instances, &tube_vertices) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

fn base_scale(kind: ShapeKind) -> f32 {
    match kind {
        ShapeKind::Icosahedron => ICOSA_SCALE,
        ShapeKind::Torus => TORUS_SCALE,
        ShapeKind::Octahedron => OCTA_SCALE,
    }
}

fn shape_instance(desc: &ShapeDesc, t: f32) -> render::ShapeInstance {
    let pos = desc.position + Vec3::new(0.0, desc.float_offset(t), 0.0);
    render::ShapeInstance {
        pos: pos.to_array(),
        scale: base_scale(desc.kind) * desc.distort_pulse(t),
        color: [desc.color[0], desc.color[1], desc.color[2], 1.0],
        rot: desc.rotation_at(t).to_array(),
        glow: 0.3,
    }
}

fn background_instances(scene: &Scene, t: f32) -> Vec<render::ShapeInstance> {
    let mut out = Vec::with_capacity(scene.shapes.len() + scene.particles.positions.len());
    for desc in &scene.shapes {
        out.push(shape_instance(desc, t));
    }
    let cyan = palette_color(folio_core::ACCENT_CYAN);
    let group = Particles::group_rotation_at(t);
    let rot = Mat3::from_euler(EulerRot::XYZ, group.x, group.y, group.z);
    for p in &scene.particles.positions {
        out.push(render::ShapeInstance {
            pos: (rot * *p).to_array(),
            scale: PARTICLE_SCALE,
            color: [cyan[0], cyan[1], cyan[2], PARTICLE_ALPHA],
            rot: [0.0; 3],
            glow: 0.0,
        });
    }
    out
}

/// A bright disc at each chain head, standing in for the point lights the
/// page parked there.
fn head_glow_instances(
    tubes: &TubeField,
    colors: &[[f32; 3]; TUBE_COUNT],
) -> Vec<render::ShapeInstance> {
    (0..TUBE_COUNT)
        .map(|i| render::ShapeInstance {
            pos: tubes.head(i).to_array(),
            scale: HEAD_GLOW_SCALE,
            color: [colors[i][0], colors[i][1], colors[i][2], 0.9],
            rot: [0.0; 3],
            glow: 1.0,
        })
        .collect()
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame loop off requestAnimationFrame. The `running` flag is the
/// unmount path: once cleared, no further frame runs and the closure chain
/// drops out of the scheduler.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("render loop stopped");
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
