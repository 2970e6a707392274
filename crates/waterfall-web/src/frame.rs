use crate::audio::AudioGraph;
use crate::dom;
use crate::input::InputState;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use waterfall_core::{PhysicsWorld, RapierWorld, Simulation, TickInput};
use web_sys as web;

// boat pos(3) + boat rot(4) + eye(3) + target(3) + proximity(1)
pub const SNAPSHOT_LEN: usize = 14;

thread_local! {
    static SNAPSHOT: RefCell<[f32; SNAPSHOT_LEN]> = const { RefCell::new([0.0; SNAPSHOT_LEN]) };
    static VIEW_PROJ: RefCell<[f32; 16]> = const { RefCell::new([0.0; 16]) };
}

pub fn read_snapshot() -> [f32; SNAPSHOT_LEN] {
    SNAPSHOT.with(|s| *s.borrow())
}

pub fn read_view_projection() -> [f32; 16] {
    VIEW_PROJ.with(|m| *m.borrow())
}

fn publish_snapshot(sim: &Simulation<RapierWorld>, bucket: f32) {
    let pose = sim.world().pose();
    let cam = &sim.camera().camera;
    let t = pose.translation;
    let q = pose.rotation;
    SNAPSHOT.with(|s| {
        *s.borrow_mut() = [
            t.x, t.y, t.z, q.x, q.y, q.z, q.w, cam.eye.x, cam.eye.y, cam.eye.z, cam.target.x,
            cam.target.y, cam.target.z, bucket,
        ];
    });
    VIEW_PROJ.with(|m| *m.borrow_mut() = cam.view_projection().to_cols_array());
}

pub struct FrameContext {
    pub sim: Simulation<RapierWorld>,
    pub audio: AudioGraph,
    pub input: Rc<RefCell<InputState>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub last_instant: Instant,
    pub overlay_dismissed: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        if !self.sim.context().is_loaded() {
            return;
        }

        let (tick_input, interacted) = {
            let mut state = self.input.borrow_mut();
            let tick_input = TickInput {
                keys: state.held.directional(),
                pointer: state.pointer,
            };
            (tick_input, state.take_interaction())
        };
        if interacted {
            self.sim.notify_interaction(&mut self.audio);
        }

        self.sim
            .camera_mut()
            .set_aspect(dom::canvas_aspect(&self.canvas));
        let report = self.sim.tick(&tick_input, dt_sec, &mut self.audio);
        if report.commands > 0 {
            log::debug!(
                "[frame] {} audio commands, proximity={:.1}",
                report.commands,
                report.bucket
            );
        }

        if !self.overlay_dismissed && self.sim.context().has_user_interacted() {
            overlay::on_first_interaction(&self.document);
            self.overlay_dismissed = true;
        }
        publish_snapshot(&self.sim, report.bucket);
    }

    pub fn toggle_muted(&mut self) {
        self.sim.toggle_muted(&mut self.audio);
        overlay::show_muted(&self.document, self.sim.context().is_muted());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
