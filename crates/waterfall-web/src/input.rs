use crate::keys::{Control, HeldControls};
use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct InputState {
    pub held: HeldControls,
    /// Pointer in normalized device coordinates, y up.
    pub pointer: Vec2,
    /// Set by event handlers, consumed once per frame.
    pub pending_interaction: bool,
}

impl InputState {
    pub fn key(&mut self, control: Control, down: bool) {
        if self.held.set(control, down) {
            self.pending_interaction = true;
        }
    }

    pub fn take_interaction(&mut self) -> bool {
        std::mem::take(&mut self.pending_interaction)
    }
}

#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f32; 2] {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        let u = (x_css / w).clamp(0.0, 1.0);
        let v = (y_css / h).clamp(0.0, 1.0);
        [u, v]
    } else {
        [0.5, 0.5]
    }
}

#[inline]
pub fn uv_to_ndc(uv: [f32; 2]) -> Vec2 {
    Vec2::new(uv[0] * 2.0 - 1.0, 1.0 - uv[1] * 2.0)
}
