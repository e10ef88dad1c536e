//! Canvas 2D backend for the browser build

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{RenderBackend, SpriteKey, TextStyle};

pub struct CanvasBackend {
    ctx: CanvasRenderingContext2d,
    size: (f64, f64),
    images: HashMap<SpriteKey, HtmlImageElement>,
}

impl CanvasBackend {
    /// Grab the 2D context and start loading every sprite
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = HashMap::with_capacity(SpriteKey::ALL.len());
        for sprite in SpriteKey::ALL {
            let img = HtmlImageElement::new()?;
            img.set_src(sprite.path());
            images.insert(sprite, img);
        }
        log::info!("Loading {} sprites", images.len());

        Ok(Self {
            ctx,
            size: (canvas.width() as f64, canvas.height() as f64),
            images,
        })
    }

    /// All sprites finished loading
    pub fn ready(&self) -> bool {
        self.images.values().all(|img| img.complete() && img.natural_width() > 0)
    }
}

impl RenderBackend for CanvasBackend {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.size.0, self.size.1);
    }

    fn draw_image(&mut self, sprite: SpriteKey, x: f32, y: f32) {
        let Some(img) = self.images.get(&sprite) else {
            return;
        };
        // Skip until loaded; a broken image would throw
        if !img.complete() || img.natural_width() == 0 {
            return;
        }
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element(img, x as f64, y as f64)
        {
            log::warn!("drawImage {:?} failed: {:?}", sprite, e);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align(style.align);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
