//! Canvas 2D backend for the scene

use game_core::scene::{Color, Surface, TextAlign, TextStyle};
use game_core::Aabb;
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT_FAMILY: &str = "monospace";

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, color: Color) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) -> Result<(), JsValue> {
        let size = rect.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            f64::from(rect.min.x),
            f64::from(rect.min.y),
            f64::from(size.x),
            f64::from(size.y),
        );
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        style: TextStyle,
        color: Color,
    ) -> Result<(), JsValue> {
        let align = match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        };
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px {}", style.size, FONT_FAMILY));
        self.ctx.set_text_align(align);
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(text, f64::from(pos.x), f64::from(pos.y))
    }
}
