use leptos::html::Canvas;
use leptos::prelude::*;

use crate::effects::ParticleSettings;

/// Full-bleed canvas of slowly drifting particles.
///
/// The animation loop starts once the canvas is mounted and is dropped with
/// the component. Nothing is drawn on the server.
#[component]
pub fn ParticleCanvas(#[prop(optional)] settings: Option<ParticleSettings>) -> impl IntoView {
    let canvas = NodeRef::<Canvas>::new();
    let settings = settings.unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        use crate::effects::raf::FrameLoop;

        let running: StoredValue<Option<FrameLoop>, LocalStorage> =
            StoredValue::new_with_storage(None);

        Effect::new(move |_| {
            let Some(element) = canvas.get() else {
                return;
            };
            if running.with_value(Option::is_some) {
                return;
            }
            match start(element, settings) {
                Some(frames) => running.set_value(Some(frames)),
                None => tracing::warn!("canvas 2d context unavailable, particles disabled"),
            }
        });

        on_cleanup(move || {
            running.try_update_value(|frames| frames.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = settings;

    view! {
        <canvas node_ref=canvas class="particle-canvas" aria-hidden="true"></canvas>
    }
}

#[cfg(feature = "hydrate")]
fn start(
    canvas: web_sys::HtmlCanvasElement,
    settings: ParticleSettings,
) -> Option<crate::effects::raf::FrameLoop> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::CanvasRenderingContext2d;

    use crate::effects::raf::FrameLoop;
    use crate::effects::ParticleField;

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let size = |canvas: &web_sys::HtmlCanvasElement| {
        (f64::from(canvas.client_width()), f64::from(canvas.client_height()))
    };
    let (width, height) = size(&canvas);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let field = Rc::new(RefCell::new(ParticleField::new(
        settings,
        width,
        height,
        &mut rand::thread_rng(),
    )));
    let fill = settings.fill_style();

    let frames = FrameLoop::new(move |_| {
        let mut field = field.borrow_mut();

        let (width, height) = size(&canvas);
        if width > 0.0 && height > 0.0 && (width, height) != field.size() {
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            field.resize(width, height, &mut rand::thread_rng());
        }
        field.step();

        let (width, height) = field.size();
        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(&fill);
        for p in field.particles() {
            ctx.begin_path();
            if ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU).is_ok() {
                ctx.fill();
            }
        }
    });
    frames.start();
    tracing::debug!(width, height, "particle canvas started");
    Some(frames)
}
