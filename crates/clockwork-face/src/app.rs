use std::time::{Duration, Instant};

use winit::dpi::LogicalSize;

use clockwork_engine::core::{App as EngineApp, AppControl, FrameCtx};
use clockwork_engine::device::GpuInit;
use clockwork_engine::paint::Color;
use clockwork_engine::render::shapes::ShapeRenderer;
use clockwork_engine::scene::DrawList;
use clockwork_engine::window::{Runtime, RuntimeConfig};

use crate::face::ClockFace;
use crate::painter::Painter;
use crate::sample::{LocalTimeSource, TimeSource};
use crate::sampler::{SAMPLE_INTERVAL, TimeSampler};
use crate::style::ClockStyle;

// ── ClockApplication ──────────────────────────────────────────────────────

/// Window that shows a live clock face.
///
/// ```rust,ignore
/// ClockApplication::new()
///     .title("Clock")
///     .style(ClockStyle::default().radius(150.0))
///     .run();
/// ```
pub struct ClockApplication {
    title:      String,
    width:      f64,
    height:     f64,
    style:      ClockStyle,
    background: Color,
    interval:   Duration,
}

impl ClockApplication {
    pub fn new() -> Self {
        Self {
            title:      "Clockwork".to_string(),
            width:      400.0,
            height:     400.0,
            style:      ClockStyle::default(),
            background: Color::WHITE,
            interval:   SAMPLE_INTERVAL,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    pub fn style(mut self, style: ClockStyle) -> Self {
        self.style = style;
        self
    }

    /// Color behind the face.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// How often the clock is re-sampled and the face redrawn.
    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    // ── Entry points ──────────────────────────────────────────────────────

    /// Start the event loop showing local time.
    ///
    /// This never returns.
    pub fn run(self) -> ! {
        self.run_with_source(LocalTimeSource)
    }

    /// Start the event loop with time read from `source`.
    ///
    /// This never returns.
    pub fn run_with_source<S>(self, source: S) -> !
    where
        S: TimeSource + 'static,
    {
        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable:    true,
        };
        let state = ClockAppState::new(self, source);

        log::info!("starting clock: {}", config.title);
        if let Err(e) = Runtime::run(config, GpuInit::default(), state) {
            log::error!("clockwork runtime error: {e:#}");
            std::process::exit(1);
        }
        std::process::exit(0);
    }
}

impl Default for ClockApplication {
    fn default() -> Self {
        Self::new()
    }
}

// ── ClockAppState ─────────────────────────────────────────────────────────

/// Internal state that implements `clockwork_engine::core::App`.
///
/// The sampler decides when frames happen; everything engine-specific lives here.
struct ClockAppState<S> {
    face:       ClockFace,
    background: Color,
    sampler:    TimeSampler<S>,

    draw_list:      DrawList,
    shape_renderer: ShapeRenderer,
}

impl<S: TimeSource> ClockAppState<S> {
    fn new(app: ClockApplication, source: S) -> Self {
        Self {
            face:           ClockFace::new(app.style),
            background:     app.background,
            sampler:        TimeSampler::with_interval(source, app.interval),
            draw_list:      DrawList::new(),
            shape_renderer: ShapeRenderer::new(),
        }
    }
}

impl<S: TimeSource> EngineApp for ClockAppState<S> {
    fn next_frame_deadline(&self) -> Option<Instant> {
        // Before the first sample the deadline is "now".
        Some(self.sampler.next_deadline().unwrap_or_else(Instant::now))
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if let Some(sample) = self.sampler.poll(ctx.time.now) {
            log::debug!("frame {}: {sample}", ctx.time.frame_index);
        }
        // Frames requested by the window (resize, expose) repaint the last sample.
        let time = self.sampler.latest().unwrap_or_default();

        self.draw_list.clear();
        let center = ctx.window.viewport().center();
        self.face.paint(&mut Painter::new(&mut self.draw_list), center, time);

        // ── Render ────────────────────────────────────────────────────────
        let dl = &mut self.draw_list;
        let r  = &mut self.shape_renderer;

        ctx.render(self.background, |rctx, target| r.render(rctx, target, dl))
    }
}
