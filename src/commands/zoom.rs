use serde::Serialize;

use crate::cli::ZoomArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::zoom::{EventDisposition, Key, TrackingState, ZoomController, ZoomEvent, ZoomLevel};

#[derive(Debug, Serialize)]
struct ZoomReplay {
    zoom: ZoomLevel,
    state: TrackingState,
    intercepted: usize,
}

pub fn run(ctx: &AppContext, args: ZoomArgs) -> AppResult<()> {
    let events = args
        .events
        .iter()
        .map(|raw| parse_event(raw))
        .collect::<AppResult<Vec<_>>>()?;

    let step = ctx.settings.zoom_step;
    let mut controller = match args.start {
        Some(start) => ZoomController::with_style(step, start),
        None => ZoomController::new(step),
    };

    let replay = replay(&mut controller, &events);
    let text = format!(
        "zoom {} ({} wheel events intercepted)",
        replay.zoom, replay.intercepted
    );
    ctx.output.emit(&text, &replay)
}

fn replay(controller: &mut ZoomController, events: &[ZoomEvent]) -> ZoomReplay {
    let intercepted = events
        .iter()
        .filter(|event| controller.handle(event) == EventDisposition::Intercepted)
        .count();

    ZoomReplay {
        zoom: controller.zoom(),
        state: controller.state(),
        intercepted,
    }
}

fn parse_event(raw: &str) -> AppResult<ZoomEvent> {
    let raw = raw.trim();
    match raw {
        "ctrl-down" => return Ok(ZoomEvent::KeyDown(Key::Control)),
        "ctrl-up" => return Ok(ZoomEvent::KeyUp(Key::Control)),
        _ => {}
    }

    let (kind, value) = raw
        .split_once(':')
        .ok_or_else(|| AppError::InvalidInput(format!("unknown zoom event `{raw}`")))?;

    match kind {
        "wheel" => {
            let delta_y = value.parse::<f64>().map_err(|_| {
                AppError::InvalidInput(format!("wheel delta must be a number, got `{value}`"))
            })?;
            Ok(ZoomEvent::Wheel { delta_y })
        }
        "key-down" => Ok(ZoomEvent::KeyDown(Key::from_name(value))),
        "key-up" => Ok(ZoomEvent::KeyUp(Key::from_name(value))),
        _ => Err(AppError::InvalidInput(format!("unknown zoom event `{raw}`"))),
    }
}
