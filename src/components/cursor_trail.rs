use std::time::Instant;

use devcomedy_core::trail::PRUNE_INTERVAL;
use devcomedy_core::CursorTrail;
use dioxus::prelude::*;

use crate::context::use_portfolio;

/// Renders the trail and runs the prune loop while the trail is enabled.
///
/// Pointer moves are captured by the root element, which owns `trail`.
#[component]
pub fn CursorTrailLayer(trail: Signal<CursorTrail>) -> Element {
    let mode = use_portfolio().mode();

    use_future(move || async move {
        let mut trail = trail;
        while trail.peek().is_enabled() {
            tokio::time::sleep(PRUNE_INTERVAL).await;
            if !trail.peek().is_empty() {
                trail.write().prune(Instant::now());
            }
        }
        tracing::debug!("Cursor trail disabled");
    });

    let now = Instant::now();
    let glyph = CursorTrail::glyph(mode);
    let class = CursorTrail::class(mode);
    let particles: Vec<(u64, f64, f64, f64)> = trail
        .read()
        .particles()
        .iter()
        .map(|p| (p.id, p.x, p.y, p.opacity(now)))
        .collect();

    rsx! {
        for (id, x, y, opacity) in particles {
            span {
                key: "{id}",
                class,
                style: "left: {x}px; top: {y}px; opacity: {opacity:.2};",
                "{glyph}"
            }
        }
    }
}
