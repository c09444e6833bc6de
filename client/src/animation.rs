use std::fmt::Write;

/// Per-card entrance delay within a grid.
pub const CARD_STAGGER_SECS: f64 = 0.1;
/// Per-marker entrance delay on the timeline.
pub const TIMELINE_STAGGER_SECS: f64 = 0.2;
/// Per-particle start offset for the floating background dots.
pub const PARTICLE_STAGGER_SECS: f64 = 0.2;
pub const PARTICLE_COUNT: usize = 20;
/// How long the popup lingers while fading out after closing.
pub const POPUP_EXIT_MS: u32 = 200;

/// Transform for the timeline markers: grow a little under the pointer.
pub fn hover_scale(hovered: bool) -> &'static str {
    if hovered { "scale(1.1)" } else { "scale(1)" }
}

/// CSS `animation-delay` value for the item at `index`.
pub fn stagger(index: usize, step_secs: f64) -> String {
    let mut out = String::with_capacity(8);
    let _ = write!(out, "{:.2}s", index as f64 * step_secs);
    out
}

/// Spread particles over the page without clustering: golden-ratio steps
/// horizontally, a coprime stride vertically. Returns (left %, top %).
pub fn particle_position(index: usize) -> (f64, f64) {
    const GOLDEN: f64 = 0.618_033_988_75;
    let left = (index as f64 * GOLDEN).fract() * 100.0;
    let top = ((index * 37) % 100) as f64;
    (left, top)
}

/// Keyframes shared by the page. Mounted once in a `<style>` tag.
pub const KEYFRAMES: &str = r#"
@keyframes leads-rise-in { from { opacity: 0; transform: translateY(50px); } to { opacity: 1; transform: translateY(0); } }
@keyframes leads-drop-in { from { opacity: 0; transform: translateY(-50px); } to { opacity: 1; transform: translateY(0); } }
@keyframes leads-fade-up { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
@keyframes leads-fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes leads-pop-in { from { transform: scale(0.9) translateY(50px); } to { transform: scale(1) translateY(0); } }
@keyframes leads-spin-in { from { transform: rotate(-180deg) scale(0); } to { transform: rotate(0) scale(1); } }
@keyframes leads-spin { to { transform: rotate(360deg); } }
@keyframes leads-pulse { 0%, 100% { transform: scale(1) rotate(0); } 33% { transform: scale(1.1) rotate(5deg); } 66% { transform: scale(1.05) rotate(-5deg); } }
@keyframes leads-ring { 0%, 100% { transform: scale(1); opacity: 1; } 50% { transform: scale(1.2); opacity: 0; } }
@keyframes leads-frame-spin { 0% { transform: rotate(0) scale(1); } 50% { transform: rotate(180deg) scale(1.1); } 100% { transform: rotate(360deg) scale(1); } }
@keyframes leads-float { 0% { opacity: 0; transform: translate(-10px, -20px) scale(0); } 50% { opacity: 1; transform: translate(0, -30px) scale(1.5); } 100% { opacity: 0; transform: translate(10px, -40px) scale(0); } }
@keyframes leads-dots { 0% { background-position: 20% 30%; } 100% { background-position: 80% 70%; } }
@keyframes leads-shimmer { 0%, 100% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } }
@keyframes leads-grow-x { from { transform: scaleX(0); } to { transform: scaleX(1); } }
"#;
