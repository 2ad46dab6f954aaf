use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{AbortHandle, Abortable};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub const SCROLL_DURATION: Duration = Duration::from_millis(1_800);

/// Gentle ease-out: fast start, long soft landing.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn position_at(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_out_quart(progress)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Time between two animation frame timestamps. Never negative.
pub fn frame_elapsed(started_ms: f64, now_ms: f64) -> Duration {
    Duration::from_secs_f64(((now_ms - started_ms) / 1_000.0).max(0.0))
}

/// A pending `requestAnimationFrame`; cancelled if dropped before it fires.
struct FrameRequest {
    window: web_sys::Window,
    id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        if let Err(e) = self.window.cancel_animation_frame(self.id) {
            log::warn!("Failed to cancel animation frame: {:?}", e);
        }
    }
}

/// Waits for the next animation frame and yields its timestamp in ms.
async fn next_frame(window: &web_sys::Window) -> Option<f64> {
    let (tx, rx) = oneshot::channel();
    let mut tx = Some(tx);
    let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        if let Some(tx) = tx.take() {
            let _ = tx.send(timestamp);
        }
    });
    let id = match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Animation frames unavailable: {:?}", e);
            return None;
        }
    };
    let _request = FrameRequest {
        window: window.clone(),
        id,
        _callback: callback,
    };
    rx.await.ok()
}

async fn animate(window: web_sys::Window, animation: ScrollAnimation) {
    let Some(started) = next_frame(&window).await else {
        window.scroll_to_with_x_and_y(0.0, animation.to);
        return;
    };
    let mut now = started;
    loop {
        let elapsed = frame_elapsed(started, now);
        window.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));
        if animation.is_finished(elapsed) {
            break;
        }
        match next_frame(&window).await {
            Some(timestamp) => now = timestamp,
            None => {
                window.scroll_to_with_x_and_y(0.0, animation.to);
                break;
            }
        }
    }
}

/// Returns a callback that smoothly scrolls to the element with the given id.
///
/// Starting a new scroll aborts the one in progress, and unmounting aborts
/// whatever is still running.
#[hook]
pub fn use_smooth_scroll() -> Callback<&'static str> {
    let active = use_mut_ref(|| None::<AbortHandle>);
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(handle) = active.borrow_mut().take() {
                        handle.abort();
                    }
                }
            },
            (),
        );
    }

    Callback::from(move |target: &'static str| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(target)) else {
            log::warn!("No element #{} to scroll to", target);
            return;
        };
        let from = window.scroll_y().unwrap_or(0.0);
        let to = from + element.get_bounding_client_rect().top();

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = active.borrow_mut().replace(handle) {
            previous.abort();
        }
        let animation = ScrollAnimation::new(from, to, SCROLL_DURATION);
        spawn_local(async move {
            let _ = Abortable::new(animate(window, animation), registration).await;
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
    }

    #[test]
    fn easing_never_moves_backwards() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_out_quart(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn animation_lands_on_target() {
        let scroll = ScrollAnimation::new(100.0, 900.0, Duration::from_millis(1_000));
        assert_eq!(scroll.position_at(Duration::ZERO), 100.0);
        assert_eq!(scroll.position_at(Duration::from_millis(500)), 100.0 + 800.0 * 0.9375);
        assert_eq!(scroll.position_at(Duration::from_secs(5)), 900.0);
        assert!(!scroll.is_finished(Duration::from_millis(999)));
        assert!(scroll.is_finished(Duration::from_millis(1_000)));
    }

    #[test]
    fn frame_timestamps_become_elapsed_time() {
        assert_eq!(frame_elapsed(1_000.0, 1_000.0), Duration::ZERO);
        assert_eq!(frame_elapsed(1_000.0, 1_250.0), Duration::from_millis(250));
        assert_eq!(frame_elapsed(1_000.0, 3_000.0), Duration::from_secs(2));
    }

    #[test]
    fn clock_skew_never_goes_negative() {
        assert_eq!(frame_elapsed(2_000.0, 1_990.0), Duration::ZERO);
        assert_eq!(frame_elapsed(0.0, f64::NAN), Duration::ZERO);
    }

    #[test]
    fn scrolling_up_works_too() {
        let scroll = ScrollAnimation::new(900.0, 0.0, SCROLL_DURATION);
        let mid = scroll.position_at(SCROLL_DURATION / 2);
        assert!(mid < 900.0 && mid > 0.0);
    }
}
