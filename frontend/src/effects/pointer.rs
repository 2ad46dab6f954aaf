use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::utils::listener::EventSubscription;

/// Pointer position relative to the viewport, each axis in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

impl PointerPosition {
    pub fn from_client(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / viewport_width).clamp(0.0, 1.0),
            y: (client_y / viewport_height).clamp(0.0, 1.0),
        }
    }

    /// Offset in pixels, zero at the center and `strength / 2` at the edges.
    pub fn parallax(&self, strength: f64) -> (f64, f64) {
        ((self.x - 0.5) * strength, (self.y - 0.5) * strength)
    }
}

/// Drift for the n-th floating icon; neighbours move in opposite directions.
pub fn constellation_offset(position: PointerPosition, index: usize, strength: f64) -> (f64, f64) {
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    let (dx, dy) = position.parallax(strength);
    (dx * sign, -dy * sign)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<web_sys::DomRect> for ElementRect {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// 3D hover tilt of a card. The default value is flat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(client_x: f64, client_y: f64, rect: &ElementRect, max_degrees: f64) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::default();
        }
        let center_x = rect.left + rect.width / 2.0;
        let center_y = rect.top + rect.height / 2.0;
        Self {
            rotate_x: ((client_y - center_y) / rect.height) * -max_degrees,
            rotate_y: ((client_x - center_x) / rect.width) * max_degrees,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Hook for card tilt: returns the current tilt plus `onmousemove` and
/// `onmouseleave` handlers to attach to the element behind `node`.
#[hook]
pub fn use_tilt(node: NodeRef, max_degrees: f64) -> (Tilt, Callback<MouseEvent>, Callback<MouseEvent>) {
    let tilt = use_state(Tilt::default);

    let onmousemove = {
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<web_sys::Element>() {
                let rect = ElementRect::from(element.get_bounding_client_rect());
                tilt.set(Tilt::from_pointer(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    &rect,
                    max_degrees,
                ));
            }
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::default()))
    };

    (*tilt, onmousemove, onmouseleave)
}

/// Tracks the pointer over the whole window. Starts at the center and keeps
/// the last sample; the listener is removed when the component unmounts.
#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let position = use_state(PointerPosition::default);
    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    let viewport = window.clone();
                    EventSubscription::new(&window, "mousemove", move |event: web_sys::Event| {
                        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                            let width = viewport.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                            let height = viewport.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                            position.set(PointerPosition::from_client(
                                mouse.client_x() as f64,
                                mouse.client_y() as f64,
                                width,
                                height,
                            ));
                        }
                    })
                    .map_err(|e| log::warn!("Failed to track pointer: {:?}", e))
                    .ok()
                });
                move || drop(subscription)
            },
            (),
        );
    }
    *position
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn defaults_to_center() {
        let p = PointerPosition::default();
        assert_eq!((p.x, p.y), (0.5, 0.5));
        assert_eq!(p.parallax(40.0), (0.0, 0.0));
    }

    #[test]
    fn normalizes_against_viewport() {
        let p = PointerPosition::from_client(480.0, 270.0, 1920.0, 1080.0);
        assert!(close(p.x, 0.25));
        assert!(close(p.y, 0.25));
        let (dx, dy) = p.parallax(40.0);
        assert!(close(dx, -10.0));
        assert!(close(dy, -10.0));
    }

    #[test]
    fn clamps_outside_viewport_and_survives_zero_size() {
        let p = PointerPosition::from_client(-20.0, 5000.0, 800.0, 600.0);
        assert_eq!((p.x, p.y), (0.0, 1.0));
        assert_eq!(PointerPosition::from_client(10.0, 10.0, 0.0, 600.0), PointerPosition::default());
    }

    #[test]
    fn constellation_neighbours_drift_apart() {
        let p = PointerPosition { x: 1.0, y: 0.0 };
        assert_eq!(constellation_offset(p, 0, 20.0), (10.0, 10.0));
        assert_eq!(constellation_offset(p, 1, 20.0), (-10.0, -10.0));
        assert_eq!(constellation_offset(p, 2, 20.0), (10.0, 10.0));
    }

    #[test]
    fn tilt_leans_toward_pointer() {
        let rect = ElementRect { left: 100.0, top: 100.0, width: 200.0, height: 100.0 };
        let centered = Tilt::from_pointer(200.0, 150.0, &rect, 15.0);
        assert!(close(centered.rotate_x, 0.0) && close(centered.rotate_y, 0.0));

        let corner = Tilt::from_pointer(300.0, 200.0, &rect, 15.0);
        assert!(close(corner.rotate_x, -7.5));
        assert!(close(corner.rotate_y, 7.5));
    }

    #[test]
    fn flat_tilt_renders_zero_rotation() {
        assert_eq!(
            Tilt::default().css(),
            "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg)"
        );
    }
}
