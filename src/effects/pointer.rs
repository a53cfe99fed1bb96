// Pointer driven micro-interactions: 3d tilt on images and click ripples on buttons

use wasm_bindgen::prelude::*;

pub const TILT_SELECTOR: &str = ".profile-img, .university-img, .hobby-img, .contact-img";
pub const RIPPLE_BUTTON_SELECTOR: &str = ".btn";
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale(1)";
pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME_MS: u32 = 600;

// Pointer position is relative to the element; 10 px off center tilts by 1 degree
#[wasm_bindgen]
pub fn tilt_transform(width: f64, height: f64, x: f64, y: f64) -> String {
    let rotate_x = (y - height / 2.0) / 10.0;
    let rotate_y = (width / 2.0 - x) / 10.0;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) scale(1.05)",
        rotate_x, rotate_y
    )
}

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
}

#[wasm_bindgen]
impl Ripple {
    // Click position in element coordinates
    pub fn at(rect_left: f64, rect_top: f64, client_x: f64, client_y: f64) -> Ripple {
        Ripple {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }

    pub fn left(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top(&self) -> String {
        format!("{}px", self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_follows_pointer() {
        assert_eq!(
            tilt_transform(200.0, 100.0, 150.0, 80.0),
            "perspective(1000px) rotateX(3deg) rotateY(-5deg) scale(1.05)"
        );
        assert_eq!(
            tilt_transform(200.0, 100.0, 0.0, 0.0),
            "perspective(1000px) rotateX(-5deg) rotateY(10deg) scale(1.05)"
        );
    }

    #[test]
    fn ripple_is_local_to_element() {
        let ripple = Ripple::at(40.0, 300.0, 55.0, 312.5);
        assert_eq!(ripple, Ripple { x: 15.0, y: 12.5 });
        assert_eq!(ripple.left(), "15px");
        assert_eq!(ripple.top(), "12.5px");
    }
}
