use super::Rgb;

/// Number of positions on the hue wheel
pub const WHEEL_SIZE: usize = 256;

const BAND: u8 = 85;

/// Map a wheel position to a color.
///
/// The wheel is split into three 85-wide bands. Position 0 is pure green,
/// 85 is pure red, 170 is pure blue, and 255 wraps back to green, so
/// callers scrolling continuously can take positions modulo 256.
pub const fn wheel(position: u8) -> Rgb {
    if position < BAND {
        let step = position * 3;
        Rgb {
            r: step,
            g: 255 - step,
            b: 0,
        }
    } else if position < BAND * 2 {
        let step = (position - BAND) * 3;
        Rgb {
            r: 255 - step,
            g: 0,
            b: step,
        }
    } else {
        let step = (position - BAND * 2) * 3;
        Rgb {
            r: 0,
            g: step,
            b: 255 - step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_starts() {
        assert_eq!(wheel(0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(85), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn channels_always_sum_to_full_scale() {
        for position in 0..=u8::MAX {
            let c = wheel(position);
            assert_eq!(u16::from(c.r) + u16::from(c.g) + u16::from(c.b), 255);
        }
    }

    #[test]
    fn neighbours_differ_by_one_step_including_wrap() {
        for position in 0..=u8::MAX {
            let a = wheel(position);
            let b = wheel(position.wrapping_add(1));
            for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
                assert!(x.abs_diff(y) <= 3, "jump between {position} and next");
            }
        }
        assert_eq!(wheel(84), Rgb { r: 252, g: 3, b: 0 });
        assert_eq!(wheel(255), wheel(0));
    }
}
