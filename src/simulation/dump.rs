//! Textual dump of a system, one body per line.
//!
//! Numbers use C-style `%g` formatting: positions with 8 significant digits,
//! masses with 6. The mass is appended directly after the z coordinate with
//! no separator (`"<x> <y> <z><mass>"`). This is an inspection aid and is
//! not meant to be read back.

use std::fmt;
use std::io::{self, Write};

use super::states::{Body, NVec3, System};

pub const POSITION_PRECISION: usize = 8;
pub const MASS_PRECISION: usize = 6;

/// Format `v` like printf's `%.{precision}g`.
pub fn format_general(v: f64, precision: usize) -> String {
    let p = precision.max(1);

    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to p significant digits may bump the exponent, so read it
    // back from the rounded scientific form.
    let sci = format!("{:.*e}", p - 1, v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_fraction_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        strip_fraction_zeros(&format!("{:.*}", decimals, v)).to_string()
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `"x y z"` rendering of a vector
pub struct VecDisplay<'a>(pub &'a NVec3);

impl fmt::Display for VecDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_general(self.0.x, POSITION_PRECISION),
            format_general(self.0.y, POSITION_PRECISION),
            format_general(self.0.z, POSITION_PRECISION)
        )
    }
}

/// One dump line for `b`
pub fn body_line(b: &Body) -> String {
    format!("{}{}", VecDisplay(&b.position), format_general(b.mass, MASS_PRECISION))
}

impl System {
    /// Write every body's line in load order
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for b in self.bodies() {
            writeln!(out, "{}", body_line(b))?;
        }
        Ok(())
    }
}
