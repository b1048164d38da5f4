use super::*;

mod dsp;
mod fpu;
mod rvv;

pub(super) const WIDTHS: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];
pub(super) const SIGNS: [Sign; 2] = [Sign::Signed, Sign::Unsigned];

//"s8", "u32", ...
pub(super) fn int_suffix(w: Width, sign: Sign) -> String {
    format!("{}{}", if sign.is_signed() { "s" } else { "u" }, w.len())
}
