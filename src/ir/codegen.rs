//! # Code Generation
//!
//! Converts IR programs to StarPRNT protocol bytes.

use super::ops::{Op, Program, TextSize, TextStyle};
use crate::protocol::{commands, cp437, text};

impl Program {
    /// Compile the IR program to StarPRNT bytes.
    ///
    /// Every job starts with a printer reset and CP437 selection, so the
    /// device state left behind by a previous job never leaks in.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend(commands::init());
        out.extend(text::codepage_cp437());

        for op in &self.ops {
            match op {
                Op::SetAlign(align) => {
                    out.extend(text::align(*align));
                }
                Op::Text { content, style } => {
                    let style = style.unwrap_or_default();
                    style_on(&mut out, style);
                    out.extend(cp437::encode(content));
                    out.push(commands::LF);
                    style_off(&mut out, style);
                }
                Op::Feed { lines } => {
                    out.extend(commands::feed_lines(*lines));
                }
                Op::Cut => {
                    out.extend(commands::cut_full_feed());
                }
            }
        }

        out
    }
}

fn style_on(out: &mut Vec<u8>, style: TextStyle) {
    if style.bold {
        out.extend(text::bold_on());
    }
    if style.size == TextSize::Large {
        out.extend(text::size_double());
    }
}

fn style_off(out: &mut Vec<u8>, style: TextStyle) {
    if style.size == TextSize::Large {
        out.extend(text::size_normal());
    }
    if style.bold {
        out.extend(text::bold_off());
    }
}
