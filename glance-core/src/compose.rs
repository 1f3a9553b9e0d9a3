//! Frame composer
//!
//! Deterministic transformation of a complete status model into primitive
//! draw calls on a surface: clear, battery glyph, right-aligned output
//! token, centered layer text, finalize. Pure over the model; no provider
//! queries happen from here.

use core::fmt::Write;

use glance_display::surface::{Color, DisplayError, Surface, TextAlign};
use glance_display::symbols::{SYMBOL_REFRESH, SYMBOL_USB, SYMBOL_WARNING, SYMBOL_WIRELESS};
use glance_display::CANVAS_SIZE;
use heapless::String;

use crate::status::{Endpoint, StatusState};

/// Output token capacity in bytes; a symbol codepoint takes three
pub const OUTPUT_TOKEN_LEN: usize = 12;
/// Layer text capacity in bytes
pub const LAYER_TEXT_LEN: usize = 10;

// Row positions in the working area
const OUTPUT_ROW_Y: u16 = 0;
const LAYER_ROW_Y: u16 = 25;

/// Compose the output-status token for the current endpoint
///
/// Exactly one of four cases applies: USB glyph; profile number plus
/// wireless glyph (bonded and connected); warning glyph (bonded,
/// disconnected); refresh glyph (unbonded). Profile numbers are shown
/// 1-based and saturate at 9 so the single-digit field cannot overflow.
pub fn output_token(state: &StatusState) -> String<OUTPUT_TOKEN_LEN> {
    let mut token = String::new();
    match state.selected_endpoint {
        Endpoint::Usb => {
            let _ = token.push(SYMBOL_USB);
        }
        Endpoint::Wireless => {
            if state.active_profile_bonded {
                if state.active_profile_connected {
                    let shown = (state.active_profile_index as u16 + 1).min(9);
                    let _ = write!(token, "{} ", shown);
                    let _ = token.push(SYMBOL_WIRELESS);
                } else {
                    let _ = token.push(SYMBOL_WARNING);
                }
            } else {
                let _ = token.push(SYMBOL_REFRESH);
            }
        }
    }
    token
}

/// Compose the fallback text for a layer the keymap does not name
pub fn layer_fallback(index: u8) -> String<LAYER_TEXT_LEN> {
    let mut text = String::new();
    let _ = write!(text, "LAYER {}", index);
    text
}

/// Redraw the full frame for `state` onto `surface`
///
/// Always draws every element; redrawing an unchanged model produces an
/// identical frame.
pub fn draw_status<S: Surface>(surface: &mut S, state: &StatusState) -> Result<(), DisplayError> {
    surface.fill_rect(0, 0, CANVAS_SIZE, CANVAS_SIZE, Color::Background)?;

    #[cfg(feature = "vbus-detect")]
    surface.draw_battery(state.battery_level, state.charging)?;
    #[cfg(not(feature = "vbus-detect"))]
    surface.draw_battery(state.battery_level, false)?;

    let token = output_token(state);
    surface.draw_text(0, OUTPUT_ROW_Y, CANVAS_SIZE, TextAlign::Right, &token)?;

    match state.layer_label {
        Some(label) => {
            surface.draw_text(0, LAYER_ROW_Y, CANVAS_SIZE, TextAlign::Center, label)?;
        }
        None => {
            let text = layer_fallback(state.layer_index);
            surface.draw_text(0, LAYER_ROW_Y, CANVAS_SIZE, TextAlign::Center, &text)?;
        }
    }

    surface.finalize()
}
