//! Text measurement for the navigation bar
//!
//! Labels are measured by rendering them, with the exact style the live bar
//! uses, into an off-screen ratatui buffer (a "probe") and reading back how
//! far the write cursor advanced. The probe never touches the frame being
//! drawn, and every probe is released when its guard goes out of scope.

use std::cell::Cell;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use serde::{Deserialize, Serialize};

use crate::model::types::NavItem;

/// Width of a probe buffer in cells; labels longer than this are clipped
pub const PROBE_WIDTH: u16 = 1024;

/// Style applied to every nav label (inline items, trigger, secondary link)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NavStyle {
    /// Blank cells on each side of a label
    pub padding: u16,
    /// Blank cells between adjacent characters
    pub letter_spacing: u16,
    /// Render labels in upper case
    pub uppercase: bool,
    /// Render labels in bold
    pub bold: bool,
}

impl Default for NavStyle {
    fn default() -> Self {
        Self {
            padding: 1,
            letter_spacing: 0,
            uppercase: false,
            bold: true,
        }
    }
}

impl NavStyle {
    /// Text exactly as the bar draws it: case, letter spacing and padding applied
    pub fn render_label(&self, label: &str) -> String {
        let text = if self.uppercase {
            label.to_uppercase()
        } else {
            label.to_string()
        };

        let spaced = if self.letter_spacing > 0 {
            let spacer = " ".repeat(self.letter_spacing as usize);
            text.chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(&spacer)
        } else {
            text
        };

        let pad = " ".repeat(self.padding as usize);
        format!("{}{}{}", pad, spaced, pad)
    }

    /// Cell style for the label
    pub fn cell_style(&self) -> Style {
        if self.bold {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }
}

/// Anything that can report the laid-out extent of styled text
pub trait TextMeasurer {
    /// Width in cells of `text` rendered with `style`
    fn measure_text(&self, text: &str, style: &NavStyle) -> u16;

    /// Widths of every item label, in display order
    fn measure_widths(&self, items: &[NavItem], style: &NavStyle) -> Vec<u16> {
        items
            .iter()
            .map(|item| self.measure_text(&item.label, style))
            .collect()
    }
}

/// Hands out scratch probes and tracks how many are alive
#[derive(Debug, Default)]
pub struct ProbeHost {
    live: Cell<usize>,
}

impl ProbeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a probe; it is released when the returned guard drops
    pub fn acquire(&self) -> Probe<'_> {
        self.live.set(self.live.get() + 1);
        Probe {
            host: self,
            buffer: Buffer::empty(Rect::new(0, 0, PROBE_WIDTH, 1)),
        }
    }

    /// Number of probes currently acquired and not yet released
    pub fn live_probes(&self) -> usize {
        self.live.get()
    }
}

/// Off-screen, one-row scratch buffer used for a single measurement pass
pub struct Probe<'a> {
    host: &'a ProbeHost,
    buffer: Buffer,
}

impl Probe<'_> {
    /// Render `text` at the origin and return how many cells it occupied
    pub fn extent(&mut self, text: &str, style: Style) -> u16 {
        self.buffer.reset();
        let (end_x, _) = self
            .buffer
            .set_stringn(0, 0, text, PROBE_WIDTH as usize, style);
        end_x
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        // Release the scratch cells along with the guard
        self.buffer = Buffer::default();
        self.host.live.set(self.host.live.get().saturating_sub(1));
    }
}

/// Measures labels by rendering them into probe buffers
#[derive(Debug, Default)]
pub struct BufferMeasurer {
    host: ProbeHost,
}

impl BufferMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe_host(&self) -> &ProbeHost {
        &self.host
    }
}

impl TextMeasurer for BufferMeasurer {
    fn measure_text(&self, text: &str, style: &NavStyle) -> u16 {
        let mut probe = self.host.acquire();
        probe.extent(&style.render_label(text), style.cell_style())
    }

    fn measure_widths(&self, items: &[NavItem], style: &NavStyle) -> Vec<u16> {
        if items.is_empty() {
            return Vec::new();
        }

        // One probe for the whole pass
        let mut probe = self.host.acquire();
        let cell_style = style.cell_style();
        items
            .iter()
            .map(|item| probe.extent(&style.render_label(&item.label), cell_style))
            .collect()
    }
}
