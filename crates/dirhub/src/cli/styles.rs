//! Terminal styles.
//!
//! Renderers use the semantic names below and never build a `Style` inline, so
//! the palette can change in one place. `console` drops the escapes on its own
//! when stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().color256(178));
pub static FEATURED: Lazy<Style> = Lazy::new(|| Style::new().color256(178).bold());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
pub static ACTIVE: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static DRAFT: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static INACTIVE: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
