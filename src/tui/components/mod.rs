//! # TUI Components
//!
//! Everything drawn inside the card.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields and are rebuilt every frame:
//! - `TitleBar`: App title, status and theme toggle
//! - `SubmitButton`: Recommend / loading button
//! - `MovieList`: Results, one per row
//! - `Carousel`: Results, one at a time
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persist in `TuiState` and emit events:
//! - `InputBox`: The prompt field
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── submit_button.rs
//! ├── movie_list.rs
//! ├── carousel.rs
//! └── input_box/        (prompt field, editing + horizontal scroll)
//! ```

use unicode_width::UnicodeWidthChar;

pub mod carousel;
pub mod input_box;
pub mod movie_list;
pub mod submit_button;
pub mod title_bar;

pub use carousel::Carousel;
pub use input_box::{InputBox, InputEvent};
pub use movie_list::MovieList;
pub use submit_button::SubmitButton;
pub use title_bar::TitleBar;

/// Truncate `s` to at most `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let full: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if full <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
