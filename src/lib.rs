//! Reel library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod recommend;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the recommendation results are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultsLayout {
    /// Every title on its own line.
    #[default]
    List,
    /// One title at a time with its neighbours peeking in.
    Carousel,
}

impl ResultsLayout {
    pub fn toggle(self) -> Self {
        match self {
            ResultsLayout::List => ResultsLayout::Carousel,
            ResultsLayout::Carousel => ResultsLayout::List,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultsLayout::List => "List",
            ResultsLayout::Carousel => "Carousel",
        }
    }
}
