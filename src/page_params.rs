use std::num::NonZeroUsize;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Built-in (non-embedded) Type1 fonts a report may be set in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BaseFont {
    Helvetica,
    Courier,
    Times,
}

impl BaseFont {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseFont::Helvetica => "Helvetica",
            BaseFont::Courier => "Courier",
            BaseFont::Times => "Times-Roman",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Page geometry and text metrics (all in PDF user units, 1/72")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub size: Size,
    pub font: BaseFont,
    pub font_size: u32,
    /// baseline of the first printed line
    pub left: u32,
    pub top: u32,
    /// leading between printed lines
    pub line_height: u32,
    pub lines_per_page: NonZeroUsize,
}

impl PageParams {
    /// Cursor drop after the title line (one blank line below it)
    pub fn title_gap(&self) -> u32 {
        self.line_height * 2
    }
}

impl Default for PageParams {
    fn default() -> Self {
        A4_HELVETICA
    }
}

pub const A4: Size = Size { width: 595, height: 842 };

pub const FONT_SIZE: u32 = 12;
pub const LINE_HEIGHT: u32 = 14;

// picked by eye for 12pt Helvetica on A4, not derived from font metrics
pub const LINES_PER_PAGE: NonZeroUsize = NonZeroUsize::new(45).unwrap();

pub const A4_HELVETICA: PageParams = PageParams {
    size: A4,
    font: BaseFont::Helvetica,
    font_size: FONT_SIZE,
    left: 50,
    top: 800,
    line_height: LINE_HEIGHT,
    lines_per_page: LINES_PER_PAGE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a4_helvetica() {
        let p = PageParams::default();
        assert_eq!(p.size, Size { width: 595, height: 842 });
        assert_eq!(p.font.as_str(), "Helvetica");
        assert_eq!(p.lines_per_page.get(), 45);
        assert_eq!(p.title_gap(), 28);
    }
}
