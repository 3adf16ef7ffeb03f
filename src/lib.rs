//! Structured report rendering.
//!
//! Turns semi-structured report text (`#` headings, `-`/`*` bullets,
//! `1.` numbered items, `**bold**`, `*italic*` and `` `code` `` spans) into
//! typed sections of classified, tokenized lines, and renders them as an
//! outline, JSON, Typst markup or PDF.

mod config;
mod error;
mod inline;
mod node;
mod presentation;
mod section;
mod segmenter;
mod typst;

pub use config::{Config, PageConfig, PresentationConfig};
pub use error::{Error, Result};
pub use inline::{classify_line, render_line, tokenize_inline};
pub use node::{NodeKind, RenderNode, SpanStyle, TextSpan};
pub use presentation::{
    Appearance, ExpandState, Layout, RenderedSection, Report, ReportStats,
};
pub use section::{Section, SectionType};
pub use segmenter::{MAX_LEVEL, parse_heading, segment};

use tracing::debug;
use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Segment and render report text for display.
pub fn render_report(text: &str, config: &Config) -> Report {
    Report::build(text, &config.presentation)
}

/// Convert report text to Typst markup.
pub fn report_to_typst(text: &str, config: &Config) -> String {
    let report = render_report(text, config);
    typst::sections_to_typst(&report, config)
}

/// Convert report text to PDF bytes.
pub fn report_to_pdf(text: &str, config: &Config) -> Result<Vec<u8>> {
    use typst_library::layout::PagedDocument;

    let typst_content = report_to_typst(text, config);
    debug!(bytes = typst_content.len(), "compiling typst");

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Typst(format!("{:?}", e)))?;

    typst_pdf::pdf(&doc, &PdfOptions::default()).map_err(|e| Error::Pdf(format!("{:?}", e)))
}
