//! Plain-text PDF reports for deleted orders.
//!
//! The core is [`assembler`]: a title and a list of lines go in, a complete
//! PDF 1.4 file (pages, shared Helvetica font, xref table) comes out. The
//! remaining modules feed it from a blob store and put the result back.

pub mod alloc;
pub mod assembler;
pub mod backup;
pub mod config;
pub mod content;
pub mod error;
pub mod inspect;
pub mod page_params;
pub mod pager;
pub mod report;
pub mod sanitize;
pub mod store;
pub mod xref;

pub use assembler::{AssembledPdf, Assembler, assemble};
pub use error::{ReportError, Result};
