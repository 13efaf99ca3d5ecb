use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::page_params::{BaseFont, LINES_PER_PAGE, PageParams};
use crate::report::ReportOptions;

/// Where backups live and where reports go
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Directory acting as the blob bucket
    #[arg(long, env = "BUCKET_DIR", default_value = "./bucket")]
    pub bucket: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Key prefix of the deleted-order backups
    #[arg(long, env = "DELETED_PREFIX", default_value = "deleted-orders/")]
    pub deleted_prefix: String,
    /// Key prefix the generated PDFs are stored under
    #[arg(long, env = "REPORTS_PREFIX", default_value = "reports/")]
    pub reports_prefix: String,
    /// Backup files read into one report (default: 200)
    #[arg(long, default_value_t = 200)]
    pub max_files: usize,
    /// Lines taken from the top of each backup file (default: 12)
    #[arg(long, default_value_t = 12)]
    pub lines_per_file: usize,
    /// Lifetime of the returned download reference, in seconds
    #[arg(long, env = "URL_EXPIRES_SECONDS", default_value_t = 3600)]
    pub url_expires_seconds: u64,
}

impl From<&ReportArgs> for ReportOptions {
    fn from(a: &ReportArgs) -> Self {
        ReportOptions {
            deleted_prefix: a.deleted_prefix.clone(),
            reports_prefix: a.reports_prefix.clone(),
            max_files: a.max_files,
            lines_per_file: a.lines_per_file,
            url_expires: Duration::from_secs(a.url_expires_seconds),
        }
    }
}

/// Page layout overrides; everything else stays at the A4 defaults
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Built-in font the text is set in
    #[arg(long, value_enum, default_value_t = BaseFont::Helvetica)]
    pub font: BaseFont,
    /// Text lines per page, excluding the title line (default: 45)
    #[arg(long, default_value_t = LINES_PER_PAGE)]
    pub lines_per_page: NonZeroUsize,
}

impl From<&PageArgs> for PageParams {
    fn from(a: &PageArgs) -> Self {
        PageParams { font: a.font, lines_per_page: a.lines_per_page, ..PageParams::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        report: ReportArgs,
        #[command(flatten)]
        page: PageArgs,
    }

    #[test]
    fn defaults_match_presets() {
        let cli = Cli::parse_from(["test"]);
        let opts = ReportOptions::from(&cli.report);
        assert_eq!(opts.max_files, ReportOptions::default().max_files);
        assert_eq!(opts.lines_per_file, 12);
        assert_eq!(PageParams::from(&cli.page), PageParams::default());
    }

    #[test]
    fn overrides_apply() {
        let cli = Cli::parse_from(["test", "--lines-per-page", "10", "--font", "courier", "--max-files", "5"]);
        let params = PageParams::from(&cli.page);
        assert_eq!(params.lines_per_page.get(), 10);
        assert_eq!(params.font, BaseFont::Courier);
        assert_eq!(ReportOptions::from(&cli.report).max_files, 5);
    }
}
