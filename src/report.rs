//! Deleted-orders summary: gathers backup files from the store, lays them
//! out as text lines and stores the assembled PDF next to them.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::Serialize;

use crate::assembler::Assembler;
use crate::backup::BACKUP_PREFIX;
use crate::error::Result;
use crate::store::BlobStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub deleted_prefix: String,
    pub reports_prefix: String,
    /// backups read into one report; the rest are only counted
    pub max_files: usize,
    /// leading lines kept from each backup file
    pub lines_per_file: usize,
    pub url_expires: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            deleted_prefix: BACKUP_PREFIX.to_string(),
            reports_prefix: "reports/".to_string(),
            max_files: 200,
            lines_per_file: 12,
            url_expires: Duration::from_secs(3600),
        }
    }
}

/// What the caller gets back after a report was generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub message: String,
    pub pdf_key: String,
    pub download_url: String,
    pub pages: usize,
    pub files_found: usize,
    pub files_included: usize,
}

/// A backup file that made it into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    pub key: String,
    pub text: String,
}

/// `2026-10-19T08:30:00.000Z`
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn report_title(now: DateTime<Utc>) -> String {
    format!("Deleted Orders Summary ({})", iso_timestamp(now))
}

pub fn report_key(reports_prefix: &str, now: DateTime<Utc>) -> String {
    let stamp = iso_timestamp(now).replace([':', '.'], "-");
    format!("{reports_prefix}deleted-orders-summary-{stamp}.pdf")
}

/// Backup keys under `prefix`; anything that is not a `.txt` file is skipped.
pub fn collect_backup_keys<S: BlobStore + ?Sized>(store: &S, prefix: &str) -> Result<Vec<String>> {
    Ok(store.list(prefix)?.into_iter().filter(|k| k.ends_with(".txt")).collect())
}

pub fn report_lines(total_found: usize, entries: &[BackupEntry], opts: &ReportOptions) -> Vec<String> {
    let mut lines = vec![
        format!("Total deleted orders (TXT files found): {total_found}"),
        format!("Included in this PDF: {}", total_found.min(opts.max_files)),
        String::new(),
    ];

    for entry in entries {
        lines.push(format!("--- {} ---", entry.key));
        let text = entry.text.replace('\r', "");
        lines.extend(text.split('\n').take(opts.lines_per_file).map(str::to_string));
        lines.push(String::new());
    }
    lines
}

pub fn generate_report<S: BlobStore + ?Sized>(
    store: &S,
    assembler: &Assembler,
    opts: &ReportOptions,
    now: DateTime<Utc>,
) -> Result<ReportSummary> {
    let keys = collect_backup_keys(store, &opts.deleted_prefix)?;
    if keys.len() > opts.max_files {
        warn!("{} backups found, only the first {} are included", keys.len(), opts.max_files);
    }

    let mut entries = Vec::with_capacity(keys.len().min(opts.max_files));
    for key in keys.iter().take(opts.max_files) {
        let body = store.get(key)?;
        let text = String::from_utf8_lossy(&body).into_owned();
        entries.push(BackupEntry { key: key.clone(), text });
    }

    let lines = report_lines(keys.len(), &entries, opts);
    let pdf = assembler.assemble(&report_title(now), &lines);
    let pages = pdf.page_count();

    let pdf_key = report_key(&opts.reports_prefix, now);
    store.put(&pdf_key, &pdf.into_bytes(), "application/pdf")?;
    let download = store.download_ref(&pdf_key, opts.url_expires)?;

    info!("report {} written: {} page(s), {} backup(s)", pdf_key, pages, entries.len());
    Ok(ReportSummary {
        message: "PDF summary generated".to_string(),
        pdf_key,
        download_url: download.url,
        pages,
        files_found: keys.len(),
        files_included: entries.len(),
    })
}
