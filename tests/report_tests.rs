use chrono::{TimeZone, Utc};

use orders_pdf::Assembler;
use orders_pdf::backup::{DeletedOrder, backup_deleted_order};
use orders_pdf::inspect::inspect;
use orders_pdf::report::{ReportOptions, generate_report};
use orders_pdf::store::{BlobStore, LocalBlobStore};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn order(id: &str, price: &str) -> DeletedOrder {
    serde_json::from_str(&format!(
        r#"{{"orderId":"{id}","orderDescription":"Item {id}","price":{price},"creationDate":"2026-01-0{id}"}}"#
    ))
    .unwrap()
}

#[test]
fn backups_end_up_in_the_report_pdf() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path());
    let deleted_at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();

    let k1 = backup_deleted_order(&store, &order("1", "5"), deleted_at).unwrap();
    let k2 = backup_deleted_order(&store, &order("2", "\"7.50\""), deleted_at).unwrap();
    store.put("deleted-orders/notes.json", b"{}", "application/json").unwrap();

    let now = Utc.with_ymd_and_hms(2026, 10, 19, 9, 15, 30).unwrap();
    let summary = generate_report(&store, &Assembler::default(), &ReportOptions::default(), now).unwrap();

    assert_eq!(summary.pdf_key, "reports/deleted-orders-summary-2026-10-19T09-15-30-000Z.pdf");
    assert_eq!(summary.files_found, 2);
    assert_eq!(summary.files_included, 2);
    assert_eq!(summary.pages, 1);
    assert!(summary.download_url.starts_with("file://"));

    let pdf = store.get(&summary.pdf_key).unwrap();
    let parsed = inspect(&pdf).unwrap();
    let text = &parsed.pages[0].text;
    assert_eq!(text[0], "Deleted Orders Summary (2026-10-19T09:15:30.000Z)  (Page 1 of 1)");
    assert_eq!(text[1], "Total deleted orders (TXT files found): 2");
    assert_eq!(text[2], "Included in this PDF: 2");
    assert!(text.contains(&format!("--- {k1} ---")));
    assert!(text.contains(&format!("--- {k2} ---")));
    assert!(text.contains(&"Price: 5".to_string()));
    assert!(text.contains(&"Price: 7.50".to_string()));
    assert!(text.contains(&"Deleted At: 2026-10-18T12:00:00.000Z".to_string()));
}

#[test]
fn file_cap_limits_included_backups() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path());
    for i in 0..5 {
        store.put(&format!("deleted-orders/{i}.txt"), b"x", "text/plain").unwrap();
    }

    let opts = ReportOptions { max_files: 3, ..Default::default() };
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
    let summary = generate_report(&store, &Assembler::default(), &opts, now).unwrap();
    assert_eq!(summary.files_found, 5);
    assert_eq!(summary.files_included, 3);

    let parsed = inspect(&store.get(&summary.pdf_key).unwrap()).unwrap();
    let text = &parsed.pages[0].text;
    assert_eq!(text[2], "Included in this PDF: 3");
    assert!(text.contains(&"--- deleted-orders/2.txt ---".to_string()));
    assert!(!text.contains(&"--- deleted-orders/3.txt ---".to_string()));
}

#[test]
fn empty_bucket_still_renders_a_page() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalBlobStore::new(dir.path());
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
    let summary = generate_report(&store, &Assembler::default(), &ReportOptions::default(), now).unwrap();
    assert_eq!(summary.pages, 1);
    assert_eq!(summary.files_found, 0);
}
