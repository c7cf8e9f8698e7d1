//! # Filesystem Document Store Tests

use anychat::providers::storage::{fs::FsDocumentStore, DocumentStore};
use anyhow::Result;

#[tokio::test]
async fn test_list_and_fetch_text_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("pricing.txt"), "Refunds within 30 days.")?;
    std::fs::write(dir.path().join("faq.md"), "# FAQ\n\nWe ship worldwide.")?;

    let store = FsDocumentStore::new(dir.path());
    let files = store.list().await?;

    assert_eq!(files.len(), 2);
    // Listings are sorted by filename for stability.
    assert_eq!(files[0].filename, "faq.md");
    assert_eq!(files[1].filename, "pricing.txt");
    assert_eq!(files[1].file_type, "txt");
    assert!(files.iter().all(|f| f.content.is_none()));

    let content = store.fetch(&files[1].file_path).await?;
    assert_eq!(content.as_deref(), Some("Refunds within 30 days."));

    Ok(())
}

#[tokio::test]
async fn test_listing_ids_are_deterministic() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("notes.txt"), "note")?;

    let store = FsDocumentStore::new(dir.path());
    let first = store.list().await?;
    let second = store.list().await?;
    assert_eq!(first[0].id, second[0].id);

    Ok(())
}

#[tokio::test]
async fn test_binary_and_missing_files_are_unavailable() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("scan.pdf"), b"%PDF-1.4")?;

    let store = FsDocumentStore::new(dir.path());

    // Binary formats are not extracted here; the store reports no content.
    let pdf_path = dir.path().join("scan.pdf").display().to_string();
    assert_eq!(store.fetch(&pdf_path).await?, None);

    // A path that no longer exists is also "no content", not an error.
    let gone = dir.path().join("gone.txt").display().to_string();
    assert_eq!(store.fetch(&gone).await?, None);

    Ok(())
}

#[tokio::test]
async fn test_missing_root_lists_empty() -> Result<()> {
    let store = FsDocumentStore::new("/nonexistent/anychat-test-root");
    assert!(store.list().await?.is_empty());
    Ok(())
}
