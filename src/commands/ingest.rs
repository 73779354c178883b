use super::{CommandResult, Session};
use crate::database::ingestion::{print_ingestion_summary, BatchIngester};
use std::path::Path;

pub async fn ingest(session: &Session, file: &Path, force: bool) -> CommandResult<()> {
    let summary = BatchIngester::new(&session.log, &session.election)
        .ingest_file(file, &session.caller, force)
        .await?;

    print_ingestion_summary(&summary);
    Ok(())
}
