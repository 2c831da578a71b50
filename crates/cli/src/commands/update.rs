use crate::di::UseCases;
use anyhow::Context;

pub async fn run(use_cases: &UseCases) -> anyhow::Result<()> {
    use_cases
        .update
        .execute()
        .await
        .context("Updating destination records")?;

    println!("success");
    Ok(())
}
