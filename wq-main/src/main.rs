use std::env;

use anyhow::bail;
use wq_task::task_runner::TaskRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Some(task_config) = env::args().nth(1) else {
        bail!("usage: wq-main <task_config.ini>");
    };

    let runner = TaskRunner::new(&task_config)?;
    let summary = runner.start_task().await?;
    println!("{}", summary);
    Ok(())
}
