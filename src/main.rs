use anyhow::Result;

fn main() -> Result<()> {
    blockfall::app::run()
}
