use crate::config::Config;
use crate::ui::blog_done;
use anyhow::Result;

pub fn init(force: bool) -> Result<()> {
    let path = Config::init(force)?;
    blog_done!("Created", "Configuration at {}", path.display());
    Ok(())
}
