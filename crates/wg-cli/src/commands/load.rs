use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use wg_core::load_save;
use wg_core::resolve::closest_match;

use super::Context;

pub fn run(ctx: &Context, save: &str) -> miette::Result<()> {
    let path = resolve_save(ctx, save)?;
    let session = load_save(&path, &ctx.config).into_diagnostic()?;
    super::play::run(ctx, session)
}

/// A path to an existing `.json` file is used as is; anything else names a
/// save in the saves directory.
fn resolve_save(ctx: &Context, save: &str) -> miette::Result<PathBuf> {
    let given = Path::new(save);
    if given.extension().is_some_and(|e| e == "json") && given.is_file() {
        return Ok(given.to_path_buf());
    }

    let path = ctx.save_path(save);
    if path.is_file() {
        return Ok(path);
    }

    let saves = super::list_saves(&ctx.saves)?;
    let hint = closest_match(saves.iter().map(|s| s.name.as_str()), save)
        .map(|known| format!(" (did you mean \"{known}\"?)"))
        .unwrap_or_default();
    miette::bail!("no save \"{save}\" in {}{hint}", ctx.saves.display())
}
