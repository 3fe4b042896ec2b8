use miette::{IntoDiagnostic, WrapErr};
use wg_core::resolve::closest_match;
use wg_core::{Session, load_player, read_chapter};

use super::{Context, DEFAULT_PLAYER_FILE, FIRST_CHAPTER};

pub fn run(ctx: &Context, game: &str, name: Option<&str>) -> miette::Result<()> {
    // Accept the title as shown by `games`
    let game = game.replace(' ', "_");

    let games = super::list_games(&ctx.data)?;
    if !games.contains(&game) {
        let hint = closest_match(games.iter().map(String::as_str), &game)
            .map(|known| format!(" (did you mean \"{known}\"?)"))
            .unwrap_or_default();
        miette::bail!("no game \"{game}\" in {}{hint}", ctx.data.display());
    }

    let dir = ctx.game_dir(&game);
    let mut player = load_player(dir.join(DEFAULT_PLAYER_FILE))
        .into_diagnostic()
        .wrap_err("cannot load the default player")?;
    if let Some(name) = name {
        player.name = name.to_string();
    }

    let chapter = read_chapter(ctx.chapter_path(&game, FIRST_CHAPTER), &ctx.config).into_diagnostic()?;
    let mut session = Session::new(player, chapter);
    session.set_game_name(game);

    super::play::run(ctx, session)
}
