use comfy_table::{ContentArrangement, Table};
use wg_core::load_save;

use super::{Context, game_title};

pub fn run(ctx: &Context) -> miette::Result<()> {
    let saves = super::list_saves(&ctx.saves)?;

    if saves.is_empty() {
        println!("  No saves found in {}.", ctx.saves.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Save", "Game", "Player", "Scene", "Modified"]);

    for save in &saves {
        let (game, player, scene) = match load_save(&save.path, &ctx.config) {
            Ok(session) => (
                game_title(session.game_name()),
                session.player().name.clone(),
                session.current_scene().to_string(),
            ),
            Err(e) => {
                tracing::warn!(path = %save.path.display(), error = %e, "unreadable save");
                ("(unreadable)".to_string(), "-".to_string(), "-".to_string())
            }
        };
        table.add_row(vec![
            save.name.clone(),
            game,
            player,
            scene,
            save.modified.format("%d/%m/%Y %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} saves", saves.len());

    Ok(())
}
