use comfy_table::{ContentArrangement, Table};

use super::{Context, game_title};

pub fn run(ctx: &Context) -> miette::Result<()> {
    let games = super::list_games(&ctx.data)?;

    if games.is_empty() {
        println!("  No games found in {}.", ctx.data.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Game", "Start with"]);

    for (i, game) in games.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            game_title(game),
            format!("wordgame new {game}"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} games", games.len());

    Ok(())
}
