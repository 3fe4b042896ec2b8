use std::path::Path;

use colored::Colorize;
use miette::IntoDiagnostic;
use wg_core::{Scene, SceneGraph, chapter_file_name, load_player, load_save, read_chapter};

use super::Context;

/// Validate a chapter, or a save when the document carries a player.
pub fn run(ctx: &Context, file: &Path) -> miette::Result<()> {
    let (graph, start, next_file) = if load_player(file).is_ok() {
        let session = load_save(file, &ctx.config).into_diagnostic()?;
        println!("  All checks passed for save '{}'.", file.display());
        println!(
            "  {} playing {}",
            session.player().name,
            super::game_title(session.game_name())
        );
        let next_file = session
            .next_chapter()
            .map(|next| ctx.chapter_path(session.game_name(), next));
        (
            session.graph().clone(),
            session.current_scene().to_string(),
            next_file,
        )
    } else {
        let chapter = read_chapter(file, &ctx.config).into_diagnostic()?;
        println!("  All checks passed for '{}'.", file.display());
        let next_file = chapter
            .next_chapter
            .as_deref()
            .map(|next| file.with_file_name(chapter_file_name(next)));
        (chapter.graph, chapter.start, next_file)
    };

    print_summary(&graph, &start);
    if let Some(next_file) = next_file {
        report_next_chapter(&next_file);
    }

    Ok(())
}

fn print_summary(graph: &SceneGraph, start: &str) {
    let (mut nodes, mut leaves, mut termini) = (0, 0, 0);
    for scene in graph.iter() {
        match scene {
            Scene::Node(_) => nodes += 1,
            Scene::Leaf(_) => leaves += 1,
            Scene::Terminus(_) => termini += 1,
        }
    }

    println!(
        "  {} scenes ({nodes} nodes, {leaves} leaves, {termini} termini), starting at \"{start}\"",
        graph.len(),
    );
}

fn report_next_chapter(next_file: &Path) {
    if next_file.is_file() {
        println!("  Continues with {}", next_file.display());
    } else {
        println!(
            "  {} next chapter {} not found",
            "warning:".yellow(),
            next_file.display()
        );
    }
}
