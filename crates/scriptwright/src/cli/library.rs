//! Library command handlers.

use super::commands::{LibraryCommands, OutputFormat};
use super::output::to_pretty_json;
use scriptwright::{
    GenerationResult, JsonFileLibrary, ScriptLibrary, ScriptwrightConfig, ScriptwrightResult,
    StorageError, StorageErrorKind,
};

/// Open the configured library file.
pub async fn open_library(config: &ScriptwrightConfig) -> ScriptwrightResult<JsonFileLibrary> {
    JsonFileLibrary::open(config.resolved_library_path()).await
}

/// Look up a saved result, failing if it does not exist.
pub async fn find_entry(
    library: &impl ScriptLibrary,
    id: &str,
) -> ScriptwrightResult<GenerationResult> {
    let entry = library
        .get(id)
        .await?
        .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())))?;
    Ok(entry)
}

/// Handle library commands.
pub async fn handle_library_command(
    cmd: LibraryCommands,
    config: &ScriptwrightConfig,
) -> ScriptwrightResult<()> {
    let library = open_library(config).await?;

    match cmd {
        LibraryCommands::List { format } => list_entries(&library, format).await,

        LibraryCommands::Show { id } => {
            let entry = find_entry(&library, &id).await?;
            println!("{}", to_pretty_json(&entry)?);
            Ok(())
        }

        LibraryCommands::Delete { id } => {
            if library.delete(&id).await? {
                println!("Deleted {}", id);
                Ok(())
            } else {
                Err(StorageError::new(StorageErrorKind::NotFound(id)).into())
            }
        }

        LibraryCommands::Bible { id } => {
            let entry = find_entry(&library, &id).await?;
            println!("{}", entry.series_bible_json()?);
            Ok(())
        }

        LibraryCommands::LastScene { id } => {
            let entry = find_entry(&library, &id).await?;
            println!("{}", entry.last_scene_json()?);
            Ok(())
        }
    }
}

async fn list_entries(library: &impl ScriptLibrary, format: OutputFormat) -> ScriptwrightResult<()> {
    let entries = library.list().await?;

    match format {
        OutputFormat::Json => println!("{}", to_pretty_json(&entries)?),
        OutputFormat::IdOnly => {
            for entry in &entries {
                println!("{}", entry.id);
            }
        }
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for entry in &entries {
                println!("{}  {}", entry.id, entry.script.seo.title);
                println!(
                    "    {} scenes, {} characters, style: {}",
                    entry.script.scene_count(),
                    entry.series_bible.characters.len(),
                    entry.series_bible.visual_style
                );
            }
            println!("{:-<80}", "");
            println!("Total: {} saved scripts", entries.len());
        }
    }

    Ok(())
}
