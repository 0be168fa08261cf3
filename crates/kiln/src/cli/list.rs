//! List and categories command handlers.

use kiln::{Category, KilnConfig, KilnResult, ManifestStore};

/// Prints manifest entries, optionally restricted to one category.
pub async fn handle_list_command(config: &KilnConfig, category: Option<String>) -> KilnResult<()> {
    let filter = category.as_deref().map(Category::from_name).transpose()?;
    let store = ManifestStore::new(config.layout().manifest_path().clone());
    let entries = store.load().await?;

    let mut shown = 0;
    for entry in entries
        .iter()
        .filter(|e| filter.is_none_or(|c| *e.category() == c))
    {
        shown += 1;
        println!(
            "{:<28} {:<20} {}  {}",
            entry.name(),
            entry.category(),
            entry.generated_at().format("%Y-%m-%d %H:%M"),
            entry.prompt()
        );
    }

    if shown == 0 {
        println!("No components generated yet");
    }
    Ok(())
}

/// Prints the fixed category names, default first.
pub fn handle_categories_command() {
    for name in Category::names() {
        println!("{}", name);
    }
}
