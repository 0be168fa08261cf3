//! Generate command handler.

use kiln::{
    DIAGNOSTIC_DISPLAY_CHARS, GenerationRequest, KilnConfig, KilnResult, build_pipeline,
    truncate_for_display,
};
use tracing::instrument;

/// Runs one generation and reports the outcome on stdout.
///
/// A category outside the fixed set fails before the backend is contacted.
#[instrument(skip_all, fields(category = %category))]
pub async fn handle_generate_command(
    config: &KilnConfig,
    description: String,
    category: String,
    name: Option<String>,
    url: Option<String>,
    image: Option<String>,
) -> KilnResult<()> {
    let request = GenerationRequest::parse(description, &category)?
        .with_name(name)
        .with_reference_url(url)
        .with_reference_image(image);
    let pipeline = build_pipeline(config).await?;

    println!(
        "Generating in {} with {} @ {}",
        request.category(),
        config.model(),
        config.base_url()
    );
    let outcome = pipeline.generate(&request).await?;

    println!("Written to {}", outcome.file_path().display());
    match outcome.validation().diagnostic() {
        None if *outcome.attempts() > 1 => println!("Repair succeeded"),
        None => {}
        Some(diagnostic) => println!(
            "Still has errors (component written anyway):\n{}",
            truncate_for_display(diagnostic, DIAGNOSTIC_DISPLAY_CHARS)
        ),
    }
    println!("Manifest updated: {}", pipeline.layout().manifest_path().display());
    Ok(())
}
