use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use blog_podcast::{
    openrouter::OpenRouterAgent, scrape::firecrawl::FirecrawlClient,
    tracing::init_tracing_subscriber, tts::elevenlabs::ElevenLabsClient, ApiKeys, ArtifactStore,
    CompletionModel, FsArtifactStore, PipelineRequest, PodcastProcessorBuilder,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "blog-podcast", about = "Turn a blog post into a narrated podcast")]
struct Cli {
    /// Blog or article URL to narrate
    #[arg(default_value = "")]
    url: String,

    /// Completion model routed through the gateway
    #[arg(long, value_enum, default_value_t = CompletionModel::default())]
    model: CompletionModel,

    /// OpenRouter API key
    #[arg(long, env = ApiKeys::COMPLETION_ENV, default_value = "", hide_env_values = true)]
    openrouter_api_key: String,

    /// ElevenLabs API key
    #[arg(long, env = ApiKeys::SPEECH_ENV, default_value = "", hide_env_values = true)]
    elevenlabs_api_key: String,

    /// Firecrawl API key
    #[arg(long, env = ApiKeys::SCRAPE_ENV, default_value = "", hide_env_values = true)]
    firecrawl_api_key: String,

    /// Directory generated podcasts are written to
    #[arg(long, default_value = FsArtifactStore::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Override the completion gateway base URL
    #[arg(long)]
    gateway_url: Option<String>,

    /// Also save the podcast here (a directory gets `generated_podcast.wav`)
    #[arg(long)]
    download: Option<PathBuf>,
}

const DOWNLOAD_FILENAME: &str = "generated_podcast.wav";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let api_keys = ApiKeys::new(
        cli.firecrawl_api_key,
        cli.openrouter_api_key,
        cli.elevenlabs_api_key,
    );
    if !api_keys.all_present() {
        eprintln!("warning: Please enter all required API keys to enable podcast generation.");
        eprintln!("         missing: {}", api_keys.missing().join(", "));
        return Ok(ExitCode::from(2));
    }

    let store = FsArtifactStore::new(&cli.output_dir);
    let synthesizer = ElevenLabsClient::new().with_target_directory(&cli.output_dir);
    let mut agent = OpenRouterAgent::new(synthesizer);
    if let Some(gateway_url) = cli.gateway_url {
        agent = agent.with_base_url(gateway_url);
    }

    let processor = PodcastProcessorBuilder::new()
        .scraper(FirecrawlClient::new())
        .narrator(agent)
        .store(&store)
        .build();

    let request = PipelineRequest::new(cli.url, api_keys).with_model(cli.model);

    println!("Processing... Scraping blog, summarizing and generating podcast");
    let artifact = match processor.run(&request).await {
        Ok(artifact) => artifact,
        Err(e) if e.is_validation() => {
            eprintln!("warning: {e}");
            return Ok(ExitCode::from(2));
        }
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("Podcast generated successfully!");
    println!(
        "  {} ({} bytes, {})",
        artifact.path.display(),
        artifact.len(),
        blog_podcast::AudioArtifact::MIME_TYPE
    );

    if let Some(target) = cli.download {
        let target = if target.is_dir() {
            target.join(DOWNLOAD_FILENAME)
        } else {
            target
        };
        let bytes = store.load(&artifact).await?;
        tokio::fs::write(&target, bytes)
            .await
            .with_context(|| format!("Failed to write download to {}", target.display()))?;
        println!("  downloaded to {}", target.display());
    }

    Ok(ExitCode::SUCCESS)
}
