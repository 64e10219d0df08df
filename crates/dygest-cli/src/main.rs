use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use dygest_core::{
    ClaudeClient, ClaudeConfig, Digest, Language, download_video, extract_video_id,
    fetch_transcript, format_digest_readable,
};

/// CLI wrapper for Language enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliLanguage {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Russian,
    Chinese,
}

impl From<CliLanguage> for Language {
    fn from(cli: CliLanguage) -> Self {
        match cli {
            CliLanguage::English => Language::English,
            CliLanguage::German => Language::German,
            CliLanguage::French => Language::French,
            CliLanguage::Spanish => Language::Spanish,
            CliLanguage::Italian => Language::Italian,
            CliLanguage::Japanese => Language::Japanese,
            CliLanguage::Korean => Language::Korean,
            CliLanguage::Portuguese => Language::Portuguese,
            CliLanguage::Russian => Language::Russian,
            CliLanguage::Chinese => Language::Chinese,
        }
    }
}

#[derive(Parser)]
#[command(name = "dygest")]
#[command(about = "Summarize a YouTube video with Claude, generate a title, and download it")]
struct Cli {
    /// YouTube video URL
    url: String,

    /// Transcript and output language
    #[arg(short, long, default_value = "english")]
    lang: CliLanguage,

    /// Skip downloading the video file
    #[arg(long)]
    no_download: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let language: Language = cli.lang.into();

    // Validate API key early, before any network call
    let config = match ClaudeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    let client = ClaudeClient::new(config);

    println!(
        "\n{}  {}\n",
        style("dygest").cyan().bold(),
        style("Summarize and Download YouTube Videos").dim()
    );

    // Step 1: Extract video id
    let video_id = extract_video_id(&cli.url)?;
    println!(
        "{} Video id: {}",
        style("✓").green().bold(),
        style(&video_id).dim()
    );

    // Step 2: Fetch transcript
    let spinner = create_spinner(&format!("Fetching {} transcript...", language.name()));
    let transcript = fetch_transcript(&video_id, language.code()).await?;
    spinner.finish_with_message(format!(
        "{} Transcript fetched: {} chars",
        style("✓").green().bold(),
        transcript.chars().count()
    ));

    // Step 3: Summarize
    let spinner = create_spinner(&format!("Summarizing in {}...", language.name()));
    let summary = client.summarize(&transcript, language).await?;
    spinner.finish_with_message(format!("{} Summary generated", style("✓").green().bold()));

    // Step 4: Generate title
    let spinner = create_spinner("Generating video title...");
    let title = client.generate_title(&summary, language).await?;
    spinner.finish_with_message(format!(
        "{} Title: {}",
        style("✓").green().bold(),
        style(title.trim_end()).yellow()
    ));

    // Step 5: Download (unless disabled)
    let video_path = if cli.no_download {
        None
    } else {
        let spinner = create_spinner("Downloading video... This may take a while.");
        let path = download_video(&cli.url, &title).await?;
        spinner.finish_with_message(format!(
            "{} Downloaded: {}",
            style("✓").green().bold(),
            style(path.display()).dim()
        ));
        Some(path)
    };

    let digest = Digest {
        video_id,
        transcript,
        summary,
        title,
        video_path,
    };

    println!("\n{}", style("─".repeat(60)).dim());
    println!("{}", format_digest_readable(&digest));

    Ok(())
}
