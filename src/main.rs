use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cite_master::extract::{extract_from_document, extract_from_url};
use cite_master::{format_manual_citation, Citation, CitationBuilder, CitationStyle, SourceType};

/// Cite Master - Generate citations in APA, MLA, Chicago, Harvard and IEEE styles
#[derive(Parser, Debug)]
#[command(name = "cite-master")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate citations in APA, MLA, Chicago, Harvard and IEEE styles", long_about = None)]
struct Cli {
    /// Enable verbose logging (-v, -vv for more)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Citation style (apa, mla, chicago, harvard, ieee)
    #[arg(long, short, global = true, default_value = "apa")]
    style: String,

    /// Render the citation in every style
    #[arg(long, global = true)]
    all: bool,

    /// Print the extracted citation as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a citation from a URL
    Url {
        /// The URL to cite
        url: String,
    },
    /// Generate a citation from a document file
    Doc {
        /// Path to the document (plain text or markdown)
        path: PathBuf,
    },
    /// Generate a citation from explicit fields
    Manual {
        /// Source type (book, website, journal, video)
        #[arg(long, default_value = "book")]
        source: String,
        #[arg(long)]
        authors: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        publisher: Option<String>,
        #[arg(long)]
        pages: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        access_date: Option<String>,
        #[arg(long)]
        journal: Option<String>,
        #[arg(long)]
        volume: Option<String>,
        #[arg(long)]
        issue: Option<String>,
        #[arg(long)]
        doi: Option<String>,
        #[arg(long)]
        channel: Option<String>,
        #[arg(long)]
        video_url: Option<String>,
    },
    /// List the supported citation styles
    Styles,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn render(mut citation: Citation, style: CitationStyle, all: bool, json: bool) -> Result<()> {
    let styles: Vec<CitationStyle> = if all {
        CitationStyle::ALL.to_vec()
    } else {
        vec![style]
    };

    for style in &styles {
        let rendered = format_manual_citation(&citation, citation.source_type, *style);
        citation.formatted.insert(*style, rendered);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&citation)?);
        return Ok(());
    }

    for style in &styles {
        if all {
            println!("{}:", style.name());
        }
        if let Some(rendered) = citation.rendered(*style) {
            println!("{rendered}");
        }
        if all {
            println!();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let style: CitationStyle = cli.style.parse()?;

    match cli.command {
        Commands::Url { url } => {
            let citation = extract_from_url(&url);
            render(citation, style, cli.all, cli.json)
        }
        Commands::Doc { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let citation = extract_from_document(&content, &filename);
            render(citation, style, cli.all, cli.json)
        }
        Commands::Manual {
            source,
            authors,
            title,
            year,
            publisher,
            pages,
            url,
            website,
            access_date,
            journal,
            volume,
            issue,
            doi,
            channel,
            video_url,
        } => {
            let source_type: SourceType = source.parse()?;
            let mut builder = CitationBuilder::new(source_type)
                .authors(authors)
                .title(title);
            if let Some(v) = year {
                builder = builder.year(v);
            }
            if let Some(v) = publisher {
                builder = builder.publisher(v);
            }
            if let Some(v) = pages {
                builder = builder.pages(v);
            }
            if let Some(v) = url {
                builder = builder.url(v);
            }
            if let Some(v) = website {
                builder = builder.website_name(v);
            }
            if let Some(v) = access_date {
                builder = builder.access_date(v);
            }
            if let Some(v) = journal {
                builder = builder.journal_name(v);
            }
            if let Some(v) = volume {
                builder = builder.volume(v);
            }
            if let Some(v) = issue {
                builder = builder.issue(v);
            }
            if let Some(v) = doi {
                builder = builder.doi(v);
            }
            if let Some(v) = channel {
                builder = builder.channel_name(v);
            }
            if let Some(v) = video_url {
                builder = builder.video_url(v);
            }
            render(builder.build(), style, cli.all, cli.json)
        }
        Commands::Styles => {
            for style in CitationStyle::ALL {
                println!("{:<10} {}", style.id(), style.name());
            }
            Ok(())
        }
    }
}
