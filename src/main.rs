use anyhow::{Context, Result};
use clap::Parser;
use cuedeck::autocue::GenreHint;
use cuedeck::export::{export_document, suggested_filename};
use cuedeck::render::{beat_grid, envelope};
use cuedeck::{AutoCueConfig, Session, TrackMetadata};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cuedeck")]
#[command(about = "Place hot cues on a track and export them as rekordbox XML", long_about = None)]
struct Args {
    /// Path to the audio file to load
    audio: PathBuf,

    /// Artist name for the export metadata
    #[arg(long, default_value = "Unknown")]
    artist: String,

    /// Track title for the export metadata
    #[arg(long, default_value = "Unknown")]
    title: String,

    /// Track tempo in BPM (0 = unknown, disables beat grid and auto-cue)
    #[arg(long, default_value_t = 0)]
    bpm: u32,

    /// Musical key for the export metadata
    #[arg(long, default_value = "Unknown")]
    key: String,

    /// Manual cue point as "SECONDS[:NAME]" (can be repeated)
    #[arg(long = "cue")]
    cues: Vec<String>,

    /// Place cues automatically from phrase structure and energy analysis
    #[arg(long)]
    auto_cue: bool,

    /// Genre for auto-cue placement (auto, dnb, house, techno, hiphop, other)
    #[arg(long, default_value = "auto")]
    genre: GenreHint,

    /// Bars per phrase for auto-cue placement
    #[arg(long, default_value_t = 16)]
    phrase_length: u32,

    /// Maximum number of cues auto-cue may leave in place
    #[arg(long, default_value_t = 8)]
    max_cues: usize,

    /// Skip the pre-drop cues auto-cue normally adds before each drop
    #[arg(long)]
    no_pre_drop: bool,

    /// Keep manual cues when auto-cue runs instead of replacing them
    #[arg(long)]
    keep_existing: bool,

    /// Print an ASCII waveform strip of the given width
    #[arg(long, value_name = "WIDTH")]
    preview: Option<u32>,

    /// Output path for the XML document (default: "{artist} - {title} - Hot Cues.xml")
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let metadata = TrackMetadata::new(args.artist.clone(), args.title.clone())
        .with_bpm(args.bpm)
        .with_key(args.key.clone());

    let mut session = Session::new();
    let ticket = session.begin_load(metadata);

    log::info!("Loading {:?}", args.audio);
    let bytes = std::fs::read(&args.audio)
        .with_context(|| format!("Failed to read audio file: {:?}", args.audio))?;

    let buffer = cuedeck::audio::decode_blob(&bytes)
        .with_context(|| format!("Failed to decode audio file: {:?}", args.audio))?;
    session.commit_buffer(ticket, buffer);

    log::info!(
        "Loaded {} ({} BPM, key {})",
        session.metadata().total_time_display(),
        session.metadata().bpm,
        session.metadata().key
    );

    let grid = beat_grid(args.bpm, session.duration_seconds());
    if !grid.is_empty() {
        log::info!("Beat grid: {} beats, {} bars", grid.len(), grid.len().div_ceil(4));
    }

    if let Some(width) = args.preview {
        print_preview(&session, width);
    }

    for spec in &args.cues {
        let (time, name) = parse_cue_spec(spec)
            .with_context(|| format!("Invalid --cue value: {:?}", spec))?;
        let cue = session.cues_mut().create(time, name.as_deref());
        log::info!("Cue {} ({}) at {:.3}s", cue.id, cue.name, cue.time_seconds);
    }

    if args.auto_cue {
        let config = AutoCueConfig::new()
            .with_genre(args.genre)
            .with_phrase_length(args.phrase_length)
            .with_max_cues(args.max_cues)
            .with_pre_drop(!args.no_pre_drop)
            .with_clear_existing(!args.keep_existing);

        let placed = session.auto_cue(&config);
        log::info!("Auto-cue placed {} cue(s)", placed.len());
    }

    for cue in session.cues().list() {
        println!(
            "{:>8.3}s  {}",
            cue.time_seconds,
            cue.name
        );
    }

    if session.cues().is_empty() {
        log::warn!("No hot cues to export; skipping XML output");
        return Ok(());
    }

    let xml = export_document(session.metadata(), session.cues().list())?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(suggested_filename(session.metadata())));
    std::fs::write(&output, &xml)
        .with_context(|| format!("Failed to write export: {:?}", output))?;

    log::info!("Exported {} cue(s) to {:?}", session.cues().len(), output);
    Ok(())
}

/// Parse "SECONDS" or "SECONDS:NAME" into a cue position.
fn parse_cue_spec(spec: &str) -> Result<(f64, Option<String>)> {
    let (time_part, name) = match spec.split_once(':') {
        Some((time, name)) => (time, Some(name.to_string())),
        None => (spec, None),
    };
    let time: f64 = time_part
        .trim()
        .parse()
        .with_context(|| format!("Invalid cue time: {:?}", time_part))?;
    Ok((time, name))
}

/// Render the waveform envelope as a row of block characters.
fn print_preview(session: &Session, width: u32) {
    let Some(buffer) = session.buffer() else {
        return;
    };

    const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    let line: String = envelope(buffer, width)
        .iter()
        .map(|column| {
            let level = (column.amplitude() * (BLOCKS.len() - 1) as f32).round() as usize;
            BLOCKS[level.min(BLOCKS.len() - 1)]
        })
        .collect();

    println!("{}", line);
}
