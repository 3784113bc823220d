use std::{path::PathBuf, thread, time::Duration};

use clap::{Parser, Subcommand};
use showcase_core::{
    render, AppConfig, CarouselController, IndexChange, PlaybackClock, ProjectFilter,
    ProjectGallery, ScriptStep, SiteContent, SkillBoard, TerminalTyper, Testimonial,
};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> showcase_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::from_path(path)?,
        None => AppConfig::default(),
    };
    let content = match &cli.content {
        Some(path) => SiteContent::from_path(path)?,
        None => SiteContent::demo(),
    };

    match cli.command {
        Commands::Testimonials { seconds } => run_testimonials(&config, content, seconds),
        Commands::Simulate { steps } => run_simulation(&config, content, &steps),
        Commands::About => run_about(&config, content),
        Commands::Projects { filter, show } => run_projects(content, filter.as_deref(), show),
        Commands::Skills { category } => run_skills(content, category),
    }
}

fn testimonial_carousel(
    config: &AppConfig,
    content: SiteContent,
) -> showcase_core::Result<CarouselController<Testimonial>> {
    let mut carousel = CarouselController::with_config(content.testimonials, &config.carousel)?;
    let snapshot = carousel.items().to_vec();
    carousel.set_observer(move |change: IndexChange| {
        let card = render::render_testimonial(
            &snapshot[change.index],
            change.index,
            snapshot.len(),
            change.direction,
        );
        println!("{card}\n");
    });
    Ok(carousel)
}

fn run_testimonials(
    config: &AppConfig,
    content: SiteContent,
    seconds: u64,
) -> showcase_core::Result<()> {
    tracing::info!(seconds, "playing testimonial carousel");

    let mut carousel = testimonial_carousel(config, content)?;
    println!(
        "{}\n",
        render::render_testimonial(
            carousel.current(),
            carousel.index(),
            carousel.len(),
            carousel.direction()
        )
    );

    let mut clock = PlaybackClock::start();
    let deadline = Duration::from_secs(seconds);
    while clock.elapsed() < deadline {
        thread::sleep(FRAME);
        carousel.advance_time(clock.lap());
    }

    carousel.teardown();
    Ok(())
}

fn run_simulation(
    config: &AppConfig,
    content: SiteContent,
    raw_steps: &[String],
) -> showcase_core::Result<()> {
    let steps = raw_steps
        .iter()
        .map(|raw| raw.parse::<ScriptStep>())
        .collect::<showcase_core::Result<Vec<_>>>()?;
    tracing::info!(steps = steps.len(), "replaying carousel script");

    let mut carousel = testimonial_carousel(config, content)?;
    let rejected = showcase_core::run_script(&mut carousel, &steps)?;
    if rejected > 0 {
        tracing::warn!(rejected, "some scripted steps were out of range");
    }
    println!(
        "final index {} of {} ({:?})",
        carousel.index(),
        carousel.len(),
        carousel.mode()
    );
    Ok(())
}

fn run_about(config: &AppConfig, content: SiteContent) -> showcase_core::Result<()> {
    let mut typer = TerminalTyper::new(content.terminal_lines, &config.typewriter)?;
    let mut clock = PlaybackClock::start();
    let mut printed = 0;

    while !typer.is_finished() {
        thread::sleep(FRAME);
        if typer.advance(clock.lap()) > 0 {
            let text = typer.displayed_text();
            print!("{}", &text[printed..]);
            printed = text.len();
        }
    }
    tracing::debug!(elapsed = ?clock.elapsed(), "terminal script finished");
    Ok(())
}

fn run_projects(
    content: SiteContent,
    filter: Option<&str>,
    show: Option<u32>,
) -> showcase_core::Result<()> {
    let mut gallery = ProjectGallery::new(content.projects);
    if let Some(filter) = filter {
        gallery.set_filter(filter.parse::<ProjectFilter>()?);
    }

    let visible = gallery.visible();
    if visible.is_empty() {
        println!(
            "no projects match `{}` (try {})",
            gallery.filter(),
            ProjectFilter::PRESETS.join(", ")
        );
    }
    for project in visible {
        println!("{}\n", render::render_project_card(project));
    }

    if let Some(id) = show {
        let project = gallery.open(id)?;
        println!("{}", render::render_project_details(project));
        gallery.close();
    }
    Ok(())
}

fn run_skills(content: SiteContent, category: Option<usize>) -> showcase_core::Result<()> {
    let mut board = SkillBoard::new(content.skills);
    match category {
        Some(index) => {
            board.select(index)?;
            if let Some(active) = board.active() {
                print!("{}", render::render_skill_category(active));
            }
        }
        None => {
            for category in board.categories() {
                println!("{}", render::render_skill_category(category));
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Portfolio showcase sections in the terminal", long_about = None)]
struct Cli {
    /// JSON configuration file; defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON content file; the built-in demo content is used when omitted.
    #[arg(long, global = true)]
    content: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the testimonial carousel in real time.
    Testimonials {
        /// How long to keep the carousel running.
        #[arg(short, long, default_value_t = 15)]
        seconds: u64,
    },
    /// Replay carousel interactions without waiting on the wall clock.
    Simulate {
        /// Steps such as `next`, `prev`, `goto:2`, `pause`, `resume`,
        /// `swipe:-50:-300` or `wait:5000`.
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
    },
    /// Type out the about section's terminal script.
    About,
    /// List projects, optionally filtered, and show one in detail.
    Projects {
        /// `all`, `featured` or a technology keyword.
        #[arg(short, long)]
        filter: Option<String>,
        /// Project id to open in the detail view.
        #[arg(long)]
        show: Option<u32>,
    },
    /// Print skill levels for every category or a single one.
    Skills {
        /// Zero-based category index.
        #[arg(short, long)]
        category: Option<usize>,
    },
}
