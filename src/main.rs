use std::process::ExitCode;

use clap::Parser;
use dtrename::{EditMode, Rename, rename, x11::X11Store};

/// Set the name of the current virtual desktop
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Set the name of the POS'th desktop, counting from 0, instead of the current desktop
    #[arg(short = 'd', long = "desktop", value_name = "POS")]
    position: Option<usize>,

    /// Insert a new desktop name into the current list, rather than overwriting the current desktop's name
    #[arg(short, long)]
    insert: bool,

    /// X display to connect to [default: $DISPLAY]
    #[arg(long)]
    display: Option<String>,

    /// New desktop name
    #[arg()]
    name: String,
}

impl Cli {
    fn request(&self) -> Rename {
        Rename {
            name: self.name.clone(),
            position: self.position,
            mode: if self.insert {
                EditMode::Insert
            } else {
                EditMode::Overwrite
            },
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dtrename: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> dtrename::Result<()> {
    let store = X11Store::connect(cli.display.as_deref())?;
    rename(&store, &cli.request())?;

    Ok(())
}
